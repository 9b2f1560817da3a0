//! Override layer over the built-in data
//!
//! [`SiteManager`] reads optional override files and env vars, checks them
//! against the site schema and hands out effective values. It never touches
//! the built-in records.

mod builder;
mod core;
mod env;
mod io;
mod operations;

pub use self::builder::SiteManagerBuilder;
pub use self::core::SiteManager;
pub use self::operations::ValidationIssue;

impl SiteManager {
    /// Start building a JSON-backed manager
    pub fn builder(site_name: impl Into<String>) -> SiteManagerBuilder {
        SiteManagerBuilder::new(site_name)
    }
}
