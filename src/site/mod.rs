//! Site-wide settings: profile, social links, template flags and SEO
//!
//! The four records are independent. Each `Default` impl is the built-in
//! literal data; [`profile`], [`social`], [`template`] and [`seo`] hand out
//! the shared built-in instances.
//!
//! Serialized key names are the ones the page templates read
//! (`fullName`, `excerptLength`, ...), so a record serialized here can be
//! handed to the presentation layer as-is.

mod defaults;
mod schema;

pub(crate) use self::schema::site_schema;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;

static BUILTIN: LazyLock<SiteSettings> = LazyLock::new(SiteSettings::default);

// =============================================================================
// Profile
// =============================================================================

/// Identity shown in the site header and CV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Empty hides the subtitle
    pub title: String,
    pub institute: String,
    pub author_name: String,
    pub research_areas: Vec<ResearchArea>,
}

impl Profile {
    /// Field tags of the research areas, in display order
    pub fn research_fields(&self) -> impl Iterator<Item = &str> {
        self.research_areas.iter().map(|area| area.field.as_str())
    }

    /// Research areas tagged with `field`
    pub fn areas_in<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ResearchArea> {
        self.research_areas
            .iter()
            .filter(move |area| area.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchArea {
    pub title: String,
    pub description: String,
    /// Short category tag used for grouping and filtering; open-ended
    pub field: String,
}

impl ResearchArea {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            field: field.into(),
        }
    }
}

// =============================================================================
// Social links
// =============================================================================

/// Platforms the site can link to, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Email,
    Linkedin,
    X,
    Bluesky,
    Github,
    Gitlab,
    Scholar,
    Inspire,
    Arxiv,
    Orcid,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 10] = [
        SocialPlatform::Email,
        SocialPlatform::Linkedin,
        SocialPlatform::X,
        SocialPlatform::Bluesky,
        SocialPlatform::Github,
        SocialPlatform::Gitlab,
        SocialPlatform::Scholar,
        SocialPlatform::Inspire,
        SocialPlatform::Arxiv,
        SocialPlatform::Orcid,
    ];

    /// Key used in serialized settings
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Email => "email",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::X => "x",
            SocialPlatform::Bluesky => "bluesky",
            SocialPlatform::Github => "github",
            SocialPlatform::Gitlab => "gitlab",
            SocialPlatform::Scholar => "scholar",
            SocialPlatform::Inspire => "inspire",
            SocialPlatform::Arxiv => "arxiv",
            SocialPlatform::Orcid => "orcid",
        }
    }

    /// Display name for link titles
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Email => "Email",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::X => "X",
            SocialPlatform::Bluesky => "Bluesky",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Gitlab => "GitLab",
            SocialPlatform::Scholar => "Google Scholar",
            SocialPlatform::Inspire => "INSPIRE",
            SocialPlatform::Arxiv => "arXiv",
            SocialPlatform::Orcid => "ORCID",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::SettingNotFound(format!("social.{s}")))
    }
}

/// Outbound links; an empty string hides the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub email: String,
    pub linkedin: String,
    pub x: String,
    pub bluesky: String,
    pub github: String,
    pub gitlab: String,
    pub scholar: String,
    pub inspire: String,
    pub arxiv: String,
    pub orcid: String,
}

impl SocialLinks {
    /// Raw value for a platform, empty when hidden
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Email => &self.email,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::X => &self.x,
            SocialPlatform::Bluesky => &self.bluesky,
            SocialPlatform::Github => &self.github,
            SocialPlatform::Gitlab => &self.gitlab,
            SocialPlatform::Scholar => &self.scholar,
            SocialPlatform::Inspire => &self.inspire,
            SocialPlatform::Arxiv => &self.arxiv,
            SocialPlatform::Orcid => &self.orcid,
        }
    }

    pub fn is_hidden(&self, platform: SocialPlatform) -> bool {
        self.get(platform).is_empty()
    }

    /// Platforms to render, with their values, in platform order
    pub fn visible(&self) -> Vec<(SocialPlatform, &str)> {
        SocialPlatform::ALL
            .into_iter()
            .map(|p| (p, self.get(p)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Link target for a platform; `mailto:` for email, `None` when hidden
    pub fn href(&self, platform: SocialPlatform) -> Option<String> {
        let value = self.get(platform);
        match platform {
            _ if value.is_empty() => None,
            SocialPlatform::Email if !value.starts_with("mailto:") => {
                Some(format!("mailto:{value}"))
            }
            _ => Some(value.to_string()),
        }
    }
}

// =============================================================================
// Template
// =============================================================================

/// Site-wide behaviour flags read by the page templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Absolute URL; used for canonical links and the sitemap
    pub website_url: String,
    pub menu_left: bool,
    pub transitions: bool,
    #[serde(rename = "lightTheme")]
    pub light_theme: String,
    #[serde(rename = "darkTheme")]
    pub dark_theme: String,
    /// Character limit for list-view summaries
    #[serde(rename = "excerptLength")]
    pub excerpt_length: usize,
    #[serde(rename = "postPerPage")]
    pub post_per_page: usize,
    /// Path prefix for internal links; empty for root deployments
    pub base: String,
}

impl TemplateConfig {
    /// `website_url` starts with `http://` or `https://`
    pub fn has_absolute_url(&self) -> bool {
        self.website_url.starts_with("http://") || self.website_url.starts_with("https://")
    }

    /// Internal link for `path`, prefixed with `base`
    ///
    /// ```rust
    /// let mut template = folio::site::template().clone();
    /// assert_eq!(template.link("blog/"), "/blog/");
    ///
    /// template.base = "/portfolio".into();
    /// assert_eq!(template.link("/blog/"), "/portfolio/blog/");
    /// ```
    pub fn link(&self, path: &str) -> String {
        let base = self.base.trim_matches('/');
        let path = path.trim_start_matches('/');
        if base.is_empty() {
            format!("/{path}")
        } else {
            format!("/{base}/{path}")
        }
    }

    /// Absolute canonical URL for `path`
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{}", self.website_url.trim_end_matches('/'), self.link(path))
    }

    /// First `excerptLength` characters of `text`
    pub fn excerpt<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.excerpt_length) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    /// Number of list pages for `total` posts; at least one
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.post_per_page.max(1)).max(1)
    }
}

// =============================================================================
// SEO
// =============================================================================

/// Fallback values for HTML meta tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoConfig {
    pub default_title: String,
    pub default_description: String,
    /// Relative or absolute image path for social cards
    pub default_image: String,
}

// =============================================================================
// Aggregate
// =============================================================================

/// All four settings records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub profile: Profile,
    pub social: SocialLinks,
    pub template: TemplateConfig,
    pub seo: SeoConfig,
}

impl SiteSettings {
    /// The built-in settings, created on first access
    pub fn builtin() -> &'static SiteSettings {
        &BUILTIN
    }
}

pub fn profile() -> &'static Profile {
    &BUILTIN.profile
}

pub fn social() -> &'static SocialLinks {
    &BUILTIN.social
}

pub fn template() -> &'static TemplateConfig {
    &BUILTIN.template
}

pub fn seo() -> &'static SeoConfig {
    &BUILTIN.seo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_visibility() {
        let social = social();

        assert!(!social.is_hidden(SocialPlatform::Email));
        assert!(social.is_hidden(SocialPlatform::X));

        let visible: Vec<SocialPlatform> = social.visible().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            visible,
            [SocialPlatform::Email, SocialPlatform::Linkedin, SocialPlatform::Github]
        );
    }

    #[test]
    fn test_social_href() {
        let social = social();

        assert_eq!(
            social.href(SocialPlatform::Email).as_deref(),
            Some("mailto:contact@robinhuang.nz")
        );
        assert_eq!(
            social.href(SocialPlatform::Github).as_deref(),
            Some("https://github.com/yuxinlumiere83157")
        );
        assert_eq!(social.href(SocialPlatform::Orcid), None);
    }

    #[test]
    fn test_platform_from_str() {
        for platform in SocialPlatform::ALL {
            assert_eq!(platform.as_str().parse::<SocialPlatform>().unwrap(), platform);
        }
        assert!("myspace".parse::<SocialPlatform>().is_err());
        assert_eq!(SocialPlatform::Github.to_string(), "github");
    }

    #[test]
    fn test_link_with_and_without_base() {
        let mut template = template().clone();
        assert_eq!(template.link(""), "/");
        assert_eq!(template.link("/cv"), "/cv");

        template.base = "site/".into();
        assert_eq!(template.link("cv"), "/site/cv");
        assert_eq!(template.link(""), "/site/");
    }

    #[test]
    fn test_canonical_url() {
        let template = template();
        assert!(template.has_absolute_url());
        assert_eq!(
            template.canonical_url("/blog/first-post"),
            "https://www.robinhuang.nz/blog/first-post"
        );
    }

    #[test]
    fn test_excerpt_counts_characters() {
        let mut template = template().clone();
        template.excerpt_length = 3;

        assert_eq!(template.excerpt("2016 – 2018"), "201");
        assert_eq!(template.excerpt("ab"), "ab");

        template.excerpt_length = 6;
        assert_eq!(template.excerpt("2016 – 2018"), "2016 –");
    }

    #[test]
    fn test_page_count() {
        let template = template();
        assert_eq!(template.page_count(0), 1);
        assert_eq!(template.page_count(5), 1);
        assert_eq!(template.page_count(6), 2);
        assert_eq!(template.page_count(11), 3);
    }

    #[test]
    fn test_research_fields() {
        let fields: Vec<&str> = profile().research_fields().collect();
        assert_eq!(fields, ["backend", "data", "cloud", "interactive", "hci"]);
        assert_eq!(profile().areas_in("cloud").count(), 1);
        assert_eq!(profile().areas_in("robotics").count(), 0);
    }

    #[test]
    fn test_serialized_key_names() {
        let value = serde_json::to_value(SiteSettings::builtin()).unwrap();

        assert_eq!(value["profile"]["fullName"], "Robin Huang");
        assert_eq!(value["template"]["excerptLength"], 200);
        assert_eq!(value["template"]["postPerPage"], 5);
        assert_eq!(value["template"]["lightTheme"], "light");
        assert_eq!(value["template"]["menu_left"], false);
        assert_eq!(value["social"]["x"], "");
    }
}
