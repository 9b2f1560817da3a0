// Print a markdown reference of every site setting
//
// Run with: cargo run --example settings_reference > SETTINGS.md

use folio::{DocsConfig, SiteSettings, generate_docs};

fn main() {
    env_logger::init();

    let docs = generate_docs::<SiteSettings>(
        DocsConfig::new()
            .with_title("robinhuang.nz settings")
            .with_description(
                "Every value the page templates read. Override any of them in \
                 `content/site.json` or with `FOLIO_{CATEGORY}_{KEY}` env vars.",
            ),
    );
    print!("{docs}");
}
