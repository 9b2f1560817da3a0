// Export the effective site data for the page templates
//
// Run with: cargo run --example export_site -- ./public/site-data.json
// Overrides: FOLIO_TEMPLATE_BASE=/portfolio cargo run --example export_site

use folio::SiteManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./site-data.json".to_string());

    let manager = SiteManager::builder("robinhuang.nz")
        .data_dir("./content")
        .with_env_prefix("FOLIO")
        .build()?;

    let issues = manager.validate_settings()?;
    for issue in &issues {
        eprintln!("warning: {issue}");
    }

    let data = manager.export()?;
    println!(
        "{} - {} experiences, {} skill groups",
        data.settings.profile.full_name,
        data.cv.experiences.len(),
        data.cv.skills.len()
    );
    for (platform, _) in data.settings.social.visible() {
        if let Some(href) = data.settings.social.href(platform) {
            println!("  {}: {href}", platform.label());
        }
    }
    println!(
        "  canonical: {}",
        data.settings.template.canonical_url("/cv")
    );

    manager.export_to(&out)?;
    println!("Wrote {out} ({} warning(s))", issues.len());
    Ok(())
}
