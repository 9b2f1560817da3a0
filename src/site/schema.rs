//! Schema for [`SiteSettings`]: one entry per serialized field

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{SiteSettings, SocialPlatform};
use crate::config::{SettingMetadata, SettingsSchema, meta};

/// Absolute http(s) URL
pub(crate) const ABSOLUTE_URL: &str = "^https?://";
const URL_OR_EMPTY: &str = "^(https?://.+)?$";
const EMAIL_OR_EMPTY: &str = r"^([^@\s]+@[^@\s]+\.[^@\s]+)?$";

fn entry(category: &str, order: u8, label: &str, setting: SettingMetadata) -> SettingMetadata {
    setting
        .meta_str(meta::CATEGORY, category)
        .meta_str("label", label)
        .meta_num("order", order)
}

static SCHEMA: LazyLock<HashMap<String, SettingMetadata>> = LazyLock::new(build);

/// The site schema, built once
pub(crate) fn site_schema() -> &'static HashMap<String, SettingMetadata> {
    &SCHEMA
}

impl SettingsSchema for SiteSettings {
    fn get_metadata() -> HashMap<String, SettingMetadata> {
        SCHEMA.clone()
    }
}

fn build() -> HashMap<String, SettingMetadata> {
    let d = SiteSettings::default();

    let mut map = crate::settings! {
        // profile
        "profile.fullName" => entry("profile", 1, "Full name",
            SettingMetadata::text(d.profile.full_name)),
        "profile.title" => entry("profile", 2, "Title",
            SettingMetadata::text(d.profile.title).hide_when_empty()),
        "profile.institute" => entry("profile", 3, "Institute",
            SettingMetadata::text(d.profile.institute)),
        "profile.author_name" => entry("profile", 4, "Author name",
            SettingMetadata::text(d.profile.author_name)
                .meta_str("description", "Byline used on posts")),
        "profile.research_areas" => entry("profile", 5, "Research areas",
            SettingMetadata::list(&d.profile.research_areas)
                .meta_str("description", "Records of title, description and a short field tag")),

        // template
        "template.website_url" => entry("template", 1, "Website URL",
            SettingMetadata::text(d.template.website_url)
                .pattern(ABSOLUTE_URL)
                .meta_str("description", "Absolute URL used for canonical links and the sitemap")),
        "template.menu_left" => entry("template", 2, "Menu on the left",
            SettingMetadata::toggle(d.template.menu_left)),
        "template.transitions" => entry("template", 3, "Page transitions",
            SettingMetadata::toggle(d.template.transitions)),
        "template.lightTheme" => entry("template", 4, "Light theme",
            SettingMetadata::text(d.template.light_theme)),
        "template.darkTheme" => entry("template", 5, "Dark theme",
            SettingMetadata::text(d.template.dark_theme)),
        "template.excerptLength" => entry("template", 6, "Excerpt length",
            SettingMetadata::number(d.template.excerpt_length)
                .integer()
                .min(1.0)
                .meta_str("description", "Characters shown in list-view summaries")),
        "template.postPerPage" => entry("template", 7, "Posts per page",
            SettingMetadata::number(d.template.post_per_page)
                .integer()
                .min(1.0)),
        "template.base" => entry("template", 8, "Base path",
            SettingMetadata::text(d.template.base)
                .meta_str("description", "Prefix for internal links; empty for root deployments")),

        // seo
        "seo.default_title" => entry("seo", 1, "Default title",
            SettingMetadata::text(d.seo.default_title)),
        "seo.default_description" => entry("seo", 2, "Default description",
            SettingMetadata::text(d.seo.default_description)),
        "seo.default_image" => entry("seo", 3, "Default image",
            SettingMetadata::text(d.seo.default_image)),
    };

    for (order, platform) in (1u8..).zip(SocialPlatform::ALL) {
        let pattern = match platform {
            SocialPlatform::Email => EMAIL_OR_EMPTY,
            _ => URL_OR_EMPTY,
        };
        let setting = SettingMetadata::text(d.social.get(platform))
            .pattern(pattern)
            .hide_when_empty();
        map.insert(
            format!("social.{platform}"),
            entry("social", order, platform.label(), setting),
        );
    }

    map
}
