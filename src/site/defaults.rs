use super::{Profile, ResearchArea, SeoConfig, SocialLinks, TemplateConfig};

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: "Robin Huang".into(),
            title: String::new(),
            institute: "Auckland, New Zealand".into(),
            author_name: "Robin Huang".into(),
            research_areas: vec![
                ResearchArea::new(
                    "Backend & APIs",
                    "Maintainable code, RESTful API design, server-side validation, and structured workflows.",
                    "backend",
                ),
                ResearchArea::new(
                    "Databases & Data Handling",
                    "SQL fundamentals, data modeling basics, and practical CRUD patterns for real applications.",
                    "data",
                ),
                ResearchArea::new(
                    "Cloud Fundamentals (AWS)",
                    "Compute/storage/networking concepts and deploying secure, production-ready web systems.",
                    "cloud",
                ),
                ResearchArea::new(
                    "Interactive Systems",
                    "Unity/C# interactive applications integrating external inputs (Arduino sensors, gesture detection).",
                    "interactive",
                ),
                ResearchArea::new(
                    "HCI & Applied Research Prototypes",
                    "Team-based prototypes, multimodal survey systems, and practical experimentation.",
                    "hci",
                ),
            ],
        }
    }
}

// Platforms left empty are hidden.
impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            email: "contact@robinhuang.nz".into(),
            linkedin: "https://www.linkedin.com/in/yuxin-h-4917232a3/".into(),
            x: String::new(),
            bluesky: String::new(),
            github: "https://github.com/yuxinlumiere83157".into(),
            gitlab: String::new(),
            scholar: String::new(),
            inspire: String::new(),
            arxiv: String::new(),
            orcid: String::new(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            website_url: "https://www.robinhuang.nz".into(),
            menu_left: false,
            transitions: true,
            light_theme: "light".into(),
            dark_theme: "dark".into(),
            excerpt_length: 200,
            post_per_page: 5,
            base: String::new(),
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            default_title: "Robin Huang | Portfolio & CV".into(),
            default_description: "Portfolio, CV, and projects by Robin Huang. Backend-focused software development, cloud fundamentals (AWS), and interactive systems.".into(),
            default_image: "/images/og.png".into(),
        }
    }
}
