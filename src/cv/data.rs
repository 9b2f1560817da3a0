use super::{EducationEntry, ExperienceEntry, SkillGroup};

pub(super) fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry::new(
            "Personal Project",
            "2025",
            "Portfolio Website · AWS Deployment (Solo)",
            "Auckland, New Zealand",
            "Building a portfolio + blog deployed on AWS (S3/CloudFront/Route 53/ACM) with CI/CD; next: login and a topic-based guestbook.",
        ),
        ExperienceEntry::new(
            "Conservation Volunteers",
            "2025",
            "Volunteer · Tree Planting Event",
            "Auckland, New Zealand",
            "Joined a local tree-planting event supporting community conservation and environmental restoration.",
        ),
        ExperienceEntry::new(
            "University Project (COMPSCI 705) · GitHub",
            "2025",
            "Backend Contributor · Multimodal Survey System (Python/Flask)",
            "Auckland, New Zealand",
            "Built and maintained Flask REST endpoints for multimodal analysis, integrating MediaPipe and an emotion model, with session-based metadata storage.",
        ),
        ExperienceEntry::new(
            "Capstone Project (Chung-Ang University)",
            "2023",
            "Lead Developer · Sensor + Projection Interactive System (Unity/C#)",
            "Seoul, South Korea",
            "Delivered a touchless interactive installation using Arduino sensors + Unity projection, with stable real-time input parsing and gesture control.",
        ),
        ExperienceEntry::new(
            "Hezhong Film",
            "2016 – 2018",
            "Movie Compositor",
            "Beijing, China",
            "Worked in film/TV post-production, delivering shots to spec and improving quality through disciplined iteration and feedback.",
        ),
    ]
}

pub(super) fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry::new(
            "University of Auckland",
            "07/2025 – 12/2025",
            "Master of Information Technology (MInfoTech) · Software Development & Cloud Fundamentals",
            "Auckland, New Zealand",
            "Practice-focused postgraduate study in maintainable software, cloud computing, and HCI through team-based, industry-aligned projects.",
        ),
        EducationEntry::new(
            "Chung-Ang University",
            "03/2020 – 02/2024",
            "Bachelor of Engineering · Computer Art (Digital Media Art / Creative Technology)",
            "Seoul, South Korea",
            "Interdisciplinary engineering program spanning VFX, 3D, game development, UX, and programming; graduated with high GPA and an international award.",
        ),
    ]
}

pub(super) fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup::new(
            "Programming Languages",
            "C#, Python, Java, SQL fundamentals; clean OOP, debugging, and readable code organization.",
        ),
        SkillGroup::new(
            "Backend & Web",
            "REST fundamentals, API integration, Flask project work, and a maintainability-first development approach.",
        ),
        SkillGroup::new(
            "Cloud Fundamentals (AWS)",
            "AWS basics with real deployment: S3 + CloudFront + Route 53 + ACM; caching, DNS, and HTTPS concepts.",
        ),
        SkillGroup::new(
            "Interactive Applications",
            "Unity (C#) with Arduino sensor input, serial parsing, and MediaPipe-based gesture interaction.",
        ),
        SkillGroup::new(
            "Tools & Creative Tech",
            "Git/GitHub workflows plus strong production habits from VFX pipelines (Nuke, After Effects).",
        ),
        SkillGroup::new(
            "Languages",
            "Chinese (Native), English (Professional), Korean (Professional).",
        ),
        SkillGroup::new(
            "Awards",
            "Outstanding International Student Award; Graduated Cum Laude (02/2024).",
        ),
        SkillGroup::new(
            "Hobbies",
            "Video filming/editing, road trips, programming, and algorithms practice.",
        ),
    ]
}
