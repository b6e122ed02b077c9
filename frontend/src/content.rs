//! Static copy for the page sections.

pub const OWNER_NAME: &str = "Benjamin Fajardo";
pub const OWNER_ROLE: &str = "Digital Designer";
pub const OWNER_PITCH: &str = "I design digital experiences that look great and work smoothly, from custom WordPress sites to user-friendly interfaces and eye-catching graphics & multimedia content. My superpower? Turning ideas into functional, visually appealing designs that people actually enjoy using.";
pub const PORTRAIT_URL: &str = "/assets/portrait.jpg";

pub const CONTACT_EMAIL: &str = "hello@example.com";
pub const CONTACT_PHONE: &str = "+63 900 000 0000";
pub const CONTACT_LOCATION: &str = "Philippines";

/// `tel:` link for [`CONTACT_PHONE`], without the display spacing.
pub fn phone_href() -> String {
    let digits: String = CONTACT_PHONE.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", url: "https://linkedin.com" },
    SocialLink { label: "GitHub", url: "https://github.com" },
    SocialLink { label: "Twitter", url: "https://twitter.com" },
    SocialLink { label: "Dribbble", url: "https://dribbble.com" },
];

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", target: "about" },
    NavLink { label: "Skills", target: "skills" },
    NavLink { label: "Projects", target: "projects" },
    NavLink { label: "Contact", target: "contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm an experienced Graphic Designer, Web Developer, and Multimedia Specialist with expertise in WordPress, Elementor, Avada, and Divi. My journey in design and development began with my BS in Computer Science from New Era University (2008-2012).",
    "My background in UI design, graphic design, and video editing has enabled me to create visually appealing, user-friendly websites and engaging multimedia content. I'm proficient in tools like Adobe Premiere Pro, After Effects, and Final Cut Pro for video editing and motion graphics.",
    "I'm dedicated to delivering projects on time and within budget, and I'm always looking for ways to improve my skills and stay up-to-date with the latest trends in web development, design, and multimedia.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "10+", label: "Years Experience" },
    Stat { value: "100+", label: "Projects Completed" },
    Stat { value: "30+", label: "Satisfied Clients" },
    Stat { value: "15+", label: "Tools Mastered" },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Design",
        accent: "#dbeafe",
        skills: &[
            "Adobe Creative Suite",
            "FIGMA",
            "UI/UX Design",
            "Graphic Design",
            "Motion Graphics",
            "Cinema 4D",
            "Blender",
        ],
    },
    SkillGroup {
        title: "Development",
        accent: "#dcfce7",
        skills: &["WordPress", "Elementor", "Avada", "Divi", "HTML/CSS", "JavaScript", "PHP"],
    },
    SkillGroup {
        title: "Multimedia",
        accent: "#f3e8ff",
        skills: &[
            "Adobe Premiere Pro",
            "Final Cut Pro",
            "After Effects",
            "Cap Cut",
            "E-commerce Management",
            "Shopify",
            "WooCommerce",
        ],
    },
];

/// A card in the portfolio gallery or the featured projects grid.
#[derive(PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub code_url: &'static str,
}

pub const PORTFOLIO_ITEMS: &[Showcase] = &[
    Showcase {
        title: "E-commerce Website",
        description: "A full-stack e-commerce platform built with React and Node.js",
        image: "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=800&q=80",
        technologies: &["React", "Node.js", "MongoDB", "Express"],
        live_url: "#",
        code_url: "#",
    },
    Showcase {
        title: "Portfolio Website",
        description: "A personal portfolio website showcasing my work and skills",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
        technologies: &["Rust", "Yew", "Axum"],
        live_url: "#",
        code_url: "#",
    },
    Showcase {
        title: "Task Management App",
        description: "A task management application with real-time updates",
        image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?auto=format&fit=crop&w=800&q=80",
        technologies: &["React", "Firebase", "Material-UI"],
        live_url: "#",
        code_url: "#",
    },
];

pub const PROJECTS: &[Showcase] = &[
    Showcase {
        title: "E-commerce Platform",
        description: "A full-featured online store with payment processing, inventory management, and customer accounts.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=80",
        technologies: &["React", "Node.js", "MongoDB"],
        live_url: "https://example.com",
        code_url: "https://github.com/example/project",
    },
    Showcase {
        title: "Task Management App",
        description: "A collaboration tool that helps teams organize tasks, track progress, and meet deadlines.",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&w=800&q=80",
        technologies: &["Vue.js", "Express", "PostgreSQL"],
        live_url: "https://example.com",
        code_url: "https://github.com/example/project",
    },
    Showcase {
        title: "Health Tracking Dashboard",
        description: "A data visualization platform that helps users monitor their health metrics and activities.",
        image: "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?auto=format&fit=crop&w=800&q=80",
        technologies: &["React", "D3.js", "Firebase"],
        live_url: "https://example.com",
        code_url: "https://github.com/example/project",
    },
];
