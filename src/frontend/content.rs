pub const SITE_OWNER: &str = "Jordan Reyes";
pub const SITE_ROLE: &str = "Full-Stack Developer";
pub const IMAGE_PLACEHOLDER: &str =
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 16 9'/%3E";

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "certificates", label: "Certificates" },
    NavItem { id: "contact", label: "Contact" },
];

pub struct Skill {
    pub name: &'static str,
    pub progress: u8,
}

pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: "skills-frontend",
        title: "Frontend",
        skills: &[
            Skill { name: "HTML & CSS", progress: 95 },
            Skill { name: "JavaScript", progress: 90 },
            Skill { name: "React", progress: 85 },
        ],
    },
    SkillCategory {
        key: "skills-backend",
        title: "Backend",
        skills: &[
            Skill { name: "Rust", progress: 80 },
            Skill { name: "Node.js", progress: 85 },
            Skill { name: "PostgreSQL", progress: 75 },
        ],
    },
    SkillCategory {
        key: "skills-tools",
        title: "Tools",
        skills: &[
            Skill { name: "Git", progress: 90 },
            Skill { name: "Docker", progress: 70 },
            Skill { name: "Linux", progress: 80 },
        ],
    },
];

pub struct Project {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        key: "project-tracker",
        title: "Habit Tracker",
        description: "Offline-first habit tracker with streak analytics and reminders.",
        image: "/images/projects/tracker.webp",
        tags: &["Rust", "WebAssembly", "IndexedDB"],
        link: "https://github.com/",
    },
    Project {
        key: "project-dashboard",
        title: "Ops Dashboard",
        description: "Realtime service health dashboard fed by a streaming metrics API.",
        image: "/images/projects/dashboard.webp",
        tags: &["TypeScript", "WebSockets", "Grafana"],
        link: "https://github.com/",
    },
    Project {
        key: "project-shop",
        title: "Storefront",
        description: "Headless e-commerce storefront with server-side rendering and search.",
        image: "/images/projects/storefront.webp",
        tags: &["Node.js", "PostgreSQL", "Stripe"],
        link: "https://github.com/",
    },
];

pub struct Certificate {
    pub key: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub path: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        key: "cert-cloud",
        title: "Cloud Practitioner",
        issuer: "Amazon Web Services",
        path: "/certificates/cloud-practitioner.pdf",
    },
    Certificate {
        key: "cert-web",
        title: "Responsive Web Design",
        issuer: "freeCodeCamp",
        path: "/certificates/responsive-web-design.pdf",
    },
];
