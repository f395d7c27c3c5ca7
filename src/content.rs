//! The literal content tables behind every section.
//!
//! Records are baked in at compile time and never mutate; sections map them
//! straight into markup. Icon fields name glyphs rendered by the icon
//! component.

/// Anchor entry in the header and footer navigation.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        anchor: "#home",
    },
    NavLink {
        label: "About",
        anchor: "#about",
    },
    NavLink {
        label: "Skills",
        anchor: "#skills",
    },
    NavLink {
        label: "Projects",
        anchor: "#projects",
    },
    NavLink {
        label: "Contact",
        anchor: "#contact",
    },
];

/// Project filter set. `All` is the no-filter sentinel; the filter buttons
/// are the only way to pick one, so there is no invalid-category path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    WebApps,
    MobileApps,
    Ecommerce,
    Apis,
}

impl Category {
    /// Every filter button, in display order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::WebApps,
        Category::MobileApps,
        Category::Ecommerce,
        Category::Apis,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::WebApps => "Web Apps",
            Category::MobileApps => "Mobile Apps",
            Category::Ecommerce => "E-commerce",
            Category::Apis => "APIs",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    /// Featured cards span two grid columns and carry a badge.
    pub featured: bool,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and PostgreSQL. Features include user authentication, payment processing, and admin dashboard.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=500&h=300&fit=crop",
        category: Category::Ecommerce,
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "Redux"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "Collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=500&h=300&fit=crop",
        category: Category::WebApps,
        technologies: &["React", "TypeScript", "Firebase", "Framer Motion"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 3,
        title: "Weather Mobile App",
        description: "Cross-platform weather application with location-based forecasts, interactive maps, and weather alerts.",
        image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=500&h=300&fit=crop",
        category: Category::MobileApps,
        technologies: &["React Native", "TypeScript", "Weather API", "Maps"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    Project {
        id: 4,
        title: "REST API Gateway",
        description: "Scalable API gateway with authentication, rate limiting, caching, and comprehensive documentation.",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=500&h=300&fit=crop",
        category: Category::Apis,
        technologies: &["Node.js", "Express", "Redis", "MongoDB", "Swagger"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    Project {
        id: 5,
        title: "Social Media Dashboard",
        description: "Analytics dashboard for social media management with data visualization, scheduling, and reporting features.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=300&fit=crop",
        category: Category::WebApps,
        technologies: &["Vue.js", "D3.js", "Python", "FastAPI", "Chart.js"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 6,
        title: "Fitness Tracking App",
        description: "Mobile fitness application with workout tracking, progress monitoring, and social features for motivation.",
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500&h=300&fit=crop",
        category: Category::MobileApps,
        technologies: &["Flutter", "Dart", "Firebase", "Health APIs"],
        github_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
];

/// Projects matching `filter`; the `All` sentinel selects the whole table.
///
/// Pure function of the filter and the static table — re-derived on every
/// change, which is plenty for six records.
pub fn visible_projects(filter: Category) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| filter == Category::All || project.category == filter)
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Bar fill percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        icon: "code",
        title: "Frontend Development",
        skills: &[
            Skill { name: "React/Next.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Tailwind CSS", level: 95 },
            Skill { name: "JavaScript", level: 95 },
        ],
    },
    SkillCategory {
        icon: "database",
        title: "Backend Development",
        skills: &[
            Skill { name: "Node.js", level: 90 },
            Skill { name: "Python", level: 85 },
            Skill { name: "PostgreSQL", level: 85 },
            Skill { name: "MongoDB", level: 80 },
        ],
    },
    SkillCategory {
        icon: "smartphone",
        title: "Mobile Development",
        skills: &[
            Skill { name: "React Native", level: 85 },
            Skill { name: "Flutter", level: 75 },
            Skill { name: "iOS/Swift", level: 70 },
            Skill { name: "Android/Kotlin", level: 70 },
        ],
    },
    SkillCategory {
        icon: "cloud",
        title: "DevOps & Cloud",
        skills: &[
            Skill { name: "AWS", level: 80 },
            Skill { name: "Docker", level: 85 },
            Skill { name: "Kubernetes", level: 75 },
            Skill { name: "CI/CD", level: 80 },
        ],
    },
    SkillCategory {
        icon: "palette",
        title: "Design & UX",
        skills: &[
            Skill { name: "Figma", level: 85 },
            Skill { name: "Adobe XD", level: 80 },
            Skill { name: "UI/UX Design", level: 85 },
            Skill { name: "Prototyping", level: 80 },
        ],
    },
    SkillCategory {
        icon: "sliders",
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git/GitHub", level: 95 },
            Skill { name: "VS Code", level: 95 },
            Skill { name: "Webpack/Vite", level: 85 },
            Skill { name: "Testing", level: 80 },
        ],
    },
];

pub const EXTRA_TECHNOLOGIES: &[&str] = &[
    "GraphQL",
    "Redis",
    "Elasticsearch",
    "Firebase",
    "Supabase",
    "Prisma",
    "Jest",
    "Cypress",
    "Storybook",
    "Framer Motion",
    "Three.js",
    "WebGL",
    "PWA",
    "WebRTC",
    "Socket.io",
    "Stripe",
    "PayPal",
    "Algolia",
];

/// Headline figures on the about card grid.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        icon: "code",
        label: "Projects Completed",
        value: "50+",
    },
    Stat {
        icon: "coffee",
        label: "Cups of Coffee",
        value: "1000+",
    },
    Stat {
        icon: "bulb",
        label: "Creative Solutions",
        value: "100+",
    },
    Stat {
        icon: "users",
        label: "Happy Clients",
        value: "25+",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TechArea {
    pub name: &'static str,
    pub technologies: &'static [&'static str],
}

pub const TECH_STACK: [TechArea; 4] = [
    TechArea {
        name: "Frontend",
        technologies: &["React", "TypeScript", "Next.js", "Tailwind CSS", "Framer Motion"],
    },
    TechArea {
        name: "Backend",
        technologies: &["Node.js", "Python", "Express", "FastAPI", "PostgreSQL"],
    },
    TechArea {
        name: "Tools",
        technologies: &["Git", "Docker", "AWS", "Figma", "VS Code"],
    },
    TechArea {
        name: "Mobile",
        technologies: &["React Native", "Flutter", "iOS", "Android"],
    },
];

/// One way of reaching the author on the contact section.
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "mail",
        title: "Email",
        value: "your.email@example.com",
        href: "mailto:your.email@example.com",
    },
    ContactChannel {
        icon: "phone",
        title: "Phone",
        value: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactChannel {
        icon: "map-pin",
        title: "Location",
        value: "San Francisco, CA",
        href: "https://maps.google.com",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const HERO_SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "github",
        href: "https://github.com",
        label: "GitHub",
    },
    SocialLink {
        icon: "linkedin",
        href: "https://linkedin.com",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "mail",
        href: "mailto:your.email@example.com",
        label: "Email",
    },
];

pub const CONTACT_SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "github",
        href: "https://github.com",
        label: "GitHub",
    },
    SocialLink {
        icon: "linkedin",
        href: "https://linkedin.com",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "twitter",
        href: "https://twitter.com",
        label: "Twitter",
    },
];

pub const FOOTER_SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: "github",
        href: "https://github.com",
        label: "GitHub",
    },
    SocialLink {
        icon: "linkedin",
        href: "https://linkedin.com",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "twitter",
        href: "https://twitter.com",
        label: "Twitter",
    },
    SocialLink {
        icon: "mail",
        href: "mailto:your.email@example.com",
        label: "Email",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_selects_the_whole_table() {
        assert_eq!(visible_projects(Category::All).len(), PROJECTS.len());
        assert_eq!(visible_projects(Category::All).len(), 6);
    }

    #[test]
    fn mobile_filter_selects_exactly_the_mobile_records() {
        let mobile = visible_projects(Category::MobileApps);
        assert_eq!(mobile.len(), 2);
        assert!(mobile
            .iter()
            .all(|project| project.category == Category::MobileApps));
    }

    #[test]
    fn every_filter_result_fits_inside_the_table() {
        for category in Category::ALL {
            let visible = visible_projects(category);
            assert!(visible.len() <= PROJECTS.len());
            // non-sentinel filters only return their own category
            if category != Category::All {
                assert!(visible.iter().all(|project| project.category == category));
            }
        }
    }

    #[test]
    fn filter_results_preserve_table_order() {
        let web = visible_projects(Category::WebApps);
        let ids: Vec<u32> = web.iter().map(|project| project.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn nav_links_target_section_anchors() {
        for link in NAV_LINKS {
            assert!(link.anchor.starts_with('#'));
        }
        assert_eq!(NAV_LINKS[0].anchor, "#home");
        assert_eq!(NAV_LINKS[4].anchor, "#contact");
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 4);
            for skill in category.skills {
                assert!(skill.level <= 100);
            }
        }
    }
}
