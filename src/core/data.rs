// Static page content. Edit these tables to personalise the site.

#[derive(Clone, Copy, Debug)]
pub struct SocialLinks {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub leetcode: Option<&'static str>,
    pub codechef: Option<&'static str>,
}

impl SocialLinks {
    /// Present links in display order as `(label, url)`.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("GitHub", self.github),
            ("LinkedIn", self.linkedin),
            ("Twitter", self.twitter),
            ("LeetCode", self.leetcode),
            ("CodeChef", self.codechef),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: Option<&'static str>,
    pub location: &'static str,
    pub bio: &'static str,
    pub long_bio: &'static [&'static str],
    pub social: SocialLinks,
    pub interests: &'static [&'static str],
    pub resume_link: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 1 (beginner) to 5 (expert).
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn key(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Featured => "featured",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(ProjectFilter::All),
            "featured" => Some(ProjectFilter::Featured),
            _ => None,
        }
    }

    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects
            .iter()
            .filter(|p| self == ProjectFilter::All || p.featured)
            .collect()
    }
}

pub fn skill_level_label(level: u8) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Basic",
        3 => "Intermediate",
        4 => "Advanced",
        5 => "Expert",
        _ => "Intermediate",
    }
}

pub fn skill_category(key: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.key == key)
}

/// Anchor ids of the page sections, in page order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Ashutosh Singh",
    title: "Front-End Developer",
    email: "ashutosh.singh2024@nst.rishihood.edu.in",
    phone: None,
    location: "India",
    bio: "Dedicated Front-End Developer with multiple Projects, Real-World Problem Solver, always eager to learn, and Competitive Coding Experience.",
    long_bio: &[
        "I am a Bachelor of Technology (Artificial Intelligence) student at Newton School of Technology, Rishihood University (2024-2028).",
        "I have a strong background in competitive coding with a Leetcode rating of 1500+ (160+ questions) and CodeChef rating of 1300+.",
        "I have completed specializations in Machine Learning from Stanford University & DeepLearning.AI, and have certifications in Python and C++ for Beginners.",
        "I am passionate about building impactful web applications and solving real-world problems through code.",
    ],
    social: SocialLinks {
        github: Some("https://github.com/ashyou09"),
        linkedin: Some("https://www.linkedin.com/in/ashutosh-singh-877520320/"),
        twitter: None,
        leetcode: Some("https://leetcode.com/u/ashyou09/"),
        codechef: Some("https://www.codechef.com/users/ashyou09"),
    },
    interests: &[
        "Competitive Coding",
        "Web Development",
        "Machine Learning",
        "Generative AI",
        "Hackathons",
        "Olympiads",
    ],
    resume_link: "/resume.pdf",
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: "project1",
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform built with React and Node.js. Includes user authentication, product catalog, shopping cart, and payment processing.",
        technologies: &["React", "Node.js", "Express", "MongoDB", "Stripe API"],
        image: "/images/projects/ecommerce.jpg",
        github_link: Some("https://github.com/yourusername/ecommerce-platform"),
        live_link: Some("https://ecommerce-platform.example.com"),
        featured: true,
    },
    Project {
        id: "project2",
        title: "Weather Dashboard",
        description: "A weather dashboard that displays current weather conditions and forecasts for multiple locations. Uses the OpenWeather API for real-time data.",
        technologies: &["JavaScript", "HTML5", "CSS3", "OpenWeather API"],
        image: "/images/projects/weather-dashboard.jpg",
        github_link: Some("https://github.com/yourusername/weather-dashboard"),
        live_link: Some("https://weather-dashboard.example.com"),
        featured: false,
    },
    Project {
        id: "project3",
        title: "Task Management App",
        description: "A task management application with features like task creation, assignment, due dates, and status tracking. Includes user authentication and team collaboration.",
        technologies: &["React", "Firebase", "Material-UI", "Redux"],
        image: "/images/projects/task-management.jpg",
        github_link: Some("https://github.com/yourusername/task-management"),
        live_link: Some("https://task-management.example.com"),
        featured: true,
    },
];

const fn skill(name: &'static str, level: u8, icon: &'static str) -> Skill {
    Skill { name, level, icon }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: "frontend",
        label: "Frontend",
        skills: &[
            skill("HTML", 5, "html5"),
            skill("CSS", 5, "css3"),
            skill("JavaScript", 4, "javascript"),
            skill("React", 4, "react"),
            skill("Tailwind CSS", 3, "tailwind"),
        ],
    },
    SkillCategory {
        key: "backend",
        label: "Backend",
        skills: &[
            skill("Node.js", 3, "nodejs"),
            skill("Express.js", 3, "express"),
            skill("Python", 4, "python"),
            skill("FastAPI", 3, "fastapi"),
            skill("Supabase", 3, "supabase"),
            skill("MongoDB", 3, "mongodb"),
            skill("Firebase", 3, "firebase"),
        ],
    },
    SkillCategory {
        key: "datascience",
        label: "Data Science",
        skills: &[
            skill("Machine Learning", 4, "machinelearning"),
            skill("NumPy", 4, "numpy"),
            skill("Pandas", 4, "pandas"),
            skill("Matplotlib", 3, "matplotlib"),
            skill("Scikit-learn", 3, "scikitlearn"),
            skill("Generative AI", 4, "ai"),
        ],
    },
    SkillCategory {
        key: "devops",
        label: "DevOps & Tools",
        skills: &[skill("Git", 4, "git"), skill("Vite", 3, "vite")],
    },
    SkillCategory {
        key: "design",
        label: "Design",
        skills: &[
            skill("Figma", 3, "figma"),
            skill("UI/UX Design", 3, "uiux"),
            skill("Responsive Design", 5, "responsive"),
        ],
    },
    SkillCategory {
        key: "soft",
        label: "Soft Skills",
        skills: &[
            skill("Critical Thinking", 5, "criticalthinking"),
            skill("Problem Solving", 5, "problemsolving"),
            skill("Communication", 4, "communication"),
            skill("Teamwork", 5, "teamwork"),
            skill("Time Management", 4, "timemanagement"),
            skill("Adaptability", 5, "adaptability"),
        ],
    },
];
