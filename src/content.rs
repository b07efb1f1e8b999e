//! Compile-time page content. Nothing here changes at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    User,
    Briefcase,
    GraduationCap,
    Mail,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::User => "extra-user",
            Icon::Briefcase => "extra-briefcase",
            Icon::GraduationCap => "extra-graduation-cap",
            Icon::Mail => "extra-email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub source: Option<&'static str>,
    pub demo: Option<&'static str>,
}

impl ProjectCard {
    /// Text for the expanded view: the long description when there is one.
    pub fn detail(&self) -> &'static str {
        self.long_description.unwrap_or(self.description)
    }
}

/// Fields every timeline entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub milestone: Milestone,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEntry {
    /// Work history; expands into a modal with achievements.
    Experience(ExperienceEntry),
    Leadership(Milestone),
    Education(Milestone),
}

impl TimelineEntry {
    pub fn milestone(&self) -> &Milestone {
        match self {
            TimelineEntry::Experience(e) => &e.milestone,
            TimelineEntry::Leadership(m) | TimelineEntry::Education(m) => m,
        }
    }

    /// The expanded content behind this entry, if it has any.
    pub fn details(&self) -> Option<&ExperienceEntry> {
        match self {
            TimelineEntry::Experience(e) => Some(e),
            TimelineEntry::Leadership(_) | TimelineEntry::Education(_) => None,
        }
    }
}

/// Whether any entry in a timeline opens a detail overlay.
pub fn has_details(entries: &[TimelineEntry]) -> bool {
    entries.iter().any(|entry| entry.details().is_some())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub roles: &'static [&'static str],
    pub typewriter: &'static str,
    pub intro: &'static str,
    pub story: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub avatar: &'static str,
}

impl Profile {
    /// File name offered when downloading the résumé.
    pub fn resume_file_name(&self) -> &'static str {
        self.resume.rsplit('/').next().unwrap_or(self.resume)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Vinit Chawda",
    initials: "VC",
    roles: &["AI Engineer", "B.Tech Graduate"],
    typewriter: "Building AI-driven applications and multi-agent architectures.",
    intro: "B.Tech graduate in AI & ML with strong experience in developing AI-driven applications, backend systems, and multi-agent architectures. Passionate about applying AI in real-world projects.",
    story: &[
        "I'm a passionate AI & ML engineer with strong experience in developing AI-driven applications, backend systems, and multi-agent architectures. Skilled in Python, FastAPI, and modern AI frameworks.",
        "My journey through diverse internships has sharpened my problem-solving and creative thinking skills. I have a proven ability to combine problem-solving and creativity to deliver impactful solutions, and I'm passionate about applying AI in real-world projects.",
    ],
    email: "vinitchawda20@gmail.com",
    github: "https://github.com/VinitChawda06",
    linkedin: "https://linkedin.com/in/vinit-chawda",
    resume: "/Vinit_Chawda_Resume.pdf",
    avatar: "/profile.svg",
};

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home", icon: Icon::Code },
    NavItem { id: "about", label: "About Me", icon: Icon::User },
    NavItem { id: "projects", label: "Projects", icon: Icon::Briefcase },
    NavItem { id: "experience", label: "Experience", icon: Icon::Briefcase },
    NavItem { id: "leadership", label: "Leadership", icon: Icon::User },
    NavItem { id: "education", label: "Education", icon: Icon::GraduationCap },
    NavItem { id: "contact", label: "Contact", icon: Icon::Mail },
];

pub static STATS: &[Stat] = &[
    Stat {
        value: "1+",
        label: "Year of experience including Internships",
    },
    Stat {
        value: "9.3",
        label: "GPA",
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "AI & ML",
        items: &[
            "Multi-Agent Systems",
            "Deep Learning",
            "Scikit-Learn",
            "Conversational AI",
            "LangGraph",
            "HuggingFace",
        ],
    },
    SkillGroup {
        category: "Programming",
        items: &["Python", "OpenCV", "FastAPI", "NumPy", "Pandas", "LangChain"],
    },
    SkillGroup {
        category: "Tools",
        items: &[
            "Git",
            "PostgresSQL",
            "MongoDB",
            "Redis",
            "Drools",
            "Linux",
            "HubSpot",
            "Apollo",
            "Docker",
        ],
    },
];

pub const FAVICON: &str = "/favicon.svg";

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=350";

pub static PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Huberman Health AI Assistant",
        description: "End-to-end AI assistant developed in 6 hours using vibe coding, showcasing rapid prototyping skills.",
        long_description: Some("Developed end-to-end in just 6 hours using vibe coding, showcasing rapid prototyping and execution skills. Built a semantic search and AI-powered recommendation system processing 7,700+ transcript segments with FAISS vector search and BERT embeddings. Delivered personalized health insights from Huberman Lab content, integrating OpenAI/OpenRouter, Prometheus monitoring, and CI/CD with Jenkins."),
        image: PLACEHOLDER_IMAGE,
        technologies: &["FastAPI", "Streamlit", "FAISS", "Sentence Transformers", "Docker", "Jenkins"],
        source: Some("https://github.com/VinitChawda06"),
        demo: None,
    },
    ProjectCard {
        title: "DocInsight Engine",
        description: "AI-powered document analysis system with 90% contextual accuracy using LangChain and ChromaDB.",
        long_description: Some("Built an AI-powered document analysis tool achieving 90% contextual accuracy for business intelligence. The system supports business intelligence use cases, providing actionable insights from structured and unstructured data. This project demonstrates my ability to work with advanced NLP technologies and create practical solutions for document processing and analysis."),
        image: PLACEHOLDER_IMAGE,
        technologies: &["LangChain", "ChromaDB", "Python", "NLP"],
        source: Some("https://github.com/VinitChawda06"),
        demo: None,
    },
    ProjectCard {
        title: "AttendEase",
        description: "Face-recognition based attendance system with 95% accuracy, saving 180+ manual hours annually.",
        long_description: Some("Developed a face-recognition based attendance system with 95% accuracy, automating reports and saving 180+ manual hours annually. The system is integrated with automated Excel sheet generation, demonstrating expertise in computer vision and automation. This project showcases my ability to create practical solutions that streamline processes in educational and corporate environments."),
        image: PLACEHOLDER_IMAGE,
        technologies: &["OpenCV", "Face Recognition", "Python", "Excel Automation"],
        source: Some("https://github.com/VinitChawda06"),
        demo: None,
    },
];

pub static EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry::Experience(ExperienceEntry {
        milestone: Milestone {
            period: "Apr 2025 - Jul 2025",
            title: "AI Engineer Intern",
            institution: "WEQ Technologies, Mumbai, Maharashtra",
            description: "Built an AI-powered multi-agent Sales Assistant with Redis-backed memory for scalable lead handling on WhatsApp. Developed Drools based rule engine with Python Fast-API, enabling dynamic lead scoring and CRM integration. Automated workflows with HubSpot and Apollo, reducing manual effort and boosting efficiency.",
        },
        achievements: &[
            "Built AI-powered multi-agent Sales Assistant with Redis-backed memory",
            "Developed Drools based rule engine with Python Fast-API",
            "Automated workflows with HubSpot and Apollo integration",
            "Enabled dynamic lead scoring and CRM integration",
        ],
        technologies: &["Python", "FastAPI", "Redis", "Drools", "HubSpot", "Apollo"],
    }),
    TimelineEntry::Experience(ExperienceEntry {
        milestone: Milestone {
            period: "Sep 2024 - Feb 2025",
            title: "AI Intern",
            institution: "The Mould Story, Mumbai, Maharashtra",
            description: "Researched and implemented AI solutions for Shopify, enhancing sales & customer engagement. Designed chatbots and process automation to optimize conversions.",
        },
        achievements: &[
            "Researched and implemented AI solutions for Shopify platform",
            "Enhanced sales and customer engagement through AI integration",
            "Designed chatbots for improved customer interaction",
            "Implemented process automation to optimize conversions",
        ],
        technologies: &[],
    }),
    TimelineEntry::Experience(ExperienceEntry {
        milestone: Milestone {
            period: "Jun 2023 - Aug 2023",
            title: "Backend Developer Intern",
            institution: "Bhagwati Consultancy, Mumbai, Maharashtra",
            description: "Led development of a bilingual KYC portal, managing testing and deployment. Built APIs with Flask & Selenium for data scraping; developed the company website on WordPress.",
        },
        achievements: &[
            "Led development of bilingual KYC portal",
            "Built APIs with Flask & Selenium for data scraping",
            "Developed company website using WordPress",
            "Managed testing and deployment processes",
        ],
        technologies: &["Flask", "Selenium", "WordPress"],
    }),
];

pub static LEADERSHIP: &[TimelineEntry] = &[
    TimelineEntry::Leadership(Milestone {
        period: "Jun 2023 - Jul 2024",
        title: "Senior Level Maintainer",
        institution: "TCET - Open Source, Thakur College of Engineering and Technology",
        description: "Led a team building an ERP system for 3,000+ students, 100+ faculties, and 50+ employees, emphasizing efficient data management and improving overall system efficiency.",
    }),
    TimelineEntry::Leadership(Milestone {
        period: "Sep 2022 - Sep 2024",
        title: "Creative Lead",
        institution: "SUPER-AI CLUB, Thakur College of Engineering and Technology",
        description: "Organized 12+ technical workshops on AI/ML technologies and coding contests, fostering innovation, collaboration, and intra-departmental engagement.",
    }),
];

pub static EDUCATION: &[TimelineEntry] = &[
    TimelineEntry::Education(Milestone {
        period: "Dec 2021 - May 2025",
        title: "Bachelor of Technology in AI & ML",
        institution: "Thakur College of Engineering and Technology",
        description: "GPA - 9.3. Focusing on artificial intelligence and machine learning technologies with strong foundation in multi-agent systems, deep learning, and conversational AI.",
    }),
    TimelineEntry::Education(Milestone {
        period: "Jun 2019 - Mar 2021",
        title: "Higher Secondary Certificate (HSC) - Science",
        institution: "Mithibai College",
        description: "Percentage - 88%. Completed science stream with focus on mathematics and computer science.",
    }),
];
