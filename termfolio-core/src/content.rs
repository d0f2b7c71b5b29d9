//! Static portfolio data rendered by the page pane.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub provider: &'static str,
    pub issue_date: &'static str,
    pub expiry_date: &'static str,
    pub credential_id: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub score: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const NAME: &str = "Saurav Singh";
pub const TITLE: &str = "Cloud Engineer & DevOps Specialist";
pub const TAGLINE: &str = "AWS | GCP | Azure | Terraform | Kubernetes";

pub static ABOUT: &[(&str, &str)] = &[
    (
        "Who I Am",
        "I'm a Cloud Engineer with over 3 years of experience specializing in AWS, GCP, Azure, and OCI environments. An automation enthusiast with strong communication skills and a passion for developing innovative solutions to complex cloud infrastructure challenges.",
    ),
    (
        "My Approach",
        "I believe in creating scalable, secure, and efficient cloud solutions that meet specific business needs while optimizing for performance and cost.",
    ),
    (
        "My Journey",
        "From starting as an AWS Cloud Practitioner intern to becoming a specialized Cloud Engineer, I've consistently expanded my knowledge and expertise across multiple cloud platforms. My experience includes migration projects, implementing CI/CD pipelines, and creating robust infrastructure solutions with Terraform and Kubernetes.",
    ),
];

pub static FOCUS_AREAS: &[&str] = &[
    "Cloud Architecture",
    "Infrastructure as Code",
    "DevOps Automation",
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        name: "Professional Cloud Network Engineer",
        provider: "Google Cloud",
        issue_date: "May 2023",
        expiry_date: "May 2025",
        credential_id: "73263053",
        description: "Validates expertise in implementing Google Cloud networking, including VPC networks, hybrid connectivity, network services, and security.",
    },
    Certification {
        id: 2,
        name: "Professional Cloud Security Engineer",
        provider: "Google Cloud",
        issue_date: "Apr 2023",
        expiry_date: "Apr 2025",
        credential_id: "72428931",
        description: "Certifies ability to design and implement secure infrastructure on Google Cloud, configure access controls, and set up network security defenses.",
    },
    Certification {
        id: 3,
        name: "Professional Cloud DevOps Engineer",
        provider: "Google Cloud",
        issue_date: "Jan 2023",
        expiry_date: "Jan 2025",
        credential_id: "65622763",
        description: "Validates skills in implementing and managing continuous delivery pipelines and optimizing service performance on Google Cloud.",
    },
    Certification {
        id: 4,
        name: "Professional Cloud Architect",
        provider: "Google Cloud",
        issue_date: "Dec 2022",
        expiry_date: "Dec 2024",
        credential_id: "64890290",
        description: "Certifies ability to design, develop, and manage robust, secure, scalable, highly available, and dynamic solutions on Google Cloud.",
    },
    Certification {
        id: 5,
        name: "Associate Cloud Engineer",
        provider: "Google Cloud",
        issue_date: "Sep 2022",
        expiry_date: "Sep 2024",
        credential_id: "58258492",
        description: "Validates skills in deploying applications, monitoring operations, and managing enterprise solutions on Google Cloud.",
    },
    Certification {
        id: 6,
        name: "AWS Certified Solutions Architect - Associate",
        provider: "Amazon Web Services",
        issue_date: "Dec 2023",
        expiry_date: "Dec 2026",
        credential_id: "RQX6G5FDYF44QSG1",
        description: "Validates expertise in designing and deploying scalable, highly available, and fault-tolerant systems on AWS.",
    },
    Certification {
        id: 7,
        name: "AWS Certified Cloud Practitioner",
        provider: "Amazon Web Services",
        issue_date: "Sep 2022",
        expiry_date: "Sep 2025",
        credential_id: "QKZZC01CZ1FE1MGR",
        description: "Validates cloud fluency and foundational knowledge of AWS cloud services, architecture, security, and compliance.",
    },
    Certification {
        id: 8,
        name: "Microsoft Certified: Azure Fundamentals",
        provider: "Microsoft",
        issue_date: "Apr 2022",
        expiry_date: "N/A (Does not expire)",
        credential_id: "N/A",
        description: "Validates foundational knowledge of cloud concepts and Azure services, including security, privacy, compliance, and pricing.",
    },
    Certification {
        id: 9,
        name: "Oracle Cloud Infrastructure Foundations Associate",
        provider: "Oracle",
        issue_date: "Feb 2022",
        expiry_date: "N/A (Does not expire)",
        credential_id: "nd152689qT11W",
        description: "Validates foundational knowledge of Oracle Cloud Infrastructure services, including compute, storage, and networking concepts.",
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        id: 1,
        company: "Searce Cosourcing Pvt Ltd",
        position: "Cloud Engineer",
        duration: "June 2022 - Present",
        location: "Gurugram, India",
        description: "Working on enterprise-level cloud infrastructure and DevOps solutions.",
        responsibilities: &[
            "Terraform modules and CloudFormation development",
            "Cloud migration (Azure to GCP, AWS to GCP)",
            "Linux servers & EKS administration",
            "Monitoring with Prometheus and Grafana",
            "Kubernetes clusters management with Anthos",
            "Shell/Python scripting for automation",
            "WAF & SIEM implementation",
        ],
        technologies: &["AWS", "GCP", "Terraform", "Kubernetes", "Python", "Linux"],
    },
    Experience {
        id: 2,
        company: "Intellipaat Software Solutions",
        position: "Lead Cloud Analyst",
        duration: "June 2021 - May 2022",
        location: "Bangalore, India",
        description: "Led cloud infrastructure projects and provided technical consulting.",
        responsibilities: &[
            "CI/CD pipeline implementation (GitHub Actions, Jenkins, CodePipeline)",
            "Security best practices and AWS Governance",
            "Linux configuration with Apache and PHP",
            "Python automation with BOTO SDK",
            "OpenShift and EKS implementation",
        ],
        technologies: &["AWS", "CI/CD", "Docker", "Python", "Terraform", "GCP"],
    },
    Experience {
        id: 3,
        company: "Department Of Youth Capital",
        position: "AWS Cloud Practitioner (Internship)",
        duration: "Jan 2021 - Jun 2021",
        location: "Jalandhar, Punjab, India",
        description: "Gained hands-on experience with AWS cloud services and infrastructure.",
        responsibilities: &[
            "Static website hosting on VMs and S3",
            "Route53 DNS management",
            "Basic cloud services implementation",
        ],
        technologies: &["AWS", "Linux", "Python"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "GCP Marketplace Application Deployment",
        description: "Deployed VM and SAAS-based application to GCP Marketplace, making it available for enterprise customers.",
        technologies: &["GCP", "Terraform", "Docker", "Kubernetes"],
        category: "Cloud Deployment",
        details: &[
            "Configured VM and container-based application deployments",
            "Set up Marketplace integration for seamless customer deployment",
            "Implemented automated testing and verification",
            "Developed documentation for end-users",
        ],
    },
    Project {
        id: 2,
        title: "Multi-Cloud Infrastructure as Code",
        description: "Terraformisation of pre-existing development and production projects for consistent infrastructure management.",
        technologies: &["Terraform", "AWS", "GCP", "Azure"],
        category: "Infrastructure as Code",
        details: &[
            "Converted existing manually-managed infrastructure to Terraform",
            "Created modular and reusable Terraform components",
            "Implemented CI/CD for infrastructure deployment",
            "Established state management and version control",
        ],
    },
    Project {
        id: 3,
        title: "Cloud Migration Projects",
        description: "Migrated applications and infrastructure from Azure to GCP and AWS to GCP with minimal downtime.",
        technologies: &["GCP", "AWS", "Azure", "Terraform"],
        category: "Cloud Migration",
        details: &[
            "Developed migration strategy and architecture",
            "Implemented parallel environments for testing",
            "Managed data transfer and synchronization",
            "Executed cutover with minimal service disruption",
        ],
    },
    Project {
        id: 4,
        title: "Anthos Hybrid Cloud Implementation",
        description: "Centrally managed Kubernetes clusters on hybrid cloud model via Anthos for a unified management experience.",
        technologies: &["GCP", "Anthos", "Kubernetes", "Terraform"],
        category: "Hybrid Cloud",
        details: &[
            "Configured Anthos for multi-cloud Kubernetes management",
            "Set up hybrid connectivity and security policies",
            "Implemented centralized logging and monitoring",
            "Created consistent deployment pipelines",
        ],
    },
    Project {
        id: 5,
        title: "Employee Database Web Application",
        description: "Built a web application with backend for uploading images to S3 and using RDS for main database with DynamoDB for metadata.",
        technologies: &["AWS", "S3", "RDS", "DynamoDB", "Python", "Flask"],
        category: "Personal Project",
        details: &[
            "Designed and implemented a scalable application architecture",
            "Created Python backend with Flask API",
            "Integrated AWS services (S3, RDS, DynamoDB)",
            "Developed image upload and processing functionality",
        ],
    },
    Project {
        id: 6,
        title: "Three-Tier Architecture Deployment",
        description: "Created a three-tier architecture (Web, App, and DB) using CloudFormation for automated deployment.",
        technologies: &["AWS", "CloudFormation", "EC2", "RDS"],
        category: "Personal Project",
        details: &[
            "Designed scalable three-tier application architecture",
            "Created CloudFormation templates for infrastructure",
            "Implemented load balancing and auto-scaling",
            "Set up database replication and backups",
        ],
    },
];

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Cloud Platforms",
        skills: &[
            skill("AWS", 90),
            skill("Google Cloud", 95),
            skill("Azure", 80),
            skill("Oracle Cloud", 75),
        ],
    },
    SkillCategory {
        name: "Infrastructure as Code",
        skills: &[
            skill("Terraform", 95),
            skill("CloudFormation", 85),
            skill("Ansible", 80),
        ],
    },
    SkillCategory {
        name: "Containerization & Orchestration",
        skills: &[
            skill("Docker", 90),
            skill("Kubernetes", 85),
            skill("EKS", 85),
            skill("GKE", 85),
            skill("Anthos", 80),
        ],
    },
    SkillCategory {
        name: "CI/CD & DevOps",
        skills: &[
            skill("Jenkins", 80),
            skill("GitHub Actions", 85),
            skill("GitLab CI/CD", 75),
            skill("AWS CodePipeline", 80),
        ],
    },
    SkillCategory {
        name: "Monitoring & Security",
        skills: &[
            skill("Prometheus", 85),
            skill("Grafana", 85),
            skill("IAM", 90),
            skill("WAF & SIEM", 80),
        ],
    },
    SkillCategory {
        name: "Programming & Scripting",
        skills: &[
            skill("Python", 90),
            skill("Shell Scripting", 85),
            skill("BOTO SDK", 85),
        ],
    },
    SkillCategory {
        name: "Web Servers & Databases",
        skills: &[
            skill("Apache", 80),
            skill("Nginx", 80),
            skill("MySQL", 85),
            skill("DynamoDB", 80),
            skill("RDS", 85),
        ],
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Technology (B-Tech) in Computer Science",
        institution: "Lovely Professional University",
        score: "CGPA: 7.8 (Equivalent to 80%)",
    },
    Education {
        degree: "Intermediate Education (2017)",
        institution: "Holy Convent Sr Sec School",
        score: "Percentage: 92%",
    },
    Education {
        degree: "Matriculation Education (2015)",
        institution: "DAV HR Sec School",
        score: "CGPA: 10.0",
    },
];

pub static CONTACT: ContactInfo = ContactInfo {
    email: "singhsaurav400@gmail.com",
    phone: "+91-9899123603",
    website: "www.sauravsingh.tech",
    github: "github.com/sauravinside",
    linkedin: "linkedin.com/in/saurav-singh-81321b16a",
};

pub static AVAILABILITY: &[&str] = &[
    "Available for freelance projects",
    "Open to collaboration opportunities",
    "Interested in challenging cloud infrastructure projects",
    "Available for consulting on AWS/GCP architecture",
];
