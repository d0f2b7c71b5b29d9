//! The command table.
//!
//! Every keyword the terminal understands maps to a plain `fn` handler.
//! Handlers never fail: bad arguments come back as `Output::Error` lines so
//! the session keeps going.

use crate::output::{Line, Output, Tone};
use crate::runtime::parser::ParsedCommand;
use crate::section::Section;

/// Side effect a command asks the engine to perform besides printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Empty the transcript instead of appending.
    Clear,
    /// Scroll the page to a section once the reply has been drawn.
    Navigate(Section),
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: Output,
    pub effect: Option<Effect>,
}

impl Reply {
    fn print(output: Output) -> Self {
        Self {
            output,
            effect: None,
        }
    }
}

pub type Handler = fn(&[String]) -> Reply;

/// One entry of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    /// Shown in `help`, e.g. `cd [section]`.
    pub usage: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Show this help message",
        handler: help,
    },
    CommandSpec {
        name: "about",
        usage: "about",
        description: "Display information about Saurav Singh",
        handler: |_| Reply::print(Output::text(ABOUT_TEXT)),
    },
    CommandSpec {
        name: "skills",
        usage: "skills",
        description: "List technical skills",
        handler: |_| Reply::print(Output::text(SKILLS_TEXT)),
    },
    CommandSpec {
        name: "experience",
        usage: "experience",
        description: "Show work experience",
        handler: |_| Reply::print(Output::text(EXPERIENCE_TEXT)),
    },
    CommandSpec {
        name: "education",
        usage: "education",
        description: "Display educational background",
        handler: |_| Reply::print(Output::text(EDUCATION_TEXT)),
    },
    CommandSpec {
        name: "certifications",
        usage: "certifications",
        description: "List professional certifications",
        handler: |_| Reply::print(Output::text(CERTIFICATIONS_TEXT)),
    },
    CommandSpec {
        name: "projects",
        usage: "projects",
        description: "Display portfolio projects",
        handler: |_| Reply::print(Output::text(PROJECTS_TEXT)),
    },
    CommandSpec {
        name: "contact",
        usage: "contact",
        description: "Show contact information",
        handler: |_| Reply::print(Output::text(CONTACT_TEXT)),
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        description: "Clear the terminal",
        handler: |_| Reply {
            output: Output::text(""),
            effect: Some(Effect::Clear),
        },
    },
    CommandSpec {
        name: "ls",
        usage: "ls",
        description: "List sections",
        handler: list_sections,
    },
    CommandSpec {
        name: "cd",
        usage: "cd [section]",
        description: "Navigate to a section",
        handler: change_section,
    },
    CommandSpec {
        name: "cat",
        usage: "cat [file]",
        description: "View content of a file",
        handler: read_file,
    },
];

/// Files `cat` knows about, keyed by lower-case name.
pub static FILES: &[(&str, &str)] = &[
    ("profile.txt", PROFILE_TXT),
    ("resume.txt", RESUME_TXT),
];

/// Find a command by keyword (case-insensitive).
pub fn lookup(keyword: &str) -> Option<&'static CommandSpec> {
    let lower = keyword.to_lowercase();
    COMMANDS.iter().find(|c| c.name == lower)
}

/// All command keywords in table order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

/// All `cat`-able file names.
pub fn file_names() -> impl Iterator<Item = &'static str> {
    FILES.iter().map(|(name, _)| *name)
}

/// Central dispatch: route a parsed line to its handler.
pub fn dispatch(cmd: &ParsedCommand) -> Reply {
    match lookup(&cmd.keyword) {
        Some(spec) => (spec.handler)(&cmd.args),
        None => Reply::print(Output::error(not_found_message(&cmd.keyword))),
    }
}

pub fn not_found_message(keyword: &str) -> String {
    format!(
        "Command not found: {}. Type 'help' for available commands.",
        keyword
    )
}

// ── Handlers ──

fn help(_args: &[String]) -> Reply {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0) + 3;

    let mut lines = vec![Line::styled("Available commands:", Tone::Heading)];
    for spec in COMMANDS {
        lines.push(
            Line::styled("  ", Tone::Plain)
                .push(format!("{:<width$}", spec.usage, width = width), Tone::Command)
                .push(spec.description, Tone::Plain),
        );
    }
    lines.push(Line::blank());
    lines.push(
        Line::styled("Try typing ", Tone::Info)
            .push("about", Tone::Command)
            .push(" to get started!", Tone::Info),
    );
    Reply::print(Output::Fragment(lines))
}

fn list_sections(_args: &[String]) -> Reply {
    let mut lines = vec![Line::styled("Available sections:", Tone::Info)];
    for section in Section::all() {
        lines.push(
            Line::styled("  ", Tone::Plain).push(format!("{}/", section.name()), Tone::Command),
        );
    }
    lines.push(Line::blank());
    lines.push(
        Line::styled("Use ", Tone::Info)
            .push("cd [section]", Tone::Command)
            .push(" to navigate.", Tone::Info),
    );
    Reply::print(Output::Fragment(lines))
}

fn change_section(args: &[String]) -> Reply {
    let Some(arg) = args.first() else {
        return Reply::print(Output::error("Usage: cd [section]"));
    };

    match Section::from_name(arg) {
        Some(section) => Reply {
            output: Output::Fragment(vec![
                Line::styled("Navigating to ", Tone::Info)
                    .push(section.name(), Tone::Command)
                    .push(" section...", Tone::Info),
            ]),
            effect: Some(Effect::Navigate(section)),
        },
        None => Reply::print(Output::error(format!(
            "Error: Section '{}' not found. Type 'ls' to see available sections.",
            arg.to_lowercase()
        ))),
    }
}

fn read_file(args: &[String]) -> Reply {
    let Some(arg) = args.first() else {
        return Reply::print(Output::error("Usage: cat [file]"));
    };

    let name = arg.to_lowercase();
    match FILES.iter().find(|(file, _)| *file == name) {
        Some((_, content)) => Reply::print(Output::text(*content)),
        None => Reply::print(Output::error(format!("Error: File '{}' not found.", name))),
    }
}

// ── Canned responses ──

pub const ABOUT_TEXT: &str = "Name: Saurav Singh
Role: Cloud Engineer
Location: Bengaluru/Gurugram, India

Cloud Engineer with 3+ years of experience in AWS, GCP, Azure, and OCI.
Automation enthusiast with strong communication skills and a special knack for creating innovative solutions.
Highly certified in cloud technologies with expertise in DevOps practices, Terraform, and infrastructure as code.

Type 'skills' to see my technical expertise.";

pub const SKILLS_TEXT: &str = "Technical Skills:

Cloud Platforms:
  - AWS, GCP, Azure, OCI

DevOps:
  - Jenkins, Ansible, Kubernetes, GitHub, GitLab, Bitbucket, Docker

Automation:
  - Terraform, CloudFormation, Shell scripting, Python

Web Servers & Databases:
  - Apache, Nginx, MySQL

Operating Systems:
  - Linux

Security:
  - IAM, Inspector, AWS governance tools

Type 'certifications' to see my cloud certifications.";

pub const EXPERIENCE_TEXT: &str = "Work Experience:

Searce Cosourcing Pvt Ltd (June 2022 - Present)
Cloud Engineer
- Terraform modules and CloudFormation development
- Cloud migration (Azure to GCP, AWS to GCP)
- Linux servers & EKS administration
- Monitoring with Prometheus and Grafana
- Kubernetes clusters management with Anthos
- Shell/Python scripting for automation
- WAF & SIEM implementation

Intellipaat Software Solutions (June 2021 - May 2022)
Lead Cloud Analyst
- CI/CD pipeline implementation
- Security best practices and AWS Governance
- Linux with Apache and PHP configuration
- Python automation with BOTO SDK
- OpenShift and EKS implementation

Department Of Youth Capital (Jan 2021 - Jun 2021)
AWS Cloud Practitioner (Internship)
- Static website hosting on VMs and S3
- Route53 DNS management
- Basic cloud services implementation

Type 'projects' to view my portfolio projects.";

pub const CERTIFICATIONS_TEXT: &str = "Professional Certifications:

Google Cloud Certifications:
✓ Professional Cloud Network Engineer
✓ Professional Cloud Security Engineer
✓ Professional Cloud DevOps Engineer
✓ Professional Cloud Architect
✓ Associate Cloud Engineer

AWS Certifications:
✓ AWS Certified Solutions Architect - Associate
✓ AWS Certified Cloud Practitioner

Microsoft Certification:
✓ Azure Fundamentals (AZ-900)

Oracle Certification:
✓ Oracle Cloud Infrastructure Foundations Associate";

pub const EDUCATION_TEXT: &str = "Educational Background:

Bachelor of Technology (B-Tech) in Computer Science
Lovely Professional University
CGPA: 7.8 (Equivalent to 80%)

Intermediate Education (2017)
Holy Convent Sr Sec School
Percentage: 92%

Matriculation Education (2015)
DAV HR Sec School
CGPA: 10.0";

pub const PROJECTS_TEXT: &str = "Portfolio Projects:

Cloud Deployments:
- VM and SAAS-based application deployment to GCP Marketplace
- Terraformisation of pre-existing development and production projects
- Cloud migrations (Azure to GCP, AWS to GCP)
- Anthos implementation for hybrid cloud management

Personal Projects:
- Employee Database Web App with S3, RDS, DynamoDB, Python/Flask
- Three-Tier Architecture (Web, App, DB) with CloudFormation
- Zoom API Integration for automated report downloads
- Portfolio Website with message notifications, hosted on AWS

Type 'cd projects' to navigate to the projects section for more details.";

pub const CONTACT_TEXT: &str = "Contact Information:

Email: singhsaurav400@gmail.com
Phone: +91-9899123603
Website: www.sauravsingh.tech
GitHub: github.com/sauravinside
LinkedIn: linkedin.com/in/saurav-singh-81321b16a

Feel free to reach out for collaborations or opportunities!";

pub const PROFILE_TXT: &str = "=== profile.txt ===
Name: Saurav Singh
Role: Cloud Engineer
Location: Bengaluru/Gurugram, India
Experience: 3+ years in Cloud & DevOps
Expertise: AWS, GCP, Azure, Terraform, Kubernetes";

pub const RESUME_TXT: &str = "=== resume.txt ===
SUMMARY
Cloud Engineer with 3+ years of experience. Automation enthusiast with strong communication skills.

EXPERIENCE
- Cloud Engineer at Searce (2022-Present)
- Lead Cloud Analyst at Intellipaat (2021-2022)
- AWS Cloud Practitioner at Department Of Youth Capital (2021)

EDUCATION
- B.Tech in Computer Science, Lovely Professional University, CGPA: 7.8

For full resume, type 'experience'.";
