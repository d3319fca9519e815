//! Portfolio data records.
//!
//! [`PortfolioProfile`] is built once at startup by [`default_profile`] and
//! shared read-only by every request handler. Nothing in the system mutates
//! it after construction.

use serde::{Deserialize, Serialize};

/// A single skill entry with a self-assessed proficiency level (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
}

/// A portfolio project with its technology stack and repository link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
}

/// The complete portfolio profile served by the API and rendered on the
/// landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub about: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// Build the site owner's profile.
///
/// The data is static source material, not user input, so no validation is
/// applied here.
pub fn default_profile() -> PortfolioProfile {
    PortfolioProfile {
        name: "May Sigrid Dimaano".into(),
        title: "Aspiring Full Stack Developer".into(),
        email: "sigriddimaano@gmail.com".into(),
        github: "https://github.com/mayciii".into(),
        linkedin: "https://www.linkedin.com/in/may-sigrid-dimaano-4052a43aa".into(),
        about: "Passionate developer with experience in frontend and backend development. \
                I enjoy building modern, scalable, and user-friendly applications."
            .into(),
        skills: vec![
            skill("HTML", "Web Development", 90),
            skill("CSS", "Web Development", 85),
            skill("JavaScript", "Web Development", 80),
            skill("Python", "Programming Languages", 75),
            skill("Java", "Programming Languages", 70),
        ],
        projects: vec![
            Project {
                title: "Smart Blood Donor Eligibility Screening System".into(),
                description: "Implements AI logic to check and analyze the health assessment \
                              of potential blood donors, ensuring only qualified individuals \
                              proceed to donation."
                    .into(),
                technologies: vec!["Python".into(), "TKinter".into()],
                github: "https://github.com/mayciii/Smart-Blood-Donor-Eligibilty-Screening-System"
                    .into(),
            },
            Project {
                title: "Console-Based Barangay Equipment Borrowing and Return Tracking System"
                    .into(),
                description: "Centralizes equipment tracking and borrower records to provide \
                              real-time updates on item availability and automated transaction \
                              logging."
                    .into(),
                technologies: vec!["Java".into(), "OOP".into()],
                github: "https://github.com/mayciii/Console-Based-barangay-Equipment-Borrowing-and-Return-Tracking-System".into(),
            },
            Project {
                title: "SABTRACK: Web-based Waste Tracking & Reporting System for Barangay Sabang"
                    .into(),
                description: "A web-based waste management system for Barangay Sabang that lets \
                              residents and officials view collection schedules, report issues, \
                              receive announcements, and learn proper waste disposal — all in \
                              one user-friendly platform."
                    .into(),
                technologies: vec![
                    "HTML".into(),
                    "CSS".into(),
                    "Python".into(),
                    "Flask".into(),
                    "SQLite".into(),
                ],
                github: "https://github.com/mayciii/project3".into(),
            },
        ],
    }
}

fn skill(name: &str, category: &str, level: u8) -> Skill {
    Skill {
        name: name.into(),
        category: category.into(),
        level,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
