use std::fmt;

use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::modules::coding_profile::application::ports::outgoing::CreateCodingProfileData;
use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::outgoing::CreateExperienceData;
use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::modules::settings::application::ports::outgoing::NewSettingsData;
use crate::modules::skill::application::ports::outgoing::CreateSkillData;

/// Records written by the seed loader, in insertion order.
#[derive(Debug, Clone)]
pub struct PortfolioDataset {
    pub settings: NewSettingsData,
    pub projects: Vec<CreateProjectData>,
    pub skills: Vec<CreateSkillData>,
    pub experiences: Vec<CreateExperienceData>,
    pub profiles: Vec<CreateCodingProfileData>,
}

/// Rows inserted per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub settings: u64,
    pub projects: u64,
    pub skills: u64,
    pub experiences: u64,
    pub profiles: u64,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "settings={} projects={} skills={} experiences={} profiles={}",
            self.settings, self.projects, self.skills, self.experiences, self.profiles
        )
    }
}

impl PortfolioDataset {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            settings: 1,
            projects: self.projects.len() as u64,
            skills: self.skills.len() as u64,
            experiences: self.experiences.len() as u64,
            profiles: self.profiles.len() as u64,
        }
    }

    /// The starter portfolio shipped with the project.
    pub fn starter() -> Self {
        Self {
            settings: starter_settings(),
            projects: starter_projects(),
            skills: starter_skills(),
            experiences: starter_experiences(),
            profiles: starter_profiles(),
        }
    }
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn starter_settings() -> NewSettingsData {
    NewSettingsData {
        name: "VETRISELVAN V".to_string(),
        title: "AI & Data Science Student".to_string(),
        bio: "SNS College of Technology".to_string(),
        profile_image: some("https://api.dicebear.com/7.x/avataaars/svg?seed=VETRISELVAN"),
        resume_link: some("#"),
        linkedin: some("https://linkedin.com/in/vetriselvan-v-162596382"),
        github: some("https://github.com"),
        devpost: None,
        leetcode: None,
        email: some("vetriselvanv2008@gmail.com"),
        about_description: some(
            "Motivated B.Tech student in Artificial Intelligence and Data Science with \
             hands-on knowledge of Python and Web Development. Passionate about solving \
             real-world problems using technology and logical thinking. Continuously \
             improving technical skills and applying knowledge in real-time projects and \
             hackathons.",
        ),
    }
}

fn project(title: &str, description: &str, tech: &[&str], icon: &str) -> CreateProjectData {
    CreateProjectData {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        github: None,
        live: None,
        image: None,
        icon: some(icon),
    }
}

fn starter_projects() -> Vec<CreateProjectData> {
    vec![
        project(
            "Weather Prediction Web App",
            "A robust web application that uses real-time weather APIs to provide current \
             conditions and implements machine learning-based forecasting models for accurate \
             future predictions.",
            &["Python", "ML", "API"],
            "CloudSun",
        ),
        project(
            "Scientific Calculator",
            "An advanced calculation tool designed to perform complex mathematical and \
             scientific operations with a focus on accuracy and user-friendly interface.",
            &["Python", "Math"],
            "Calculator",
        ),
        project(
            "Nxt Pharma",
            "A specialized analytics platform focused on the pharmaceutical industry, providing \
             deep insights into sales performance and inventory management.",
            &["Analytics", "Data Science"],
            "Database",
        ),
    ]
}

fn starter_skills() -> Vec<CreateSkillData> {
    [
        ("Python", 85, "Programming"),
        ("HTML", 90, "Web"),
        ("CSS", 85, "Web"),
        ("Web Development", 80, "Web"),
        ("Excel", 75, "Tools"),
        ("Design Thinking", 85, "Tools"),
        ("Problem Solving", 90, "Tools"),
        ("Generative AI", 80, "Interests"),
        ("LLMs", 75, "Interests"),
        ("Vibe Coding", 90, "Interests"),
    ]
    .into_iter()
    .map(|(name, level, category)| CreateSkillData {
        name: name.to_string(),
        level,
        category: category.to_string(),
    })
    .collect()
}

fn experience(
    title: &str,
    company: Option<&str>,
    description: Option<&str>,
    period: &str,
    experience_type: ExperienceType,
) -> CreateExperienceData {
    CreateExperienceData {
        title: title.to_string(),
        company: company.map(str::to_string),
        location: None,
        period: period.to_string(),
        description: description.map(str::to_string),
        experience_type,
    }
}

fn starter_experiences() -> Vec<CreateExperienceData> {
    use ExperienceType::{Certification, Education, Hackathon};

    vec![
        experience(
            "B.Tech – Artificial Intelligence & Data Science",
            Some("SNS College of Technology"),
            None,
            "2022 - 2026",
            Education,
        ),
        experience("Higher Secondary", Some("School"), None, "90%", Education),
        experience("SSLC", Some("School"), None, "91.2%", Education),
        experience(
            "NASA Space App Challenge",
            None,
            Some("International Space Apps Challenge Participant"),
            "2024",
            Hackathon,
        ),
        experience(
            "HACKNEXT’25",
            None,
            Some("National Level Hackathon Participant"),
            "2025",
            Hackathon,
        ),
        experience(
            "Zenith’25",
            None,
            Some("Technical Symposium Winner"),
            "2025",
            Hackathon,
        ),
        experience("Enterprise Design Thinking", Some("IBM"), None, "2024", Certification),
        experience("AI & Data Science", Some("IBM"), None, "2024", Certification),
        experience("Cloud Computing", Some("AWS"), None, "2024", Certification),
    ]
}

#[allow(clippy::too_many_arguments)]
fn profile(
    platform: &str,
    username: &str,
    description: &str,
    icon: &str,
    color: &str,
    link: &str,
    stats: [(&str, &str); 2],
) -> CreateCodingProfileData {
    CreateCodingProfileData {
        platform: platform.to_string(),
        username: username.to_string(),
        description: some(description),
        icon: some(icon),
        color: some(color),
        link: some(link),
        stats: stats
            .into_iter()
            .map(|(label, value)| ProfileStat::new(label, value))
            .collect(),
    }
}

fn starter_profiles() -> Vec<CreateCodingProfileData> {
    vec![
        profile(
            "GitHub",
            "vetri-selvan",
            "Open source contributor and full-stack developer.",
            "Github",
            "bg-gray-100",
            "https://github.com/vetri-selvan",
            [("Repos", "45+"), ("Stars", "120+")],
        ),
        profile(
            "LeetCode",
            "vetri_selvan",
            "Solving complex algorithms and data structure problems.",
            "Code2",
            "bg-orange-500",
            "https://leetcode.com/vetri-selvan",
            [("Solved", "350+"), ("Rank", "Top 5%")],
        ),
        profile(
            "LinkedIn",
            "vetriselvan-v",
            "Connecting with professionals and sharing insights.",
            "Linkedin",
            "bg-blue-600",
            "https://linkedin.com/in/vetri-selvan",
            [("Connections", "500+"), ("Posts", "20+")],
        ),
        profile(
            "Devpost",
            "vetriselvan",
            "Showcasing hackathon projects and innovations.",
            "Award",
            "bg-blue-400",
            "https://devpost.com/vetri-selvan",
            [("Hackathons", "8"), ("Wins", "3")],
        ),
    ]
}
