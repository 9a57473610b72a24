use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Kind of timeline entry. Anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    #[default]
    Work,
    Education,
    Hackathon,
    Certification,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Work => "work",
            ExperienceType::Education => "education",
            ExperienceType::Hackathon => "hackathon",
            ExperienceType::Certification => "certification",
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown experience type: {0}")]
pub struct UnknownExperienceType(pub String);

impl FromStr for ExperienceType {
    type Err = UnknownExperienceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(ExperienceType::Work),
            "education" => Ok(ExperienceType::Education),
            "hackathon" => Ok(ExperienceType::Hackathon),
            "certification" => Ok(ExperienceType::Certification),
            other => Err(UnknownExperienceType(other.to_string())),
        }
    }
}
