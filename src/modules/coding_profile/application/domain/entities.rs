use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One headline number shown on a profile card, e.g. `Solved: 350+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileStat {
    #[schema(example = "Solved")]
    pub label: String,
    #[schema(example = "350+")]
    pub value: String,
}

impl ProfileStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
