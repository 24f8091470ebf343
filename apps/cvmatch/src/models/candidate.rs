use serde::{Deserialize, Serialize};

use crate::models::job::split_skills;

/// A stored candidate as returned by the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCandidate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub cv_path: Option<String>,
}

impl AdminCandidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn skill_list(&self) -> Vec<String> {
        split_skills(&self.skills)
    }
}
