use serde::{Deserialize, Serialize};

/// Account details shown in the profile dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}
