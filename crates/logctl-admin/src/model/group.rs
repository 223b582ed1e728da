// Default group enumeration used by membership updates

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default groups a user can hold within a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultGroup {
    Member,
    Admin,
    Eliminator,
}

impl DefaultGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            DefaultGroup::Member => "Member",
            DefaultGroup::Admin => "Admin",
            DefaultGroup::Eliminator => "Eliminator",
        }
    }
}

impl std::fmt::Display for DefaultGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DefaultGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(DefaultGroup::Member),
            "admin" => Ok(DefaultGroup::Admin),
            "eliminator" => Ok(DefaultGroup::Eliminator),
            _ => Err(format!("Invalid default group: {}", s)),
        }
    }
}

impl From<DefaultGroup> for Value {
    fn from(group: DefaultGroup) -> Self {
        Value::String(group.as_str().to_string())
    }
}
