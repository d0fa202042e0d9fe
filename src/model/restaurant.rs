use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
}

impl Restaurant {
    pub fn new(id: i64, name: impl Into<String>, owner_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chef {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub email: String,
}

impl Chef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
