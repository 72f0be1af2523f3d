//! Credential records and precedence merging

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names one of the two credential fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    /// Fields in the order they are checked and prompted for
    pub const ALL: [CredentialField; 2] = [CredentialField::Username, CredentialField::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::Username => "username",
            CredentialField::Password => "password",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username and password used to authenticate the messaging agent
///
/// A record is complete once both fields are non-empty. Fields missing from a
/// persisted file deserialize as empty strings.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Username => &self.username,
            CredentialField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        match field {
            CredentialField::Username => self.username = value.into(),
            CredentialField::Password => self.password = value.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Empty fields, username first
    pub fn missing_fields(&self) -> Vec<CredentialField> {
        CredentialField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Overlay this record's non-empty fields onto `persisted`
    pub fn merged_over(self, persisted: CredentialRecord) -> CredentialRecord {
        CredentialRecord {
            username: pick(self.username, persisted.username),
            password: pick(self.password, persisted.password),
        }
    }
}

fn pick(explicit: String, fallback: String) -> String {
    if explicit.is_empty() {
        fallback
    } else {
        explicit
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password", &password)
            .finish()
    }
}
