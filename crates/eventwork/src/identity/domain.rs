use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Worker,
    Authoriser,
}

impl AccountKind {
    pub const fn label(self) -> &'static str {
        match self {
            AccountKind::Worker => "worker",
            AccountKind::Authoriser => "authoriser",
        }
    }
}

/// Registered account as persisted in the accounts collection and the session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub phone: String,
    /// Argon2 PHC string; the plain credential is never stored.
    pub credential_hash: String,
    pub location: String,
    pub kind: AccountKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_worker(&self) -> bool {
        self.kind == AccountKind::Worker
    }

    pub fn is_authoriser(&self) -> bool {
        self.kind == AccountKind::Authoriser
    }

    /// Name shown on listings: the business name when one was registered.
    pub fn display_company(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|company| !company.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// Signup input collected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCandidate {
    pub name: String,
    pub phone: String,
    pub credential: String,
    pub location: String,
    pub kind: AccountKind,
    pub company_name: Option<String>,
    pub profile_photo: Option<String>,
}

impl AccountCandidate {
    pub fn worker(name: &str, phone: &str, credential: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            credential: credential.to_string(),
            location: location.to_string(),
            kind: AccountKind::Worker,
            company_name: None,
            profile_photo: None,
        }
    }

    pub fn authoriser(
        name: &str,
        phone: &str,
        credential: &str,
        location: &str,
        company_name: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            credential: credential.to_string(),
            location: location.to_string(),
            kind: AccountKind::Authoriser,
            company_name: Some(company_name.to_string()),
            profile_photo: None,
        }
    }
}
