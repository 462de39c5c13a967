use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /search/repositories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: String,
    pub language: Option<String>,
    pub license: Option<RepoLicense>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoLicense {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
}

/// A search hit annotated with its license classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRepository {
    #[serde(flatten)]
    pub repository: Repository,
    pub classification: LicenseClassification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseClassification {
    pub status: LicenseStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub access_type: AccessType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Allowed,
    Review,
    Forbidden,
    Unknown,
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseStatus::Allowed => write!(f, "allowed"),
            LicenseStatus::Review => write!(f, "review"),
            LicenseStatus::Forbidden => write!(f, "forbidden"),
            LicenseStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    Granted,
    AuditReq,
    Restricted,
    Unknown,
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessType::Granted => write!(f, "GRANTED"),
            AccessType::AuditReq => write!(f, "AUDIT_REQ"),
            AccessType::Restricted => write!(f, "RESTRICTED"),
            AccessType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Result of one search action. Failures of the search backend collapse into
/// `error = true` with no repositories.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub translated_query: String,
    pub repositories: Vec<ClassifiedRepository>,
    pub error: bool,
}

impl SearchOutcome {
    pub fn count(&self, status: LicenseStatus) -> usize {
        self.repositories
            .iter()
            .filter(|r| r.classification.status == status)
            .count()
    }
}
