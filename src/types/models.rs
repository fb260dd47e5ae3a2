use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full snapshot of one repository. The `(namespace, name)` pair is globally
/// unique and immutable after creation; `id` is minted deterministically from
/// it. Child tags, stars, and comments are referenced by identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub namespace: String,
    pub name: String,
    /// True when the owning namespace is an organization rather than an
    /// individual user.
    pub org_owned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub tags: Vec<String>,
    pub stars: Vec<String>,
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Client-submitted manifest payload, stored verbatim.
    pub manifest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    /// Identifier of the client tool that pushed the manifest.
    pub agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
    pub size_bytes: i64,
    /// Completion flags, reset on every manifest update.
    pub uploaded: bool,
    pub checksummed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
    pub private: bool,
    /// Scan verdict payload and its completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_report: Option<String>,
    pub scanned: bool,
    pub encrypted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// A fresh, empty repository as minted on the first manifest push.
    #[must_use]
    pub fn new(id: String, namespace: &str, name: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            namespace: namespace.to_string(),
            name: name.to_string(),
            org_owned: false,
            organization: None,
            tags: Vec::new(),
            stars: Vec::new(),
            comments: Vec::new(),
            description: None,
            manifest: String::new(),
            dockerfile: None,
            agent: String::new(),
            links: None,
            size_bytes: 0,
            uploaded: false,
            checksummed: false,
            checksum: None,
            labels: None,
            icon: None,
            sign: None,
            private: false,
            scan_report: None,
            scanned: false,
            encrypted: false,
            created_at,
            updated_at: created_at,
        }
    }
}

/// A tag is a mutable pointer from a name to an image. Its `id` is the
/// literal `namespace:repository:name` triple, so re-tagging the same name
/// overwrites the record in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub image_id: String,
    pub namespace: String,
    pub repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

/// One favoriting action. Duplicate stars from the same user are not
/// rejected at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: String,
    pub user_id: String,
    pub repo_id: String,
    pub starred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Markdown body.
    pub body: String,
    pub user_id: String,
    pub repo_id: String,
    pub created_at: DateTime<Utc>,
}

/// A team-level access grant on a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Privilege {
    pub id: String,
    /// True grants read-write, false read-only.
    pub read_write: bool,
    pub team_id: String,
    pub repo_id: String,
}
