//! Playbook type definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Playbook lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybookStatus {
    #[default]
    Draft,
    Active,
    Inactive,
}

impl PlaybookStatus {
    /// All statuses, in the order the edit form offers them
    pub const ALL: [Self; 3] = [Self::Draft, Self::Active, Self::Inactive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Next status in `ALL`, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Draft => Self::Active,
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Draft,
        }
    }

    /// Previous status in `ALL`, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Draft => Self::Inactive,
            Self::Active => Self::Draft,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for PlaybookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybookStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "Invalid status: '{s}'. Must be one of: Draft, Active, Inactive"
                ))
            })
    }
}

/// Playbook (inventory record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    /// Unique, immutable identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: PlaybookStatus,
    /// Last mutation time, stamped by the inventory store
    #[serde(with = "crate::utils::datetime")]
    pub last_modified: DateTime<Utc>,
    /// Author, immutable after creation
    pub created_by: String,
}

impl Playbook {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        status: PlaybookStatus,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status,
            last_modified: Utc::now(),
            created_by: created_by.into(),
        }
    }

    /// Refresh `last_modified`, never moving it backwards
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.last_modified {
            self.last_modified = now;
        }
    }

    /// Case-insensitive match of `needle` (already lowercased) against the searchable fields
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || [&self.name, &self.description, &self.id, &self.created_by]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Partial playbook update (absent fields keep their value)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlaybookStatus>,
}

impl PlaybookUpdate {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: PlaybookStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge into an existing playbook and stamp `last_modified`
    pub fn apply_to(&self, playbook: &mut Playbook) {
        if let Some(ref name) = self.name {
            playbook.name.clone_from(name);
        }
        if let Some(ref description) = self.description {
            playbook.description.clone_from(description);
        }
        if let Some(status) = self.status {
            playbook.status = status;
        }
        playbook.touch();
    }
}

/// Per-status totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub draft: usize,
    pub active: usize,
    pub inactive: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.draft + self.active + self.inactive
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

/// The five-record sample inventory shown before a real backend is wired in
#[must_use]
pub fn sample_playbooks() -> Vec<Playbook> {
    let sample = |id: &str, name: &str, description: &str, status, modified, by: &str| Playbook {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status,
        last_modified: at(modified),
        created_by: by.to_string(),
    };

    vec![
        sample(
            "pb-001",
            "Phishing Triage",
            "Analyzes potential phishing emails.",
            PlaybookStatus::Active,
            1_742_032_800,
            "admin",
        ),
        sample(
            "pb-002",
            "Malware Containment",
            "Isolates endpoints infected with known malware.",
            PlaybookStatus::Active,
            1_743_517_800,
            "security.ops",
        ),
        sample(
            "pb-003",
            "Suspicious Login Alert",
            "Investigates and responds to unusual login activity.",
            PlaybookStatus::Inactive,
            1_732_094_100,
            "admin",
        ),
        sample(
            "pb-004",
            "Vulnerability Scan Remediation",
            "Creates tickets for high-severity vulnerabilities.",
            PlaybookStatus::Draft,
            1_743_591_900,
            "dev.team",
        ),
        sample(
            "pb-005",
            "Cloud Resource Misconfiguration",
            "Detects and notifies on insecure cloud settings.",
            PlaybookStatus::Active,
            1_743_180_300,
            "cloud.sec",
        ),
    ]
}
