//! # Project Type and Status Enumerations
//!
//! The two ordered value sets accepted by the `type` and `status` fields.
//! Declaration order is display rank: a web application sorts before a
//! dataset, a deployed project before an archival one. Rank is used only
//! for ordering; the schema validates the exact lowercase strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Accepted `type` values, in rank order.
pub const PROJECT_TYPE_NAMES: &[&str] = &[
    "web application",
    "mobile application",
    "desktop application",
    "website",
    "document",
    "web service",
    "dataset",
];

/// Accepted `status` values, in rank order.
pub const PROJECT_STATUS_NAMES: &[&str] = &[
    "deployed",
    "beta",
    "in development",
    "ideation",
    "archival",
];

/// Kind of deliverable a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Interactive application served over the web.
    #[serde(rename = "web application")]
    WebApplication = 0,
    /// Native or hybrid phone application.
    #[serde(rename = "mobile application")]
    MobileApplication = 1,
    /// Installed desktop program.
    #[serde(rename = "desktop application")]
    DesktopApplication = 2,
    /// Mostly static informational site.
    #[serde(rename = "website")]
    Website = 3,
    /// Report, guide or other written deliverable.
    #[serde(rename = "document")]
    Document = 4,
    /// API consumed by other programs.
    #[serde(rename = "web service")]
    WebService = 5,
    /// Published data without an interface of its own.
    #[serde(rename = "dataset")]
    Dataset = 6,
}

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// In production use.
    #[serde(rename = "deployed")]
    Deployed = 0,
    /// Usable but still changing.
    #[serde(rename = "beta")]
    Beta = 1,
    /// Being built; not yet usable.
    #[serde(rename = "in development")]
    InDevelopment = 2,
    /// Proposed, no implementation yet.
    #[serde(rename = "ideation")]
    Ideation = 3,
    /// No longer maintained.
    #[serde(rename = "archival")]
    Archival = 4,
}

impl ProjectType {
    /// All types in rank order.
    pub fn all() -> &'static [ProjectType] {
        &[
            Self::WebApplication,
            Self::MobileApplication,
            Self::DesktopApplication,
            Self::Website,
            Self::Document,
            Self::WebService,
            Self::Dataset,
        ]
    }

    /// Zero-based display rank; lower sorts first.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Name as written in project files, e.g. `web application`.
    pub fn as_str(&self) -> &'static str {
        PROJECT_TYPE_NAMES[self.rank()]
    }
}

impl ProjectStatus {
    /// All statuses in rank order.
    pub fn all() -> &'static [ProjectStatus] {
        &[
            Self::Deployed,
            Self::Beta,
            Self::InDevelopment,
            Self::Ideation,
            Self::Archival,
        ]
    }

    /// Zero-based display rank; lower sorts first.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Name as written in project files, e.g. `in development`.
    pub fn as_str(&self) -> &'static str {
        PROJECT_STATUS_NAMES[self.rank()]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ValueError;

    /// Case-insensitive match against [`PROJECT_TYPE_NAMES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ValueError::DisallowedValue {
                value: s.to_string(),
            })
    }
}

impl FromStr for ProjectStatus {
    type Err = ValueError;

    /// Case-insensitive match against [`PROJECT_STATUS_NAMES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == lower)
            .ok_or_else(|| ValueError::DisallowedValue {
                value: s.to_string(),
            })
    }
}
