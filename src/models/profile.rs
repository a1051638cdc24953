//! Portfolio profile data structures
//!
//! This module contains the core data structures for loading and working
//! with profile.json files: the person's header info, highlight items for
//! the sticky story, and the experience/projects/skills/education
//! sections. All of it is read-only static configuration.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default profile.json as fallback
const EMBEDDED_PROFILE: &str = include_str!("../../profile.json");

/// One item in the sticky highlight story. Immutable; the story engine
/// only ever reads these by index.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightItem {
    pub heading: String,
    #[serde(default)]
    pub subheading: String,
    #[serde(default)]
    pub when: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub dates: String,
    #[serde(default)]
    pub logo: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub dates: String,
    #[serde(default)]
    pub location: String,
    /// Primary logo path; when empty, `logo_choices` is tried in order.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub logo_choices: Vec<String>,
}

impl EducationEntry {
    /// Ordered logo sources for fallback cycling.
    pub fn logo_sources(&self) -> Vec<String> {
        if self.logo.is_empty() {
            self.logo_choices.clone()
        } else {
            vec![self.logo.clone()]
        }
    }
}

/// Profile document structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub resume: String,
    /// Optional; omitted when the person does not want location shown.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub objective: String,
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub chips: Vec<String>,
    #[serde(default)]
    pub marquee: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl Profile {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Parse the embedded default profile
    pub fn embedded() -> io::Result<Self> {
        serde_json::from_str(EMBEDDED_PROFILE)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Find profile.json in order of priority:
    /// 1. Explicit CLI path
    /// 2. ./profile.json (local project customization)
    /// 3. <config-dir>/folio/profile.json (global user config)
    /// Returns None when nothing is found; callers use the embedded
    /// default in that case.
    pub fn find_source(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = cli_path {
            return Some(path);
        }

        let local = PathBuf::from("profile.json");
        if local.exists() {
            return Some(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("folio").join("profile.json");
            if global.exists() {
                return Some(global);
            }
        }

        None
    }
}
