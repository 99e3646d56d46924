//! Data structures for the agent definition table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// The whole definition table: base paths plus agent entries.
///
/// Agent order is preserved; it is the order `all()` reports.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionTable {
    #[serde(default)]
    pub base_paths: HashMap<String, BasePathDefinition>,

    #[serde(default)]
    pub agents: Vec<AgentDefinition>,
}

/// How to compute one base directory.
#[derive(Debug, Clone, Deserialize)]
pub struct BasePathDefinition {
    /// Environment variable holding the base path. `~` or empty means
    /// the base is always the home directory.
    #[serde(default)]
    pub env: String,

    /// Home-relative path used when the variable is unset or empty.
    /// `~` or empty means home itself.
    #[serde(default)]
    pub fallback: String,
}

/// A single agent entry from the definition table.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDefinition {
    /// Unique lookup key
    pub name: String,

    /// Human-readable name
    pub display_name: String,

    /// Project-relative skills directory (must not be absolute)
    pub skills_dir: String,

    /// Key into the base-path table
    pub base_path: String,

    /// Primary global skills directory, relative to the base path
    pub global_skills_dir: String,

    /// Ordered fallback candidates for the global skills directory
    #[serde(default)]
    pub global_fallback_dirs: Vec<String>,

    /// Probes deciding whether the agent looks installed
    #[serde(default)]
    pub detect: Vec<DetectSpec>,
}

/// One detection probe.
///
/// The serialized forms are small TOML tables distinguished by their
/// keys; anything that matches none of the four recognized shapes lands
/// in `Unrecognized` and never matches, so a typo in a definition file
/// degrades to "not detected" instead of an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DetectSpec {
    /// `{ base = "key", path = "..." }`: relative to a resolved base
    /// path; an empty path checks the base directory itself.
    Base {
        base: String,
        #[serde(default)]
        path: String,
    },

    /// `{ cwd = "..." }`: relative to the current working directory.
    Cwd { cwd: String },

    /// `{ absolute = "..." }`: checked as given.
    Absolute { absolute: String },

    /// `{ path = "..." }`: relative to home; an empty path always
    /// matches.
    Home { path: String },

    /// Any other shape. Never matches.
    Unrecognized(toml::Value),
}

/// A fully resolved agent.
///
/// Plain value type: two agents are equal when all four fields are.
/// `skills_dir` is copied verbatim from the definition (relative);
/// `global_skills_dir` is computed and always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub name: String,
    pub display_name: String,
    pub skills_dir: PathBuf,
    pub global_skills_dir: PathBuf,
}
