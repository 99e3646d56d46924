//! Installed-agent detection.
//!
//! Detection is a best-effort probe: every spec reduces to one or two
//! existence checks, a failed or unreadable probe counts as absent, and
//! nothing in this module returns an error.

use super::definition::{AgentDefinition, BasePathDefinition, DetectSpec};
use crate::paths;
use std::collections::HashMap;
use std::path::Path;

/// Whether a single detection spec matches the current filesystem.
pub fn spec_matches(
    spec: &DetectSpec,
    home: &Path,
    cwd: &Path,
    base_paths: &HashMap<String, BasePathDefinition>,
) -> bool {
    match spec {
        DetectSpec::Home { path } => path.is_empty() || home.join(path).exists(),
        DetectSpec::Cwd { cwd: relative } => cwd.join(relative).exists(),
        DetectSpec::Base { base, path } => {
            let Some(definition) = base_paths.get(base) else {
                return false;
            };
            let root = paths::resolve_base(definition, home);
            if path.is_empty() {
                root.is_dir()
            } else {
                root.join(path).exists()
            }
        }
        DetectSpec::Absolute { absolute } => Path::new(absolute).exists(),
        DetectSpec::Unrecognized(_) => false,
    }
}

/// Whether any of the agent's detection specs matches.
///
/// An agent without specs is never detected.
pub fn is_detected(
    definition: &AgentDefinition,
    home: &Path,
    cwd: &Path,
    base_paths: &HashMap<String, BasePathDefinition>,
) -> bool {
    let detected = definition
        .detect
        .iter()
        .any(|spec| spec_matches(spec, home, cwd, base_paths));
    log::debug!("agent {} detected: {}", definition.name, detected);
    detected
}
