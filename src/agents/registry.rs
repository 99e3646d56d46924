//! Agent registry: lookup, path resolution, and memoized collection
//! queries.

use super::definition::{Agent, AgentDefinition, BasePathDefinition, DefinitionTable};
use super::detect;
use crate::error::{Result, SkillpathError};
use crate::paths;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Registry of agent definitions.
///
/// `find` always resolves against the live environment; `all` and
/// `detected` are computed once and handed out by reference until
/// `reset` clears them.
#[derive(Debug)]
pub struct AgentRegistry {
    agents: Vec<AgentDefinition>,
    base_paths: HashMap<String, BasePathDefinition>,
    all_cache: Mutex<Option<Arc<Vec<Agent>>>>,
    detected_cache: Mutex<Option<Arc<Vec<Agent>>>>,
}

impl AgentRegistry {
    /// Load the built-in definition table.
    pub fn load() -> Result<Self> {
        let table: DefinitionTable = toml::from_str(include_str!("../../agents/agents.toml"))?;
        Self::from_table(table)
    }

    /// Load a definition table from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let table: DefinitionTable = toml::from_str(&contents)?;
        Self::from_table(table)
    }

    /// Build a registry from a caller-supplied table.
    ///
    /// The table is validated up front; a malformed table fails here
    /// rather than producing a registry that errors on use.
    pub fn from_table(table: DefinitionTable) -> Result<Self> {
        validate_table(&table)?;
        Ok(Self {
            agents: table.agents,
            base_paths: table.base_paths,
            all_cache: Mutex::new(None),
            detected_cache: Mutex::new(None),
        })
    }

    /// Look up one agent by name and resolve its paths.
    ///
    /// Never served from cache: the result reflects the environment and
    /// filesystem at call time.
    pub fn find(&self, name: &str) -> Result<Agent> {
        let definition = self
            .agents
            .iter()
            .find(|agent| agent.name == name)
            .ok_or_else(|| SkillpathError::UnknownAgent(name.to_string()))?;

        let home = paths::home_dir();
        Ok(self.build_agent(definition, &home))
    }

    /// All agents, in definition-table order.
    ///
    /// The collection is computed on first call and the same `Arc` is
    /// returned until `reset`.
    pub fn all(&self) -> Arc<Vec<Agent>> {
        let mut cache = self.all_cache.lock().unwrap();
        if let Some(agents) = cache.as_ref() {
            return Arc::clone(agents);
        }

        let home = paths::home_dir();
        let agents: Arc<Vec<Agent>> = Arc::new(
            self.agents
                .iter()
                .map(|definition| self.build_agent(definition, &home))
                .collect(),
        );
        *cache = Some(Arc::clone(&agents));
        agents
    }

    /// The subset of `all()` whose definitions pass detection, in the
    /// same order. Memoized independently of `all`.
    pub fn detected(&self) -> Arc<Vec<Agent>> {
        let mut cache = self.detected_cache.lock().unwrap();
        if let Some(agents) = cache.as_ref() {
            return Arc::clone(agents);
        }

        let all = self.all();
        let home = paths::home_dir();
        let cwd = paths::current_dir();
        let agents: Arc<Vec<Agent>> = Arc::new(
            self.agents
                .iter()
                .zip(all.iter())
                .filter(|(definition, _)| {
                    detect::is_detected(definition, &home, &cwd, &self.base_paths)
                })
                .map(|(_, agent)| agent.clone())
                .collect(),
        );
        *cache = Some(Arc::clone(&agents));
        agents
    }

    /// Drop both memoized collections. Idempotent.
    pub fn reset(&self) {
        *self.all_cache.lock().unwrap() = None;
        *self.detected_cache.lock().unwrap() = None;
    }

    fn build_agent(&self, definition: &AgentDefinition, home: &Path) -> Agent {
        // base_path keys are checked at construction
        let base = paths::resolve_base(&self.base_paths[&definition.base_path], home);
        let global_skills_dir = paths::resolve_global(
            &definition.global_skills_dir,
            &definition.global_fallback_dirs,
            &base,
        );

        Agent {
            name: definition.name.clone(),
            display_name: definition.display_name.clone(),
            skills_dir: PathBuf::from(&definition.skills_dir),
            global_skills_dir,
        }
    }
}

/// Validate that a definition table is complete and usable.
fn validate_table(table: &DefinitionTable) -> Result<()> {
    let mut seen = HashSet::new();

    for agent in &table.agents {
        if agent.name.is_empty() {
            return Err(SkillpathError::InvalidConfig(
                "Agent name cannot be empty".to_string(),
            ));
        }
        if !seen.insert(agent.name.as_str()) {
            return Err(SkillpathError::InvalidConfig(format!(
                "Duplicate agent name: {}",
                agent.name
            )));
        }
        if agent.skills_dir.is_empty() || Path::new(&agent.skills_dir).is_absolute() {
            return Err(SkillpathError::InvalidConfig(format!(
                "Agent '{}' skills_dir must be a non-empty relative path",
                agent.name
            )));
        }
        if agent.global_skills_dir.is_empty() {
            return Err(SkillpathError::InvalidConfig(format!(
                "Agent '{}' global_skills_dir cannot be empty",
                agent.name
            )));
        }
        if !table.base_paths.contains_key(&agent.base_path) {
            return Err(SkillpathError::InvalidConfig(format!(
                "Agent '{}' references unknown base path '{}'",
                agent.name, agent.base_path
            )));
        }
    }

    Ok(())
}
