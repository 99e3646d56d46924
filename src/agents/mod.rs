//! Agent definitions, detection, and the registry.
//!
//! Agents are external AI coding tools with configurable skill-file
//! locations. Each definition names a project-relative skills directory
//! and describes how to resolve the user-wide one: a base path (driven
//! by an environment variable with a home-relative fallback) plus an
//! ordered list of global-directory candidates. Detection entries probe
//! the filesystem to decide whether the tool looks installed.
//!
//! # Example
//!
//! ```toml
//! [base_paths.claude]
//! env = "CLAUDE_CONFIG_DIR"
//! fallback = ".claude"
//!
//! [[agents]]
//! name = "claude"
//! display_name = "Claude Code"
//! skills_dir = ".claude/skills"
//! base_path = "claude"
//! global_skills_dir = "skills"
//! detect = [{ base = "claude" }, { cwd = ".claude" }]
//! ```

pub mod definition;
pub mod detect;
pub mod registry;

pub use definition::{Agent, AgentDefinition, BasePathDefinition, DefinitionTable, DetectSpec};
pub use registry::AgentRegistry;
