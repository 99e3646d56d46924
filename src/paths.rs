//! Base-path and global-path resolution.
//!
//! Base paths anchor every agent-relative directory. They are computed
//! from an environment variable with a home-relative fallback, and no
//! existence checks happen at this layer: a base path is where things
//! *should* live, whether or not it exists yet.

use crate::agents::definition::BasePathDefinition;
use std::path::{Component, Path, PathBuf};

/// Read an environment variable, treating the empty string as unset.
///
/// An empty variable name is also treated as unset, so callers never
/// have to special-case blank definition fields.
pub fn env_value(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Whether an environment variable is set to a non-empty value.
pub fn env_is_set(name: &str) -> bool {
    env_value(name).is_some()
}

/// The user's home directory.
///
/// Always returns a usable path: falls back to `$HOME`, then to the
/// system temp directory when the platform lookup fails.
pub fn home_dir() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        return home;
    }
    if let Some(home) = env_value("HOME") {
        return PathBuf::from(home);
    }
    std::env::temp_dir()
}

/// The current working directory, or `.` when it cannot be determined.
pub fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a base-path definition to an absolute directory.
///
/// An `env` of `~` (or empty) pins the base to home. Otherwise the
/// variable's value is trusted as-is when set and non-empty, and the
/// fallback is joined onto home when it is not.
pub fn resolve_base(definition: &BasePathDefinition, home: &Path) -> PathBuf {
    if definition.env.is_empty() || definition.env == "~" {
        return home.to_path_buf();
    }

    if let Some(value) = env_value(&definition.env) {
        log::debug!("base path from ${}: {}", definition.env, value);
        return PathBuf::from(value);
    }

    if definition.fallback.is_empty() || definition.fallback == "~" {
        home.to_path_buf()
    } else {
        home.join(&definition.fallback)
    }
}

/// Resolve the global skills directory for an agent.
///
/// Candidates are tried in order (`primary` first, then the fallbacks),
/// each expanded against `base`; the first one that is a directory on
/// disk wins. When none exist the expansion of `primary` is returned,
/// so callers always get a deterministic path.
pub fn resolve_global(primary: &str, fallbacks: &[String], base: &Path) -> PathBuf {
    let candidates =
        std::iter::once(primary).chain(fallbacks.iter().map(String::as_str));

    for candidate in candidates {
        let expanded = join_normalized(base, candidate);
        if expanded.is_dir() {
            log::debug!("global skills dir: {} (exists)", expanded.display());
            return expanded;
        }
    }

    join_normalized(base, primary)
}

/// Join `relative` onto `base` and normalize the result lexically.
///
/// `.` components are dropped and `..` pops the previous component.
/// Purely textual: symlinks are not resolved and the filesystem is
/// never consulted.
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    let joined = base.join(relative);
    let mut normalized = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn base_def(env: &str, fallback: &str) -> BasePathDefinition {
        BasePathDefinition {
            env: env.to_string(),
            fallback: fallback.to_string(),
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_env_value_unset() {
        env::remove_var("SKILLPATH_TEST_UNSET");
        assert_eq!(env_value("SKILLPATH_TEST_UNSET"), None);
        assert!(!env_is_set("SKILLPATH_TEST_UNSET"));
    }

    #[test]
    #[serial_test::serial]
    fn test_env_value_empty_is_unset() {
        env::set_var("SKILLPATH_TEST_EMPTY", "");
        assert_eq!(env_value("SKILLPATH_TEST_EMPTY"), None);
        assert!(!env_is_set("SKILLPATH_TEST_EMPTY"));
        env::remove_var("SKILLPATH_TEST_EMPTY");
    }

    #[test]
    #[serial_test::serial]
    fn test_env_value_set() {
        env::set_var("SKILLPATH_TEST_SET", "/custom/value");
        assert_eq!(
            env_value("SKILLPATH_TEST_SET"),
            Some("/custom/value".to_string())
        );
        env::remove_var("SKILLPATH_TEST_SET");
    }

    #[test]
    fn test_env_value_blank_name() {
        assert_eq!(env_value(""), None);
        assert!(!env_is_set(""));
    }

    #[test]
    fn test_home_dir_is_usable() {
        let home = home_dir();
        assert!(!home.as_os_str().is_empty());
    }

    #[test]
    fn test_resolve_base_tilde_env() {
        let home = Path::new("/home/u");
        // A "~" env pins the base to home, ignoring the fallback
        let def = base_def("~", ".config");
        assert_eq!(resolve_base(&def, home), PathBuf::from("/home/u"));

        let def = base_def("", ".config");
        assert_eq!(resolve_base(&def, home), PathBuf::from("/home/u"));
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_base_env_set() {
        env::set_var("SKILLPATH_TEST_BASE", "/custom/xdg");
        let def = base_def("SKILLPATH_TEST_BASE", ".config");
        assert_eq!(
            resolve_base(&def, Path::new("/home/u")),
            PathBuf::from("/custom/xdg")
        );
        env::remove_var("SKILLPATH_TEST_BASE");
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_base_env_unset_uses_fallback() {
        env::remove_var("SKILLPATH_TEST_BASE");
        let def = base_def("SKILLPATH_TEST_BASE", ".config");
        assert_eq!(
            resolve_base(&def, Path::new("/home/u")),
            PathBuf::from("/home/u/.config")
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_base_env_empty_uses_fallback() {
        env::set_var("SKILLPATH_TEST_BASE", "");
        let def = base_def("SKILLPATH_TEST_BASE", ".config");
        assert_eq!(
            resolve_base(&def, Path::new("/home/u")),
            PathBuf::from("/home/u/.config")
        );
        env::remove_var("SKILLPATH_TEST_BASE");
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_base_tilde_fallback() {
        env::remove_var("SKILLPATH_TEST_BASE");
        let def = base_def("SKILLPATH_TEST_BASE", "~");
        assert_eq!(
            resolve_base(&def, Path::new("/home/u")),
            PathBuf::from("/home/u")
        );

        let def = base_def("SKILLPATH_TEST_BASE", "");
        assert_eq!(
            resolve_base(&def, Path::new("/home/u")),
            PathBuf::from("/home/u")
        );
    }

    #[test]
    fn test_join_normalized() {
        let base = Path::new("/home/u");
        assert_eq!(
            join_normalized(base, ".claude/skills"),
            PathBuf::from("/home/u/.claude/skills")
        );
        assert_eq!(
            join_normalized(base, "a/./b/../c"),
            PathBuf::from("/home/u/a/c")
        );
        assert_eq!(
            join_normalized(base, "../.clawdbot/skills"),
            PathBuf::from("/home/.clawdbot/skills")
        );
    }

    #[test]
    fn test_join_normalized_stops_at_root() {
        assert_eq!(
            join_normalized(Path::new("/"), "../../etc"),
            PathBuf::from("/etc")
        );
    }

    #[test]
    fn test_resolve_global_prefers_existing_candidate() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(base.path().join(".clawdbot/skills")).unwrap();

        let fallbacks = vec![
            ".clawdbot/skills".to_string(),
            ".moltbot/skills".to_string(),
        ];
        let resolved = resolve_global(".moltbot/skills", &fallbacks, base.path());
        assert_eq!(resolved, base.path().join(".clawdbot/skills"));
    }

    #[test]
    fn test_resolve_global_primary_wins_when_it_exists() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(base.path().join(".moltbot/skills")).unwrap();
        std::fs::create_dir_all(base.path().join(".clawdbot/skills")).unwrap();

        let fallbacks = vec![".clawdbot/skills".to_string()];
        let resolved = resolve_global(".moltbot/skills", &fallbacks, base.path());
        assert_eq!(resolved, base.path().join(".moltbot/skills"));
    }

    #[test]
    fn test_resolve_global_defaults_to_primary() {
        let base = tempfile::tempdir().unwrap();

        let fallbacks = vec![
            ".clawdbot/skills".to_string(),
            ".moltbot/skills".to_string(),
        ];
        let resolved = resolve_global(".moltbot/skills", &fallbacks, base.path());
        assert_eq!(resolved, base.path().join(".moltbot/skills"));
    }

    #[test]
    fn test_resolve_global_ignores_plain_files() {
        let base = tempfile::tempdir().unwrap();
        // A file at a candidate path does not count as a skills directory
        std::fs::write(base.path().join("skills"), b"not a dir").unwrap();

        let resolved = resolve_global("skills", &[], base.path());
        assert_eq!(resolved, base.path().join("skills"));
    }
}
