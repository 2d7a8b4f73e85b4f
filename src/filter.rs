//! Glob-based include/exclude filtering on root-relative paths.
//!
//! Exclusion is evaluated first and short-circuits: an excluded path is never
//! traversed and never rendered. Include patterns are weaker; they apply to
//! files only and suppress content exposure without stopping traversal.

use std::path::Path;

use glob::Pattern;

/// Check whether `path` must be excluded from the scan.
///
/// A path that cannot be expressed relative to `root` is outside the scan's
/// scope and always excluded. Empty pattern strings never match.
pub fn should_exclude(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(rel) = path.strip_prefix(root) else {
        return true;
    };
    let rel = rel.to_string_lossy();
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && glob_match(pattern, &rel))
}

/// Check whether `path` matches the include set. An empty set includes
/// everything.
pub fn matches_include(path: &Path, root: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return true;
    }
    let Ok(rel) = path.strip_prefix(root) else {
        return false;
    };
    let rel = rel.to_string_lossy();
    patterns.iter().any(|pattern| glob_match(pattern, &rel))
}

/// Match a shell-glob pattern against a relative path string. Malformed
/// patterns never match.
fn glob_match(pattern: &str, candidate: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(candidate))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_glob_match() {
        // Basic patterns
        assert!(glob_match("*.py", "main.py"));
        assert!(!glob_match("*.py", "main.rs"));
        assert!(glob_match("test*", "test_foo"));
        assert!(!glob_match("test*", "foo_test"));
        assert!(glob_match("exact", "exact"));

        // Single character wildcard and character classes
        assert!(glob_match("v?.txt", "v1.txt"));
        assert!(!glob_match("v?.txt", "v12.txt"));
        assert!(glob_match("[abc].txt", "b.txt"));
        assert!(!glob_match("[abc].txt", "d.txt"));

        // Malformed pattern never matches
        assert!(!glob_match("[unclosed", "anything"));
    }

    #[test]
    fn test_exclude_matches_relative_form() {
        let root = PathBuf::from("/repo");
        let patterns = vec!["*.log".to_string()];
        assert!(should_exclude(
            &root.join("debug.log"),
            &root,
            &patterns
        ));
        assert!(!should_exclude(&root.join("main.rs"), &root, &patterns));
    }

    #[test]
    fn test_exclude_path_outside_root() {
        let root = PathBuf::from("/repo");
        assert!(should_exclude(Path::new("/etc/passwd"), &root, &[]));
    }

    #[test]
    fn test_exclude_ignores_empty_patterns() {
        let root = PathBuf::from("/repo");
        let patterns = vec![String::new()];
        assert!(!should_exclude(&root.join("main.rs"), &root, &patterns));
    }

    #[test]
    fn test_include_empty_set_includes_everything() {
        let root = PathBuf::from("/repo");
        assert!(matches_include(&root.join("anything.bin"), &root, &[]));
    }

    #[test]
    fn test_include_matches_only_listed_patterns() {
        let root = PathBuf::from("/repo");
        let patterns = vec!["*.py".to_string()];
        assert!(matches_include(&root.join("a.py"), &root, &patterns));
        assert!(!matches_include(&root.join("a.txt"), &root, &patterns));
    }

    #[test]
    fn test_include_path_outside_root_never_matches() {
        let root = PathBuf::from("/repo");
        let patterns = vec!["*".to_string()];
        assert!(!matches_include(Path::new("/etc/passwd"), &root, &patterns));
    }
}
