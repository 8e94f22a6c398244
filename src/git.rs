use git2::Repository;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The git repository the release commands will run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub root: PathBuf,
    /// Current branch, `None` when HEAD is detached
    pub branch: Option<String>,
}

impl Workspace {
    /// Discovers the git repository containing `path`.
    ///
    /// # Returns
    /// * `Ok(Workspace)` - Repository root and current branch
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        let root = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        // Read HEAD symbolically so an unborn branch still has a name.
        let branch = repo.find_reference("HEAD").ok().and_then(|head| {
            head.symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(|name| name.to_string())
        });

        Ok(Workspace { root, branch })
    }

    /// One-line description shown before the first major header
    pub fn describe(&self) -> String {
        match &self.branch {
            Some(branch) => format!("Repository: {} (on {})", self.root.display(), branch),
            None => format!("Repository: {} (detached HEAD)", self.root.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_outside_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = Workspace::discover(temp_dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_fresh_repository() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        repo.set_head("refs/heads/LAE_39_STABLE").unwrap();

        let workspace = Workspace::discover(temp_dir.path()).unwrap();
        assert_eq!(workspace.branch.as_deref(), Some("LAE_39_STABLE"));
    }

    #[test]
    fn test_describe_detached() {
        let workspace = Workspace {
            root: PathBuf::from("/srv/moodle"),
            branch: None,
        };
        assert_eq!(workspace.describe(), "Repository: /srv/moodle (detached HEAD)");
    }

    #[test]
    fn test_describe_branch() {
        let workspace = Workspace {
            root: PathBuf::from("/srv/moodle"),
            branch: Some("LAE_39_STABLE".to_string()),
        };
        assert!(workspace.describe().ends_with("(on LAE_39_STABLE)"));
    }
}
