//! Recursive file discovery by name pattern under a project root.
//!
//! Every lookup walks the whole tree below the root and keeps entries whose
//! file name matches the pattern. Symlinks are listed but never followed, so
//! a linked directory cannot repeat files or loop. Entries are visited in
//! file-name order within each directory, so two runs over the same tree
//! list the same paths in the same order. No content is read here.

use crate::error::{CheckError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Locates candidate documents under a root, minus excluded paths.
pub struct Finder {
    root: PathBuf,
    exclude: Vec<Pattern>,
}

impl Finder {
    /// Build a finder. `exclude` holds globs matched against root-relative paths.
    pub fn new(root: impl Into<PathBuf>, exclude: &[String]) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            root: root.into(),
            exclude,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries (files, directories or links) whose name matches `name_pattern`.
    pub fn find(&self, name_pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern = compile(name_pattern)?;
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy();
            if !pattern.matches(&name) {
                continue;
            }
            let p = entry.into_path();
            if self.is_excluded(&p) {
                debug!(path = %p.display(), "excluded");
            } else {
                found.push(p);
            }
        }
        debug!(pattern = name_pattern, matches = found.len(), "discovered");
        Ok(found)
    }

    /// Concatenated matches for several patterns, in pattern order.
    pub fn find_any(&self, name_patterns: &[&str]) -> Result<Vec<PathBuf>> {
        let mut all = Vec::new();
        for pat in name_patterns {
            all.extend(self.find(pat)?);
        }
        Ok(all)
    }

    /// Like [`Finder::find`] but keeps regular files only.
    pub fn find_files(&self, name_pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .find(name_pattern)?
            .into_iter()
            .filter(|p| p.is_file())
            .collect())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let rel = pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        self.exclude.iter().any(|pat| pat.matches_path(&rel))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| CheckError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_find_recurses_and_matches_root_level() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/sub")).unwrap();
        fs::write(root.join("system_requirements.md"), "").unwrap();
        fs::write(root.join("docs/sub/sw_requirements.md"), "").unwrap();
        fs::write(root.join("docs/requirements.txt"), "").unwrap();

        let f = Finder::new(root, &[]).unwrap();
        let mut found = names(&f.find("*requirements*.md").unwrap());
        found.sort();
        assert_eq!(found, vec!["sw_requirements.md", "system_requirements.md"]);
    }

    #[test]
    fn test_absence_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let f = Finder::new(dir.path(), &[]).unwrap();
        assert!(f.find("*trace*.md").unwrap().is_empty());
    }

    #[test]
    fn test_find_files_skips_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("design")).unwrap();
        fs::write(root.join("design/overview_design.md"), "").unwrap();
        let f = Finder::new(root, &[]).unwrap();
        assert_eq!(f.find("*design*").unwrap().len(), 2);
        assert_eq!(names(&f.find_files("*design*").unwrap()), vec!["overview_design.md"]);
    }

    #[test]
    fn test_exclude_patterns_are_root_relative() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("vendor/lib")).unwrap();
        fs::write(root.join("vendor/lib/test_a.py"), "").unwrap();
        fs::write(root.join("test_b.py"), "").unwrap();
        let f = Finder::new(root, &["vendor/**".to_string()]).unwrap();
        assert_eq!(names(&f.find("test*.py").unwrap()), vec!["test_b.py"]);
    }

    #[test]
    fn test_bad_exclude_pattern_is_error() {
        let dir = tempdir().unwrap();
        let err = Finder::new(dir.path(), &["a/***/b".to_string()]);
        assert!(matches!(err, Err(CheckError::Pattern { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_descended() {
        use std::os::unix::fs::symlink;
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/sys_requirements.md"), "R-SYS-001 should test").unwrap();
        symlink(root.join("docs"), root.join("docs_link")).unwrap();

        let f = Finder::new(root, &[]).unwrap();
        assert_eq!(names(&f.find_files("*requirements*.md").unwrap()), vec!["sys_requirements.md"]);
        // The link itself is still an entry when its own name matches.
        assert_eq!(names(&f.find("docs*").unwrap()), vec!["docs", "docs_link"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycles_terminate() {
        use std::os::unix::fs::symlink;
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("test_a.py"), "").unwrap();
        symlink(root, root.join("loop")).unwrap();
        symlink(root, root.join("loop2")).unwrap();

        let f = Finder::new(root, &[]).unwrap();
        assert_eq!(names(&f.find("test*.py").unwrap()), vec!["test_a.py"]);
    }
}
