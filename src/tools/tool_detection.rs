//! External tool lookup.
//!
//! The documentation tools are npm packages, so a project-local
//! `node_modules/.bin` entry is preferred over anything on `PATH`.

use std::path::{Path, PathBuf};

/// Locates `program` for a run in `cwd`.
///
/// Programs given as a path are resolved against `cwd` and returned if they
/// exist. Bare names are looked up in `cwd/node_modules/.bin`, then `PATH`.
pub fn locate(program: &str, cwd: &Path) -> Option<PathBuf> {
    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        let candidate = cwd.join(as_path);
        return candidate.is_file().then_some(candidate);
    }

    let local = cwd.join("node_modules").join(".bin").join(program);
    if local.is_file() {
        log::debug!("Found {} at: {}", program, local.display());
        return Some(local);
    }

    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", program, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_project_local_bin() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("node_modules/.bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("ckeditor-jsduck"), "#!/bin/sh\n").unwrap();

        assert_eq!(
            locate("ckeditor-jsduck", dir.path()),
            Some(bin.join("ckeditor-jsduck"))
        );
    }

    #[test]
    fn relative_program_paths_resolve_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("scripts")).unwrap();
        std::fs::write(dir.path().join("scripts/build.sh"), "").unwrap();

        assert!(locate("scripts/build.sh", dir.path()).is_some());
        assert!(locate("scripts/missing.sh", dir.path()).is_none());
    }

    #[test]
    fn unknown_program_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(locate("definitely-not-a-docs-tool-7f3a", dir.path()).is_none());
    }
}
