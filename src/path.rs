//! Executable presence check.
//!
//! This is a name lookup, not a guarantee the command can run: it does not
//! check permissions, resolve symlinks or try platform executable extensions.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Returns `true` if a directory on `PATH` has an entry named `command`.
///
/// Directories that do not exist or cannot be read are skipped. An unset
/// `PATH` yields `false`.
///
/// # Examples
///
/// ```rust
/// use object_marshal::exec_in_path;
///
/// assert!(!exec_in_path("definitely_not_a_real_command_xyz"));
/// ```
#[must_use]
pub fn exec_in_path(command: &str) -> bool {
    match env::var_os("PATH") {
        Some(search_path) => exec_in_search_path(command, &search_path),
        None => {
            tracing::debug!("PATH is not set");
            false
        }
    }
}

/// Like [`exec_in_path`], with the search path given explicitly.
///
/// `search_path` uses the platform's separator (`:` on Unix, `;` on Windows).
#[must_use]
pub fn exec_in_search_path(command: &str, search_path: &OsStr) -> bool {
    env::split_paths(search_path).any(|dir| dir_has_entry(&dir, command))
}

fn dir_has_entry(dir: &Path, name: &str) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::trace!(dir = %dir.display(), %err, "skipping search path entry");
            return false;
        }
    };
    entries
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name() == OsStr::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_finds_entry_in_listed_directory() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("pxe-helper")).unwrap();

        let missing = dir.path().join("missing");
        let search_path = env::join_paths([missing.as_path(), dir.path()]).unwrap();

        assert!(exec_in_search_path("pxe-helper", &search_path));
        assert!(!exec_in_search_path("pxe", &search_path));
    }

    #[test]
    fn test_name_only_check_ignores_permissions() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let search_path = env::join_paths([dir.path()]).unwrap();
        assert!(exec_in_search_path("notes.txt", &search_path));
    }

    #[test]
    fn test_empty_search_path() {
        assert!(!exec_in_search_path("ls", OsStr::new("")));
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_in_path_reads_process_path() {
        let ls_on_path = env::var_os("PATH")
            .map(|path| env::split_paths(&path).any(|dir| dir.join("ls").is_file()))
            .unwrap_or(false);
        if ls_on_path {
            assert!(exec_in_path("ls"));
        }
        assert!(!exec_in_path("definitely_not_a_real_command_xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_ls_in_system_directories() {
        if Path::new("/bin/ls").exists() || Path::new("/usr/bin/ls").exists() {
            assert!(exec_in_search_path("ls", OsStr::new("/bin:/usr/bin")));
        }
        assert!(!exec_in_search_path(
            "definitely_not_a_real_command_xyz",
            OsStr::new("/bin:/usr/bin")
        ));
    }
}
