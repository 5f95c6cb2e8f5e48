//! Directory and file enumeration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};

/// Recursively index files with the given extension under `dir`.
///
/// Returns a map from file stem (or full file name when
/// `keep_extension`) to the file's path. When two files share a key,
/// the one visited last wins. The extension may be given with or
/// without a leading dot.
pub fn file_index(
    dir: &Path,
    extension: &str,
    keep_extension: bool,
) -> Result<BTreeMap<String, PathBuf>> {
    if !dir.is_dir() {
        return Err(IoError::NotADirectory(dir.to_path_buf()));
    }

    let ext = extension.trim_start_matches('.');
    let mut index = BTreeMap::new();
    walk(dir, &mut |path| {
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            return;
        }
        let key = if keep_extension {
            path.file_name()
        } else {
            path.file_stem()
        };
        if let Some(key) = key.and_then(|k| k.to_str()) {
            index.insert(key.to_string(), path.clone());
        }
    })?;
    Ok(index)
}

fn walk(dir: &Path, visit: &mut impl FnMut(&PathBuf)) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| IoError::access(dir, e))? {
        let entry = entry.map_err(|e| IoError::access(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, visit)?;
        } else {
            visit(&path);
        }
    }
    Ok(())
}

/// List the immediate subdirectories of `dir`, sorted by path.
pub fn list_directories(dir: &Path) -> Result<Vec<PathBuf>> {
    list_entries(dir, |path| path.is_dir())
}

/// List the immediate files of `dir` with the given extension, sorted
/// by path. The extension may be given with or without a leading dot.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let ext = extension.trim_start_matches('.').to_string();
    list_entries(dir, move |path| {
        path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ext.as_str())
    })
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IoError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| IoError::access(dir, e))? {
        let entry = entry.map_err(|e| IoError::access(dir, e))?;
        let path = entry.path();
        if keep(&path) {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::create_dir(root.join("other")).unwrap();
        touch(&root.join("a.yaml"));
        touch(&root.join("b.txt"));
        touch(&root.join("sub").join("c.yaml"));
        dir
    }

    #[test]
    fn test_file_index_recurses_and_keys_by_stem() {
        let dir = tree();
        let index = file_index(dir.path(), "yaml", false).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index["a"], dir.path().join("a.yaml"));
        assert_eq!(index["c"], dir.path().join("sub").join("c.yaml"));
    }

    #[test]
    fn test_file_index_keeps_extension_and_accepts_dotted() {
        let dir = tree();
        let index = file_index(dir.path(), ".yaml", true).unwrap();
        assert!(index.contains_key("a.yaml"));
        assert!(index.contains_key("c.yaml"));
    }

    #[test]
    fn test_file_index_rejects_non_directory() {
        let dir = tree();
        let err = file_index(&dir.path().join("b.txt"), "txt", false).unwrap_err();
        assert!(matches!(err, IoError::NotADirectory(_)));
    }

    #[test]
    fn test_list_directories() {
        let dir = tree();
        let dirs = list_directories(dir.path()).unwrap();
        assert_eq!(dirs, [dir.path().join("other"), dir.path().join("sub")]);
    }

    #[test]
    fn test_list_files_with_extension_is_single_level() {
        let dir = tree();
        let files = list_files_with_extension(dir.path(), "yaml").unwrap();
        assert_eq!(files, [dir.path().join("a.yaml")]);
    }
}
