//! CLI dispatch for the `tilepaint check` command.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::TilepaintConfig;
use crate::editor::EditorSession;

use super::{find_map_files, import_file, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the check command.
pub fn run_check(config: &TilepaintConfig, paths: &[PathBuf]) -> ExitCode {
    let files = collect_files(paths);
    if files.is_empty() {
        eprintln!("Error: No map documents found");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut failures = 0usize;
    for file in &files {
        let mut session = EditorSession::with_config(config);
        match import_file(&mut session, file) {
            Ok(()) => {
                let map = session.map();
                println!("OK   {} ({}, {} item(s))", file.display(), map.size(), map.len());
                let hidden = map.out_of_bounds();
                if !hidden.is_empty() {
                    println!("     warning: {} item(s) outside the grid", hidden.len());
                }
            }
            Err(e) => {
                failures += 1;
                println!("FAIL {}", e);
            }
        }
    }

    println!();
    println!("{} checked, {} failed", files.len(), failures);

    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Expand directories into the map documents they contain.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(find_map_files(path));
        } else {
            files.push(path.to_path_buf());
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_mixes_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("maps");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("one.json"), "{}").unwrap();
        fs::write(dir.join("two.json"), "{}").unwrap();
        let single = temp.path().join("three.json");

        let files = collect_files(&[dir.clone(), single.clone()]);
        assert_eq!(files.len(), 3);
        assert_eq!(files.last(), Some(&single));
        assert!(files.iter().take(2).all(|f| f.starts_with(&dir)));
    }

    #[test]
    fn test_collect_files_missing_path_is_kept() {
        let missing = Path::new("does/not/exist.json").to_path_buf();
        assert_eq!(collect_files(&[missing.clone()]), vec![missing]);
    }
}
