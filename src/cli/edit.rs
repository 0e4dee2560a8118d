//! CLI dispatch for the editing commands (`new`, `place`, `erase`, `resize`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::TilepaintConfig;
use crate::editor::{EditorError, EditorSession};
use crate::models::{Coordinate, GridSize, Level};

use super::{export_file, open_session, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the new command.
pub fn run_new(
    config: &TilepaintConfig,
    file: Option<&Path>,
    width: Option<u32>,
    height: Option<u32>,
    force: bool,
) -> ExitCode {
    let mut session = EditorSession::with_config(config);
    let file = match file {
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(session.export_file_name()),
    };
    if file.exists() && !force {
        eprintln!("Error: '{}' already exists (use --force to overwrite)", file.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    if width.is_some() || height.is_some() {
        let default = config.default_size();
        session.resize(width.unwrap_or(default.width), height.unwrap_or(default.height));
    }

    if let Err(e) = export_file(&session, &file) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Created {} ({})", file.display(), session.map().size());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the place command.
pub fn run_place(config: &TilepaintConfig, file: &Path, at: Coordinate, asset: &str) -> ExitCode {
    let mut session = match open_session(config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    session.select(at);
    let placement = match session.apply_to_selection(asset) {
        Ok(p) => p,
        Err(e @ EditorError::Catalog(_)) => {
            eprintln!("Error: {}", e);
            let ids: Vec<&str> = session.catalog().iter().map(|a| a.id.as_str()).collect();
            eprintln!("Available assets: {}", ids.join(", "));
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if !session.map().size().contains(at) {
        eprintln!(
            "Warning: ({}) is outside the {} grid; it will be discarded by the next shrinking resize",
            at,
            session.map().size()
        );
    }

    if let Err(e) = export_file(&session, file) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    match &placement.replaced {
        Some(previous) => println!(
            "Placed {} at ({}) on level {} (replaced {})",
            placement.asset, placement.coordinate, placement.level, previous
        ),
        None => println!(
            "Placed {} at ({}) on level {}",
            placement.asset, placement.coordinate, placement.level
        ),
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the erase command.
pub fn run_erase(config: &TilepaintConfig, file: &Path, at: Coordinate, level: u8) -> ExitCode {
    let level = match Level::from_number(level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut session = match open_session(config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(removed) = session.erase(at, level) else {
        println!("Nothing on level {} at ({})", level, at);
        return ExitCode::from(EXIT_SUCCESS);
    };

    if let Err(e) = export_file(&session, file) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Removed {} from level {} at ({})", removed, level, at);
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the resize command.
pub fn run_resize(config: &TilepaintConfig, file: &Path, size: GridSize) -> ExitCode {
    let mut session = match open_session(config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let report = session.resize(size.width, size.height);

    if let Err(e) = export_file(&session, file) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Resized {} -> {}", report.previous, report.size);
    if report.is_lossy() {
        let coords: Vec<String> = report.removed.iter().map(|c| format!("({})", c)).collect();
        println!("Discarded {} item(s): {}", report.removed.len(), coords.join(" "));
    }
    ExitCode::from(EXIT_SUCCESS)
}
