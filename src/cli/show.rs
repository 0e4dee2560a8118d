//! CLI dispatch for the read-only commands (`show`, `inspect`, `assets`).

use std::path::Path;
use std::process::ExitCode;

use crate::config::TilepaintConfig;
use crate::models::Coordinate;
use crate::view::legend;

use super::{open_session, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command.
pub fn run_show(
    config: &TilepaintConfig,
    file: &Path,
    select: Option<Coordinate>,
    with_legend: bool,
) -> ExitCode {
    let mut session = match open_session(config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Some(coordinate) = select {
        session.select(coordinate);
    }

    let view = match session.view() {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Error: '{}': {}", file.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let map = session.map();
    println!("{} ({}, {} item(s))", file.display(), map.size(), map.len());
    print!("{}", view.to_text());

    let hidden = map.out_of_bounds();
    if !hidden.is_empty() {
        eprintln!("Warning: {} item(s) lie outside the grid and are not shown", hidden.len());
    }

    if with_legend {
        println!();
        println!(".  empty");
        for line in legend(session.catalog()) {
            println!("{}", line);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the inspect command.
pub fn run_inspect(config: &TilepaintConfig, file: &Path, at: Coordinate) -> ExitCode {
    let session = match open_session(config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(item) = session.map().item_at(at) else {
        println!("({}) is empty", at);
        return ExitCode::from(EXIT_SUCCESS);
    };

    println!("({})", at);
    for (level, asset) in item.layers.iter() {
        match session.catalog().get(asset.as_str()) {
            Some(known) => {
                println!("  {} {}: {} ({}) {}", level, level.name(), asset, known.label, known.image)
            }
            None => println!("  {} {}: {}", level, level.name(), asset),
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the assets command.
pub fn run_assets(config: &TilepaintConfig) -> ExitCode {
    let catalog = config.catalog();
    for asset in catalog.iter() {
        println!(
            "{:<12} level {} ({:<10}) {:<12} {}",
            asset.id,
            asset.level,
            asset.level.name(),
            asset.label,
            asset.image
        );
    }
    ExitCode::from(EXIT_SUCCESS)
}
