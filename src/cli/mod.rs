//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations. Every command that edits a map
//! reads the document through the editor's import path and writes it back
//! through the export path.

mod check;
mod edit;
mod show;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::config::{load_config, TilepaintConfig};
use crate::editor::EditorSession;
use crate::logging;
use crate::models::{Coordinate, GridSize};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Find all map documents in a directory (recursively).
pub fn find_map_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    if let Ok(paths) = glob(&format!("{}/**/*.json", dir_str)) {
        files.extend(paths.filter_map(Result::ok));
    }

    files.sort();
    files
}

/// Tilepaint - paint layered tile maps and keep them as portable JSON
#[derive(Parser)]
#[command(name = "tilepaint")]
#[command(about = "Tilepaint - paint layered tile maps and keep them as portable JSON documents")]
#[command(version)]
pub struct Cli {
    /// Path to tilepaint.toml (default: search upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty map document
    New {
        /// Map document to create (default: [export] file_name, map-config.json)
        file: Option<PathBuf>,

        /// Width in tiles (default from config, 15)
        #[arg(long)]
        width: Option<u32>,

        /// Height in tiles (default from config, 10)
        #[arg(long)]
        height: Option<u32>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Place an asset on a tile
    Place {
        /// Map document to edit
        file: PathBuf,

        /// Tile coordinate as x,y
        at: Coordinate,

        /// Asset id (see `tilepaint assets`)
        asset: String,
    },
    /// Remove the asset on one level of a tile
    Erase {
        /// Map document to edit
        file: PathBuf,

        /// Tile coordinate as x,y
        at: Coordinate,

        /// Level to clear: 1 = ground, 2 = decoration
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        level: u8,
    },
    /// Resize the grid, discarding tiles outside the new bounds
    Resize {
        /// Map document to edit
        file: PathBuf,

        /// New size as WIDTHxHEIGHT (e.g. 20x12)
        size: GridSize,
    },
    /// Print the map as a text grid
    Show {
        /// Map document to show
        file: PathBuf,

        /// Highlight a tile as x,y
        #[arg(long)]
        select: Option<Coordinate>,

        /// Print the glyph legend below the grid
        #[arg(long)]
        legend: bool,
    },
    /// Print the layers placed on one tile
    Inspect {
        /// Map document to read
        file: PathBuf,

        /// Tile coordinate as x,y
        at: Coordinate,
    },
    /// List the asset catalog in palette order
    Assets,
    /// Validate map documents (directories are searched for *.json)
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    logging::init(&config.log.level, cli.verbose);

    match cli.command {
        Commands::New { file, width, height, force } => {
            edit::run_new(&config, file.as_deref(), width, height, force)
        }
        Commands::Place { file, at, asset } => edit::run_place(&config, &file, at, &asset),
        Commands::Erase { file, at, level } => edit::run_erase(&config, &file, at, level),
        Commands::Resize { file, size } => edit::run_resize(&config, &file, size),
        Commands::Show { file, select, legend } => show::run_show(&config, &file, select, legend),
        Commands::Inspect { file, at } => show::run_inspect(&config, &file, at),
        Commands::Assets => show::run_assets(&config),
        Commands::Check { paths } => check::run_check(&config, &paths),
    }
}

/// Open a session on the document at `path`.
pub(crate) fn open_session(config: &TilepaintConfig, path: &Path) -> Result<EditorSession, String> {
    let mut session = EditorSession::with_config(config);
    import_file(&mut session, path)?;
    Ok(session)
}

/// Read `path` and import it into `session`.
///
/// The file read sits between `begin_import` and `finish_import`, so the
/// session refuses a second import while this one is outstanding.
pub(crate) fn import_file(session: &mut EditorSession, path: &Path) -> Result<(), String> {
    let ticket = session.begin_import().map_err(|e| e.to_string())?;
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            session.cancel_import(ticket);
            return Err(format!("Cannot open map file '{}': {}", path.display(), e));
        }
    };
    session.finish_import(ticket, &text).map_err(|e| format!("'{}': {}", path.display(), e))
}

/// Export `session` and write it to `path`.
pub(crate) fn export_file(session: &EditorSession, path: &Path) -> Result<(), String> {
    let mut json = session.export().map_err(|e| e.to_string())?;
    json.push('\n');
    fs::write(path, json).map_err(|e| format!("Cannot write '{}': {}", path.display(), e))
}
