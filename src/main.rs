//! Tilepaint - command-line map editor

use std::process::ExitCode;

use tilepaint::cli;

fn main() -> ExitCode {
    cli::run()
}
