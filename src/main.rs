//! # Voxel Ray Tracer Entry Point
//!
//! Renders one image and exits. The only argument is an optional path to a
//! JSON configuration file; without it the built-in demo scene is rendered
//! with the default settings.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- render.json
//! ```

use std::{path::PathBuf, process::ExitCode};

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    match voxel_raytracer::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
