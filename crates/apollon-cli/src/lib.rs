//! CLI logic for the Apollon diagram renderer.
//!
//! This module contains the core CLI logic: configuration loading, command
//! line overrides, and the JSON to SVG pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use apollon::{ApollonError, DiagramBuilder, config::AppConfig};

/// Run the Apollon CLI application
///
/// This function decodes the input model, renders it, and writes the
/// resulting SVG to the output file.
///
/// # Errors
///
/// Returns `ApollonError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model decoding errors
/// - Unsupported diagram types
/// - Export errors
pub fn run(args: &Args) -> Result<(), ApollonError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, args);

    let json = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let model = builder.parse(&json)?;
    builder.export_svg(&model, &args.output)?;

    Ok(())
}

/// Command line values win over the configuration file.
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    let render = config.render_mut();
    if let Some(font_size) = args.font_size {
        debug!(font_size; "Overriding font size");
        render.set_font_size(font_size);
    }
    if let Some(offset) = args.offset {
        debug!(offset:?; "Overriding offset");
        render.set_offset(offset);
    }
}
