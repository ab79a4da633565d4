//! GTKWave layout generation for Vivado simulation directories.
//!
//! Follows the simulation script to the top-level Verilog source, scans the
//! source's declaration block, and writes a save file grouping the signals
//! into Inputs, Outputs and Internals.

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod project;
pub mod writer;

use std::path::Path;

use gtkw_parser::{classify_block, DeclarationBlock, GroupedSignals};
use log::info;

pub use cli::Cli;
pub use config::{LayoutFormat, Settings};
pub use error::GenError;
pub use layout::{LayoutDocument, WindowSize};
pub use project::{ProjectLocator, ProjectSources};
pub use writer::{write_layout, WrittenLayout, DUMP_STEM};

/// A layout ready to be written, with where its signals came from.
#[derive(Debug, Clone)]
pub struct GeneratedLayout {
    pub sources: ProjectSources,
    pub signals: GroupedSignals,
    pub document: LayoutDocument,
}

/// Runs discovery and the declaration scan without touching the filesystem
/// beyond reading.
pub fn build_layout(script: &Path, settings: &Settings) -> Result<GeneratedLayout, GenError> {
    let sources = ProjectLocator::new(settings.elaborate_command.as_str()).discover(script)?;

    let source_lines = project::read_lines(&sources.source_file)?;
    let block = DeclarationBlock::locate(&source_lines).map_err(|source| GenError::Parse {
        path: sources.source_file.clone(),
        source,
    })?;

    let signals = classify_block(&block);
    info!(
        "{}: {} inputs, {} outputs, {} internals",
        sources.module_name,
        signals.inputs().len(),
        signals.outputs().len(),
        signals.internals().len()
    );

    let document = LayoutDocument::new(&sources.module_name, &signals, settings.window);

    Ok(GeneratedLayout {
        sources,
        signals,
        document,
    })
}

/// Runs the whole tool for parsed command-line arguments.
///
/// Nothing is written unless every lookup and the declaration scan succeed.
pub fn run(cli: &Cli) -> Result<WrittenLayout, GenError> {
    let file_config = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config, cli.overrides())?;

    let generated = build_layout(&cli.script, &settings)?;
    write_layout(
        &generated.document,
        &generated.sources.module_name,
        settings.format,
        &cli.out_dir,
    )
}
