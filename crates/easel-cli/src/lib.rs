//! Easel CLI library
//!
//! This module contains the core CLI logic for the Easel layout tool: read a
//! JSON document, run one layout or arrangement operation over it and write
//! the updated document.

pub mod error_adapter;

mod args;
mod config;
mod document;

pub use args::{Args, Command};
pub use document::Document;

use std::fs;

use log::{debug, info};

use easel::{EaselError, LayoutBuilder, config::AppConfig, graph::GraphNode, identifier::Id};

/// Run the Easel CLI application
///
/// # Errors
///
/// Returns `EaselError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input documents
pub fn run(args: &Args) -> Result<(), EaselError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing document"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, &args.command);

    let source = fs::read_to_string(&args.input)?;
    let mut document = Document::parse(&source)?;
    debug!(node_count = document.node_count(); "Document parsed");

    let builder = LayoutBuilder::new(app_config);
    let graph = document.graph();
    let nodes = match &args.command {
        Command::Layout { algorithm, .. } => match algorithm {
            Some(algorithm) => builder.apply(*algorithm, &graph),
            None => builder.apply_default(&graph),
        },
        Command::Align { mode, ids } => builder.align(graph.nodes(), &selection(ids), *mode),
        Command::Distribute { axis, ids } => {
            builder.distribute(graph.nodes(), &selection(ids), *axis)
        }
    };
    document.apply_positions(&nodes);
    log_fit_view(&builder, &nodes);

    let json = document.to_json()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Document written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Command-line layout flags take precedence over the configuration file.
fn apply_overrides(config: &mut AppConfig, command: &Command) {
    let Command::Layout {
        algorithm,
        direction,
        spacing,
        grid_size,
        alignment,
    } = command
    else {
        return;
    };

    let layout = config.layout_mut();
    if let Some(algorithm) = algorithm {
        layout.set_algorithm(*algorithm);
    }
    if let Some(direction) = direction {
        layout.set_direction(*direction);
    }
    if let Some(spacing) = spacing {
        layout.set_spacing(*spacing);
    }
    if let Some(grid_size) = grid_size {
        layout.set_grid_size(*grid_size);
    }
    if let Some(alignment) = alignment {
        layout.set_alignment(*alignment);
    }
}

fn selection(ids: &[String]) -> Vec<Id> {
    ids.iter().map(|id| Id::new(id)).collect()
}

fn log_fit_view(builder: &LayoutBuilder, nodes: &[GraphNode]) {
    match builder.fit_view_request(nodes) {
        Some(request) => {
            let bounds = request.bounds();
            info!(
                origin:? = bounds.min_point(),
                width = bounds.width(),
                height = bounds.height(),
                padding = request.padding(),
                duration_ms = request.duration().as_millis() as u64;
                "Fit view"
            );
        }
        None => debug!("Nothing to fit"),
    }
}
