//! Command-line argument definitions for the Easel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input document, where the result is
//! written, the configuration file, logging verbosity and the operation to
//! run.

use clap::{Parser, Subcommand};

use easel::options::{AlignMode, Algorithm, DistributeAxis, Direction, LayerAlignment};

/// Command-line arguments for the Easel layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON document. Printed to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation applied to the document
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute new positions for every node
    Layout {
        /// hierarchical, force, grid or circular. Defaults to the configured algorithm.
        algorithm: Option<Algorithm>,

        /// Flow direction of a hierarchical layout (TB, LR, BT, RL)
        #[arg(long)]
        direction: Option<Direction>,

        /// Distance between adjacent slots, in pixels
        #[arg(long)]
        spacing: Option<f32>,

        /// Snapping grid, in pixels
        #[arg(long)]
        grid_size: Option<f32>,

        /// Placement of nodes within a level (start, center, end)
        #[arg(long)]
        alignment: Option<LayerAlignment>,
    },

    /// Align the given nodes to a shared edge or center line
    Align {
        /// left, right, center, top, bottom or middle
        mode: AlignMode,

        /// Ids of the selected nodes
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Spread the given nodes evenly along an axis
    Distribute {
        /// horizontal or vertical
        axis: DistributeAxis,

        /// Ids of the selected nodes
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
