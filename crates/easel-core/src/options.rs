//! Layout option types.
//!
//! This module defines the knobs callers pass to the layout engines and the
//! selectors for the alignment and distribution tools.
//!
//! - [`LayoutOptions`] - Direction, spacing, level alignment and grid size
//! - [`Algorithm`] - Which layout engine to run
//! - [`AlignMode`] / [`DistributeAxis`] - Selection arrangement tools
//!
//! Every enum parses from the short names used by the editor's controls
//! (`"TB"`, `"force"`, `"left"`, `"horizontal"`, ...) through [`FromStr`] and
//! serde alike.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default distance between adjacent layout slots, in canvas pixels.
pub const DEFAULT_SPACING: f32 = 150.0;

/// Default snapping grid, in canvas pixels.
pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Error returned when an option string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {kind} `{value}`, expected one of: {expected}")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Flow direction of a hierarchical layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Levels grow downwards
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    /// Levels grow to the right
    #[serde(rename = "LR")]
    LeftToRight,
    /// Levels grow upwards
    #[serde(rename = "BT")]
    BottomToTop,
    /// Levels grow to the left
    #[serde(rename = "RL")]
    RightToLeft,
}

impl Direction {
    /// Returns true if levels are stacked along the y axis
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }

    /// Returns -1 for directions that grow towards negative coordinates
    pub fn depth_sign(self) -> f32 {
        match self {
            Self::TopToBottom | Self::LeftToRight => 1.0,
            Self::BottomToTop | Self::RightToLeft => -1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" | "tb" => Ok(Self::TopToBottom),
            "LR" | "lr" => Ok(Self::LeftToRight),
            "BT" | "bt" => Ok(Self::BottomToTop),
            "RL" | "rl" => Ok(Self::RightToLeft),
            _ => Err(ParseOptionError::new("direction", s, "TB, LR, BT, RL")),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TopToBottom => "TB",
            Direction::LeftToRight => "LR",
            Direction::BottomToTop => "BT",
            Direction::RightToLeft => "RL",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// Placement of the nodes of one level along the level's width axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerAlignment {
    /// The first node of the level sits on the depth axis, the rest follow
    Start,
    /// The level is centered on the depth axis
    #[default]
    Center,
    /// The last node of the level sits on the depth axis, the rest precede it
    End,
}

impl LayerAlignment {
    /// Offset, in slots, of the node at `index` in a level of `len` nodes.
    pub fn slot_offset(self, index: usize, len: usize) -> f32 {
        let index = index as f32;
        let last = len.saturating_sub(1) as f32;
        match self {
            Self::Start => index,
            Self::Center => index - last / 2.0,
            Self::End => index - last,
        }
    }
}

impl FromStr for LayerAlignment {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(ParseOptionError::new("alignment", s, "start, center, end")),
        }
    }
}

/// Configuration shared by the layout engines.
///
/// All fields are optional when deserialized and fall back to the editor's
/// defaults.
///
/// # Examples
///
/// ```
/// # use easel_core::options::{Direction, LayoutOptions};
/// let options = LayoutOptions::default()
///     .with_direction(Direction::LeftToRight)
///     .with_spacing(200.0);
///
/// assert_eq!(options.grid_size(), 20.0);
/// assert_eq!(options.spacing(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    direction: Direction,
    spacing: f32,
    alignment: LayerAlignment,
    grid_size: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            spacing: DEFAULT_SPACING,
            alignment: LayerAlignment::default(),
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl LayoutOptions {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_alignment(mut self, alignment: LayerAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_grid_size(mut self, grid_size: f32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn alignment(&self) -> LayerAlignment {
        self.alignment
    }

    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    /// Returns a copy where unusable spacing or grid values are replaced by
    /// the defaults.
    ///
    /// Layout calls are total, so a zero grid (which would divide by zero
    /// while snapping) or a negative spacing is corrected rather than
    /// rejected.
    pub fn sanitized(self) -> Self {
        let mut options = self;
        if !(options.spacing.is_finite() && options.spacing > 0.0) {
            warn!(spacing = options.spacing; "Invalid layout spacing, using default");
            options.spacing = DEFAULT_SPACING;
        }
        if !(options.grid_size.is_finite() && options.grid_size > 0.0) {
            warn!(grid_size = options.grid_size; "Invalid grid size, using default");
            options.grid_size = DEFAULT_GRID_SIZE;
        }
        options
    }
}

/// Available layout algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Layered layout by breadth-first depth (default)
    #[default]
    #[serde(rename = "hierarchical")]
    Hierarchical,
    /// Spring/repulsion relaxation
    #[serde(rename = "force")]
    ForceDirected,
    /// Square-ish grid in input order
    #[serde(rename = "grid")]
    Grid,
    /// Evenly spaced ring in input order
    #[serde(rename = "circular")]
    Circular,
}

impl FromStr for Algorithm {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hierarchical" => Ok(Self::Hierarchical),
            "force" => Ok(Self::ForceDirected),
            "grid" => Ok(Self::Grid),
            "circular" => Ok(Self::Circular),
            _ => Err(ParseOptionError::new(
                "layout algorithm",
                s,
                "hierarchical, force, grid, circular",
            )),
        }
    }
}

impl From<Algorithm> for &'static str {
    fn from(val: Algorithm) -> Self {
        match val {
            Algorithm::Hierarchical => "hierarchical",
            Algorithm::ForceDirected => "force",
            Algorithm::Grid => "grid",
            Algorithm::Circular => "circular",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// Edge or center line that selected nodes are aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Left,
    Right,
    Center,
    Top,
    Bottom,
    Middle,
}

impl AlignMode {
    /// Returns true if the mode moves nodes along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Center)
    }
}

impl FromStr for AlignMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "middle" => Ok(Self::Middle),
            _ => Err(ParseOptionError::new(
                "alignment mode",
                s,
                "left, right, center, top, bottom, middle",
            )),
        }
    }
}

/// Axis along which selected nodes are spread evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

impl FromStr for DistributeAxis {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseOptionError::new(
                "distribution axis",
                s,
                "horizontal, vertical",
            )),
        }
    }
}
