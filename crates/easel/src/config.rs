//! Configuration types for Easel layouts.
//!
//! This module provides the settings a front end loads once and then feeds
//! into every layout call. All types implement [`serde::Deserialize`] so they
//! can be read from a TOML file; every field is optional and falls back to
//! the editor defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and viewport settings.
//! - [`LayoutConfig`] - Default algorithm and [`LayoutOptions`] values.
//! - [`ViewportConfig`] - Padding and timing of the fit-view request issued after a layout.
//!
//! # Example
//!
//! ```
//! # use easel::config::AppConfig;
//! # use easel::options::Algorithm;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().algorithm(), Algorithm::Hierarchical);
//! assert_eq!(config.layout().options().spacing(), 150.0);
//! ```

use std::time::Duration;

use serde::Deserialize;

use easel_core::options::{
    Algorithm, DEFAULT_GRID_SIZE, DEFAULT_SPACING, Direction, LayerAlignment, LayoutOptions,
};

/// Top-level application configuration combining layout and viewport settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Viewport configuration section.
    #[serde(default)]
    viewport: ViewportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    pub fn new(layout: LayoutConfig, viewport: ViewportConfig) -> Self {
        Self { layout, viewport }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns a mutable reference to the layout configuration.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the viewport configuration.
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }
}

/// Default layout algorithm and options.
///
/// Values are not validated here. Invalid spacing or grid sizes are
/// replaced by the defaults when a layout runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    algorithm: Algorithm,
    direction: Direction,
    spacing: f32,
    alignment: LayerAlignment,
    grid_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            spacing: DEFAULT_SPACING,
            alignment: LayerAlignment::default(),
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] running `algorithm` with `options`.
    pub fn new(algorithm: Algorithm, options: LayoutOptions) -> Self {
        Self {
            algorithm,
            direction: options.direction(),
            spacing: options.spacing(),
            alignment: options.alignment(),
            grid_size: options.grid_size(),
        }
    }

    /// Returns the algorithm used when none is requested explicitly.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the configured values as [`LayoutOptions`].
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions::default()
            .with_direction(self.direction)
            .with_spacing(self.spacing)
            .with_alignment(self.alignment)
            .with_grid_size(self.grid_size)
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    pub fn set_alignment(&mut self, alignment: LayerAlignment) {
        self.alignment = alignment;
    }

    pub fn set_grid_size(&mut self, grid_size: f32) {
        self.grid_size = grid_size;
    }
}

/// Settings of the fit-view request issued after a layout is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Margin around the framed nodes, as a fraction of their extent.
    padding: f32,
    /// Length of the animated transition, in milliseconds.
    duration_ms: u64,
    /// Wait before the transition starts, in milliseconds.
    delay_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: 0.1,
            duration_ms: 800,
            delay_ms: 100,
        }
    }
}

impl ViewportConfig {
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
