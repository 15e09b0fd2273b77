//! Seal geometry constants and font configuration.
//!
//! Geometry lives in typed structs whose `Default` values are the production
//! seal dimensions. Font files are configured from environment variables.

use std::f64::consts::PI;
use std::path::PathBuf;

/// Family used by the circular seal.
pub const SERIF_FAMILY: &str = "Times New Roman";
/// Family used by the rectangular seal.
pub const SANS_FAMILY: &str = "Arial";

pub const ENV_SERIF_FONT: &str = "SEAL_SERIF_FONT";
pub const ENV_SERIF_BOLD_FONT: &str = "SEAL_SERIF_BOLD_FONT";
pub const ENV_SANS_FONT: &str = "SEAL_SANS_FONT";
pub const ENV_SANS_BOLD_FONT: &str = "SEAL_SANS_BOLD_FONT";
pub const ENV_STROKE_FALLBACK: &str = "SEAL_STROKE_FALLBACK";

/// Angular budget bands for budgeted arc layout.
///
/// These are empirically tuned, not derived from font metrics. Short captions
/// (below `short_len`) get the widest band, which is wider than the band for
/// medium captions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBands {
    /// Captions shorter than this use `short_angle`.
    pub short_len: usize,
    /// Captions longer than this use `long_angle` and `long_shrink`.
    pub long_len: usize,
    /// Captions longer than this (and not long) use `medium_shrink`.
    pub shrink_len: usize,
    pub short_angle: f64,
    pub medium_angle: f64,
    pub long_angle: f64,
    pub medium_shrink: f64,
    pub long_shrink: f64,
}

impl Default for BudgetBands {
    fn default() -> Self {
        BudgetBands {
            short_len: 9,
            long_len: 12,
            shrink_len: 8,
            short_angle: 1.5 * PI,
            medium_angle: PI,
            long_angle: 0.75 * PI,
            medium_shrink: 0.8,
            long_shrink: 0.6,
        }
    }
}

impl BudgetBands {
    /// Total angle (radians) a caption of `len` glyphs may sweep.
    pub fn available_angle(&self, len: usize) -> f64 {
        if len < self.short_len {
            self.short_angle
        } else if len > self.long_len {
            self.long_angle
        } else {
            self.medium_angle
        }
    }

    /// Spacing reduction applied to the per-glyph step.
    pub fn shrink_factor(&self, len: usize) -> f64 {
        if len > self.long_len {
            self.long_shrink
        } else if len > self.shrink_len {
            self.medium_shrink
        } else {
            1.0
        }
    }
}

/// Dimensions of the circular seal.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSealLayout {
    pub width: u32,
    pub height: u32,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub border_width: f64,
    /// Distance the upper caption sits inside the mid-ring baseline,
    /// and the lower caption outside it.
    pub caption_inset: f64,
    pub caption_size: f64,
    /// Distance of the inner-word baseline inside the inner circle.
    pub inner_word_inset: f64,
    /// Extra radius for the lower inner word.
    pub inner_word_lower_offset: f64,
    pub inner_word_size: f64,
    pub label_size: f64,
    pub line_spacing: f64,
}

impl Default for CircleSealLayout {
    fn default() -> Self {
        CircleSealLayout {
            width: 500,
            height: 500,
            outer_radius: 140.0,
            inner_radius: 70.0,
            border_width: 3.0,
            caption_inset: 10.0,
            caption_size: 22.0,
            inner_word_inset: 25.0,
            inner_word_lower_offset: 10.0,
            inner_word_size: 16.0,
            label_size: 14.0,
            line_spacing: 5.0,
        }
    }
}

impl CircleSealLayout {
    /// Baseline radius midway between the two border circles.
    pub fn ring_baseline(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }
}

/// Dimensions of the rectangular seal. The canvas size comes from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSealLayout {
    pub border_width: f64,
    pub corner_radius: f64,
    pub seal_center_x: f64,
    pub seal_radius: f64,
    pub frame_margin: f64,
    pub frame_width: f64,
    pub main_circle_width: f64,
    /// How far the inner circle sits inside the main circle.
    pub inner_circle_gap: f64,
    pub inner_circle_width: f64,
    pub star_outer_radius: f64,
    pub star_inner_radius: f64,
    pub star_width: f64,
    /// How far the caption baseline sits inside the main circle.
    pub caption_inset: f64,
    pub caption_size: f64,
    pub caption_spacing: f64,
    /// Gap between the seal circle and the text column.
    pub column_gap: f64,
    pub label_size: f64,
    /// Average glyph width as a fraction of the name size, for the separator.
    pub separator_ratio: f64,
}

impl Default for RectangleSealLayout {
    fn default() -> Self {
        RectangleSealLayout {
            border_width: 3.0,
            corner_radius: 5.0,
            seal_center_x: 120.0,
            seal_radius: 80.0,
            frame_margin: 15.0,
            frame_width: 2.0,
            main_circle_width: 3.0,
            inner_circle_gap: 20.0,
            inner_circle_width: 2.0,
            star_outer_radius: 20.0,
            star_inner_radius: 8.0,
            star_width: 2.0,
            caption_inset: 12.0,
            caption_size: 16.0,
            caption_spacing: 2.5,
            column_gap: 40.0,
            label_size: 14.0,
            separator_ratio: 0.6,
        }
    }
}

impl RectangleSealLayout {
    pub const DEFAULT_WIDTH: u32 = 600;
    pub const DEFAULT_HEIGHT: u32 = 250;
    /// Largest accepted canvas side, in pixels
    pub const MAX_SIDE: u32 = 4096;
}

/// Where outline fonts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub serif: Option<PathBuf>,
    pub serif_bold: Option<PathBuf>,
    pub sans: Option<PathBuf>,
    pub sans_bold: Option<PathBuf>,
    /// Use the built-in stroke font for families without an outline font.
    pub stroke_fallback: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            serif: None,
            serif_bold: None,
            sans: None,
            sans_bold: None,
            stroke_fallback: true,
        }
    }
}

impl FontConfig {
    /// Build font config from environment variables.
    ///
    /// Optional:
    /// - `SEAL_SERIF_FONT`, `SEAL_SERIF_BOLD_FONT`: faces registered as "Times New Roman"
    /// - `SEAL_SANS_FONT`, `SEAL_SANS_BOLD_FONT`: faces registered as "Arial"
    /// - `SEAL_STROKE_FALLBACK`: `true` (default) or `false`
    pub fn from_env() -> Self {
        FontConfig {
            serif: env_path(ENV_SERIF_FONT),
            serif_bold: env_path(ENV_SERIF_BOLD_FONT),
            sans: env_path(ENV_SANS_FONT),
            sans_bold: env_path(ENV_SANS_BOLD_FONT),
            stroke_fallback: parse_flag(std::env::var(ENV_STROKE_FALLBACK).ok().as_deref(), true),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
