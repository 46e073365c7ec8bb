//! Text measurement for badge layout
//!
//! The host normally supplies its own font metrics through [`TextMeasure`].
//! [`FontMetrics`] measures with a TrueType font via fontdue (pure Rust) for
//! hosts that don't have one, and [`MonospaceMetrics`] covers fixed-advance
//! bitmap fonts.

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::constants::font::SYSTEM_FONT_PATHS;

/// Unscaled text metrics in host pixels
pub trait TextMeasure {
    /// Advance width of `text`
    fn text_width(&self, text: &str) -> u32;

    /// Height of one line of text
    fn line_height(&self) -> u32;
}

/// Every character advances by the same amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub advance: u32,
    pub line_height: u32,
}

impl MonospaceMetrics {
    pub fn new(advance: u32, line_height: u32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.advance
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// Font metrics using fontdue
#[derive(Debug)]
pub struct FontMetrics {
    font: Font,
    size: f32,
}

impl FontMetrics {
    /// Parse a TrueType/OpenType font from memory
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
        Ok(Self { font, size })
    }

    /// Load a TrueType font from a file path
    pub fn from_path(path: PathBuf, size: f32) -> Result<Self> {
        debug!(path = %path.display(), size = size, "Attempting to load font from path");

        let font_data = fs::read(&path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;

        let metrics = Self::from_bytes(font_data, size)
            .with_context(|| format!("Failed to load font: {}", path.display()))?;

        info!(path = %path.display(), "Loaded font for badge metrics");
        Ok(metrics)
    }

    /// Try common system font locations in order
    pub fn from_system_font(size: f32) -> Result<Self> {
        for path in SYSTEM_FONT_PATHS {
            if let Ok(metrics) = Self::from_path(PathBuf::from(path), size) {
                return Ok(metrics);
            }
        }

        Err(anyhow::anyhow!(
            "Could not find any system fonts. Tried paths: {:?}",
            SYSTEM_FONT_PATHS
        ))
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str) -> u32 {
        let width: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum();
        width.ceil() as u32
    }

    fn line_height(&self) -> u32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|line| line.new_line_size)
            .unwrap_or(self.size)
            .ceil() as u32
    }
}
