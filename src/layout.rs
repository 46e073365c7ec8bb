//! Greedy row layout for tag badges
//!
//! Badges are placed left to right and wrap to a new row when the next one
//! (plus the gap) would exceed the width budget. A badge wider than the
//! budget still gets a row of its own; nothing is dropped or split.
//!
//! [`TagLayout`] keeps the last result and only recomputes when asked for a
//! different width. The badge list is owned and never changes, so the width
//! is the whole cache key.

use tracing::debug;

use crate::constants::layout::{
    BLOCK_PADDING, ROW_GAP, ROW_PADDING, SCALE, SCREEN_EDGE_MARGIN, TAG_GAP, TAG_PADDING,
};
use crate::metrics::TextMeasure;
use crate::paint::{self, DrawOp};
use crate::resolver::ResolvedTag;

/// A badge with its measured width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTag {
    pub tag: ResolvedTag,
    pub width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub tags: Vec<PlacedTag>,
    /// Badge widths plus the gaps between them
    pub width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLayout {
    pub rows: Vec<Row>,
    /// Widest row
    pub width: u32,
    /// All rows, row gaps and block padding; 0 without rows
    pub height: u32,
    pub row_height: u32,
}

/// Scaled badge width: text plus padding on both sides
pub fn tag_width(measure: &impl TextMeasure, text: &str) -> u32 {
    (measure.text_width(text) as f32 * SCALE) as u32 + TAG_PADDING * 2
}

pub fn row_height(measure: &impl TextMeasure) -> u32 {
    (measure.line_height() as f32 * SCALE) as u32 + ROW_PADDING
}

/// Pack `tags` into rows no wider than `max_width`
pub fn flow(tags: &[ResolvedTag], measure: &impl TextMeasure, max_width: u32) -> FlowLayout {
    let mut rows = Vec::new();
    let mut current = Row::default();

    for tag in tags {
        let width = tag_width(measure, &tag.text);

        if !current.tags.is_empty() && current.width + TAG_GAP + width > max_width {
            rows.push(std::mem::take(&mut current));
        }

        if !current.tags.is_empty() {
            current.width += TAG_GAP;
        }
        current.tags.push(PlacedTag {
            tag: tag.clone(),
            width,
        });
        current.width += width;
    }

    if !current.tags.is_empty() {
        rows.push(current);
    }

    let row_height = row_height(measure);
    let height = match rows.len() as u32 {
        0 => 0,
        n => n * row_height + (n - 1) * ROW_GAP + BLOCK_PADDING,
    };
    let width = rows.iter().map(|row| row.width).max().unwrap_or(0);

    FlowLayout {
        rows,
        width,
        height,
        row_height,
    }
}

#[derive(Debug)]
struct CachedLayout {
    max_width: u32,
    layout: FlowLayout,
}

/// Badges of one tooltip plus their last computed layout
#[derive(Debug)]
pub struct TagLayout {
    tags: Vec<ResolvedTag>,
    cache: Option<CachedLayout>,
}

impl TagLayout {
    pub fn new(tags: Vec<ResolvedTag>) -> Self {
        Self { tags, cache: None }
    }

    pub fn tags(&self) -> &[ResolvedTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Budget used for sizing before the draw position is known
    pub fn default_max_width(screen_width: u32) -> u32 {
        screen_width / 2
    }

    /// Budget at draw time: half the screen, but never past the right edge margin
    pub fn available_width(screen_width: u32, x: i32) -> u32 {
        let to_edge = (screen_width as i64 - x as i64 - SCREEN_EDGE_MARGIN as i64).max(0);
        let to_edge = u32::try_from(to_edge).unwrap_or(u32::MAX);
        Self::default_max_width(screen_width).min(to_edge)
    }

    /// Layout for `max_width`, reusing the previous one when the width is unchanged
    pub fn layout(&mut self, measure: &impl TextMeasure, max_width: u32) -> &FlowLayout {
        if self
            .cache
            .as_ref()
            .is_some_and(|cached| cached.max_width != max_width)
        {
            self.cache = None;
        }

        let tags = &self.tags;
        &self
            .cache
            .get_or_insert_with(|| {
                let layout = flow(tags, measure, max_width);
                debug!(
                    max_width = max_width,
                    tags = tags.len(),
                    rows = layout.rows.len(),
                    "Computed tag layout"
                );
                CachedLayout { max_width, layout }
            })
            .layout
    }

    /// Width reported to the host tooltip before drawing
    pub fn width(&mut self, measure: &impl TextMeasure, screen_width: u32) -> u32 {
        self.layout(measure, Self::default_max_width(screen_width)).width
    }

    /// Height reported to the host tooltip before drawing
    pub fn height(&mut self, measure: &impl TextMeasure, screen_width: u32) -> u32 {
        self.layout(measure, Self::default_max_width(screen_width)).height
    }

    /// Lay out for the space left right of `x` and produce draw operations
    pub fn draw(
        &mut self,
        measure: &impl TextMeasure,
        x: i32,
        y: i32,
        screen_width: u32,
    ) -> Vec<DrawOp> {
        let max_width = Self::available_width(screen_width, x);
        paint::draw_ops(self.layout(measure, max_width), x, y)
    }
}
