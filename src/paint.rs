//! Draw plan for a laid-out badge block
//!
//! The host owns pixels; this turns a [`FlowLayout`] into fills and text
//! runs in host coordinates. Each badge is a background in its color at 85%
//! brightness, a 1-pixel frame at 70%, and white scaled text with shadow.

use crate::color::darken;
use crate::constants::color::{BACKGROUND_FACTOR, FRAME_FACTOR, TEXT};
use crate::constants::layout::{ROW_GAP, SCALE, TAG_GAP, TAG_PADDING, TEXT_OFFSET_Y};
use crate::layout::FlowLayout;
use crate::types::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid rectangle
    Fill { rect: Rect, argb: u32 },
    /// Text drawn at `(x, y)` with the given scale
    Text {
        x: i32,
        y: i32,
        scale: f32,
        text: String,
        argb: u32,
        shadow: bool,
    },
}

/// Draw operations for `layout` with its top-left corner at `(x, y)`
pub fn draw_ops(layout: &FlowLayout, x: i32, y: i32) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let mut current_y = y + TEXT_OFFSET_Y;

    for row in &layout.rows {
        let mut current_x = x;

        for placed in &row.tags {
            let rect = Rect::new(current_x, current_y, placed.width, layout.row_height);

            ops.push(DrawOp::Fill {
                rect,
                argb: darken(placed.tag.argb, BACKGROUND_FACTOR),
            });

            let frame = darken(placed.tag.argb, FRAME_FACTOR);
            ops.extend(
                rect.frame_edges()
                    .into_iter()
                    .map(|edge| DrawOp::Fill { rect: edge, argb: frame }),
            );

            ops.push(DrawOp::Text {
                x: current_x + TAG_PADDING as i32,
                y: current_y + TEXT_OFFSET_Y,
                scale: SCALE,
                text: placed.tag.text.clone(),
                argb: TEXT,
                shadow: true,
            });

            current_x += (placed.width + TAG_GAP) as i32;
        }

        current_y += (layout.row_height + ROW_GAP) as i32;
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::flow;
    use crate::metrics::MonospaceMetrics;
    use crate::resolver::ResolvedTag;

    fn tag(text: &str, argb: u32) -> ResolvedTag {
        ResolvedTag {
            text: text.to_string(),
            argb,
        }
    }

    fn texts(ops: &[DrawOp]) -> Vec<(i32, i32, &str)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                DrawOp::Fill { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_layout_draws_nothing() {
        assert!(draw_ops(&FlowLayout::default(), 5, 5).is_empty());
    }

    #[test]
    fn test_badge_ops() {
        let layout = flow(&[tag("abcd", 0xFF4040EE)], &MonospaceMetrics::new(4, 8), 100);
        let ops = draw_ops(&layout, 10, 20);

        assert_eq!(ops.len(), 6);
        assert_eq!(
            ops[0],
            DrawOp::Fill {
                rect: Rect::new(10, 21, 16, 8),
                argb: 0xFF3636CA
            }
        );
        let frame = darken(0xFF4040EE, FRAME_FACTOR);
        for (op, edge) in ops[1..5].iter().zip(Rect::new(10, 21, 16, 8).frame_edges()) {
            assert_eq!(op, &DrawOp::Fill { rect: edge, argb: frame });
        }
        assert_eq!(
            ops[5],
            DrawOp::Text {
                x: 12,
                y: 22,
                scale: SCALE,
                text: "abcd".to_string(),
                argb: TEXT,
                shadow: true
            }
        );
    }

    #[test]
    fn test_positions_advance_by_gap_and_row() {
        let tags = [
            tag("abcd", 0xFF808080),
            tag("efgh", 0xFF808080),
            tag("ijkl", 0xFF808080),
        ];
        let layout = flow(&tags, &MonospaceMetrics::new(4, 8), 53);
        let ops = draw_ops(&layout, 0, 0);

        // 16px badges, 3px gap, 8px rows, 2px row gap
        assert_eq!(texts(&ops), [(2, 2, "abcd"), (21, 2, "efgh"), (2, 12, "ijkl")]);
    }
}
