use crate::style::CellShape;
use ratatui::layout::{Margin, Rect};

/// Space left between the edge of a cell and its background
pub const CELL_INSET: Margin = Margin {
    horizontal: 1,
    vertical: 0,
};

/// Corner radius of the event indicator, whatever the cell's shape
pub const INDICATOR_RADIUS: u16 = 1;

/// Geometry of a day cell's parts within the area it's rendered into
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CellLayout {
    pub area: Rect,
    pub background: Rect,
    pub corner_radius: u16,
    pub text: Rect,
    pub indicator: Rect,
    pub indicator_radius: u16,
}

impl CellLayout {
    pub fn compute(area: Rect, shape: CellShape, border_width: u16) -> CellLayout {
        let mut background = area.inner(CELL_INSET);
        if shape == CellShape::Round {
            // Squaring the region keeps the circle from being squashed
            background = centered_square(background);
        }
        let corner_radius = match shape {
            CellShape::Square => 0,
            CellShape::Round => background.width / 2,
            CellShape::Bevel(radius) => radius,
        };
        let content = background.inner(Margin::new(border_width, border_width));
        let text = Rect {
            height: content.height.div_ceil(2),
            ..content
        };
        let side = indicator_side(area.height);
        let indicator = Rect {
            x: area.x + area.width.saturating_sub(side) / 2,
            y: area.y + area.height / 2,
            width: side.min(area.width),
            height: side,
        };
        CellLayout {
            area,
            background,
            corner_radius,
            text,
            indicator,
            indicator_radius: INDICATOR_RADIUS,
        }
    }

    /// The row a day number `width` columns wide is drawn in: the top of the
    /// text rect, centered
    pub fn text_line(&self, width: u16) -> Rect {
        let width = width.min(self.text.width);
        Rect {
            x: self.text.x + (self.text.width - width) / 2,
            y: self.text.y,
            width,
            height: self.text.height.min(1),
        }
    }

    /// Where the indicator goes when the day number occupies `line`.
    ///
    /// A bordered cell that is only three rows tall has a single content row,
    /// shared by the number and the indicator.  In that case the indicator
    /// shrinks to one cell next to the number, on whichever side has room.
    pub fn indicator_beside(&self, line: Rect) -> Rect {
        if line.is_empty() || !line.intersects(self.indicator) {
            self.indicator
        } else if line.right() < self.text.right() {
            Rect::new(line.right(), line.y, 1, 1)
        } else if line.x > self.text.x {
            Rect::new(line.x - 1, line.y, 1, 1)
        } else {
            self.indicator
        }
    }
}

/// The largest square that fits in `rect`, centered within it
pub fn centered_square(rect: Rect) -> Rect {
    let side = rect.width.min(rect.height);
    Rect {
        x: rect.x + (rect.width - side) / 2,
        y: rect.y + (rect.height - side) / 2,
        width: side,
        height: side,
    }
}

// 40% of the cell's height, but never vanishing in a non-empty cell
fn indicator_side(height: u16) -> u16 {
    let side = u16::try_from(u32::from(height) * 2 / 5).unwrap_or(u16::MAX);
    if height > 0 {
        side.max(1)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let layout = CellLayout::compute(Rect::new(10, 5, 7, 3), CellShape::Square, 0);
        assert_eq!(layout.background, Rect::new(11, 5, 5, 3));
        assert_eq!(layout.corner_radius, 0);
        assert_eq!(layout.text, Rect::new(11, 5, 5, 2));
        assert_eq!(layout.indicator, Rect::new(13, 6, 1, 1));
        assert_eq!(layout.indicator_radius, INDICATOR_RADIUS);
    }

    #[test]
    fn test_round_is_square_and_centered() {
        let area = Rect::new(0, 0, 22, 10);
        let layout = CellLayout::compute(area, CellShape::Round, 0);
        let bg = layout.background;
        assert_eq!(bg.width, bg.height);
        assert_eq!(bg, Rect::new(6, 0, 10, 10));
        assert_eq!(bg.x - area.x, area.right() - bg.right());
        assert_eq!(bg.y - area.y, area.bottom() - bg.bottom());
        assert_eq!(layout.corner_radius, 5);
    }

    #[test]
    fn test_round_in_tall_cell() {
        let area = Rect::new(0, 0, 6, 12);
        let layout = CellLayout::compute(area, CellShape::Round, 0);
        assert_eq!(layout.background, Rect::new(1, 4, 4, 4));
        assert_eq!(layout.corner_radius, 2);
    }

    #[test]
    fn test_bevel_keeps_inset_region() {
        let layout = CellLayout::compute(Rect::new(0, 0, 9, 5), CellShape::Bevel(2), 0);
        assert_eq!(layout.background, Rect::new(1, 0, 7, 5));
        assert_eq!(layout.corner_radius, 2);
    }

    #[test]
    fn test_border_shrinks_text() {
        let layout = CellLayout::compute(Rect::new(0, 0, 9, 5), CellShape::Square, 1);
        assert_eq!(layout.background, Rect::new(1, 0, 7, 5));
        assert_eq!(layout.text, Rect::new(2, 1, 5, 2));
    }

    #[test]
    fn test_indicator_geometry() {
        let layout = CellLayout::compute(Rect::new(0, 0, 20, 10), CellShape::Round, 0);
        assert_eq!(layout.indicator, Rect::new(8, 5, 4, 4));
        assert_eq!(layout.indicator_radius, INDICATOR_RADIUS);
    }

    #[test]
    fn test_text_line_is_centered() {
        let layout = CellLayout::compute(Rect::new(0, 0, 7, 3), CellShape::Square, 0);
        assert_eq!(layout.text_line(1), Rect::new(3, 0, 1, 1));
        assert_eq!(layout.text_line(2), Rect::new(2, 0, 2, 1));
        assert_eq!(layout.text_line(9), Rect::new(1, 0, 5, 1));
    }

    #[test]
    fn test_indicator_kept_below_text() {
        let layout = CellLayout::compute(Rect::new(0, 0, 7, 3), CellShape::Square, 0);
        let line = layout.text_line(2);
        assert_eq!(layout.indicator_beside(line), layout.indicator);
        assert_eq!(layout.indicator_beside(Rect::default()), layout.indicator);
    }

    #[test]
    fn test_indicator_moves_beside_text_in_bordered_cell() {
        let layout = CellLayout::compute(Rect::new(0, 0, 7, 3), CellShape::Square, 1);
        assert_eq!(layout.text, Rect::new(2, 1, 3, 1));
        assert_eq!(layout.indicator, Rect::new(3, 1, 1, 1));
        assert_eq!(layout.indicator_beside(layout.text_line(1)), Rect::new(4, 1, 1, 1));
        assert_eq!(layout.indicator_beside(layout.text_line(2)), Rect::new(4, 1, 1, 1));
        // No room on either side
        assert_eq!(layout.indicator_beside(layout.text_line(3)), layout.indicator);
    }

    #[test]
    fn test_empty_cell() {
        let layout = CellLayout::compute(Rect::new(3, 3, 0, 0), CellShape::Round, 1);
        assert!(layout.background.is_empty());
        assert!(layout.text.is_empty());
        assert!(layout.indicator.is_empty());
    }
}
