use super::{DayCell, Indicator};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::border,
    text::Span,
    widgets::{Block, Widget},
};

const DOT: &str = "•";

impl Widget for &mut DayCell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout_if_needed(area);
        let fill = self.background_color();
        buf.set_style(clip(layout.background, buf), Style::new().bg(fill));
        if self.border_width() > 0 && layout.background.width > 1 && layout.background.height > 1 {
            let set = if layout.corner_radius > 0 {
                border::ROUNDED
            } else {
                border::PLAIN
            };
            Block::bordered()
                .border_set(set)
                .border_style(Style::new().fg(self.border_color()).bg(fill))
                .render(clip(layout.background, buf), buf);
        }
        let text = self.text().map(|text| {
            Span::styled(
                text,
                Style::new()
                    .fg(self.text_color())
                    .add_modifier(self.style().cell_font),
            )
        });
        let line = text.as_ref().map_or(Rect::ZERO, |span| {
            layout.text_line(u16::try_from(span.width()).unwrap_or(u16::MAX))
        });
        let indicator = layout.indicator_beside(line);
        match self.indicator() {
            Some(Indicator::Photo(photo)) => {
                let area = clip(indicator, buf);
                if !area.is_empty() {
                    Span::styled(photo.glyph(), Style::new().fg(self.style().event_color))
                        .render(area, buf);
                }
            }
            Some(Indicator::Dot) => draw_dot(
                indicator,
                layout.indicator_radius,
                self.style().event_color,
                buf,
            ),
            None => (),
        }
        if let Some(span) = text {
            let area = clip(line, buf);
            if !area.is_empty() {
                span.render(area, buf);
            }
        }
    }
}

// The dot is a rounded square: its corners are left out once it's big enough
// for that to still read as a square.
fn draw_dot(rect: Rect, radius: u16, color: Color, buf: &mut Buffer) {
    let rounded = radius > 0 && rect.width > 2 && rect.height > 2;
    for pos in rect.positions() {
        let corner = (pos.x == rect.left() || pos.x + 1 == rect.right())
            && (pos.y == rect.top() || pos.y + 1 == rect.bottom());
        if rounded && corner {
            continue;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_symbol(DOT).set_fg(color);
        }
    }
}

fn clip(rect: Rect, buf: &Buffer) -> Rect {
    rect.intersection(buf.area)
}
