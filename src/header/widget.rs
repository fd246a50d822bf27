use super::{HeaderControl, HeaderView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

impl Widget for &HeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let layout = self.layout(area);
        buf.set_style(
            area.intersection(buf.area),
            Style::new().bg(style.weekdays_background),
        );
        if let Some(title) = self.title() {
            let title_style = Style::new()
                .fg(style.header_text_color)
                .add_modifier(style.header_font);
            draw_line(Line::from(Span::styled(title, title_style)), layout.month_label, buf);
        }
        let control_style = Style::new()
            .fg(style.header_text_color)
            .add_modifier(style.weekdays_font);
        for (control, rect) in [
            (HeaderControl::Today, layout.today),
            (HeaderControl::Previous, layout.previous),
            (HeaderControl::Next, layout.next),
        ] {
            draw_line(
                Line::from(Span::styled(control.label(), control_style)),
                rect,
                buf,
            );
        }
        let label_style = Style::new()
            .fg(style.weekdays_text_color)
            .add_modifier(style.weekdays_font);
        for (label, rect) in std::iter::zip(self.weekday_labels(), layout.weekdays) {
            draw_line(
                Line::from(Span::styled(label.as_str(), label_style)).centered(),
                rect,
                buf,
            );
        }
    }
}

// Only the first row of `rect` is drawn on, and nothing is drawn outside the
// buffer.
fn draw_line(line: Line<'_>, rect: Rect, buf: &mut Buffer) {
    let rect = rect.intersection(buf.area);
    if !rect.is_empty() {
        line.render(Rect { height: 1, ..rect }, buf);
    }
}
