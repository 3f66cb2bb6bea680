use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Bordered overlay rendered on top of the main layout.
#[derive(Debug, Default)]
pub struct Popup<'a> {
    title: Line<'a>,
    body: Text<'a>,
}

impl<'a> Popup<'a> {
    pub fn new(title: impl Into<Line<'a>>, body: impl Into<Text<'a>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // ensure that all cells under the popup are cleared to avoid leaking content
        Clear.render(area, buf);
        let block = Block::new().borders(Borders::ALL).title(self.title);
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .left_aligned()
            .block(block)
            .render(area, buf);
    }
}
