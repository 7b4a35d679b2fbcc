use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Status bar: carrier, short code and the screen currently shown.
pub struct Header<'a> {
    operator: &'a str,
    service_code: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(operator: &'a str, service_code: &'a str) -> Self {
        Self {
            operator,
            service_code,
        }
    }

    pub fn widget(&self, screen: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(STATUS_OK);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled(self.operator.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.service_code.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(screen.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
