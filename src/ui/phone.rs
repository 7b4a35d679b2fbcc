//! The handset display: title, numbered options, input line and breadcrumb.

use crate::config::DisplayConfig;
use crate::ui::notice::NoticeState;
use crate::ui::theme::{
    ACCENT_CYAN, BRAND_PURPLE, HEADER_TEXT, MUTED_TEXT, PHONE_BORDER, STATUS_ERROR,
};
use crate::ussd::UssdEngine;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub const PHONE_WIDTH: u16 = 46;

const BREADCRUMB_HOME: &str = "⌂";
const BREADCRUMB_SEPARATOR: &str = " > ";

pub struct PhoneScreen<'a> {
    engine: &'a UssdEngine,
    display: &'a DisplayConfig,
    notice: &'a NoticeState,
}

impl<'a> PhoneScreen<'a> {
    pub fn new(engine: &'a UssdEngine, display: &'a DisplayConfig, notice: &'a NoticeState) -> Self {
        Self {
            engine,
            display,
            notice,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let screen = self.engine.current_screen();
        let key_style = Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(HEADER_TEXT);

        let mut lines: Vec<Line<'static>> = screen
            .options
            .iter()
            .map(|option| {
                let mut spans = vec![Span::styled(format!("{}. ", option.key), key_style)];
                if self.display.show_icons {
                    if let Some(icon) = option.icon {
                        spans.push(Span::raw(format!("{icon} ")));
                    }
                }
                spans.push(Span::styled(option.label, label_style));
                Line::from(spans)
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                self.engine.session().pending_input().to_string(),
                label_style,
            ),
            Span::styled("_", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::SLOW_BLINK)),
        ]));

        if let NoticeState::InvalidSelection { key, .. } = self.notice {
            let text = if key.is_empty() {
                "Enter an option number".to_string()
            } else {
                format!("Invalid option: {key}")
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(STATUS_ERROR))));
        }

        if self.display.show_breadcrumb {
            if let Some(trail) = breadcrumb_line(self.engine) {
                lines.push(Line::from(""));
                lines.push(trail);
            }
        }

        lines
    }

    pub fn widget(&self, lines: Vec<Line<'static>>) -> Paragraph<'static> {
        let title = self.engine.current_screen().title;
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(BRAND_PURPLE).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(PHONE_BORDER)),
        )
    }
}

/// Short titles from welcome to the current screen, or `None` at the root.
pub fn breadcrumb_segments(engine: &UssdEngine) -> Option<Vec<&'static str>> {
    if engine.session().history().is_empty() {
        return None;
    }
    let registry = engine.registry();
    Some(
        engine
            .breadcrumb_screens()
            .map(|id| registry.screen(id).short_title())
            .collect(),
    )
}

fn breadcrumb_line(engine: &UssdEngine) -> Option<Line<'static>> {
    let segments = breadcrumb_segments(engine)?;
    let muted = Style::default().fg(MUTED_TEXT);
    let last = segments.len().saturating_sub(1);

    let mut spans = vec![Span::styled(BREADCRUMB_HOME, muted)];
    for (idx, segment) in segments.into_iter().enumerate() {
        spans.push(Span::styled(BREADCRUMB_SEPARATOR, muted));
        let style = if idx == last {
            Style::default().fg(ACCENT_CYAN)
        } else {
            muted
        };
        spans.push(Span::styled(segment, style));
    }
    Some(Line::from(spans))
}
