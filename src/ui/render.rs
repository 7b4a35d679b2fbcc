use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::notice::NoticeState;
use crate::ui::phone::{PhoneScreen, PHONE_WIDTH};
use crate::ui::theme::{BRAND_PURPLE, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let config = app.config();

    let screen = app.engine().current_screen();
    let header_widget = Header::new(&config.session.operator, &config.session.service_code);
    frame.render_widget(header_widget.widget(screen.id.as_str()), header);

    frame.render_widget(Clear, body);
    let phone = PhoneScreen::new(app.engine(), &config.display, app.notice());
    let lines = phone.lines();
    let phone_height = (lines.len() as u16).saturating_add(2);
    let phone_area = centered_rect_by_size(body, PHONE_WIDTH, phone_height);
    frame.render_widget(phone.widget(lines), phone_area);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);

    if let NoticeState::Terminated { message } = app.notice() {
        draw_exit_notice(frame, body, message);
    }
}

fn draw_exit_notice(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines: Vec<Line> = message
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), text_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: OK",
        text_style.add_modifier(Modifier::DIM),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            " Session ended ",
            Style::default().fg(BRAND_PURPLE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
