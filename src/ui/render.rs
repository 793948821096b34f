use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::viewer::Notice;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);
    let theme = app.theme();

    let page = app.page();
    let start = usize::from(app.viewer().scroll).min(page.lines.len());
    let end = (start + usize::from(body.height)).min(page.lines.len());
    let visible = page.lines[start..end].to_vec();

    let page_style = Style::default()
        .bg(theme.palette.background)
        .fg(theme.palette.text);
    frame.render_widget(Clear, body);
    frame.render_widget(Paragraph::new(visible).style(page_style), body);

    frame.render_widget(Footer::new().widget(theme, footer), footer);

    if let Some(notice) = &app.viewer().notice {
        draw_notice(frame, app, notice, body);
    }
}

fn draw_notice(frame: &mut Frame<'_>, app: &App, notice: &Notice, body: Rect) {
    let theme = app.theme();
    let popup = centered_rect(70, 40, body);
    let border = Style::default().fg(theme.palette.primary);
    let text = Style::default().fg(theme.palette.text);
    let hint = Style::default()
        .fg(theme.palette.detail)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from(Span::styled(notice.message.clone(), text))];
    lines.push(Line::from(""));
    let hints = if notice.url.is_some() {
        "Esc: Dismiss │ y: Copy link"
    } else {
        "Esc: Dismiss"
    };
    lines.push(Line::from(Span::styled(hints, hint)));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.palette.background))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Notice ")
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
        popup,
    );
}
