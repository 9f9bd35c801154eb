use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::focus::FocusTarget;

use super::super::view::UiContext;

/// Title bar holding the company selector.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let focused = ctx.focus == FocusTarget::CompanySelector;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let selection = match ctx.selected_company {
        Some(name) => Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("<Choose a company>", Style::default().fg(Color::DarkGray)),
    };
    let mut spans = vec![Span::raw("Company: "), selection];
    if focused {
        spans.push(Span::styled(
            "  (Enter to choose)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("  [{} available]", ctx.company_count),
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(ctx.title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}
