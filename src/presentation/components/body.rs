use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::focus::FocusTarget;

use super::{super::view::UiContext, fields::build_field_lines};

/// Active controls followed by the submit action, or a placeholder while no
/// company is selected.
pub fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let Some(company) = ctx.selected_company else {
        let message = if !ctx.config_loaded {
            "Configuration not loaded yet"
        } else if ctx.company_count == 0 {
            "No companies configured"
        } else {
            "Pick a company above to show its form"
        };
        let placeholder = Paragraph::new(message)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let content_width = area.width.saturating_sub(6);
    let mut items = Vec::with_capacity(ctx.controls.len() + 1);
    for (idx, control) in ctx.controls.iter().enumerate() {
        let selected = ctx.focus == FocusTarget::Field(idx);
        let issue = ctx
            .issues
            .iter()
            .find(|issue| issue.label == control.label);
        items.push(ListItem::new(build_field_lines(
            control,
            selected,
            issue,
            content_width,
        )));
    }
    items.push(ListItem::new(submit_lines(ctx.focus == FocusTarget::Submit)));

    let selected_row = match ctx.focus {
        FocusTarget::CompanySelector => None,
        FocusTarget::Field(idx) => Some(idx),
        FocusTarget::Submit => Some(ctx.controls.len()),
    };
    let mut list_state = ListState::default();
    list_state.select(selected_row);

    let title = if ctx.controls.is_empty() {
        format!("{company} (no fields)")
    } else {
        company.to_string()
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn submit_lines(focused: bool) -> Vec<Line<'static>> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    vec![
        Line::from(" "),
        Line::from(Span::styled("[ Submit ]", style)),
    ]
}
