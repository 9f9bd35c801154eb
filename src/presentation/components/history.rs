use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::SubmissionHistory;

/// Every submitted record, oldest first, as indented JSON blocks.
///
/// Once the blocks outgrow the panel the view is pinned to the bottom so the
/// latest submission stays on screen.
pub fn render_history(frame: &mut Frame<'_>, area: Rect, history: &SubmissionHistory) {
    let lines = history_lines(history);
    let offset = bottom_offset(lines.len(), area.height.saturating_sub(2));
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("Submitted data ({})", history.len()))
                .borders(Borders::ALL),
        )
        .scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn bottom_offset(total: usize, visible: u16) -> u16 {
    let hidden = total.saturating_sub(visible as usize);
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn history_lines(history: &SubmissionHistory) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, record) in history.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(" "));
        }
        lines.push(Line::from(Span::styled(
            format!("#{}", idx + 1),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        for line in record.to_pretty_string().lines() {
            lines.push(Line::from(line.to_string()));
        }
    }
    lines
}
