use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::focus::FocusTarget,
    form::{Control, FieldIssue, SubmissionHistory},
};

use super::components::{render_body, render_footer, render_header, render_history, render_popup};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub selected_company: Option<&'a str>,
    pub company_count: usize,
    pub config_loaded: bool,
    pub controls: &'a [Control],
    pub(crate) focus: FocusTarget,
    pub issues: &'a [FieldIssue],
    /// `None` when the history panel is disabled.
    pub history: Option<&'a SubmissionHistory>,
    pub status_message: &'a str,
    pub unsubmitted: bool,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &ctx);

    let history = ctx.history.filter(|history| !history.is_empty());
    if let Some(history) = history {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_body(frame, columns[0], &ctx);
        render_history(frame, columns[1], history);
    } else {
        render_body(frame, chunks[1], &ctx);
    }

    render_footer(frame, chunks[2], &ctx);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}
