use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::FieldKind,
    form::{Control, FieldIssue},
};

pub(super) fn build_field_lines(
    control: &Control,
    is_selected: bool,
    issue: Option<&FieldIssue>,
    max_width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(control.display_label(), label_style)));

    if let Some(options) = option_strip(control) {
        lines.push(options);
    }
    lines.extend(value_panel_lines(control, is_selected, max_width));
    lines.push(meta_line(control, issue.is_some()));

    if let Some(issue) = issue {
        lines.extend(issue_lines(issue, max_width));
    }
    lines
}

fn value_panel_lines(control: &Control, is_selected: bool, max_width: u16) -> Vec<Line<'static>> {
    let clamp_width = max_width.max(4) as usize;
    let value_text = control.component().display_value(control);
    let mut wrapped: Vec<String> = wrap(&value_text, clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    // Textareas keep a few rows even when short.
    if control.kind.is_multiline() {
        while wrapped.len() < 3 {
            wrapped.push(String::new());
        }
    }

    if !is_selected {
        return wrapped
            .into_iter()
            .map(|segment| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(segment, Style::default().fg(Color::White)),
                ])
            })
            .collect();
    }

    let inner_width = wrapped
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
        .max(8);
    let border_line = "─".repeat(inner_width.saturating_add(2));
    let border_style = Style::default().fg(Color::Yellow);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(Line::from(Span::styled(
        format!("┌{border_line}┐"),
        border_style,
    )));
    for segment in wrapped {
        let pad = inner_width.saturating_sub(UnicodeWidthStr::width(segment.as_str()));
        let content = format!("{segment}{}", " ".repeat(pad));
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(content, value_style),
            Span::styled(" │", border_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("└{border_line}┘"),
        border_style,
    )));
    lines
}

fn option_strip(control: &Control) -> Option<Line<'static>> {
    let FieldKind::Select { options } = &control.kind else {
        return None;
    };
    if options.is_empty() {
        return Some(Line::from(Span::styled(
            "  No options configured.",
            Style::default().fg(Color::Gray),
        )));
    }
    let selected = control.selected_option();
    let mut spans = vec![Span::raw("  ")];
    for (idx, option) in options.iter().enumerate() {
        let style = if selected == Some(idx) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(option.clone(), style));
        if idx + 1 != options.len() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
    }
    Some(Line::from(spans))
}

fn meta_line(control: &Control, invalid: bool) -> Line<'static> {
    let mut meta = vec![Span::styled(
        format!("  type: {}", control.kind.input_type()),
        Style::default().fg(Color::DarkGray),
    )];
    if !control.is_recognized() {
        meta.push(Span::styled(
            "  • unrecognized type",
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(pattern) = &control.pattern {
        meta.push(Span::styled(
            format!("  • pattern: {pattern}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if invalid {
        meta.push(Span::styled(
            "  • invalid",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(meta)
}

fn issue_lines(issue: &FieldIssue, max_width: u16) -> Vec<Line<'static>> {
    wrap(&issue.message, max_width.max(4) as usize)
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                format!("    {}", line.into_owned()),
                Style::default().fg(Color::Red),
            ))
        })
        .collect()
}
