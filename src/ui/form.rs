// Add-FAQ form rendering.
// Draws the question and answer inputs and the submit button.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Draw the "Add New FAQ" form.
pub fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Add New FAQ ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Length(5), // Answer
            Constraint::Length(1), // Button
        ])
        .split(inner);

    let form = &app.view.form;

    draw_input(
        frame,
        " Question ",
        &form.question,
        "Enter the question",
        app.focus == Focus::Question,
        chunks[0],
    );
    draw_input(
        frame,
        " Answer ",
        &form.answer,
        "Enter the answer",
        app.focus == Focus::Answer,
        chunks[1],
    );

    let button = if app.view.submitting {
        Span::styled(" ⏳ Adding... ", Style::default().fg(Color::Gray).bg(Color::DarkGray))
    } else {
        Span::styled(
            " + Add FAQ ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(62))
                .add_modifier(Modifier::BOLD),
        )
    };
    let button_line = Line::from(vec![
        button,
        Span::styled("  Ctrl-S", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(button_line), chunks[2]);
}

/// Draw one bordered text input, with a cursor at the end when focused.
fn draw_input(
    frame: &mut Frame,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    area: Rect,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let mut lines: Vec<Line> = if value.is_empty() && !focused {
        vec![Line::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        value.split('\n').map(Line::raw).collect()
    };

    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    // Keep the cursor line visible once the text outgrows the box.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
