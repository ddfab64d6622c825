// UI module for rendering the TUI.
// Contains the header, add form, FAQ table, status bar, and help overlay.

mod form;
mod table;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(11), // Add form
            Constraint::Min(5),     // FAQ list
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    form::draw_form(frame, app, chunks[1]);

    let focused = app.focus == Focus::List;
    table::render_faq_list(frame, &mut app.view, focused, chunks[2]);

    draw_status_bar(frame, app, chunks[3]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the title, subtitle, and server address.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "FAQ Management",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", app.api_url), Style::default().fg(Color::DarkGray)),
        ]),
        Line::styled(
            "Add and manage frequently asked questions",
            Style::default().fg(Color::Gray),
        ),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw key hints for the focused area.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Question => vec![
            Span::raw(" ↵ "),
            Span::styled("Submit", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Next field", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("List", Style::default().fg(Color::DarkGray)),
            Span::raw("  F5 "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^C "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Focus::Answer => vec![
            Span::raw(" ↵ "),
            Span::styled("New line", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^S "),
            Span::styled("Submit", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Next field", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("List", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^C "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Focus::List => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Form", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
    };

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 50;
    let popup_height = 17;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let shortcut = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        shortcut("  Tab/S-Tab     ", "Cycle question / answer / list"),
        shortcut("  Enter         ", "Submit (question) / new line"),
        shortcut("  Ctrl-S        ", "Submit the form"),
        shortcut("  r, F5, Ctrl-R ", "Refresh the list"),
        shortcut("  ↑/↓ or k/j    ", "Move table selection"),
        shortcut("  Esc           ", "Focus list / close help"),
        shortcut("  ?             ", "Show/hide this help"),
        shortcut("  q, Ctrl-C     ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
