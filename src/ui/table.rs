// FAQ list rendering.
// Provides the table of entries with loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::api::Faq;
use crate::state::FaqViewState;

/// Most lines shown for one cell before it is cut off.
const MAX_ROW_LINES: usize = 3;

const QUESTION_PERCENT: u16 = 35;
const ANSWER_PERCENT: u16 = 50;
const DATE_WIDTH: u16 = 12;
const COLUMN_SPACING: u16 = 2;
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render the inline error banner.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .style(Style::default().fg(Color::Red).bg(Color::Rgb(60, 20, 20)));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the "FAQ List" panel.
pub fn render_faq_list(frame: &mut Frame, view: &mut FaqViewState, focused: bool, area: Rect) {
    let title = match view.cached_at {
        Some(at) => format!(
            " FAQ List (cached {}) ",
            at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
        ),
        None => " FAQ List ".to_string(),
    };

    let refresh_hint = if view.loading {
        Span::styled(" ⟳ Refreshing ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" r Refresh ", Style::default().fg(Color::DarkGray))
    };

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_top(Line::from(refresh_hint).right_aligned());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_area = match view.error {
        Some(error) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);
            render_error(frame, chunks[0], &error.to_string());
            chunks[1]
        }
        None => inner,
    };

    if view.loading && view.cached_at.is_none() {
        render_loading(frame, content_area, "Loading FAQs");
    } else if view.faqs.is_empty() {
        render_empty(frame, content_area, "No FAQs found");
    } else {
        render_table(frame, view, content_area);
    }
}

fn render_table(frame: &mut Frame, view: &mut FaqViewState, area: Rect) {
    let header = Row::new(vec!["Question", "Answer", "Created At"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    // Width left for text once the highlight column and gaps are taken out.
    let text_width = area
        .width
        .saturating_sub(HIGHLIGHT_SYMBOL.len() as u16 + 2 * COLUMN_SPACING) as usize;
    let question_width = (text_width * QUESTION_PERCENT as usize / 100).max(1);
    let answer_width = (text_width * ANSWER_PERCENT as usize / 100).max(1);

    let rows: Vec<Row> = view
        .faqs
        .iter()
        .map(|faq| faq_row(faq, question_width, answer_width))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(QUESTION_PERCENT),
            Constraint::Percentage(ANSWER_PERCENT),
            Constraint::Length(DATE_WIDTH),
        ],
    )
    .header(header)
    .column_spacing(COLUMN_SPACING)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(table, area, &mut view.table_state);
}

fn faq_row(faq: &Faq, question_width: usize, answer_width: usize) -> Row<'static> {
    let question_lines = cell_lines(&faq.question, question_width, Color::White);
    let answer_lines = cell_lines(&faq.answer, answer_width, Color::Gray);
    let height = question_lines.len().max(answer_lines.len()).max(1) as u16;

    Row::new(vec![
        Cell::from(Text::from(question_lines)),
        Cell::from(Text::from(answer_lines)),
        Cell::from(Span::styled(
            faq.created_date(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .height(height)
}

/// Word-wrapped lines of one cell, cut off after `MAX_ROW_LINES`.
fn cell_lines(text: &str, width: usize, color: Color) -> Vec<Line<'static>> {
    text.lines()
        .flat_map(|line| wrap_line(line, width))
        .take(MAX_ROW_LINES)
        .map(|line| Line::styled(line, Style::default().fg(color)))
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                wrapped.push(std::mem::take(&mut current));
                current_len = 0;
            }
            wrapped.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        if current_len > 0 && current_len + 1 + chars.len() > width {
            wrapped.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 || wrapped.is_empty() {
        wrapped.push(current);
    }
    wrapped
}
