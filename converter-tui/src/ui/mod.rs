//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects and no internal state: the view is
//! a function of `AppState` alone.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{AppState, Field};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Form
            Constraint::Length(3), // Result / error
            Constraint::Min(3),    // History
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_form(frame, chunks[1], state);
    render_outcome(frame, chunks[2], state);
    render_history(frame, chunks[3], state);
    render_hints(frame, chunks[4], state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Currency Converter")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Render the form: amount input, the two selectors, and the trigger.
fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let blurred = Style::default();
    let style_for = |field: Field| {
        if state.form.focus == field {
            focused
        } else {
            blurred
        }
    };

    // Trigger control: disabled (dimmed) while a conversion is in flight.
    let button_style = if state.converting {
        Style::default().fg(Color::DarkGray)
    } else if state.can_convert() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::raw("Amount: "),
        Span::styled(format!("[{:>8}]", state.form.amount_input), style_for(Field::Amount)),
        Span::raw("  "),
        Span::styled(format!("[{}]", state.form.from), style_for(Field::From)),
        Span::raw(" to "),
        Span::styled(format!("[{}]", state.form.to), style_for(Field::To)),
        Span::raw("  "),
        Span::styled(format!("< {} >", state.convert_label()), button_style),
    ]);

    let form = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(form, area);
}

/// Render the latest outcome: the error message if present, else the result
/// line if present, else nothing.
fn render_outcome(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(error) = &state.error {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(result) = &state.result {
        Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };

    let outcome = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(outcome, area);
}

/// Render the history list whenever non-empty, most recent first.
fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Conversion History ")
        .borders(Borders::ALL);

    if state.history.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = state
        .history
        .iter()
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.converting {
        "Converting... | Esc: Quit"
    } else {
        "Tab: Focus | \u{2190}/\u{2192}: Currency | Enter: Convert | Esc: Quit"
    };
    let hints = Paragraph::new(hints).style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, area);
}
