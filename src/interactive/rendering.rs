//! TUI rendering with ratatui
//!
//! Gallows, word and history panels for the Hangman interface.

use super::app::{App, MessageStyle};
use crate::core::{MAX_INCORRECT, Outcome};
use crate::history::GameResult;
use crate::output::formatters::{gallows, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(8),  // History
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_history(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let misses = app.view.incorrect_count();
    let color = if app.view.outcome == Outcome::Lost {
        Color::Red
    } else {
        Color::White
    };

    let lines: Vec<Line> = std::iter::once(Line::from(""))
        .chain(gallows(misses).into_iter().map(Line::from))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_word_panel<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Incorrect letters
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_incorrect(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let style = match app.view.outcome {
        Outcome::Won => Style::default().fg(Color::Green),
        Outcome::Lost => Style::default().fg(Color::Red),
        Outcome::InProgress => Style::default().fg(Color::Yellow),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.view.masked_text(),
            style.add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_attempts<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let misses = app.view.incorrect_count().min(MAX_INCORRECT);
    let percent = (misses * 100 / MAX_INCORRECT) as u16;
    let color = match app.view.remaining_attempts {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Misses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{misses}/{MAX_INCORRECT} | {} attempts left",
            app.view.remaining_attempts
        ));

    f.render_widget(gauge, area);
}

fn render_incorrect<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let paragraph = Paragraph::new(letter_list(&app.view.incorrect))
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Incorrect letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_history<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));
    let history = &app.view.history;

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No games played yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .iter()
            .rev()
            .take(visible)
            .map(|entry| {
                let result_style = match entry.result {
                    GameResult::Won => Style::default().fg(Color::Green),
                    GameResult::Lost => Style::default().fg(Color::Red),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(entry.date.clone(), Style::default().fg(Color::DarkGray)),
                    Span::raw(" - "),
                    Span::styled(
                        entry.word.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::styled(entry.result.to_string(), result_style),
                ]))
            })
            .collect()
    };

    let title = format!(" History ({}) ", history.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = if app.view.is_over() {
        "Enter/F2: New Round | F5: Clear History | F10/Ctrl+C: Quit"
    } else {
        "A-Z: Guess | Esc: Give Up | F2: New Round | F5: Clear History | F10/Ctrl+C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
