//! TUI rendering with ratatui
//!
//! Layout for the anagram solver interface.

use super::app::{App, MessageStyle, QueryMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Results
            Constraint::Percentage(40), // History and messages
        ])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 ANAGRAM SOLVER - Interactive Mode")
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

fn render_results(f: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" {} results: {} ", app.mode.label(), app.results.len());

    let content: Vec<Line> = if app.input_buffer.trim().is_empty() {
        vec![Line::from(Span::styled(
            "Start typing...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if app.results.is_empty() {
        vec![Line::from(Span::styled(
            "No words found",
            Style::default().fg(Color::Red),
        ))]
    } else {
        // Two columns of padding inside the border
        let inner_width = usize::from(area.width.saturating_sub(4));
        let column_width = app.results.iter().map(String::len).max().unwrap_or(0) + 2;
        app.set_result_columns(inner_width / column_width.max(1));

        app.results
            .chunks(app.result_columns)
            .skip(app.scroll)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|word| {
                            Span::styled(
                                format!("{word:<column_width$}"),
                                Style::default().fg(Color::Yellow),
                            )
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // History
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let marker = match entry.mode {
                QueryMode::Anagram => "A",
                QueryMode::Pattern => "P",
            };
            ListItem::new(format!(
                "[{marker}] {} → {}",
                entry.query.to_uppercase(),
                entry.count
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.mode {
        QueryMode::Anagram => (" Letters to rearrange | TAB for pattern mode ", Color::Yellow),
        QueryMode::Pattern => (
            " Pattern (? = any one letter) | TAB for anagram mode ",
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let words = Paragraph::new(format!("Words: {}", app.engine.index().len()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Enter: Save | ↑↓: Scroll | Ctrl-U: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
