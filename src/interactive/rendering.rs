//! TUI rendering with ratatui
//!
//! Draws the tower, the score so far and the message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::added_letter;
use crate::game::GameSummary;
use crate::output::formatters::{mark_added_letter, tower_art};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Height at which the progress gauge is full
const GAUGE_TOP: usize = 10;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_tower_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏗  WORD TOWER")
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

fn render_tower_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_tower(f, app, chunks[0]);
    render_levels(f, app, chunks[1]);
}

fn render_tower(f: &mut Frame, app: &App, area: Rect) {
    let tower = &app.state.tower;
    let mut lines: Vec<Line> = tower_art(tower)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(row, style))
        })
        .collect();
    lines.push(Line::from("─".repeat(tower.iter().map(|w| w.len() * 2 + 3).max().unwrap_or(0))));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Tower (height {}) ", app.state.height))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_levels(f: &mut Frame, app: &App, area: Rect) {
    let tower = &app.state.tower;
    let items: Vec<ListItem> = tower
        .windows(2)
        .enumerate()
        .rev()
        .map(|(i, pair)| {
            let text = added_letter(pair[0].text(), pair[1].text()).map_or_else(
                || pair[1].text().to_uppercase(),
                |letter| mark_added_letter(&pair[1], letter),
            );
            ListItem::new(format!("{}: {text}", i + 2))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Added Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Height gauge
            Constraint::Percentage(40), // Hint / summary
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_height_gauge(f, app, chunks[0]);
    if let Some(summary) = &app.summary {
        render_summary(f, summary, chunks[1]);
    } else {
        render_hint(f, app, chunks[1]);
    }
    render_messages(f, app, chunks[2]);
}

fn render_height_gauge(f: &mut Frame, app: &App, area: Rect) {
    let height = app.state.height;
    // Cast is safe: clamped to 100
    let percent = (height * 100 / GAUGE_TOP).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Height ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{height} levels | {} next words", app.next_count));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![Line::from(vec![
        Span::raw("Style: "),
        Span::styled(
            app.hint_style.name(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ])];
    match &app.last_hint {
        Some(text) => content.push(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Yellow),
        ))),
        None => content.push(Line::from(Span::styled(
            "TAB for a hint, Shift-TAB to change style",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    content.push(Line::from(format!("Hints used: {}", app.state.hints_used)));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_summary(f: &mut Frame, summary: &GameSummary, area: Rect) {
    let score = &summary.score;
    let mut content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                score.total_score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Base {} | Letters {} | Speed {}",
            score.base_score, score.letter_bonus, score.speed_bonus
        )),
    ];
    content.extend(score.breakdown.iter().map(|level| {
        Line::from(format!(
            "{:2}. {} {}×{} = {}",
            level.level,
            level.word.to_uppercase(),
            level.length,
            level.multiplier,
            level.base_points + level.letter_bonus
        ))
    }));
    content.push(Line::from(format!(
        "{}s, {} hints",
        summary.elapsed_seconds, summary.hints_used
    )));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Final Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Tower complete | 'n' new game, 'r' replay, 'q' quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Building => (
            format!(
                " Next word ({} letters) | Enter to stack ",
                app.state.current_word.len() + 1
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let start = Paragraph::new(format!(
        "Start: {}",
        app.state.starting_word.text().to_uppercase()
    ))
    .alignment(Alignment::Center);
    f.render_widget(start, chunks[0]);

    let stats = Paragraph::new(format!(
        "Towers: {} | Best: {} ({} high)",
        app.stats.towers_finished, app.stats.best_score, app.stats.best_height
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game | r: Replay",
        InputMode::Building => "Esc: Quit | ^Z: Undo | ^R: Reset | ^N: New | ^E: End",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
