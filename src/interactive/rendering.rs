//! TUI rendering with ratatui
//!
//! Ladder board, hearts, timer and message panels.

use super::app::{App, MessageStyle};
use crate::game::{LadderSession, Rarity, Status};
use crate::output::formatters::{format_duration, hearts};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Toast
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, &app.session, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_toast(f, &app.session, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER")
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

fn tile(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
    Span::styled(text, style)
}

fn word_line(text: &str, width: usize, style: impl Fn(usize) -> Style) -> Line<'static> {
    let mut letters = text.chars();
    let spans: Vec<Span> = (0..width)
        .flat_map(|i| [tile(letters.next(), style(i)), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, session: &LadderSession<'_>, area: Rect) {
    let width = session.dictionary().word_length();
    let puzzle = session.puzzle();

    let fixed = Style::default().fg(Color::White).bg(Color::DarkGray);
    let matched = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let editing = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let blank = Style::default().fg(Color::DarkGray);
    let endpoint = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![word_line(puzzle.start.text(), width, |_| endpoint), Line::from("")];

    for (row, text) in session.rows().iter().enumerate() {
        let line = if session.is_fixed(row) {
            word_line(text, width, |i| {
                if session.matches_target(row, i) { matched } else { fixed }
            })
        } else if row == session.current_row() && session.status() == Status::Playing {
            word_line(text, width, |_| editing)
        } else {
            word_line("", width, |_| blank)
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(word_line(puzzle.target.text(), width, |_| endpoint));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Ladder ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Progress
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_progress(f, &app.session, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, session: &LadderSession<'_>, area: Rect) {
    let elapsed = if session.status() == Status::Playing {
        session.started_at().elapsed()
    } else {
        session.elapsed()
    };

    let mut content = vec![
        Line::from(vec![
            Span::raw("Hearts:  "),
            Span::styled(hearts(session.hearts()), Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Moves:   {}", session.moves())),
        Line::from(format!("Time:    {}", format_duration(elapsed))),
    ];

    match session.status() {
        Status::Won => content.push(Line::from(format!(
            "Optimal: {} steps",
            session.optimal_steps()
        ))),
        Status::Lost => {
            let target = &session.puzzle().target;
            let rarity = Rarity::of(target);
            content.push(Line::from(format!(
                "Answer:  {} {} {rarity}",
                target.text().to_uppercase(),
                rarity.emoji()
            )));
        }
        Status::Playing => {}
    }

    let progress = Paragraph::new(content).block(
        Block::default()
            .title(" Progress ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(progress, area);
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

fn render_toast(f: &mut Frame, session: &LadderSession<'_>, area: Rect) {
    let (text, color) = match (session.error(), session.status()) {
        (Some(error), _) => (format!("❌ {error}"), Color::Red),
        (None, Status::Won) => ("🎉 Solved! Enter for next puzzle".to_string(), Color::Green),
        (None, Status::Lost) => ("😔 Game over. Enter for next puzzle".to_string(), Color::Red),
        (None, Status::Playing) => (String::new(), Color::Yellow),
    };

    let toast = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(toast, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.status() == Status::Playing {
        "Enter: Submit | Tab: Hint | Esc: Clear | ^N: New | ^C: Quit"
    } else {
        "Enter: Next Puzzle | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::ladder::GeneratorConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_board_and_help() {
        let dictionary =
            Dictionary::from_slices(&["cold", "cord", "card", "ward", "warm"], &["cold", "warm"])
                .unwrap();
        let app = App::new(&dictionary, GeneratorConfig::default(), StdRng::seed_from_u64(0));

        let text = screen(&app);

        assert!(text.contains("Ladder"));
        assert!(text.contains("Tab: Hint"));
        assert!(text.contains("Games: 0"));
    }

    #[test]
    fn word_line_pads_blank_tiles() {
        let line = word_line("ab", 4, |_| Style::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, " A   B   ·   ·  ");
    }
}
