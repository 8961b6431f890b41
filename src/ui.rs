use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use sprint::{game::GameState, word::WordEntry};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.game.state() {
            GameState::Playing => render_round(self, area, buf),
            GameState::Results => render_results(self, area, buf),
        }
    }
}

fn render_round(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;
    let round = game.round();

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let score_style = if round.last_judgment_correct() {
        Style::default().patch(bold_style).fg(Color::Green)
    } else {
        Style::default().patch(bold_style).fg(Color::Red)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // clock
            Constraint::Length(2), // score
            Constraint::Length(2), // streak
            Constraint::Min(4),    // word + translation
            Constraint::Length(1), // buttons
            Constraint::Length(1), // note
        ])
        .split(area);

    if let Some(countdown) = game.countdown() {
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(countdown.ratio_remaining().clamp(0.0, 1.0))
            .label(format!("{:.0}", countdown.seconds_remaining().ceil()))
            .render(chunks[0], buf);
    }

    Paragraph::new(Line::from(vec![
        Span::raw("Ваш результат "),
        Span::styled(round.score().to_string(), score_style),
        Span::raw(" баллов"),
    ]))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let mut streak_spans: Vec<Span> = (1..=3u8)
        .map(|slot| {
            if round.streak() >= slot {
                Span::styled("✔ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("✔ ", dim_style)
            }
        })
        .collect();
    if let Some(message) = game.strike_message() {
        streak_spans.push(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ));
    }
    Paragraph::new(Line::from(streak_spans))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

    let word = round.current_word().map(|w| w.word.as_str()).unwrap_or("");
    let translation = round.displayed_translation().unwrap_or("");
    Paragraph::new(vec![
        Line::from(Span::styled(word.to_string(), bold_style)),
        Line::from(""),
        Line::from(Span::styled(
            translation.to_string(),
            Style::default().fg(Color::Magenta),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(format!(
        "{} / {}",
        (round.position() + 1).min(round.len()),
        round.len()
    )))
    .render(chunks[3], buf);

    Paragraph::new(Line::from(vec![
        Span::styled("← верно", Style::default().fg(Color::Green)),
        Span::raw("      "),
        Span::styled("неверно →", Style::default().fg(Color::Red)),
    ]))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);

    Paragraph::new(Span::styled(
        "*можно использовать стрелки (y / x), (esc) выход",
        dim_style.add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[5], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;
    let session = game.session();
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2), // summary
            Constraint::Min(3),    // word lists
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(
        format!(
            "{} баллов   {}% верно   лучшая серия {}   раундов {}   рекорд {}",
            game.last_round_score(),
            session.accuracy(),
            session.best_streak(),
            session.rounds_played(),
            game.best_round_score()
        ),
        bold_style,
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(chunks[0], buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    word_list("Знаю", session.correct_words(), Color::Green).render(columns[0], buf);
    word_list("Ошибки", session.incorrect_words(), Color::Red).render(columns[1], buf);

    Paragraph::new(Span::styled(
        "(n)ext round / (s)ession reset / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);
}

fn word_list(title: &str, words: &[WordEntry], color: Color) -> Paragraph<'static> {
    let column = words.iter().map(|w| w.word.width()).max().unwrap_or(0);

    let lines: Vec<Line> = words
        .iter()
        .map(|w| {
            let pad = " ".repeat(column - w.word.width());
            Line::from(vec![
                Span::styled(w.word.clone(), Style::default().fg(color)),
                Span::raw(format!("{pad}  {}", w.translation)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{title} ({})", words.len())),
        )
}
