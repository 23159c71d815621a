//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::Clock;
use crate::features::flowtime::SessionState;
use crate::tui::app::{App, InputMode};
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let editing = app.mode == InputMode::Editing;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                            // Header
            Constraint::Length(5),                            // Timer
            Constraint::Length(6),                            // Session details
            Constraint::Length(3),                            // Noise
            Constraint::Length(if editing { 3 } else { 0 }), // Task input
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_details(frame, app, chunks[2]);
    render_noise(frame, app, chunks[3]);
    if editing {
        render_input(frame, app, chunks[4]);
    }
    render_status_bar(frame, app, chunks[6]);
}

const fn state_color(state: SessionState) -> Color {
    match state {
        SessionState::Idle => Color::White,
        SessionState::Working => Color::Green,
        SessionState::OnBreak => Color::Yellow,
    }
}

fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let header = Paragraph::new(format!(" {} ", app.display().title))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_timer<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let display = app.display();
    let color = state_color(app.session().state());

    let lines = vec![
        Line::from(Span::styled(
            display.timer.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(display.status.clone(), Style::default().fg(color))),
    ];

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(timer, area);
}

fn render_details<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let display = app.display();
    let label = Style::default().fg(Color::DarkGray);

    let mut break_line = vec![
        Span::styled("Break:           ", label),
        Span::raw(display.break_time.clone()),
    ];
    if let Some(hint) = &display.break_hint {
        break_line.push(Span::styled(
            format!("  b to take it {hint}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("Current session: ", label),
            Span::raw(display.current_session.clone()),
        ]),
        Line::from(vec![
            Span::styled("Task:            ", label),
            Span::raw(app.session().task_label().unwrap_or("-").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Work duration:   ", label),
            Span::raw(display.work_duration.clone()),
        ]),
        Line::from(break_line),
    ];

    let details = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(details, area);
}

fn render_noise<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let (playing, color) = app
        .noise_playing()
        .map_or(("off".to_string(), Color::DarkGray), |kind| {
            (format!("{} noise", kind.display_name()), Color::Magenta)
        });

    let line = Line::from(vec![
        Span::styled(playing, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  volume {:.0}%", app.volume() * 100.0),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let noise = Paragraph::new(line).block(
        Block::default()
            .title(" Noise ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(noise, area);
}

fn render_input<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" What are you working on? ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, area);

    let width = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((x, area.y + 1));
}

fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let text = app.message.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
