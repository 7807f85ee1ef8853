use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Attendance gauge
            Constraint::Min(6),    // Goals | Habits
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("CHRONOZEN")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_attendance(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[2]);

    draw_goals(f, app, content_chunks[0]);
    draw_habits(f, app, content_chunks[1]);

    let footer = Paragraph::new("j/k: Navigate | Space: Toggle habit | r: Reload | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_attendance(f: &mut Frame, app: &App, area: Rect) {
    let summary = &app.view.attendance;

    let counts_line = summary
        .counts
        .iter()
        .map(|c| format!("{}: {}", c.status.label(), c.days))
        .collect::<Vec<_>>()
        .join("  |  ");

    // The figure itself is uncapped; only the bar is clamped to full.
    let ratio = (summary.percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("Attendance ({})", counts_line)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!(
            "{} / {} days ({:.1}%)",
            summary.countable_days, summary.goal_days, summary.percent
        ));
    f.render_widget(gauge, area);
}

fn draw_goals(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Goals");

    if app.view.goals.is_empty() {
        let empty = Paragraph::new("No goals yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints: Vec<Constraint> = app
        .view
        .goals
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (goal, row) in app.view.goals.iter().zip(rows.iter()) {
        let ratio = (goal.percent / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(truncate(
                &goal.title,
                row.width.saturating_sub(2) as usize,
            )))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!(
                "{}/{} days ({:.0}%)",
                goal.elapsed_days, goal.total_days, goal.percent
            ));
        f.render_widget(gauge, *row);
    }
}

fn draw_habits(f: &mut Frame, app: &mut App, area: Rect) {
    let title_width = area.width.saturating_sub(12) as usize;

    let rows: Vec<Row> = app
        .view
        .habits
        .iter()
        .map(|habit| {
            let mark = if habit.completed { "✔" } else { "☐" };
            Row::new(vec![
                Cell::from(mark),
                Cell::from(truncate(&habit.title, title_width)),
                Cell::from(format!("🔥{}", habit.streak)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(6),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Habits"),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(table, area, &mut app.habit_state);
}

fn truncate(s: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            out.push('…');
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}
