use chronozen_core::GoalDto;
use tabled::{Table, Tabled};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

/// Fixed-width bar for a percentage. Render-clamped to full so figures
/// above 100 still fit.
pub fn render_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn show_goals(goals: &[GoalDto]) {
    if goals.is_empty() {
        println!("No goals yet. Add one with: chronozen goal add <title> start:YYYY-MM-DD end:YYYY-MM-DD");
        return;
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            id: g.id.to_string()[..8].to_string(),
            title: g.title.clone(),
            start: g.start.format("%Y-%m-%d").to_string(),
            end: g.end.format("%Y-%m-%d").to_string(),
            days: format!("{}/{}", g.elapsed_days, g.total_days),
            progress: format!("{} {:>5.1}%", render_bar(g.percent, BAR_WIDTH), g.percent),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
