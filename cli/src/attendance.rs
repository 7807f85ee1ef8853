use chronozen_core::AttendanceSummary;
use tabled::{Table, Tabled};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

use crate::goals::render_bar;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Days")]
    days: u64,
}

pub fn show_summary(summary: &AttendanceSummary) {
    let rows: Vec<StatusRow> = summary
        .counts
        .iter()
        .map(|c| StatusRow {
            status: c.status.label(),
            days: c.days,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    // The countable figure is uncapped, so the percent can run past 100.
    println!(
        "\nCountable: {} / {} days ({:.1}%)",
        summary.countable_days, summary.goal_days, summary.percent
    );
    println!("{}", render_bar(summary.percent, 40));
}
