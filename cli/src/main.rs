mod attendance;
mod goals;
mod tui;

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use chronozen_core::{
    expand_key, parse_args, parse_date_key, time, AttendanceService, AttendanceStatus,
    FileAttendanceRepository, FileGoalRepository, FileHabitRepository, GoalService, HabitService,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "chronozen")]
#[command(about = "Goals, attendance and habit streaks from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage progress goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Mark and summarize attendance
    Att {
        #[command(subcommand)]
        action: AttAction,
    },
    /// Manage daily habits and streaks
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },
    /// Open the dashboard
    Tui,
}

#[derive(Subcommand)]
enum GoalAction {
    /// Add a goal (usage: add Q3 deadline start:2025-07-01 end:2025-09-30)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List goals with progress
    List,
    /// Remove a goal by id prefix
    Rm {
        id: String,
    },
}

#[derive(Subcommand)]
enum AttAction {
    /// Mark a day (usage: mark 2025-07-04 present; status accepts prefixes)
    Mark {
        date: String,
        status: String,
    },
    /// Clear a day's status
    Clear {
        date: String,
    },
    /// Show per-status counts and goal progress
    Summary,
}

#[derive(Subcommand)]
enum HabitAction {
    /// Add a habit (usage: add Morning run icon:Route)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Toggle completion by title prefix
    Toggle {
        title: String,
    },
    /// List habits with streaks
    List,
    /// Remove a habit by title prefix
    Rm {
        title: String,
    },
}

// Short names accepted on the command line, one per status.
const STATUS_KEYS: [&str; 5] = ["present", "casual", "earned", "off", "transfer"];

fn parse_status(input: &str) -> Result<AttendanceStatus> {
    let key = expand_key(&input.to_lowercase(), &STATUS_KEYS)?;
    match key.as_str() {
        "present" => Ok(AttendanceStatus::Present),
        "casual" => Ok(AttendanceStatus::CasualLeave),
        "earned" => Ok(AttendanceStatus::EarnedOrSickLeave),
        "off" => Ok(AttendanceStatus::WeeklyOff),
        "transfer" => Ok(AttendanceStatus::Transfer),
        other => Err(anyhow!("Unknown status: {}", other)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Goal { action } => {
            let service = GoalService::new(FileGoalRepository::new(None)?);
            run_goal(action, &service)?;
        }
        Commands::Att { action } => {
            let service = AttendanceService::new(FileAttendanceRepository::new(None)?);
            run_att(action, &service)?;
        }
        Commands::Habit { action } => {
            let service = HabitService::new(FileHabitRepository::new(None)?);
            run_habit(action, &service)?;
        }
        Commands::Tui => {
            tui::run()?;
        }
    }

    Ok(())
}

fn run_goal(action: GoalAction, service: &GoalService<FileGoalRepository>) -> Result<()> {
    match action {
        GoalAction::Add { args } => {
            if args.is_empty() {
                println!("Error: Goal title is required.");
                return Ok(());
            }

            let parsed = parse_args(&args);
            if parsed.name.is_empty() {
                println!("Error: Goal title is required.");
                return Ok(());
            }

            let known_keys = ["start", "end"];
            let mut normalized = HashMap::new();
            for (key, value) in parsed.metadata {
                match expand_key(&key, &known_keys) {
                    Ok(full_key) => {
                        normalized.insert(full_key, value);
                    }
                    Err(e) => {
                        println!("Warning: {}", e);
                    }
                }
            }

            let (start, end) = match (normalized.get("start"), normalized.get("end")) {
                (Some(s), Some(e)) => (parse_date_key(s)?, parse_date_key(e)?),
                _ => {
                    println!("Error: start:YYYY-MM-DD and end:YYYY-MM-DD are required.");
                    return Ok(());
                }
            };

            let dto = service.create_goal(parsed.name, start, end)?;
            println!(
                "Added goal '{}' ({} -> {}), {} of {} days elapsed.",
                dto.title, dto.start, dto.end, dto.elapsed_days, dto.total_days
            );
        }
        GoalAction::List => {
            let goals = service.list_goals(time::today())?;
            goals::show_goals(&goals);
        }
        GoalAction::Rm { id } => {
            let target = find_goal_id(service, &id)?;
            service.delete_goal(&target)?;
            println!("Removed goal {}.", target);
        }
    }
    Ok(())
}

fn find_goal_id(service: &GoalService<FileGoalRepository>, prefix: &str) -> Result<Uuid> {
    let goals = service.list_goals(time::today())?;
    let matches: Vec<&chronozen_core::GoalDto> = goals
        .iter()
        .filter(|g| g.id.to_string().starts_with(prefix))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].id),
        0 => Err(anyhow!("No goal matches id prefix '{}'", prefix)),
        _ => Err(anyhow!("Id prefix '{}' is ambiguous", prefix)),
    }
}

fn run_att(action: AttAction, service: &AttendanceService<FileAttendanceRepository>) -> Result<()> {
    match action {
        AttAction::Mark { date, status } => {
            let day = parse_date_key(&date)?;
            let status = parse_status(&status)?;
            let previous = service.mark(day, status)?;
            match previous {
                Some(old) => println!(
                    "Marked {} as {} (was {}).",
                    date,
                    status.label(),
                    old.label()
                ),
                None => println!("Marked {} as {}.", date, status.label()),
            }
        }
        AttAction::Clear { date } => {
            let day = parse_date_key(&date)?;
            match service.clear(day)? {
                Some(old) => println!("Cleared {} (was {}).", date, old.label()),
                None => println!("{} had no status.", date),
            }
        }
        AttAction::Summary => {
            let summary = service.summary()?;
            attendance::show_summary(&summary);
        }
    }
    Ok(())
}

fn run_habit(action: HabitAction, service: &HabitService<FileHabitRepository>) -> Result<()> {
    match action {
        HabitAction::Add { args } => {
            if args.is_empty() {
                println!("Error: Habit title is required.");
                return Ok(());
            }

            let mut parsed = parse_args(&args);
            if parsed.name.is_empty() {
                println!("Error: Habit title is required.");
                return Ok(());
            }

            let icon = parsed.take("icon");
            let habit = service.add_habit(parsed.name, icon)?;
            println!("Added habit '{}'.", habit.title);
        }
        HabitAction::Toggle { title } => {
            let id = find_habit_id(service, &title)?;
            let habit = service.toggle(&id)?;
            if habit.completed {
                println!("'{}' done. Streak: {}", habit.title, habit.streak);
            } else {
                println!("'{}' unchecked. Streak: {}", habit.title, habit.streak);
            }
        }
        HabitAction::List => {
            let habits = service.list_habits()?;
            if habits.is_empty() {
                println!("No habits yet.");
                return Ok(());
            }
            for habit in habits {
                let mark = if habit.completed { "✔" } else { "☐" };
                match &habit.icon {
                    Some(icon) => println!("{} 🔥{:<3} {} ({})", mark, habit.streak, habit.title, icon),
                    None => println!("{} 🔥{:<3} {}", mark, habit.streak, habit.title),
                }
            }
        }
        HabitAction::Rm { title } => {
            let id = find_habit_id(service, &title)?;
            service.delete_habit(&id)?;
            println!("Removed habit.");
        }
    }
    Ok(())
}

fn find_habit_id(service: &HabitService<FileHabitRepository>, prefix: &str) -> Result<Uuid> {
    let habits = service.list_habits()?;
    let needle = prefix.to_lowercase();
    let matches: Vec<&chronozen_core::Habit> = habits
        .iter()
        .filter(|h| h.title.to_lowercase().starts_with(&needle))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].id),
        0 => Err(anyhow!("No habit matches '{}'", prefix)),
        _ => Err(anyhow!("'{}' is ambiguous", prefix)),
    }
}
