use anyhow::Result;
use ratatui::widgets::TableState;
use chronozen_core::{
    time, FileAttendanceRepository, FileGoalRepository, FileHabitRepository, HabitService,
};
use chronozen_core::usecase::dashboard::{DashboardUseCase, DashboardView};

pub struct App {
    goal_repo: FileGoalRepository,
    attendance_repo: FileAttendanceRepository,
    habit_repo: FileHabitRepository,
    habit_service: HabitService<FileHabitRepository>,
    pub view: DashboardView,
    pub habit_state: TableState,
}

impl App {
    pub fn new() -> Result<App> {
        let goal_repo = FileGoalRepository::new(None)?;
        let attendance_repo = FileAttendanceRepository::new(None)?;
        let habit_repo = FileHabitRepository::new(None)?;
        let habit_service = HabitService::new(habit_repo.clone());

        let view = DashboardUseCase::new(&goal_repo, &attendance_repo, &habit_repo)
            .load(time::today())?;

        let mut habit_state = TableState::default();
        if !view.habits.is_empty() {
            habit_state.select(Some(0));
        }

        Ok(App {
            goal_repo,
            attendance_repo,
            habit_repo,
            habit_service,
            view,
            habit_state,
        })
    }

    pub fn reload(&mut self) {
        let usecase =
            DashboardUseCase::new(&self.goal_repo, &self.attendance_repo, &self.habit_repo);
        if let Ok(view) = usecase.load(time::today()) {
            self.view = view;
        }

        // Keep the selection on the list after a reload
        if self.view.habits.is_empty() {
            self.habit_state.select(None);
        } else {
            let i = self.habit_state.selected().unwrap_or(0);
            self.habit_state
                .select(Some(i.min(self.view.habits.len() - 1)));
        }
    }

    pub fn next_habit(&mut self) {
        if self.view.habits.is_empty() {
            return;
        }

        let i = match self.habit_state.selected() {
            Some(i) => {
                if i >= self.view.habits.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.habit_state.select(Some(i));
    }

    pub fn previous_habit(&mut self) {
        if self.view.habits.is_empty() {
            return;
        }

        let i = match self.habit_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.view.habits.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.habit_state.select(Some(i));
    }

    pub fn toggle_selected_habit(&mut self) {
        if let Some(i) = self.habit_state.selected() {
            if let Some(habit) = self.view.habits.get(i) {
                let _ = self.habit_service.toggle(&habit.id);
            }
            self.reload();
        }
    }
}
