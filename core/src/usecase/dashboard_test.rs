#[cfg(test)]
mod tests {
    use crate::model::attendance::{AttendanceSheet, AttendanceStatus};
    use crate::model::goal::Goal;
    use crate::model::habit::Habit;
    use crate::repository::{AttendanceRepository, GoalRepository, HabitRepository};
    use crate::usecase::dashboard::DashboardUseCase;
    use anyhow::Result;
    use chrono::NaiveDate;
    use uuid::Uuid;

    struct MockGoalRepo {
        goals: Vec<Goal>,
    }

    impl GoalRepository for MockGoalRepo {
        fn create(&self, _goal: Goal) -> Result<Goal> { unimplemented!() }
        fn list(&self) -> Result<Vec<Goal>> { Ok(self.goals.clone()) }
        fn get(&self, _id: &Uuid) -> Result<Goal> { unimplemented!() }
        fn update(&self, _goal: &Goal) -> Result<()> { unimplemented!() }
        fn delete(&self, _id: &Uuid) -> Result<()> { unimplemented!() }
    }

    struct MockAttendanceRepo {
        sheet: AttendanceSheet,
    }

    impl AttendanceRepository for MockAttendanceRepo {
        fn load(&self) -> Result<AttendanceSheet> { Ok(self.sheet.clone()) }
        fn save(&self, _sheet: &AttendanceSheet) -> Result<()> { Ok(()) }
    }

    struct MockHabitRepo {
        habits: Vec<Habit>,
    }

    impl HabitRepository for MockHabitRepo {
        fn create(&self, _habit: Habit) -> Result<Habit> { unimplemented!() }
        fn list(&self) -> Result<Vec<Habit>> { Ok(self.habits.clone()) }
        fn get(&self, _id: &Uuid) -> Result<Habit> { unimplemented!() }
        fn update(&self, _habit: &Habit) -> Result<()> { unimplemented!() }
        fn delete(&self, _id: &Uuid) -> Result<()> { unimplemented!() }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_dashboard_composes_all_sections() {
        let july_goal = Goal::new("July sprint".to_string(), d(2025, 7, 1), d(2025, 7, 30));
        let year_goal = Goal::new("Year of focus".to_string(), d(2025, 1, 1), d(2025, 12, 31));
        let goal_repo = MockGoalRepo {
            goals: vec![year_goal, july_goal],
        };

        let mut sheet = AttendanceSheet::new();
        sheet.mark(d(2025, 7, 1), AttendanceStatus::Present);
        sheet.mark(d(2025, 7, 2), AttendanceStatus::CasualLeave);
        let attendance_repo = MockAttendanceRepo { sheet };

        let habit_repo = MockHabitRepo {
            habits: vec![Habit::new("Read".to_string(), Some("BookOpen".to_string()))],
        };

        let usecase = DashboardUseCase::new(&goal_repo, &attendance_repo, &habit_repo);
        let view = usecase.load(d(2025, 7, 15)).unwrap();

        // Goals come back nearest deadline first, with progress evaluated
        // at the supplied day
        assert_eq!(view.goals.len(), 2);
        assert_eq!(view.goals[0].title, "July sprint");
        assert_eq!(view.goals[0].elapsed_days, 15);
        assert_eq!(view.goals[0].total_days, 30);
        assert_eq!(view.goals[0].percent, 50.0);

        assert_eq!(view.attendance.countable_days, 2);
        assert_eq!(view.attendance.count_for(AttendanceStatus::Present), 1);

        assert_eq!(view.habits.len(), 1);
        assert_eq!(view.habits[0].streak, 0);
    }

    #[test]
    fn test_dashboard_with_empty_stores() {
        let goal_repo = MockGoalRepo { goals: vec![] };
        let attendance_repo = MockAttendanceRepo {
            sheet: AttendanceSheet::new(),
        };
        let habit_repo = MockHabitRepo { habits: vec![] };

        let usecase = DashboardUseCase::new(&goal_repo, &attendance_repo, &habit_repo);
        let view = usecase.load(d(2025, 7, 15)).unwrap();

        assert!(view.goals.is_empty());
        assert!(view.habits.is_empty());
        assert_eq!(view.attendance.countable_days, 0);
    }
}
