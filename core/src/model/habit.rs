use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring daily-planner item with a completion streak.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: Uuid,
    pub title: String,
    pub icon: Option<String>,
    pub streak: u32,
    pub completed: bool,
}

impl Habit {
    pub fn new(title: String, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            icon,
            streak: 0,
            completed: false,
        }
    }

    /// Flips completion. Completing extends the streak; undoing a completion
    /// takes one back, never below zero.
    pub fn toggle(&mut self) {
        if self.completed {
            self.completed = false;
            self.streak = self.streak.saturating_sub(1);
        } else {
            self.completed = true;
            self.streak += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_builds_streak() {
        let mut habit = Habit::new("Meditate".to_string(), None);
        assert_eq!(habit.streak, 0);

        habit.toggle();
        assert!(habit.completed);
        assert_eq!(habit.streak, 1);

        habit.toggle();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_streak_never_negative() {
        let mut habit = Habit::new("Run".to_string(), Some("Route".to_string()));
        // Undoing at zero stays at zero
        habit.completed = true;
        habit.streak = 0;
        habit.toggle();
        assert_eq!(habit.streak, 0);
        assert!(!habit.completed);
    }
}
