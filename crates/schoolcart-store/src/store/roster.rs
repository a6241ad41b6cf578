//! # Roster
//!
//! Students, staff and admins, and who has a birthday today.
//!
//! The roster is read-only once built. "Today" comes from the injected
//! [`Clock`] on every call; nothing is cached, so a dashboard left open past
//! midnight picks up the new day.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use schoolcart_core::types::month_day_key;
use schoolcart_core::validation::validate_birthday;
use schoolcart_core::{CoreResult, Student};

use crate::clock::Clock;
use crate::seed;

#[derive(Clone)]
pub struct Roster {
    students: Vec<Student>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roster")
            .field("students", &self.students)
            .finish_non_exhaustive()
    }
}

impl Roster {
    /// Builds a roster, rejecting any birthday that is not a real `MM-DD`.
    pub fn new(students: Vec<Student>, clock: Arc<dyn Clock>) -> CoreResult<Self> {
        for student in &students {
            validate_birthday(&student.birthday)?;
        }

        debug!(entries = students.len(), "Built roster");
        Ok(Roster { students, clock })
    }

    /// The seed roster. Three entries have their birthday on the clock's
    /// current date.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Roster {
            students: seed::roster(clock.local().date_naive()),
            clock,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Entries whose birthday matches today's `MM-DD`, in roster order.
    pub fn todays_birthdays(&self) -> Vec<&Student> {
        let today = month_day_key(self.clock.local().date_naive());
        let birthdays: Vec<_> = self
            .students
            .iter()
            .filter(|s| s.has_birthday_on(&today))
            .collect();

        debug!(today = %today, count = birthdays.len(), "Checked birthdays");
        birthdays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDate;
    use schoolcart_core::{CoreError, MemberRole, ValidationError};

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    fn student(id: &str, birthday: &str) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {}", id),
            birthday: birthday.to_string(),
            role: MemberRole::Student,
        }
    }

    #[test]
    fn test_seeded_roster_celebrates_today() {
        let clock = Arc::new(ManualClock::new(date(10, 19)));
        let roster = Roster::seeded(clock);

        let names: Vec<_> = roster.todays_birthdays().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Priya Sharma", "Rahul Kumar", "Vikash Singh"]);
    }

    #[test]
    fn test_moving_the_clock_changes_birthdays() {
        let clock = Arc::new(ManualClock::new(date(3, 15)));
        let roster = Roster::new(
            vec![student("1", "03-15"), student("2", "07-22"), student("3", "03-15")],
            clock.clone(),
        )
        .unwrap();

        let ids: Vec<_> = roster.todays_birthdays().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        clock.set(date(7, 22));
        let ids: Vec<_> = roster.todays_birthdays().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        clock.set(date(1, 1));
        assert!(roster.todays_birthdays().is_empty());
    }

    #[test]
    fn test_leap_day_birthday() {
        let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()));
        let roster = Roster::new(vec![student("1", "02-29")], clock).unwrap();
        assert_eq!(roster.todays_birthdays().len(), 1);
    }

    #[test]
    fn test_invalid_birthday_is_rejected() {
        let clock = Arc::new(ManualClock::new(date(1, 1)));
        let result = Roster::new(vec![student("1", "13-40")], clock);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }
}
