//! # Roster Commands

use tracing::debug;

use schoolcart_core::Student;

use crate::state::RosterState;

pub fn list_students(roster: &RosterState) -> Vec<Student> {
    debug!("list_students command");
    roster.with(|r| r.students().to_vec())
}

/// Everyone whose birthday is today, by the roster's clock.
pub fn get_todays_birthdays(roster: &RosterState) -> Vec<Student> {
    debug!("get_todays_birthdays command");
    roster.with(|r| r.todays_birthdays().into_iter().cloned().collect())
}
