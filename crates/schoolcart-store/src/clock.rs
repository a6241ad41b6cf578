//! # Clock
//!
//! The roster asks a [`Clock`] for the local time instead of reading the
//! system time directly, so birthday lookups can be pinned in tests.
//! [`DefaultClock`] reads the host clock; [`ManualClock`] stays on one date
//! until moved.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub use mockable::{Clock, DefaultClock};

/// A clock that stays at noon on one date until moved with
/// [`ManualClock::set`].
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        ManualClock {
            now: Mutex::new(at_noon(today)),
        }
    }

    /// Moves the clock to noon on `date`.
    pub fn set(&self, date: NaiveDate) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at_noon(date);
    }
}

fn at_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + chrono::Duration::hours(12)
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        let now = *self.now.lock().unwrap_or_else(PoisonError::into_inner);
        Local
            .from_local_datetime(&now)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&now))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}
