//! The app-wide selected date
//!
//! Screens and commands that show "a day" read the date from a
//! [`SelectedDate`] handed to them by the composition root. Changing it
//! notifies every subscriber.

use crate::error::{Error, Result};
use chrono::{Days, Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// ISO calendar date format used on the wire and in paths
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// Shared, observable selected date
///
/// Cloning yields another handle to the same cell. Writes are
/// last-writer-wins; setting the current value again is not a change.
#[derive(Debug, Clone)]
pub struct SelectedDate {
    tx: Arc<watch::Sender<NaiveDate>>,
}

impl SelectedDate {
    /// Create a cell holding `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        let (tx, _rx) = watch::channel(date);
        Self { tx: Arc::new(tx) }
    }

    /// Create a cell holding today's local date
    #[must_use]
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Create a cell from a `YYYY-MM-DD` string
    pub fn parse(value: &str) -> Result<Self> {
        parse_iso_date(value).map(Self::new)
    }

    /// Current date
    #[must_use]
    pub fn get(&self) -> NaiveDate {
        *self.tx.borrow()
    }

    /// Current date as `YYYY-MM-DD`
    #[must_use]
    pub fn iso(&self) -> String {
        self.get().format(ISO_DATE_FORMAT).to_string()
    }

    /// Replace the date. Returns `true` if subscribers were notified.
    pub fn set(&self, date: NaiveDate) -> bool {
        self.update(|_| date)
    }

    /// Derive the new date from the current one
    pub fn update(&self, f: impl FnOnce(NaiveDate) -> NaiveDate) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            let next = f(*current);
            if next == *current {
                return false;
            }
            *current = next;
            true
        });

        if changed {
            debug!(date = %self.iso(), "Selected date changed");
        }
        changed
    }

    /// Move one day forward
    pub fn next_day(&self) -> bool {
        self.update(|d| d.checked_add_days(Days::new(1)).unwrap_or(d))
    }

    /// Move one day back
    pub fn previous_day(&self) -> bool {
        self.update(|d| d.checked_sub_days(Days::new(1)).unwrap_or(d))
    }

    /// Subscribe to changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NaiveDate> {
        self.tx.subscribe()
    }
}

impl Default for SelectedDate {
    fn default() -> Self {
        Self::today()
    }
}
