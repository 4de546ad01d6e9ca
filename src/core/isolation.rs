use crate::core::evaluator::EvaluationError;
use crate::models::IsolationStatus;
use chrono::{Days, NaiveDate};

/// Last day of isolation: `reference_date` plus `window` calendar days
pub fn isolation_end_date(reference_date: NaiveDate, window: i64) -> Result<NaiveDate, EvaluationError> {
    if window <= 0 {
        return Err(EvaluationError::InvalidWindow(window));
    }

    reference_date
        .checked_add_days(Days::new(window.unsigned_abs()))
        .ok_or(EvaluationError::DateOutOfRange {
            reference_date,
            window,
        })
}

/// Whether isolation has already ended on `current_date`
///
/// An end date equal to the current date is still upcoming.
#[inline]
pub fn isolation_status(end_date: NaiveDate, current_date: NaiveDate) -> IsolationStatus {
    if end_date < current_date {
        IsolationStatus::Passed
    } else {
        IsolationStatus::Upcoming
    }
}
