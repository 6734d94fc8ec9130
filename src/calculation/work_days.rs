//! Net working day calculation.
//!
//! This module computes, for one reporting week, how many days each person
//! is available: a fixed baseline, minus their weekday leave, minus company
//! holidays.

use tracing::debug;

use crate::models::{LeaveEntry, Person, Timeframe, WorkDayMap};

/// Working days in a reporting week before any deductions.
///
/// The baseline does not depend on which weekdays the timeframe covers.
pub const BASE_WORK_DAYS: i32 = 5;

/// Calculates each person's working days after their own leave.
///
/// Every person starts at [`BASE_WORK_DAYS`]. Each leave entry whose
/// `employee_id` equals the person's id subtracts the number of weekdays it
/// shares with the timeframe. Overlapping entries for the same person each
/// subtract in full, and nothing floors the result, so a count can go
/// negative.
///
/// Holidays are not applied here; see [`deduct_holidays`].
///
/// # Example
///
/// ```
/// use workday_report::calculation::calculate_work_days;
/// use workday_report::models::{LeaveEntry, Person, Timeframe};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let people = vec![Person::new("1", "Alice"), Person::new("2", "Bob")];
/// let leave = vec![LeaveEntry::time_off("2", date(2), date(3))];
///
/// let week = Timeframe::week_starting(date(1)).unwrap();
/// let work_days = calculate_work_days(&people, &leave, &week);
/// assert_eq!(work_days["Alice"], 5);
/// assert_eq!(work_days["Bob"], 3);
/// ```
pub fn calculate_work_days(
    people: &[Person],
    leave: &[LeaveEntry],
    timeframe: &Timeframe,
) -> WorkDayMap {
    let mut work_days = WorkDayMap::new();

    for person in people {
        let days_off: i32 = leave
            .iter()
            .filter(|entry| entry.belongs_to(&person.id))
            .map(|entry| entry.weekdays_within(timeframe))
            .sum();

        if days_off > 0 {
            debug!(
                name = %person.name,
                days_off,
                timeframe = %timeframe,
                "Deducted leave"
            );
        }

        work_days.insert(person.name.clone(), BASE_WORK_DAYS - days_off);
    }

    work_days
}

/// Subtracts one day from everyone for each holiday entry in `leave`.
///
/// Every entry of kind holiday triggers one pass, whatever its dates or
/// employee, so duplicate holiday entries deduct twice. A pass never takes
/// a count below zero, and counts already at or below zero are left as
/// they are.
///
/// # Returns
///
/// The number of holiday passes applied.
///
/// # Example
///
/// ```
/// use workday_report::calculation::deduct_holidays;
/// use workday_report::models::{LeaveEntry, WorkDayMap};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let leave = vec![LeaveEntry::holiday("New Year", day, day)];
/// let mut work_days = WorkDayMap::from([("Alice".to_string(), 5), ("Bob".to_string(), 0)]);
///
/// assert_eq!(deduct_holidays(&mut work_days, &leave), 1);
/// assert_eq!(work_days["Alice"], 4);
/// assert_eq!(work_days["Bob"], 0);
/// ```
pub fn deduct_holidays(work_days: &mut WorkDayMap, leave: &[LeaveEntry]) -> usize {
    let holidays = leave.iter().filter(|entry| entry.is_holiday()).count();

    for _ in 0..holidays {
        for count in work_days.values_mut() {
            if *count > 0 {
                *count -= 1;
            }
        }
    }

    if holidays > 0 {
        debug!(holidays, people = work_days.len(), "Deducted holidays");
    }
    holidays
}

/// Computes the full work-day map for one timeframe: personal leave first,
/// then holidays.
///
/// # Example
///
/// ```
/// use workday_report::calculation::compute_work_days;
/// use workday_report::models::{LeaveEntry, Person, Timeframe};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let people = vec![Person::new("1", "Alice")];
/// let leave = vec![
///     LeaveEntry::time_off("1", date(2), date(2)),
///     LeaveEntry::holiday("New Year", date(1), date(1)),
/// ];
///
/// let week = Timeframe::week_starting(date(1)).unwrap();
/// let work_days = compute_work_days(&people, &leave, &week);
/// assert_eq!(work_days["Alice"], 3);
/// ```
pub fn compute_work_days(
    people: &[Person],
    leave: &[LeaveEntry],
    timeframe: &Timeframe,
) -> WorkDayMap {
    let mut work_days = calculate_work_days(people, leave, timeframe);
    deduct_holidays(&mut work_days, leave);
    work_days
}
