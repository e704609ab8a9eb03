/// All primary keys are 64-bit integer rowids.
pub type DbId = i64;

/// A calendar date with no time-of-day component. Serialized everywhere
/// (JSON, storage, forms) as `YYYY-MM-DD`.
pub type CalendarDate = chrono::NaiveDate;

/// The only accepted textual form for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in UTC. `created_date` fields are stamped from
/// this exactly once, at insert time.
pub fn today() -> CalendarDate {
    chrono::Utc::now().date_naive()
}
