use chrono::NaiveDate;

/// Source of "today" for forward-looking searches.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
