/// Errors at the fallible edges of the crate: configuration and month construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`week` must offer at least one option")]
    NoWeekOptions,

    #[error("`current_week` {current_week} is outside 1..={week}")]
    CurrentWeekOutOfRange { week: u32, current_week: u32 },

    #[error("{year}-{month} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
