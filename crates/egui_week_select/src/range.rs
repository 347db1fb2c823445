use chrono::NaiveDate;

use crate::grid::{DAYS_IN_WEEK, Grid};

/// Length of a highlighted block, in days. Always a positive multiple of seven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockLength(u32);

impl BlockLength {
    /// One week.
    pub const WEEK: Self = Self(DAYS_IN_WEEK as u32);

    /// `None` unless `days` is a positive multiple of seven.
    pub fn from_days(days: u32) -> Option<Self> {
        (days > 0 && days % Self::WEEK.0 == 0).then_some(Self(days))
    }

    /// `None` for zero weeks.
    pub fn from_weeks(weeks: u32) -> Option<Self> {
        weeks.checked_mul(Self::WEEK.0).and_then(Self::from_days)
    }

    #[inline]
    pub fn days(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn weeks(self) -> u32 {
        self.0 / Self::WEEK.0
    }
}

impl Default for BlockLength {
    #[inline]
    fn default() -> Self {
        Self::WEEK
    }
}

impl std::fmt::Display for BlockLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Inclusive range of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[inline]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "{start} > {end}");
        Self { start, end }
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, counting both ends.
    #[inline]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// First and last grid index of the block containing `cell_index`.
///
/// The block starts on the first cell of the row holding `cell_index` and runs
/// `block_length` days forward. The end index may lie past the grid.
#[inline]
pub fn block_indices(cell_index: usize, block_length: BlockLength) -> (usize, usize) {
    let row = cell_index / DAYS_IN_WEEK;
    let start = row * DAYS_IN_WEEK;
    // Next row boundary, plus the extra weeks of a longer block.
    let end = (row + 1) * DAYS_IN_WEEK + (block_length.days() as usize - DAYS_IN_WEEK) - 1;
    (start, end)
}

/// The block of `block_length` days enclosing the cell at `cell_index`.
///
/// Dates are never clamped to the grid: an end index past the last cell resolves
/// to the true calendar date it would have, see [`Grid::date_at`].
/// Returns `None` only for an empty grid.
pub fn compute_range(cell_index: usize, block_length: BlockLength, grid: &Grid) -> Option<DateRange> {
    let (start, end) = block_indices(cell_index, block_length);
    Some(DateRange::new(grid.date_at(start)?, grid.date_at(end)?))
}
