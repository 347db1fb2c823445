use chrono::{Datelike as _, Days, NaiveDate, Weekday};

/// Number of columns in a calendar grid.
pub const DAYS_IN_WEEK: usize = 7;

/// Visual state of a single [`DayCell`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DayFlags(u8);

bitflags::bitflags! {
    impl DayFlags: u8 {
        /// Transient hover feedback. Set and cleared by the hover sweep.
        const IN_RANGE = 1 << 0;

        /// Part of the persistent selection.
        const SELECTED = 1 << 1;

        /// Part of the selected week block.
        const WEEK = 1 << 2;
    }
}

impl std::fmt::Debug for DayFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayFlags {{")?;
        if self.contains(Self::IN_RANGE) {
            write!(f, " in_range")?;
        }
        if self.contains(Self::SELECTED) {
            write!(f, " selected")?;
        }
        if self.contains(Self::WEEK) {
            write!(f, " week")?;
        }
        write!(f, " }}")
    }
}

/// One rendered day of a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub flags: DayFlags,
}

impl DayCell {
    #[inline]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            flags: DayFlags::empty(),
        }
    }

    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.flags.contains(DayFlags::IN_RANGE)
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.flags.contains(DayFlags::SELECTED)
    }

    #[inline]
    pub fn is_week(&self) -> bool {
        self.flags.contains(DayFlags::WEEK)
    }
}

/// Day cells of one visible month, row-major with [`DAYS_IN_WEEK`] columns.
///
/// A well-formed grid has a length that is a multiple of seven and dates that
/// increase by exactly one day per index. Leading and trailing days of the
/// neighbouring months pad the first and last rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<DayCell>,
}

impl Grid {
    /// `len` consecutive days starting at `first`.
    pub fn from_first_date(first: NaiveDate, len: usize) -> Self {
        Self {
            cells: first
                .iter_days()
                .take(len)
                .map(DayCell::new)
                .collect(),
        }
    }

    /// All weeks touching `year`-`month`, each row starting on `week_start`.
    ///
    /// Returns `None` for an invalid year/month.
    pub fn for_month(year: i32, month: u32, week_start: Weekday) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = (first.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday())
            % 7;
        let mut start = first.checked_sub_days(Days::new(u64::from(lead)))?;

        let mut cells = vec![];
        while start < first || start.month() == first.month() || start.weekday() != week_start {
            cells.push(DayCell::new(start));
            start = start.succ_opt()?;
        }

        Some(Self { cells })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [DayCell] {
        &mut self.cells
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    /// Iterate over the rows of the grid, one week per slice.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// Index of the cell showing `date`.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.cells.first()?.date;
        let offset = usize::try_from((date - first).num_days()).ok()?;
        (offset < self.cells.len()).then_some(offset)
    }

    /// The date at `index`, extrapolated past the last cell when `index` is out of bounds.
    ///
    /// `None` only for an empty grid (or dates outside chrono's range).
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        if let Some(cell) = self.cells.get(index) {
            return Some(cell.date);
        }
        let last_index = self.cells.len().checked_sub(1)?;
        let last = self.cells[last_index].date;
        let extra = u64::try_from(index - last_index).ok()?;
        last.checked_add_days(Days::new(extra))
    }

    /// Clears `flags` from every cell.
    pub fn clear(&mut self, flags: DayFlags) {
        for cell in &mut self.cells {
            cell.flags.remove(flags);
        }
    }

    /// Indices of all cells carrying every flag in `flags`.
    pub fn indices_with(&self, flags: DayFlags) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.flags.contains(flags))
            .map(|(index, _)| index)
            .collect()
    }
}
