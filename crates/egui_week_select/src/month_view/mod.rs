//! A ready-made [`CalendarHost`]: one visible month with a single selected date.

#[cfg(feature = "egui")]
mod ui;

use chrono::{Datelike as _, NaiveDate, Weekday};

use crate::config::MultiWeekConfig;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::host::{CalendarHost, ListenerId, ListenerKind};
use crate::plugin::{Hook, MultiWeekSelect};
use crate::range::{BlockLength, DateRange};
use crate::selector::{Notice, WeekOption, WeekSelect};

/// Calendar state of a [`MonthView`].
#[derive(Clone, Debug)]
pub struct MonthCalendar {
    year: i32,
    month: u32,
    week_start: Weekday,
    grid: Grid,
    selected: Option<NaiveDate>,
    open: bool,
    notice: Option<Notice>,
    week_select: Option<WeekSelect>,
    listeners: Vec<(ListenerId, ListenerKind)>,
    next_listener: u64,
}

impl MonthCalendar {
    /// # Errors
    /// [`Error::InvalidMonth`] if `year`-`month` is not a month chrono can represent.
    pub fn new(year: i32, month: u32, week_start: Weekday) -> Result<Self> {
        let grid =
            Grid::for_month(year, month, week_start).ok_or(Error::InvalidMonth { year, month })?;
        Ok(Self {
            year,
            month,
            week_start,
            grid,
            selected: None,
            open: false,
            notice: None,
            week_select: None,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[inline]
    pub fn week_select(&self) -> Option<&WeekSelect> {
        self.week_select.as_ref()
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(_, other)| *other == kind)
    }

    /// Shows `year`-`month` with a freshly built grid.
    fn show_month(&mut self, year: i32, month: u32) -> Result<()> {
        self.grid = Grid::for_month(year, month, self.week_start)
            .ok_or(Error::InvalidMonth { year, month })?;
        self.year = year;
        self.month = month;
        Ok(())
    }
}

impl CalendarHost for MonthCalendar {
    fn days(&self) -> &Grid {
        &self.grid
    }

    fn days_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn latest_selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    fn selected_day_index(&self) -> Option<usize> {
        self.grid.index_of(self.selected?)
    }

    fn current_month(&self) -> u32 {
        self.month
    }

    fn current_year(&self) -> i32 {
        self.year
    }

    fn insert_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    fn insert_week_select(&mut self, select: WeekSelect) {
        self.week_select = Some(select);
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(other, _)| *other != id);
    }
}

/// A month calendar with multi-week selection attached.
///
/// All user interaction goes through the methods here, which update the
/// calendar and then run the matching [`Hook`].
#[derive(Clone, Debug)]
pub struct MonthView {
    calendar: MonthCalendar,
    plugin: Option<MultiWeekSelect>,

    /// Cell under the pointer during the previous frame.
    #[cfg(feature = "egui")]
    pointer_cell: Option<usize>,
}

impl MonthView {
    /// A view of `year`-`month` with weeks starting on Monday.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] for an invalid year/month.
    pub fn new(config: MultiWeekConfig, year: i32, month: u32) -> Result<Self> {
        Self::with_week_start(config, year, month, Weekday::Mon)
    }

    /// A view of `year`-`month` with weeks (and so blocks) starting on `week_start`.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] for an invalid year/month.
    pub fn with_week_start(
        config: MultiWeekConfig,
        year: i32,
        month: u32,
        week_start: Weekday,
    ) -> Result<Self> {
        let calendar = MonthCalendar::new(year, month, week_start)?;
        let plugin = MultiWeekSelect::attach(config, &calendar);
        let mut view = Self {
            calendar,
            plugin,
            #[cfg(feature = "egui")]
            pointer_cell: None,
        };
        view.dispatch(Hook::Ready);
        Ok(view)
    }

    #[inline]
    pub fn calendar(&self) -> &MonthCalendar {
        &self.calendar
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.calendar.grid
    }

    pub fn block_length(&self) -> BlockLength {
        self.plugin
            .as_ref()
            .map(|plugin| plugin.state().effective_block_length())
            .unwrap_or_default()
    }

    pub fn active_range(&self) -> Option<DateRange> {
        self.plugin.as_ref()?.state().active_range
    }

    pub fn hovered_range(&self) -> Option<DateRange> {
        self.plugin.as_ref()?.state().hover_range
    }

    /// Runs `hook` if the extension is attached and listening for it.
    pub fn dispatch(&mut self, hook: Hook) {
        let Some(plugin) = &mut self.plugin else {
            return;
        };
        let listening = match &hook {
            Hook::DayHover(_) => self.calendar.is_listening(ListenerKind::DayHover),
            Hook::WeekOptionSelect(_) => {
                self.calendar.is_listening(ListenerKind::WeekOptionChange)
            }
            _ => true,
        };
        if listening {
            plugin.handle(&mut self.calendar, hook);
        }
    }

    pub fn open(&mut self) {
        self.calendar.open = true;
        self.dispatch(Hook::Open);
    }

    pub fn close(&mut self) {
        self.calendar.open = false;
        self.dispatch(Hook::Close);
    }

    pub fn destroy(&mut self) {
        self.dispatch(Hook::Destroy);
    }

    /// Pointer over the cell at `index` (`None`: over something that is not a day).
    pub fn hover(&mut self, index: Option<usize>) {
        self.dispatch(Hook::DayHover(index));
    }

    pub fn leave_grid(&mut self) {
        self.dispatch(Hook::GridLeave);
    }

    /// Selects `date`, switching to its month first if needed.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] if the month of `date` cannot be shown.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        if (date.year(), date.month()) != (self.calendar.year, self.calendar.month) {
            self.go_to(date.year(), date.month())?;
        }
        self.calendar.selected = Some(date);
        self.dispatch(Hook::ValueUpdate);
        Ok(())
    }

    /// Shows `year`-`month`, running the month (and year) change hooks.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] for an invalid year/month; the view is left unchanged.
    pub fn go_to(&mut self, year: i32, month: u32) -> Result<()> {
        let year_changed = year != self.calendar.year;
        let month_changed = month != self.calendar.month;
        if !year_changed && !month_changed {
            return Ok(());
        }
        self.calendar.show_month(year, month)?;

        // The new grid has no hover markers; forget the old hover so the next
        // pointer position is reported again.
        #[cfg(feature = "egui")]
        {
            self.pointer_cell = None;
        }
        self.dispatch(Hook::GridLeave);

        if month_changed {
            self.dispatch(Hook::MonthChange);
        }
        if year_changed {
            self.dispatch(Hook::YearChange);
        }
        Ok(())
    }

    /// Moves `delta` months forward (or back, if negative).
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] past the range chrono supports.
    pub fn step_months(&mut self, delta: i32) -> Result<()> {
        let index = self.calendar.year * 12 + self.calendar.month as i32 - 1 + delta;
        self.go_to(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    /// Picks a block length in the selector, as the user would.
    ///
    /// Lengths the selector does not offer are ignored.
    pub fn choose_block_length(&mut self, value: BlockLength) {
        let mut text = None;
        if let Some(select) = &mut self.calendar.week_select {
            if select.select(value) {
                text = select.selected().map(WeekOption::value_text);
            }
        }
        match text {
            Some(text) => self.dispatch(Hook::WeekOptionSelect(text)),
            None => log::debug!("{value} days is not offered"),
        }
    }
}
