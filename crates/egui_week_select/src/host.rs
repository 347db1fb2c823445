use chrono::NaiveDate;

use crate::grid::Grid;
use crate::selector::{Notice, WeekSelect};

/// Handle of a listener registered with a [`CalendarHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Events the extension listens to, outside of the lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer moved over the day grid.
    DayHover,

    /// The block length selector changed.
    WeekOptionChange,
}

/// The calendar the extension is attached to.
///
/// The host owns the day grid, the visible month and the current selection.
/// The extension only reads dates and writes [`crate::DayFlags`].
pub trait CalendarHost {
    /// The rendered day cells of the visible month.
    fn days(&self) -> &Grid;

    fn days_mut(&mut self) -> &mut Grid;

    /// The most recently selected date, if any.
    fn latest_selected_date(&self) -> Option<NaiveDate>;

    /// Grid index of the cell showing the selected date, if it is rendered.
    fn selected_day_index(&self) -> Option<usize>;

    /// Visible month, 1-based.
    fn current_month(&self) -> u32;

    fn current_year(&self) -> i32;

    /// `false` for hosts without a day grid (time-only pickers, native mobile inputs).
    fn has_calendar(&self) -> bool {
        true
    }

    /// Whether there is an inner container to insert the notice before.
    fn has_inner_container(&self) -> bool {
        true
    }

    /// Inserts the notice above the calendar.
    fn insert_notice(&mut self, notice: Notice);

    /// Mounts the block length selector into the month navigation.
    fn insert_week_select(&mut self, select: WeekSelect);

    /// Starts delivering events of `kind`.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Stops delivering events for `id`.
    fn remove_listener(&mut self, id: ListenerId);
}
