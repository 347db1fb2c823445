use chrono::Datelike as _;

use crate::config::MultiWeekConfig;
use crate::host::{CalendarHost, ListenerId, ListenerKind};
use crate::range::{BlockLength, DateRange, compute_range};
use crate::{reconcile, selector};

/// A lifecycle event delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hook {
    /// The calendar was built. Must not repeat without a [`Hook::Destroy`] in between.
    Ready,

    /// A date was selected.
    ValueUpdate,

    MonthChange,

    YearChange,

    Open,

    Close,

    Destroy,

    /// The pointer is over the calendar. `None` when the target is not a day cell.
    DayHover(Option<usize>),

    /// The pointer left the day grid.
    GridLeave,

    /// The block length selector changed to the given value.
    WeekOptionSelect(String),
}

/// State shared by all hooks of one attached calendar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekState {
    /// Chosen block length. `None` until an option is selected.
    pub block_length: Option<BlockLength>,

    /// Range of the selected date. `None` until a date is selected.
    pub active_range: Option<DateRange>,

    /// Most recent hover range.
    pub hover_range: Option<DateRange>,

    hover_listener: Option<ListenerId>,
    change_listener: Option<ListenerId>,
}

impl WeekState {
    /// The block length to compute ranges with.
    #[inline]
    pub fn effective_block_length(&self) -> BlockLength {
        self.block_length.unwrap_or_default()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.hover_listener.is_some()
    }
}

/// Multi-week selection attached to one [`CalendarHost`].
///
/// ```
/// # use egui_week_select::{Hook, MonthView, MultiWeekConfig};
/// let mut view = MonthView::new(MultiWeekConfig::default().week(2).current_week(2), 2024, 5)?;
/// view.dispatch(Hook::DayHover(Some(3)));
/// assert_eq!(view.hovered_range().map(|r| r.num_days()), Some(14));
/// # Ok::<(), egui_week_select::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MultiWeekSelect {
    config: MultiWeekConfig,
    state: WeekState,
}

impl MultiWeekSelect {
    /// Attaches to `host`, or returns `None` if the host has no day grid.
    pub fn attach(config: MultiWeekConfig, host: &impl CalendarHost) -> Option<Self> {
        if !host.has_calendar() {
            log::debug!("Calendar-less host, multi-week selection disabled");
            return None;
        }
        if let Err(err) = config.validate() {
            log::warn!("Invalid multi-week config: {err}");
        }
        Some(Self {
            config,
            state: WeekState::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &MultiWeekConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &WeekState {
        &self.state
    }

    /// Runs the handler(s) for `hook`.
    pub fn handle(&mut self, host: &mut impl CalendarHost, hook: Hook) {
        log::trace!("hook {hook:?}");
        match hook {
            Hook::Ready => {
                self.on_ready(host);
                self.highlight_week(host);
            }
            Hook::ValueUpdate | Hook::MonthChange | Hook::YearChange | Hook::Open => {
                self.highlight_week(host);
            }
            Hook::Close | Hook::GridLeave => self.clear_hover(host),
            Hook::Destroy => self.on_destroy(host),
            Hook::DayHover(target) => self.on_day_hover(host, target),
            Hook::WeekOptionSelect(value) => self.on_week_option_select(&value),
        }
    }

    /// Inserts the notice and the selector, and starts listening for hover and change events.
    pub fn on_ready(&mut self, host: &mut impl CalendarHost) {
        if host.has_inner_container() {
            if let Some(text) = &self.config.notice {
                host.insert_notice(selector::notice(text.clone()));
            }
        }

        let (select, initial) = selector::build_week_select(&self.config);
        if initial.is_some() {
            self.state.block_length = initial;
        }
        host.insert_week_select(select);

        self.state.change_listener = Some(host.add_listener(ListenerKind::WeekOptionChange));
        self.state.hover_listener = Some(host.add_listener(ListenerKind::DayHover));
    }

    pub fn on_destroy(&mut self, host: &mut impl CalendarHost) {
        if let Some(id) = self.state.hover_listener.take() {
            host.remove_listener(id);
        }
    }

    /// Recomputes the hover range around the hovered cell and marks it.
    pub fn on_day_hover(&mut self, host: &mut impl CalendarHost, target: Option<usize>) {
        let Some(index) = target else {
            return;
        };
        if !self.state.is_bound() {
            return;
        }
        let Some(range) = compute_range(index, self.state.effective_block_length(), host.days())
        else {
            return;
        };
        self.state.hover_range = Some(range);
        reconcile::apply_hover(range, host.days_mut());
    }

    pub fn on_week_option_select(&mut self, value: &str) {
        let block_length = selector::parse_block_length(value);
        log::debug!("Block length set to {block_length} days");
        self.state.block_length = Some(block_length);
    }

    /// Recomputes the active range if the selection is visible, then marks it.
    pub fn highlight_week(&mut self, host: &mut impl CalendarHost) {
        if let (Some(date), Some(index)) = (host.latest_selected_date(), host.selected_day_index())
        {
            if date.month() == host.current_month() && date.year() == host.current_year() {
                let length = self.state.effective_block_length();
                if let Some(range) = compute_range(index, length, host.days()) {
                    if self.state.active_range != Some(range) {
                        log::debug!("Active range {range}");
                    }
                    self.state.active_range = Some(range);
                }
            }
        }

        let Some(range) = self.state.active_range else {
            return;
        };
        let grid = host.days_mut();
        reconcile::clear_selection(grid);
        reconcile::apply_highlight(range, grid);
    }

    pub fn clear_hover(&mut self, host: &mut impl CalendarHost) {
        self.state.hover_range = None;
        reconcile::clear_hover(host.days_mut());
    }
}
