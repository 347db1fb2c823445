//! Multi-week block selection for month calendar grids.
//!
//! Hovering or selecting a day highlights the block of 7, 14, 21, … days that
//! starts on the first day of its week row. The block length is picked from a
//! selector with one option per offered number of weeks.
//!
//! The logic works against any calendar implementing [`CalendarHost`]. [`MonthView`]
//! is a ready-made host, drawn with [`egui`](https://github.com/emilk/egui) when the
//! `egui` feature is enabled.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod config;
mod error;
pub mod grid;
mod host;
mod month_view;
mod plugin;
pub mod range;
pub mod reconcile;
pub mod selector;

pub use crate::config::{DEFAULT_NOTICE, MultiWeekConfig};
pub use crate::error::{Error, Result};
pub use crate::grid::{DAYS_IN_WEEK, DayCell, DayFlags, Grid};
pub use crate::host::{CalendarHost, ListenerId, ListenerKind};
pub use crate::month_view::{MonthCalendar, MonthView};
pub use crate::plugin::{Hook, MultiWeekSelect, WeekState};
pub use crate::range::{BlockLength, DateRange, compute_range};
