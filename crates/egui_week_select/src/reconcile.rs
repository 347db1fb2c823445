//! Sweeps that keep the [`DayFlags`] of a [`Grid`] in line with a [`DateRange`].
//!
//! Every sweep walks the whole grid. Grids are at most a few dozen cells, so no
//! diffing against the previous state is done.

use crate::grid::{DayFlags, Grid};
use crate::range::DateRange;

/// Marks exactly the cells inside `range` as [`DayFlags::IN_RANGE`].
pub fn apply_hover(range: DateRange, grid: &mut Grid) {
    for cell in grid.cells_mut() {
        cell.flags.set(DayFlags::IN_RANGE, range.contains(cell.date));
    }
}

/// Removes [`DayFlags::IN_RANGE`] from every cell.
#[inline]
pub fn clear_hover(grid: &mut Grid) {
    grid.clear(DayFlags::IN_RANGE);
}

/// Adds [`DayFlags::WEEK`] and [`DayFlags::SELECTED`] to the cells inside `range`.
///
/// Cells outside `range` are left untouched; use [`clear_selection`] first to
/// drop markers of an earlier range.
pub fn apply_highlight(range: DateRange, grid: &mut Grid) {
    for cell in grid.cells_mut() {
        if range.contains(cell.date) {
            cell.flags.insert(DayFlags::WEEK | DayFlags::SELECTED);
        }
    }
}

/// Removes the persistent selection markers from every cell.
#[inline]
pub fn clear_selection(grid: &mut Grid) {
    grid.clear(DayFlags::WEEK | DayFlags::SELECTED);
}
