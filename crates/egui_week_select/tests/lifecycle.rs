use chrono::{NaiveDate, Weekday};
use egui_week_select::{
    BlockLength, DEFAULT_NOTICE, DayFlags, Error, ListenerKind, MonthView, MultiWeekConfig,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn indices(from: usize, to: usize) -> Vec<usize> {
    (from..=to).collect()
}

fn may_2024(config: MultiWeekConfig) -> MonthView {
    MonthView::new(config, 2024, 5).expect("valid month")
}

#[test]
fn ready_inserts_notice_and_selector() {
    let view = may_2024(MultiWeekConfig::default().week(3).current_week(2));
    let calendar = view.calendar();

    assert_eq!(calendar.notice().map(|n| n.text.as_str()), Some(DEFAULT_NOTICE));
    let select = calendar.week_select().expect("selector mounted");
    let values: Vec<u32> = select.options.iter().map(|o| o.value.days()).collect();
    assert_eq!(values, [7, 14, 21]);
    assert_eq!(select.selected().map(|o| o.value.days()), Some(14));
    assert_eq!(view.block_length().days(), 14);

    assert!(calendar.is_listening(ListenerKind::DayHover));
    assert!(calendar.is_listening(ListenerKind::WeekOptionChange));
}

#[test]
fn default_config_offers_one_week() {
    let view = may_2024(MultiWeekConfig::default());
    let select = view.calendar().week_select().expect("selector mounted");
    assert_eq!(select.options.len(), 1);
    assert_eq!(view.block_length(), BlockLength::WEEK);
}

#[test]
fn hover_in_a_six_row_month() {
    // September 2024 spans six Monday-based weeks.
    let mut view = MonthView::new(MultiWeekConfig::default(), 2024, 9).expect("valid month");
    assert_eq!(view.grid().len(), 42);

    view.hover(Some(10));
    let range = view.hovered_range().expect("hovering a day");
    assert_eq!(range.start, view.grid().cells()[7].date);
    assert_eq!(range.end, view.grid().cells()[13].date);
    assert_eq!(view.grid().indices_with(DayFlags::IN_RANGE), indices(7, 13));
}

#[test]
fn nothing_selected_nothing_highlighted() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.open();
    view.step_months(1).expect("valid month");
    view.step_months(-2).expect("valid month");
    assert!(view.grid().indices_with(DayFlags::SELECTED).is_empty());
    assert_eq!(view.active_range(), None);
}

#[test]
fn selection_highlights_and_survives_navigation() {
    let mut view = may_2024(MultiWeekConfig::default().week(2).current_week(2));

    // May 29th sits on the last row of May; the block runs into June.
    view.select_date(date(2024, 5, 29)).expect("valid month");
    let range = view.active_range().expect("date selected");
    assert_eq!(range.start, date(2024, 5, 27));
    assert_eq!(range.end, date(2024, 6, 9));
    assert_eq!(view.grid().indices_with(DayFlags::WEEK), indices(28, 34));

    // June starts with the same week, so the rest of the block shows there.
    view.step_months(1).expect("valid month");
    assert_eq!(view.active_range(), Some(range));
    assert_eq!(
        view.grid().indices_with(DayFlags::WEEK | DayFlags::SELECTED),
        indices(0, 13)
    );
}

#[test]
fn selecting_a_padding_day_switches_month() {
    let mut view = may_2024(MultiWeekConfig::default().week(2).current_week(2));
    view.select_date(date(2024, 4, 29)).expect("valid month");

    assert_eq!(view.calendar().month(), 4);
    let range = view.active_range().expect("date selected");
    assert_eq!(range.start, date(2024, 4, 29));
    assert_eq!(range.end, date(2024, 5, 12));
}

#[test]
fn new_selection_replaces_old_markers() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.select_date(date(2024, 5, 8)).expect("valid month");
    view.select_date(date(2024, 5, 22)).expect("valid month");
    assert_eq!(view.grid().indices_with(DayFlags::WEEK), indices(21, 27));
}

#[test]
fn year_change_keeps_the_range() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.select_date(date(2024, 5, 8)).expect("valid month");
    let range = view.active_range();

    view.step_months(-5).expect("valid month");
    assert_eq!((view.calendar().year(), view.calendar().month()), (2023, 12));
    assert_eq!(view.active_range(), range);
    assert!(view.grid().indices_with(DayFlags::WEEK).is_empty());
}

#[test]
fn chosen_block_length_drives_hover() {
    let mut view = may_2024(MultiWeekConfig::default().week(3));
    let three_weeks = BlockLength::from_weeks(3).expect("three weeks");
    view.choose_block_length(three_weeks);

    assert_eq!(view.block_length(), three_weeks);
    let select = view.calendar().week_select().expect("selector mounted");
    assert_eq!(select.selected().map(|o| o.value), Some(three_weeks));

    view.hover(Some(3));
    assert_eq!(view.hovered_range().map(|r| r.num_days()), Some(21));
    assert_eq!(view.grid().indices_with(DayFlags::IN_RANGE), indices(0, 20));
}

#[test]
fn close_and_leave_clear_hover() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.open();
    view.hover(Some(12));
    view.leave_grid();
    assert!(view.grid().indices_with(DayFlags::IN_RANGE).is_empty());

    view.hover(Some(12));
    view.close();
    assert!(!view.calendar().is_open());
    assert!(view.grid().indices_with(DayFlags::IN_RANGE).is_empty());
}

#[test]
fn hover_outside_the_days_is_ignored() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.hover(Some(0));
    view.hover(None);
    assert_eq!(view.grid().indices_with(DayFlags::IN_RANGE), indices(0, 6));
}

#[test]
fn destroy_stops_hover() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.destroy();
    assert!(!view.calendar().is_listening(ListenerKind::DayHover));

    view.hover(Some(3));
    assert!(view.grid().indices_with(DayFlags::IN_RANGE).is_empty());
}

#[test]
fn blocks_start_on_the_configured_weekday() {
    let mut view =
        MonthView::with_week_start(MultiWeekConfig::default(), 2024, 6, Weekday::Sat)
            .expect("valid month");
    view.hover(Some(3));
    let range = view.hovered_range().expect("hovering a day");
    assert_eq!(range.start, date(2024, 6, 1));
    assert_eq!(range.end, date(2024, 6, 7));
}

#[test]
fn invalid_month() {
    assert_eq!(
        MonthView::new(MultiWeekConfig::default(), 2024, 13).err(),
        Some(Error::InvalidMonth {
            year: 2024,
            month: 13
        })
    );
}

#[test]
fn navigation_drops_the_hover_of_the_old_grid() {
    let mut view = may_2024(MultiWeekConfig::default());
    view.hover(Some(0));
    assert_eq!(view.grid().indices_with(DayFlags::IN_RANGE), indices(0, 6));

    // Clicking a padding day rebuilds the grid for April.
    view.select_date(date(2024, 4, 29)).expect("valid month");
    assert_eq!(view.hovered_range(), None);
    assert!(view.grid().indices_with(DayFlags::IN_RANGE).is_empty());

    // The pointer is reported again over the new grid.
    view.hover(Some(28));
    let range = view.hovered_range().expect("hovering a day");
    assert_eq!(range.start, date(2024, 4, 29));
    assert_eq!(view.grid().indices_with(DayFlags::IN_RANGE), indices(28, 34));
}

#[test]
fn returning_to_the_selection_recomputes_and_open_reapplies() {
    let mut view = may_2024(MultiWeekConfig::default().week(2).current_week(2));
    view.select_date(date(2024, 5, 15)).expect("valid month");
    assert_eq!(view.grid().indices_with(DayFlags::WEEK), indices(14, 27));

    view.step_months(1).expect("valid month");
    view.choose_block_length(BlockLength::WEEK);
    view.step_months(-1).expect("valid month");

    // Back in May the range is rebuilt around May 15th with the new length.
    let range = view.active_range().expect("date selected");
    assert_eq!(range.start, date(2024, 5, 13));
    assert_eq!(range.end, date(2024, 5, 19));

    view.open();
    assert_eq!(
        view.grid().indices_with(DayFlags::WEEK | DayFlags::SELECTED),
        indices(14, 20)
    );
    assert!(view.grid().indices_with(DayFlags::WEEK).iter().all(|&i| i <= 20));
}

#[test]
fn lengths_not_offered_are_ignored() {
    let mut view = may_2024(MultiWeekConfig::default().week(2));
    view.choose_block_length(BlockLength::from_weeks(5).expect("five weeks"));
    assert_eq!(view.block_length(), BlockLength::WEEK);
}
