//! The elements the extension hands to its host: a notice label and the block length selector.
//!
//! Each element kind has its own constructor returning a concrete value.
//! The host decides how (and where) to draw them.

use crate::config::MultiWeekConfig;
use crate::range::BlockLength;

pub const NOTICE_CLASS: &str = "multi-week-notice";
pub const WEEK_SELECT_CLASS: &str = "multi-week-select";
pub const WEEK_OPTION_CLASS: &str = "multi-week-option";

/// Static advisory text, placed above the calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub class: &'static str,
    pub text: String,
}

/// One entry of a [`WeekSelect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekOption {
    pub class: &'static str,
    pub value: BlockLength,
    pub text: String,
    pub selected: bool,
}

impl WeekOption {
    /// The value as the host's change event reports it.
    #[inline]
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }
}

/// Drop-down of the offered block lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekSelect {
    pub class: &'static str,
    pub options: Vec<WeekOption>,
}

impl WeekSelect {
    pub fn selected(&self) -> Option<&WeekOption> {
        self.options.iter().find(|option| option.selected)
    }

    /// Marks the option with `value` as the only selected one.
    ///
    /// Returns `false` (and changes nothing) if no option has that value.
    pub fn select(&mut self, value: BlockLength) -> bool {
        if !self.options.iter().any(|option| option.value == value) {
            return false;
        }
        for option in &mut self.options {
            option.selected = option.value == value;
        }
        true
    }
}

pub fn notice(text: impl Into<String>) -> Notice {
    Notice {
        class: NOTICE_CLASS,
        text: text.into(),
    }
}

pub fn week_select() -> WeekSelect {
    WeekSelect {
        class: WEEK_SELECT_CLASS,
        options: Vec::new(),
    }
}

pub fn week_option(value: BlockLength) -> WeekOption {
    WeekOption {
        class: WEEK_OPTION_CLASS,
        value,
        text: value.to_string(),
        selected: false,
    }
}

/// Builds the selector for `config`, together with the pre-selected block length.
///
/// The block length is `None` when `current_week` matches no option.
pub fn build_week_select(config: &MultiWeekConfig) -> (WeekSelect, Option<BlockLength>) {
    let mut select = week_select();
    let mut initial = None;
    for (number, value) in (1..).zip(config.block_lengths()) {
        let mut option = week_option(value);
        if number == config.current_week {
            option.selected = true;
            initial = Some(value);
        }
        select.options.push(option);
    }
    (select, initial)
}

/// Interprets the value of a change event on the selector.
///
/// Empty or unusable values fall back to a single week.
pub fn parse_block_length(value: &str) -> BlockLength {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(BlockLength::from_days)
        .unwrap_or_else(|| {
            if !value.is_empty() {
                log::warn!("Ignoring block length {value:?}, using {}", BlockLength::WEEK);
            }
            BlockLength::WEEK
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_multiples_of_seven() {
        let config = MultiWeekConfig::default().week(3).current_week(2);
        let (select, initial) = build_week_select(&config);

        let values: Vec<String> = select.options.iter().map(WeekOption::value_text).collect();
        assert_eq!(values, ["7", "14", "21"]);
        assert!(select.options.iter().all(|o| o.class == WEEK_OPTION_CLASS));
        assert_eq!(select.selected().map(|o| o.text.as_str()), Some("14"));
        assert_eq!(initial.map(BlockLength::days), Some(14));
    }

    #[test]
    fn out_of_range_current_week_selects_nothing() {
        let config = MultiWeekConfig::default().week(2).current_week(5);
        let (select, initial) = build_week_select(&config);
        assert_eq!(select.options.len(), 2);
        assert!(select.selected().is_none());
        assert_eq!(initial, None);
    }

    #[test]
    fn select_moves_the_selection() {
        let (mut select, _) = build_week_select(&MultiWeekConfig::default().week(3));
        let three_weeks = BlockLength::from_weeks(3).expect("three weeks");
        assert!(select.select(three_weeks));
        assert_eq!(select.selected().map(|o| o.value), Some(three_weeks));
        assert_eq!(select.options.iter().filter(|o| o.selected).count(), 1);

        let ten_weeks = BlockLength::from_weeks(10).expect("ten weeks");
        assert!(!select.select(ten_weeks));
        assert_eq!(select.selected().map(|o| o.value), Some(three_weeks));
    }

    #[test]
    fn change_values() {
        assert_eq!(parse_block_length("21").days(), 21);
        assert_eq!(parse_block_length("").days(), 7);
        assert_eq!(parse_block_length("abc").days(), 7);
        assert_eq!(parse_block_length("0").days(), 7);
        assert_eq!(parse_block_length("10").days(), 7);
    }
}
