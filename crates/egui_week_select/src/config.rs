use crate::error::{Error, Result};
use crate::range::BlockLength;

/// Default text of the notice shown above the calendar.
pub const DEFAULT_NOTICE: &str = "All charters start and finish on Saturdays";

/// Configuration of the multi-week selection.
///
/// The block length selector offers `week` options (7, 14, … `7 * week` days),
/// with option number `current_week` (1-based) selected initially.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultiWeekConfig {
    /// How many block lengths to offer.
    pub week: u32,

    /// 1-based index of the option selected initially.
    pub current_week: u32,

    /// Text of the notice label, or `None` for no notice.
    pub notice: Option<String>,
}

impl Default for MultiWeekConfig {
    fn default() -> Self {
        Self {
            week: 1,
            current_week: 1,
            notice: Some(DEFAULT_NOTICE.to_owned()),
        }
    }
}

impl MultiWeekConfig {
    /// Offer block lengths of 1 to `week` weeks. (Default: 1)
    #[inline]
    pub fn week(mut self, week: u32) -> Self {
        self.week = week;
        self
    }

    /// Select the `current_week`-th option initially, counting from 1. (Default: 1)
    #[inline]
    pub fn current_week(mut self, current_week: u32) -> Self {
        self.current_week = current_week;
        self
    }

    /// Change or remove the notice shown above the calendar.
    #[inline]
    pub fn notice(mut self, notice: Option<impl Into<String>>) -> Self {
        self.notice = notice.map(Into::into);
        self
    }

    /// Block lengths offered, in option order.
    pub fn block_lengths(&self) -> impl Iterator<Item = BlockLength> + '_ {
        (1..=self.week).filter_map(BlockLength::from_weeks)
    }

    /// Block length of the initially selected option.
    pub fn default_block_length(&self) -> Option<BlockLength> {
        if (1..=self.week).contains(&self.current_week) {
            BlockLength::from_weeks(self.current_week)
        } else {
            None
        }
    }

    /// Checks that at least one option is offered and `current_week` names one of them.
    ///
    /// # Errors
    /// [`Error::NoWeekOptions`] or [`Error::CurrentWeekOutOfRange`].
    pub fn validate(&self) -> Result<()> {
        if self.week == 0 {
            return Err(Error::NoWeekOptions);
        }
        if !(1..=self.week).contains(&self.current_week) {
            return Err(Error::CurrentWeekOutOfRange {
                week: self.week,
                current_week: self.current_week,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offers_a_single_week() {
        let config = MultiWeekConfig::default();
        assert_eq!(config.block_lengths().collect::<Vec<_>>(), [BlockLength::WEEK]);
        assert_eq!(config.default_block_length(), Some(BlockLength::WEEK));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn three_weeks_second_selected() {
        let config = MultiWeekConfig::default().week(3).current_week(2);
        let days: Vec<u32> = config.block_lengths().map(BlockLength::days).collect();
        assert_eq!(days, [7, 14, 21]);
        assert_eq!(config.default_block_length().map(BlockLength::days), Some(14));
    }

    #[test]
    fn invalid_configs() {
        assert_eq!(
            MultiWeekConfig::default().week(0).validate(),
            Err(Error::NoWeekOptions)
        );
        let config = MultiWeekConfig::default().week(2).current_week(3);
        assert_eq!(
            config.validate(),
            Err(Error::CurrentWeekOutOfRange {
                week: 2,
                current_week: 3
            })
        );
        assert_eq!(config.default_block_length(), None);
    }

    #[test]
    fn notice_can_be_removed() {
        let config = MultiWeekConfig::default().notice(None::<String>);
        assert_eq!(config.notice, None);
    }
}
