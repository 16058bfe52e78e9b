//! Employment or project period value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{required_message, ValidationSink, YearMonth};

pub const ACTIVE_WITH_END_DATE_MESSAGE: &str = "継続中の場合、終了日は設定できません。";
pub const END_BEFORE_START_MESSAGE: &str = "終了日は開始日より後の日付を指定してください。";

/// A span of months, either closed or still continuing.
///
/// # Invariants (checked by [`Period::create`])
///
/// - `start_date` is required
/// - continuing periods have no end date
/// - finished periods have an end date not earlier than the start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start_date: Option<YearMonth>,
    end_date: Option<YearMonth>,
    is_active: bool,
}

impl Period {
    /// Validates and builds a period.
    ///
    /// A missing start date is reported alone; the end-date rules are not
    /// evaluated in that case.
    pub fn create(
        sink: &mut dyn ValidationSink,
        start_date: Option<YearMonth>,
        end_date: Option<YearMonth>,
        is_active: bool,
    ) -> Self {
        match (start_date, end_date) {
            (None, _) => sink.add_error("startDate", &required_message("開始日")),
            (Some(_), Some(_)) if is_active => {
                sink.add_error("endDate", ACTIVE_WITH_END_DATE_MESSAGE)
            }
            (Some(_), None) if !is_active => {
                sink.add_error("endDate", &required_message("終了日"))
            }
            (Some(start), Some(end)) if start.is_after(&end) => {
                sink.add_error("endDate", END_BEFORE_START_MESSAGE)
            }
            _ => {}
        }

        Self {
            start_date,
            end_date,
            is_active,
        }
    }

    /// Builds a period from trusted data without checking it.
    pub fn reconstruct(
        start_date: Option<YearMonth>,
        end_date: Option<YearMonth>,
        is_active: bool,
    ) -> Self {
        Self {
            start_date,
            end_date,
            is_active,
        }
    }

    pub fn start_date(&self) -> Option<YearMonth> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<YearMonth> {
        self.end_date
    }

    /// Returns true if the period is still continuing.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the last month covered, `None` meaning unbounded.
    ///
    /// Continuing periods, and finished periods missing an end date, extend
    /// indefinitely.
    fn effective_end(&self) -> Option<YearMonth> {
        if self.is_active {
            None
        } else {
            self.end_date
        }
    }

    /// Checks whether two periods share at least one month.
    ///
    /// Bounds are inclusive, so a period ending in a month overlaps one
    /// starting in that same month. A period without a start date never
    /// overlaps anything.
    pub fn overlaps(&self, other: &Period) -> bool {
        let (Some(self_start), Some(other_start)) = (self.start_date, other.start_date) else {
            return false;
        };

        let self_reaches_other = self.effective_end().map_or(true, |end| end >= other_start);
        let other_reaches_self = other.effective_end().map_or(true, |end| end >= self_start);

        self_reaches_other && other_reaches_self
    }
}
