//! Career (work history) entity.

use serde::{Deserialize, Serialize};

use super::{CompanyName, Period};
use crate::domain::foundation::{CareerId, ValidationSink, YearMonth};

/// One employment entry of the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    id: CareerId,
    company_name: CompanyName,
    period: Period,
}

impl Career {
    /// Creates a career with a fresh identity, validating every field.
    pub fn create(
        sink: &mut dyn ValidationSink,
        company_name: &str,
        start_date: Option<YearMonth>,
        end_date: Option<YearMonth>,
        is_active: bool,
    ) -> Self {
        Self {
            id: CareerId::new(),
            company_name: CompanyName::create(sink, company_name),
            period: Period::create(sink, start_date, end_date, is_active),
        }
    }

    /// Rehydrates a career from trusted storage (no validation).
    pub fn reconstruct(id: CareerId, company_name: CompanyName, period: Period) -> Self {
        Self {
            id,
            company_name,
            period,
        }
    }

    pub fn id(&self) -> &CareerId {
        &self.id
    }

    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Returns a copy with a new company name.
    pub fn change_company_name(&self, sink: &mut dyn ValidationSink, company_name: &str) -> Self {
        Self {
            company_name: CompanyName::create(sink, company_name),
            ..self.clone()
        }
    }

    /// Returns a copy with a new period.
    pub fn change_period(
        &self,
        sink: &mut dyn ValidationSink,
        start_date: Option<YearMonth>,
        end_date: Option<YearMonth>,
        is_active: bool,
    ) -> Self {
        Self {
            period: Period::create(sink, start_date, end_date, is_active),
            ..self.clone()
        }
    }

    /// Checks whether this career's period shares a month with another's.
    pub fn overlaps(&self, other: &Career) -> bool {
        self.period.overlaps(&other.period)
    }
}
