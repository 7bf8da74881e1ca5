use chrono::NaiveDate;
use watertap_core::api::{UsageRecord, total_water};

use crate::auth::SessionToken;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UsageState {
    #[default]
    Idle,
    Loading {
        date: NaiveDate,
    },
    Loaded {
        date: NaiveDate,
        records: Vec<UsageRecord>,
    },
    Failed {
        date: NaiveDate,
        message: String,
    },
}

impl UsageState {
    pub fn records(&self) -> &[UsageRecord] {
        match self {
            UsageState::Loaded { records, .. } => records,
            _ => &[],
        }
    }
}

/// State of the screen shown after login.
#[derive(Debug)]
pub struct HomeState {
    token: SessionToken,
    pub usage: UsageState,
}

impl HomeState {
    pub fn new(token: SessionToken) -> Self {
        Self {
            token,
            usage: UsageState::Idle,
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Liters used on the loaded day, if any day is loaded.
    pub fn total_water(&self) -> Option<f64> {
        match &self.usage {
            UsageState::Loaded { records, .. } => Some(total_water(records)),
            _ => None,
        }
    }
}
