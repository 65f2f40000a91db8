use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Portfolio;

/// An immutable value of the whole portfolio at one point in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Starts at 0 and grows by one per applied edit.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub portfolio: Portfolio,
}

impl PortfolioSnapshot {
    pub fn initial() -> Self {
        Self {
            revision: 0,
            updated_at: Utc::now(),
            portfolio: Portfolio::default(),
        }
    }

    pub fn succeed(&self, portfolio: Portfolio) -> Self {
        Self {
            revision: self.revision + 1,
            updated_at: Utc::now(),
            portfolio,
        }
    }
}
