//! Investment plan types

use serde::{Deserialize, Serialize};

use crate::{Currency, ValidationError};

/// A fixed-term plan from the `GET /investment-plans` catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Plan ID
    pub id: String,
    /// Plan name
    pub name: String,
    /// Marketing description
    #[serde(default)]
    pub description: String,
    /// Return rate in percent
    #[serde(alias = "percentage")]
    pub rate: f64,
    /// Minimum accepted amount
    pub min_amount: f64,
    /// Maximum accepted amount, unbounded when absent
    #[serde(default)]
    pub max_amount: Option<f64>,
    /// Term length in days
    #[serde(alias = "duration")]
    pub duration_days: u32,
}

impl InvestmentPlan {
    /// Check an amount against this plan's bounds.
    ///
    /// A zero or missing maximum is treated as unbounded.
    pub fn check_amount(&self, amount: f64, currency: Currency) -> Result<(), ValidationError> {
        if amount < self.min_amount {
            return Err(ValidationError::BelowMinimum {
                min: self.min_amount,
                currency,
            });
        }
        if let Some(max) = self.max_amount.filter(|max| *max > 0.0) {
            if amount > max {
                return Err(ValidationError::AboveMaximum { max, currency });
            }
        }
        Ok(())
    }
}

/// Body of `POST /investments/activate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivateInvestment {
    /// Plan to activate
    pub plan_id: String,
    /// Amount to lock in the plan
    pub amount: f64,
    /// Currency debited
    pub currency: Currency,
}
