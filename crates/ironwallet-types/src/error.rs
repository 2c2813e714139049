//! Client-side validation errors

use thiserror::Error;

use crate::Currency;

/// Errors raised by local form validation, before any network call.
///
/// The `Display` text is what the user sees in the notification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Amount missing, unparseable, zero or negative
    #[error("Enter a valid amount")]
    InvalidAmount,

    /// Withdrawal amount missing, unparseable, zero or negative
    #[error("Please enter a valid amount")]
    InvalidWithdrawAmount,

    /// Withdrawal destination missing
    #[error("Please enter a withdrawal address")]
    MissingAddress,

    /// Investment submitted without a plan or an amount
    #[error("Please select a plan and enter an amount")]
    MissingPlanOrAmount,

    /// Amount below the plan's minimum
    #[error("Minimum investment is {min} {currency}")]
    BelowMinimum {
        /// Plan minimum
        min: f64,
        /// Currency selected in the form
        currency: Currency,
    },

    /// Amount above the plan's maximum
    #[error("Maximum investment is {max} {currency}")]
    AboveMaximum {
        /// Plan maximum
        max: f64,
        /// Currency selected in the form
        currency: Currency,
    },

    /// Required text field left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Unsupported currency code
    #[error("unsupported currency: {0}")]
    UnknownCurrency(String),
}
