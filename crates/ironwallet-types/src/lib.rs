//! Iron Wallet Types - Shared domain types
//!
//! This crate contains domain types used across the Iron Wallet client:
//! - Sessions and user profiles
//! - Currencies, investment plans and transactions
//! - Dashboard aggregates and API envelopes

pub mod api;
pub mod auth;
pub mod currency;
pub mod dashboard;
pub mod error;
pub mod investment;
pub mod session;
pub mod timestamp;
pub mod transaction;
pub mod user;

pub use api::*;
pub use auth::*;
pub use currency::*;
pub use dashboard::*;
pub use error::*;
pub use investment::*;
pub use session::*;
pub use transaction::*;
pub use user::*;
