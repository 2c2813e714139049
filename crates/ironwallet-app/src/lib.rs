//! Iron Wallet App
//!
//! Session-gated navigation and user actions on top of `ironwallet-client`.
//!
//! # Overview
//!
//! - **Routes**: the static table of views, each public or protected
//! - **Guard**: renders protected views only while a credential is stored
//! - **Router / Navigator**: resolve paths to views and keep back-history
//! - **Coordinator**: ends the session on logout or on any backend 401
//! - **Actions**: login, signup, deposits, withdrawals, investments, profile
//!
//! # Quick Start
//!
//! ```ignore
//! use ironwallet_app::{LoginForm, WalletApp};
//! use ironwallet_client::ClientConfig;
//!
//! let app = WalletApp::builder(ClientConfig::from_env()?).build()?;
//!
//! app.visit("/dashboard"); // redirects to /login while anonymous
//! app.login(&LoginForm::new("a@b.co", "secret")).await?;
//! let view = app.dashboard().await?;
//! ```

pub mod actions;
pub mod coordinator;
pub mod error;
pub mod forms;
pub mod guard;
pub mod navigator;
pub mod notify;
pub mod route;
pub mod router;
pub mod views;

pub use actions::{WalletApp, WalletAppBuilder};
pub use coordinator::{EndReason, SessionCoordinator};
pub use error::AppError;
pub use forms::{DepositForm, InvestForm, LoginForm, ProfileForm, SignupForm, WithdrawForm};
pub use guard::{GuardDecision, RouteGuard};
pub use navigator::{Location, Navigator, View};
pub use notify::{Level, Notification, NotificationLog, Notifier};
pub use route::{Access, Route};
pub use router::{NotFoundPolicy, Resolution, ViewRouter};
pub use views::{
    AdminView, DashboardView, DepositAddresses, DepositView, MenuItem, TransactionRow,
};
