//! User actions
//!
//! [`WalletApp`] wires the session, cached client, navigator and coordinator
//! together and exposes what a user can do. Every action reports its outcome
//! as a notification; failures never propagate further than the returned
//! `Result` and leave form input in place.

use std::sync::Arc;

use ironwallet_client::{
    CacheConfig, CachedWalletClient, ClientConfig, ClientError, CredentialStore, SessionContext,
    WalletClient,
};
use ironwallet_types::{
    AuthResponse, Confirmation, Currency, InvestmentPlan, ProfileSummary, UserProfile,
};
use tracing::{info, instrument, warn};

use crate::coordinator::{EndReason, SessionCoordinator};
use crate::error::AppError;
use crate::forms::{DepositForm, InvestForm, LoginForm, ProfileForm, SignupForm, WithdrawForm};
use crate::guard::RouteGuard;
use crate::navigator::{Navigator, DEFAULT_HISTORY_LIMIT};
use crate::notify::{Notification, Notifier, NotificationLog};
use crate::route::Route;
use crate::router::{NotFoundPolicy, Resolution, ViewRouter};
use crate::views::{
    menu_for, transaction_rows, AdminView, DashboardView, DepositAddresses, DepositView,
    MenuItem, TransactionRow,
};

/// Builder for [`WalletApp`].
pub struct WalletAppBuilder {
    config: ClientConfig,
    store: Option<Arc<dyn CredentialStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    cache: CacheConfig,
    not_found: NotFoundPolicy,
    history_limit: usize,
    deposit_addresses: DepositAddresses,
}

impl WalletAppBuilder {
    /// Persist the session in this store (default: in memory).
    #[must_use]
    pub fn store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Send notifications here (default: a [`NotificationLog`]).
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    #[must_use]
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn deposit_addresses(mut self, addresses: DepositAddresses) -> Self {
        self.deposit_addresses = addresses;
        self
    }

    pub fn build(self) -> Result<WalletApp, ClientError> {
        let session = match self.store {
            Some(store) => SessionContext::new(store),
            None => SessionContext::in_memory(),
        };
        let client = CachedWalletClient::new(
            WalletClient::connect(self.config, session.clone())?,
            self.cache,
        );
        let router =
            ViewRouter::new(RouteGuard::new(session.clone())).with_not_found_policy(self.not_found);
        let navigator = Navigator::with_history_limit(router, self.history_limit);
        let coordinator =
            SessionCoordinator::install(session.clone(), client.clone(), navigator.clone());

        Ok(WalletApp {
            session,
            client,
            navigator,
            coordinator,
            notifier: self
                .notifier
                .unwrap_or_else(|| Arc::new(NotificationLog::new())),
            deposit_addresses: self.deposit_addresses,
        })
    }
}

/// The wallet client application.
#[derive(Clone)]
pub struct WalletApp {
    session: SessionContext,
    client: CachedWalletClient,
    navigator: Navigator,
    coordinator: Arc<SessionCoordinator>,
    notifier: Arc<dyn Notifier>,
    deposit_addresses: DepositAddresses,
}

impl std::fmt::Debug for WalletApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletApp")
            .field("session", &self.session)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}

impl WalletApp {
    /// Start building an app for the given backend.
    pub fn builder(config: ClientConfig) -> WalletAppBuilder {
        WalletAppBuilder {
            config,
            store: None,
            notifier: None,
            cache: CacheConfig::default(),
            not_found: NotFoundPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            deposit_addresses: DepositAddresses::default(),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn client(&self) -> &CachedWalletClient {
        &self.client
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a path through the guard.
    pub fn visit(&self, path: &str) -> Resolution {
        self.navigator.navigate(path)
    }

    /// Menu entries for the signed-in user; empty when anonymous.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.session
            .user()
            .map(|user| menu_for(&user))
            .unwrap_or_default()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in, store the session and land on the dashboard.
    #[instrument(skip_all)]
    pub async fn login(&self, form: &LoginForm) -> Result<ProfileSummary, AppError> {
        let result = async {
            let request = form.validate()?;
            Ok::<_, AppError>(self.client.inner().auth().login(&request).await?)
        }
        .await;
        self.start_session(result, "Login successful!", "Login failed")
    }

    /// Create an account, store the session and land on the dashboard.
    #[instrument(skip_all)]
    pub async fn signup(&self, form: &SignupForm) -> Result<ProfileSummary, AppError> {
        let result = async {
            let request = form.validate()?;
            Ok::<_, AppError>(self.client.inner().auth().signup(&request).await?)
        }
        .await;
        self.start_session(result, "Account created!", "Signup failed")
    }

    fn start_session(
        &self,
        result: Result<AuthResponse, AppError>,
        success: &str,
        fallback: &str,
    ) -> Result<ProfileSummary, AppError> {
        let response = self.report_failure(result, fallback)?;
        let session = response.into_session();
        let user = session.user.clone();

        if let Err(e) = self.session.set(session) {
            warn!(error = %e, "Failed to store session");
            return self.report_failure(Err(e.into()), fallback);
        }
        self.client.invalidate_all();
        info!(user = %user.name, role = ?user.role, "Logged in");

        self.notifier.notify(Notification::success(success));
        self.navigator.navigate_to(Route::Dashboard);
        Ok(user)
    }

    /// Log out and land on the login view.
    pub fn logout(&self) {
        self.coordinator.end_session(EndReason::Logout);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Submit a deposit. Clears the amount on success.
    #[instrument(skip_all, fields(currency = %form.currency))]
    pub async fn deposit(&self, form: &mut DepositForm) -> Result<Confirmation, AppError> {
        let result = async {
            let request = form.validate()?;
            Ok::<_, AppError>(self.client.deposit(&request).await?)
        }
        .await;
        let confirmation = self.report(result, "Deposit request submitted!", "Deposit failed")?;
        form.clear();
        Ok(confirmation)
    }

    /// Submit a withdrawal. Clears amount and address on success.
    #[instrument(skip_all, fields(currency = %form.currency))]
    pub async fn withdraw(&self, form: &mut WithdrawForm) -> Result<Confirmation, AppError> {
        let result = async {
            let request = form.validate()?;
            Ok::<_, AppError>(self.client.withdraw(&request).await?)
        }
        .await;
        let confirmation =
            self.report(result, "Withdrawal request submitted!", "Withdrawal failed")?;
        form.clear();
        Ok(confirmation)
    }

    /// Activate the plan selected in `form`, looked up in `plans`.
    ///
    /// Bounds are checked against the catalog entry before anything is sent.
    #[instrument(skip_all)]
    pub async fn activate_investment(
        &self,
        form: &mut InvestForm,
        plans: &[InvestmentPlan],
    ) -> Result<Confirmation, AppError> {
        let result = async {
            let plan = match form.plan_id.as_deref() {
                Some(id) => Some(
                    plans
                        .iter()
                        .find(|plan| plan.id == id)
                        .ok_or_else(|| AppError::UnknownPlan(id.to_string()))?,
                ),
                None => None,
            };
            let request = form.validate(plan)?;
            Ok::<_, AppError>(self.client.activate_investment(&request).await?)
        }
        .await;
        let confirmation = self.report(
            result,
            "Investment activated successfully!",
            "Failed to activate investment",
        )?;
        form.clear();
        Ok(confirmation)
    }

    /// Save the profile draft and leave edit mode.
    #[instrument(skip_all)]
    pub async fn update_profile(&self, form: &mut ProfileForm) -> Result<UserProfile, AppError> {
        let result = async {
            let update = form.validate()?;
            Ok::<_, AppError>(self.client.update_profile(&update).await?)
        }
        .await;
        let profile = self.report(result, "Profile updated successfully!", "Update failed")?;
        form.saved(&profile);
        Ok(profile)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub async fn profile(&self) -> Result<UserProfile, AppError> {
        Ok(self.client.profile().await?)
    }

    pub async fn dashboard(&self) -> Result<DashboardView, AppError> {
        let stats = self.client.dashboard_stats().await?;
        Ok(DashboardView::from_stats(&stats))
    }

    pub async fn plans(&self) -> Result<Vec<InvestmentPlan>, AppError> {
        Ok(self.client.plans().await?)
    }

    pub async fn transactions(&self) -> Result<Vec<TransactionRow>, AppError> {
        let transactions = self.client.transactions().await?;
        Ok(transaction_rows(&transactions))
    }

    /// Admin statistics, or placeholder zeros while the backend lacks them.
    ///
    /// A 401 still ends the session through the coordinator.
    pub async fn admin(&self) -> Result<AdminView, AppError> {
        match self.client.inner().dashboard().admin_stats().await {
            Ok(stats) => Ok(AdminView::from_stats(stats)),
            Err(e) if e.is_unauthorized() => Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Admin statistics unavailable, showing placeholder");
                Ok(AdminView::placeholder())
            }
        }
    }

    /// Deposit instructions for a currency.
    pub fn deposit_view(&self, currency: Currency) -> DepositView {
        DepositView::new(currency, &self.deposit_addresses)
    }

    fn report<T>(
        &self,
        result: Result<T, AppError>,
        success: &str,
        fallback: &str,
    ) -> Result<T, AppError> {
        let value = self.report_failure(result, fallback)?;
        self.notifier.notify(Notification::success(success));
        Ok(value)
    }

    fn report_failure<T>(
        &self,
        result: Result<T, AppError>,
        fallback: &str,
    ) -> Result<T, AppError> {
        result.map_err(|e| {
            self.notifier.notify(Notification::error(e.user_message(fallback)));
            e
        })
    }
}
