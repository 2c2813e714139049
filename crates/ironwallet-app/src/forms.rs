//! Form state and local validation
//!
//! Each form holds the raw text the user typed. `validate` turns it into a
//! request body or a [`ValidationError`] without touching the network;
//! failed validation leaves every field as it was.

use ironwallet_types::{
    ActivateInvestment, Currency, DepositRequest, InvestmentPlan, LoginRequest, ProfileUpdate,
    SignupRequest, UserProfile, ValidationError, WithdrawRequest,
};

/// Parse a user-entered amount.
///
/// Empty, unparseable, non-finite, zero and negative input are all rejected.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok(LoginRequest::new(email, self.password.clone()))
    }
}

/// Signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(SignupRequest {
            name,
            email,
            phone,
            password: self.password.clone(),
        })
    }
}

/// Deposit form.
#[derive(Debug, Clone, Default)]
pub struct DepositForm {
    pub currency: Currency,
    pub amount: String,
}

impl DepositForm {
    pub fn new(currency: Currency, amount: impl Into<String>) -> Self {
        Self {
            currency,
            amount: amount.into(),
        }
    }

    pub fn validate(&self) -> Result<DepositRequest, ValidationError> {
        Ok(DepositRequest {
            currency: self.currency,
            amount: parse_amount(&self.amount)?,
        })
    }

    /// Reset after a successful submission. The currency is kept.
    pub fn clear(&mut self) {
        self.amount.clear();
    }
}

/// Withdrawal form.
#[derive(Debug, Clone, Default)]
pub struct WithdrawForm {
    pub currency: Currency,
    pub amount: String,
    pub address: String,
}

impl WithdrawForm {
    pub fn new(currency: Currency, amount: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            currency,
            amount: amount.into(),
            address: address.into(),
        }
    }

    /// The amount is checked before the address.
    pub fn validate(&self) -> Result<WithdrawRequest, ValidationError> {
        let amount = parse_amount(&self.amount)
            .map_err(|_| ValidationError::InvalidWithdrawAmount)?;
        let address = self.address.trim();
        if address.is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        Ok(WithdrawRequest {
            currency: self.currency,
            amount,
            address: address.to_string(),
        })
    }

    /// Reset after a successful submission. The currency is kept.
    pub fn clear(&mut self) {
        self.amount.clear();
        self.address.clear();
    }
}

/// Investment activation form.
#[derive(Debug, Clone, Default)]
pub struct InvestForm {
    pub plan_id: Option<String>,
    pub amount: String,
    pub currency: Currency,
}

impl InvestForm {
    pub fn new(plan_id: impl Into<String>, amount: impl Into<String>, currency: Currency) -> Self {
        Self {
            plan_id: Some(plan_id.into()),
            amount: amount.into(),
            currency,
        }
    }

    /// Validate against the selected plan's bounds.
    ///
    /// `plan` is the catalog entry for `plan_id`; `None` means nothing is
    /// selected.
    pub fn validate(
        &self,
        plan: Option<&InvestmentPlan>,
    ) -> Result<ActivateInvestment, ValidationError> {
        let Some(plan) = plan else {
            return Err(ValidationError::MissingPlanOrAmount);
        };
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingPlanOrAmount);
        }
        let amount = parse_amount(&self.amount)?;
        plan.check_amount(amount, self.currency)?;

        Ok(ActivateInvestment {
            plan_id: plan.id.clone(),
            amount,
            currency: self.currency,
        })
    }

    /// Reset after a successful submission. Plan and currency are kept.
    pub fn clear(&mut self) {
        self.amount.clear();
    }
}

/// Profile edit form.
///
/// Holds the last fetched values so cancel can restore them.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub draft: ProfileUpdate,
    saved: ProfileUpdate,
    editing: bool,
}

impl ProfileForm {
    /// Load the editable fields of a fetched profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let saved = profile.editable();
        Self {
            draft: saved.clone(),
            saved,
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Discard the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.editing = false;
    }

    /// Accept the profile returned by a successful save and leave edit mode.
    pub fn saved(&mut self, profile: &UserProfile) {
        self.saved = profile.editable();
        self.draft = self.saved.clone();
        self.editing = false;
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        Ok(ProfileUpdate {
            name: required(&self.draft.name, "Name")?,
            phone: self.draft.phone.trim().to_string(),
        })
    }
}
