//! Command definitions and dispatch.

use clap::{Parser, Subcommand};
use ironwallet_app::{
    AppError, DepositForm, InvestForm, LoginForm, ProfileForm, Resolution, Route, SignupForm,
    WalletApp, WithdrawForm,
};
use ironwallet_types::Currency;

use crate::output::Output;

#[derive(Parser)]
#[command(name = "wallet-shell")]
#[command(about = "Iron Wallet client shell", version)]
pub struct Cli {
    /// Print views as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, env = "IRONWALLET_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "IRONWALLET_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the stored credential
    Logout,

    /// Resolve a path the way the client would
    Visit { path: String },

    /// Show the stored identity and menu
    Whoami,

    /// Balances and portfolio overview
    Dashboard,

    /// Investment plan catalog
    Plans,

    /// Activate an investment plan
    Invest {
        plan_id: String,
        amount: String,
        #[arg(long, default_value = "BTC")]
        currency: Currency,
    },

    /// Show the deposit address, or submit a deposit when an amount is given
    Deposit {
        currency: Currency,
        amount: Option<String>,
    },

    /// Request a withdrawal
    Withdraw {
        currency: Currency,
        amount: String,
        address: String,
    },

    /// Transaction history
    Transactions,

    /// Show the full profile
    Profile,

    /// Change name and phone
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Admin statistics
    Admin,
}

impl Command {
    /// View a command opens, if it needs one.
    fn route(&self) -> Option<Route> {
        match self {
            Self::Signup { .. } | Self::Login { .. } | Self::Logout | Self::Visit { .. } => None,
            Self::Whoami => None,
            Self::Dashboard => Some(Route::Dashboard),
            Self::Plans | Self::Invest { .. } => Some(Route::Investments),
            Self::Deposit { .. } => Some(Route::Deposit),
            Self::Withdraw { .. } => Some(Route::Withdraw),
            Self::Transactions => Some(Route::Transactions),
            Self::Profile | Self::UpdateProfile { .. } => Some(Route::Profile),
            Self::Admin => Some(Route::Admin),
        }
    }
}

/// Run one command. Returns `false` when the command did not succeed.
pub async fn run(app: &WalletApp, command: Command, out: &Output) -> bool {
    if let Some(route) = command.route() {
        let resolution = app.visit(route.path());
        if !matches!(resolution, Resolution::Render(_)) {
            out.resolution(&resolution);
            return false;
        }
    }

    match execute(app, command, out).await {
        Ok(()) => true,
        Err(e) => {
            if e.is_unauthorized() {
                out.location(&app.navigator().current());
            }
            false
        }
    }
}

async fn execute(app: &WalletApp, command: Command, out: &Output) -> Result<(), AppError> {
    match command {
        Command::Signup {
            name,
            email,
            phone,
            password,
        } => {
            app.visit(Route::Signup.path());
            let form = SignupForm {
                name,
                email,
                phone: phone.unwrap_or_default(),
                password,
            };
            out.user(&app.signup(&form).await?);
        }
        Command::Login { email, password } => {
            app.visit(Route::Login.path());
            out.user(&app.login(&LoginForm::new(email, password)).await?);
        }
        Command::Logout => {
            app.logout();
            out.location(&app.navigator().current());
        }
        Command::Visit { path } => out.resolution(&app.visit(&path)),
        Command::Whoami => out.whoami(app.session().user().as_ref(), &app.menu()),
        Command::Dashboard => out.view(&out.loaded(app.dashboard().await)?),
        Command::Plans => out.plans(&out.loaded(app.plans().await)?),
        Command::Invest {
            plan_id,
            amount,
            currency,
        } => {
            let plans = out.loaded(app.plans().await)?;
            let mut form = InvestForm::new(plan_id, amount, currency);
            out.view(&app.activate_investment(&mut form, &plans).await?);
        }
        Command::Deposit { currency, amount } => match amount {
            None => out.view(&app.deposit_view(currency)),
            Some(amount) => {
                let mut form = DepositForm::new(currency, amount);
                out.view(&app.deposit(&mut form).await?);
            }
        },
        Command::Withdraw {
            currency,
            amount,
            address,
        } => {
            let mut form = WithdrawForm::new(currency, amount, address);
            out.view(&app.withdraw(&mut form).await?);
        }
        Command::Transactions => out.transactions(&out.loaded(app.transactions().await)?),
        Command::Profile => out.view(&out.loaded(app.profile().await)?),
        Command::UpdateProfile { name, phone } => {
            let profile = out.loaded(app.profile().await)?;
            let mut form = ProfileForm::from_profile(&profile);
            form.begin_edit();
            if let Some(name) = name {
                form.draft.name = name;
            }
            if let Some(phone) = phone {
                form.draft.phone = phone;
            }
            out.view(&app.update_profile(&mut form).await?);
        }
        Command::Admin => out.view(&out.loaded(app.admin().await)?),
    }
    Ok(())
}
