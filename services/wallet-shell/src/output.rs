//! Terminal output.

use ironwallet_app::{
    AppError, Location, MenuItem, Notification, Notifier, Resolution, TransactionRow, View,
};
use ironwallet_types::{InvestmentPlan, ProfileSummary};
use serde::Serialize;
use serde_json::json;

/// Prints notifications as they happen.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{notification}");
    }
}

/// Renders views and navigation results.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print any serializable view as JSON.
    pub fn view<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::warn!(error = %e, "Failed to render view"),
        }
    }

    /// Pass a query result through, printing the failure if there is one.
    ///
    /// A 401 has already moved the view to login, so only other failures
    /// are printed here.
    pub fn loaded<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(e) = &result {
            if !e.is_unauthorized() {
                println!("{}", Notification::error(e.user_message("Request failed")));
            }
        }
        result
    }

    pub fn resolution(&self, resolution: &Resolution) {
        if self.json {
            let value = match resolution {
                Resolution::Render(route) => json!({"render": route.path()}),
                Resolution::Redirect { from, to } => json!({"redirect": {"from": from, "to": to.path()}}),
                Resolution::NotFound(path) => json!({"not_found": path}),
            };
            return self.view(&value);
        }
        match resolution {
            Resolution::Render(route) => println!("{} ({})", route.title(), route.path()),
            Resolution::Redirect { from, to } => {
                println!("{from} -> {} ({})", to.path(), to.title())
            }
            Resolution::NotFound(path) => println!("{path}: page not found"),
        }
    }

    pub fn location(&self, location: &Location) {
        match &location.view {
            View::Route(route) if self.json => self.view(&json!({"location": route.path()})),
            View::Route(route) => println!("{} ({})", route.title(), route.path()),
            View::NotFound(path) => println!("{path}: page not found"),
        }
    }

    pub fn user(&self, user: &ProfileSummary) {
        if self.json {
            return self.view(user);
        }
        println!("Signed in as {} ({})", user.name, user.role);
    }

    pub fn whoami(&self, user: Option<&ProfileSummary>, menu: &[MenuItem]) {
        if self.json {
            return self.view(&json!({"user": user, "menu": menu}));
        }
        let Some(user) = user else {
            println!("Not signed in");
            return;
        };
        println!("{} ({})", user.name, user.role);
        if let Some(email) = &user.email {
            println!("{email}");
        }
        for item in menu {
            println!("  {:<18} {}", item.label, item.route.path());
        }
    }

    pub fn plans(&self, plans: &[InvestmentPlan]) {
        if self.json {
            return self.view(&plans);
        }
        for plan in plans {
            let max = plan
                .max_amount
                .filter(|max| *max > 0.0)
                .map_or_else(|| "no limit".to_string(), |max| max.to_string());
            println!(
                "{:<12} {:<20} {:>6}%  {:>4} days  min {} / max {}",
                plan.id, plan.name, plan.rate, plan.duration_days, plan.min_amount, max
            );
        }
    }

    pub fn transactions(&self, rows: &[TransactionRow]) {
        if self.json {
            return self.view(&rows);
        }
        if rows.is_empty() {
            println!("No transactions yet");
        }
        for row in rows {
            println!(
                "{}  {:<10} {:>14} {:<4}  {:<9} {}",
                row.date,
                row.kind.label(),
                row.amount,
                row.currency,
                row.status,
                row.hash.as_deref().unwrap_or("-")
            );
        }
    }
}
