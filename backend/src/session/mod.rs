//! Demo session: the chosen role and display currency.
//!
//! There is no credential check. Picking a role in the login flow is what
//! "logged in" means here; the role and currency survive restarts through a
//! [`Storage`] backend and nothing else does.

pub mod login;
pub mod storage;

use serde::Serialize;
use thiserror::Error;

use crate::models::{Currency, Role};
use crate::routes::Route;
pub use login::LoginStep;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

pub const ROLE_KEY: &str = "role";
pub const CURRENCY_KEY: &str = "currency";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("login flow expects the {expected:?} step")]
    WrongStep { expected: LoginStep },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Mock balances shown for the selected currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub currency: Currency,
    pub balance: f64,
    pub available: f64,
}

impl Wallet {
    pub fn for_currency(currency: Currency) -> Self {
        let (balance, available) = match currency {
            Currency::Rub => (1_254_300.0, 482_100.0),
            Currency::Usd => (13_850.0, 5_320.0),
            Currency::Eur => (12_740.0, 4_890.0),
        };
        Self { currency, balance, available }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub role: Option<Role>,
    pub is_authenticated: bool,
    pub login_step: LoginStep,
    pub wallet: Wallet,
}

pub struct SessionContext {
    storage: Box<dyn Storage>,
    role: Option<Role>,
    currency: Currency,
    login_step: LoginStep,
}

impl SessionContext {
    /// Restores role and currency from storage. Unrecognized stored values count as absent.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let role = storage.get(ROLE_KEY).as_deref().and_then(Role::parse);
        let currency = storage
            .get(CURRENCY_KEY)
            .as_deref()
            .and_then(Currency::parse)
            .unwrap_or_default();
        Self { storage, role, currency, login_step: LoginStep::Email }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn login_step(&self) -> LoginStep {
        self.login_step
    }

    pub fn wallet(&self) -> Wallet {
        Wallet::for_currency(self.currency)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            role: self.role,
            is_authenticated: self.is_authenticated(),
            login_step: self.login_step,
            wallet: self.wallet(),
        }
    }

    /// Stores or clears the role and returns the page to navigate to.
    pub fn set_role(&mut self, role: Option<Role>) -> Result<Route, SessionError> {
        match role {
            Some(r) => self.storage.set(ROLE_KEY, r.as_str())?,
            None => self.storage.remove(ROLE_KEY)?,
        }
        self.role = role;
        log::info!("Session role set to {:?}", role);
        Ok(Route::for_role(role))
    }

    pub fn logout(&mut self) -> Result<Route, SessionError> {
        self.login_step = LoginStep::Email;
        self.set_role(None)
    }

    pub fn set_currency(&mut self, currency: Currency) -> Result<(), SessionError> {
        self.storage.set(CURRENCY_KEY, currency.as_str())?;
        self.currency = currency;
        Ok(())
    }

    /// First login step. The address is validated but never stored.
    pub fn submit_email(&mut self, email: &str) -> Result<(), SessionError> {
        if self.login_step != LoginStep::Email {
            return Err(SessionError::WrongStep { expected: self.login_step });
        }
        login::validate_email(email)?;
        self.login_step = LoginStep::Role;
        Ok(())
    }

    /// Second login step: applying the role is the whole sign-in.
    pub fn choose_role(&mut self, role: Role) -> Result<Route, SessionError> {
        self.choose_role_with(role, |_| Ok::<(), SessionError>(()))
            .map(|(route, ())| route)
    }

    /// Second login step with a credential issued for the role.
    ///
    /// `issue` runs before anything is stored; if it fails the session is
    /// left exactly as it was.
    pub fn choose_role_with<T, E>(
        &mut self,
        role: Role,
        issue: impl FnOnce(Role) -> Result<T, E>,
    ) -> Result<(Route, T), E>
    where
        E: From<SessionError>,
    {
        if self.login_step != LoginStep::Role {
            return Err(SessionError::WrongStep { expected: self.login_step }.into());
        }
        let credential = issue(role)?;
        let route = self.set_role(Some(role))?;
        self.login_step = LoginStep::Email;
        Ok((route, credential))
    }
}
