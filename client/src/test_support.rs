//! Shared fakes for unit tests.

use std::cell::{Cell, RefCell};

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginResponse, RegisterResponse, SignInForm, SignUpForm, UserRecord};

/// Scripted `AuthApi` that records how often each endpoint was called.
#[derive(Default)]
pub struct FakeAuthApi {
    pub login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
    pub register_result: RefCell<Option<Result<RegisterResponse, ApiError>>>,
    pub users_result: RefCell<Option<Result<Vec<UserRecord>, ApiError>>>,
    pub login_calls: Cell<usize>,
    pub register_calls: Cell<usize>,
    pub users_calls: Cell<usize>,
    pub last_register: RefCell<Option<SignUpForm>>,
    pub last_token: RefCell<Option<String>>,
}

impl FakeAuthApi {
    pub fn with_login(result: Result<LoginResponse, ApiError>) -> Self {
        let api = Self::default();
        *api.login_result.borrow_mut() = Some(result);
        api
    }

    pub fn with_register(result: Result<RegisterResponse, ApiError>) -> Self {
        let api = Self::default();
        *api.register_result.borrow_mut() = Some(result);
        api
    }

    pub fn with_users(result: Result<Vec<UserRecord>, ApiError>) -> Self {
        let api = Self::default();
        *api.users_result.borrow_mut() = Some(result);
        api
    }

    pub fn total_calls(&self) -> usize {
        self.login_calls.get() + self.register_calls.get() + self.users_calls.get()
    }
}

fn unscripted() -> ApiError {
    ApiError::Transport("unscripted call".to_owned())
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, _form: &SignInForm) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }

    async fn register(&self, form: &SignUpForm) -> Result<RegisterResponse, ApiError> {
        self.register_calls.set(self.register_calls.get() + 1);
        *self.last_register.borrow_mut() = Some(form.clone());
        self.register_result.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }

    async fn list_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        self.users_calls.set(self.users_calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_owned());
        self.users_result.borrow().clone().unwrap_or_else(|| Err(unscripted()))
    }
}
