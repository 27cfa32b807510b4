// ============================================================================
// LOGIN VIEWMODEL - Idle → Submitting → {Success, Failure}
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::ApiError;
use crate::router::Route;
use crate::services::{ApiClient, HttpTransport};
use crate::state::AppState;

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_TRANSPORT_ERROR: &str = "An error occurred during login";
pub const MISSING_CREDENTIALS: &str = "Please enter your username and password";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub phase: LoginPhase,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Success,
    Failure(String),
    /// A submission was already in flight
    Ignored,
}

#[derive(Clone, Default)]
pub struct LoginViewModel {
    form: Rc<RefCell<LoginForm>>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> LoginForm {
        self.form.borrow().clone()
    }

    // Input handlers only store the value; no re-render per keystroke
    pub fn set_username(&self, username: &str) {
        self.form.borrow_mut().username = username.to_string();
    }

    pub fn set_password(&self, password: &str) {
        self.form.borrow_mut().password = password.to_string();
    }

    pub fn is_submitting(&self) -> bool {
        self.form.borrow().phase == LoginPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Signing in..."
        } else {
            "Sign In"
        }
    }

    pub fn reset(&self) {
        *self.form.borrow_mut() = LoginForm::default();
    }

    /// Synchronous half of a submit: validates and enters `Submitting`.
    pub fn begin_submit(&self) -> Result<(String, String), LoginOutcome> {
        let mut form = self.form.borrow_mut();
        if form.phase == LoginPhase::Submitting {
            return Err(LoginOutcome::Ignored);
        }
        if form.username.trim().is_empty() || form.password.is_empty() {
            form.error = Some(MISSING_CREDENTIALS.to_string());
            return Err(LoginOutcome::Failure(MISSING_CREDENTIALS.to_string()));
        }
        form.phase = LoginPhase::Submitting;
        form.error = None;
        Ok((form.username.trim().to_string(), form.password.clone()))
    }

    /// Full submit: call the API, persist the session, go to the dashboard.
    pub async fn submit<T: HttpTransport>(
        &self,
        state: &AppState,
        api: &ApiClient<T>,
    ) -> LoginOutcome {
        let (username, password) = match self.begin_submit() {
            Ok(credentials) => credentials,
            Err(LoginOutcome::Ignored) => return LoginOutcome::Ignored,
            Err(outcome) => {
                state.notify_change();
                return outcome;
            }
        };
        state.notify_change();

        log::info!("🔐 [LOGIN] Submitting credentials for {}", username);

        let outcome = match api.login(&username, &password).await {
            Ok(response) if !response.token.trim().is_empty() => {
                match state.session.persist(&response.token, &response.user) {
                    Ok(()) => LoginOutcome::Success,
                    Err(e) => {
                        log::error!("❌ [LOGIN] Could not persist session: {}", e);
                        LoginOutcome::Failure(format!("Could not save your session: {}", e))
                    }
                }
            }
            Ok(_) => {
                log::warn!("⚠️ [LOGIN] Success response without a token");
                LoginOutcome::Failure(LOGIN_FAILED.to_string())
            }
            Err(e) => {
                log::warn!("⚠️ [LOGIN] Login failed: {}", e);
                LoginOutcome::Failure(login_error_message(&e))
            }
        };

        match &outcome {
            LoginOutcome::Success => {
                log::info!("✅ [LOGIN] Signed in, opening dashboard");
                self.reset();
                state.navigate(Route::Dashboard);
            }
            LoginOutcome::Failure(message) => {
                {
                    let mut form = self.form.borrow_mut();
                    form.phase = LoginPhase::Idle;
                    form.error = Some(message.clone());
                }
                state.notify_change();
            }
            LoginOutcome::Ignored => {}
        }

        outcome
    }
}

/// Text shown on the form for a failed login
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { message: Some(message), .. } => message.clone(),
        ApiError::Http { message: None, .. } | ApiError::Decode(_) => LOGIN_FAILED.to_string(),
        ApiError::Network(_) | ApiError::Timeout | ApiError::Serialize(_) => {
            LOGIN_TRANSPORT_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::testing::ScriptedTransport;
    use crate::utils::{KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, USER_KEY};
    use futures::executor::block_on;
    use std::rc::Rc;

    struct Harness {
        state: AppState,
        store: MemoryStore,
        transport: ScriptedTransport,
        api: ApiClient<ScriptedTransport>,
        visited: Rc<RefCell<Vec<Route>>>,
    }

    fn harness() -> Harness {
        let store = MemoryStore::new();
        let state = AppState::new(Rc::new(store.clone()), Route::Login);
        let transport = ScriptedTransport::new();
        let api = ApiClient::with_transport(AppConfig::default(), transport.clone());
        let visited = Rc::new(RefCell::new(Vec::new()));
        {
            let visited = visited.clone();
            let observed = state.clone();
            state.subscribe_to_changes(move || visited.borrow_mut().push(observed.current_route()));
        }
        Harness { state, store, transport, api, visited }
    }

    fn dashboard_visits(h: &Harness) -> usize {
        h.visited
            .borrow()
            .iter()
            .filter(|r| **r == Route::Dashboard)
            .count()
    }

    #[test]
    fn wrong_password_shows_server_error_and_stays() {
        let h = harness();
        h.transport.respond(401, r#"{"error":"Invalid credentials"}"#);
        h.state.login.set_username("admin");
        h.state.login.set_password("wrong");

        let outcome = block_on(h.state.login.submit(&h.state, &h.api));

        assert_eq!(outcome, LoginOutcome::Failure("Invalid credentials".into()));
        let form = h.state.login.snapshot();
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(form.phase, LoginPhase::Idle);
        // Form stays editable with what the user typed
        assert_eq!(form.username, "admin");
        assert!(h.store.is_empty());
        assert_eq!(h.state.current_route(), Route::Login);
        assert_eq!(dashboard_visits(&h), 0);
    }

    #[test]
    fn correct_password_persists_and_navigates_once() {
        let h = harness();
        h.transport.respond(200, r#"{"token":"abc123","user":{"fullName":"Admin User"}}"#);
        h.state.login.set_username("admin");
        h.state.login.set_password("correct");

        let outcome = block_on(h.state.login.submit(&h.state, &h.api));

        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(h.store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
        let user: serde_json::Value =
            serde_json::from_str(&h.store.get(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(user["fullName"], "Admin User");
        assert_eq!(h.state.current_route(), Route::Dashboard);
        assert_eq!(dashboard_visits(&h), 1);
        assert_eq!(h.state.login.snapshot(), LoginForm::default());
    }

    #[test]
    fn non_success_statuses_never_persist() {
        for status in [400u16, 401, 403, 404, 500, 503] {
            let h = harness();
            h.transport.respond(status, "{}");
            h.state.login.set_username("admin");
            h.state.login.set_password("pw");

            let outcome = block_on(h.state.login.submit(&h.state, &h.api));

            assert_eq!(outcome, LoginOutcome::Failure(LOGIN_FAILED.into()), "status {}", status);
            assert!(h.store.is_empty());
            assert_eq!(h.state.current_route(), Route::Login);
        }
    }

    #[test]
    fn network_failure_uses_generic_message() {
        let h = harness();
        h.transport.fail(ApiError::Network("Failed to fetch".into()));
        h.state.login.set_username("admin");
        h.state.login.set_password("pw");

        let outcome = block_on(h.state.login.submit(&h.state, &h.api));
        assert_eq!(outcome, LoginOutcome::Failure(LOGIN_TRANSPORT_ERROR.into()));
        assert!(!h.state.login.is_submitting());
    }

    #[test]
    fn empty_token_counts_as_failure() {
        let h = harness();
        h.transport.respond(200, r#"{"token":"","user":{}}"#);
        h.state.login.set_username("admin");
        h.state.login.set_password("pw");

        let outcome = block_on(h.state.login.submit(&h.state, &h.api));
        assert_eq!(outcome, LoginOutcome::Failure(LOGIN_FAILED.into()));
        assert!(h.store.is_empty());
    }

    #[test]
    fn missing_fields_rejected_without_request() {
        let h = harness();
        h.state.login.set_username("admin");

        let outcome = block_on(h.state.login.submit(&h.state, &h.api));
        assert_eq!(outcome, LoginOutcome::Failure(MISSING_CREDENTIALS.into()));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let vm = LoginViewModel::new();
        vm.set_username("admin");
        vm.set_password("pw");

        assert!(vm.begin_submit().is_ok());
        assert_eq!(vm.button_label(), "Signing in...");
        assert_eq!(vm.begin_submit(), Err(LoginOutcome::Ignored));
    }

    #[test]
    fn new_submit_clears_previous_error() {
        let vm = LoginViewModel::new();
        assert!(vm.begin_submit().is_err());
        assert!(vm.snapshot().error.is_some());

        vm.set_username("admin");
        vm.set_password("pw");
        assert!(vm.begin_submit().is_ok());
        assert_eq!(vm.snapshot().error, None);
    }
}
