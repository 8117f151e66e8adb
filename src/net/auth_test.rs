use super::*;
use crate::state::session::SessionStatus;
use crate::util::credentials::MemoryCredentials;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

/// Scripted login behavior for the fake transport.
#[derive(Clone)]
enum LoginBehavior {
    Ok(&'static str),
    Rejected(Option<&'static str>),
    Transport,
}

/// In-memory `AuthApi` double. Validation calls are counted; when gates are
/// queued, each validate call awaits the next gate so tests can control
/// completion order.
#[derive(Clone)]
struct FakeApi {
    login: LoginBehavior,
    validate_ok: bool,
    logout_fails: bool,
    validate_calls: Rc<Cell<usize>>,
    validate_gates: Rc<RefCell<VecDeque<oneshot::Receiver<bool>>>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            login: LoginBehavior::Ok("csrf-tok"),
            validate_ok: true,
            logout_fails: false,
            validate_calls: Rc::new(Cell::new(0)),
            validate_gates: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    fn gate_validate(&self) -> oneshot::Sender<bool> {
        let (tx, rx) = oneshot::channel();
        self.validate_gates.borrow_mut().push_back(rx);
        tx
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        match self.login {
            LoginBehavior::Ok(token) => Ok(LoginResponse {
                csrf_token: token.to_owned(),
            }),
            LoginBehavior::Rejected(message) => Err(ApiError::Rejected {
                status: 401,
                message: message.map(ToOwned::to_owned),
            }),
            LoginBehavior::Transport => Err(ApiError::Transport),
        }
    }

    async fn register(
        &self,
        _username: &str,
        _password: &str,
        _email: &str,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn validate(&self, _username: &str, _csrf_token: &str) -> Result<(), ApiError> {
        self.validate_calls.set(self.validate_calls.get() + 1);
        let gate = self.validate_gates.borrow_mut().pop_front();
        let ok = match gate {
            Some(rx) => rx.await.unwrap_or(false),
            None => self.validate_ok,
        };
        if ok {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: 401,
                message: None,
            })
        }
    }

    async fn logout(&self, _username: &str, _csrf_token: &str) -> Result<(), ApiError> {
        if self.logout_fails {
            Err(ApiError::Transport)
        } else {
            Ok(())
        }
    }
}

fn client_with(api: FakeApi) -> AuthClient<FakeApi, MemoryCredentials> {
    AuthClient::new(api, MemoryCredentials::default(), Session::new())
}

// =============================================================
// validate_session
// =============================================================

#[test]
fn validate_without_session_cookie_skips_network() {
    let api = FakeApi::new();
    let client = client_with(api.clone());

    let ok = block_on(client.validate_session("alice"));

    assert!(!ok);
    assert_eq!(api.validate_calls.get(), 0);
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);
}

#[test]
fn validate_with_session_cookie_hits_network() {
    let api = FakeApi::new();
    let client = client_with(api.clone());
    client.store().set_cookie(SESSION_COOKIE, "opaque");
    client.store().set_cookie(CSRF_COOKIE, "tok");

    let ok = block_on(client.validate_session("alice"));

    assert!(ok);
    assert_eq!(api.validate_calls.get(), 1);
    assert_eq!(client.session().status(), SessionStatus::Authenticated);
    assert_eq!(client.session().username().as_deref(), Some("alice"));
}

#[test]
fn rejected_validation_is_a_plain_false() {
    let mut api = FakeApi::new();
    api.validate_ok = false;
    let client = client_with(api);
    client.store().set_cookie(SESSION_COOKIE, "opaque");

    let ok = block_on(client.validate_session("alice"));

    assert!(!ok);
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_identity_and_csrf() {
    let client = client_with(FakeApi::new());

    let token = block_on(client.login("alice", "hunter2")).expect("login");

    assert_eq!(token, "csrf-tok");
    assert_eq!(client.store().cookie(CSRF_COOKIE).as_deref(), Some("csrf-tok"));
    assert_eq!(client.store().username().as_deref(), Some("alice"));
    assert_eq!(client.session().status(), SessionStatus::Authenticated);
}

#[test]
fn login_round_trip_validates() {
    let client = client_with(FakeApi::new());

    let token = block_on(client.login("alice", "hunter2")).expect("login");
    // The server would also have set the opaque session cookie.
    client.store().set_cookie(SESSION_COOKIE, "opaque");

    assert_eq!(client.store().cookie(CSRF_COOKIE), Some(token));
    assert!(block_on(client.validate_session("alice")));
    assert!(client.session().is_authenticated());
}

#[test]
fn login_rejection_uses_server_message() {
    let mut api = FakeApi::new();
    api.login = LoginBehavior::Rejected(Some("bad credentials"));
    let client = client_with(api);

    let err = block_on(client.login("alice", "nope")).expect_err("rejected");

    assert_eq!(err.reason, "bad credentials");
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);
    assert!(client.store().username().is_none());
    assert!(client.store().cookie(CSRF_COOKIE).is_none());
}

#[test]
fn login_rejection_without_body_falls_back() {
    let mut api = FakeApi::new();
    api.login = LoginBehavior::Rejected(None);
    let client = client_with(api);

    let err = block_on(client.login("alice", "nope")).expect_err("rejected");
    assert_eq!(err.reason, "Login failed");
}

#[test]
fn login_transport_failure_reads_as_network_error() {
    let mut api = FakeApi::new();
    api.login = LoginBehavior::Transport;
    let client = client_with(api);

    let err = block_on(client.login("alice", "hunter2")).expect_err("transport");
    assert_eq!(err.reason, "Network error");
}

// =============================================================
// register
// =============================================================

#[test]
fn register_leaves_state_and_credentials_untouched() {
    let client = client_with(FakeApi::new());

    block_on(client.register("alice", "hunter2")).expect("register");

    assert_eq!(client.session().status(), SessionStatus::Unknown);
    assert!(client.store().username().is_none());
    assert!(client.store().cookie(CSRF_COOKIE).is_none());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_cleans_up_even_when_request_fails() {
    let mut api = FakeApi::new();
    api.logout_fails = true;
    let client = client_with(api);
    client.store().set_cookie(SESSION_COOKIE, "opaque");
    client.store().set_cookie(CSRF_COOKIE, "tok");
    client.store().set_username("alice");
    block_on(client.validate_session("alice"));
    assert!(client.session().is_authenticated());

    let continued = Rc::new(Cell::new(false));
    let flag = continued.clone();
    block_on(client.logout("alice", move || flag.set(true)));

    assert!(continued.get());
    assert!(client.store().cookie(SESSION_COOKIE).is_none());
    assert!(client.store().cookie(CSRF_COOKIE).is_none());
    assert!(client.store().username().is_none());
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);
}

// =============================================================
// overlapping checks
// =============================================================

#[test]
fn overlapping_checks_keep_last_initiated_outcome() {
    let api = FakeApi::new();
    let client = client_with(api.clone());
    client.store().set_cookie(SESSION_COOKIE, "opaque");

    let first_gate = api.gate_validate();
    let second_gate = api.gate_validate();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let c1 = client.clone();
    let c2 = client.clone();
    spawner
        .spawn_local(async move {
            c1.validate_session("alice").await;
        })
        .expect("spawn first check");
    pool.run_until_stalled();
    spawner
        .spawn_local(async move {
            c2.validate_session("alice").await;
        })
        .expect("spawn second check");
    pool.run_until_stalled();
    assert_eq!(api.validate_calls.get(), 2);

    // The second (later) check resolves first, unauthenticated.
    second_gate.send(false).expect("resolve second");
    pool.run_until_stalled();
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);

    // The stale first check resolves authenticated and must be dropped.
    first_gate.send(true).expect("resolve first");
    pool.run_until_stalled();
    assert_eq!(client.session().status(), SessionStatus::Unauthenticated);
}

#[test]
fn stale_check_does_not_clobber_fresh_login() {
    let api = FakeApi::new();
    let client = client_with(api.clone());
    client.store().set_cookie(SESSION_COOKIE, "opaque");

    let gate = api.gate_validate();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let checker = client.clone();
    spawner
        .spawn_local(async move {
            checker.validate_session("alice").await;
        })
        .expect("spawn check");
    pool.run_until_stalled();

    // A login completes while the check is still in flight.
    block_on(client.login("alice", "hunter2")).expect("login");
    assert!(client.session().is_authenticated());

    // The older check resolves unauthenticated and must be dropped.
    gate.send(false).expect("resolve check");
    pool.run_until_stalled();
    assert!(client.session().is_authenticated());
}
