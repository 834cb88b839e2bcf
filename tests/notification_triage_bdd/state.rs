//! Scenario state and runtime/server initialisation for the notification
//! triage BDD tests.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use mailroom::{
    OctocrabNotificationGateway, PersonalAccessToken, RepositoryLocator, SessionOutcome,
    TriageError, run_session,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use url::Url;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct TriageState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) answers: Slot<String>,
    pub(crate) output: Slot<String>,
    pub(crate) outcome: Slot<SessionOutcome>,
    pub(crate) error: Slot<TriageError>,
}

/// Ensures the runtime and server are initialised in `TriageState`.
pub(crate) fn ensure_runtime_and_server(triage_state: &TriageState) -> SharedRuntime {
    if triage_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        triage_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = triage_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if triage_state.server.with_ref(|_| ()).is_none() {
        triage_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Runs a full session against the mock server with the scripted answers.
///
/// Returns the terminal output alongside the session result.
pub(crate) fn run_triage_session(
    triage_state: &TriageState,
) -> (String, Result<SessionOutcome, TriageError>) {
    let runtime = ensure_runtime_and_server(triage_state);
    let server_url = triage_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"));
    let api_base = Url::parse(&format!("{server_url}/api/v3"))
        .unwrap_or_else(|error| panic!("mock server URL should parse: {error}"));
    let answers = triage_state.answers.get().unwrap_or_default();

    let mut output = Vec::new();
    let result = runtime.block_on(async {
        let locator = RepositoryLocator::with_api_base(api_base, "owner", "repo")?;
        let token = PersonalAccessToken::new("ghp_scenario")?;
        let gateway = OctocrabNotificationGateway::for_token(&token, &locator)?;
        run_session(
            &gateway,
            &locator,
            Cursor::new(answers),
            &mut output,
            session_clock(),
        )
        .await
    });

    let rendered = String::from_utf8(output)
        .unwrap_or_else(|error| panic!("output should be valid UTF-8: {error}"));
    (rendered, result)
}

fn session_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed clock should be a valid instant"))
}
