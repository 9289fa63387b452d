//! Shared fakes and stack wiring for the integration suites.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use clinic_client::{
    ApiConfig, ApiError, ApiRequest, ApiResponse, CookieTokenStore, HttpTransport, Navigator,
    RequestAuthorizer, SessionService,
};

/// Scripted transport: hands out queued outcomes in order and records every
/// request it was asked to send.
pub struct FakeTransport {
    outcomes: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn enqueue_ok(&self, status: u16, body: serde_json::Value) {
        self.outcomes.lock().push_back(Ok(ApiResponse { status, body }));
    }

    pub fn enqueue_err(&self, error: ApiError) {
        self.outcomes.lock().push_back(Err(error));
    }

    /// Requests seen so far, oldest first.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().push(request);
        self.outcomes.lock().pop_front().unwrap_or_else(|| {
            Ok(ApiResponse {
                status: 200,
                body: serde_json::json!({ "success": true }),
            })
        })
    }
}

/// Counts navigation side effects instead of routing anywhere.
#[derive(Default)]
pub struct RecordingNavigator {
    to_login: AtomicUsize,
    to_dashboard: AtomicUsize,
}

impl RecordingNavigator {
    pub fn login_navigations(&self) -> usize {
        self.to_login.load(Ordering::SeqCst)
    }

    pub fn dashboard_navigations(&self) -> usize {
        self.to_dashboard.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.to_login.fetch_add(1, Ordering::SeqCst);
    }

    fn to_dashboard(&self) {
        self.to_dashboard.fetch_add(1, Ordering::SeqCst);
    }
}

/// Full client stack over a scripted transport.
pub struct TestStack {
    pub config: Arc<ApiConfig>,
    pub store: Arc<CookieTokenStore>,
    pub session: Arc<SessionService>,
    pub navigator: Arc<RecordingNavigator>,
    pub wire: Arc<FakeTransport>,
    pub authorized: Arc<dyn HttpTransport>,
}

pub fn test_stack() -> TestStack {
    let config = Arc::new(ApiConfig::new(Url::parse("http://localhost:3000").unwrap()));
    let store: Arc<CookieTokenStore> = Arc::new(CookieTokenStore::new());
    let wire = FakeTransport::new();
    let navigator = Arc::new(RecordingNavigator::default());

    let session = Arc::new(SessionService::new(
        store.clone(),
        wire.clone() as Arc<dyn HttpTransport>,
        config.clone(),
    ));
    let authorized: Arc<dyn HttpTransport> = Arc::new(RequestAuthorizer::new(
        wire.clone(),
        session.clone(),
        config.clone(),
        navigator.clone(),
    ));

    TestStack {
        config,
        store,
        session,
        navigator,
        wire,
        authorized,
    }
}
