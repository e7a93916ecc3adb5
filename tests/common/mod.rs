#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use webcut::application::services::AccessPolicy;
use webcut::domain::rate_limit::{RateLimitPolicy, RateLimiter};
use webcut::domain::repositories::LinkRepository;
use webcut::domain::settings::{LinkSettings, PathExclusion};
use webcut::infrastructure::persistence::InMemoryLinkRepository;
use webcut::infrastructure::rate_limit::InMemoryRateLimiter;
use webcut::routes::router;
use webcut::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Knobs for an in-memory test application.
pub struct TestApp {
    pub prefix: &'static str,
    pub rate_limit: RateLimitPolicy,
    pub public_create: bool,
    pub behind_proxy: bool,
    pub links: Arc<dyn LinkRepository>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            prefix: "go",
            rate_limit: RateLimitPolicy::new(100, Duration::from_secs(300)),
            public_create: true,
            behind_proxy: true,
            links: Arc::new(InMemoryLinkRepository::new()),
        }
    }
}

impl TestApp {
    pub fn state(&self) -> AppState {
        self.state_with_limiter(Arc::new(InMemoryRateLimiter::new(self.rate_limit)))
    }

    pub fn state_with_limiter(&self, limiter: Arc<dyn RateLimiter>) -> AppState {
        AppState::new(
            self.links.clone(),
            limiter,
            LinkSettings::new(BASE_URL, self.prefix),
            PathExclusion::default(),
            AccessPolicy::new(self.public_create, Some(ADMIN_TOKEN)).unwrap(),
            self.behind_proxy,
        )
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(router(self.state())).unwrap()
    }
}

pub fn server() -> TestServer {
    TestApp::default().server()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Inserts a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer(pub SocketAddr);

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.0,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}

/// Router whose every request appears to come from `addr`.
pub fn router_from_peer(state: AppState, addr: &str) -> Router {
    router(state).layer(MockConnectInfoLayer(addr.parse().unwrap()))
}
