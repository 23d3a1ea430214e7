//! HTTP retrieval of the raw listing body.
//!
//! The [`Fetcher`] performs a single GET with bounded connect and read
//! timeouts. Only `200 OK` counts as success. Every failure is logged and
//! turned into `None` by [`Fetcher::fetch`]; [`Fetcher::try_fetch`] keeps the
//! failure kind for callers that want it.
//!
//! The response (and with it the pooled connection) is owned by the fetch
//! call and released on every exit path, including early returns and an
//! aborted future.

use crate::error::FetchError;
use crate::notify::Notifier;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};
use url::Url;

/// Connect timeout applied when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
/// Read timeout applied when none is configured.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Timeouts for the listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// Performs the GET for a listing URL.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher with its own connection pool.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url_text` and return the body, or the reason it failed.
    ///
    /// A malformed URL is rejected before any network activity.
    #[instrument(level = "info", skip_all, fields(url = %url_text))]
    pub async fn try_fetch(&self, url_text: &str) -> Result<String, FetchError> {
        let url = Url::parse(url_text)?;

        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Fetched news listing"
        );
        Ok(body)
    }

    /// Fetch `url_text`, reporting any failure and returning `None` for it.
    ///
    /// URL and network failures are also sent to `notifier`; a non-200
    /// status is only logged.
    pub async fn fetch(&self, url_text: &str, notifier: &dyn Notifier) -> Option<String> {
        match self.try_fetch(url_text).await {
            Ok(body) => Some(body),
            Err(e) => {
                report(url_text, &e, notifier);
                None
            }
        }
    }
}

fn report(url_text: &str, e: &FetchError, notifier: &dyn Notifier) {
    match e {
        FetchError::InvalidUrl(_) => {
            error!(url = %url_text, error = %e, "Error creating URL");
        }
        FetchError::Network(inner) => {
            error!(
                url = %url_text,
                error = %e,
                timeout = inner.is_timeout(),
                connect = inner.is_connect(),
                "Problem retrieving the news JSON results"
            );
        }
        FetchError::HttpStatus(code) => {
            error!(url = %url_text, status = *code, "Error response code");
        }
    }
    if let Some(message) = e.user_message() {
        debug!(%message, "Dispatching user notification");
        notifier.notify(message);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{MSG_FETCH, MSG_URL};
    use crate::notify::ChannelNotifier;
    use axum::Router;
    use axum::extract::State;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) const WORLD_BODY: &str = r#"{"response":{"results":[{"sectionName":"World","webPublicationDate":"2024-01-01T00:00:00Z","webTitle":"Title A","webUrl":"http://x/a"}]}}"#;

    /// A local listing server and a counter of the requests it has served.
    pub(crate) struct TestServer {
        pub base: String,
        pub hits: Arc<AtomicUsize>,
        task: tokio::task::JoinHandle<()>,
    }

    impl TestServer {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base, path)
        }

        pub fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            self.task.abort();
        }
    }

    async fn counted(
        State(hits): State<Arc<AtomicUsize>>,
        body: &'static str,
    ) -> (AxumStatus, &'static str) {
        hits.fetch_add(1, Ordering::SeqCst);
        (AxumStatus::OK, body)
    }

    pub(crate) async fn spawn_test_server() -> TestServer {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route(
                "/world",
                get(|state: State<Arc<AtomicUsize>>| counted(state, WORLD_BODY)),
            )
            .route(
                "/no-section",
                get(|state: State<Arc<AtomicUsize>>| {
                    counted(state, r#"{"response":{"results":[{"webTitle":"No Section"}]}}"#)
                }),
            )
            .route(
                "/empty",
                get(|state: State<Arc<AtomicUsize>>| counted(state, "")),
            )
            .route(
                "/broken",
                get(|state: State<Arc<AtomicUsize>>| counted(state, "{not json")),
            )
            .route(
                "/created",
                get(|State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (AxumStatus::CREATED, WORLD_BODY)
                }),
            )
            .with_state(Arc::clone(&hits));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        TestServer {
            base: format!("http://{address}"),
            hits,
            task,
        }
    }

    fn fetcher() -> Fetcher {
        Fetcher::new(FetchConfig::default()).expect("client should build")
    }

    #[test]
    fn test_default_timeouts() {
        let config = FetchConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_millis(15_000));
        assert_eq!(config.read_timeout, Duration::from_millis(10_000));
    }

    #[tokio::test]
    async fn test_fetch_returns_exact_body() {
        let server = spawn_test_server().await;
        let (notifier, mut rx) = ChannelNotifier::channel();

        let body = fetcher().fetch(&server.url("/world"), &notifier).await;
        assert_eq!(body.as_deref(), Some(WORLD_BODY));
        assert_eq!(server.hits(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_malformed_url_makes_no_request() {
        let (notifier, mut rx) = ChannelNotifier::channel();

        let err = fetcher().try_fetch("ht!tp://bad").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));

        assert!(fetcher().fetch("ht!tp://bad", &notifier).await.is_none());
        assert_eq!(rx.try_recv().unwrap(), MSG_URL);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_404_is_absent_without_notification() {
        let server = spawn_test_server().await;
        let (notifier, mut rx) = ChannelNotifier::channel();

        let err = fetcher().try_fetch(&server.url("/missing")).await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus(404)));

        assert!(fetcher().fetch(&server.url("/missing"), &notifier).await.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_fetch_only_accepts_200() {
        let server = spawn_test_server().await;
        let err = fetcher().try_fetch(&server.url("/created")).await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus(201)));
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_notifies() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let (notifier, mut rx) = ChannelNotifier::channel();
        let url = format!("http://{address}/world");

        assert!(fetcher().fetch(&url, &notifier).await.is_none());
        assert_eq!(rx.try_recv().unwrap(), MSG_FETCH);
    }

    #[tokio::test]
    async fn test_fetch_read_timeout_notifies() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let stall = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let fetcher = Fetcher::new(FetchConfig {
            connect_timeout: Duration::from_millis(1_000),
            read_timeout: Duration::from_millis(300),
        })
        .unwrap();
        let (notifier, mut rx) = ChannelNotifier::channel();
        let url = format!("http://{address}/world");

        let t0 = Instant::now();
        assert!(fetcher.fetch(&url, &notifier).await.is_none());
        assert!(t0.elapsed() < Duration::from_secs(3));
        assert_eq!(rx.try_recv().unwrap(), MSG_FETCH);

        let err = fetcher.try_fetch(&url).await.unwrap_err();
        match err {
            FetchError::Network(inner) => assert!(inner.is_timeout()),
            other => panic!("unexpected error: {other:?}"),
        }

        stall.abort();
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_some_empty() {
        let server = spawn_test_server().await;
        let body = fetcher().try_fetch(&server.url("/empty")).await.unwrap();
        assert!(body.is_empty());
    }
}
