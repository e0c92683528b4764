use super::classifier::ErrorClassifier;
use super::token::attach_token;
use super::{Transport, TransportResponse};
use async_trait::async_trait;
use fxdesk_core::Result;
use reqwest::Request;
use std::sync::Arc;

/// Transport decorator applied to every outgoing backend request.
///
/// Attaches the configured credential, turns non-success statuses into
/// `FxError::Http`, and runs every failure through the `ErrorClassifier`
/// before returning it unchanged.
pub struct AuthenticatedTransport<T: Transport> {
    inner: T,
    credential: Option<String>,
    classifier: Arc<ErrorClassifier>,
}

impl<T: Transport> AuthenticatedTransport<T> {
    pub fn new(inner: T, credential: Option<String>) -> Self {
        Self {
            inner,
            credential,
            classifier: Arc::new(ErrorClassifier::new()),
        }
    }

    /// Shares an existing classifier, e.g. one the shell also watches.
    pub fn with_classifier(mut self, classifier: Arc<ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> &Arc<ErrorClassifier> {
        &self.classifier
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthenticatedTransport<T> {
    async fn send(&self, request: Request) -> Result<TransportResponse> {
        let request = attach_token(&request, self.credential.as_deref())?;

        self.inner
            .send(request)
            .await
            .and_then(TransportResponse::error_for_status)
            .map_err(|err| self.classifier.classify(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxdesk_core::FxError;
    use reqwest::header::AUTHORIZATION;
    use reqwest::{Method, StatusCode, Url};
    use std::sync::Mutex;

    /// Records requests and answers with a canned result.
    struct StubTransport {
        seen: Mutex<Vec<Option<String>>>,
        reply: Result<TransportResponse>,
    }

    impl StubTransport {
        fn replying(reply: Result<TransportResponse>) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn seen_headers(&self) -> Vec<Option<String>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: Request) -> Result<TransportResponse> {
            let header = request
                .headers()
                .get(AUTHORIZATION)
                .map(|v| v.to_str().unwrap().to_string());
            self.seen.lock().unwrap().push(header);
            self.reply.clone()
        }
    }

    fn get() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost:8080/v1/currencies").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_token_attached_on_every_request() {
        let stub = Arc::new(StubTransport::replying(Ok(TransportResponse::new(StatusCode::OK, "{}"))));
        let transport = AuthenticatedTransport::new(Arc::clone(&stub), Some("Bearer X".to_string()));

        transport.send(get()).await.unwrap();
        transport.send(get()).await.unwrap();

        assert_eq!(
            stub.seen_headers(),
            vec![Some("Bearer X".to_string()), Some("Bearer X".to_string())]
        );
    }

    #[tokio::test]
    async fn test_no_credential_no_header() {
        let stub = Arc::new(StubTransport::replying(Ok(TransportResponse::new(StatusCode::OK, "{}"))));
        let transport = AuthenticatedTransport::new(Arc::clone(&stub), None);

        transport.send(get()).await.unwrap();
        assert_eq!(stub.seen_headers(), vec![None]);
    }

    #[tokio::test]
    async fn test_401_classified_and_reraised() {
        let stub = Arc::new(StubTransport::replying(Ok(TransportResponse::new(
            StatusCode::UNAUTHORIZED,
            "invalid token",
        ))));
        let transport = AuthenticatedTransport::new(Arc::clone(&stub), Some("Bearer stale".to_string()));

        let err = transport.send(get()).await.unwrap_err();
        assert_eq!(err, FxError::http(401, "invalid token"));
        assert_eq!(transport.classifier().unauthorized_count(), 1);
    }

    #[tokio::test]
    async fn test_non_401_errors_reraised_unclassified() {
        let stub = Arc::new(StubTransport::replying(Ok(TransportResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
        ))));
        let transport = AuthenticatedTransport::new(Arc::clone(&stub), None);

        let err = transport.send(get()).await.unwrap_err();
        assert!(err.is_http());
        assert!(!err.is_unauthorized());
        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.classifier().unauthorized_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_reraised() {
        let stub = Arc::new(StubTransport::replying(Err(FxError::transport("connection refused"))));
        let transport = AuthenticatedTransport::new(Arc::clone(&stub), Some("Bearer X".to_string()));

        let err = transport.send(get()).await.unwrap_err();
        assert!(err.is_transport());
        assert!(!err.is_http());
        assert_eq!(transport.classifier().unauthorized_count(), 0);
    }

    #[tokio::test]
    async fn test_shared_classifier() {
        let stub = Arc::new(StubTransport::replying(Ok(TransportResponse::new(StatusCode::UNAUTHORIZED, ""))));
        let classifier = Arc::new(ErrorClassifier::new());
        let transport =
            AuthenticatedTransport::new(Arc::clone(&stub), None).with_classifier(Arc::clone(&classifier));

        let _ = transport.send(get()).await;
        let _ = transport.send(get()).await;
        assert_eq!(classifier.unauthorized_count(), 2);
    }
}
