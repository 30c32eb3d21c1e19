//! Test helpers wiring a router over the real in-memory services

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use tower::ServiceExt;

use conference_server::services::Snapshot;
use conference_server::traits::MockMailer;
use conference_server::{ConferenceServer, InMemoryDatastore, MokaAnnouncementCache, NearlySoldOutAnnouncementSource};
use shared::{CacheConfig, ServerConfig, StringMessage};

/// Router plus a handle on its datastore for mid-test edits
pub struct TestApp {
    pub router: Router,
    pub datastore: Arc<InMemoryDatastore>,
}

impl TestApp {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut mailer = MockMailer::new();
        mailer.expect_send().returning(|_| Ok(())).times(0..);
        Self::with_mailer(snapshot, mailer)
    }

    pub fn with_mailer(snapshot: Snapshot, mailer: MockMailer) -> Self {
        let datastore = Arc::new(InMemoryDatastore::from_snapshot(snapshot));
        let cache = MokaAnnouncementCache::new(&CacheConfig::default());
        let source = NearlySoldOutAnnouncementSource::new(Arc::clone(&datastore));
        let server = ConferenceServer::new(ServerConfig::default(), Arc::clone(&datastore), cache, mailer, source);

        Self {
            router: server.build_router(),
            datastore,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn check_speakers(&self, websafe_key: &str) -> StatusCode {
        let body = format!("conferenceKey={websafe_key}");
        self.send(TestHelpers::form_post("/tasks/check_speakers", &body)).await.status()
    }

    pub async fn set_announcement(&self) -> StatusCode {
        self.send(TestHelpers::get("/crons/set_announcement")).await.status()
    }

    pub async fn featured_speaker(&self, websafe_key: &str) -> String {
        let uri = format!("/api/conferences/{websafe_key}/featured_speaker");
        let response = self.send(TestHelpers::get(&uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        TestHelpers::string_message(response).await
    }

    pub async fn announcement(&self) -> String {
        let response = self.send(TestHelpers::get("/api/announcement")).await;
        assert_eq!(response.status(), StatusCode::OK);
        TestHelpers::string_message(response).await
    }
}

/// Request builders and body readers
pub struct TestHelpers;

impl TestHelpers {
    pub fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub async fn string_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message: StringMessage = serde_json::from_slice(&bytes).unwrap();
        message.data
    }
}
