use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use mergington::database::{ActivityStore, MemoryRoster};
use mergington::services::seed_service;
use mergington::web::{self, AppState};
use reqwest::StatusCode;
use serde_json::Value;

struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    async fn start() -> Self {
        let store: Arc<dyn ActivityStore> =
            Arc::new(MemoryRoster::new(seed_service::default_roster()));
        let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let app = web::router(AppState::new(store), assets);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .unwrap()
    }

    async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base, path))
            .send()
            .await
            .unwrap()
    }

    async fn activities(&self) -> Value {
        let resp = self.get("/activities").await;
        assert_eq!(resp.status(), StatusCode::OK);
        resp.json().await.unwrap()
    }
}

fn participants(data: &Value, activity: &str) -> Vec<String> {
    data[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn get_activities_returns_all_activities() {
    let server = TestServer::start().await;
    let data = server.activities().await;

    let map = data.as_object().unwrap();
    assert!(map.contains_key("Chess Club"));
    assert!(map.contains_key("Programming Class"));
    assert!(map.contains_key("Tennis Team"));
    assert_eq!(map.len(), 10);
}

#[tokio::test]
async fn activity_structure_and_seeded_participants() {
    let server = TestServer::start().await;
    let data = server.activities().await;

    let chess = &data["Chess Club"];
    assert!(chess["description"].is_string());
    assert!(chess["schedule"].is_string());
    assert_eq!(chess["max_participants"], 12);
    assert!(chess["participants"].is_array());

    let people = participants(&data, "Chess Club");
    assert_eq!(people, vec!["michael@mergington.edu", "daniel@mergington.edu"]);

    let spots_left = chess["max_participants"].as_i64().unwrap() - people.len() as i64;
    assert_eq!(spots_left, 10);

    assert_eq!(data["Tennis Team"]["max_participants"], 16);
    assert!(participants(&data, "Tennis Team").is_empty());
}

#[tokio::test]
async fn signup_adds_participant() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Tennis%20Team/signup?email=newstudent@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("newstudent@mergington.edu"));

    let data = server.activities().await;
    assert!(participants(&data, "Tennis Team").contains(&"newstudent@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_unknown_activity_is_404() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Nonexistent%20Club/signup?email=student@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("not found"));
}

#[tokio::test]
async fn duplicate_signup_is_400() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Chess%20Club/signup?email=michael@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("already signed up"));
}

#[tokio::test]
async fn student_can_join_multiple_activities() {
    let server = TestServer::start().await;
    let email = "multisport@mergington.edu";

    for activity in ["Tennis%20Team", "Basketball%20Club"] {
        let resp = server
            .post(&format!("/activities/{}/signup?email={}", activity, email))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let data = server.activities().await;
    assert!(participants(&data, "Tennis Team").contains(&email.to_string()));
    assert!(participants(&data, "Basketball Club").contains(&email.to_string()));
}

#[tokio::test]
async fn unregister_removes_only_that_participant() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Chess%20Club/unregister?email=michael@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Unregistered"));

    let data = server.activities().await;
    assert_eq!(participants(&data, "Chess Club"), vec!["daniel@mergington.edu"]);
}

#[tokio::test]
async fn unregister_unknown_activity_is_404() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Nonexistent%20Club/unregister?email=student@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("not found"));
}

#[tokio::test]
async fn unregister_absent_student_is_400() {
    let server = TestServer::start().await;
    let resp = server
        .post("/activities/Tennis%20Team/unregister?email=notstudent@mergington.edu")
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("not signed up"));
}

#[tokio::test]
async fn unregister_then_signup_again() {
    let server = TestServer::start().await;
    let email = "michael@mergington.edu";

    let resp = server
        .post(&format!("/activities/Chess%20Club/unregister?email={}", email))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = server
        .post(&format!("/activities/Chess%20Club/signup?email={}", email))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let data = server.activities().await;
    assert!(participants(&data, "Chess Club").contains(&email.to_string()));
}

#[tokio::test]
async fn missing_or_empty_email_is_400() {
    let server = TestServer::start().await;

    let resp = server.post("/activities/Tennis%20Team/signup").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].is_string());

    let resp = server.post("/activities/Tennis%20Team/signup?email=").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let data = server.activities().await;
    assert!(participants(&data, "Tennis Team").is_empty());
}

#[tokio::test]
async fn whitespace_email_is_accepted_verbatim() {
    let server = TestServer::start().await;
    let resp = server.post("/activities/Tennis%20Team/signup?email=%20").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let data = server.activities().await;
    assert_eq!(participants(&data, "Tennis Team"), vec![" "]);
}

#[tokio::test]
async fn home_page_renders_roster() {
    let server = TestServer::start().await;
    let resp = server.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(reqwest::header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    let html = resp.text().await.unwrap();
    assert!(html.contains("Chess Club"));
    assert!(html.contains("10 spots left"));
    assert!(html.contains("michael@mergington.edu"));
    assert!(html.contains(&format!("build {}", env!("MERGINGTON_BUILD_ID"))));
}

#[tokio::test]
async fn serves_client_assets() {
    let server = TestServer::start().await;
    let resp = server.get("/assets/app.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("signup"));
}
