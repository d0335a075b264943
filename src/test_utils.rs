use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::config::Config;

/// In-process stand-in for the posts api
#[derive(Clone)]
pub struct MockApi {
    posts: Arc<Mutex<Value>>,
    list_status: StatusCode,
    create_status: StatusCode,
    create_body: Value,
    list_calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::with_posts(json!([]))
    }

    pub fn with_posts(posts: Value) -> Self {
        MockApi {
            posts: Arc::new(Mutex::new(posts)),
            list_status: StatusCode::OK,
            create_status: StatusCode::CREATED,
            create_body: Value::Null,
            list_calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn list_status(mut self, status: StatusCode) -> Self {
        self.list_status = status;
        self
    }

    pub fn create_response(mut self, status: StatusCode, body: Value) -> Self {
        self.create_status = status;
        self.create_body = body;
        self
    }

    /// bind to an ephemeral port and serve in the background
    pub async fn serve(self) -> RunningApi {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new()
            .route("/posts", get(list_posts).post(create_post))
            .with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningApi { addr, api: self }
    }
}

pub struct RunningApi {
    addr: SocketAddr,
    api: MockApi,
}

impl RunningApi {
    pub fn config(&self) -> Config {
        Config::new(&format!("http://{}/posts", self.addr)).unwrap()
    }

    pub fn list_calls(&self) -> usize {
        self.api.list_calls.load(Ordering::SeqCst)
    }

    /// request bodies of every POST so far
    pub fn received(&self) -> Vec<Value> {
        self.api.received.lock().unwrap().clone()
    }
}

/// a config whose port nothing listens on
pub async fn unreachable_config() -> Config {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Config::new(&format!("http://{}/posts", addr)).unwrap()
}

async fn list_posts(State(api): State<MockApi>) -> (StatusCode, Json<Value>) {
    api.list_calls.fetch_add(1, Ordering::SeqCst);
    if !api.list_status.is_success() {
        return (api.list_status, Json(json!({"error": "unavailable"})));
    }
    let posts = api.posts.lock().unwrap().clone();
    (api.list_status, Json(posts))
}

async fn create_post(State(api): State<MockApi>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    api.received.lock().unwrap().push(body.clone());
    if api.create_status != StatusCode::CREATED {
        return (api.create_status, Json(api.create_body.clone()));
    }

    let mut posts = api.posts.lock().unwrap();
    let created = match posts.as_array_mut() {
        Some(list) => {
            let post = json!({
                "id": list.len() + 1,
                "title": body["title"],
                "content": body["content"],
            });
            list.push(post.clone());
            post
        }
        None => Value::Null,
    };
    (StatusCode::CREATED, Json(created))
}
