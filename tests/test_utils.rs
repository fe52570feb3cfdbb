use actix_web::{middleware::NormalizePath, web, App, HttpResponse, HttpServer};
use async_trait::async_trait;
use portfolio_contact_api::{
    routes::{configure_routes, json_config},
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{
    net::TcpListener,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

pub struct TestApp {
    pub address: String,
    pub client: Client,
    #[allow(dead_code)]
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config).expect("Failed to build app state"));
        let max_payload_bytes = config.max_payload_bytes;

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(json_config(max_payload_bytes))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .disable_signals()
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/api/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            config,
        }
    }
}

/// Local webhook receiver that counts the notifications it gets.
/// Returns the URL to configure as `delivery_webhook_url`.
#[allow(dead_code)]
pub fn spawn_webhook_sink() -> (String, web::Data<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let hits = web::Data::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let server = HttpServer::new(move || {
        App::new().app_data(counter.clone()).route(
            "/contact",
            web::post().to(|hits: web::Data<AtomicUsize>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                HttpResponse::NoContent().finish()
            }),
        )
    })
    .listen(listener)
    .expect("Failed to bind webhook sink")
    .workers(1)
    .disable_signals()
    .run();

    tokio::spawn(server);

    (format!("http://127.0.0.1:{}/contact", port), hits)
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Contact Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        delivery_delay_ms: 0,
        delivery_timeout_secs: 2,
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
pub fn valid_contact() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Collaboration",
        "message": "I enjoyed your research write-up and would like to talk."
    })
}

#[async_trait]
pub trait ContactTestHelpers: Send + Sync {
    async fn post_contact(&self, body: &Value) -> reqwest::Response;
    async fn post_contact_from(&self, forwarded_for: &str, body: &Value) -> reqwest::Response;
}

#[async_trait]
impl ContactTestHelpers for TestApp {
    async fn post_contact(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }

    async fn post_contact_from(&self, forwarded_for: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}/api/contact", self.address))
            .header("X-Forwarded-For", forwarded_for)
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }
}
