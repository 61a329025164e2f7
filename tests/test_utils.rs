use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use portfolio_api::{
    db::postgres::{create_pool, run_migrations},
    entities::blog_post::{BlogPost, BlogPostInsert, NewBlogPost},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment, LogFormat},
    shared_repos::SharedRepositories,
    AppState,
};
use reqwest::Client;
use sqlx::PgPool;
use std::{net::TcpListener, time::Duration};
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub repos: SharedRepositories,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();

        let db_pool = create_pool(&config.database_url)
            .await
            .expect("Failed to create test DB pool");

        run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, db_pool.clone()));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
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
        while client.get(format!("{}/api/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            repos: SharedRepositories::new(db_pool.clone()),
            db_pool,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 2,
        database_url: std::env::var("APP_TEST_DATABASE_URL")
            .expect("APP_TEST_DATABASE_URL must point at a disposable PostgreSQL database"),
        cors_allowed_origins: vec!["*".to_string()],
        media_url: "https://cdn.example.com/media/".to_string(),
        run_migrations: true,
        log_format: LogFormat::Pretty,
    }
}

#[async_trait]
pub trait ContentTestHelpers: Send + Sync {
    async fn get(&self, path: &str) -> reqwest::Response;
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response;
    async fn seed_blog_post(&self, post: NewBlogPost) -> BlogPost;
    async fn approve_comment(&self, comment_id: Uuid);
}

#[async_trait]
impl ContentTestHelpers for TestApp {
    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    async fn seed_blog_post(&self, post: NewBlogPost) -> BlogPost {
        let insert = BlogPostInsert::try_from(post).expect("Invalid blog post fixture");
        self.repos
            .blog_post_repo
            .create_blog_post(&insert)
            .await
            .expect("Failed to seed blog post")
    }

    // no endpoint approves comments; moderation happens out of band
    async fn approve_comment(&self, comment_id: Uuid) {
        sqlx::query("UPDATE comments SET approved = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to approve comment");
    }
}
