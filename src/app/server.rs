use crate::adapters::{ContentPaths, LocalContentStore};
use crate::app::handlers;
use crate::core::{ConfigProvider, ContentStore};
use crate::utils::error::{PortfolioError, Result};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared by every handler. Holds no mutable state: content is re-read by
/// the store on each request and templates are compiled once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub templates: Arc<Tera>,
}

pub struct PortfolioServer {
    state: AppState,
    static_dir: PathBuf,
}

impl PortfolioServer {
    pub fn new(store: Arc<dyn ContentStore>, templates: Tera, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: AppState {
                store,
                templates: Arc::new(templates),
            },
            static_dir: static_dir.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let paths = ContentPaths::from_config(config);
        tracing::debug!(?paths, "Content locations");

        let templates = load_templates(config.template_dir())?;
        let store = Arc::new(LocalContentStore::new(paths));
        Ok(Self::new(store, templates, config.static_dir()))
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/api/cv", get(handlers::get_cv))
            .route("/api/industries", get(handlers::get_industries))
            .route("/api/industry/{industry_id}", get(handlers::get_industry))
            .route("/api/projects", get(handlers::get_projects))
            .route(
                "/api/projects/category/{category_id}",
                get(handlers::get_category_projects),
            )
            .route(
                "/api/projects/industry-relevance/{industry_id}",
                get(handlers::get_industry_relevance),
            )
            .route("/api/projects/{project_id}", get(handlers::get_project))
            .nest_service("/static", ServeDir::new(&self.static_dir))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .with_state(self.state.clone())
    }

    /// 服務直到收到 Ctrl-C 或 SIGTERM
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let actual_addr = listener.local_addr()?;
        tracing::info!(bind = %actual_addr, static_dir = %self.static_dir.display(), "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Compiles every `*.html` under `template_dir`. A missing directory yields
/// an empty set; rendering `/` then fails with a 500.
pub fn load_templates<P: AsRef<Path>>(template_dir: P) -> Result<Tera> {
    let pattern = template_dir.as_ref().join("**").join("*.html");
    let pattern = pattern.to_str().ok_or_else(|| PortfolioError::ConfigError {
        message: format!(
            "Template directory is not valid UTF-8: {}",
            template_dir.as_ref().display()
        ),
    })?;

    let templates = Tera::new(pattern)?;
    tracing::debug!(
        "Loaded {} templates",
        templates.get_template_names().count()
    );
    Ok(templates)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
