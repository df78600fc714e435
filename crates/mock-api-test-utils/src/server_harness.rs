//! Test server harness for E2E testing.
//!
//! Provides `TestFixtures` for scaffolding fixture trees on disk and
//! `TestServer` for spawning real server instances in tests.

use mock_api::config::{Config, PipelineConfig};
use mock_api::routes::{self, AppState};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A tempdir-backed fixture tree.
///
/// Write fixtures before spawning a server over them:
///
/// ```rust,ignore
/// let fixtures = TestFixtures::new()?;
/// fixtures.write("catalogo", "books", &json!({"code": "books"}))?;
/// let server = TestServer::spawn(fixtures).await?;
/// ```
pub struct TestFixtures {
    root: TempDir,
}

impl TestFixtures {
    pub fn new() -> Result<Self, anyhow::Error> {
        Ok(Self {
            root: TempDir::new()?,
        })
    }

    /// Write one fixture document under `<family_dir>/<stem>.json`,
    /// creating the family directory as needed.
    pub fn write(
        &self,
        family_dir: &str,
        stem: &str,
        document: &Value,
    ) -> Result<(), anyhow::Error> {
        let dir = self.root.path().join(family_dir);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{stem}.json")),
            serde_json::to_vec_pretty(document)?,
        )?;
        Ok(())
    }

    /// Root of the fixture tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// Test harness for spawning mock backend servers in E2E tests.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_catalog_flow() -> Result<(), anyhow::Error> {
///     let fixtures = TestFixtures::new()?;
///     fixtures.write("catalogo", "books", &json!({"code": "books"}))?;
///
///     let server = TestServer::spawn(fixtures).await?;
///     let response = server
///         .authed_client()?
///         .get(format!("{}/catalogs/books", server.url()))
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestServer {
    addr: SocketAddr,
    config: Config,
    _fixtures: TestFixtures,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn the full mock backend with the default pipeline
    /// (API key, tenant, fault injection) and no extra env vars.
    pub async fn spawn(fixtures: TestFixtures) -> Result<Self, anyhow::Error> {
        Self::spawn_with(fixtures, HashMap::new(), PipelineConfig::default()).await
    }

    /// Spawn the full mock backend with extra env vars (e.g.
    /// `FAIL_RATE`) and an explicit pipeline.
    pub async fn spawn_with(
        fixtures: TestFixtures,
        vars: HashMap<String, String>,
        pipeline: PipelineConfig,
    ) -> Result<Self, anyhow::Error> {
        Self::spawn_inner(fixtures, vars, pipeline, routes::build_routes).await
    }

    /// Spawn the reduced catalog-only router, as deployed by the
    /// catalog-stub binary.
    pub async fn spawn_catalog(
        fixtures: TestFixtures,
        vars: HashMap<String, String>,
        pipeline: PipelineConfig,
    ) -> Result<Self, anyhow::Error> {
        Self::spawn_inner(fixtures, vars, pipeline, routes::build_catalog_routes).await
    }

    async fn spawn_inner(
        fixtures: TestFixtures,
        mut vars: HashMap<String, String>,
        pipeline: PipelineConfig,
        build: fn(Arc<AppState>) -> axum::Router,
    ) -> Result<Self, anyhow::Error> {
        vars.insert(
            "DATA_DIR".to_string(),
            fixtures.path().display().to_string(),
        );
        vars.insert("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string());

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let state = Arc::new(AppState::new(config.clone(), pipeline));
        let app = build(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            config,
            _fixtures: fixtures,
            _handle: handle,
        })
    }

    /// Base URL of the running server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The configuration the server was spawned with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A client that sends the configured credentials on every
    /// request.
    pub fn authed_client(&self) -> Result<reqwest::Client, anyhow::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "X-API-KEY",
            self.config.api_key.to_string().parse()?,
        );
        headers.insert(
            "X-Tenant-ID",
            self.config.tenant_id.to_string().parse()?,
        );

        Ok(reqwest::Client::builder()
            .default_headers(headers)
            .build()?)
    }
}
