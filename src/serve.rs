//! Local static server for the generated site.

use crate::error::{BuilderError, CliError, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Static file server bound to a local address
pub struct DocsServer {
    listener: TcpListener,
    base: PathBuf,
}

impl DocsServer {
    /// Binds `addr` for serving `base`.
    ///
    /// Fails if `base` is not a directory, since there is nothing to serve
    /// before the site generator has run.
    pub async fn bind(addr: SocketAddr, base: &Path) -> Result<Self> {
        if !base.is_dir() {
            return Err(BuilderError::Cli(CliError::ExecutionFailed {
                command: "serve".to_string(),
                reason: format!("Site directory not found: {}", base.display()),
            }));
        }

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            BuilderError::Cli(CliError::ExecutionFailed {
                command: "serve".to_string(),
                reason: format!("Failed to bind {}: {}", addr, e),
            })
        })?;

        Ok(Self {
            listener,
            base: base.to_path_buf(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Router::new().fallback_service(ServeDir::new(&self.base));

        log::info!(
            "Serving {} on http://{}",
            self.base.display(),
            self.listener.local_addr()?
        );

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }
}

/// Platform command that opens `url` in the default browser
pub fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(windows) {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Opens `url` in the default browser without waiting for it.
///
/// Failure only logs a warning; the server keeps running.
pub fn open_in_browser(url: &str) {
    let (program, args) = browser_command(url);
    let spawned = tokio::process::Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => log::info!("Opening {} in the browser", url),
        Err(e) => log::warn!("Could not open the browser with {}: {}", program, e),
    }
}
