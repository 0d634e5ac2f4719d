use std::{net::SocketAddr, path::Path};

use axum::Router;
use color_eyre::eyre::{Context, Result, bail};
use log::info;
use tower_http::services::ServeDir;

/// Serve a static demo directory over HTTP.
///
/// The server resolves `index.html` for directory requests and follows
/// symlinks inside the served root, so a `current` link to the latest
/// build works as expected.
pub fn run(root: &Path, port: u16) -> Result<()> {
  if !root.is_dir() {
    bail!("Serve root is not a directory: {}", root.display());
  }

  let runtime = tokio::runtime::Runtime::new()
    .wrap_err("Failed to create async runtime")?;

  runtime.block_on(async {
    let service =
      ServeDir::new(root).append_index_html_on_directories(true);
    let app = Router::new().fallback_service(service);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
      .await
      .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    info!("Serving {} on http://{addr}", root.display());
    axum::serve(listener, app)
      .await
      .wrap_err("HTTP server error")
  })
}
