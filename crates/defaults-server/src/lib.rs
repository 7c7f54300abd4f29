pub mod api;
pub mod cli;
pub mod config;
pub mod tracing;

use anyhow::Result;
use axum_server::tls_rustls::RustlsConfig;
use ::tracing::info;

use crate::config::Config;

/// Start the webhook server and serve until the process is stopped.
///
/// TLS is optional: in the reference deployment the certificate is terminated
/// by the platform in front of us, so plain HTTP is the default. Passing a
/// certificate/key pair turns on HTTPS for deployments without a fronting
/// terminator.
pub async fn run(config: Config) -> Result<()> {
    let app = api::app();

    match config.tls_config {
        Some(tls_config) => {
            let rustls_config =
                RustlsConfig::from_pem_file(&tls_config.cert_file, &tls_config.key_file).await?;

            info!(address = %config.addr, "started HTTPS server");
            axum_server::bind_rustls(config.addr, rustls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!(address = %config.addr, "started HTTP server");
            axum_server::bind(config.addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
