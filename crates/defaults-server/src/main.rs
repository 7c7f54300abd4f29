use anyhow::Result;

use defaults_server::{cli, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = Config::from_args(&matches)?;

    defaults_server::tracing::setup_tracing(
        &config.log_level,
        &config.log_fmt,
        config.log_no_color,
    )?;

    defaults_server::run(config).await
}
