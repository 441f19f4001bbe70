mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use secrecy::SecretString;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use unifi_network_api::NetworkClient;
use unifi_network_config::Settings;

use crate::cli::{Cli, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(&cli.global)?;
    let client = NetworkClient::connect(settings.to_client_config()?).await?;

    debug!(command = ?cli.command, site = client.site(), "dispatching command");
    let result = commands::dispatch(cli.command, &client, cli.global.output).await;

    if let Err(e) = client.logout().await {
        debug!(error = %e, "logout failed");
    }
    result
}

/// Config file and environment, then command-line flags on top.
fn load_settings(global: &GlobalOpts) -> Result<Settings, CliError> {
    let mut settings = Settings::load_from(global.config.as_deref())?;

    if let Some(host) = &global.host {
        settings.host.clone_from(host);
    }
    if let Some(site) = &global.site {
        settings.site.clone_from(site);
    }
    if let Some(username) = &global.username {
        settings.username = Some(username.clone());
    }
    if let Some(password) = &global.password {
        settings.password = Some(SecretString::from(password.clone()));
    }
    if let Some(api_key) = &global.api_key {
        settings.api_key = Some(SecretString::from(api_key.clone()));
    }
    settings.allow_insecure |= global.insecure;
    settings.is_standalone |= global.standalone;

    Ok(settings)
}
