//! Command dispatch: resource kind -> typed CRUD call -> output formatting.

use std::io::Read;
use std::path::Path;

use tracing::info;

use unifi_network_api::models::{
    ApGroup, FirewallGroup, FirewallRule, Network, PortForward, PortProfile, RadiusProfile,
    StaticDns, StaticRoute, TrafficRule, User, UserGroup, Wlan,
};
use unifi_network_api::{NetworkClient, Resource};

use crate::cli::{Command, OutputFormat, ResourceKind};
use crate::error::CliError;
use crate::output;

/// Dispatch a command to the typed handler for its resource kind.
pub async fn dispatch(
    cmd: Command,
    client: &NetworkClient,
    format: OutputFormat,
) -> Result<(), CliError> {
    let kind = cmd.kind();
    let result = match kind {
        ResourceKind::Network => run::<Network>(cmd, client, format).await,
        ResourceKind::FirewallRule => run::<FirewallRule>(cmd, client, format).await,
        ResourceKind::FirewallGroup => run::<FirewallGroup>(cmd, client, format).await,
        ResourceKind::PortForward => run::<PortForward>(cmd, client, format).await,
        ResourceKind::PortProfile => run::<PortProfile>(cmd, client, format).await,
        ResourceKind::Wlan => run::<Wlan>(cmd, client, format).await,
        ResourceKind::ApGroup => run::<ApGroup>(cmd, client, format).await,
        ResourceKind::UserGroup => run::<UserGroup>(cmd, client, format).await,
        ResourceKind::User => run::<User>(cmd, client, format).await,
        ResourceKind::RadiusProfile => run::<RadiusProfile>(cmd, client, format).await,
        ResourceKind::StaticRoute => run::<StaticRoute>(cmd, client, format).await,
        ResourceKind::StaticDns => run::<StaticDns>(cmd, client, format).await,
        ResourceKind::TrafficRule => run::<TrafficRule>(cmd, client, format).await,
    };

    // Name the kind the user typed rather than the wire endpoint.
    result.map_err(|err| match err {
        CliError::NotFound { id, .. } => CliError::NotFound {
            kind: kind.to_string(),
            id,
        },
        other => other,
    })
}

async fn run<T: Resource>(
    cmd: Command,
    client: &NetworkClient,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = match cmd {
        Command::List { .. } => output::render(format, &client.list::<T>().await?)?,
        Command::Get { id, .. } => output::render(format, &client.get::<T>(&id).await?)?,
        Command::Find { name, .. } => {
            output::render(format, &client.find_by_name::<T>(&name).await?)?
        }
        Command::Create { file, .. } => {
            let item: T = read_payload(&file)?;
            let created = client.create(&item).await?;
            info!(endpoint = T::ENDPOINT, id = created.id(), "created");
            output::render(format, &created)?
        }
        Command::Update { id, file, .. } => {
            let item: T = read_payload(&file)?;
            let updated = client.update(&id, &item).await?;
            info!(endpoint = T::ENDPOINT, %id, "updated");
            output::render(format, &updated)?
        }
        Command::Delete { id, .. } => {
            client.delete::<T>(&id).await?;
            info!(endpoint = T::ENDPOINT, %id, "deleted");
            String::new()
        }
    };

    output::print_output(&rendered);
    Ok(())
}

/// Parse a JSON record from `path`, or from stdin when `path` is `-`.
fn read_payload<T: Resource>(path: &Path) -> Result<T, CliError> {
    let io_err = |source| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    Ok(serde_json::from_str(&text)?)
}
