//! Command execution and output rendering

use logctl_admin::{AdminClient, Repository, RepositoryListItem, RetentionDimension};
use tracing::debug;

use crate::cli::{Command, ReposCommand};

pub async fn run(client: &AdminClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Whoami => {
            let username = client.viewer().username().await?;
            println!("{}", username);
        }
        Command::Repos(command) => run_repos(client, command).await?,
    }
    Ok(())
}

async fn run_repos(client: &AdminClient, command: ReposCommand) -> anyhow::Result<()> {
    let repos = client.repositories();

    match command {
        ReposCommand::List => {
            let items = repos.list().await?;
            print!("{}", render_list(&items));
        }
        ReposCommand::Show { name } => {
            let repo = repos.get(&name).await?;
            print!("{}", render_repository(&repo));
        }
        ReposCommand::Create { name } => {
            let repo = repos.create(&name).await?;
            println!("Successfully created repo {}", repo.name);
        }
        ReposCommand::Delete {
            name,
            reason,
            allow_data_deletion,
        } => {
            repos.delete(&name, &reason, allow_data_deletion).await?;
            println!("Successfully deleted repo {}", name);
        }
        ReposCommand::Update {
            name,
            description,
            retention_time,
            retention_size,
            ingest_size,
            allow_data_deletion,
        } => {
            if description.is_none()
                && retention_time.is_none()
                && retention_size.is_none()
                && ingest_size.is_none()
            {
                anyhow::bail!("you must specify at least one setting to update");
            }

            if let Some(description) = description {
                repos.update_description(&name, &description).await?;
                debug!(repository = %name, "description updated");
            }
            if let Some(days) = retention_time {
                repos
                    .update_time_based_retention(&name, days, allow_data_deletion)
                    .await?;
            }
            if let Some(gb) = retention_size {
                repos
                    .update_storage_based_retention(&name, gb, allow_data_deletion)
                    .await?;
            }
            if let Some(gb) = ingest_size {
                repos
                    .update_ingest_based_retention(&name, gb, allow_data_deletion)
                    .await?;
            }

            let repo = repos.get(&name).await?;
            print!("{}", render_repository(&repo));
        }
        ReposCommand::UpdateUserGroup {
            name,
            username,
            groups,
        } => {
            repos
                .update_user_group_membership(&name, &username, &groups)
                .await?;
            println!("Successfully updated groups of {} in {}", username, name);
        }
    }
    Ok(())
}

fn render_list(items: &[RepositoryListItem]) -> String {
    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!("{:<name_width$}  {:>12}\n", "Name", "Space Used");
    for item in items {
        out.push_str(&format!(
            "{:<name_width$}  {:>12}\n",
            item.name,
            format_bytes(item.space_used_bytes)
        ));
    }
    out
}

fn render_repository(repo: &Repository) -> String {
    let limit = |label: &str, dimension: RetentionDimension| {
        (
            format!("{} ({})", label, dimension.unit()),
            format_limit(dimension.current(repo)),
        )
    };

    let rows = [
        ("Name".to_string(), repo.name.clone()),
        ("Description".to_string(), repo.description.clone()),
        ("Space used".to_string(), format_bytes(repo.space_used_bytes)),
        limit("Ingest retention", RetentionDimension::IngestSize),
        limit("Storage retention", RetentionDimension::StorageSize),
        limit("Time retention", RetentionDimension::Time),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:>24} | {}\n", label, value));
    }
    out
}

/// Retention limits of 0 are unset
fn format_limit(value: f64) -> String {
    if value == 0.0 {
        "<no limit>".to_string()
    } else {
        value.to_string()
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
