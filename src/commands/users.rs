//! Users command - Prints the redacted user list.

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

/// Execute the users command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config);
    let users = services.users().list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");

    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}
