//! Host wiring: build the store from configuration and run the chat loop

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use confplug_store::{CatalogLoader, FileSnapshotStore, SchemaRegistry, SettingStore};
use confplug_utils::{ConfplugError, Result};

use crate::auth::Principal;
use crate::config::StoreConfig;
use crate::dispatch::{CommandDispatcher, CommandStatus};
use crate::reply::{BufferedChannel, Reply};

/// Load the catalog named by the store config, or the default one
pub fn load_registry(config: &StoreConfig) -> Result<SchemaRegistry> {
    match &config.catalog_path {
        Some(path) => CatalogLoader::load_from_path(path),
        None => CatalogLoader::load(),
    }
}

/// Open the file-backed store described by the config
pub fn open_store(config: &StoreConfig) -> Result<SettingStore> {
    let registry = load_registry(config)?;
    let adapter = FileSnapshotStore::new(config.resolved_snapshot_path());
    SettingStore::open(registry, adapter)
}

/// Format a reply for the transcript
pub fn render(reply: &Reply) -> String {
    if reply.is_error() {
        format!("error: {}", reply.text())
    } else {
        reply.text().to_string()
    }
}

/// Feed chat lines to the dispatcher until input ends
///
/// Each line runs on the blocking pool because a set waits for the save.
/// Lines are handled one after another, in input order.
pub async fn serve<R, W>(
    dispatcher: Arc<CommandDispatcher>,
    principal: Principal,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Serving chat commands for {}", principal.name);

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let dispatcher = Arc::clone(&dispatcher);
        let sender = principal.clone();

        let (status, replies) = tokio::task::spawn_blocking(move || {
            let mut channel = BufferedChannel::default();
            let status = dispatcher.handle_line(&sender, &line, &mut channel);
            (status, channel.into_replies())
        })
        .await
        .map_err(|e| ConfplugError::internal(format!("command task failed: {}", e)))?;

        if status == CommandStatus::Failed {
            warn!("Command from {} failed", principal.name);
        }

        for reply in &replies {
            output.write_all(render(reply).as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        output.flush().await?;
    }

    info!("Input closed, stopping");
    Ok(())
}
