// Headless demo driver: run one battle to its outcome and report metrics.

use smart_battle::frameworks::{config, runtime};
use smart_battle::use_cases::types::{BattleCommand, BattleSettings, BattleStatus};
use smart_battle::BattleHandle;
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() {
    runtime::init_runtime();

    let handle = BattleHandle::spawn(BattleSettings::default(), config::frame_interval());
    let mut updates = handle.subscribe_updates();

    if let Err(e) = handle.command_tx.send(BattleCommand::Start).await {
        tracing::error!(error = %e, "battle task unavailable");
        return;
    }

    loop {
        match updates.recv().await {
            Ok(update) => {
                if matches!(update.status, BattleStatus::Victory | BattleStatus::Defeat) {
                    tracing::info!(
                        status = ?update.status,
                        ticks = update.metrics.ticks,
                        "battle finished"
                    );
                    match serde_json::to_string_pretty(&update.metrics) {
                        Ok(json) => println!("{json}"),
                        Err(e) => tracing::error!(error = %e, "failed to encode metrics"),
                    }
                    break;
                }
            }
            // Slow consumers only miss intermediate frames, never the result.
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        }
    }
}
