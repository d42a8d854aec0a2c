// Framework bootstrap and the frame-driven battle task.

use crate::frameworks::config;
use crate::use_cases::controller::BattleController;
use crate::use_cases::types::{BattleCommand, BattleSettings, BattleStatus, BattleUpdate};

use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};

pub fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Channels for one spawned battle. Commands go in over `command_tx`;
/// per-frame updates come out over the broadcast channel and lifecycle
/// status over the watch channel.
#[derive(Clone)]
pub struct BattleHandle {
    pub command_tx: mpsc::Sender<BattleCommand>,
    pub update_tx: broadcast::Sender<BattleUpdate>,
    pub status_rx: watch::Receiver<BattleStatus>,
}

impl BattleHandle {
    /// Wire the channels and spawn the battle task on the current runtime.
    pub fn spawn(settings: BattleSettings, frame_interval: Duration) -> Self {
        let (command_tx, command_rx) =
            mpsc::channel::<BattleCommand>(config::COMMAND_CHANNEL_CAPACITY);
        let (update_tx, _update_rx) =
            broadcast::channel::<BattleUpdate>(config::UPDATE_BROADCAST_CAPACITY);
        let (status_tx, status_rx) = watch::channel::<BattleStatus>(BattleStatus::Idle);

        tokio::spawn(battle_task(
            command_rx,
            update_tx.clone(),
            status_tx,
            frame_interval,
            settings,
        ));

        Self {
            command_tx,
            update_tx,
            status_rx,
        }
    }

    pub fn subscribe_updates(&self) -> broadcast::Receiver<BattleUpdate> {
        self.update_tx.subscribe()
    }
}

/// Drive one battle until every command sender is dropped.
///
/// While the battle is running, frames fire on the interval and each one
/// completes before the next command is seen; pausing simply stops re-arming
/// the frame timer. While idle/paused/finished the task blocks on the
/// command channel, and the interval is reset on the way back in so paused
/// wall time never turns into catch-up frames.
pub async fn battle_task(
    mut command_rx: mpsc::Receiver<BattleCommand>,
    update_tx: broadcast::Sender<BattleUpdate>,
    status_tx: watch::Sender<BattleStatus>,
    frame_interval: Duration,
    settings: BattleSettings,
) {
    let mut controller = BattleController::new(settings);
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let clock = Instant::now();

    loop {
        if controller.is_running() {
            tokio::select! {
                maybe_cmd = command_rx.recv() => {
                    let Some(cmd) = maybe_cmd else { break };
                    apply_command(&mut controller, cmd);
                    publish_status(&controller, &status_tx);
                }
                _ = interval.tick() => {
                    if let Some(update) = controller.frame(clock.elapsed()) {
                        publish_status(&controller, &status_tx);
                        let _ = update_tx.send(update);
                    }
                }
            }
        } else {
            let Some(cmd) = command_rx.recv().await else { break };
            apply_command(&mut controller, cmd);
            publish_status(&controller, &status_tx);
            let _ = update_tx.send(controller.make_update());
            interval.reset();
        }
    }
}

fn apply_command(controller: &mut BattleController, cmd: BattleCommand) {
    match cmd {
        BattleCommand::Start => controller.start(),
        BattleCommand::Pause => controller.pause(),
        BattleCommand::Reset => controller.reset(),
        BattleCommand::SetDamageMultiplier(value) => controller.set_damage_multiplier(value),
        BattleCommand::SetSpeedMode(id) => controller.set_speed_mode_by_id(&id),
    }
}

fn publish_status(controller: &BattleController, status_tx: &watch::Sender<BattleStatus>) {
    let status = controller.status();
    status_tx.send_if_modified(|current| {
        if *current != status {
            *current = status;
            true
        } else {
            false
        }
    });
}
