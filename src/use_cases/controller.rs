// Simulation controller: battle lifecycle, frame accounting and publication.

use crate::domain::state::{spawn_roster, Unit, UnitSnapshot};
use crate::use_cases::engine::{self, StepConfig, MAX_DELTA_SECONDS};
use crate::use_cases::types::{
    BattleEvent, BattleMetrics, BattleOutcome, BattleSettings, BattleStatus, BattleUpdate,
    EventTone, SpeedMode,
};
use std::time::Duration;
use tracing::info;

/// Number of events retained in the controller-facing feed, most recent
/// first. Consumers may truncate further for display.
pub const EVENT_LIMIT: usize = 36;

/// Owns the authoritative battle state and drives the engine once per frame.
///
/// All mutable state lives on this instance (no process-wide counters), so
/// several controllers can run independently. Consumers only ever receive
/// value copies via [`BattleUpdate`].
pub struct BattleController {
    settings: BattleSettings,
    status: BattleStatus,
    units: Vec<Unit>,
    metrics: BattleMetrics,
    events: Vec<BattleEvent>,
    event_seq: u64,
    last_timestamp: Option<Duration>,
}

impl BattleController {
    pub fn new(settings: BattleSettings) -> Self {
        Self {
            settings,
            status: BattleStatus::Idle,
            units: spawn_roster(settings.speed_mode.multiplier()),
            metrics: BattleMetrics::default(),
            events: Vec::new(),
            event_seq: 0,
            last_timestamp: None,
        }
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == BattleStatus::Running
    }

    pub fn settings(&self) -> BattleSettings {
        self.settings
    }

    pub fn metrics(&self) -> BattleMetrics {
        self.metrics
    }

    /// Read-only view of the live roster. Mutation stays inside the
    /// controller; external consumers should prefer [`Self::snapshot`].
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn snapshot(&self) -> Vec<UnitSnapshot> {
        self.units.iter().map(UnitSnapshot::from).collect()
    }

    /// Retained event feed, most recent first, capped at [`EVENT_LIMIT`].
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Begin or resume stepping. A no-op while already running; starting
    /// from a terminal state performs a full reset first so stale state is
    /// never resumed. The next frame is a zero-delta bootstrap frame.
    pub fn start(&mut self) {
        match self.status {
            BattleStatus::Running => {}
            BattleStatus::Victory | BattleStatus::Defeat => {
                self.reset();
                self.status = BattleStatus::Running;
                info!(status = "running", "battle restarted");
            }
            BattleStatus::Idle | BattleStatus::Paused => {
                self.status = BattleStatus::Running;
                self.last_timestamp = None;
                info!(status = "running", "battle started");
            }
        }
    }

    /// Freeze stepping exactly where the last frame left it. A no-op unless
    /// running.
    pub fn pause(&mut self) {
        if self.status != BattleStatus::Running {
            return;
        }
        self.status = BattleStatus::Paused;
        self.last_timestamp = None;
        info!(status = "paused", "battle paused");
    }

    /// Return to idle from any state: fresh roster, zeroed metrics, empty
    /// feed. Event ids keep counting up across resets.
    pub fn reset(&mut self) {
        self.units = spawn_roster(self.settings.speed_mode.multiplier());
        self.metrics = BattleMetrics::default();
        self.events.clear();
        self.status = BattleStatus::Idle;
        self.last_timestamp = None;
        info!(status = "idle", "battle reset");
    }

    /// Applied at the start of the next processed step; never a reset
    /// trigger.
    pub fn set_damage_multiplier(&mut self, value: f32) {
        self.settings.damage_multiplier = value;
    }

    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.settings.speed_mode = mode;
    }

    /// Resolves a presentation-layer mode id; an unknown id falls back to
    /// the multiplier-1 mode rather than failing.
    pub fn set_speed_mode_by_id(&mut self, id: &str) {
        self.settings.speed_mode = SpeedMode::from_id(id).unwrap_or(SpeedMode::Standard);
    }

    /// Process one frame at the given monotonic timestamp. Returns `None`
    /// unless the battle is running.
    ///
    /// The first frame after a (re)start has no prior timestamp and advances
    /// the simulation by a zero delta; subsequent frames use the elapsed
    /// time clamped to [`MAX_DELTA_SECONDS`], so stalls never produce
    /// catch-up jumps.
    pub fn frame(&mut self, timestamp: Duration) -> Option<BattleUpdate> {
        if self.status != BattleStatus::Running {
            return None;
        }

        let raw_delta = match self.last_timestamp {
            Some(prev) => timestamp.saturating_sub(prev).as_secs_f32(),
            None => 0.0,
        };
        let delta_seconds = raw_delta.min(MAX_DELTA_SECONDS);
        self.last_timestamp = Some(timestamp);

        let cfg = StepConfig {
            damage_multiplier: self.settings.damage_multiplier,
            speed_multiplier: self.settings.speed_mode.multiplier(),
        };
        let output = engine::step(
            &mut self.units,
            delta_seconds,
            cfg,
            &mut self.metrics,
            &mut self.event_seq,
        );
        self.push_events(output.events);

        if let Some(outcome) = output.outcome {
            self.finalize(outcome);
        }

        Some(self.make_update())
    }

    /// Current published view of the battle, independent of stepping.
    pub fn make_update(&self) -> BattleUpdate {
        BattleUpdate {
            tick: self.metrics.ticks,
            status: self.status,
            units: self.snapshot(),
            events: self.events.clone(),
            metrics: self.metrics,
        }
    }

    fn finalize(&mut self, outcome: BattleOutcome) {
        let (status, summary, tone) = match outcome {
            BattleOutcome::Victory => (
                BattleStatus::Victory,
                "Союзники подавили сопротивление.",
                EventTone::Ally,
            ),
            BattleOutcome::Defeat => (
                BattleStatus::Defeat,
                "Союзники уничтожены.",
                EventTone::Enemy,
            ),
        };
        self.status = status;
        self.last_timestamp = None;

        let id = self.event_seq;
        self.event_seq += 1;
        self.push_events(vec![BattleEvent {
            id,
            tick: self.metrics.ticks,
            timestamp: self.metrics.elapsed_seconds,
            summary: summary.to_string(),
            tone,
        }]);
        info!(
            status = ?self.status,
            ticks = self.metrics.ticks,
            elapsed_seconds = self.metrics.elapsed_seconds,
            "battle finished"
        );
    }

    fn push_events(&mut self, batch: Vec<BattleEvent>) {
        if batch.is_empty() {
            return;
        }
        self.events.splice(0..0, batch);
        self.events.truncate(EVENT_LIMIT);
    }
}
