//! Usage: Settings-screen synchronization core.
//!
//! Reconciles three owners of the same values — the screen's in-memory state,
//! the persisted settings file, and the two external services (autostart
//! registry, inactivity monitor) — on load, on save, and on toggle.
//!
//! The logic is written as explicit state transitions: [`transition`] takes
//! the current screen state plus one event and returns the next state along
//! with the effects still to run. [`bridge::Bridge`] executes those effects
//! against the live services and feeds their outcomes back in as events, so
//! every state change is covered by plain unit tests with no UI runtime.

pub(crate) mod bridge;

pub(crate) const DEFAULT_TIMEOUT_MINUTES: u32 = 5;

/// UI-facing state of the settings screen.
///
/// `timeout_minutes` may lead the persisted value between an edit and a
/// confirmed save. `autostart_enabled` is a cached read of the OS registry
/// and changes only in lock-step with a confirmed registry write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub(crate) struct ScreenState {
    pub(crate) timeout_minutes: u32,
    pub(crate) autostart_enabled: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
            autostart_enabled: false,
        }
    }
}

/// One input to the screen: a user action or the completion of an external
/// call issued by an earlier effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScreenEvent {
    InitRequested,
    AutostartStateLoaded(Result<bool, String>),
    StoredTimeoutLoaded(Option<u32>),
    ToggleAutostartRequested,
    AutostartChangeApplied { enabled: bool },
    AutostartChangeFailed,
    SaveRequested { minutes: u32 },
    TimeoutPersisted { minutes: u32 },
    SavePersistFailed,
    SavePushFailed,
}

/// Pending side effect produced by a transition. The driver runs these in
/// order against the service ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    QueryAutostartState,
    LoadStoredTimeout,
    EnableAutostart,
    DisableAutostart,
    PersistTimeout { minutes: u32 },
    PushTimeout { minutes: u32 },
    /// Startup-only push of the persisted value. A failure here is logged and
    /// dropped: the persisted value stays the source of truth and is pushed
    /// again on the next save or startup.
    PushTimeoutBestEffort { minutes: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) next: ScreenState,
    pub(crate) effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: ScreenState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }
}

pub(crate) fn transition(current: ScreenState, event: ScreenEvent) -> Transition {
    match event {
        // The two startup reads are independent and may complete in either
        // order.
        ScreenEvent::InitRequested => Transition {
            next: current,
            effects: vec![Effect::QueryAutostartState, Effect::LoadStoredTimeout],
        },
        ScreenEvent::AutostartStateLoaded(Ok(enabled)) => Transition {
            next: ScreenState {
                autostart_enabled: enabled,
                ..current
            },
            effects: Vec::new(),
        },
        // A failed query (platforms without the feature) keeps the prior
        // default; nothing is surfaced at startup.
        ScreenEvent::AutostartStateLoaded(Err(_)) => Transition::stay(current),
        ScreenEvent::StoredTimeoutLoaded(Some(minutes)) => Transition {
            next: ScreenState {
                timeout_minutes: minutes,
                ..current
            },
            effects: vec![Effect::PushTimeoutBestEffort { minutes }],
        },
        // No persisted value: keep the built-in default and write nothing,
        // neither to storage nor to the monitor.
        ScreenEvent::StoredTimeoutLoaded(None) => Transition::stay(current),
        ScreenEvent::ToggleAutostartRequested => Transition {
            next: current,
            effects: vec![if current.autostart_enabled {
                Effect::DisableAutostart
            } else {
                Effect::EnableAutostart
            }],
        },
        ScreenEvent::AutostartChangeApplied { enabled } => Transition {
            next: ScreenState {
                autostart_enabled: enabled,
                ..current
            },
            effects: Vec::new(),
        },
        // The registry still holds the old state, so the cached flag must not
        // move.
        ScreenEvent::AutostartChangeFailed => Transition::stay(current),
        ScreenEvent::SaveRequested { minutes } => Transition {
            next: ScreenState {
                timeout_minutes: minutes,
                ..current
            },
            effects: vec![Effect::PersistTimeout { minutes }],
        },
        ScreenEvent::TimeoutPersisted { minutes } => Transition {
            next: current,
            effects: vec![Effect::PushTimeout { minutes }],
        },
        ScreenEvent::SavePersistFailed => Transition::stay(current),
        // Persisted-but-not-enforced is accepted: storage already holds the
        // new value and the push is retried on the next save or startup.
        ScreenEvent::SavePushFailed => Transition::stay(current),
    }
}
