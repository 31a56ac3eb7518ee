//! Usage: Drives screen transitions against the live service ports.

use super::{transition, Effect, ScreenEvent, ScreenState, Transition};

/// Durable-storage seam: the single persisted timeout key.
pub(crate) trait SettingsStorePort {
    fn read_timeout(&self) -> Option<u32>;
    fn write_timeout(&self, minutes: u32) -> Result<(), String>;
}

/// OS autostart registry seam.
pub(crate) trait AutostartPort {
    fn is_enabled(&self) -> Result<bool, String>;
    fn enable(&self) -> Result<(), String>;
    fn disable(&self) -> Result<(), String>;
}

/// Inactivity-monitor configuration seam.
pub(crate) trait InactivityPort {
    fn set_timeout(&self, minutes: u32) -> Result<(), String>;
}

impl<T: SettingsStorePort + ?Sized> SettingsStorePort for &T {
    fn read_timeout(&self) -> Option<u32> {
        (**self).read_timeout()
    }

    fn write_timeout(&self, minutes: u32) -> Result<(), String> {
        (**self).write_timeout(minutes)
    }
}

impl<T: AutostartPort + ?Sized> AutostartPort for &T {
    fn is_enabled(&self) -> Result<bool, String> {
        (**self).is_enabled()
    }

    fn enable(&self) -> Result<(), String> {
        (**self).enable()
    }

    fn disable(&self) -> Result<(), String> {
        (**self).disable()
    }
}

impl<T: InactivityPort + ?Sized> InactivityPort for &T {
    fn set_timeout(&self, minutes: u32) -> Result<(), String> {
        (**self).set_timeout(minutes)
    }
}

/// Applies screen events through [`transition`] and executes the produced
/// effects against the ports, feeding each outcome back in as the next event.
///
/// The bridge holds the screen state only for the duration of one operation;
/// callers pass the current state in and read the (possibly updated) state
/// back out regardless of whether the operation succeeded.
pub(crate) struct Bridge<S, A, I> {
    store: S,
    autostart: A,
    inactivity: I,
    state: ScreenState,
}

impl<S, A, I> Bridge<S, A, I>
where
    S: SettingsStorePort,
    A: AutostartPort,
    I: InactivityPort,
{
    pub(crate) fn new(store: S, autostart: A, inactivity: I, state: ScreenState) -> Self {
        Self {
            store,
            autostart,
            inactivity,
            state,
        }
    }

    pub(crate) fn state(&self) -> ScreenState {
        self.state
    }

    /// Startup reconciliation. The autostart query may legitimately fail and
    /// the stored-timeout push is best-effort, so no error ever surfaces
    /// here; the event sequence handles every failure internally.
    pub(crate) fn initialize(&mut self) {
        if let Err(err) = self.apply(ScreenEvent::InitRequested) {
            tracing::warn!("settings screen initialization: {err}");
        }
    }

    /// Flips the autostart registration. The cached flag follows the registry
    /// only after the external call confirms; on failure it stays put and the
    /// error propagates so the UI can keep the checkbox truthful.
    pub(crate) fn toggle_autostart(&mut self) -> Result<bool, String> {
        self.apply(ScreenEvent::ToggleAutostartRequested)?;
        Ok(self.state.autostart_enabled)
    }

    /// Write-through save: persist first, then push to the monitor. A push
    /// failure leaves storage written — persisted-but-not-enforced is
    /// reconciled on the next startup or save.
    pub(crate) fn save(&mut self, minutes: u32) -> Result<(), String> {
        self.apply(ScreenEvent::SaveRequested { minutes })
    }

    fn apply(&mut self, event: ScreenEvent) -> Result<(), String> {
        let Transition { next, effects } = transition(self.state, event);
        self.state = next;
        for effect in effects {
            self.run_effect(effect)?;
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: Effect) -> Result<(), String> {
        match effect {
            Effect::QueryAutostartState => {
                let loaded = self.autostart.is_enabled();
                if let Err(err) = &loaded {
                    tracing::warn!("autostart state query failed: {err}");
                }
                self.apply(ScreenEvent::AutostartStateLoaded(loaded))
            }
            Effect::LoadStoredTimeout => {
                self.apply(ScreenEvent::StoredTimeoutLoaded(self.store.read_timeout()))
            }
            Effect::EnableAutostart => match self.autostart.enable() {
                Ok(()) => self.apply(ScreenEvent::AutostartChangeApplied { enabled: true }),
                Err(err) => {
                    self.apply(ScreenEvent::AutostartChangeFailed)?;
                    Err(format!("failed to enable autostart: {err}"))
                }
            },
            Effect::DisableAutostart => match self.autostart.disable() {
                Ok(()) => self.apply(ScreenEvent::AutostartChangeApplied { enabled: false }),
                Err(err) => {
                    self.apply(ScreenEvent::AutostartChangeFailed)?;
                    Err(format!("failed to disable autostart: {err}"))
                }
            },
            Effect::PersistTimeout { minutes } => match self.store.write_timeout(minutes) {
                Ok(()) => self.apply(ScreenEvent::TimeoutPersisted { minutes }),
                Err(err) => {
                    self.apply(ScreenEvent::SavePersistFailed)?;
                    Err(format!("failed to persist timeout: {err}"))
                }
            },
            Effect::PushTimeout { minutes } => match self.inactivity.set_timeout(minutes) {
                Ok(()) => Ok(()),
                Err(err) => {
                    self.apply(ScreenEvent::SavePushFailed)?;
                    Err(format!(
                        "timeout saved, but the inactivity monitor rejected it: {err}"
                    ))
                }
            },
            Effect::PushTimeoutBestEffort { minutes } => {
                // Intentionally dropped failure: startup must not surface
                // monitor errors, and the persisted value is retried on the
                // next save or startup anyway.
                if let Err(err) = self.inactivity.set_timeout(minutes) {
                    tracing::warn!("startup push of stored timeout failed: {err}");
                }
                Ok(())
            }
        }
    }
}
