//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal frontends but
//! plays back a script of key presses. It implements [`Driver`] so the same
//! [`tcpline_app::Runtime`] orchestration code runs in both production and
//! simulation.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tcpline_app::{App, AppEvent, Driver, Entry, KeyInput};

use crate::invariants::{EditorSnapshot, InvariantRegistry};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// One step of a simulated user session.
#[derive(Debug, Clone)]
pub enum Step {
    /// Press a key.
    Key(KeyInput),
    /// Deliver an arbitrary event.
    Event(AppEvent),
    /// Wait until this many responses have been rendered in total.
    AwaitResponses(usize),
    /// Fail the next poll with a driver error.
    Fail(String),
}

impl Step {
    /// Steps typing `text` character by character.
    pub fn type_text(text: &str) -> impl Iterator<Item = Step> + '_ {
        text.chars().map(|c| Step::Key(KeyInput::Char(c)))
    }
}

/// Shared state between the driver and its [`SimHandle`].
#[derive(Default)]
struct SharedState {
    script: VecDeque<Step>,
    renders: usize,
    responses_seen: usize,
    last_frame: Option<App>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Once the script runs out the driver waits forever, like a user who stopped
/// typing; scripts normally end with [`KeyInput::Esc`].
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<InvariantRegistry>,
}

impl SimDriver {
    /// Create a driver that plays back `script`.
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        let state = SharedState { script: script.into_iter().collect(), ..Default::default() };
        Self { state: Arc::new(Mutex::new(state)), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Handle for inspecting the driver after the runtime consumed it.
    pub fn handle(&self) -> SimHandle {
        SimHandle { state: Arc::clone(&self.state) }
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let next = {
            let mut state = self.lock();
            let awaiting = match state.script.front() {
                Some(Step::AwaitResponses(n)) => Some(*n),
                _ => None,
            };
            match awaiting {
                Some(n) if state.responses_seen < n => None,
                Some(_) => {
                    state.script.pop_front();
                    return Ok(None);
                },
                None => state.script.pop_front(),
            }
        };

        match next {
            Some(Step::Key(key)) => Ok(Some(AppEvent::Key(key))),
            Some(Step::Event(event)) => Ok(Some(event)),
            Some(Step::Fail(message)) => Err(SimDriverError(message)),
            Some(Step::AwaitResponses(_)) | None => std::future::pending().await,
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        if let Some(ref registry) = self.invariants {
            registry.assert_all(&EditorSnapshot::from_app(app), "render");
        }

        let mut state = self.lock();
        state.renders = state.renders.saturating_add(1);
        state.responses_seen =
            app.transcript().iter().filter(|e| matches!(e, Entry::Received(_))).count();
        state.last_frame = Some(app.clone());
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}

/// Read-only view of a [`SimDriver`]'s observations.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SharedState>>,
}

impl SimHandle {
    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.lock().renders
    }

    /// App state as of the last render.
    pub fn last_frame(&self) -> Option<App> {
        self.lock().last_frame.clone()
    }

    /// Whether the runtime stopped the driver.
    pub fn stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Script steps not yet consumed.
    pub fn remaining_steps(&self) -> usize {
        self.lock().script.len()
    }
}
