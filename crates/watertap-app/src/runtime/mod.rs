//! App runtime - owns state, executes effects, applies async results.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers run in spawned tokio tasks and send one `UiEvent` to `inbox_tx`
//! - A handler that panics still yields its `*Completed` event, carrying
//!   `ApiError::Interrupted`, so its task always finishes
//! - The runtime receives from `inbox_rx` and dispatches through the reducer
//! - State is therefore only mutated on the task that owns the runtime
//!
//! Structure:
//! - `mod.rs`: Core runtime (AppRuntime, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (server calls)

mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;

pub use inbox::{UiEventReceiver, UiEventSender};
use tracing::{debug, warn};
use watertap_core::api::{ApiError, AuthApi};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update;

/// Owns the application state for one session.
///
/// Effects spawn tokio tasks, so events must be dispatched from within a
/// tokio runtime.
pub struct AppRuntime<A: AuthApi> {
    /// Application state.
    pub state: AppState,
    api: Arc<A>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - drained by `settle` and `drain_inbox`.
    inbox_rx: UiEventReceiver,
}

impl<A: AuthApi> AppRuntime<A> {
    pub fn new(api: A) -> Self {
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<A>) -> Self {
        let (inbox_tx, inbox_rx) = inbox::channel();
        Self {
            state: AppState::new(),
            api,
            inbox_tx,
            inbox_rx,
        }
    }

    /// Sender for injecting events from outside the runtime.
    pub fn sender(&self) -> UiEventSender {
        self.inbox_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Runs one event through the reducer and executes its effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Applies every event already waiting in the inbox.
    pub fn drain_inbox(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    /// Applies inbox events until no task is in flight.
    pub async fn settle(&mut self) {
        self.drain_inbox();
        while self.state.tasks.is_any_running() {
            // The runtime holds a sender, so the channel never closes here.
            let Some(event) = self.inbox_rx.recv().await else {
                break;
            };
            self.dispatch(event);
        }
    }

    /// Spawns an async effect and sends its result event to the inbox.
    ///
    /// `on_abort` builds the event sent instead when the handler task panics
    /// or is cancelled.
    fn spawn_effect<F, Fut, E>(&self, f: F, on_abort: E)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
        E: FnOnce(ApiError) -> UiEvent + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let handle = tokio::spawn(f());
        tokio::spawn(async move {
            let event = match handle.await {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "effect task ended abnormally");
                    on_abort(ApiError::Interrupted(err.to_string()))
                }
            };
            if tx.send(event).is_err() {
                debug!("runtime gone, dropping result");
            }
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SpawnLogin { task, credentials } => {
                let api = Arc::clone(&self.api);
                self.spawn_effect(
                    move || handlers::login(api, task, credentials),
                    move |err| UiEvent::LoginCompleted {
                        task,
                        result: Err(err),
                    },
                );
            }
            UiEffect::SpawnSignup { task, form } => {
                let api = Arc::clone(&self.api);
                self.spawn_effect(
                    move || handlers::signup(api, task, form),
                    move |err| UiEvent::SignupCompleted {
                        task,
                        result: Err(err),
                    },
                );
            }
            UiEffect::FetchUsage { task, token, date } => {
                let api = Arc::clone(&self.api);
                self.spawn_effect(
                    move || handlers::fetch_usage(api, task, token, date),
                    move |err| UiEvent::UsageLoaded {
                        task,
                        date,
                        result: Err(err),
                    },
                );
            }
        }
    }
}
