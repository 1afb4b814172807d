use tracing::debug;

use super::{reduce, Action, AppState};

type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

/// Owns the current `AppState` and replaces it on every dispatch.
///
/// There is no global instance: whoever needs the state holds the store (or
/// a borrow of it). Subscribers are called after each dispatch with the new
/// state.
pub struct Store {
    state: AppState,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// A store holding an empty `AppState`.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of actions dispatched so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called with the new state after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(listener));
    }

    /// Reduce `action` against the current state and make the result current.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        let name = action.name();
        self.state = reduce(&self.state, action);
        self.revision += 1;
        debug!(action = name, revision = self.revision, "dispatched");
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Consume the store, returning the final state.
    pub fn into_state(self) -> AppState {
        self.state
    }
}
