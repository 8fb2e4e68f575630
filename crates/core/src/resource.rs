//! Keyed async resource shared by the transcript and quiz panels.
//!
//! A [`Query`] remembers which key it was last asked for and hands out a
//! [`Ticket`] for every fetch it wants performed. Results are applied only
//! when their ticket is still the current one, so a fetch that was superseded
//! by a newer key (or by a reset) can land late without clobbering anything.

use std::fmt::Display;

use tracing::{debug, warn};

/// What the panel should render for the current key.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// No key yet; nothing was requested.
    Idle,
    Loading,
    /// The fetch failed. Detail is logged, not rendered.
    Failed,
    Loaded(T),
}

/// Render-ready view of a [`Resource`], with "loaded but empty" split out.
#[derive(Debug, PartialEq)]
pub enum Phase<'a, T> {
    Idle,
    Loading,
    Failed,
    Empty,
    Ready(&'a T),
}

/// Proof that a fetch was requested for `key` at `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

#[derive(Debug)]
pub struct Query<K, T> {
    name: &'static str,
    key: Option<K>,
    generation: u64,
    state: Resource<T>,
}

impl<K, T> Query<K, T>
where
    K: Clone + PartialEq + Display,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            key: None,
            generation: 0,
            state: Resource::Idle,
        }
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &Resource<T> {
        &self.state
    }

    /// Point the query at `key`. Returns a ticket when a fetch must be issued;
    /// `None` when the key is absent or data for it is already loading or loaded.
    pub fn load(&mut self, key: Option<K>) -> Option<Ticket<K>> {
        let Some(key) = key else {
            self.clear();
            return None;
        };

        let same_key = self.key.as_ref() == Some(&key);
        if same_key && matches!(self.state, Resource::Loading | Resource::Loaded(_)) {
            return None;
        }

        Some(self.issue(key))
    }

    /// Fetch the current key again, regardless of its state.
    pub fn refetch(&mut self) -> Option<Ticket<K>> {
        let key = self.key.clone()?;
        Some(self.issue(key))
    }

    /// Forget the key and invalidate any fetch still in flight.
    pub fn clear(&mut self) {
        self.key = None;
        self.generation += 1;
        self.state = Resource::Idle;
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and the result was dropped.
    pub fn resolve<E: Display>(&mut self, ticket: Ticket<K>, result: Result<T, E>) -> bool {
        let current = ticket.generation == self.generation && self.key.as_ref() == Some(&ticket.key);
        if !current {
            debug!(
                query = self.name,
                key = %ticket.key,
                generation = ticket.generation,
                "Discarding stale result"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => Resource::Loaded(data),
            Err(e) => {
                warn!(query = self.name, key = %ticket.key, error = %e, "Fetch failed");
                Resource::Failed
            }
        };
        true
    }

    /// Project the state for rendering, using `is_empty` to detect the "no data" case.
    pub fn phase(&self, is_empty: impl FnOnce(&T) -> bool) -> Phase<'_, T> {
        match &self.state {
            Resource::Idle => Phase::Idle,
            Resource::Loading => Phase::Loading,
            Resource::Failed => Phase::Failed,
            Resource::Loaded(data) if is_empty(data) => Phase::Empty,
            Resource::Loaded(data) => Phase::Ready(data),
        }
    }

    fn issue(&mut self, key: K) -> Ticket<K> {
        self.key = Some(key.clone());
        self.generation += 1;
        self.state = Resource::Loading;
        Ticket {
            key,
            generation: self.generation,
        }
    }
}
