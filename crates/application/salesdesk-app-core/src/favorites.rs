//! Shared "current favorite" cell with replay-on-subscribe.
//!
//! One `FavoriteChannel` is built by the [`Console`](crate::Console) and handed
//! to every component that shows or picks the favorite. Components never keep
//! their own source-of-truth copy; they hold a subscription instead.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::debug;

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

struct ChannelState {
    value: String,
    generation: u64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone)]
pub struct FavoriteChannel {
    inner: Arc<Mutex<ChannelState>>,
}

impl Default for FavoriteChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteChannel {
    /// Starts with an empty favorite.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChannelState {
                value: String::new(),
                generation: 0,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ChannelState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> String {
        self.state().value.clone()
    }

    /// Replace the favorite and notify every live subscriber, in subscription
    /// order, before returning.
    ///
    /// Listeners run outside the internal lock, so a listener may publish or
    /// subscribe itself. A publish made from inside a notification takes over:
    /// it notifies every subscriber with the newer value and the outer round
    /// stops, so no subscriber is left holding the older one.
    pub fn publish(&self, value: impl Into<String>) {
        let value = value.into();
        let (generation, listeners) = {
            let mut state = self.state();
            state.value = value.clone();
            state.generation += 1;
            let listeners: Vec<Listener> =
                state.listeners.iter().map(|(_, l)| l.clone()).collect();
            (state.generation, listeners)
        };
        debug!(favorite = %value, subscribers = listeners.len(), "favorite published");
        for listener in listeners {
            if self.state().generation != generation {
                debug!(favorite = %value, "publish superseded by a nested publish");
                break;
            }
            listener(&value);
        }
    }

    /// Register `listener`; it is called with the current value right away and
    /// then with every later publish until the returned guard is dropped.
    pub fn subscribe(
        &self,
        listener: impl Fn(&str) + Send + Sync + 'static,
    ) -> FavoriteSubscription {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut state = self.state();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener.clone()));
            (id, state.value.clone())
        };
        listener(&current);
        FavoriteSubscription {
            channel: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state().listeners.len()
    }
}

/// Live registration on a [`FavoriteChannel`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct FavoriteSubscription {
    channel: Weak<Mutex<ChannelState>>,
    id: u64,
}

impl Drop for FavoriteSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            let mut state = inner.lock().unwrap_or_else(PoisonError::into_inner);
            state.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Header widget state: shows whoever was last picked as favorite.
pub struct FavoriteDisplay {
    shown: Arc<Mutex<String>>,
    _subscription: FavoriteSubscription,
}

impl FavoriteDisplay {
    pub fn new(channel: &FavoriteChannel) -> Self {
        let shown = Arc::new(Mutex::new(String::new()));
        let sink = shown.clone();
        let subscription = channel.subscribe(move |value| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
        });
        Self {
            shown,
            _subscription: subscription,
        }
    }

    pub fn shown(&self) -> String {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
