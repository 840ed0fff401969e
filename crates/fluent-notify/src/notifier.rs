//! The delivery boundary.
//!
//! The DSL assembles [`Notification`]s and [`Channel`]s; a [`Notifier`]
//! delivers them. Hosts plug in their platform's sink; [`MemoryNotifier`]
//! keeps everything in memory for tests and headless use.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::types::{Channel, Notification};

/// Target name for dispatch log filtering.
pub const DISPATCH_TARGET: &str = "fluent_notify::dispatch";

/// A sink for built channels and notifications.
///
/// Channel creation is idempotent from the caller's perspective: the DSL
/// re-creates the channel on every construction, exactly as the platform
/// API tolerates.
pub trait Notifier {
    /// Register (or re-register) a channel.
    fn create_channel(&self, channel: &Channel);

    /// Post a notification under `(tag, id)`, replacing any previous one
    /// with the same key.
    fn notify(&self, tag: Option<&str>, id: i32, notification: Notification);

    /// Remove the notification posted under `(tag, id)`, if any.
    fn cancel(&self, tag: Option<&str>, id: i32);
}

#[derive(Debug, Default)]
struct MemoryState {
    channels: HashMap<String, Channel>,
    active: HashMap<(Option<String>, i32), Notification>,
}

/// In-memory [`Notifier`] recording everything it is handed.
///
/// The default sink for tests and for hosts that render notifications
/// themselves.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    state: Mutex<MemoryState>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// All channels created so far, in unspecified order.
    pub fn channels(&self) -> Vec<Channel> {
        self.state.lock().channels.values().cloned().collect()
    }

    /// Look up a channel by id.
    pub fn channel(&self, id: &str) -> Option<Channel> {
        self.state.lock().channels.get(id).cloned()
    }

    /// The notification currently posted under `(tag, id)`, if any.
    pub fn posted(&self, tag: Option<&str>, id: i32) -> Option<Notification> {
        self.state
            .lock()
            .active
            .get(&(tag.map(str::to_owned), id))
            .cloned()
    }

    /// Number of currently posted notifications.
    pub fn active_count(&self) -> usize {
        self.state.lock().active.len()
    }
}

impl Notifier for MemoryNotifier {
    fn create_channel(&self, channel: &Channel) {
        tracing::debug!(target: DISPATCH_TARGET, id = %channel.id, "create channel");
        self.state
            .lock()
            .channels
            .insert(channel.id.clone(), channel.clone());
    }

    fn notify(&self, tag: Option<&str>, id: i32, notification: Notification) {
        tracing::debug!(target: DISPATCH_TARGET, ?tag, id, "post notification");
        self.state
            .lock()
            .active
            .insert((tag.map(str::to_owned), id), notification);
    }

    fn cancel(&self, tag: Option<&str>, id: i32) {
        tracing::debug!(target: DISPATCH_TARGET, ?tag, id, "cancel notification");
        self.state.lock().active.remove(&(tag.map(str::to_owned), id));
    }
}
