//! fluent-notify - a declarative builder DSL for notifications.
//!
//! This crate replaces verbose imperative notification assembly with a
//! nested-block syntax. Every configurable value can be set directly or
//! deferred to a resource id, required values are validated, and set-once
//! values fail loudly on a second write - all through the field framework
//! in `fluent_notify_core`.
//!
//! The platform is abstracted behind two traits: a
//! [`ResourceTable`](fluent_notify_core::ResourceTable) that resolves
//! resource ids, and a [`Notifier`] that delivers built channels and
//! notifications. [`MapResourceTable`](fluent_notify_core::MapResourceTable)
//! and [`MemoryNotifier`] are in-memory implementations for tests and
//! headless hosts.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fluent_notify::{Importance, MemoryNotifier, NotifyContext};
//! use fluent_notify_core::{ImageRef, MapResourceTable, ResourceId};
//!
//! const TITLE: ResourceId = ResourceId(42);
//!
//! let resources = MapResourceTable::new().with_text(TITLE, "Download complete");
//! let notifier = Arc::new(MemoryNotifier::new());
//! let ctx = NotifyContext::new(Arc::new(resources), notifier.clone());
//!
//! ctx.show_notification(1, None, |core| {
//!     core.channel(|c| {
//!         c.id("downloads").name("Downloads");
//!     })
//!     .behaviour(|b| {
//!         b.importance(Importance::High).vibration_pattern([100, 200, 100]);
//!     })
//!     .notification(|n| {
//!         n.title_res(TITLE)
//!             .content_text("tap to open")
//!             .small_icon(ImageRef(7))
//!             .on_content_action(true, |i| {
//!                 i.start_activity("app/DownloadsScreen");
//!             });
//!     });
//! })
//! .unwrap();
//!
//! let posted = notifier.posted(None, 1).unwrap();
//! assert_eq!(posted.title, "Download complete");
//! assert_eq!(posted.channel_id, "downloads");
//! ```

pub mod builder;
mod context;
mod kinds;
mod notifier;
mod types;

pub use builder::{
    ActionBuilder, BehaviourBuilder, BigTextStyleBuilder, ChannelBuilder, CoreBuilder,
    GroupBuilder, InboxStyleBuilder, IntentBuilder, MessageBuilder, MessagingStyleBuilder,
    NotificationBuilder, PersonBuilder,
};
pub use context::NotifyContext;
pub use kinds::{Category, DefaultBehaviour, GroupAlert, Importance};
pub use notifier::{MemoryNotifier, Notifier, DISPATCH_TARGET};
pub use types::{
    Action, BadgeIcon, Behaviour, Channel, GroupInfo, IntentSpec, IntentTarget, Lights, Message,
    Notification, Person, Style,
};

pub use fluent_notify_core::{Error, Result};
