//! The builder DSL.
//!
//! One construction call receives a [`CoreBuilder`] and configures its
//! sections through nested closures; every configurable value inside is a
//! validated field from `fluent_notify_core`, so "literal or resource id"
//! and required/once rules are uniform across all builders.

pub(crate) mod action;
pub(crate) mod behaviour;
pub(crate) mod channel;
pub(crate) mod core;
pub(crate) mod intent;
pub(crate) mod notification;
pub(crate) mod person;
pub(crate) mod style;

pub use action::ActionBuilder;
pub use behaviour::BehaviourBuilder;
pub use channel::ChannelBuilder;
pub use core::{CoreBuilder, GroupBuilder};
pub use intent::IntentBuilder;
pub use notification::NotificationBuilder;
pub use person::PersonBuilder;
pub use style::{BigTextStyleBuilder, InboxStyleBuilder, MessageBuilder, MessagingStyleBuilder};
