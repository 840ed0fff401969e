//! Built objects produced by the DSL.
//!
//! These are plain data types: the DSL validates and assembles them, a
//! [`crate::Notifier`] implementation delivers them. None of them hold any
//! platform handle; images are opaque [`ImageRef`]s and launch targets are
//! described by [`IntentSpec`].

use std::collections::BTreeSet;

use fluent_notify_core::ImageRef;

use crate::kinds::{Category, DefaultBehaviour, GroupAlert, Importance};

/// A fully assembled notification, ready for a [`crate::Notifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Id of the channel the notification is posted on.
    pub channel_id: String,
    /// Content title.
    pub title: String,
    /// Content text, if any.
    pub content_text: Option<String>,
    /// Small icon shown in the status area.
    pub small_icon: ImageRef,
    /// Badge treatment on launcher icons.
    pub badge: BadgeIcon,
    /// Semantic category, if any.
    pub category: Option<Category>,
    /// Legacy priority derived from the behaviour's importance.
    pub priority: i8,
    /// Notification light configuration, if lights are enabled.
    pub lights: Option<Lights>,
    /// Sound reference, if any.
    pub sound: Option<String>,
    /// Vibration pattern in milliseconds; empty disables vibration.
    pub vibration_pattern: Vec<u64>,
    /// Platform defaults the notification opts into.
    pub defaults: BTreeSet<DefaultBehaviour>,
    /// Expanded style, if any.
    pub style: Option<Style>,
    /// Launched when the notification body is tapped.
    pub content_intent: Option<IntentSpec>,
    /// Whether tapping the body dismisses the notification.
    pub auto_cancel: bool,
    /// Action buttons.
    pub actions: Vec<Action>,
    /// Group membership, when built inside a `group_by` block.
    pub group: Option<GroupInfo>,
}

/// Badge treatment for a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeIcon {
    /// No badge.
    #[default]
    None,
    /// Badge with the small icon.
    Small,
}

/// Notification light configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lights {
    /// ARGB light color.
    pub color: u32,
    /// On duration in milliseconds.
    pub on_ms: u32,
    /// Off duration in milliseconds.
    pub off_ms: u32,
}

/// Group membership of a built notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// Key shared by all members of the group.
    pub key: String,
    /// Which members may alert.
    pub alert: GroupAlert,
    /// Whether this notification is the group summary.
    pub summary: bool,
}

/// A notification channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Stable channel id.
    pub id: String,
    /// User-visible name.
    pub name: String,
    /// User-visible description, if any.
    pub description: Option<String>,
    /// Channel importance.
    pub importance: Importance,
    /// Whether the notification light is enabled.
    pub lights_enabled: bool,
    /// ARGB light color, when lights are enabled with a custom color.
    pub light_color: Option<u32>,
    /// Sound reference, if any.
    pub sound: Option<String>,
    /// Whether vibration is enabled.
    pub vibration_enabled: bool,
    /// Vibration pattern in milliseconds.
    pub vibration_pattern: Vec<u64>,
    /// Whether notifications on this channel may badge launcher icons.
    pub show_badge: bool,
    /// Platform defaults the channel opts into.
    pub defaults: BTreeSet<DefaultBehaviour>,
}

/// An action button attached to a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Button icon.
    pub icon: ImageRef,
    /// Button label.
    pub text: String,
    /// What the button launches.
    pub intent: IntentSpec,
}

/// A person referenced by a messaging-style notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Stable key identifying the person across notifications, if any.
    pub key: Option<String>,
    /// Avatar, if any.
    pub icon: Option<ImageRef>,
    /// URI identifying the person (e.g. a contacts entry), if any.
    pub uri: Option<String>,
    /// Whether the person is a bot.
    pub bot: bool,
    /// Whether the person is important to the user.
    pub important: bool,
}

/// A single message inside a messaging style.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Message text.
    pub text: String,
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: u64,
    /// The sender.
    pub sender: Person,
}

/// Expanded notification style.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    /// Large block of text.
    BigText {
        /// Expanded title; defaults to the notification title.
        title: String,
        /// The expanded text.
        text: String,
    },
    /// A list of short lines.
    Inbox {
        /// Expanded title; defaults to the notification title.
        title: String,
        /// Summary line, if any.
        summary: Option<String>,
        /// The lines, in insertion order.
        lines: Vec<String>,
    },
    /// A conversation.
    Messaging {
        /// The person owning the conversation on this device.
        person: Person,
        /// The messages, in insertion order.
        messages: Vec<Message>,
    },
}

/// What launching an action or the notification body means.
///
/// Platform-neutral stand-in for a pending intent: the [`crate::Notifier`]
/// implementation decides how to dispatch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentSpec {
    /// The launch target.
    pub target: IntentTarget,
    /// Request code disambiguating otherwise-equal intents.
    pub request_code: i32,
    /// Extra key/value payload.
    pub extras: Vec<(String, String)>,
}

/// Kind and name of a launch target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentTarget {
    /// Open a single screen.
    Activity(String),
    /// Open a stack of screens, last on top.
    Activities(Vec<String>),
    /// Deliver a broadcast.
    Broadcast(String),
    /// Start a background service.
    Service(String),
    /// Start a foreground service.
    ForegroundService(String),
}

/// A built behaviour, shared between a notification and its channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Behaviour {
    /// Importance / priority level.
    pub importance: Importance,
    /// ARGB light color, if lights are wanted.
    pub light_color: Option<u32>,
    /// Sound reference, if any.
    pub sound: Option<String>,
    /// Vibration pattern in milliseconds.
    pub vibration_pattern: Vec<u64>,
    /// Whether notifications may badge launcher icons.
    pub show_badge: bool,
    /// Platform defaults to opt into.
    pub defaults: BTreeSet<DefaultBehaviour>,
}
