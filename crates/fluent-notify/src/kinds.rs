//! Closed enumerations used across builders and built objects.

use std::fmt;

/// Importance of a notification and its channel.
///
/// Maps onto both the channel-level importance scale and the legacy
/// per-notification priority scale, so one setting drives both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Importance {
    /// No sound, no visual interruption.
    Min,
    /// No sound.
    Low,
    /// Makes a sound.
    #[default]
    Default,
    /// Makes a sound and peeks onto the screen.
    High,
    /// Highest level; reserved for urgent interruptions.
    Max,
}

impl Importance {
    /// The per-notification priority value (-2..=2).
    pub fn priority(self) -> i8 {
        match self {
            Self::Min => -2,
            Self::Low => -1,
            Self::Default => 0,
            Self::High => 1,
            Self::Max => 2,
        }
    }

    /// The channel importance value (1..=5).
    pub fn channel_importance(self) -> u8 {
        match self {
            Self::Min => 1,
            Self::Low => 2,
            Self::Default => 3,
            Self::High => 4,
            Self::Max => 5,
        }
    }
}

/// Semantic category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Alarm or timer.
    Alarm,
    /// Incoming call or similar synchronous communication request.
    Call,
    /// Asynchronous bulk message (email).
    Email,
    /// Error in background operation or authentication status.
    Error,
    /// Calendar event.
    Event,
    /// Incoming direct message.
    Message,
    /// Map turn-by-turn instruction.
    Navigation,
    /// Progress of a long-running background operation.
    Progress,
    /// Promotion or advertisement.
    Promo,
    /// Specific, timely recommendation.
    Recommendation,
    /// User-scheduled reminder.
    Reminder,
    /// Running background service.
    Service,
    /// Social network update.
    Social,
    /// Ongoing information about device or context status.
    Status,
    /// System or device status update.
    System,
    /// Media transport control for playback.
    Transport,
}

impl Category {
    /// The platform string identifier for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alarm => "alarm",
            Self::Call => "call",
            Self::Email => "email",
            Self::Error => "err",
            Self::Event => "event",
            Self::Message => "msg",
            Self::Navigation => "navigation",
            Self::Progress => "progress",
            Self::Promo => "promo",
            Self::Recommendation => "recommendation",
            Self::Reminder => "reminder",
            Self::Service => "service",
            Self::Social => "social",
            Self::Status => "status",
            Self::System => "sys",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-default behaviours a notification or channel can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefaultBehaviour {
    /// Use the platform default notification sound.
    Sound,
    /// Use the platform default vibration pattern.
    Vibration,
    /// Use the platform default light color and pattern.
    Lights,
}

/// Which members of a notification group may alert the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GroupAlert {
    /// Every posted notification may alert.
    All,
    /// Only the group summary may alert.
    Summary,
    /// Only child notifications may alert.
    #[default]
    Children,
}
