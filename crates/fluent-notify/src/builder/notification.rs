//! Notification construction.

use fluent_notify_core::{Error, Field, ImageRef, ResourceId, ResourceTable, Result};

use crate::builder::action::ActionBuilder;
use crate::builder::intent::{IntentBuilder, IntentSource};
use crate::builder::style::{
    BigTextStyleBuilder, InboxStyleBuilder, MessagingStyleBuilder, StyleKind,
};
use crate::kinds::{Category, GroupAlert};
use crate::types::{BadgeIcon, Behaviour, GroupInfo, IntentSpec, Lights, Notification};

/// Shared parameters threaded from the core builder into every
/// notification build: the channel it posts on, the behaviour, and group
/// membership.
#[derive(Debug, Clone)]
pub(crate) struct NotificationParams {
    pub channel_id: String,
    pub behaviour: Behaviour,
    pub group: Option<GroupParams>,
    pub summary: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct GroupParams {
    pub key: String,
    pub alert: GroupAlert,
}

/// Light timing applied whenever a light color is configured.
const LIGHT_ON_MS: u32 = 300;
const LIGHT_OFF_MS: u32 = 1000;

/// Builder for a [`Notification`].
///
/// Title and small icon are required; everything else is optional. The
/// content intent is set-once, since silently replacing a tap action would
/// hide a programming error.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    title: Field<String>,
    content_text: Field<String>,
    small_icon: Field<ImageRef>,
    category: Option<Category>,
    content_intent: Field<IntentSource>,
    auto_cancel: bool,
    style: Option<StyleKind>,
    actions: Vec<ActionBuilder>,
    error: Option<Error>,
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBuilder {
    pub(crate) fn new() -> Self {
        Self {
            title: Field::required("NotificationBuilder", "title"),
            content_text: Field::optional("NotificationBuilder", "content_text"),
            small_icon: Field::required("NotificationBuilder", "small_icon"),
            category: None,
            content_intent: Field::optional_once("NotificationBuilder", "content_intent"),
            auto_cancel: false,
            style: None,
            actions: Vec::new(),
            error: None,
        }
    }

    fn record(&mut self, result: Result<()>) {
        if self.error.is_none() {
            if let Err(err) = result {
                self.error = Some(err);
            }
        }
    }

    /// Content title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.title.set(title.into());
        self
    }

    /// Text resource holding the content title.
    pub fn title_res(&mut self, id: ResourceId) -> &mut Self {
        self.title.set_res(id);
        self
    }

    /// Content text.
    pub fn content_text(&mut self, text: impl Into<String>) -> &mut Self {
        let _ = self.content_text.set(text.into());
        self
    }

    /// Text resource holding the content text.
    pub fn content_text_res(&mut self, id: ResourceId) -> &mut Self {
        self.content_text.set_res(id);
        self
    }

    /// Small icon shown in the status area.
    pub fn small_icon(&mut self, icon: ImageRef) -> &mut Self {
        let _ = self.small_icon.set(icon);
        self
    }

    /// Image resource holding the small icon.
    pub fn small_icon_res(&mut self, id: ResourceId) -> &mut Self {
        self.small_icon.set_res(id);
        self
    }

    /// Semantic category.
    pub fn category(&mut self, category: Category) -> &mut Self {
        self.category = Some(category);
        self
    }

    /// Add an action button.
    pub fn add_action(&mut self, block: impl FnOnce(&mut ActionBuilder)) -> &mut Self {
        let mut builder = ActionBuilder::new();
        block(&mut builder);
        self.actions.push(builder);
        self
    }

    /// Describe what tapping the notification body launches. Allowed
    /// exactly once.
    ///
    /// `auto_cancel` controls whether the tap also dismisses the
    /// notification.
    pub fn on_content_action(
        &mut self,
        auto_cancel: bool,
        block: impl FnOnce(&mut IntentBuilder),
    ) -> &mut Self {
        let mut intent = IntentBuilder::new();
        block(&mut intent);
        let result = self.content_intent.set(IntentSource::Deferred(intent));
        self.record(result);
        self.auto_cancel = auto_cancel;
        self
    }

    /// Attach an already-built content intent. Allowed exactly once,
    /// counting `on_content_action` calls.
    pub fn content_intent(&mut self, intent: IntentSpec, auto_cancel: bool) -> &mut Self {
        let result = self.content_intent.set(IntentSource::Built(intent));
        self.record(result);
        self.auto_cancel = auto_cancel;
        self
    }

    /// Use a big-text style. A later style block replaces an earlier one.
    pub fn style_big_text(&mut self, block: impl FnOnce(&mut BigTextStyleBuilder)) -> &mut Self {
        let mut builder = BigTextStyleBuilder::new();
        block(&mut builder);
        self.style = Some(StyleKind::BigText(builder));
        self
    }

    /// Use an inbox style. A later style block replaces an earlier one.
    pub fn style_inbox(&mut self, block: impl FnOnce(&mut InboxStyleBuilder)) -> &mut Self {
        let mut builder = InboxStyleBuilder::new();
        block(&mut builder);
        self.style = Some(StyleKind::Inbox(builder));
        self
    }

    /// Use a messaging style. A later style block replaces an earlier one.
    pub fn style_messaging(&mut self, block: impl FnOnce(&mut MessagingStyleBuilder)) -> &mut Self {
        let mut builder = MessagingStyleBuilder::new();
        block(&mut builder);
        self.style = Some(StyleKind::Messaging(builder));
        self
    }

    pub(crate) fn build(
        &self,
        table: &dyn ResourceTable,
        params: &NotificationParams,
    ) -> Result<Notification> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let title = self.title.require_with(table)?;
        let style = match &self.style {
            Some(kind) => Some(kind.build(table, &title)?),
            None => None,
        };
        let actions = self
            .actions
            .iter()
            .map(|action| action.build(table))
            .collect::<Result<Vec<_>>>()?;
        let content_intent = match self.content_intent.get()? {
            Some(source) => Some(source.build(table)?),
            None => None,
        };

        let behaviour = &params.behaviour;
        Ok(Notification {
            channel_id: params.channel_id.clone(),
            title,
            content_text: self.content_text.resolve(table)?,
            small_icon: self.small_icon.require_with(table)?,
            badge: if behaviour.show_badge {
                BadgeIcon::Small
            } else {
                BadgeIcon::None
            },
            category: self.category,
            priority: behaviour.importance.priority(),
            lights: behaviour.light_color.map(|color| Lights {
                color,
                on_ms: LIGHT_ON_MS,
                off_ms: LIGHT_OFF_MS,
            }),
            sound: behaviour.sound.clone(),
            vibration_pattern: behaviour.vibration_pattern.clone(),
            defaults: behaviour.defaults.clone(),
            style,
            content_intent,
            auto_cancel: self.auto_cancel,
            actions,
            group: params.group.as_ref().map(|group| GroupInfo {
                key: group.key.clone(),
                alert: group.alert,
                summary: params.summary,
            }),
        })
    }
}
