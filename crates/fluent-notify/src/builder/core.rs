//! The top-level builder that one construction call revolves around.

use fluent_notify_core::{ResourceTable, Result};

use crate::builder::behaviour::BehaviourBuilder;
use crate::builder::channel::ChannelBuilder;
use crate::builder::notification::{GroupParams, NotificationBuilder, NotificationParams};
use crate::kinds::GroupAlert;
use crate::types::{Channel, Notification};

/// Builder receiving the block of a construction entry point.
///
/// Owns the channel, behaviour, group and notification sub-builders and
/// threads the shared parameters between them: the channel id ends up on
/// the notification, the behaviour on both channel and notification, and
/// the group key on the summary and every child.
#[derive(Debug)]
pub struct CoreBuilder {
    id: i32,
    tag: Option<String>,
    channel: ChannelBuilder,
    behaviour: BehaviourBuilder,
    notification: NotificationBuilder,
    group: Option<GroupBuilder>,
}

impl CoreBuilder {
    pub(crate) fn new(id: i32, tag: Option<String>) -> Self {
        Self {
            id,
            tag,
            channel: ChannelBuilder::new(),
            behaviour: BehaviourBuilder::new(),
            notification: NotificationBuilder::new(),
            group: None,
        }
    }

    /// Id the notification will be posted under.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Tag the notification will be posted under, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// REQUIRED. Configure the channel the notification posts on.
    pub fn channel(&mut self, block: impl FnOnce(&mut ChannelBuilder)) -> &mut Self {
        block(&mut self.channel);
        self
    }

    /// Configure the interruption behaviour shared by the channel and the
    /// notification.
    pub fn behaviour(&mut self, block: impl FnOnce(&mut BehaviourBuilder)) -> &mut Self {
        block(&mut self.behaviour);
        self
    }

    /// REQUIRED. Configure the notification itself.
    pub fn notification(&mut self, block: impl FnOnce(&mut NotificationBuilder)) -> &mut Self {
        block(&mut self.notification);
        self
    }

    /// Post the notification as part of a group, together with a summary
    /// notification configured in the block.
    ///
    /// The group key is `tag` when given, otherwise the decimal form of
    /// `id`.
    pub fn group_by(
        &mut self,
        id: i32,
        tag: Option<&str>,
        block: impl FnOnce(&mut GroupBuilder),
    ) -> &mut Self {
        let mut group = GroupBuilder::new(id, tag.map(str::to_owned));
        block(&mut group);
        self.group = Some(group);
        self
    }

    pub(crate) fn build(self, table: &dyn ResourceTable) -> Result<Assembled> {
        let behaviour = self.behaviour.build(table)?;
        let channel = self.channel.build(table, &behaviour)?;

        let group_params = self.group.as_ref().map(|group| GroupParams {
            key: group
                .tag
                .clone()
                .unwrap_or_else(|| group.id.to_string()),
            alert: group.alert,
        });

        let group = match &self.group {
            Some(group) => {
                let params = NotificationParams {
                    channel_id: channel.id.clone(),
                    behaviour: behaviour.clone(),
                    group: group_params.clone(),
                    summary: true,
                };
                Some(PostedGroup {
                    id: group.id,
                    tag: group.tag.clone(),
                    notification: group.summary.build(table, &params)?,
                })
            }
            None => None,
        };

        let params = NotificationParams {
            channel_id: channel.id.clone(),
            behaviour,
            group: group_params,
            summary: false,
        };
        let notification = self.notification.build(table, &params)?;

        Ok(Assembled {
            channel,
            group,
            notification,
        })
    }
}

/// Group section of a [`CoreBuilder`]: the summary notification plus the
/// alert policy for the group.
#[derive(Debug)]
pub struct GroupBuilder {
    id: i32,
    tag: Option<String>,
    alert: GroupAlert,
    summary: NotificationBuilder,
}

impl GroupBuilder {
    fn new(id: i32, tag: Option<String>) -> Self {
        Self {
            id,
            tag,
            alert: GroupAlert::default(),
            summary: NotificationBuilder::new(),
        }
    }

    /// Which members of the group may alert. Defaults to children only.
    pub fn alert(&mut self, alert: GroupAlert) -> &mut Self {
        self.alert = alert;
        self
    }

    /// Configure the summary notification posted for the group.
    pub fn summary(&mut self, block: impl FnOnce(&mut NotificationBuilder)) -> &mut Self {
        block(&mut self.summary);
        self
    }
}

/// Everything one construction produces.
#[derive(Debug)]
pub(crate) struct Assembled {
    pub channel: Channel,
    pub group: Option<PostedGroup>,
    pub notification: Notification,
}

/// A group summary to be posted alongside the notification.
#[derive(Debug)]
pub(crate) struct PostedGroup {
    pub id: i32,
    pub tag: Option<String>,
    pub notification: Notification,
}
