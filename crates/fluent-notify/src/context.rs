//! The construction entry points.

use std::sync::Arc;

use fluent_notify_core::{Error, ResourceId, ResourceTable, Result};

use crate::builder::core::CoreBuilder;
use crate::notifier::{Notifier, DISPATCH_TARGET};
use crate::types::Notification;

/// Host context tying the DSL to a resource table and a notification sink.
///
/// One context is typically created per application and shared; each
/// construction call builds everything within a single call stack, so the
/// builders themselves are never shared.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use fluent_notify::{MemoryNotifier, NotifyContext};
/// use fluent_notify_core::{ImageRef, MapResourceTable};
///
/// let notifier = Arc::new(MemoryNotifier::new());
/// let ctx = NotifyContext::new(Arc::new(MapResourceTable::new()), notifier.clone());
///
/// ctx.show_notification(1, None, |core| {
///     core.channel(|c| {
///         c.id("updates").name("Updates");
///     })
///     .notification(|n| {
///         n.title("Hello").small_icon(ImageRef(1));
///     });
/// })
/// .unwrap();
///
/// assert!(notifier.posted(None, 1).is_some());
/// ```
pub struct NotifyContext {
    resources: Arc<dyn ResourceTable>,
    notifier: Arc<dyn Notifier>,
}

impl NotifyContext {
    /// Create a context from a resource table and a notifier.
    pub fn new(resources: Arc<dyn ResourceTable>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            resources,
            notifier,
        }
    }

    /// The resource table fallback ids resolve against.
    pub fn resources(&self) -> &Arc<dyn ResourceTable> {
        &self.resources
    }

    /// Build a notification without posting it.
    ///
    /// The channel is created on the notifier, and the group summary (if a
    /// `group_by` block was used) is posted, since both must exist for the
    /// returned notification to be meaningful.
    pub fn create_notification(
        &self,
        id: i32,
        tag: Option<&str>,
        block: impl FnOnce(&mut CoreBuilder),
    ) -> Result<Notification> {
        let mut core = CoreBuilder::new(id, tag.map(str::to_owned));
        block(&mut core);
        let assembled = core.build(self.resources.as_ref())?;

        self.notifier.create_channel(&assembled.channel);
        if let Some(group) = assembled.group {
            tracing::debug!(target: DISPATCH_TARGET, id = group.id, "posting group summary");
            self.notifier
                .notify(group.tag.as_deref(), group.id, group.notification);
        }
        Ok(assembled.notification)
    }

    /// Build a notification and post it under `(tag, id)`.
    pub fn show_notification(
        &self,
        id: i32,
        tag: Option<&str>,
        block: impl FnOnce(&mut CoreBuilder),
    ) -> Result<()> {
        let notification = self.create_notification(id, tag, block)?;
        self.notifier.notify(tag, id, notification);
        Ok(())
    }

    /// Remove the notification posted under `(tag, id)`, if any.
    pub fn cancel_notification(&self, id: i32, tag: Option<&str>) {
        self.notifier.cancel(tag, id);
    }

    /// Like [`NotifyContext::create_notification`], with the id and tag
    /// themselves resolved from resources.
    pub fn create_notification_res(
        &self,
        id_res: ResourceId,
        tag_res: Option<ResourceId>,
        block: impl FnOnce(&mut CoreBuilder),
    ) -> Result<Notification> {
        let (id, tag) = self.resolve_key(id_res, tag_res)?;
        self.create_notification(id, tag.as_deref(), block)
    }

    /// Like [`NotifyContext::show_notification`], with the id and tag
    /// themselves resolved from resources.
    pub fn show_notification_res(
        &self,
        id_res: ResourceId,
        tag_res: Option<ResourceId>,
        block: impl FnOnce(&mut CoreBuilder),
    ) -> Result<()> {
        let (id, tag) = self.resolve_key(id_res, tag_res)?;
        self.show_notification(id, tag.as_deref(), block)
    }

    /// Like [`NotifyContext::cancel_notification`], with the id and tag
    /// themselves resolved from resources.
    pub fn cancel_notification_res(
        &self,
        id_res: ResourceId,
        tag_res: Option<ResourceId>,
    ) -> Result<()> {
        let (id, tag) = self.resolve_key(id_res, tag_res)?;
        self.cancel_notification(id, tag.as_deref());
        Ok(())
    }

    /// Resolve the `(id, tag)` posting key from resources. A missing
    /// resource is a configuration error, not a silent default.
    fn resolve_key(
        &self,
        id_res: ResourceId,
        tag_res: Option<ResourceId>,
    ) -> Result<(i32, Option<String>)> {
        let id = self
            .resources
            .integer(id_res)
            .and_then(|value| i32::try_from(value).ok())
            .ok_or(Error::RequiredNotSet {
                owner: "NotifyContext",
                name: "id",
            })?;
        let tag = match tag_res {
            Some(res) => Some(self.resources.text(res).ok_or(Error::RequiredNotSet {
                owner: "NotifyContext",
                name: "tag",
            })?),
            None => None,
        };
        Ok((id, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MemoryNotifier;
    use fluent_notify_core::{ImageRef, MapResourceTable};

    fn context_with(table: MapResourceTable) -> (NotifyContext, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        (
            NotifyContext::new(Arc::new(table), notifier.clone()),
            notifier,
        )
    }

    #[test]
    fn show_creates_channel_and_posts() {
        let (ctx, notifier) = context_with(MapResourceTable::new());

        ctx.show_notification(3, Some("greeting"), |core| {
            core.channel(|c| {
                c.id("ch").name("Channel");
            })
            .notification(|n| {
                n.title("Hello").small_icon(ImageRef(1));
            });
        })
        .unwrap();

        assert!(notifier.channel("ch").is_some());
        let posted = notifier.posted(Some("greeting"), 3).unwrap();
        assert_eq!(posted.title, "Hello");

        ctx.cancel_notification(3, Some("greeting"));
        assert_eq!(notifier.active_count(), 0);
    }

    #[test]
    fn failed_build_posts_nothing() {
        let (ctx, notifier) = context_with(MapResourceTable::new());

        let result = ctx.show_notification(1, None, |core| {
            core.notification(|n| {
                n.title("no channel configured").small_icon(ImageRef(1));
            });
        });

        assert!(matches!(result, Err(Error::RequiredNotSet { .. })));
        assert_eq!(notifier.active_count(), 0);
        assert!(notifier.channels().is_empty());
    }

    #[test]
    fn res_entry_points_resolve_the_posting_key() {
        let table = MapResourceTable::new()
            .with_integer(ResourceId(1), 77)
            .with_text(ResourceId(2), "resolved-tag");
        let (ctx, notifier) = context_with(table);

        ctx.show_notification_res(ResourceId(1), Some(ResourceId(2)), |core| {
            core.channel(|c| {
                c.id("ch").name("Channel");
            })
            .notification(|n| {
                n.title("Hi").small_icon(ImageRef(1));
            });
        })
        .unwrap();

        assert!(notifier.posted(Some("resolved-tag"), 77).is_some());

        ctx.cancel_notification_res(ResourceId(1), Some(ResourceId(2)))
            .unwrap();
        assert_eq!(notifier.active_count(), 0);
    }

    #[test]
    fn missing_id_resource_is_an_error() {
        let (ctx, _) = context_with(MapResourceTable::new());

        let result = ctx.create_notification_res(ResourceId(404), None, |_| {});
        assert_eq!(
            result.unwrap_err(),
            Error::RequiredNotSet {
                owner: "NotifyContext",
                name: "id"
            }
        );
    }
}
