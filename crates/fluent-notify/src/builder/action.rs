//! Action button construction.

use fluent_notify_core::{Error, Field, ImageRef, ResourceId, ResourceTable, Result};

use crate::builder::intent::IntentBuilder;
use crate::types::Action;

/// Builder for an [`Action`].
///
/// Icon, text and intent are all required. The intent is set-once: a
/// second `on_action` block is a programming error, not an override.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    icon: Field<ImageRef>,
    text: Field<String>,
    intent: Field<IntentBuilder>,
    error: Option<Error>,
}

impl Default for ActionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionBuilder {
    pub(crate) fn new() -> Self {
        Self {
            icon: Field::required("ActionBuilder", "icon"),
            text: Field::required("ActionBuilder", "text"),
            intent: Field::required_once("ActionBuilder", "intent"),
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

    /// Button icon.
    pub fn icon(&mut self, icon: ImageRef) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.icon.set(icon);
        self
    }

    /// Image resource holding the button icon.
    pub fn icon_res(&mut self, id: ResourceId) -> &mut Self {
        self.icon.set_res(id);
        self
    }

    /// Button label.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let _ = self.text.set(text.into());
        self
    }

    /// Text resource holding the button label.
    pub fn text_res(&mut self, id: ResourceId) -> &mut Self {
        self.text.set_res(id);
        self
    }

    /// Describe what the button launches. Allowed exactly once.
    pub fn on_action(&mut self, block: impl FnOnce(&mut IntentBuilder)) -> &mut Self {
        let mut intent = IntentBuilder::new();
        block(&mut intent);
        let result = self.intent.set(intent);
        self.record(result);
        self
    }

    pub(crate) fn build(&self, table: &dyn ResourceTable) -> Result<Action> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(Action {
            icon: self.icon.require_with(table)?,
            text: self.text.require_with(table)?,
            intent: self.intent.require()?.build(table)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IntentTarget;
    use fluent_notify_core::MapResourceTable;

    #[test]
    fn builds_with_all_required_fields() {
        let table = MapResourceTable::new().with_text(ResourceId(1), "Reply");

        let mut builder = ActionBuilder::new();
        builder
            .icon(ImageRef(7))
            .text_res(ResourceId(1))
            .on_action(|i| {
                i.broadcast("app/ReplyReceiver");
            });

        let action = builder.build(&table).unwrap();
        assert_eq!(action.icon, ImageRef(7));
        assert_eq!(action.text, "Reply");
        assert_eq!(
            action.intent.target,
            IntentTarget::Broadcast("app/ReplyReceiver".into())
        );
    }

    #[test]
    fn missing_intent_fails() {
        let mut builder = ActionBuilder::new();
        builder.icon(ImageRef(7)).text("Reply");

        assert_eq!(
            builder.build(&MapResourceTable::new()),
            Err(Error::RequiredNotSet {
                owner: "ActionBuilder",
                name: "intent"
            })
        );
    }

    #[test]
    fn second_on_action_fails() {
        let mut builder = ActionBuilder::new();
        builder
            .icon(ImageRef(7))
            .text("Reply")
            .on_action(|i| {
                i.broadcast("app/First");
            })
            .on_action(|i| {
                i.broadcast("app/Second");
            });

        assert_eq!(
            builder.build(&MapResourceTable::new()),
            Err(Error::AlreadySet {
                owner: "ActionBuilder",
                name: "intent"
            })
        );
    }
}
