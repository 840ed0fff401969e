//! Expanded style construction.
//!
//! Every style has an optional title that falls back to the title of the
//! notification owning it, so a style block never has to repeat it.

use std::time::{SystemTime, UNIX_EPOCH};

use fluent_notify_core::{Error, Field, ResourceId, ResourceTable, Result};

use crate::builder::person::PersonBuilder;
use crate::types::{Message, Person, Style};

/// The style selected on a notification builder.
#[derive(Debug, Clone)]
pub(crate) enum StyleKind {
    BigText(BigTextStyleBuilder),
    Inbox(InboxStyleBuilder),
    Messaging(MessagingStyleBuilder),
}

impl StyleKind {
    pub(crate) fn build(&self, table: &dyn ResourceTable, notification_title: &str) -> Result<Style> {
        match self {
            Self::BigText(builder) => builder.build(table, notification_title),
            Self::Inbox(builder) => builder.build(table, notification_title),
            Self::Messaging(builder) => builder.build(table),
        }
    }
}

/// Builder for [`Style::BigText`].
#[derive(Debug, Clone)]
pub struct BigTextStyleBuilder {
    title: Field<String>,
    text: Field<String>,
}

impl Default for BigTextStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BigTextStyleBuilder {
    pub(crate) fn new() -> Self {
        Self {
            title: Field::optional("BigTextStyleBuilder", "title"),
            text: Field::required("BigTextStyleBuilder", "text"),
        }
    }

    /// Expanded title. Defaults to the notification title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.title.set(title.into());
        self
    }

    /// Text resource holding the expanded title.
    pub fn title_res(&mut self, id: ResourceId) -> &mut Self {
        self.title.set_res(id);
        self
    }

    /// The expanded text block.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let _ = self.text.set(text.into());
        self
    }

    /// Text resource holding the expanded text.
    pub fn text_res(&mut self, id: ResourceId) -> &mut Self {
        self.text.set_res(id);
        self
    }

    fn build(&self, table: &dyn ResourceTable, notification_title: &str) -> Result<Style> {
        Ok(Style::BigText {
            title: self
                .title
                .resolve(table)?
                .unwrap_or_else(|| notification_title.to_owned()),
            text: self.text.require_with(table)?,
        })
    }
}

/// Builder for [`Style::Inbox`].
#[derive(Debug, Clone)]
pub struct InboxStyleBuilder {
    title: Field<String>,
    summary: Field<String>,
    lines: Vec<String>,
}

impl Default for InboxStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InboxStyleBuilder {
    pub(crate) fn new() -> Self {
        Self {
            title: Field::optional("InboxStyleBuilder", "title"),
            summary: Field::optional("InboxStyleBuilder", "summary"),
            lines: Vec::new(),
        }
    }

    /// Expanded title. Defaults to the notification title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        let _ = self.title.set(title.into());
        self
    }

    /// Text resource holding the expanded title.
    pub fn title_res(&mut self, id: ResourceId) -> &mut Self {
        self.title.set_res(id);
        self
    }

    /// Summary shown below the lines.
    pub fn summary(&mut self, summary: impl Into<String>) -> &mut Self {
        let _ = self.summary.set(summary.into());
        self
    }

    /// Text resource holding the summary.
    pub fn summary_res(&mut self, id: ResourceId) -> &mut Self {
        self.summary.set_res(id);
        self
    }

    /// Append one line.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append several lines.
    pub fn lines(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    fn build(&self, table: &dyn ResourceTable, notification_title: &str) -> Result<Style> {
        Ok(Style::Inbox {
            title: self
                .title
                .resolve(table)?
                .unwrap_or_else(|| notification_title.to_owned()),
            summary: self.summary.resolve(table)?,
            lines: self.lines.clone(),
        })
    }
}

/// Builder for [`Style::Messaging`].
///
/// The style-level person is required and is the default sender for
/// messages that do not name one.
#[derive(Debug, Clone, Default)]
pub struct MessagingStyleBuilder {
    person: Option<PersonBuilder>,
    messages: Vec<MessageBuilder>,
}

impl MessagingStyleBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The person owning the conversation on this device.
    pub fn person(&mut self, block: impl FnOnce(&mut PersonBuilder)) -> &mut Self {
        let mut builder = PersonBuilder::new();
        block(&mut builder);
        self.person = Some(builder);
        self
    }

    /// Append a message.
    pub fn message(&mut self, block: impl FnOnce(&mut MessageBuilder)) -> &mut Self {
        let mut builder = MessageBuilder::new();
        block(&mut builder);
        self.messages.push(builder);
        self
    }

    fn build(&self, table: &dyn ResourceTable) -> Result<Style> {
        let person = self
            .person
            .as_ref()
            .ok_or(Error::RequiredNotSet {
                owner: "MessagingStyleBuilder",
                name: "person",
            })?
            .build(table)?;
        let messages = self
            .messages
            .iter()
            .map(|message| message.build(table, &person))
            .collect::<Result<Vec<_>>>()?;
        Ok(Style::Messaging { person, messages })
    }
}

/// Builder for a single [`Message`].
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    text: Field<String>,
    timestamp_ms: u64,
    person: Option<Person>,
    sender: Option<PersonBuilder>,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    pub(crate) fn new() -> Self {
        Self {
            text: Field::required("MessageBuilder", "text"),
            timestamp_ms: now_ms(),
            person: None,
            sender: None,
        }
    }

    /// Message text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let _ = self.text.set(text.into());
        self
    }

    /// Text resource holding the message text.
    pub fn text_res(&mut self, id: ResourceId) -> &mut Self {
        self.text.set_res(id);
        self
    }

    /// Unix timestamp in milliseconds. Defaults to now.
    pub fn timestamp_ms(&mut self, timestamp_ms: u64) -> &mut Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Sender created outside the block.
    pub fn person(&mut self, person: Person) -> &mut Self {
        self.person = Some(person);
        self
    }

    /// Build the sender inline. A directly assigned person wins over this.
    pub fn sender(&mut self, block: impl FnOnce(&mut PersonBuilder)) -> &mut Self {
        let mut builder = PersonBuilder::new();
        block(&mut builder);
        self.sender = Some(builder);
        self
    }

    fn build(&self, table: &dyn ResourceTable, default_person: &Person) -> Result<Message> {
        let sender = match (&self.person, &self.sender) {
            (Some(person), _) => person.clone(),
            (None, Some(builder)) => builder.build(table)?,
            (None, None) => default_person.clone(),
        };
        Ok(Message {
            text: self.text.require_with(table)?,
            timestamp_ms: self.timestamp_ms,
            sender,
        })
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
