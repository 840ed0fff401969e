//! Person construction for messaging styles.

use fluent_notify_core::{Field, ImageRef, ResourceId, ResourceTable, Result};

use crate::types::Person;

/// Builder for a [`Person`].
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: Field<String>,
    key: Field<String>,
    icon: Field<ImageRef>,
    uri: Option<String>,
    bot: bool,
    important: bool,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonBuilder {
    pub(crate) fn new() -> Self {
        Self {
            name: Field::required("PersonBuilder", "name"),
            key: Field::optional("PersonBuilder", "key"),
            icon: Field::optional("PersonBuilder", "icon"),
            uri: None,
            bot: false,
            important: false,
        }
    }

    /// Display name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.name.set(name.into());
        self
    }

    /// Text resource holding the display name.
    pub fn name_res(&mut self, id: ResourceId) -> &mut Self {
        self.name.set_res(id);
        self
    }

    /// Stable key identifying the person across notifications.
    pub fn key(&mut self, key: impl Into<String>) -> &mut Self {
        let _ = self.key.set(key.into());
        self
    }

    /// Text resource holding the key.
    pub fn key_res(&mut self, id: ResourceId) -> &mut Self {
        self.key.set_res(id);
        self
    }

    /// Avatar image.
    pub fn icon(&mut self, icon: ImageRef) -> &mut Self {
        let _ = self.icon.set(icon);
        self
    }

    /// Image resource holding the avatar.
    pub fn icon_res(&mut self, id: ResourceId) -> &mut Self {
        self.icon.set_res(id);
        self
    }

    /// URI identifying the person, e.g. a contacts entry.
    pub fn uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uri = Some(uri.into());
        self
    }

    /// Mark the person as a bot.
    pub fn bot(&mut self, bot: bool) -> &mut Self {
        self.bot = bot;
        self
    }

    /// Mark the person as important to the user.
    pub fn important(&mut self, important: bool) -> &mut Self {
        self.important = important;
        self
    }

    pub(crate) fn build(&self, table: &dyn ResourceTable) -> Result<Person> {
        Ok(Person {
            name: self.name.require_with(table)?,
            key: self.key.resolve(table)?,
            icon: self.icon.resolve(table)?,
            uri: self.uri.clone(),
            bot: self.bot,
            important: self.important,
        })
    }
}
