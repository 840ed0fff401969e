//! Channel construction.

use fluent_notify_core::{Field, ResourceId, ResourceTable, Result};

use crate::types::{Behaviour, Channel};

/// Builder for a [`Channel`].
///
/// `id` and `name` are required; each can be set directly or deferred to a
/// text resource. The interruption settings come from the shared behaviour
/// at build time.
#[derive(Debug, Clone)]
pub struct ChannelBuilder {
    id: Field<String>,
    name: Field<String>,
    description: Field<String>,
}

impl Default for ChannelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBuilder {
    pub(crate) fn new() -> Self {
        Self {
            id: Field::required("ChannelBuilder", "id"),
            name: Field::required("ChannelBuilder", "name"),
            description: Field::optional("ChannelBuilder", "description"),
        }
    }

    /// Stable channel id.
    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.id.set(id.into());
        self
    }

    /// Text resource holding the channel id.
    pub fn id_res(&mut self, id: ResourceId) -> &mut Self {
        self.id.set_res(id);
        self
    }

    /// User-visible channel name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        let _ = self.name.set(name.into());
        self
    }

    /// Text resource holding the channel name.
    pub fn name_res(&mut self, id: ResourceId) -> &mut Self {
        self.name.set_res(id);
        self
    }

    /// User-visible channel description.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        let _ = self.description.set(description.into());
        self
    }

    /// Text resource holding the channel description.
    pub fn description_res(&mut self, id: ResourceId) -> &mut Self {
        self.description.set_res(id);
        self
    }

    pub(crate) fn build(&self, table: &dyn ResourceTable, behaviour: &Behaviour) -> Result<Channel> {
        Ok(Channel {
            id: self.id.require_with(table)?,
            name: self.name.require_with(table)?,
            description: self.description.resolve(table)?,
            importance: behaviour.importance,
            lights_enabled: behaviour.light_color.is_some(),
            light_color: behaviour.light_color,
            sound: behaviour.sound.clone(),
            vibration_enabled: !behaviour.vibration_pattern.is_empty(),
            vibration_pattern: behaviour.vibration_pattern.clone(),
            show_badge: behaviour.show_badge,
            defaults: behaviour.defaults.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::behaviour::BehaviourBuilder;
    use fluent_notify_core::{Error, MapResourceTable};

    fn behaviour() -> Behaviour {
        BehaviourBuilder::new()
            .build(&MapResourceTable::new())
            .unwrap()
    }

    #[test]
    fn requires_id_and_name() {
        let table = MapResourceTable::new();

        let mut builder = ChannelBuilder::new();
        builder.name("Updates");
        assert_eq!(
            builder.build(&table, &behaviour()),
            Err(Error::RequiredNotSet {
                owner: "ChannelBuilder",
                name: "id"
            })
        );

        builder.id("updates");
        let channel = builder.build(&table, &behaviour()).unwrap();
        assert_eq!(channel.id, "updates");
        assert_eq!(channel.name, "Updates");
        assert_eq!(channel.description, None);
    }

    #[test]
    fn resolves_id_and_name_from_resources() {
        let table = MapResourceTable::new()
            .with_text(ResourceId(1), "updates")
            .with_text(ResourceId(2), "Updates");

        let mut builder = ChannelBuilder::new();
        builder.id_res(ResourceId(1)).name_res(ResourceId(2));

        let channel = builder.build(&table, &behaviour()).unwrap();
        assert_eq!(channel.id, "updates");
        assert_eq!(channel.name, "Updates");
    }

    #[test]
    fn mirrors_behaviour_settings() {
        let behaviour = BehaviourBuilder::new()
            .light_color(0xFF0000FF)
            .vibration_pattern([100, 200, 300])
            .show_badge(true)
            .build(&MapResourceTable::new())
            .unwrap();

        let mut builder = ChannelBuilder::new();
        builder.id("ch").name("Ch");
        let channel = builder
            .build(&MapResourceTable::new(), &behaviour)
            .unwrap();

        assert!(channel.lights_enabled);
        assert_eq!(channel.light_color, Some(0xFF0000FF));
        assert!(channel.vibration_enabled);
        assert_eq!(channel.vibration_pattern, vec![100, 200, 300]);
        assert!(channel.show_badge);
    }
}
