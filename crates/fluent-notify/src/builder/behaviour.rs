//! Behaviour shared between a notification and its channel.

use std::collections::BTreeSet;

use fluent_notify_core::{Field, ResourceId, ResourceTable, Result};

use crate::kinds::{DefaultBehaviour, Importance};
use crate::types::Behaviour;

/// Builder for the interruption behaviour of a notification and its
/// channel: importance, lights, sound, vibration, badging and platform
/// defaults.
///
/// Built once per construction and applied to both the channel and the
/// notification, so the two never disagree.
#[derive(Debug, Clone)]
pub struct BehaviourBuilder {
    importance: Importance,
    light_color: Field<u32>,
    sound: Field<String>,
    vibration_pattern: Vec<u64>,
    show_badge: bool,
    defaults: BTreeSet<DefaultBehaviour>,
}

impl Default for BehaviourBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviourBuilder {
    pub(crate) fn new() -> Self {
        Self {
            importance: Importance::default(),
            light_color: Field::optional("BehaviourBuilder", "light_color"),
            sound: Field::optional("BehaviourBuilder", "sound"),
            vibration_pattern: Vec::new(),
            show_badge: false,
            defaults: BTreeSet::new(),
        }
    }

    /// Importance level for the channel and priority for the notification.
    pub fn importance(&mut self, importance: Importance) -> &mut Self {
        self.importance = importance;
        self
    }

    /// ARGB color for the notification light. Setting a color enables the
    /// light.
    pub fn light_color(&mut self, color: u32) -> &mut Self {
        // Infallible: the field is Optional/Multi.
        let _ = self.light_color.set(color);
        self
    }

    /// Integer resource holding the light color.
    pub fn light_color_res(&mut self, id: ResourceId) -> &mut Self {
        self.light_color.set_res(id);
        self
    }

    /// Sound reference (a URI or platform sound name).
    pub fn sound(&mut self, sound: impl Into<String>) -> &mut Self {
        let _ = self.sound.set(sound.into());
        self
    }

    /// Vibration pattern in milliseconds. An empty pattern disables
    /// vibration.
    pub fn vibration_pattern(&mut self, pattern: impl IntoIterator<Item = u64>) -> &mut Self {
        self.vibration_pattern = pattern.into_iter().collect();
        self
    }

    /// Whether notifications may badge launcher icons.
    pub fn show_badge(&mut self, show: bool) -> &mut Self {
        self.show_badge = show;
        self
    }

    /// Opt into a platform default behaviour.
    pub fn add_default(&mut self, default: DefaultBehaviour) -> &mut Self {
        self.defaults.insert(default);
        self
    }

    pub(crate) fn build(&self, table: &dyn ResourceTable) -> Result<Behaviour> {
        Ok(Behaviour {
            importance: self.importance,
            light_color: self.light_color.resolve(table)?,
            sound: self.sound.get()?,
            vibration_pattern: self.vibration_pattern.clone(),
            show_badge: self.show_badge,
            defaults: self.defaults.clone(),
        })
    }
}
