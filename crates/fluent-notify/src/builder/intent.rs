//! Launch target construction.

use std::hash::{DefaultHasher, Hash, Hasher};

use fluent_notify_core::{Field, ResourceId, ResourceTable, Result};

use crate::types::{IntentSpec, IntentTarget};

/// Builder for an [`IntentSpec`].
///
/// Exactly one `start_*` call is allowed: the target is a set-once field
/// and a second call fails the construction with `AlreadySet` instead of
/// silently replacing what an earlier block configured.
#[derive(Debug, Clone)]
pub struct IntentBuilder {
    target: Field<IntentTarget>,
    request_code: Field<i32>,
    extras: Vec<(String, String)>,
    error: Option<fluent_notify_core::Error>,
}

impl Default for IntentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentBuilder {
    pub(crate) fn new() -> Self {
        Self {
            target: Field::required_once("IntentBuilder", "target"),
            request_code: Field::optional("IntentBuilder", "request_code"),
            extras: Vec::new(),
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

    /// Launch a single screen.
    pub fn start_activity(&mut self, name: impl Into<String>) -> &mut Self {
        let result = self.target.set(IntentTarget::Activity(name.into()));
        self.record(result);
        self
    }

    /// Launch a stack of screens, last one on top.
    pub fn start_activities(
        &mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        let names = names.into_iter().map(Into::into).collect();
        let result = self.target.set(IntentTarget::Activities(names));
        self.record(result);
        self
    }

    /// Deliver a broadcast.
    pub fn broadcast(&mut self, name: impl Into<String>) -> &mut Self {
        let result = self.target.set(IntentTarget::Broadcast(name.into()));
        self.record(result);
        self
    }

    /// Start a background service, optionally in the foreground.
    pub fn start_service(&mut self, name: impl Into<String>, foreground: bool) -> &mut Self {
        let target = if foreground {
            IntentTarget::ForegroundService(name.into())
        } else {
            IntentTarget::Service(name.into())
        };
        let result = self.target.set(target);
        self.record(result);
        self
    }

    /// Request code disambiguating otherwise-equal intents. Defaults to a
    /// hash of the target.
    pub fn request_code(&mut self, code: i32) -> &mut Self {
        // Infallible: Multi cardinality.
        let _ = self.request_code.set(code);
        self
    }

    /// Integer resource holding the request code.
    pub fn request_code_res(&mut self, id: ResourceId) -> &mut Self {
        self.request_code.set_res(id);
        self
    }

    /// Attach an extra key/value pair.
    pub fn extra(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extras.push((key.into(), value.into()));
        self
    }

    pub(crate) fn build(&self, table: &dyn ResourceTable) -> Result<IntentSpec> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let target = self.target.require()?;
        let request_code = match self.request_code.resolve(table)? {
            Some(code) => code,
            None => derived_request_code(&target),
        };
        Ok(IntentSpec {
            target,
            request_code,
            extras: self.extras.clone(),
        })
    }
}

/// Stable request code derived from the target when none was given.
fn derived_request_code(target: &IntentTarget) -> i32 {
    let mut hasher = DefaultHasher::new();
    target.hash(&mut hasher);
    hasher.finish() as i32
}

/// A content or action intent that is either already built or still a
/// builder to be finished at notification build time.
#[derive(Debug, Clone)]
pub(crate) enum IntentSource {
    Built(IntentSpec),
    Deferred(IntentBuilder),
}

impl IntentSource {
    pub(crate) fn build(&self, table: &dyn ResourceTable) -> Result<IntentSpec> {
        match self {
            Self::Built(spec) => Ok(spec.clone()),
            Self::Deferred(builder) => builder.build(table),
        }
    }
}
