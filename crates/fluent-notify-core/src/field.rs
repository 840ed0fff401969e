//! Validated builder fields.
//!
//! A [`Field`] mediates every read and write of a configurable builder
//! value, enforcing the policy matrix:
//!
//! | Nullability | Cardinality | Read when unset, no fallback | Second write    |
//! |-------------|-------------|------------------------------|-----------------|
//! | `Optional`  | `Multi`     | `Ok(None)`                   | overwrites      |
//! | `Required`  | `Multi`     | `Err(RequiredNotSet)`        | overwrites      |
//! | `Optional`  | `Once`      | `Ok(None)`                   | `Err(AlreadySet)` |
//! | `Required`  | `Once`      | `Err(RequiredNotSet)`        | `Err(AlreadySet)` |
//!
//! A field may also record a fallback [`ResourceId`]. On read, a directly
//! written value always wins; only an unwritten field consults the resource
//! table. This lets a caller either hardcode a literal or defer to the
//! host's resource store without duplicating validation per field.
//!
//! Writing a value is a write, full stop: the slot stores `T`, never
//! `Option<T>`, so there is no way to write "empty" and the unset state is
//! exactly "never written".

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::resource::{resolve_kind, FromResource, ResourceId, ResourceTable};

/// Whether a field must hold a value by the time it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// Reading an unset field yields `None`.
    Optional,
    /// Reading an unset field is an error.
    Required,
}

/// How many successful writes a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Writes silently overwrite.
    Multi,
    /// At most one write ever succeeds.
    Once,
}

/// The validation policy attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    /// Read-side rule.
    pub nullability: Nullability,
    /// Write-side rule.
    pub cardinality: Cardinality,
}

impl Policy {
    /// All four policy combinations, in matrix order. Useful for tests that
    /// enumerate the matrix mechanically.
    pub const ALL: [Policy; 4] = [
        Policy::new(Nullability::Optional, Cardinality::Multi),
        Policy::new(Nullability::Required, Cardinality::Multi),
        Policy::new(Nullability::Optional, Cardinality::Once),
        Policy::new(Nullability::Required, Cardinality::Once),
    ];

    /// Create a policy from its two axes.
    pub const fn new(nullability: Nullability, cardinality: Cardinality) -> Self {
        Self {
            nullability,
            cardinality,
        }
    }
}

/// A validated read/write slot owned by a builder.
///
/// Created once per configurable value through the policy constructors
/// ([`Field::optional`], [`Field::required`], [`Field::optional_once`],
/// [`Field::required_once`]); lives and dies with its builder.
///
/// # Example
///
/// ```
/// use fluent_notify_core::{Error, Field};
///
/// let mut count: Field<i64> = Field::required_once("Example", "count");
/// count.set(7).unwrap();
/// assert_eq!(count.require(), Ok(7));
///
/// // Second write fails; the original value is untouched.
/// let err = count.set(9).unwrap_err();
/// assert!(matches!(err, Error::AlreadySet { .. }));
/// assert_eq!(count.require(), Ok(7));
/// ```
#[derive(Debug)]
pub struct Field<T> {
    owner: &'static str,
    name: &'static str,
    policy: Policy,
    fallback: Option<ResourceId>,
    slot: Option<T>,
    written: bool,
}

impl<T> Field<T> {
    /// Create a field with an explicit policy.
    pub fn new(owner: &'static str, name: &'static str, policy: Policy) -> Self {
        Self {
            owner,
            name,
            policy,
            fallback: None,
            slot: None,
            written: false,
        }
    }

    /// An `Optional`/`Multi` field.
    pub fn optional(owner: &'static str, name: &'static str) -> Self {
        Self::new(owner, name, Policy::new(Nullability::Optional, Cardinality::Multi))
    }

    /// A `Required`/`Multi` field.
    pub fn required(owner: &'static str, name: &'static str) -> Self {
        Self::new(owner, name, Policy::new(Nullability::Required, Cardinality::Multi))
    }

    /// An `Optional`/`Once` field.
    pub fn optional_once(owner: &'static str, name: &'static str) -> Self {
        Self::new(owner, name, Policy::new(Nullability::Optional, Cardinality::Once))
    }

    /// A `Required`/`Once` field.
    pub fn required_once(owner: &'static str, name: &'static str) -> Self {
        Self::new(owner, name, Policy::new(Nullability::Required, Cardinality::Once))
    }

    /// The owning builder's type name.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// The field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's validation policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Whether a direct write has occurred.
    pub fn is_set(&self) -> bool {
        self.written
    }

    /// Write a value.
    ///
    /// For `Once` cardinality this fails with [`Error::AlreadySet`] when a
    /// prior successful write occurred; the stored value is untouched.
    pub fn set(&mut self, value: T) -> Result<()> {
        if self.written && self.policy.cardinality == Cardinality::Once {
            return Err(Error::AlreadySet {
                owner: self.owner,
                name: self.name,
            });
        }
        self.slot = Some(value);
        self.written = true;
        Ok(())
    }

    /// Record the resource id to consult when the field is read unset.
    ///
    /// Recording an id never touches the slot and may be repeated; a direct
    /// write always takes precedence over it.
    pub fn set_res(&mut self, id: ResourceId) {
        self.fallback = Some(id);
    }

    /// The recorded fallback resource id, if any.
    pub fn fallback(&self) -> Option<ResourceId> {
        self.fallback
    }

    fn required_not_set(&self) -> Error {
        Error::RequiredNotSet {
            owner: self.owner,
            name: self.name,
        }
    }

    fn unset_outcome(&self) -> Result<Option<T>> {
        match self.policy.nullability {
            Nullability::Optional => Ok(None),
            Nullability::Required => Err(self.required_not_set()),
        }
    }
}

impl<T: Clone> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner,
            name: self.name,
            policy: self.policy,
            fallback: self.fallback,
            slot: self.slot.clone(),
            written: self.written,
        }
    }
}

impl<T: Clone> Field<T> {
    /// Read the field without consulting any resource table.
    ///
    /// For values that are not resource-backed. A recorded fallback id, if
    /// any, is ignored here; use [`Field::resolve`] for resource-backed
    /// types.
    pub fn get(&self) -> Result<Option<T>> {
        match &self.slot {
            Some(value) => Ok(Some(value.clone())),
            None => self.unset_outcome(),
        }
    }

    /// Read the field, treating an absent value as an error.
    ///
    /// Shorthand for `Required` call sites; on a `Required` field the error
    /// is already produced by the policy.
    pub fn require(&self) -> Result<T> {
        self.get()?.ok_or_else(|| self.required_not_set())
    }
}

impl<T: Clone + FromResource> Field<T> {
    /// Read the field, resolving the fallback resource if it was never
    /// written.
    ///
    /// Resolution order: written value, then the recorded resource id
    /// through `table`, then the policy outcome for "unset". An id unknown
    /// to the table behaves as if no fallback were recorded.
    pub fn resolve(&self, table: &dyn ResourceTable) -> Result<Option<T>> {
        if let Some(value) = &self.slot {
            return Ok(Some(value.clone()));
        }
        if let Some(id) = self.fallback {
            tracing::trace!(
                target: targets::FIELD,
                owner = self.owner,
                field = self.name,
                %id,
                "field unset, consulting fallback resource"
            );
            if let Some(value) = resolve_kind(table, T::KIND, id)?.and_then(T::from_value) {
                return Ok(Some(value));
            }
        }
        self.unset_outcome()
    }

    /// Read the field with fallback resolution, treating an absent value as
    /// an error.
    pub fn require_with(&self, table: &dyn ResourceTable) -> Result<T> {
        self.resolve(table)?.ok_or_else(|| self.required_not_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ImageRef, MapResourceTable};

    fn table() -> MapResourceTable {
        MapResourceTable::new()
            .with_text(ResourceId(42), "Hello")
            .with_integer(ResourceId(7), 70)
            .with_image(ResourceId(9), ImageRef(900))
    }

    #[test]
    fn write_then_read_identity_for_multi_fields() {
        let mut optional: Field<String> = Field::optional("T", "optional");
        optional.set("v".to_owned()).unwrap();
        assert_eq!(optional.get(), Ok(Some("v".to_owned())));

        let mut required: Field<i64> = Field::required("T", "required");
        required.set(5).unwrap();
        assert_eq!(required.get(), Ok(Some(5)));

        // Multi cardinality overwrites silently.
        required.set(6).unwrap();
        assert_eq!(required.require(), Ok(6));
    }

    #[test]
    fn optional_unset_returns_none() {
        let field: Field<i64> = Field::optional("T", "field");
        assert_eq!(field.get(), Ok(None));

        let once: Field<i64> = Field::optional_once("T", "once");
        assert_eq!(once.get(), Ok(None));
    }

    #[test]
    fn required_unset_fails_with_field_name() {
        let field: Field<i64> = Field::required("Builder", "field");
        assert_eq!(
            field.get(),
            Err(Error::RequiredNotSet {
                owner: "Builder",
                name: "field"
            })
        );

        let once: Field<i64> = Field::required_once("Builder", "once");
        assert_eq!(
            once.require(),
            Err(Error::RequiredNotSet {
                owner: "Builder",
                name: "once"
            })
        );
    }

    #[test]
    fn fallback_resolves_when_unset() {
        let mut title: Field<String> = Field::required("T", "title");
        title.set_res(ResourceId(42));
        assert_eq!(title.resolve(&table()), Ok(Some("Hello".to_owned())));
    }

    #[test]
    fn direct_value_takes_precedence_over_fallback() {
        let mut title: Field<String> = Field::required("T", "title");
        title.set_res(ResourceId(42));
        title.set("Bye".to_owned()).unwrap();
        assert_eq!(title.resolve(&table()), Ok(Some("Bye".to_owned())));

        // Against an empty table the fallback cannot resolve, so a required
        // field would fail if it were consulted. The direct write means it
        // never is.
        let mut icon: Field<ImageRef> = Field::required("T", "icon");
        icon.set(ImageRef(1)).unwrap();
        icon.set_res(ResourceId(404));
        assert_eq!(icon.resolve(&MapResourceTable::new()), Ok(Some(ImageRef(1))));
    }

    #[test]
    fn unknown_fallback_id_behaves_as_no_fallback() {
        let mut optional: Field<String> = Field::optional("T", "optional");
        optional.set_res(ResourceId(404));
        assert_eq!(optional.resolve(&table()), Ok(None));

        let mut required: Field<String> = Field::required("T", "required");
        required.set_res(ResourceId(404));
        assert!(matches!(
            required.resolve(&table()),
            Err(Error::RequiredNotSet { .. })
        ));
    }

    #[test]
    fn once_rejects_second_write_and_keeps_first_value() {
        let mut field: Field<i64> = Field::required_once("T", "field");
        field.set(7).unwrap();
        assert_eq!(field.require(), Ok(7));

        assert_eq!(
            field.set(9),
            Err(Error::AlreadySet {
                owner: "T",
                name: "field"
            })
        );
        assert_eq!(field.require(), Ok(7));

        let mut optional: Field<i64> = Field::optional_once("T", "optional");
        optional.set(1).unwrap();
        assert!(matches!(optional.set(2), Err(Error::AlreadySet { .. })));
        assert_eq!(optional.get(), Ok(Some(1)));
    }

    #[test]
    fn policy_matrix_write_rules() {
        for policy in Policy::ALL {
            let mut field: Field<i64> = Field::new("T", "field", policy);
            field.set(1).unwrap();
            let second = field.set(2);
            match policy.cardinality {
                Cardinality::Multi => {
                    assert_eq!(second, Ok(()));
                    assert_eq!(field.get(), Ok(Some(2)));
                }
                Cardinality::Once => {
                    assert!(matches!(second, Err(Error::AlreadySet { .. })));
                    assert_eq!(field.get(), Ok(Some(1)));
                }
            }
        }
    }

    #[test]
    fn policy_matrix_read_rules() {
        for policy in Policy::ALL {
            let field: Field<i64> = Field::new("T", "field", policy);
            match policy.nullability {
                Nullability::Optional => assert_eq!(field.get(), Ok(None)),
                Nullability::Required => {
                    assert!(matches!(field.get(), Err(Error::RequiredNotSet { .. })));
                }
            }
        }
    }

    #[test]
    fn unsupported_kind_surfaces_through_resolve() {
        // i64 resolves through the integer table; ImageRef through images.
        // A field typed to an unimplemented kind cannot exist (FromResource
        // is only implemented for supported kinds), so exercise the
        // resolver directly.
        let err = resolve_kind(&table(), crate::SemanticKind::Sound, ResourceId(1)).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedResourceType {
                kind: crate::SemanticKind::Sound
            }
        );
    }

    // Resource-backed and write-once fields side by side, the way a
    // builder typically mixes them.
    #[test]
    fn combined_scenario() {
        let table = table();

        let mut title: Field<String> = Field::required("Scenario", "title");
        title.set_res(ResourceId(42));
        assert_eq!(title.require_with(&table), Ok("Hello".to_owned()));

        title.set("Bye".to_owned()).unwrap();
        assert_eq!(title.require_with(&table), Ok("Bye".to_owned()));

        let mut code: Field<i64> = Field::required_once("Scenario", "code");
        code.set(7).unwrap();
        assert_eq!(code.require(), Ok(7));
        assert!(matches!(code.set(9), Err(Error::AlreadySet { .. })));
        assert_eq!(code.require(), Ok(7));
    }
}
