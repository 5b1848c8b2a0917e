//! Module: context
//! Responsibility: the read-only schema view threaded through every
//! validate/normalize/assert call.
//! Does not own: attribute type storage (see `schema`).
//! Boundary: engines ask the context to resolve names and read flags;
//! they never mutate it.

mod options;


use crate::error::ResolutionError;

// re-exports
pub use options::{ConfigError, EngineConfig, IndexingOptions, SchemaOptions};

///
/// SchemaContext
///
/// Read-only resolution surface for schema names plus the schema flags.
/// Implementations must be shareable across threads.
///

pub trait SchemaContext: Send + Sync {
    fn options(&self) -> &SchemaOptions;

    /// Resolve an attribute type name or OID to its canonical lower-case
    /// primary name (or numeric OID when it has no name).
    fn resolve_attribute_type(&self, name: &str) -> Result<String, ResolutionError>;

    /// Resolve a descriptor or numeric OID to the numeric OID of a known
    /// schema element.
    fn resolve_oid(&self, name: &str) -> Result<String, ResolutionError>;

    /// Whether unresolvable names are errors.
    fn is_strict(&self) -> bool {
        true
    }
}

impl dyn SchemaContext + '_ {
    /// Return a view that falls back to lower-cased names for unknown
    /// elements, unless `strict_format` is set.
    #[must_use]
    pub fn as_non_strict(&self) -> NonStrictContext<'_> {
        NonStrictContext { inner: self }
    }
}

///
/// NonStrictContext
///
/// Lenient wrapper used when parsing DNs embedded in values.
///

#[derive(Clone, Copy)]
pub struct NonStrictContext<'a> {
    inner: &'a dyn SchemaContext,
}

impl NonStrictContext<'_> {
    fn fallback(&self, name: &str, err: ResolutionError) -> Result<String, ResolutionError> {
        if self.is_strict() {
            Err(err)
        } else {
            Ok(name.to_ascii_lowercase())
        }
    }
}

impl SchemaContext for NonStrictContext<'_> {
    fn options(&self) -> &SchemaOptions {
        self.inner.options()
    }

    fn resolve_attribute_type(&self, name: &str) -> Result<String, ResolutionError> {
        self.inner
            .resolve_attribute_type(name)
            .or_else(|err| self.fallback(name, err))
    }

    fn resolve_oid(&self, name: &str) -> Result<String, ResolutionError> {
        self.inner
            .resolve_oid(name)
            .or_else(|err| self.fallback(name, err))
    }

    fn is_strict(&self) -> bool {
        self.inner.options().strict_format
    }
}
