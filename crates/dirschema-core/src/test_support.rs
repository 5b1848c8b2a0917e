use crate::{
    context::{SchemaContext, SchemaOptions},
    error::ResolutionError,
};

const ATTRIBUTE_TYPES: &[(&str, &[&str])] = &[
    ("0.9.2342.19200300.100.1.1", &["uid", "userid"]),
    ("0.9.2342.19200300.100.1.25", &["dc", "domaincomponent"]),
    ("2.5.4.3", &["cn", "commonname"]),
    ("2.5.4.10", &["o", "organizationname"]),
    ("2.5.4.11", &["ou", "organizationalunitname"]),
    ("2.5.4.50", &["uniquemember"]),
];

///
/// TestContext
///
/// Minimal schema view with a handful of well-known attribute types.
///

#[derive(Default)]
pub(crate) struct TestContext {
    pub(crate) options: SchemaOptions,
}

impl TestContext {
    pub(crate) fn with_options(options: SchemaOptions) -> Self {
        Self { options }
    }

    pub(crate) fn strict() -> Self {
        Self::with_options(SchemaOptions {
            strict_format: true,
            ..SchemaOptions::default()
        })
    }

    fn lookup(name: &str) -> Option<(&'static str, &'static [&'static str])> {
        let lower = name.to_ascii_lowercase();

        ATTRIBUTE_TYPES
            .iter()
            .find(|(oid, names)| *oid == lower || names.contains(&lower.as_str()))
            .copied()
    }
}

impl SchemaContext for TestContext {
    fn options(&self) -> &SchemaOptions {
        &self.options
    }

    fn resolve_attribute_type(&self, name: &str) -> Result<String, ResolutionError> {
        Self::lookup(name)
            .map(|(_, names)| names[0].to_string())
            .ok_or_else(|| ResolutionError::UnknownAttributeType(name.to_string()))
    }

    fn resolve_oid(&self, name: &str) -> Result<String, ResolutionError> {
        Self::lookup(name)
            .map(|(oid, _)| oid.to_string())
            .ok_or_else(|| ResolutionError::UnknownOid(name.to_string()))
    }
}
