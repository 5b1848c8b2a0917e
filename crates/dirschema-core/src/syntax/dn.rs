use crate::{
    context::SchemaContext,
    normalize::dn::{Dn, split_optional_uid},
    syntax::{SyntaxViolation, text},
};

pub(super) fn check_dn(ctx: &dyn SchemaContext, value: &[u8]) -> Result<(), SyntaxViolation> {
    let value = text(value, "DN")?;

    check_dn_text(ctx, value)
}

pub(super) fn check_name_and_optional_uid(
    ctx: &dyn SchemaContext,
    value: &[u8],
) -> Result<(), SyntaxViolation> {
    let value = text(value, "NameAndOptionalUID")?;
    let (dn, _) = split_optional_uid(value);

    check_dn_text(ctx, dn)
}

fn check_dn_text(ctx: &dyn SchemaContext, value: &str) -> Result<(), SyntaxViolation> {
    let allow_malformed = ctx.options().allow_malformed_names_and_options;

    Dn::parse(value, allow_malformed)
        .and_then(|dn| dn.normalize(&ctx.as_non_strict()))
        .map(|_| ())
        .map_err(|err| SyntaxViolation::new(format!("invalid DN '{value}': {err}")))
}
