use crate::{
    context::SchemaContext,
    error::DecodeError,
    normalize::{
        dn::{Dn, split_optional_uid},
        oid::{is_numeric_oid, parse_oid},
        utf8,
    },
};

/// Numeric OIDs stay as they are; descriptors resolve through the context
/// and fall back to their lower-cased form.
pub(super) fn canonical_oid(ctx: &dyn SchemaContext, oid: &str) -> String {
    if is_numeric_oid(oid) {
        return oid.to_string();
    }

    ctx.resolve_oid(oid)
        .unwrap_or_else(|_| oid.to_ascii_lowercase())
}

pub(super) fn normalize_oid(ctx: &dyn SchemaContext, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let value = utf8(raw)?.trim_matches(' ');
    let oid = parse_oid(value, ctx.options().allow_malformed_names_and_options)?;

    Ok(canonical_oid(ctx, oid).into_bytes())
}

pub(super) fn normalize_dn(ctx: &dyn SchemaContext, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    Ok(canonical_dn(ctx, utf8(raw)?)?.into_bytes())
}

/// Normalize the DN part and keep a trailing `#'<bits>'B` verbatim.
pub(super) fn normalize_unique_member(
    ctx: &dyn SchemaContext,
    raw: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let (dn, uid) = split_optional_uid(utf8(raw)?);
    let mut out = canonical_dn(ctx, dn)?;
    if let Some(uid) = uid {
        out.push_str(uid);
    }

    Ok(out.into_bytes())
}

fn canonical_dn(ctx: &dyn SchemaContext, value: &str) -> Result<String, DecodeError> {
    let dn = Dn::parse(value, ctx.options().allow_malformed_names_and_options)?;

    dn.normalize(&ctx.as_non_strict())
}
