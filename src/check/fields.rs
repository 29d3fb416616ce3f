//! Resolving the checkable field set of a struct type.

use std::collections::BTreeSet;

use crate::analysis::StructType;

/// The fields of `ty` that an exhaustive literal in `current_unit` must
/// initialize.
///
/// A type local to the current unit exposes all of its fields. A foreign
/// type only exposes its exported fields: unexported fields of an imported
/// struct cannot be set by literal syntax, and flagging them would be a
/// false positive.
pub fn checkable_fields(ty: &StructType, current_unit: &str) -> BTreeSet<String> {
    let include_unexported = is_local(&ty.qualified_name(), current_unit);

    ty.fields
        .iter()
        .filter(|f| include_unexported || f.exported)
        .map(|f| f.name.clone())
        .collect()
}

/// Whether a qualified type name denotes a type defined directly in the
/// given unit.
///
/// The unit identity must prefix the qualified name and the remainder must
/// contain no further '/'; a type from a nested sub-unit shares the textual
/// prefix but keeps a separator in the remainder.
fn is_local(qualified_name: &str, unit: &str) -> bool {
    match qualified_name.strip_prefix(unit) {
        Some(rest) => !rest.contains('/'),
        None => false,
    }
}
