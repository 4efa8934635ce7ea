//! Application of list and nullability modifiers to a resolved type.

use crate::error::{SchemaError, SchemaResult};
use typeforge_types::{Nullable, TypeModifiers, WrappedType};

/// Wraps `ty` according to the modifiers declared on `owner`'s `field`.
///
/// Item nullability: items are nullable for `Items`/`ItemsAndList`, or when
/// nullability is unset and `nullable_by_default` holds. Only the innermost
/// items get the non-null wrapper; intermediate lists stay as declared.
///
/// Outer nullability: the whole value is non-null for `No`, for unset with
/// `nullable_by_default == false`, and for `Items`. `Items` makes only the
/// items nullable and keeps the list itself non-null.
///
/// # Errors
///
/// [`SchemaError::WrongNullableListOption`] when `Items`/`ItemsAndList` is
/// requested on a declaration that is not a list.
pub fn wrap_type(
    owner: &str,
    field: &str,
    ty: WrappedType,
    modifiers: &TypeModifiers,
    nullable_by_default: bool,
) -> SchemaResult<WrappedType> {
    let nullable = modifiers.nullable;
    if !modifiers.array && nullable.targets_items() {
        return Err(SchemaError::WrongNullableListOption {
            owner: owner.to_string(),
            field: field.to_string(),
            nullable,
        });
    }

    let mut wrapped = ty;

    if modifiers.array {
        let nullable_items = nullable.targets_items()
            || (nullable == Nullable::Unset && nullable_by_default);
        wrapped = wrap_in_nested_list(wrapped, modifiers.array_depth, nullable_items);
    }

    let non_null_outer = nullable == Nullable::No
        || (nullable == Nullable::Unset && !nullable_by_default)
        || nullable == Nullable::Items;
    if non_null_outer {
        wrapped = WrappedType::non_null(wrapped);
    }

    Ok(wrapped)
}

fn wrap_in_nested_list(item: WrappedType, depth: usize, nullable_items: bool) -> WrappedType {
    if depth == 0 {
        return item;
    }
    let item = if nullable_items {
        item
    } else {
        WrappedType::non_null(item)
    };
    (1..depth).fold(WrappedType::list(item), |inner, _| WrappedType::list(inner))
}
