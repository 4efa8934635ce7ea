use std::io::Write;

use pretty_assertions::assert_eq;
use typeforge_schema::{
    BuildConfig, BuildContext, DateScalarMode, ScalarRegistry, SchemaError,
};
use typeforge_types::{Nullable, ScalarType, TypeKey, TypeModifiers, TypeRef};

// ── BuildConfig parsing ──────────────────────────────────────────

#[test]
fn defaults() {
    let config = BuildConfig::default();
    assert!(!config.nullable_by_default);
    assert_eq!(config.date_scalar_mode, DateScalarMode::Iso);
}

#[test]
fn empty_toml_yields_defaults() {
    assert_eq!(BuildConfig::from_toml_str("").unwrap(), BuildConfig::default());
}

#[test]
fn parses_all_keys() {
    let config = BuildConfig::from_toml_str(
        r#"
        nullable_by_default = true
        date_scalar_mode = "timestamp"
        "#,
    )
    .unwrap();
    assert!(config.nullable_by_default);
    assert_eq!(config.date_scalar_mode, DateScalarMode::Timestamp);
}

#[test]
fn rejects_unknown_date_mode() {
    let err = BuildConfig::from_toml_str(r#"date_scalar_mode = "epoch""#).unwrap_err();
    assert!(matches!(err, SchemaError::ConfigParse(_)));
}

#[test]
fn date_mode_scalars() {
    assert_eq!(DateScalarMode::Iso.scalar(), ScalarType::DATE_TIME_ISO);
    assert_eq!(DateScalarMode::Timestamp.scalar(), ScalarType::TIMESTAMP);
}

// ── BuildConfig files ────────────────────────────────────────────

#[test]
fn load_from_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig::load_from(dir.path().join("typeforge.toml")).unwrap();
    assert_eq!(config, BuildConfig::default());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "nullable_by_default = true").unwrap();
    let config = BuildConfig::load_from(file.path()).unwrap();
    assert!(config.nullable_by_default);
    assert_eq!(config.date_scalar_mode, DateScalarMode::Iso);
}

#[test]
fn load_from_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "nullable_by_default = \"sometimes\"").unwrap();
    assert!(matches!(
        BuildConfig::load_from(file.path()),
        Err(SchemaError::ConfigParse(_))
    ));
}

#[test]
fn load_from_directory_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        BuildConfig::load_from(dir.path()),
        Err(SchemaError::ConfigRead(_))
    ));
}

// ── BuildContext ─────────────────────────────────────────────────

struct ObjectId;
struct Recipe;

fn context(nullable_by_default: bool) -> BuildContext {
    let mut scalars = ScalarRegistry::new();
    scalars.register(TypeKey::of::<ObjectId>(), ScalarType::new("ObjectId"));
    BuildContext::new(
        BuildConfig {
            nullable_by_default,
            date_scalar_mode: DateScalarMode::Timestamp,
        },
        scalars,
    )
}

#[test]
fn context_resolves_with_its_date_mode() {
    let ctx = context(false);
    assert_eq!(ctx.resolve_scalar(&TypeRef::date()), Some(ScalarType::TIMESTAMP));
}

#[test]
fn field_type_resolves_then_wraps() {
    let ctx = context(false);
    let ty = ctx
        .field_type("Recipe", "ids", &TypeRef::of::<ObjectId>(), &TypeModifiers::list(1))
        .unwrap();
    assert_eq!(ty.to_string(), "[ObjectId!]!");
    assert!(ty.leaf().is_scalar());
}

#[test]
fn field_type_keeps_composite_leaf() {
    let ctx = context(true);
    let ty = ctx
        .field_type("Cookbook", "recipes", &TypeRef::of::<Recipe>(), &TypeModifiers::list(1))
        .unwrap();
    assert_eq!(ty.to_string(), "[Recipe]");
    assert_eq!(ty.leaf(), &TypeRef::of::<Recipe>());
}

#[test]
fn field_type_uses_configured_default() {
    let strict = context(false)
        .field_type("Recipe", "title", &TypeRef::text(), &TypeModifiers::single())
        .unwrap();
    let lenient = context(true)
        .field_type("Recipe", "title", &TypeRef::text(), &TypeModifiers::single())
        .unwrap();
    assert_eq!(strict.to_string(), "String!");
    assert_eq!(lenient.to_string(), "String");
}

#[test]
fn field_type_propagates_configuration_error() {
    let err = context(false)
        .field_type(
            "Recipe",
            "title",
            &TypeRef::text(),
            &TypeModifiers::single().nullable(Nullable::Items),
        )
        .unwrap_err();
    assert!(matches!(err, SchemaError::WrongNullableListOption { .. }));
}
