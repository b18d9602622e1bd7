use axle_core::axis::{AxisSource, AxisValue};
use axle_core::manifest::{Manifest, PluginRef};
use axle_core::variant::{DEBUG, RELEASE};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

#[test]
fn test_parse_freshly_fixture() {
    let manifest = Manifest::from_path(&fixtures_dir().join("freshly.toml")).unwrap();
    assert_eq!(manifest.package.name, "freshly_app");
    assert_eq!(
        manifest.package.namespace.as_deref(),
        Some("com.example.freshly_app")
    );

    let ids: Vec<&str> = manifest.plugins.iter().map(PluginRef::id).collect();
    assert_eq!(
        ids,
        vec![
            "com.android.application",
            "org.jetbrains.kotlin.android",
            "dev.flutter.flutter-gradle-plugin"
        ]
    );
    assert_eq!(manifest.plugins[2].after().len(), 2);

    assert_eq!(manifest.axes["targetSdk"], AxisSource::literal(34i64));
    assert_eq!(
        manifest.axes["compileSdk"],
        AxisSource::from_provider("flutter", Some("compileSdkVersion"))
    );
    let flutter = &manifest.providers["flutter"];
    assert_eq!(flutter.values["compileSdkVersion"], AxisValue::Integer(35));

    assert_eq!(manifest.variants["release"].base.as_deref(), Some(DEBUG));
    assert_eq!(manifest.dependencies["coreLibraryDesugaring"].len(), 1);
}

#[test]
fn test_plugins_as_plain_ids() {
    let manifest = Manifest::parse(
        r#"
plugins = ["com.android.application", { id = "dev.flutter.flutter-gradle-plugin", after = ["com.android.application"] }]

[package]
name = "mixed"
"#,
    )
    .unwrap();
    assert_eq!(manifest.plugins[0], PluginRef::Id("com.android.application".to_string()));
    assert!(manifest.plugins[0].after().is_empty());
    assert!(manifest.has_plugin("dev.flutter.flutter-gradle-plugin"));
}

#[test]
fn test_builtin_variants_are_synthesized() {
    let manifest = Manifest::parse(
        r#"
[package]
name = "bare"

[variants.staging]
base = "release"
"#,
    )
    .unwrap();
    let variants = manifest.variant_decls();
    assert_eq!(variants.len(), 3);
    assert!(variants.contains_key(DEBUG));
    assert!(variants[RELEASE].base.is_none());
    assert_eq!(variants["staging"].base.as_deref(), Some(RELEASE));
}

#[test]
fn test_debug_signing_is_implicit() {
    let manifest = Manifest::parse(
        r#"
[package]
name = "signed"

[signing.upload]
keystore = "upload-keystore.jks"
key-alias = "upload"
store-password = "secret"
"#,
    )
    .unwrap();
    let configs = manifest.signing_configs();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs["debug"].key_alias.as_deref(), Some("androiddebugkey"));
    assert_eq!(configs["upload"].store_password.as_deref(), Some("secret"));
}

#[test]
fn test_signing_passwords_are_not_serialized() {
    let manifest = Manifest::parse(
        r#"
[package]
name = "signed"

[signing.upload]
keystore = "upload-keystore.jks"
store-password = "secret"
"#,
    )
    .unwrap();
    let json = serde_json::to_string(&manifest.signing["upload"]).unwrap();
    assert!(json.contains("upload-keystore.jks"));
    assert!(!json.contains("secret"));
}

#[test]
fn test_parse_invalid_missing_name_fixture() {
    let result = Manifest::from_path(&fixtures_dir().join("invalid-missing-name.toml"));
    assert!(result.is_err(), "Manifest without name should fail to parse");
}

#[test]
fn test_parse_nonexistent_fixture() {
    let err = Manifest::from_path(&fixtures_dir().join("does-not-exist.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}
