use super::*;
use crate::test_support::labelled_container;
use crate::{RegistryConfig, StaticReflection};
use data_types::{DataProperty, TypeAcceptance, TypeName};
use pretty_assertions::assert_eq;

fn song() -> ClassMetadata {
    ClassMetadata::new("App\\Data\\SongData")
        .with_ancestors(["Spatie\\LaravelData\\Data"])
        .with_property(
            DataProperty::new(
                "duration",
                TypeAcceptance::new().with("App\\Duration", ["App\\Integer", "Number"]),
            )
            .nullable(),
        )
}

fn album() -> ClassMetadata {
    ClassMetadata::new("App\\Data\\AlbumData")
        .with_property(DataProperty::new("title", TypeAcceptance::single("string")))
}

fn registry(reflection: StaticReflection) -> DataConfig {
    let container = labelled_container(&[], &[], &[]);
    match DataConfig::new(&RegistryConfig::new(), &container, reflection) {
        Ok(registry) => registry,
        Err(err) => panic!("registry should build: {err}"),
    }
}

#[test]
fn new_sorts_by_class_name() {
    let manifest = ClassManifest::new(vec![song(), album()]);
    let names: Vec<&str> = manifest.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["App\\Data\\AlbumData", "App\\Data\\SongData"]);
    assert_eq!(manifest.format_version, MANIFEST_FORMAT_VERSION);
}

#[test]
fn foreign_format_version_is_rejected() {
    let mut manifest = ClassManifest::new(vec![album()]);
    manifest.format_version = MANIFEST_FORMAT_VERSION + 1;
    let Ok(bytes) = manifest.encode() else {
        panic!("manifest should encode");
    };

    match ClassManifest::decode(&bytes) {
        Err(RegistryError::ManifestVersion { found, expected }) => {
            assert_eq!(found, MANIFEST_FORMAT_VERSION + 1);
            assert_eq!(expected, MANIFEST_FORMAT_VERSION);
        }
        other => panic!("expected ManifestVersion, got {other:?}"),
    }
}

#[test]
fn truncated_bytes_are_malformed() {
    let Ok(bytes) = ClassManifest::new(vec![song()]).encode() else {
        panic!("manifest should encode");
    };
    let result = ClassManifest::decode(&bytes[..bytes.len() / 2]);
    let Err(err) = result else {
        panic!("truncated manifest should not decode");
    };
    assert!(matches!(err, RegistryError::Manifest(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn warm_registry_seeds_a_cold_one() {
    let warm = registry([song(), album()].into_iter().collect());
    assert!(warm.data_class(&TypeName::new("App\\Data\\SongData")).is_ok());
    assert!(warm.data_class(&TypeName::new("App\\Data\\AlbumData")).is_ok());

    let Ok(dir) = tempfile::tempdir() else {
        panic!("temp dir");
    };
    let path = dir.path().join("data-classes.bin");
    assert!(warm.manifest().write_to(&path).is_ok());

    // No reflection at all: every class must come from the manifest.
    let cold = registry(StaticReflection::new());
    assert_eq!(cold.load_manifest(&path).ok(), Some(2));

    let Ok(loaded) = cold.data_class(&TypeName::new("App\\Data\\SongData")) else {
        panic!("SongData should be preloaded");
    };
    assert_eq!(*loaded, song());
    assert_eq!(cold.manifest(), warm.manifest());
}

#[test]
fn missing_manifest_is_an_io_error() {
    let cold = registry(StaticReflection::new());
    let result = cold.load_manifest("/nonexistent/data-classes.bin");
    assert!(matches!(result, Err(RegistryError::Io { .. })));
    assert!(cold.data_classes().is_empty());
}
