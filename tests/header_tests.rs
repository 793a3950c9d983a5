use std::path::{Path, PathBuf};

use adocopts::{
    backends::Backends,
    context::{EditingContext, ImageHandlingMode},
    errors::HeaderError,
    header::HeaderAttributes,
    resolver::OptionsResolver,
    settings::PreviewSettings,
};

#[test]
fn test_header_attributes_from_file() {
    let header =
        HeaderAttributes::from_file(Path::new("tests/data/documents/header-attributes.adoc"))
            .unwrap();
    assert_eq!(header.get("toc"), Some("top"));
    assert_eq!(header.get("author"), Some("Jane"));
    assert_eq!(header.get("experimental"), Some(""));
    assert_eq!(header.get("sectnums"), None);
    assert_eq!(header.get("hidden"), None);
    assert_eq!(header.get("body-attribute"), None);
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        HeaderAttributes::from_file(Path::new("tests/data/documents/nope.adoc")),
        Err(HeaderError::Read { .. })
    ));
}

#[test]
/// Header attributes and a settings file, wired together the way an editor would
fn test_document_through_resolver() {
    let header =
        HeaderAttributes::from_file(Path::new("tests/data/documents/header-attributes.adoc"))
            .unwrap();
    let settings =
        PreviewSettings::from_file(Path::new("tests/data/settings/relative.json")).unwrap();
    let mut context = EditingContext::new("/proj", Some(PathBuf::from("/out")));
    context.attributes_provider = &header;
    settings.apply(&mut context);
    assert_eq!(context.image_handling_mode, ImageHandlingMode::RelativePaths);

    let options = OptionsResolver::new()
        .resolve(&context, Backends::Html5)
        .unwrap();
    let attributes = &options.attributes;
    assert_eq!(attributes.text("toc"), Some("left"));
    assert_eq!(attributes.text("toclevels"), Some("2"));
    assert_eq!(attributes.text("author"), Some("Jane"));
    // the policy's imagesdir replaces the document's
    assert_eq!(attributes.text("imagesdir"), Some("/proj"));
    // empty cached values are not passed through
    assert!(!attributes.contains_key("experimental"));
}
