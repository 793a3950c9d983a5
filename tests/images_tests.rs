use std::fs;

use adocopts::{
    backends::Backends,
    context::{EditingContext, ImageHandlingMode},
    images::PreviewImageCopier,
    resolver::OptionsResolver,
    utils::absolute_path_string,
};
use tempfile::tempdir;

#[test]
fn test_copies_images_with_layout() {
    let source = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::create_dir_all(source.path().join("diagrams")).unwrap();
    fs::write(source.path().join("logo.png"), b"png").unwrap();
    fs::write(source.path().join("diagrams/flow.svg"), b"<svg/>").unwrap();
    fs::write(source.path().join("notes.adoc"), b"= Notes").unwrap();

    let copier = PreviewImageCopier::new(source.path(), target.path().join("images"));
    assert_eq!(copier.copy_images().unwrap(), 2);
    assert!(target.path().join("images/logo.png").is_file());
    assert!(target.path().join("images/diagrams/flow.svg").is_file());
    assert!(!target.path().join("images/notes.adoc").exists());

    // nothing changed, nothing copied
    assert_eq!(copier.copy_images().unwrap(), 0);
}

#[test]
fn test_missing_source_directory_is_not_an_error() {
    let target = tempdir().unwrap();
    let copier = PreviewImageCopier::new(target.path().join("absent"), target.path().join("images"));
    assert_eq!(copier.copy_images().unwrap(), 0);
    assert!(target.path().join("images").is_dir());
}

#[test]
fn test_preview_directory_mode_copies_before_returning() {
    let base = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(base.path().join("cover.jpg"), b"jpg").unwrap();
    let images_target = out.path().join("images");
    let copier = PreviewImageCopier::new(base.path(), &images_target);

    let mut context = EditingContext::new(base.path(), Some(out.path().to_path_buf()));
    context.image_handling_mode = ImageHandlingMode::FromPreviewDirectory;
    context.target_images_dir = images_target.clone();
    context.image_provider = &copier;

    let options = OptionsResolver::new()
        .resolve(&context, Backends::Html5)
        .unwrap();
    assert!(images_target.join("cover.jpg").is_file());
    let expected = absolute_path_string(&images_target);
    assert_eq!(options.images_dir(), Some(expected.as_str()));
    assert_eq!(options.images_out_dir(), Some(expected.as_str()));
}

#[test]
/// A target below the source, spelled through `..`, is never copied into itself
fn test_target_inside_source_is_not_recopied() {
    let source = tempdir().unwrap();
    fs::create_dir_all(source.path().join("sub")).unwrap();
    fs::write(source.path().join("logo.png"), b"png").unwrap();
    let copier = PreviewImageCopier::new(source.path(), source.path().join("sub/../out/images"));

    assert_eq!(copier.copy_images().unwrap(), 1);
    assert_eq!(copier.copy_images().unwrap(), 0);
    assert!(source.path().join("out/images/logo.png").is_file());
    assert!(!source.path().join("out/images/out").exists());
}
