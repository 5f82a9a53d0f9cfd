use std::fs;

use skybox_viewer::core::Geometry;
use skybox_viewer::host::HeadlessHost;
use skybox_viewer::traits::{CameraRigKind, SceneGraph, SceneMain};
use skybox_viewer::viewers::CubemapViewer;

#[test]
fn test_corrupt_image_adds_no_objects_and_does_not_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("broken.png"), b"this is not a png").expect("write file");

    let mut host = HeadlessHost::new();
    let mut viewer = CubemapViewer::with_storage_dir(dir.path());
    viewer.on_init(&mut host);

    assert!(host.scene().objects().is_empty());
    // the rig switch happens before the decode attempt, as in the original
    assert_eq!(host.scene().camera_rig(), CameraRigKind::Freeze);
}

#[test]
fn test_tap_past_corrupt_file_recovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("broken.png"), b"garbage").expect("write file");
    fs::write(dir.path().join("ok.zip"), b"archive").expect("write file");

    let mut host = HeadlessHost::new();
    let mut viewer = CubemapViewer::with_storage_dir(dir.path());
    viewer.on_init(&mut host);
    assert!(host.scene().objects().is_empty());

    viewer.on_touch(&host);
    host.pump();
    assert_eq!(host.scene().objects().len(), 1);
    assert!(matches!(
        host.scene().objects()[0].geometry(),
        Geometry::Cube { facing_out: false }
    ));

    // wrapping back to the corrupt file clears the scene again
    viewer.on_touch(&host);
    host.pump();
    assert!(host.scene().objects().is_empty());
}
