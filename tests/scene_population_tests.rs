use skybox_viewer::core::{Geometry, TextureKind};
use skybox_viewer::host::HeadlessHost;
use skybox_viewer::scenes::EnvironmentKind;
use skybox_viewer::traits::{SceneGraph, SceneMain};
use skybox_viewer::viewers::{CubemapViewer, PhotoViewer};

/// Cubemap viewer initialized in shape mode (empty storage directory).
fn init_shape_viewer() -> (HeadlessHost, CubemapViewer, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut host = HeadlessHost::new();
    let mut viewer = CubemapViewer::with_storage_dir(dir.path());
    viewer.on_init(&mut host);
    (host, viewer, dir)
}

#[test]
fn test_photo_viewer_adds_single_inward_sphere() {
    let mut host = HeadlessHost::new();
    let mut viewer = PhotoViewer::new();
    viewer.on_init(&mut host);

    let objects = host.scene().objects();
    assert_eq!(objects.len(), 1);

    match objects[0].geometry() {
        Geometry::Sphere { stacks, slices, facing_out } => {
            assert_eq!((*stacks, *slices), (72, 144));
            assert!(!facing_out, "photo sphere must face inward");
        }
        other => panic!("expected a sphere, got {other:?}"),
    }
    assert!(objects[0].material().main_texture().is_some());
}

#[test]
fn test_bound_texture_resolves_without_rebuilding() {
    let mut host = HeadlessHost::new();
    let mut viewer = PhotoViewer::new();
    viewer.on_init(&mut host);

    let texture = host.scene().objects()[0]
        .material()
        .main_texture()
        .expect("texture bound")
        .clone();
    assert!(!texture.is_ready(), "handle should still be in flight");

    assert!(host.resolve_assets() >= 1);
    assert_eq!(texture.try_get().map(|t| t.kind), Some(TextureKind::Flat));
    assert_eq!(host.scene().objects().len(), 1);
}

#[test]
fn test_cubemap_viewer_builds_environment_and_reflective() {
    let (host, _viewer, _dir) = init_shape_viewer();

    let scene = host.scene();
    assert!(scene.frustum_culling());
    assert!(scene.stats_enabled());
    assert_eq!(scene.objects().len(), 2);

    // initial variant is the compressed cube
    assert!(matches!(
        scene.objects()[0].geometry(),
        Geometry::Cube { facing_out: false }
    ));

    let reflective = &scene.objects()[1];
    assert_eq!(reflective.name(), "sphere");
    assert!(reflective.material().texture("diffuseTexture").is_some());
    match reflective.geometry() {
        Geometry::Sphere { facing_out, .. } => assert!(*facing_out),
        other => panic!("expected reflective sphere, got {other:?}"),
    }
}

#[test]
fn test_taps_cycle_without_accumulating_objects() {
    let (mut host, mut viewer, _dir) = init_shape_viewer();

    let start = EnvironmentKind::INITIAL.index();
    // two full loops to prove the scene never accumulates
    for tap in 1..=(2 * EnvironmentKind::ALL.len()) {
        viewer.on_touch(&host);
        assert_eq!(host.pump(), 1, "tap {tap} should queue one rebuild task");

        let kind = EnvironmentKind::ALL[(start + tap) % EnvironmentKind::ALL.len()];
        let expected = if kind == EnvironmentKind::Quads { 6 + 1 } else { 1 + 1 };
        assert_eq!(
            host.scene().objects().len(),
            expected,
            "after tap {tap} ({kind:?})"
        );
    }
}

#[test]
fn test_tap_sequence_visits_variant_geometries() {
    let (mut host, mut viewer, _dir) = init_shape_viewer();

    // CubeCompressed -> CubeFaces
    viewer.on_touch(&host);
    host.pump();
    match host.scene().objects()[0].geometry() {
        Geometry::Cube { facing_out } => assert!(!facing_out),
        other => panic!("expected face-textured cube, got {other:?}"),
    }
    assert_eq!(host.scene().objects()[0].material().face_textures().len(), 6);

    // CubeFaces -> Cylinder
    viewer.on_touch(&host);
    host.pump();
    assert!(matches!(
        host.scene().objects()[0].geometry(),
        Geometry::Cylinder { stacks: 10, slices: 36, .. }
    ));

    // Cylinder -> Quads
    viewer.on_touch(&host);
    host.pump();
    assert_eq!(host.scene().objects().len(), 7);

    // Quads -> Sphere
    viewer.on_touch(&host);
    host.pump();
    match host.scene().objects()[0].geometry() {
        Geometry::Sphere { stacks, slices, facing_out } => {
            assert_eq!((*stacks, *slices), (18, 36));
            assert!(!facing_out);
        }
        other => panic!("expected sphere environment, got {other:?}"),
    }
}

#[test]
fn test_tap_before_init_is_noop() {
    let mut host = HeadlessHost::new();
    let mut viewer = CubemapViewer::new();

    viewer.on_touch(&host);
    assert_eq!(host.pump(), 0);
    assert!(host.scene().objects().is_empty());
}

#[test]
fn test_on_step_is_harmless() {
    let (mut host, mut viewer, _dir) = init_shape_viewer();
    for _ in 0..10 {
        viewer.on_step();
    }
    assert_eq!(host.scene().objects().len(), 2);
    assert_eq!(host.pump(), 0);
}
