use std::path::PathBuf;

use skybox_viewer::scenes::{EnvironmentCycle, EnvironmentKind};

#[test]
fn test_initial_variant_is_compressed_cube() {
    assert_eq!(
        EnvironmentCycle::shapes(),
        EnvironmentCycle::Shapes(EnvironmentKind::CubeCompressed)
    );
}

#[test]
fn test_shape_cycle_returns_to_start_after_full_loop() {
    for start in EnvironmentKind::ALL {
        let mut cycle = EnvironmentCycle::Shapes(start);
        for _ in 0..cycle.len() {
            cycle.advance();
        }
        assert_eq!(cycle, EnvironmentCycle::Shapes(start), "starting from {start:?}");
    }
}

#[test]
fn test_shape_cycle_visits_every_variant_once() {
    let mut cycle = EnvironmentCycle::shapes();
    let mut seen = Vec::new();

    for _ in 0..EnvironmentKind::ALL.len() {
        let EnvironmentCycle::Shapes(kind) = &cycle else {
            panic!("shape cycle left shape mode");
        };
        seen.push(*kind);
        cycle.advance();
    }

    for kind in EnvironmentKind::ALL {
        assert_eq!(seen.iter().filter(|&&k| k == kind).count(), 1, "{kind:?}");
    }
}

#[test]
fn test_storage_cycle_returns_to_start_after_file_count() {
    let files: Vec<PathBuf> = ["a.png", "b.zip", "c.bmp"]
        .into_iter()
        .map(PathBuf::from)
        .collect();
    let mut cycle = EnvironmentCycle::storage(files);
    assert_eq!(cycle.len(), 3);

    let start = cycle.clone();
    for _ in 0..cycle.len() {
        cycle.advance();
    }
    assert_eq!(cycle, start);
}

#[test]
fn test_storage_cycle_with_single_file_stays_put() {
    let mut cycle = EnvironmentCycle::storage(vec![PathBuf::from("only.png")]);
    cycle.advance();
    assert!(matches!(cycle, EnvironmentCycle::Storage { index: 0, .. }));
}
