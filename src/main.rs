use anyhow::Result;
use clap::Parser;

use skybox_viewer::cli::{Cli, Sample};
use skybox_viewer::core::Geometry;
use skybox_viewer::host::HeadlessHost;
use skybox_viewer::traits::{SceneGraph, SceneMain};
use skybox_viewer::viewers::{CubemapViewer, PhotoViewer};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut host = HeadlessHost::new();
    match cli.sample {
        Sample::Photo => run(&mut host, PhotoViewer::new(), &cli),
        Sample::Cubemap => {
            let viewer = match &cli.storage_dir {
                Some(dir) => CubemapViewer::with_storage_dir(dir.clone()),
                None => CubemapViewer::new(),
            };
            run(&mut host, viewer, &cli)
        }
    }

    Ok(())
}

fn run(host: &mut HeadlessHost, mut viewer: impl SceneMain, cli: &Cli) {
    viewer.on_init(host);
    host.resolve_assets();
    print_scene(host);

    for _ in 0..cli.steps {
        viewer.on_step();
    }

    for tap in 1..=cli.taps {
        viewer.on_touch(&*host);
        host.pump();
        host.resolve_assets();

        for _ in 0..cli.steps {
            viewer.on_step();
        }

        println!("-- after tap {tap} --");
        print_scene(host);
    }
}

fn print_scene(host: &HeadlessHost) {
    let scene = host.scene();
    println!(
        "scene: {} object(s), camera rig {:?}",
        scene.objects().len(),
        scene.camera_rig()
    );
    for object in scene.objects() {
        let name = if object.name().is_empty() { "<unnamed>" } else { object.name() };
        println!("  {name}: {}", describe(object.geometry()));
    }
}

fn describe(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Sphere { stacks, slices, facing_out } => {
            format!("sphere {stacks}x{slices} (facing {})", facing(*facing_out))
        }
        Geometry::Cube { facing_out } => format!("cube (facing {})", facing(*facing_out)),
        Geometry::Cylinder { stacks, slices, .. } => format!("cylinder {stacks}x{slices}"),
        Geometry::Quad { width, height } => format!("quad {width}x{height}"),
        Geometry::Imported(mesh) => format!("imported mesh \"{}\"", mesh.label()),
    }
}

fn facing(out: bool) -> &'static str {
    if out {
        "out"
    } else {
        "in"
    }
}
