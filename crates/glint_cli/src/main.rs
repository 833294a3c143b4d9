//! Glint command line renderer.
//!
//! Usage: `glint [scene.json] [output.png]`
//!
//! Renders the given JSON scene description (or a built-in demo scene when
//! none is given) and writes the result as a PNG.

use std::time::Instant;

use anyhow::{Context, Result};
use glint_core::{RenderSettings, Scene, SceneFile};
use glint_renderer::{render, Camera, Light, Sphere, Vec3};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let output = args.next().unwrap_or_else(|| "render.png".to_string());

    let (scene, settings, camera) = match &scene_path {
        Some(path) => {
            let file = SceneFile::from_path(path)
                .with_context(|| format!("failed to load scene description {path}"))?;
            let (scene, settings, desc) = file.into_parts()?;
            let camera = Camera::new(desc.position, desc.orientation_matrix());
            (scene, settings, camera)
        }
        None => {
            log::info!("No scene file given, rendering the built-in demo scene");
            let (scene, settings, camera) = demo_scene();
            scene.validate()?;
            settings.validate()?;
            (scene, settings, camera)
        }
    };

    log::info!(
        "Rendering {}x{}, {} spheres, {} lights, depth {}",
        settings.canvas_width,
        settings.canvas_height,
        scene.spheres.len(),
        scene.lights.len(),
        settings.max_depth
    );

    let start = Instant::now();
    let frame = render(&scene, &camera, &settings);
    log::info!("Rendered in {:?}", start.elapsed());

    image::save_buffer(
        &output,
        &frame.to_rgb(),
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("failed to write {output}"))?;
    log::info!("Saved to {output}");

    Ok(())
}

/// The built-in demo scene: a cluster of shiny spheres over a large
/// yellow ground sphere, seen from an offset camera with a slight yaw.
/// The same scene ships as `scenes/demo.json`.
fn demo_scene() -> (Scene, RenderSettings, Camera) {
    let spheres = vec![
        Sphere {
            center: Vec3::new(0.0, 3.0, 3.0),
            radius: 0.75,
            color: Vec3::new(255.0, 0.0, 0.0),
            specular: Some(500.0),
            reflective: 0.2,
        },
        Sphere {
            center: Vec3::new(2.0, 4.0, 4.0),
            radius: 1.0,
            color: Vec3::new(0.0, 0.0, 255.0),
            specular: Some(500.0),
            reflective: 0.3,
        },
        Sphere {
            center: Vec3::new(-2.0, 4.0, 4.0),
            radius: 1.0,
            color: Vec3::new(0.0, 255.0, 0.0),
            specular: Some(10.0),
            reflective: 0.4,
        },
        // Ground
        Sphere {
            center: Vec3::new(0.0, -5001.0, 0.0),
            radius: 5000.0,
            color: Vec3::new(255.0, 255.0, 0.0),
            specular: Some(1000.0),
            reflective: 0.5,
        },
        Sphere {
            center: Vec3::new(0.0, 1.0, 4.0),
            radius: 0.5,
            color: Vec3::new(100.0, 100.0, 50.0),
            specular: Some(1000.0),
            reflective: 0.5,
        },
        Sphere {
            center: Vec3::new(1.0, 1.25, 4.0),
            radius: 0.5,
            color: Vec3::new(100.0, 100.0, 50.0),
            specular: Some(1000.0),
            reflective: 0.5,
        },
        Sphere {
            center: Vec3::new(-1.0, 1.25, 4.0),
            radius: 0.5,
            color: Vec3::new(100.0, 100.0, 50.0),
            specular: Some(1000.0),
            reflective: 0.5,
        },
    ];

    let lights = vec![
        Light::Ambient { intensity: 0.2 },
        Light::Point {
            intensity: 0.6,
            position: Vec3::new(2.0, 1.0, 0.0),
        },
        Light::Directional {
            intensity: 0.2,
            direction: Vec3::new(1.0, 4.0, 4.0),
        },
    ];

    let scene = Scene::new(spheres, lights, Vec3::ZERO);
    let settings = RenderSettings::default();
    let camera = Camera::from_yaw_degrees(Vec3::new(3.0, 2.0, -7.0), -20.0);

    (scene, settings, camera)
}
