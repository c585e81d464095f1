//! High-level scene loading.
//!
//! Records are paired up by ordinal: the n-th `c` record is the material of
//! the n-th object, the n-th `i` record the intensity of the n-th light, and
//! the n-th `p` record the position of the n-th spotlight. Missing partners
//! are filled with defaults (or the light is dropped) and reported through
//! `log::warn!` rather than failing the load.

use std::path::Path;

use prism_math::{Vec3, Vec4};
use thiserror::Error;

use super::parser::{parse_scene, ParseError};
use super::records::SceneRecord;
use crate::geometry::Shape;
use crate::light::Light;
use crate::scene::{Ambient, Eye, Material, ObjectStatus, Scene};
use crate::{Color, ShapeKind};

/// Direction records with |kind| below this are directional lights.
const DIRECTIONAL_KIND_EPSILON: f32 = 1e-5;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    log::info!("Loading scene {}", path.display());
    load_scene_from_str(&content)
}

/// Load a scene from file contents (useful for testing).
pub fn load_scene_from_str(content: &str) -> LoadResult<Scene> {
    let records = parse_scene(content)?;

    let mut builder = SceneBuilder::default();
    for record in records {
        builder.push(record);
    }

    Ok(builder.finish())
}

/// Collects records, then pairs them up into a scene.
#[derive(Default)]
struct SceneBuilder {
    eye: Eye,
    ambient: Ambient,
    materials: Vec<Material>,
    objects: Vec<([f32; 4], ObjectStatus)>,
    directions: Vec<(Vec3, f32)>,
    spot_positions: Vec<(Vec3, f32)>,
    intensities: Vec<Color>,
}

impl SceneBuilder {
    fn push(&mut self, record: SceneRecord) {
        match record {
            SceneRecord::Eye {
                position,
                screen_distance,
            } => {
                self.eye.position = position;
                self.eye.screen_distance = screen_distance;
            }
            SceneRecord::Up { up, screen_height } => {
                self.eye.up = up;
                self.eye.screen_height = screen_height;
            }
            SceneRecord::Forward {
                forward,
                screen_width,
            } => {
                self.eye.forward = forward;
                self.eye.screen_width = screen_width;
            }
            SceneRecord::Ambient { intensity } => self.ambient = Ambient::new(intensity),
            SceneRecord::Material { color, shininess } => {
                self.materials.push(Material::new(color, shininess));
            }
            SceneRecord::Object { params, status } => self.objects.push((params, status)),
            SceneRecord::LightDirection { direction, kind } => {
                self.directions.push((direction, kind));
            }
            SceneRecord::SpotPosition { position, cutoff } => {
                self.spot_positions.push((position, cutoff));
            }
            SceneRecord::Intensity { intensity } => self.intensities.push(intensity),
        }
    }

    fn finish(self) -> Scene {
        let mut scene = Scene::new(self.eye, self.ambient);

        for (i, &(params, status)) in self.objects.iter().enumerate() {
            let material = self.materials.get(i).copied().unwrap_or_else(|| {
                log::warn!("Missing material for object {}, defaulting to white", i + 1);
                Material::default()
            });

            let [x, y, z, w] = params;
            let shape = if w > 0.0 {
                Shape::sphere(Vec3::new(x, y, z), w)
            } else {
                Shape::plane(Vec4::new(x, y, z, w))
            };

            scene.add_object(shape, material, status);
        }

        if self.materials.len() > self.objects.len() {
            log::debug!(
                "{} material(s) have no matching object",
                self.materials.len() - self.objects.len()
            );
        }

        let mut spot_positions = self.spot_positions.iter();
        let mut spotlights_declared = 0;

        for (i, &(direction, kind)) in self.directions.iter().enumerate() {
            if direction.length_squared() == 0.0 {
                log::warn!("Light {} has a zero direction, skipping", i);
                continue;
            }
            let direction = direction.normalize();

            let intensity = self.intensities.get(i).copied().unwrap_or_else(|| {
                log::warn!("Missing intensity for light {}, defaulting to (1,1,1)", i);
                Color::ONE
            });

            if kind.abs() < DIRECTIONAL_KIND_EPSILON {
                scene.add_light(Light::directional(intensity, direction));
                continue;
            }

            spotlights_declared += 1;
            match spot_positions.next() {
                Some(&(position, cutoff)) => {
                    scene.add_light(Light::spot(intensity, direction, position, cutoff));
                }
                None => {
                    log::warn!("Missing position for spotlight {}, skipping", spotlights_declared - 1);
                }
            }
        }

        if self.directions.len() != self.intensities.len() {
            log::warn!(
                "Light direction/intensity count mismatch (d={}, i={})",
                self.directions.len(),
                self.intensities.len()
            );
        }
        if spotlights_declared != self.spot_positions.len() {
            log::warn!(
                "Spotlight count does not match position count (spotlights={}, p={})",
                spotlights_declared,
                self.spot_positions.len()
            );
        }

        log_summary(&scene, self.materials.len());
        scene
    }
}

fn log_summary(scene: &Scene, material_count: usize) {
    let spheres = scene
        .objects()
        .iter()
        .filter(|o| o.shape.kind() == ShapeKind::Sphere)
        .count();
    let spots = scene.lights().iter().filter(|l| l.is_spot()).count();

    log::info!(
        "Loaded {} objects (spheres={}, planes={}), {} materials, {} lights (dir={}, spot={})",
        scene.object_count(),
        spheres,
        scene.object_count() - spheres,
        material_count,
        scene.light_count(),
        scene.light_count() - spots,
        spots
    );

    for (i, light) in scene.lights().iter().enumerate() {
        log::debug!("  light[{}] {:?}", i, light);
    }
}
