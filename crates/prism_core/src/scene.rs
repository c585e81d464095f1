//! Scene types for Prism.
//!
//! A scene is built once (usually by the scene-file loader) and is then
//! only read while rendering. It owns its lights and objects by value.

use prism_math::Vec3;

use crate::geometry::Shape;
use crate::intersection::Intersection;
use crate::light::Light;
use crate::{Color, ObjectId, Ray};

/// Surface colour plus a Phong shininess exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base colour (RGB, 0-1)
    pub color: Color,

    /// Specular exponent, >= 0
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            shininess: 1.0,
        }
    }
}

impl Material {
    pub fn new(color: Color, shininess: f32) -> Self {
        Self { color, shininess }
    }
}

/// How a surface is shaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectStatus {
    /// Opaque Phong surface
    Diffuse,
    /// Perfect mirror
    Reflective,
    /// Clear refractive medium
    Transparent,
}

/// A shaded primitive owned by a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    id: ObjectId,
    pub shape: Shape,
    pub material: Material,
    pub status: ObjectStatus,
}

impl Object {
    pub fn id(&self) -> ObjectId {
        self.id
    }
}

/// Pinhole camera description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eye {
    pub position: Vec3,

    /// Viewing direction (Vto)
    pub forward: Vec3,

    /// Approximate up direction (Vup)
    pub up: Vec3,

    /// Distance from the eye to the screen plane
    pub screen_distance: f32,

    /// Screen extent in world units
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for Eye {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            screen_distance: 1.0,
            screen_width: 2.0,
            screen_height: 2.0,
        }
    }
}

impl Eye {
    /// Create an eye at `position` with the default orientation and screen.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Scene-wide constant light term.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ambient {
    pub intensity: Color,
}

impl Ambient {
    pub fn new(intensity: Color) -> Self {
        Self { intensity }
    }
}

/// A complete scene: camera, ambient term, lights and objects.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub eye: Eye,
    pub ambient: Ambient,
    lights: Vec<Light>,
    objects: Vec<Object>,
}

impl Scene {
    /// Create a scene with no lights or objects.
    pub fn new(eye: Eye, ambient: Ambient) -> Self {
        Self {
            eye,
            ambient,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add an object and return its id.
    ///
    /// Ids are handed out sequentially starting at 1.
    pub fn add_object(&mut self, shape: Shape, material: Material, status: ObjectStatus) -> ObjectId {
        let id = ObjectId::from_index(self.objects.len());
        self.objects.push(Object {
            id,
            shape,
            material,
            status,
        });
        id
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Get an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.index())
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Find the nearest surface along `ray`.
    ///
    /// Every object is tested, except the one the ray was told to ignore.
    /// On an exact tie in `t` the object added first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Intersection> {
        let mut closest: Option<(&Object, f32)> = None;

        for object in &self.objects {
            if ray.ignore == Some(object.id) {
                continue;
            }

            let Some(t) = object.shape.intersect(ray) else {
                continue;
            };

            if closest.map_or(true, |(_, best)| t < best) {
                closest = Some((object, t));
            }
        }

        closest.map(|(object, t)| {
            let point = ray.at(t);
            Intersection {
                point,
                normal: object.shape.normal_at(point, ray),
                material: object.material,
                t,
                status: object.status,
                object_id: object.id,
                kind: object.shape.kind(),
            }
        })
    }
}
