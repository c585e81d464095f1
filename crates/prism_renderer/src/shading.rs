//! Phong shading with shadows, mirror reflection and refraction.
//!
//! Every surface is lit the same way: ambient plus, for each light that
//! reaches it, a Lambertian diffuse term and a Phong highlight. Reflective
//! and transparent objects ignore their own shading and forward a single
//! secondary ray instead.

use crate::RenderConfig;
use prism_core::{Color, Intersection, Light, ObjectStatus, Ray, Scene};
use prism_math::{reflect, refract, Interval, Vec3};

/// Specular reflection coefficient shared by every material.
pub const SPECULAR: Color = Color::new(0.7, 0.7, 0.7);

/// Offset along the normal for shadow and mirror rays.
pub const SURFACE_EPSILON: f32 = 1e-4;

/// Offset along the ray for rays marching through a refractive medium.
pub const REFRACTION_EPSILON: f32 = 1e-3;

/// Refractive index outside every object.
pub const AIR_IOR: f32 = 1.0;

/// Refractive index of transparent objects.
pub const GLASS_IOR: f32 = 1.5;

/// Compute the color seen along a ray at recursion `level`.
///
/// Primary rays start at level 0. Secondary rays spawned at
/// `config.max_level` or deeper contribute black.
pub fn ray_color(scene: &Scene, ray: &Ray, level: u32, config: &RenderConfig) -> Color {
    let Some(hit) = scene.closest_hit(ray) else {
        return config.background;
    };

    match hit.status {
        ObjectStatus::Diffuse => shade_phong(scene, ray, &hit),
        ObjectStatus::Reflective => {
            if level >= config.max_level {
                return Color::ZERO;
            }
            ray_color(scene, &reflected_ray(ray, &hit), level + 1, config)
        }
        ObjectStatus::Transparent => {
            if level >= config.max_level {
                return Color::ZERO;
            }
            match transmitted_ray(scene, ray, &hit) {
                Some(out) => ray_color(scene, &out, level + 1, config),
                None => Color::ZERO,
            }
        }
    }
}

fn shade_phong(scene: &Scene, ray: &Ray, hit: &Intersection) -> Color {
    let surface = hit.surface_color();
    let view = (ray.origin - hit.point).normalize_or_zero();

    let mut color = scene.ambient.intensity * surface;

    for light in scene.lights() {
        if is_occluded(scene, hit, light) {
            continue;
        }

        let to_light = light.path_from(hit.point).to_light;

        let diffuse = surface * hit.normal.dot(to_light).max(0.0);

        let mirrored = reflect(-to_light, hit.normal);
        let highlight = view.dot(mirrored).max(0.0).powf(hit.material.shininess);
        let specular = SPECULAR * highlight;

        color += light.intensity() * (diffuse + specular);
    }

    color
}

/// Whether `light` fails to reach the hit point.
///
/// A point outside a spotlight's cone is in its shadow. Otherwise a shadow
/// ray ignoring the hit object is tested against everything between the
/// point and the light.
pub fn is_occluded(scene: &Scene, hit: &Intersection, light: &Light) -> bool {
    if !light.illuminates(hit.point) {
        return true;
    }

    let path = light.path_from(hit.point);
    let shadow = Ray::new(hit.point + hit.normal * SURFACE_EPSILON, path.to_light)
        .ignoring(hit.object_id);

    scene
        .closest_hit(&shadow)
        .is_some_and(|blocker| Interval::new(SURFACE_EPSILON, path.distance).surrounds(blocker.t))
}

/// Mirror ray leaving the hit point.
pub fn reflected_ray(ray: &Ray, hit: &Intersection) -> Ray {
    Ray::new(
        hit.point + hit.normal * SURFACE_EPSILON,
        reflect(ray.direction, hit.normal),
    )
    .ignoring(hit.object_id)
}

/// Ray leaving a transparent object after passing through it.
///
/// The ray refracts into the object, marches to the far side and refracts
/// (or totally internally reflects) again. Returns `None` when the inner
/// ray escapes or first meets a different object.
pub fn transmitted_ray(scene: &Scene, ray: &Ray, hit: &Intersection) -> Option<Ray> {
    let inside = refract(ray.direction, hit.normal, AIR_IOR, GLASS_IOR).direction();
    let inner = Ray::new(hit.point + inside * REFRACTION_EPSILON, inside);

    let exit = scene.closest_hit(&inner)?;
    if exit.object_id != hit.object_id {
        return None;
    }

    let out = refract(inner.direction, exit.normal, AIR_IOR, GLASS_IOR).direction();
    Some(Ray::new(exit.point + out * REFRACTION_EPSILON, out))
}
