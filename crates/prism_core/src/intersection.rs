//! Result of a closest-hit query.

use prism_math::Vec3;

use crate::geometry::ShapeKind;
use crate::scene::{Material, ObjectStatus};
use crate::texture::checkerboard;
use crate::{Color, ObjectId};

/// Record of the nearest ray-object intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal (see [`Shape::normal_at`](crate::Shape::normal_at) for orientation)
    pub normal: Vec3,
    /// Copy of the hit object's material
    pub material: Material,
    /// Ray parameter of the hit
    pub t: f32,
    pub status: ObjectStatus,
    pub object_id: ObjectId,
    pub kind: ShapeKind,
}

impl Intersection {
    /// Colour of the surface at the hit point.
    ///
    /// Planes are textured with a checkerboard; spheres use the plain
    /// material colour.
    pub fn surface_color(&self) -> Color {
        match self.kind {
            ShapeKind::Plane => checkerboard(self.material.color, self.point),
            ShapeKind::Sphere => self.material.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ray, Scene, Shape};
    use prism_math::Vec4;

    #[test]
    fn test_plane_surface_is_checkered() {
        let mut scene = Scene::default();
        // z = -5
        scene.add_object(
            Shape::plane(Vec4::new(0.0, 0.0, 1.0, 5.0)),
            Material::new(Color::ONE, 1.0),
            ObjectStatus::Diffuse,
        );

        let light_tile = scene
            .closest_hit(&Ray::new(Vec3::ZERO, Vec3::new(0.25, 0.25, -5.0)))
            .unwrap();
        let dark_tile = scene
            .closest_hit(&Ray::new(Vec3::ZERO, Vec3::new(0.75, 0.25, -5.0)))
            .unwrap();

        assert_eq!(light_tile.surface_color(), Color::ONE);
        assert_eq!(dark_tile.surface_color(), Color::splat(0.5));
    }

    #[test]
    fn test_sphere_surface_is_plain() {
        let mut scene = Scene::default();
        let color = Color::new(0.2, 0.4, 0.6);
        scene.add_object(
            Shape::sphere(Vec3::new(0.75, 0.0, -5.0), 1.0),
            Material::new(color, 1.0),
            ObjectStatus::Diffuse,
        );

        let hit = scene
            .closest_hit(&Ray::new(Vec3::ZERO, Vec3::new(0.75, 0.0, -5.0)))
            .unwrap();
        assert_eq!(hit.surface_color(), color);
    }
}
