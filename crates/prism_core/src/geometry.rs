//! Geometric primitives and their ray intersection tests.

use prism_math::{Interval, Vec3, Vec4};

use crate::Ray;

/// Rays whose direction is this close to parallel with a plane miss it.
const PARALLEL_EPSILON: f32 = 1e-6;

/// The surface of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Implicit plane `a*x + b*y + c*z + d = 0`, stored as `(a, b, c, d)`.
    Plane { coefficients: Vec4 },
}

/// Which kind of [`Shape`] produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Plane,
}

impl Shape {
    /// Create a sphere. Negative radii are clamped to zero.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Create a plane from its implicit coefficients `(a, b, c, d)`.
    pub fn plane(coefficients: Vec4) -> Self {
        Shape::Plane { coefficients }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Plane { .. } => ShapeKind::Plane,
        }
    }

    /// Smallest non-negative ray parameter at which `ray` meets the surface.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Shape::Sphere { center, radius } => intersect_sphere(ray, center, radius),
            Shape::Plane { coefficients } => intersect_plane(ray, coefficients),
        }
    }

    /// Unit surface normal at `point`, a point on the surface hit by `ray`.
    ///
    /// Plane normals are turned to oppose the ray. Sphere normals always
    /// point outward, even for rays travelling inside the sphere; callers
    /// that care tell the two cases apart from the sign of
    /// `ray.direction.dot(normal)`.
    pub fn normal_at(&self, point: Vec3, ray: &Ray) -> Vec3 {
        match *self {
            Shape::Sphere { center, .. } => (point - center).normalize(),
            Shape::Plane { coefficients } => {
                let normal = coefficients.truncate();
                if normal.dot(ray.direction) > 0.0 {
                    (-normal).normalize()
                } else {
                    normal.normalize()
                }
            }
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.length_squared();
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    // near <= far since a > 0
    let sqrtd = discriminant.sqrt();
    let near = (-half_b - sqrtd) / a;
    let far = (-half_b + sqrtd) / a;

    [near, far]
        .into_iter()
        .find(|&t| Interval::FORWARD.contains(t))
}

fn intersect_plane(ray: &Ray, coefficients: Vec4) -> Option<f32> {
    let normal = coefficients.truncate();
    let denominator = normal.dot(ray.direction);

    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = -(normal.dot(ray.origin) + coefficients.w) / denominator;
    Interval::FORWARD.contains(t).then_some(t)
}
