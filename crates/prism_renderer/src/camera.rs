//! Camera for primary ray generation.

use prism_core::{Eye, Ray};
use prism_math::Vec3;

/// Cross products shorter than this are treated as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Pinhole camera mapping pixels onto the eye's screen plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    center: Vec3,
    screen_distance: f32,
    screen_width: f32,
    screen_height: f32,

    // Orthonormal basis
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera for an image of `width` x `height` pixels.
    ///
    /// If the eye's up vector is parallel to its forward vector the world
    /// X and Y axes stand in for the missing right/up directions.
    pub fn new(eye: &Eye, width: u32, height: u32) -> Self {
        let forward = eye.forward.try_normalize().unwrap_or(Vec3::NEG_Z);

        let right = forward.cross(eye.up);
        let right = if right.length() < DEGENERATE_EPSILON {
            Vec3::X
        } else {
            right.normalize()
        };

        let up = right.cross(forward);
        let up = if up.length() < DEGENERATE_EPSILON {
            Vec3::Y
        } else {
            up.normalize()
        };

        Self {
            image_width: width,
            image_height: height,
            center: eye.position,
            screen_distance: eye.screen_distance,
            screen_width: eye.screen_width,
            screen_height: eye.screen_height,
            forward,
            right,
            up,
        }
    }

    /// Generate the ray through pixel coordinate (x, y).
    ///
    /// Coordinates are in pixels with (0, 0) the top-left pixel; fractional
    /// values address sub-pixel positions. Image rows grow downwards while
    /// the camera's up vector points upwards.
    pub fn get_ray(&self, x: f32, y: f32) -> Ray {
        let sx = (x + 0.5) / self.image_width as f32;
        let sy = (y + 0.5) / self.image_height as f32;

        let px = (sx - 0.5) * self.screen_width;
        let py = (0.5 - sy) * self.screen_height;

        let screen_center = self.center + self.forward * self.screen_distance;
        let pixel = screen_center + self.right * px + self.up * py;

        Ray::new(self.center, pixel - self.center)
    }

    /// The camera's (forward, right, up) basis.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.forward, self.right, self.up)
    }
}
