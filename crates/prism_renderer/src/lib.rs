//! Prism Renderer - recursive ray tracing on the CPU.
//!
//! One primary ray per pixel (optionally jittered and averaged), shaded
//! with the Phong model plus hard shadows, perfect mirrors and clear
//! refractive media.

mod bucket;
mod camera;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use renderer::{color_to_rgb, render, render_image, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{is_occluded, ray_color, reflected_ray, transmitted_ray};

/// Re-export common scene and math types
pub use prism_core::{Color, Ray, Scene};
pub use prism_math::Vec3;

use rand::{Rng, RngCore};

/// Uniform sample in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}
