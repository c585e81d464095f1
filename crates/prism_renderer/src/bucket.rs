//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon.

use crate::renderer::render_pixel;
use crate::{color_to_rgb, Camera, ImageBuffer, RenderConfig};
use prism_core::Scene;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Row-major position of this bucket in the grid
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed for this bucket's sample generator.
    fn seed(&self, base: u64) -> u64 {
        base.wrapping_add(self.index as u64)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split an image into buckets, row by row from the top-left corner.
///
/// Edge buckets are cropped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec<[u8; 3]> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                camera,
                scene,
                bucket.x + local_x,
                bucket.y + local_y,
                config,
                rng,
            );
            pixels.push(color_to_rgb(color));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<[u8; 3]>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<[u8; 3]>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let width = self.bucket.width as usize;
        for (i, &rgb) in self.pixels.iter().enumerate() {
            let x = self.bucket.x + (i % width) as u32;
            let y = self.bucket.y + (i / width) as u32;
            image.set(x, y, rgb);
        }
    }
}

/// Render a full frame across the rayon thread pool.
pub fn render_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let camera = Camera::new(&scene.eye, width, height);
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads ({} spp, max level {})",
        width,
        height,
        buckets.len(),
        rayon::current_num_threads(),
        config.samples_per_pixel,
        config.max_level
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = StdRng::seed_from_u64(bucket.seed(config.seed));
            let pixels = render_bucket(bucket, &camera, scene, config, &mut rng);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use prism_core::{Ambient, Color, Eye, Light, Material, ObjectStatus, Shape};
    use prism_math::{Vec3, Vec4};

    fn test_scene() -> Scene {
        let mut scene = Scene::new(Eye::default(), Ambient::new(Color::splat(0.1)));
        scene.add_object(
            Shape::plane(Vec4::new(0.0, 1.0, 0.0, 1.0)),
            Material::new(Color::new(0.8, 0.8, 0.2), 5.0),
            ObjectStatus::Diffuse,
        );
        scene.add_object(
            Shape::sphere(Vec3::new(0.3, 0.0, -4.0), 0.8),
            Material::default(),
            ObjectStatus::Reflective,
        );
        scene.add_object(
            Shape::sphere(Vec3::new(-0.8, 0.0, -3.0), 0.5),
            Material::default(),
            ObjectStatus::Transparent,
        );
        scene.add_light(Light::directional(Color::splat(0.8), Vec3::new(1.0, -1.0, -1.0)));
        scene.add_light(Light::spot(
            Color::ONE,
            Vec3::NEG_Y,
            Vec3::new(0.0, 2.0, -4.0),
            0.8,
        ));
        scene
    }

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);

        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 6, 3));
    }

    #[test]
    fn test_generate_buckets_row_major() {
        let buckets = generate_buckets(20, 20, 10);
        let origins: Vec<(u32, u32)> = buckets.iter().map(|b| (b.x, b.y)).collect();

        assert_eq!(origins, vec![(0, 0), (10, 0), (0, 10), (10, 10)]);
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_empty_image_has_no_buckets() {
        assert!(generate_buckets(0, 10, 64).is_empty());
        assert!(render_parallel(&Scene::default(), 0, 0, &RenderConfig::default())
            .pixels
            .is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = test_scene();
        let config = RenderConfig::default();

        let sequential = render(&scene, 150, 90, &config, &mut StdRng::seed_from_u64(0));
        let parallel = render_parallel(&scene, 150, 90, &config);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_jitter_is_reproducible() {
        let scene = test_scene();
        let config = RenderConfig {
            samples_per_pixel: 3,
            seed: 42,
            ..RenderConfig::default()
        };

        let a = render_parallel(&scene, 70, 70, &config);
        let b = render_parallel(&scene, 70, 70, &config);
        assert_eq!(a, b);
    }
}
