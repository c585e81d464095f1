//! Frame driver.
//!
//! Turns a scene into an 8-bit RGB image:
//! - One ray per pixel through the pixel centre, or
//! - Several jittered rays per pixel, averaged
//! - Colors clamped to [0, 1] without gamma

use crate::{gen_f32, ray_color, Camera, Color};
use prism_core::Scene;
use prism_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Rays averaged per pixel; values above 1 enable jitter
    pub samples_per_pixel: u32,
    /// Recursion level at which secondary rays turn black
    pub max_level: u32,
    /// Color of rays that escape the scene
    pub background: Color,
    /// Seed for jittered sampling
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_level: 4,
            background: Color::ZERO,
            seed: 0,
        }
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel.
///
/// With one sample the ray goes through the pixel centre and `rng` is left
/// untouched.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel <= 1 {
        let ray = camera.get_ray(x as f32, y as f32);
        return ray_color(scene, &ray, 0, config);
    }

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let dx = gen_f32(rng) - 0.5;
        let dy = gen_f32(rng) - 0.5;
        let ray = camera.get_ray(x as f32 + dx, y as f32 + dy);
        pixel_color += ray_color(scene, &ray, 0, config);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Row-major 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Set a pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + x as usize;
            self.pixels[idx] = rgb;
        }
    }

    /// Get a pixel, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
        } else {
            None
        }
    }

    /// Tightly packed RGB bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Render a full frame on the calling thread.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} ({} spp, max level {})",
        width,
        height,
        config.samples_per_pixel,
        config.max_level
    );
    let start = Instant::now();

    let camera = Camera::new(&scene.eye, width, height);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(&camera, scene, x, y, config, rng);
            image.set(x, y, color_to_rgb(color));
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

/// Render with the default configuration.
pub fn render_image(scene: &Scene, width: u32, height: u32) -> ImageBuffer {
    let config = RenderConfig::default();
    let mut rng = StdRng::seed_from_u64(config.seed);
    render(scene, width, height, &config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Ambient, Eye, Light, Material, ObjectStatus, Shape};
    use prism_math::{Vec3, Vec4};

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new(Eye::default(), Ambient::new(Color::splat(0.1)));
        scene.add_object(
            Shape::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0),
            Material::new(Color::ONE, 10.0),
            ObjectStatus::Diffuse,
        );
        scene.add_light(Light::directional(Color::ONE, Vec3::NEG_Z));
        scene
    }

    fn brightness(rgb: [u8; 3]) -> u32 {
        rgb.iter().map(|&c| c as u32).sum()
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(1.5, -0.2, 0.5)), [255, 0, 127]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
    }

    #[test]
    fn test_image_buffer_access() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, [1, 2, 3]);
        image.set(3, 0, [9, 9, 9]);

        assert_eq!(image.get(2, 1), Some([1, 2, 3]));
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.as_bytes().len(), 18);
        assert_eq!(&image.as_bytes()[15..], &[1, 2, 3]);
    }

    #[test]
    fn test_sphere_is_brightest_in_the_middle() {
        let image = render_image(&sphere_scene(), 21, 21);

        let center = image.get(10, 10).expect("in range");
        let rim = image.get(12, 10).expect("in range");
        let outside = image.get(13, 10).expect("in range");

        assert!(brightness(rim) > 0);
        assert!(brightness(center) > brightness(rim));
        assert_eq!(outside, [0, 0, 0]);
        assert_eq!(image.get(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_empty_scene_is_background() {
        let scene = Scene::default();
        let image = render_image(&scene, 8, 6);

        assert!(image.pixels.iter().all(|&p| p == [0, 0, 0]));

        let config = RenderConfig {
            background: Color::new(0.0, 0.0, 1.0),
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let image = render(&scene, 4, 4, &config, &mut rng);
        assert!(image.pixels.iter().all(|&p| p == [0, 0, 255]));
    }

    #[test]
    fn test_facing_mirrors_terminate_black() {
        let mut scene = Scene::new(Eye::default(), Ambient::new(Color::ONE));
        scene.add_object(
            Shape::plane(Vec4::new(0.0, 0.0, 1.0, 1.0)),
            Material::default(),
            ObjectStatus::Reflective,
        );
        scene.add_object(
            Shape::plane(Vec4::new(0.0, 0.0, 1.0, -1.0)),
            Material::default(),
            ObjectStatus::Reflective,
        );
        let config = RenderConfig {
            background: Color::ONE,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let image = render(&scene, 9, 9, &config, &mut rng);
        assert!(image.pixels.iter().all(|&p| p == [0, 0, 0]));
    }

    #[test]
    fn test_jittered_render_is_reproducible() {
        let scene = sphere_scene();
        let config = RenderConfig {
            samples_per_pixel: 4,
            ..RenderConfig::default()
        };

        let a = render(&scene, 12, 12, &config, &mut StdRng::seed_from_u64(7));
        let b = render(&scene, 12, 12, &config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
