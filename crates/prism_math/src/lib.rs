// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod optics;
pub use interval::Interval;
pub use optics::{reflect, refract, Transmission};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec4_truncate() {
        let plane = Vec4::new(0.0, 1.0, 0.0, 2.0);
        assert_eq!(plane.truncate(), Vec3::Y);
        assert_eq!(plane.w, 2.0);
    }
}
