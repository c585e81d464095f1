//! Procedural surface textures.

use prism_math::Vec3;

use crate::Color;

/// Edge length of one checkerboard tile in world units.
pub const CHECKER_TILE_SIZE: f32 = 0.5;

/// Two-tone checkerboard over world x/y.
///
/// Tiles alternate between `color` and `0.5 * color`. Negative coordinates
/// are shifted by one tile before flooring so the tile straddling the origin
/// on each axis still alternates with its neighbours.
pub fn checkerboard(color: Color, point: Vec3) -> Color {
    let tiles = tile_index(point.x) + tile_index(point.y);
    if tiles % 2 == 1 {
        0.5 * color
    } else {
        color
    }
}

fn tile_index(v: f32) -> i64 {
    let scaled = if v < 0.0 {
        (CHECKER_TILE_SIZE - v) / CHECKER_TILE_SIZE
    } else {
        v / CHECKER_TILE_SIZE
    };
    scaled.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Vec3::new(1.0, 0.0, 0.0);
    const DARK_RED: Color = Vec3::new(0.5, 0.0, 0.0);

    #[test]
    fn test_origin_tile_is_full_color() {
        assert_eq!(checkerboard(RED, Vec3::ZERO), RED);
        assert_eq!(checkerboard(RED, Vec3::new(0.49, 0.49, 7.0)), RED);
    }

    #[test]
    fn test_alternates_along_x() {
        assert_eq!(checkerboard(RED, Vec3::new(0.25, 0.1, 0.0)), RED);
        assert_eq!(checkerboard(RED, Vec3::new(0.75, 0.1, 0.0)), DARK_RED);
        assert_eq!(checkerboard(RED, Vec3::new(1.25, 0.1, 0.0)), RED);
    }

    #[test]
    fn test_alternates_across_origin() {
        assert_eq!(checkerboard(RED, Vec3::new(0.25, 0.1, 0.0)), RED);
        assert_eq!(checkerboard(RED, Vec3::new(-0.25, 0.1, 0.0)), DARK_RED);
        assert_eq!(checkerboard(RED, Vec3::new(-0.75, 0.1, 0.0)), RED);
        assert_eq!(checkerboard(RED, Vec3::new(0.1, -0.25, 0.0)), DARK_RED);
    }

    #[test]
    fn test_diagonal_neighbours_match() {
        assert_eq!(checkerboard(RED, Vec3::new(0.75, 0.75, 0.0)), RED);
        assert_eq!(checkerboard(RED, Vec3::new(-0.25, -0.25, 0.0)), RED);
    }

    #[test]
    fn test_ignores_z() {
        let a = checkerboard(RED, Vec3::new(0.75, 0.1, -3.0));
        let b = checkerboard(RED, Vec3::new(0.75, 0.1, 42.0));
        assert_eq!(a, b);
    }
}
