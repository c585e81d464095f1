//! Light sources.

use prism_math::Vec3;

use crate::Color;

/// A light source illuminating diffuse surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Parallel light arriving from infinitely far away along `direction`.
    Directional { intensity: Color, direction: Vec3 },
    /// Point light at `position` shining a cone around `direction`.
    ///
    /// `cutoff` is the cosine of the cone's half-angle.
    Spot {
        intensity: Color,
        direction: Vec3,
        position: Vec3,
        cutoff: f32,
    },
}

/// Where a light sits as seen from a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPath {
    /// Unit vector from the point towards the light
    pub to_light: Vec3,
    /// Distance to the light; infinite for directional lights
    pub distance: f32,
}

impl Light {
    pub fn directional(intensity: Color, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    pub fn spot(intensity: Color, direction: Vec3, position: Vec3, cutoff: f32) -> Self {
        Light::Spot {
            intensity,
            direction,
            position,
            cutoff,
        }
    }

    pub fn intensity(&self) -> Color {
        match *self {
            Light::Directional { intensity, .. } | Light::Spot { intensity, .. } => intensity,
        }
    }

    /// Direction the light travels in (not necessarily normalized).
    pub fn direction(&self) -> Vec3 {
        match *self {
            Light::Directional { direction, .. } | Light::Spot { direction, .. } => direction,
        }
    }

    /// Direction and distance from `point` to this light.
    pub fn path_from(&self, point: Vec3) -> LightPath {
        match *self {
            Light::Directional { direction, .. } => LightPath {
                to_light: -direction.normalize(),
                distance: f32::INFINITY,
            },
            Light::Spot { position, .. } => {
                let offset = position - point;
                LightPath {
                    to_light: offset.normalize(),
                    distance: offset.length(),
                }
            }
        }
    }

    /// Whether `point` lies inside the light's beam, ignoring occluders.
    ///
    /// Directional lights reach everywhere. A spotlight reaches points whose
    /// angle from its axis has a cosine of at least `cutoff`.
    pub fn illuminates(&self, point: Vec3) -> bool {
        match *self {
            Light::Directional { .. } => true,
            Light::Spot {
                direction,
                position,
                cutoff,
                ..
            } => {
                let to_point = (point - position).normalize();
                direction.normalize().dot(to_point) >= cutoff
            }
        }
    }

    pub fn is_spot(&self) -> bool {
        matches!(self, Light::Spot { .. })
    }
}
