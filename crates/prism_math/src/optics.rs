//! Reflection and refraction of direction vectors.

use crate::Vec3;

/// Outgoing direction of a ray crossing a refractive boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transmission {
    /// The ray bends into the other medium.
    Refracted(Vec3),
    /// Total internal reflection; the ray stays in its medium.
    Reflected(Vec3),
}

impl Transmission {
    /// The outgoing direction, whichever way the ray went.
    #[inline]
    pub fn direction(self) -> Vec3 {
        match self {
            Transmission::Refracted(d) | Transmission::Reflected(d) => d,
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `incident` through a surface with normal `normal` separating a
/// medium of index `outer_ior` from one of index `inner_ior`.
///
/// `normal` is the outward normal of the inner medium. It does not need to
/// face the incident ray: a positive incidence cosine means the ray is
/// leaving the inner medium, in which case the indices swap and the normal
/// is flipped before Snell's law is applied. When Snell's law has no real
/// solution the mirror direction is returned instead.
pub fn refract(incident: Vec3, normal: Vec3, outer_ior: f32, inner_ior: f32) -> Transmission {
    let i = incident.normalize();
    let mut n = normal.normalize();

    let mut cos_i = i.dot(n).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (outer_ior, inner_ior);

    if cos_i > 0.0 {
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -n;
    }
    cos_i = cos_i.abs();

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);

    if k < 0.0 {
        return Transmission::Reflected(reflect(i, n).normalize());
    }

    Transmission::Refracted((eta * i + (eta * cos_i - k.sqrt()) * n).normalize())
}
