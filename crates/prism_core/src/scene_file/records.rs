//! Parsed scene-file records, before they are assembled into a scene.

use prism_math::Vec3;

use crate::scene::ObjectStatus;
use crate::Color;

/// One line of a scene file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneRecord {
    /// `e`: eye position and distance to the screen
    Eye { position: Vec3, screen_distance: f32 },

    /// `u`: up vector and screen height
    Up { up: Vec3, screen_height: f32 },

    /// `f`: forward vector and screen width
    Forward { forward: Vec3, screen_width: f32 },

    /// `a`: ambient intensity
    Ambient { intensity: Color },

    /// `c`: material for the object with the same ordinal
    Material { color: Color, shininess: f32 },

    /// `o`, `r`, `t`: sphere `(x, y, z, radius)` or plane `(a, b, c, d)`
    Object { params: [f32; 4], status: ObjectStatus },

    /// `d`: light direction; `kind == 0` means directional
    LightDirection { direction: Vec3, kind: f32 },

    /// `p`: spotlight position and cutoff cosine
    SpotPosition { position: Vec3, cutoff: f32 },

    /// `i`: intensity for the light with the same ordinal
    Intensity { intensity: Color },
}

impl SceneRecord {
    /// Build a record from its tag and four values.
    ///
    /// Returns `None` for tags that are not part of the format.
    pub fn from_tag(tag: &str, v: [f32; 4]) -> Option<Self> {
        let xyz = Vec3::new(v[0], v[1], v[2]);
        let record = match tag {
            "e" => SceneRecord::Eye { position: xyz, screen_distance: v[3] },
            "u" => SceneRecord::Up { up: xyz, screen_height: v[3] },
            "f" => SceneRecord::Forward { forward: xyz, screen_width: v[3] },
            "a" => SceneRecord::Ambient { intensity: xyz },
            "c" => SceneRecord::Material { color: xyz, shininess: v[3] },
            "o" => SceneRecord::Object { params: v, status: ObjectStatus::Diffuse },
            "r" => SceneRecord::Object { params: v, status: ObjectStatus::Reflective },
            "t" => SceneRecord::Object { params: v, status: ObjectStatus::Transparent },
            "d" => SceneRecord::LightDirection { direction: xyz, kind: v[3] },
            "p" => SceneRecord::SpotPosition { position: xyz, cutoff: v[3] },
            "i" => SceneRecord::Intensity { intensity: xyz },
            _ => return None,
        };
        Some(record)
    }

    /// Whether `tag` names a record type.
    pub fn is_known_tag(tag: &str) -> bool {
        matches!(tag, "e" | "u" | "f" | "a" | "c" | "o" | "r" | "t" | "d" | "p" | "i")
    }
}
