//! Scene file support for Prism.
//!
//! Scene files are plain text, one record per line. Each record is a
//! one-letter tag followed by four numbers:
//!
//! - `e x y z d` eye position and screen distance
//! - `u x y z h` up vector and screen height
//! - `f x y z w` forward vector and screen width
//! - `a r g b _` ambient intensity
//! - `o`/`r`/`t` `a b c d` diffuse / reflective / transparent object;
//!   a sphere `(center, radius)` when `d > 0`, otherwise a plane `ax+by+cz+d=0`
//! - `c r g b n` material colour and shininess, paired with objects in order
//! - `d x y z k` light direction; `k == 0` directional, otherwise spotlight
//! - `p x y z c` spotlight position and cutoff, paired with spotlights in order
//! - `i r g b _` light intensity, paired with `d` records in order
//!
//! Blank lines and lines starting with `#` are ignored.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::scene_file::load_scene;
//!
//! let scene = load_scene("scenes/spheres.txt")?;
//! ```

mod loader;
mod parser;
mod records;

pub use loader::*;
pub use parser::*;
pub use records::*;
