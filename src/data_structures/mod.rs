//! Scene data: meshes, transforms, textures and the static scene description.
//!
//! - `mesh` holds the primitive kinds, their vertex layout and geometry
//! - `scene` describes what to load and what to draw, in order
//! - `texture` wraps GPU textures and their creation
//! - `transform` composes per-object model matrices

pub mod mesh;
pub mod scene;
pub mod texture;
pub mod transform;
