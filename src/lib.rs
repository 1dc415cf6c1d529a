//! parlor
//!
//! Renders a static, furnished still life with wgpu. Scene content is plain
//! data; string tags name textures and materials, and every object is drawn
//! by pushing its transform, surface, material and UV scale into the shading
//! program before the mesh draw.
//!
//! High-level modules
//! - `bridge`: [`ShaderState`](bridge::ShaderState), the per-draw state pushes
//! - `camera`: fixed perspective camera and its uniform
//! - `composer`: prepares the registries once and walks the object list per frame
//! - `config`: runtime configuration with environment overrides
//! - `context`: window surface, device, queue and depth buffer
//! - `data_structures`: meshes, transforms, textures and the scene description
//! - `error`: typed errors for resource loading and the scene lifecycle
//! - `flow`: winit event loop
//! - `pipelines`: the scene pipeline, its uniform layouts and WGSL shader
//! - `resources`: texture and material registries, decoders and mesh provider
//! - `render`: encodes the recorded draws of a frame
//! - `shader`: named-uniform interface every program implements
//!

pub mod bridge;
pub mod camera;
pub mod composer;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod shader;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use composer::SceneComposer;
pub use config::SceneConfig;
pub use data_structures::scene::Scene;
