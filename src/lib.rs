//! A CPU-based software-rendered 3D flyover.
//!
//! This crate turns a static triangle mesh, a free-flying camera and a
//! rotating sun into a sorted list of flat-shaded, clipped screen-space
//! triangles every frame, then paints them back to front. SDL2 is used only
//! for the window and keyboard.
//!
//! # Quick Start
//!
//! ```ignore
//! use painter3d::prelude::*;
//!
//! let config = Config::default();
//! let mut engine = Engine::new(&config, Mesh::cube(), 640, 480)?;
//! let triangles = engine.update(&InputState::default(), 1.0 / 60.0);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipping;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod shading;
pub mod transform;
pub mod triangle;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use engine::Engine;
pub use error::{ConfigError, Error, MeshError, Result};
pub use mesh::Mesh;
pub use triangle::Triangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use painter3d::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{CameraController, CoordinateSystem};

    // Engine
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::mesh::Mesh;

    // Geometry
    pub use crate::colors::Color;
    pub use crate::light::DayCycle;
    pub use crate::projection::{Projection, Viewport};
    pub use crate::transform::Transform;
    pub use crate::triangle::Triangle;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::plane::Plane;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{FrameBuffer, Rasterizer, RenderMode, ScanlineRasterizer};

    // Window & Input
    pub use crate::input::InputState;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
