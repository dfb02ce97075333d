//! Vector and matrix kernel.

pub mod mat4;
pub mod plane;
pub mod vec3;

pub use mat4::Mat4;
pub use plane::Plane;
pub use vec3::Vec3;
