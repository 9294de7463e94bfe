pub mod color;
pub mod geometry;
pub mod helpers;
pub mod lights;
pub mod material;

pub use color::Color;
pub use geometry::BoxGeometry;
pub use helpers::{AxisHelper, PointLightHelper};
pub use lights::{AmbientLight, PointLight};
pub use material::{Mesh, PhongMaterial};
