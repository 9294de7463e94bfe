pub mod object3d;
pub mod scene;
pub mod transform;

pub use object3d::{Object3D, ObjectId, ObjectKind};
pub use scene::Scene;
