use glam::Vec3;
use id_arena::Id;

use crate::primitives::{AmbientLight, AxisHelper, Mesh, PointLight, PointLightHelper};
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    AxisHelper(AxisHelper),
    Mesh(Mesh),
    PointLight(PointLight),
    PointLightHelper(PointLightHelper),
    AmbientLight(AmbientLight),
}

impl ObjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::AxisHelper(_) => "axis helper",
            ObjectKind::Mesh(_) => "mesh",
            ObjectKind::PointLight(_) => "point light",
            ObjectKind::PointLightHelper(_) => "point light helper",
            ObjectKind::AmbientLight(_) => "ambient light",
        }
    }
}

impl From<AxisHelper> for ObjectKind {
    fn from(helper: AxisHelper) -> Self {
        ObjectKind::AxisHelper(helper)
    }
}

impl From<Mesh> for ObjectKind {
    fn from(mesh: Mesh) -> Self {
        ObjectKind::Mesh(mesh)
    }
}

impl From<PointLight> for ObjectKind {
    fn from(light: PointLight) -> Self {
        ObjectKind::PointLight(light)
    }
}

impl From<PointLightHelper> for ObjectKind {
    fn from(helper: PointLightHelper) -> Self {
        ObjectKind::PointLightHelper(helper)
    }
}

impl From<AmbientLight> for ObjectKind {
    fn from(light: AmbientLight) -> Self {
        ObjectKind::AmbientLight(light)
    }
}

#[derive(Debug, Clone)]
pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub kind: ObjectKind,
}

impl Object3D {
    pub fn new(name: impl Into<String>, kind: impl Into<ObjectKind>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            kind: kind.into(),
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.transform.set_translation(translation);
        self
    }

    #[allow(dead_code)]
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}
