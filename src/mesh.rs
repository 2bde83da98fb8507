use glam::{EulerRot, Mat4, Vec3};

use crate::geometry::Geometry;
use crate::material::Material;

/// Renderable object: a geometry/material pairing with its own transform.
/// Position and rotation start at zero and are mutated per frame by the
/// simulation.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Local-to-world transform: translate after rotating, Euler angles
    /// applied in XYZ order
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}
