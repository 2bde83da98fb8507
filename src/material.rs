use crate::color::Color;

/// Flat-shaded appearance: one color, drawn filled or as edges only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub color: Color,
    pub wireframe: bool,
}

impl Material {
    /// Filled material
    pub const fn basic(color: Color) -> Self {
        Self {
            color,
            wireframe: false,
        }
    }

    /// Edges-only material
    pub const fn wireframe(color: Color) -> Self {
        Self {
            color,
            wireframe: true,
        }
    }
}
