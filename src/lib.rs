pub mod camera;
pub mod cli;
pub mod clock;
pub mod color;
pub mod display;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod stage;
pub mod world;

pub use camera::PerspectiveCamera;
pub use color::Color;
pub use geometry::{Geometry, Shape};
pub use material::Material;
pub use mesh::Mesh;
pub use renderer::CanvasRenderer;
pub use scene::{MeshId, Scene};
pub use stage::Stage;
pub use world::{Direction, World};
