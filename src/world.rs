use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::geometry::Geometry;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::scene::{MeshId, Scene};

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10000.0;
pub const CAMERA_OFFSET_Z: f32 = 300.0;

pub const CUBE_SIZE: f32 = 200.0;
pub const CUBE_COLOR: Color = Color::from_hex(0xff00cc);
pub const CUBE_SPIN_X: f32 = 0.01;
pub const CUBE_SPIN_Y: f32 = 0.02;

pub const SPHERE_RADIUS: f32 = 100.0;
pub const SPHERE_SEGMENTS: u32 = 16;
pub const SPHERE_COLOR: Color = Color::from_hex(0xff0000);
pub const BOUNCE_BOUND: f32 = 100.0;
pub const BOUNCE_STEP: f32 = 1.0;

/// Horizontal travel state of the bouncing sphere. Being a two-variant
/// enum, the "always exactly +1 or -1" invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    /// Signed step applied to the sphere's x position each frame
    pub fn step(self) -> f32 {
        match self {
            Direction::Right => BOUNCE_STEP,
            Direction::Left => -BOUNCE_STEP,
        }
    }
}

/// The whole animated scene: camera, objects, and bounce state.
///
/// Construction is the one-time initializer; [`World::advance`] is one
/// simulation tick, free of any scheduling or drawing so it runs headless
/// in tests.
pub struct World {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub cube: MeshId,
    pub sphere: MeshId,
    direction: Direction,
}

impl World {
    /// Build the scene: 75° camera pulled 300 units back, a wireframe
    /// magenta cube and a solid red sphere at the origin
    pub fn new(display_width: u32, display_height: u32) -> Self {
        let aspect = display_width as f32 / display_height as f32;
        let mut camera =
            PerspectiveCamera::new(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position.z = CAMERA_OFFSET_Z;

        let mut scene = Scene::new();
        let cube = scene.add(Mesh::new(
            Geometry::cuboid(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE),
            Material::wireframe(CUBE_COLOR),
        ));
        let sphere = scene.add(Mesh::new(
            Geometry::uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            Material::basic(SPHERE_COLOR),
        ));

        Self {
            scene,
            camera,
            cube,
            sphere,
            direction: Direction::Right,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cube(&self) -> &Mesh {
        self.scene.mesh(self.cube)
    }

    pub fn sphere(&self) -> &Mesh {
        self.scene.mesh(self.sphere)
    }

    /// One simulation tick: spin the cube, bounce the sphere
    pub fn advance(&mut self) {
        let cube = self.scene.mesh_mut(self.cube);
        cube.rotation.x += CUBE_SPIN_X;
        cube.rotation.y += CUBE_SPIN_Y;

        // ordered evaluation: the right bound is checked before the left,
        // so a position somehow past both bounds settles on Right
        let sphere = self.scene.mesh_mut(self.sphere);
        if sphere.position.x > BOUNCE_BOUND {
            self.direction = Direction::Left;
        }
        if sphere.position.x < -BOUNCE_BOUND {
            self.direction = Direction::Right;
        }
        sphere.position.x += self.direction.step();
    }
}
