use glam::{Mat4, Vec3, Vec4};

use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::mesh::Mesh;
use crate::raster::Framebuffer;
use crate::scene::Scene;

/// Software scene renderer: projects every mesh through the camera and
/// rasterizes into an owned RGBA framebuffer.
///
/// This is the swappable backend seam — it only consumes `&Scene` and
/// `&PerspectiveCamera` and yields pixels, so nothing upstream knows
/// whether the rasterization happened on the CPU.
pub struct CanvasRenderer {
    framebuffer: Framebuffer,
    background: Color,
}

/// A vertex that survived projection: screen x/y in pixels, NDC depth in z
#[derive(Debug, Clone, Copy)]
struct Projected(Vec3);

impl CanvasRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            background: Color::BLACK,
        }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.framebuffer = Framebuffer::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Pixel bytes of the last rendered frame, RGBA8 row-major
    pub fn pixels(&self) -> &[u8] {
        self.framebuffer.bytes()
    }

    #[cfg(test)]
    pub(crate) fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Draw the scene as seen by the camera into the framebuffer
    pub fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        self.framebuffer.clear(self.background);
        let view_projection = camera.view_projection();

        for mesh in scene.meshes() {
            self.draw_mesh(mesh, view_projection);
        }
    }

    fn draw_mesh(&mut self, mesh: &Mesh, view_projection: Mat4) {
        let mvp = view_projection * mesh.model_matrix();

        let projected: Vec<Option<Projected>> = mesh
            .geometry
            .vertices
            .iter()
            .map(|&v| self.project(mvp, v))
            .collect();

        let color = mesh.material.color;
        if mesh.material.wireframe {
            for &[i, j] in &mesh.geometry.edges {
                // an edge with an endpoint behind the near plane is dropped
                // whole rather than clipped; nothing in this scene gets
                // that close to the camera
                if let (Some(a), Some(b)) = (projected[i as usize], projected[j as usize]) {
                    self.framebuffer.draw_line(a.0, b.0, color);
                }
            }
        } else {
            for &[i, j, k] in &mesh.geometry.triangles {
                if let (Some(a), Some(b), Some(c)) = (
                    projected[i as usize],
                    projected[j as usize],
                    projected[k as usize],
                ) {
                    if is_front_facing(a.0, b.0, c.0) {
                        self.framebuffer.fill_triangle(a.0, b.0, c.0, color);
                    }
                }
            }
        }
    }

    /// Model space to screen space; `None` when the vertex falls on or
    /// behind the camera plane
    fn project(&self, mvp: Mat4, vertex: Vec3) -> Option<Projected> {
        let clip = mvp * Vec4::new(vertex.x, vertex.y, vertex.z, 1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }

        let ndc = clip / clip.w;
        let x = (ndc.x * 0.5 + 0.5) * self.framebuffer.width() as f32;
        let y = (1.0 - (ndc.y * 0.5 + 0.5)) * self.framebuffer.height() as f32;
        Some(Projected(Vec3::new(x, y, ndc.z)))
    }
}

/// Geometries wind counter-clockwise seen from outside; after the y flip
/// into screen space a front face has negative signed area
fn is_front_facing(a: Vec3, b: Vec3, c: Vec3) -> bool {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::material::Material;
    use crate::mesh::Mesh;

    fn test_camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(75.0, 4.0 / 3.0, 0.1, 10000.0);
        camera.position.z = 300.0;
        camera
    }

    #[test]
    fn render_clears_before_drawing() {
        let mut renderer = CanvasRenderer::new(40, 30);
        let scene = Scene::new();
        renderer.render(&scene, &test_camera());

        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(renderer.framebuffer().pixel(x, y), Color::BLACK);
            }
        }
    }

    #[test]
    fn solid_sphere_covers_screen_center() {
        let mut renderer = CanvasRenderer::new(100, 75);
        let mut scene = Scene::new();
        scene.add(Mesh::new(
            Geometry::uv_sphere(100.0, 16, 16),
            Material::basic(Color::from_hex(0xff0000)),
        ));

        renderer.render(&scene, &test_camera());
        assert_eq!(
            renderer.framebuffer().pixel(50, 37),
            Color::from_hex(0xff0000)
        );
    }

    #[test]
    fn wireframe_cube_leaves_face_centers_empty() {
        let mut renderer = CanvasRenderer::new(100, 75);
        let mut scene = Scene::new();
        scene.add(Mesh::new(
            Geometry::cuboid(200.0, 200.0, 200.0),
            Material::wireframe(Color::from_hex(0xff00cc)),
        ));

        renderer.render(&scene, &test_camera());

        // an unrotated cube projects its front face as an axis-aligned
        // square around the center; the middle of that square is not on
        // any edge
        assert_eq!(renderer.framebuffer().pixel(50, 37), Color::BLACK);

        // but some magenta pixels exist
        let magenta = Color::from_hex(0xff00cc);
        let hits = (0..75)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| renderer.framebuffer().pixel(x, y) == magenta)
            .count();
        assert!(hits > 0, "wireframe cube drew no pixels");
    }

    #[test]
    fn set_size_resizes_buffer() {
        let mut renderer = CanvasRenderer::new(400, 300);
        assert_eq!(renderer.pixels().len(), 400 * 300 * 4);

        renderer.set_size(200, 150);
        assert_eq!(renderer.pixels().len(), 200 * 150 * 4);
        assert_eq!(renderer.width(), 200);
        assert_eq!(renderer.height(), 150);
    }
}
