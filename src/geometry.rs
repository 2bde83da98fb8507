use glam::Vec3;

/// Shape parameters a geometry was tessellated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Tessellated shape: vertex positions plus the index lists both render
/// paths need (edges for wireframe, triangles for fill)
#[derive(Debug, Clone)]
pub struct Geometry {
    pub shape: Shape,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
    pub triangles: Vec<[u32; 3]>,
}

impl Geometry {
    /// Axis-aligned box centered on the origin: 8 corners, 12 edges,
    /// 12 triangles (two per face)
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

        let vertices = vec![
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(hw, -hh, -hd),
            Vec3::new(hw, hh, -hd),
            Vec3::new(-hw, hh, -hd),
            Vec3::new(-hw, -hh, hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(-hw, hh, hd),
        ];

        let edges = vec![
            // back face ring
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            // front face ring
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            // connecting struts
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];

        let triangles = vec![
            [0, 2, 1],
            [0, 3, 2], // back
            [4, 5, 6],
            [4, 6, 7], // front
            [0, 1, 5],
            [0, 5, 4], // bottom
            [3, 7, 6],
            [3, 6, 2], // top
            [0, 4, 7],
            [0, 7, 3], // left
            [1, 2, 6],
            [1, 6, 5], // right
        ];

        Self {
            shape: Shape::Box {
                width,
                height,
                depth,
            },
            vertices,
            edges,
            triangles,
        }
    }

    /// UV sphere centered on the origin. Rows run pole to pole
    /// (`height_segments + 1` rings of `width_segments + 1` vertices, the
    /// seam column duplicated). Triangles touching a pole collapse to a
    /// single strip.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
        for row in 0..=hs {
            // polar angle from +Y pole
            let v = row as f32 / hs as f32;
            let phi = v * std::f32::consts::PI;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for col in 0..=ws {
                let u = col as f32 / ws as f32;
                let theta = u * std::f32::consts::TAU;
                let (sin_theta, cos_theta) = theta.sin_cos();
                vertices.push(Vec3::new(
                    radius * sin_phi * cos_theta,
                    radius * cos_phi,
                    radius * sin_phi * sin_theta,
                ));
            }
        }

        let stride = ws + 1;
        let at = |row: u32, col: u32| row * stride + col;

        let mut edges = Vec::new();
        let mut triangles = Vec::new();
        for row in 0..hs {
            for col in 0..ws {
                let a = at(row, col);
                let b = at(row + 1, col);
                let c = at(row + 1, col + 1);
                let d = at(row, col + 1);

                // longitude line, plus latitude line on interior rings
                edges.push([a, b]);
                if row > 0 {
                    edges.push([a, d]);
                }

                // counter-clockwise seen from outside, matching the box
                if row > 0 {
                    triangles.push([a, d, b]);
                }
                if row < hs - 1 {
                    triangles.push([b, d, c]);
                }
            }
        }

        Self {
            shape: Shape::Sphere {
                radius,
                width_segments: ws,
                height_segments: hs,
            },
            vertices,
            edges,
            triangles,
        }
    }
}
