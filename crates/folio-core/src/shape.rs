//! Decorative shape kinds and their geometry.
//!
//! The kind is chosen once when a scene object is created; its mesh is built
//! then and never regenerated per frame.

use crate::mesh::MeshData;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Octahedron {
        radius: f32,
    },
    Tetrahedron {
        radius: f32,
    },
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Sphere {
            radius: 1.0,
            width_segments: 32,
            height_segments: 32,
        }
    }
}

impl ShapeKind {
    /// Resolve a markup-style tag ("box", "torus", ...). Unknown tags fall back to a sphere.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "box" => ShapeKind::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            "torus" => ShapeKind::Torus {
                radius: 0.7,
                tube: 0.3,
                radial_segments: 16,
                tubular_segments: 32,
            },
            "octahedron" => ShapeKind::Octahedron { radius: 1.0 },
            "tetrahedron" => ShapeKind::Tetrahedron { radius: 1.0 },
            _ => ShapeKind::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere { .. } => "sphere",
            ShapeKind::Box { .. } => "box",
            ShapeKind::Torus { .. } => "torus",
            ShapeKind::Octahedron { .. } => "octahedron",
            ShapeKind::Tetrahedron { .. } => "tetrahedron",
        }
    }

    /// Radius of a sphere enclosing the untransformed mesh.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            ShapeKind::Sphere { radius, .. } => radius,
            ShapeKind::Box {
                width,
                height,
                depth,
            } => 0.5 * Vec3::new(width, height, depth).length(),
            ShapeKind::Torus { radius, tube, .. } => radius + tube,
            ShapeKind::Octahedron { radius } | ShapeKind::Tetrahedron { radius } => radius,
        }
    }

    pub fn build_mesh(&self) -> MeshData {
        match *self {
            ShapeKind::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(radius, width_segments.max(3), height_segments.max(2)),
            ShapeKind::Box {
                width,
                height,
                depth,
            } => cuboid(Vec3::new(width, height, depth) * 0.5),
            ShapeKind::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments.max(3), tubular_segments.max(3)),
            ShapeKind::Octahedron { radius } => octahedron(radius),
            ShapeKind::Tetrahedron { radius } => tetrahedron(radius),
        }
    }
}

fn sphere(radius: f32, w: u32, h: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for iy in 0..=h {
        let phi = iy as f32 / h as f32 * PI;
        for ix in 0..=w {
            let theta = ix as f32 / w as f32 * TAU;
            let n = Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            mesh.positions.push(n * radius);
            mesh.normals.push(n);
        }
    }
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn cuboid(half: Vec3) -> MeshData {
    // (normal, u, v) with u x v == normal so every face winds outward
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let c = n * half;
        let (u, v) = (u * half, v * half);
        let base = mesh.positions.len() as u32;
        mesh.positions
            .extend_from_slice(&[c - u - v, c + u - v, c + u + v, c - u + v]);
        mesh.normals.extend_from_slice(&[n; 4]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.positions.push(p);
            mesh.normals.push((p - center).normalize_or_zero());
        }
    }
    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

fn polyhedron(radius: f32, verts: &[Vec3], faces: &[[usize; 3]]) -> MeshData {
    let mut mesh = MeshData::default();
    for f in faces {
        let [a, b, c] = f.map(|i| verts[i].normalize() * radius);
        mesh.push_triangle(a, b, c);
    }
    mesh
}

fn octahedron(radius: f32) -> MeshData {
    let verts = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(radius, &verts, &faces)
}

fn tetrahedron(radius: f32) -> MeshData {
    let verts = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ];
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    polyhedron(radius, &verts, &faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_falls_back_to_sphere() {
        assert_eq!(ShapeKind::from_tag("dodecahedron"), ShapeKind::default());
        assert_eq!(ShapeKind::from_tag(" Box ").name(), "box");
    }

    #[test]
    fn meshes_are_well_formed() {
        for tag in ["sphere", "box", "torus", "octahedron", "tetrahedron"] {
            let kind = ShapeKind::from_tag(tag);
            let mesh = kind.build_mesh();
            assert_eq!(mesh.positions.len(), mesh.normals.len(), "{tag}");
            assert_eq!(mesh.indices.len() % 3, 0, "{tag}");
            assert!(mesh
                .indices
                .iter()
                .all(|&i| (i as usize) < mesh.positions.len()));
            let r = kind.bounding_radius() + 1e-4;
            assert!(mesh.positions.iter().all(|p| p.length() <= r), "{tag}");
        }
    }

    #[test]
    fn closed_shapes_wind_outward() {
        for tag in ["box", "octahedron", "tetrahedron"] {
            let mesh = ShapeKind::from_tag(tag).build_mesh();
            for tri in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
                let n = (b - a).cross(c - a);
                let centroid = (a + b + c) / 3.0;
                assert!(n.dot(centroid) > 0.0, "{tag}");
            }
        }
    }
}
