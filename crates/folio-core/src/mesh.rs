use glam::Vec3;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Recompute smooth normals from the current positions (area weighted).
    pub fn compute_vertex_normals(&mut self) {
        compute_vertex_normals(&self.positions, &self.indices, &mut self.normals);
    }

    pub(crate) fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let base = self.positions.len() as u32;
        let n = (b - a).cross(c - a).normalize_or_zero();
        self.positions.extend_from_slice(&[a, b, c]);
        self.normals.extend_from_slice(&[n, n, n]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

/// Write area-weighted vertex normals for `positions`/`indices` into `normals`.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32], normals: &mut Vec<Vec3>) {
    normals.clear();
    normals.resize(positions.len(), Vec3::ZERO);
    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(a), Some(b), Some(c)) = (positions.get(ia), positions.get(ib), positions.get(ic))
        else {
            continue;
        };
        let face = (*b - *a).cross(*c - *a);
        normals[ia] += face;
        normals[ib] += face;
        normals[ic] += face;
    }
    for n in normals.iter_mut() {
        *n = n.normalize_or_zero();
    }
}

/// Flat grid in the XY plane centred on the origin, rows running from +Y down.
pub fn plane_grid(size: f32, segments: u32) -> MeshData {
    let seg = segments.max(1);
    let row = seg + 1;
    let half = size * 0.5;
    let step = size / seg as f32;
    let mut mesh = MeshData::default();
    for iy in 0..row {
        let y = half - iy as f32 * step;
        for ix in 0..row {
            let x = -half + ix as f32 * step;
            mesh.positions.push(Vec3::new(x, y, 0.0));
            mesh.normals.push(Vec3::Z);
        }
    }
    for iy in 0..seg {
        for ix in 0..seg {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_grid_counts() {
        let m = plane_grid(10.0, 20);
        assert_eq!(m.vertex_count(), 21 * 21);
        assert_eq!(m.indices.len(), 20 * 20 * 6);
        assert_eq!(m.positions[0], Vec3::new(-5.0, 5.0, 0.0));
    }

    #[test]
    fn flat_plane_normals_face_z() {
        let mut m = plane_grid(2.0, 4);
        m.normals.clear();
        m.compute_vertex_normals();
        for n in &m.normals {
            assert!((*n - Vec3::Z).length() < 1e-5);
        }
    }
}
