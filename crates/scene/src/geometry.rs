//! Procedural section geometry.
//!
//! All generators emit indexed triangle lists, counter-clockwise front faces,
//! with one smooth normal per vertex.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// CPU-side triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// The three section shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Ring,
    Cone,
    Knot,
}

impl GeometryKind {
    /// Section order from the top of the page down.
    pub const SECTIONS: [GeometryKind; 3] = [Self::Ring, Self::Cone, Self::Knot];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Cone => "cone",
            Self::Knot => "knot",
        }
    }

    pub fn build(self) -> MeshData {
        match self {
            Self::Ring => torus(1.0, 0.4, 16, 48, TAU),
            Self::Cone => cone(1.0, 0.4, 16, 1),
            Self::Knot => torus_knot(1.0, 0.4, 16, 8, 2, 3),
        }
    }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    arc: f32,
) -> MeshData {
    let mut mesh = MeshData::default();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * arc;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(position, (position - center).normalize());
        }
    }

    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.triangle(a, b, d);
            mesh.triangle(b, c, d);
        }
    }
    mesh
}

/// Cone along the Y axis with its apex up, centered on the origin, with a
/// capped base.
pub fn cone(radius: f32, height: f32, radial_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half_height = height / 2.0;
    let slope = radius / height;

    // side wall, one row of vertices per height step, apex row first
    let row = radial_segments + 1;
    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let ring = v * radius;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push(
                Vec3::new(ring * sin, -v * height + half_height, ring * cos),
                Vec3::new(sin, slope, cos).normalize(),
            );
        }
    }
    for x in 0..radial_segments {
        for y in 0..height_segments {
            let a = row * y + x;
            let b = row * (y + 1) + x;
            let c = row * (y + 1) + x + 1;
            let d = row * y + x + 1;
            // the apex row has zero radius, its first triangle is degenerate
            if y != 0 {
                mesh.triangle(a, b, d);
            }
            mesh.triangle(b, c, d);
        }
    }

    // base cap: one center vertex per segment, then the rim
    let down = Vec3::NEG_Y;
    let center_start = mesh.vertex_count() as u32;
    for _ in 0..radial_segments {
        mesh.push(Vec3::new(0.0, -half_height, 0.0), down);
    }
    let rim_start = mesh.vertex_count() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push(Vec3::new(radius * sin, -half_height, radius * cos), down);
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = rim_start + x;
        mesh.triangle(i + 1, i, c);
    }
    mesh
}

/// Tube swept along a `(p, q)` torus knot.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let (p, q) = (p as f32, q as f32);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);

        // Frenet-like frame from the curve tangent
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1);
        let normal = binormal.cross(tangent).normalize();
        let binormal = binormal.normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.push(position, (position - p1).normalize());
        }
    }

    let row = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.triangle(a, b, d);
            mesh.triangle(b, c, d);
        }
    }
    mesh
}

fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}
