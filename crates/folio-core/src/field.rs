use crate::constants::{
    BREATHE_AMPLITUDE, BREATHE_PHASE_STEP, BREATHE_RATE, FIELD_PITCH_AMPLITUDE, FIELD_PITCH_RATE,
    FIELD_RADIUS_MIN, FIELD_RADIUS_SPAN, FIELD_YAW_RATE, GLOW_PULSE_AMPLITUDE, GLOW_PULSE_RATE,
    GRAPH_YAW_RATE, POINTER_FALLOFF_RADIUS, POINTER_INFLUENCE_DAMPING, POINTER_INFLUENCE_STRENGTH,
};
use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// Equal-area spiral placement: point `i` of `count` on a sphere of the given
/// radius. Distinct indices land on distinct latitudes, so the distribution
/// is collision-free.
#[inline]
pub fn spiral_point(i: usize, count: usize, radius: f32) -> Vec3 {
    let phi = (-1.0 + 2.0 * i as f32 / count as f32).acos();
    let theta = (count as f32 * PI).sqrt() * phi;
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// Particle cloud on a spherical shell.
///
/// Base positions are generated once from the seeded spiral and never move;
/// `update` recomputes every current position from scratch each frame
/// (breathing plus pointer attraction), so error never accumulates.
#[derive(Clone, Debug)]
pub struct PointField {
    base: Vec<Vec3>,
    current: Vec<Vec3>,
}

impl PointField {
    /// Deterministic for a given `(count, seed)`. `count = 0` yields an empty
    /// field.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let base: Vec<Vec3> = (0..count)
            .map(|i| {
                let radius = FIELD_RADIUS_MIN + rng.gen::<f32>() * FIELD_RADIUS_SPAN;
                spiral_point(i, count, radius)
            })
            .collect();
        let current = base.clone();
        Self { base, current }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn base(&self) -> &[Vec3] {
        &self.base
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Recompute current positions for elapsed time `t` and an optional
    /// pointer projected onto the z=0 view plane. The pointer pulls x/y only;
    /// z breathes but is never attracted.
    pub fn update(&mut self, t: f32, pointer: Option<Vec2>) {
        for (i, (cur, &b)) in self.current.iter_mut().zip(self.base.iter()).enumerate() {
            let breathe = (t * BREATHE_RATE + i as f32 * BREATHE_PHASE_STEP).sin() * BREATHE_AMPLITUDE;
            let mut p = b + b * breathe;
            if let Some(m) = pointer {
                let dist = Vec2::new(b.x, b.y).distance(m);
                let influence =
                    (1.0 - dist / POINTER_FALLOFF_RADIUS).max(0.0) * POINTER_INFLUENCE_STRENGTH;
                p.x += (m.x - b.x) * influence * POINTER_INFLUENCE_DAMPING;
                p.y += (m.y - b.y) * influence * POINTER_INFLUENCE_DAMPING;
            }
            *cur = p;
        }
    }
}

/// Rigid whole-field rotation for elapsed time `t`, applied as a separate
/// transform after per-point displacement: slow constant yaw plus a gentle
/// pitch sway.
pub fn field_rotation(t: f32) -> Mat4 {
    Mat4::from_rotation_x((t * FIELD_PITCH_RATE).sin() * FIELD_PITCH_AMPLITUDE)
        * Mat4::from_rotation_y(t * FIELD_YAW_RATE)
}

/// Co-rotation for the connection graph layer.
pub fn graph_rotation(t: f32) -> Mat4 {
    Mat4::from_rotation_y(t * GRAPH_YAW_RATE)
}

/// Breathing scale of the central glow sprite.
pub fn glow_scale(t: f32) -> f32 {
    1.0 + (t * GLOW_PULSE_RATE).sin() * GLOW_PULSE_AMPLITUDE
}

/// Static nearest-neighbor wiring among a coarser node shell.
///
/// Nodes come from the same spiral at a fixed radius; an undirected edge
/// exists iff the pair sits closer than the threshold. Computed once,
/// immutable after construction.
#[derive(Clone, Debug)]
pub struct ConnectionGraph {
    nodes: Vec<Vec3>,
    edges: Vec<[usize; 2]>,
}

impl ConnectionGraph {
    pub fn build(node_count: usize, radius: f32, threshold: f32) -> Self {
        let nodes: Vec<Vec3> = (0..node_count)
            .map(|i| spiral_point(i, node_count, radius))
            .collect();
        let mut edges = Vec::new();
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if nodes[i].distance(nodes[j]) < threshold {
                    edges.push([i, j]);
                }
            }
        }
        log::debug!(
            "[graph] nodes={} edges={} threshold={:.2}",
            node_count,
            edges.len(),
            threshold
        );
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Flat endpoint pairs for a line-list draw.
    pub fn line_vertices(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.edges.len() * 2);
        for &[a, b] in &self.edges {
            out.push(self.nodes[a]);
            out.push(self.nodes[b]);
        }
        out
    }
}
