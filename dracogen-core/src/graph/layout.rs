//! Force-directed layout.
//!
//! Edges pull their endpoints together with a constant-magnitude force, every pair of nodes
//! repels with an inverse-square force, and the canvas walls push nodes inward. Integration is
//! semi-implicit Euler followed by a collision pass that separates overlapping nodes and clamps
//! them inside the walls.

use crate::config::GraphSettings;
use crate::foundation::core::{Vec2, VecExt};
use crate::foundation::math::safe_ratio0;
use crate::graph::model::{Graph, NodeKind};
use crate::random::{PcgSource, RandomSource};

/// Radius of a drawn state in world units.
pub const NODE_RADIUS: f64 = 0.8;

/// Half-width of the square initial nodes are scattered over.
pub const INITIAL_SPREAD: f64 = 7.0;

/// Force constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simulation {
    /// Node-node repulsion numerator.
    pub repulsion: f64,
    /// Wall repulsion numerator.
    pub side_repulsion: f64,
    /// Edge pull.
    pub attraction: f64,
    /// Velocity damping.
    pub drag: f64,
    /// Collision radius.
    pub node_radius: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            repulsion: 45.0,
            side_repulsion: 600.0,
            attraction: 4.0,
            drag: 6.0,
            node_radius: NODE_RADIUS,
        }
    }
}

impl Simulation {
    /// Advance every node by `dt` inside the box `[min, max]`.
    pub fn step(&self, graph: &mut Graph, min: Vec2, max: Vec2, dt: f64) {
        self.attract(graph);
        self.repel(graph, min, max);
        for node in &mut graph.nodes {
            node.acc -= node.vel * self.drag;
            node.vel += node.acc * dt;
            node.pos += node.vel * dt;
            node.acc = Vec2::ZERO;
        }
        self.collide(graph, min, max);
    }

    /// Run `iterations` steps.
    pub fn run(&self, graph: &mut Graph, min: Vec2, max: Vec2, dt: f64, iterations: u32) {
        for _ in 0..iterations {
            self.step(graph, min, max, dt);
        }
    }

    fn attract(&self, graph: &mut Graph) {
        for edge in &graph.edges {
            if edge.half_bidirectional {
                continue;
            }
            let a = edge.source;
            let mut b = edge.dest;
            let mut k = self.attraction;
            if edge.loopback {
                if let Some(control) = edge.control {
                    b = control;
                }
                k = 2.0 * self.attraction;
            }
            if graph.nodes[a].kind == NodeKind::Prestart {
                k = 3.0 * self.attraction;
            }
            let dir = (graph.nodes[b].pos - graph.nodes[a].pos).safe_normalize();
            graph.nodes[a].acc += dir * k;
            graph.nodes[b].acc -= dir * k;
        }
    }

    fn repel(&self, graph: &mut Graph, min: Vec2, max: Vec2) {
        let n = graph.nodes.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (ki, kj) = (graph.nodes[i].kind, graph.nodes[j].kind);
                if ki == NodeKind::Control && kj == NodeKind::Control {
                    continue;
                }
                let k = if ki.is_virtual() || kj.is_virtual() {
                    0.3 * self.repulsion
                } else {
                    self.repulsion
                };
                let delta = graph.nodes[j].pos - graph.nodes[i].pos;
                let force = delta.safe_normalize() * safe_ratio0(k, delta.hypot2());
                graph.nodes[i].acc -= force;
                graph.nodes[j].acc += force;
            }

            let node = &mut graph.nodes[i];
            for side in [min, max] {
                let delta = side - node.pos;
                let mut magnitude = Vec2::new(
                    safe_ratio0(1.0, delta.x * delta.x),
                    safe_ratio0(1.0, delta.y * delta.y),
                ) * self.side_repulsion;
                if node.kind.is_virtual() {
                    magnitude *= 0.1;
                }
                node.acc -= delta.safe_normalize().hadamard(magnitude);
            }
        }
    }

    fn collide(&self, graph: &mut Graph, min: Vec2, max: Vec2) {
        let r = self.node_radius;
        let n = graph.nodes.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let diff = graph.nodes[j].pos - graph.nodes[i].pos;
                if diff.hypot2() >= (2.0 * r) * (2.0 * r) {
                    continue;
                }
                let normal = diff.safe_normalize();
                let center = graph.nodes[i].pos + diff * 0.5;
                let x1 = center - normal * r;
                let x2 = center + normal * r;
                let (v1, v2) = (graph.nodes[i].vel, graph.nodes[j].vel);
                let sep = x1 - x2;
                let exchange = safe_ratio0((v1 - v2).dot(sep), sep.hypot2());
                graph.nodes[i].pos = x1;
                graph.nodes[j].pos = x2;
                graph.nodes[i].vel = v1 - sep * exchange;
                graph.nodes[j].vel = v2 + sep * exchange;
            }
        }

        for node in &mut graph.nodes {
            if node.pos.x - r < min.x {
                node.pos.x = min.x + r;
                node.vel.x = -node.vel.x;
            } else if node.pos.x + r > max.x {
                node.pos.x = max.x - r;
                node.vel.x = -node.vel.x;
            }
            if node.pos.y - r < min.y {
                node.pos.y = min.y + r;
                node.vel.y = -node.vel.y;
            } else if node.pos.y + r > max.y {
                node.pos.y = max.y - r;
                node.vel.y = -node.vel.y;
            }
        }
    }
}

/// Scatter every node uniformly over `[-7, 7]^2` and zero its motion.
pub fn place_initial<R: RandomSource + ?Sized>(graph: &mut Graph, rng: &mut R) {
    for node in &mut graph.nodes {
        node.pos = Vec2::new(
            rng.between(-INITIAL_SPREAD, INITIAL_SPREAD),
            rng.between(-INITIAL_SPREAD, INITIAL_SPREAD),
        );
        node.vel = Vec2::ZERO;
        node.acc = Vec2::ZERO;
    }
}

/// Seeded placement followed by the configured number of simulation steps inside the canvas.
#[tracing::instrument(skip(graph, settings), fields(nodes = graph.nodes.len()))]
pub fn run_layout(graph: &mut Graph, settings: &GraphSettings, seed: u64) {
    let mut rng = PcgSource::from_seed(seed);
    place_initial(graph, &mut rng);
    let (hx, hy) = settings.half_extent();
    let max = Vec2::new(hx, hy);
    Simulation::default().run(graph, -max, max, settings.dt, settings.iterations);
    tracing::debug!(iterations = settings.iterations, "layout settled");
}

#[cfg(test)]
#[path = "../../tests/unit/graph/layout.rs"]
mod tests;
