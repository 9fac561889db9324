//! Randomized graph generation

use super::{Graph, Position};
use rand::Rng;
use tracing::debug;

/// Sampling attempts allowed per requested edge before giving up
///
/// Rejections (self-loops, duplicates) grow as the graph fills up, so the
/// budget has to scale with the target rather than be a flat number.
pub const ATTEMPTS_PER_EDGE: usize = 20;

/// Minimum attempt budget, so small targets still get a fair number of draws
pub const MIN_ATTEMPTS: usize = 64;

/// Number of edges needed to reach `density` on `vertex_count` vertices
///
/// Density is the fraction of the `n * (n - 1) / 2` possible edges and is
/// clamped to `0.0..=1.0`.
pub fn target_edge_count(vertex_count: usize, density: f64) -> usize {
    let max_edges = vertex_count * vertex_count.saturating_sub(1) / 2;
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    (density * max_edges as f64).round() as usize
}

impl Graph {
    /// Replace the graph with `vertex_count` fresh vertices and random edges
    ///
    /// Candidate pairs are sampled independently and offered to
    /// [`Graph::add_edge`], so self-loops and duplicates are rejected by the
    /// same rules as manual edits. Sampling stops once the density target is
    /// met or the attempt budget runs out. Returns the number of edges added.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        vertex_count: usize,
        density: f64,
        rng: &mut R,
    ) -> usize {
        self.clear();
        let ids: Vec<_> = (0..vertex_count)
            .map(|_| self.add_vertex(Position::default()))
            .collect();

        let target = target_edge_count(vertex_count, density);
        if target == 0 {
            return 0;
        }

        let budget = (target * ATTEMPTS_PER_EDGE).max(MIN_ATTEMPTS);
        let mut added = 0;
        let mut attempts = 0;
        while added < target && attempts < budget {
            attempts += 1;
            let u = ids[rng.gen_range(0..ids.len())];
            let v = ids[rng.gen_range(0..ids.len())];
            if self.add_edge(u, v).is_ok() {
                added += 1;
            }
        }

        debug!(vertex_count, target, added, attempts, "randomized graph");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_target_edge_count() {
        assert_eq!(target_edge_count(0, 0.5), 0);
        assert_eq!(target_edge_count(1, 1.0), 0);
        assert_eq!(target_edge_count(4, 1.0), 6);
        assert_eq!(target_edge_count(4, 0.5), 3);
        assert_eq!(target_edge_count(4, 7.0), 6);
        assert_eq!(target_edge_count(4, -1.0), 0);
        assert_eq!(target_edge_count(4, f64::NAN), 0);
    }

    #[test]
    fn test_randomize_full_density_gives_complete_graph() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(7);
        let added = graph.randomize(5, 1.0, &mut rng);
        assert_eq!(graph.vertex_count(), 5);
        // Budget is generous enough that a complete K5 is reached
        assert_eq!(added, 10);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_randomize_replaces_previous_graph() {
        let mut graph = Graph::new();
        graph.add_vertex(Position::default());
        graph.add_vertex(Position::default());
        let mut rng = StdRng::seed_from_u64(1);
        graph.randomize(3, 0.0, &mut rng);
        let ids: Vec<_> = graph.vertices().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_randomize_single_vertex_terminates() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(graph.randomize(1, 1.0, &mut rng), 0);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_randomize_respects_edge_rules() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(99);
        let added = graph.randomize(12, 0.4, &mut rng);
        assert!(added <= target_edge_count(12, 0.4));
        assert_eq!(graph.edge_count(), added);
        for vertex in graph.vertices() {
            let id = vertex.id();
            assert!(!graph.neighbors(id).contains(&id));
            for &n in graph.neighbors(id) {
                assert!(graph.neighbors(n).contains(&id));
            }
        }
    }
}
