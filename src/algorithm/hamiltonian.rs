use crate::graph::*;

/// Hamiltonian cycles and paths by depth-first path extension.
pub trait Hamiltonicity
where
    Self: QueryableGraph + Sized,
{
    /// Whether some cycle passes through every vertex exactly once.
    ///
    /// $K_1$ counts as Hamiltonian; the empty graph and any graph on 2 vertices do not.
    fn is_hamiltonian(&self) -> bool {
        match self.n() {
            0 | 2 => return false,
            1 => return true,
            _ => {}
        }
        if !self.is_connected() || self.vertices().iter().any(|u| self.deg(u) < 2) {
            return false;
        }
        // every Hamiltonian cycle passes through vertex 0
        extend_path(self, 0, VertexSet::singleton(0), Some(0))
    }

    /// Whether some path passes through every vertex exactly once.
    /// The empty graph is not traceable.
    fn is_traceable(&self) -> bool {
        if self.n() == 0 || !self.is_connected() {
            return false;
        }
        let ends = self.vertices().iter().filter(|&u| self.deg(u) == 1).count();
        if ends > 2 {
            return false;
        }
        self.vertices()
            .iter()
            .any(|u| extend_path(self, u, VertexSet::singleton(u), None))
    }
}

impl<G: QueryableGraph> Hamiltonicity for G {}

/// Extends a path ending in `last` over `visited`; with `close_to`, the full
/// path must end next to that vertex.
fn extend_path<G>(g: &G, last: usize, visited: VertexSet, close_to: Option<usize>) -> bool
where
    G: QueryableGraph,
{
    if visited == g.vertices() {
        return match close_to {
            Some(first) => g.has_edge(last, first),
            None => true,
        };
    }
    (g.neighbors(last) - visited)
        .iter()
        .any(|next| extend_path(g, next, visited + next, close_to))
}
