use crate::graph::*;

pub trait DistanceHereditary
where
    Self: QueryableGraph + Sized,
{
    /// Whether distances in every connected induced subgraph equal those in the graph.
    ///
    /// Repeatedly deletes an isolated vertex, a pendant vertex, or one of two
    /// twins; the graph is distance-hereditary iff this reaches a single vertex.
    fn is_distance_hereditary(&self) -> bool {
        let mut alive = self.vertices();
        while alive.len() > 1 {
            match prunable_vertex(self, alive) {
                Some(u) => alive.remove(u),
                None => return false,
            }
        }
        true
    }
}

impl<G: QueryableGraph> DistanceHereditary for G {}

fn prunable_vertex<G>(g: &G, alive: VertexSet) -> Option<usize>
where
    G: QueryableGraph,
{
    if let Some(u) = alive.iter().find(|&u| (g.neighbors(u) & alive).len() <= 1) {
        return Some(u);
    }
    for u in alive {
        let nu = g.neighbors(u) & alive;
        for v in alive.above(u) {
            // true twins when adjacent, false twins otherwise
            if nu - v == (g.neighbors(v) & alive) - u {
                return Some(v);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::{algorithm::*, graph::*};

    #[test]
    fn small_cases() {
        assert!(Graph::new(0).is_distance_hereditary());
        assert!(Graph::new(4).is_distance_hereditary());
        assert!(Graph::cycle(4).is_distance_hereditary());
        assert!(!Graph::cycle(5).is_distance_hereditary());
        assert!(Graph::complete(5).is_distance_hereditary());
        assert!(Graph::path(6).is_distance_hereditary());
        let named = NamedGraphs::new();
        for name in ["house", "gem", "domino"] {
            let g = named.get(name).unwrap();
            assert!(!g.is_distance_hereditary(), "{name}");
        }
    }

    #[test]
    fn forbidden_induced_subgraphs() {
        let named = NamedGraphs::new();
        let obstructions: Vec<Graph> = ["house", "gem", "domino"]
            .iter()
            .map(|name| named.get(name).unwrap())
            .collect();
        for n in 0..=7 {
            Enumeration::new(n).for_each(|g| {
                let obstructed = obstructions.iter().any(|f| g.has_induced(f))
                    || (5..=n).any(|k| g.has_induced(&Graph::cycle(k)));
                assert_eq!(g.is_distance_hereditary(), !obstructed, "{g}");
            });
        }
    }
}
