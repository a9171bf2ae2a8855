use crate::graph::*;

pub trait AsteroidalTriples
where
    Self: QueryableGraph + Sized,
{
    /// Three pairwise nonadjacent vertices such that every two of them are
    /// joined by a path avoiding the closed neighborhood of the third.
    ///
    /// The components of $G - N[v]$ are computed once per vertex, then every
    /// independent triple is checked against them.
    fn find_asteroidal_triple(&self) -> Option<[usize; 3]> {
        let avoiding: Vec<Vec<VertexSet>> = (0..self.n())
            .map(|v| {
                self.components_within(self.vertices() - self.closed_neighbors(v))
                    .collect()
            })
            .collect();
        let joined = |x: usize, y: usize, avoid: usize| {
            avoiding[avoid]
                .iter()
                .any(|cc| cc.contains(x) && cc.contains(y))
        };
        for a in self.vertices() {
            let non_a = self.vertices().above(a) - self.neighbors(a);
            for b in non_a {
                for c in non_a.above(b) - self.neighbors(b) {
                    if joined(a, b, c) && joined(a, c, b) && joined(b, c, a) {
                        return Some([a, b, c]);
                    }
                }
            }
        }
        None
    }

    /// Whether the graph has no asteroidal triple.
    fn is_at_free(&self) -> bool {
        self.find_asteroidal_triple().is_none()
    }
}

impl<G: QueryableGraph> AsteroidalTriples for G {}

#[cfg(test)]
mod tests {
    use crate::{algorithm::*, graph::*};
    use quickcheck_macros::quickcheck;

    #[test]
    fn small_cases() {
        assert!(Graph::new(0).is_at_free());
        assert!(Graph::path(5).is_at_free());
        assert!(Graph::cycle(5).is_at_free());
        assert!(!Graph::cycle(6).is_at_free());
        assert!(Graph::new(3).is_at_free());
        // subdividing every edge of a claw
        let long_claw = Graph::from_edges(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        assert_eq!(long_claw.find_asteroidal_triple(), Some([2, 4, 6]));
        let p7 = Graph::path(7);
        assert!(p7.is_at_free());
    }

    #[quickcheck]
    fn triple_is_asteroidal(g: Graph) -> bool {
        let Some([a, b, c]) = g.find_asteroidal_triple() else {
            return true;
        };
        let path_avoiding = |x: usize, y: usize, z: usize| {
            let allowed = g.vertices() - g.closed_neighbors(z);
            let mut reached = VertexSet::singleton(x);
            loop {
                let next = reached
                    .iter()
                    .fold(reached, |acc, u| acc | (g.neighbors(u) & allowed));
                if next == reached {
                    return reached.contains(y);
                }
                reached = next;
            }
        };
        !g.has_edge(a, b)
            && !g.has_edge(a, c)
            && !g.has_edge(b, c)
            && path_avoiding(a, b, c)
            && path_avoiding(a, c, b)
            && path_avoiding(b, c, a)
    }

    #[quickcheck]
    fn long_holes_have_asteroidal_triples(g: Graph) -> bool {
        let long_hole = (6..=g.n()).any(|k| g.has_induced(&Graph::cycle(k)));
        !long_hole || !g.is_at_free()
    }
}
