use crate::graph::*;

/// Detection of holes, i.e. induced cycles of length at least 5.
///
/// For every vertex `c` taken as the lowest vertex of the hole and every pair of
/// non-adjacent neighbors `a < b` of `c`, induced paths are grown from `a` and
/// from `b` in turns, the left side first. Every interior vertex of the two paths
/// excludes its closed neighborhood from further extension.
/// An extension adjacent to the opposite end closes a cycle: after a right step
/// its length is odd, after a left step it is even.
pub trait Holes
where
    Self: QueryableGraph + Sized,
{
    /// Whether some induced cycle has odd length at least 5.
    fn has_odd_hole(&self) -> bool {
        HoleSearch::new(self, HoleKind::Odd).run()
    }

    /// Whether some induced cycle has length at least 5.
    fn has_long_hole(&self) -> bool {
        HoleSearch::new(self, HoleKind::Long).run()
    }

    /// Whether the complement has an odd hole.
    fn has_odd_antihole(&self) -> bool {
        ComplementView::new(self).has_odd_hole()
    }
}

impl<G: QueryableGraph> Holes for G {}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HoleKind {
    Odd,
    Long,
}

struct HoleSearch<'a, G> {
    graph: &'a G,
    kind: HoleKind,
    allowed: VertexSet,
}

impl<'a, G> HoleSearch<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, kind: HoleKind) -> Self {
        Self {
            graph,
            kind,
            allowed: VertexSet::EMPTY,
        }
    }

    fn run(&mut self) -> bool {
        for c in self.graph.vertices() {
            self.allowed = self.graph.vertices().above(c);
            let nc = self.graph.neighbors(c) & self.allowed;
            let blocked = self.graph.closed_neighbors(c);
            for a in nc {
                for b in (nc - self.graph.neighbors(a)).above(a) {
                    if self.extend_left(a, b, 1, blocked) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// `x` and `y` end the two paths, the right one having `r` vertices;
    /// the left one has as many.
    fn extend_left(&self, x: usize, y: usize, r: usize, blocked: VertexSet) -> bool {
        for x2 in self.graph.neighbors(x) & self.allowed - blocked {
            if self.graph.has_edge(x2, y) {
                // a cycle on 2r + 2 vertices
                if self.kind == HoleKind::Long && r >= 2 {
                    return true;
                }
                continue;
            }
            if self.extend_right(x2, y, r, blocked | self.graph.closed_neighbors(x)) {
                return true;
            }
        }
        false
    }

    /// The left path has one vertex more than the `r` of the right one.
    fn extend_right(&self, x: usize, y: usize, r: usize, blocked: VertexSet) -> bool {
        for y2 in self.graph.neighbors(y) & self.allowed - blocked {
            if self.graph.has_edge(y2, x) {
                // a cycle on 2r + 3 >= 5 vertices
                return true;
            }
            if self.extend_left(x, y2, r + 1, blocked | self.graph.closed_neighbors(y)) {
                return true;
            }
        }
        false
    }
}
