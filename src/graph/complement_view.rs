use crate::graph::*;

/// The complement of another graph, computed on the fly.
///
/// No adjacency is copied: each neighbor query flips the lower graph's neighbor set.
pub struct ComplementView<'a, G> {
    lower_graph: &'a G,
}

impl<'a, G> ComplementView<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(lower_graph: &'a G) -> Self {
        Self { lower_graph }
    }
}

impl<'a, G> QueryableGraph for ComplementView<'a, G>
where
    G: QueryableGraph,
{
    fn n(&self) -> usize {
        self.lower_graph.n()
    }

    fn neighbors(&self, u: usize) -> VertexSet {
        self.lower_graph.vertices() - self.lower_graph.neighbors(u) - u
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn view_agrees_with_complement(g: Graph) -> bool {
        ComplementView::new(&g).to_graph() == g.complement()
    }

    #[test]
    fn complement_of_c5_is_c5() {
        let c5 = Graph::cycle(5);
        let view = ComplementView::new(&c5);
        assert_eq!(view.m(), 5);
        assert!((0..5).all(|u| view.deg(u) == 2));
        assert!(view.is_connected());
    }
}
