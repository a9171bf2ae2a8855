//! Membership tests for hereditary graph classes.
use crate::{algorithm::*, graph::*};

pub trait Classes
where
    Self: QueryableGraph + Sized,
{
    /// Whether the vertices split into a clique and an independent set.
    ///
    /// Decided on the degree sequence alone: with degrees $d_1 \ge \cdots \ge d_n$
    /// and $m$ the number of $i$ with $d_i \ge i - 1$, the graph is split iff
    /// $m(m-1) + \sum_{i>m} d_i - \sum_{i \le m} d_i = 0$.
    fn is_split(&self) -> bool {
        let mut degs: Vec<usize> = (0..self.n()).map(|u| self.deg(u)).collect();
        degs.sort_unstable_by(|a, b| b.cmp(a));
        let m = degs
            .iter()
            .enumerate()
            .take_while(|&(i, &d)| d >= i)
            .count();
        let head: usize = degs[..m].iter().sum();
        let tail: usize = degs[m..].iter().sum();
        m * m.saturating_sub(1) + tail == head
    }

    /// Whether neither the graph nor its complement has an odd hole.
    fn is_perfect(&self) -> bool {
        !self.has_odd_hole() && !self.has_odd_antihole()
    }

    /// $P_4$- and $C_4$-free.
    fn is_trivially_perfect(&self) -> bool {
        !self.has_induced_p4() && !self.has_induced_c4()
    }

    /// $P_4$-free.
    fn is_cograph(&self) -> bool {
        !self.has_induced_p4()
    }

    /// $P_4$-, $C_4$- and $2K_2$-free.
    fn is_threshold(&self) -> bool {
        self.is_trivially_perfect() && !ComplementView::new(self).has_induced_c4()
    }

    /// A disjoint union of cliques, i.e. $P_3$-free.
    fn is_cluster(&self) -> bool {
        !self.has_induced_p3()
    }

    /// The complement is a cluster graph.
    fn is_complete_multipartite(&self) -> bool {
        !ComplementView::new(self).has_induced_p3()
    }

    fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// One side of a bipartition, containing the lowest vertex of every component.
    fn bipartition(&self) -> Option<VertexSet> {
        let mut side = VertexSet::EMPTY;
        let mut unvisited = self.vertices();
        while let Some(root) = unvisited.pop() {
            let mut layer = VertexSet::singleton(root);
            let mut even = true;
            while !layer.is_empty() {
                if even {
                    side |= layer;
                }
                let next = layer
                    .iter()
                    .fold(VertexSet::EMPTY, |acc, v| acc | self.neighbors(v));
                if !(next & layer).is_empty() {
                    return None;
                }
                layer = next & unvisited;
                unvisited -= layer;
                even = !even;
            }
        }
        Some(side)
    }

    fn is_edgeless(&self) -> bool {
        self.m() == 0
    }

    fn is_claw_free(&self) -> bool {
        !self.has_induced_claw()
    }

    /// Whether the graph violates `property` while every graph obtained by
    /// deleting one vertex satisfies it.
    ///
    /// For a hereditary property these are exactly its minimal forbidden induced subgraphs.
    fn is_minimal_forbidden<P>(&self, property: P) -> bool
    where
        P: Fn(&Graph) -> bool,
    {
        let g = self.to_graph();
        if property(&g) {
            return false;
        }
        g.vertices().iter().all(|u| {
            let mut h = g.clone();
            h.delete_vertex(u);
            property(&h)
        })
    }
}

impl<G: QueryableGraph> Classes for G {}
