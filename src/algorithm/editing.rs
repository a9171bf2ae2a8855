//! Edge editing towards $P_5$-free graphs.
use crate::{algorithm::*, graph::*};

pub trait P5Editing
where
    Self: QueryableGraph + Sized,
{
    /// Union of the vertex sets of all induced $P_5$s.
    fn vertices_in_p5s(&self) -> VertexSet {
        let mut res = VertexSet::EMPTY;
        self.visit_induced_p5s(&mut |p| {
            res |= p.into_iter().collect::<VertexSet>();
            true
        });
        res
    }

    /// A shortest list of vertex pairs whose toggling leaves no induced $P_5$.
    ///
    /// Iterative deepening on the budget `k`. Every induced $P_5$ has to be hit
    /// by some edit, so each level branches on the 10 pairs inside one of them.
    fn p5_editing(&self) -> Vec<Edge> {
        let mut g = self.to_graph();
        let mut k = 0;
        loop {
            if let Some(mut edits) = edit_within(&mut g, k) {
                edits.sort();
                tracing::debug!(k, "found P5-free editing");
                return edits;
            }
            tracing::debug!(k, "no P5-free editing within budget");
            k += 1;
        }
    }

    /// Minimum number of edge toggles leaving no induced $P_5$.
    fn p5_editing_distance(&self) -> usize {
        self.p5_editing().len()
    }
}

impl<G: QueryableGraph> P5Editing for G {}

fn edit_within(g: &mut Graph, k: usize) -> Option<Vec<Edge>> {
    let Some(p5) = g.find_induced_p5() else {
        return Some(vec![]);
    };
    if k == 0 {
        return None;
    }
    let p5: VertexSet = p5.into_iter().collect();
    for pair in p5.combinations(2) {
        let mut pair = pair;
        let (Some(u), Some(v)) = (pair.pop(), pair.pop()) else {
            continue;
        };
        g.toggle_edge(u, v);
        let edits = edit_within(g, k - 1);
        g.toggle_edge(u, v);
        if let Some(mut edits) = edits {
            edits.push(Edge::new(u, v));
            return Some(edits);
        }
    }
    None
}
