use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

pub trait Chordality
where
    Self: QueryableGraph + Sized,
{
    /// Whether every cycle of length at least 4 has a chord.
    fn is_chordal(&self) -> bool {
        self.perfect_elimination_order().is_some()
    }

    /// An order in which every vertex is simplicial among the vertices after it,
    /// or `None` if the graph is not chordal.
    ///
    /// Vertices are numbered by maximum cardinality search: the next vertex is the
    /// one with the most numbered neighbors, ties going to the lowest vertex.
    /// Right after numbering a vertex, its numbered neighbors must form a clique.
    /// The numbering reversed is the elimination order.
    fn perfect_elimination_order(&self) -> Option<Vec<usize>> {
        let mut queue: KeyedPriorityQueue<usize, (usize, Reverse<usize>), RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.n(), RandomState::new());
        for u in self.vertices() {
            queue.push(u, (0, Reverse(u)));
        }
        let mut numbered = VertexSet::EMPTY;
        let mut order = Vec::with_capacity(self.n());
        while let Some((v, _)) = queue.pop() {
            let maybe_clique = self.neighbors(v) & numbered;
            if maybe_clique
                .iter()
                .any(|u| !maybe_clique.is_subset(self.closed_neighbors(u)))
            {
                return None;
            }
            numbered.insert(v);
            order.push(v);
            for u in self.neighbors(v) - numbered {
                if let Some(&(count, tie)) = queue.get_priority(&u) {
                    let _ = queue.set_priority(&u, (count + 1, tie));
                }
            }
        }
        order.reverse();
        Some(order)
    }
}

impl<G: QueryableGraph> Chordality for G {}

#[cfg(test)]
mod tests {
    use crate::{algorithm::*, graph::*};
    use quickcheck_macros::quickcheck;

    #[test]
    fn boundary_cases() {
        assert!(!Graph::cycle(4).is_chordal());
        assert!(Graph::complete(4).is_chordal());
        assert!(Graph::new(0).is_chordal());
        assert!(Graph::complete(3).is_chordal());
        assert!(!Graph::cycle(5).is_chordal());
        assert!(Graph::path(7).is_chordal());
        let mut c4 = Graph::cycle(4);
        c4.add_edge(0, 2);
        assert!(c4.is_chordal());
    }

    #[test]
    fn search_starts_at_lowest_vertex() {
        let order = Graph::path(4).perfect_elimination_order().unwrap();
        assert_eq!(order, vec![3, 2, 1, 0]);
        let order = Graph::new(3).perfect_elimination_order().unwrap();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[quickcheck]
    fn chordal_iff_no_long_induced_cycle(g: Graph) -> bool {
        let has_hole = (4..=g.n()).any(|k| g.has_induced(&Graph::cycle(k)));
        g.is_chordal() == !has_hole
    }

    #[quickcheck]
    fn elimination_order_is_perfect(g: Graph) -> bool {
        match g.perfect_elimination_order() {
            None => true,
            Some(order) => {
                let mut later = g.vertices();
                order.iter().all(|&v| {
                    later.remove(v);
                    let nbs = g.neighbors(v) & later;
                    nbs.iter().all(|u| nbs.is_subset(g.closed_neighbors(u)))
                })
            }
        }
    }
}
