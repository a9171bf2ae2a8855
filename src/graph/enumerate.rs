use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Generates every unlabeled graph of a given order exactly once.
///
/// Graphs of order $k$ are obtained by adding one vertex, with every possible
/// neighborhood, to each graph of order $k-1$; duplicates are removed by
/// [Graph::canonical]. This is a reference enumerator for small orders, used to
/// run properties exhaustively. It is far slower than dedicated generators.
///
/// ```rust
/// use tinygraph::graph::*;
///
/// assert_eq!(Enumeration::new(4).count(), 11);
/// assert_eq!(Enumeration::new(4).connected_only().count(), 6);
/// ```
pub struct Enumeration<'a> {
    n: usize,
    connected_only: bool,
    prune: Option<&'a dyn Fn(&Graph) -> bool>,
}

impl<'a> Enumeration<'a> {
    pub fn new(n: usize) -> Self {
        assert!(n <= MAX_VERTICES, "{n} vertices exceed the maximum of {MAX_VERTICES}");
        Self {
            n,
            connected_only: false,
            prune: None,
        }
    }

    /// Only reports connected graphs of the final order.
    pub fn connected_only(mut self) -> Self {
        self.connected_only = true;
        self
    }

    /// Skips every graph for which `prune` returns true, along with all graphs
    /// built from it by adding vertices.
    ///
    /// `prune` sees graphs of every order up to the final one. When it is the
    /// negation of a hereditary property, exactly the graphs with that property
    /// are reported.
    pub fn prune_with(mut self, prune: &'a dyn Fn(&Graph) -> bool) -> Self {
        self.prune = Some(prune);
        self
    }

    /// Calls `f` on the canonical form of every reported graph,
    /// in ascending structural order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Graph),
    {
        let mut level = vec![Graph::new(0)];
        level.retain(|g| !self.pruned(g));
        for k in 1..=self.n {
            let mut next = HashSet::with_hasher(RandomState::new());
            for g in level.iter() {
                for nb in g.vertices().subsets() {
                    let mut h = g.clone();
                    let v = h.add_vertex();
                    for u in nb {
                        h.add_edge(u, v);
                    }
                    let h = h.canonical();
                    if next.contains(&h) || self.pruned(&h) {
                        continue;
                    }
                    next.insert(h);
                }
            }
            level = next.into_iter().collect();
            level.sort_unstable();
            tracing::debug!(order = k, graphs = level.len(), "enumerated order");
        }
        for g in level.iter() {
            if !self.connected_only || g.is_connected() {
                f(g);
            }
        }
    }

    pub fn collect(&self) -> Vec<Graph> {
        let mut res = vec![];
        self.for_each(|g| res.push(g.clone()));
        res
    }

    pub fn count(&self) -> usize {
        let mut res = 0;
        self.for_each(|_| res += 1);
        res
    }

    fn pruned(&self, g: &Graph) -> bool {
        self.prune.map_or(false, |p| p(g))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    /// OEIS A000088 and A001349.
    #[test]
    fn counts_up_to_order_6() {
        let all = [1, 1, 2, 4, 11, 34, 156];
        let connected = [1, 1, 1, 2, 6, 21, 112];
        for n in 0..=6 {
            assert_eq!(Enumeration::new(n).count(), all[n], "n = {n}");
            assert_eq!(
                Enumeration::new(n).connected_only().count(),
                connected[n],
                "n = {n}"
            );
        }
    }

    #[test]
    fn graphs_are_pairwise_non_isomorphic() {
        let gs = Enumeration::new(5).collect();
        for (i, g) in gs.iter().enumerate() {
            assert_eq!(*g, g.canonical());
            for h in gs[i + 1..].iter() {
                assert!(!g.is_isomorphic(h));
            }
        }
    }

    #[test]
    fn pruning_keeps_hereditary_classes() {
        // Triangle-free graphs: 1, 1, 2, 3, 7, 14, 38.
        let has_triangle = |g: &Graph| {
            g.iter_edges()
                .any(|e| !(g.neighbors(e.source) & g.neighbors(e.sink)).is_empty())
        };
        let counts: Vec<_> = (0..=6)
            .map(|n| Enumeration::new(n).prune_with(&has_triangle).count())
            .collect();
        assert_eq!(counts, vec![1, 1, 2, 3, 7, 14, 38]);
        let everything = |_: &Graph| true;
        assert_eq!(Enumeration::new(3).prune_with(&everything).count(), 0);
    }
}
