//! Numeric graph invariants.
use crate::{algorithm::*, graph::*};

pub trait Invariants
where
    Self: QueryableGraph + Sized,
{
    /// Calls `f` on every maximal clique exactly once.
    ///
    /// Bron–Kerbosch with pivoting: the pivot is the candidate or excluded vertex
    /// with the most neighbors among the candidates.
    /// The empty graph has one maximal clique, the empty set.
    fn maximal_cliques<F>(&self, mut f: F)
    where
        F: FnMut(VertexSet),
    {
        extend_clique(self, VertexSet::EMPTY, self.vertices(), VertexSet::EMPTY, &mut f);
    }

    /// Order of a largest clique.
    fn clique_number(&self) -> usize {
        let mut omega = 0;
        self.maximal_cliques(|clique| omega = omega.max(clique.len()));
        omega
    }

    /// Whether the vertices can be colored with `k` colors so that adjacent
    /// vertices get different colors.
    ///
    /// Up to 2 colors this is a direct check. Otherwise every vertex keeps a set
    /// of possible colors; the search always branches on an uncolored vertex with
    /// the fewest options, and an unused color is only ever tried once.
    fn k_colorable(&self, k: usize) -> bool {
        let n = self.n();
        match k {
            0 => return n == 0,
            1 => return self.m() == 0,
            2 => return self.is_bipartite(),
            _ if n <= k => return true,
            _ => {}
        }
        let mut options = vec![VertexSet::range(k); n];
        options[0] = VertexSet::singleton(0);
        for u in self.neighbors(0) {
            options[u].remove(0);
        }
        color_extend(self, &options, self.vertices() - 0, VertexSet::range(k) - 0)
    }

    /// The least `k` for which the graph is `k`-colorable.
    fn coloring_number(&self) -> usize {
        let mut k = 0;
        loop {
            let colorable = self.k_colorable(k);
            tracing::trace!(k, colorable, "tried coloring");
            if colorable {
                return k;
            }
            k += 1;
        }
    }

    /// Same as [Invariants::coloring_number].
    fn chromatic_number(&self) -> usize {
        self.coloring_number()
    }

    /// Greatest distance from `u` to another vertex, or `None` if some vertex is unreachable.
    fn eccentricity(&self, u: usize) -> Option<usize> {
        let mut seen = VertexSet::singleton(u);
        let mut layer = seen;
        let mut d = 0;
        loop {
            let next = layer
                .iter()
                .fold(VertexSet::EMPTY, |acc, v| acc | self.neighbors(v))
                - seen;
            if next.is_empty() {
                break;
            }
            seen |= next;
            layer = next;
            d += 1;
        }
        if seen == self.vertices() {
            Some(d)
        } else {
            None
        }
    }

    /// Greatest eccentricity; `None` for disconnected graphs and 0 for the empty graph.
    fn diameter(&self) -> Option<usize> {
        let mut res = 0;
        for u in self.vertices() {
            res = res.max(self.eccentricity(u)?);
        }
        Some(res)
    }

    /// Least eccentricity; `None` for disconnected graphs and 0 for the empty graph.
    fn radius(&self) -> Option<usize> {
        let mut res: Option<usize> = None;
        for u in self.vertices() {
            let e = self.eccentricity(u)?;
            res = Some(res.map_or(e, |r| r.min(e)));
        }
        Some(res.unwrap_or(0))
    }

    /// Coefficients of the independence polynomial: entry `i` is the number of
    /// independent sets of size `i`.
    fn independence_polynomial(&self) -> Vec<u64> {
        let mut count = vec![0; self.n() + 1];
        count[0] = 1;
        count_independent_sets(self, 0, self.vertices(), &mut count);
        count
    }

    /// Order of a largest independent set.
    fn independence_number(&self) -> usize {
        let p = self.independence_polynomial();
        p.iter().rposition(|&c| c > 0).unwrap_or(0)
    }
}

impl<G: QueryableGraph> Invariants for G {}

fn extend_clique<G, F>(g: &G, r: VertexSet, p: VertexSet, x: VertexSet, f: &mut F)
where
    G: QueryableGraph,
    F: FnMut(VertexSet),
{
    let pivot = (p | x).iter().max_by_key(|&u| {
        // ties to the lowest vertex
        ((p & g.neighbors(u)).len(), std::cmp::Reverse(u))
    });
    let Some(pivot) = pivot else {
        f(r);
        return;
    };
    let mut p = p;
    let mut x = x;
    for v in p - g.neighbors(pivot) {
        let nv = g.neighbors(v);
        extend_clique(g, r + v, p & nv, x & nv, f);
        p.remove(v);
        x.insert(v);
    }
}

fn color_extend<G>(g: &G, options: &[VertexSet], uncolored: VertexSet, fresh: VertexSet) -> bool
where
    G: QueryableGraph,
{
    let Some(v) = uncolored.iter().min_by_key(|&u| options[u].len()) else {
        return true;
    };
    let mut candidates = options[v] - fresh;
    if let Some(c) = VertexSet::min(&(options[v] & fresh)) {
        candidates.insert(c);
    }
    'colors: for c in candidates {
        let mut next = options.to_vec();
        next[v] = VertexSet::singleton(c);
        for u in g.neighbors(v) & uncolored {
            next[u].discard(c);
            if next[u].is_empty() {
                continue 'colors;
            }
        }
        if color_extend(g, &next, uncolored - v, fresh - c) {
            return true;
        }
    }
    false
}

fn count_independent_sets<G>(g: &G, size: usize, ext: VertexSet, count: &mut [u64])
where
    G: QueryableGraph,
{
    let mut ext = ext;
    let Some(u) = ext.pop() else {
        return;
    };
    count[size + 1] += 1;
    count_independent_sets(g, size + 1, ext - g.neighbors(u), count);
    count_independent_sets(g, size, ext, count);
}

#[cfg(test)]
mod tests {
    use crate::{algorithm::*, graph::*};
    use quickcheck_macros::quickcheck;

    #[test]
    fn triangle() {
        let k3 = Graph::complete(3);
        assert_eq!(k3.clique_number(), 3);
        assert_eq!(k3.coloring_number(), 3);
        assert_eq!(k3.diameter(), Some(1));
        assert_eq!(k3.independence_polynomial(), vec![1, 3, 0, 0]);
    }

    #[test]
    fn five_cycle() {
        let c5 = Graph::cycle(5);
        assert_eq!(c5.chromatic_number(), 3);
        assert_eq!(c5.clique_number(), 2);
        assert_eq!(c5.diameter(), Some(2));
        assert_eq!(c5.radius(), Some(2));
        assert_eq!(c5.independence_polynomial(), vec![1, 5, 5, 0, 0, 0]);
        assert_eq!(c5.independence_number(), 2);
    }

    #[test]
    fn degenerate_sizes() {
        let empty = Graph::new(0);
        assert_eq!(empty.clique_number(), 0);
        assert_eq!(empty.coloring_number(), 0);
        assert_eq!(empty.diameter(), Some(0));
        assert_eq!(empty.radius(), Some(0));
        assert_eq!(empty.independence_polynomial(), vec![1]);
        let k1 = Graph::new(1);
        assert_eq!(k1.coloring_number(), 1);
        assert_eq!(k1.diameter(), Some(0));
        let two = Graph::new(2);
        assert_eq!(two.diameter(), None);
        assert_eq!(two.radius(), None);
        assert_eq!(two.coloring_number(), 1);
    }

    #[test]
    fn colorings() {
        assert!(Graph::complete(5).k_colorable(5));
        assert!(!Graph::complete(5).k_colorable(4));
        // the Grötzsch graph is triangle-free with chromatic number 4
        let mut groetzsch = Graph::cycle(5);
        for u in 0..5 {
            let v = groetzsch.add_vertex();
            groetzsch.add_edge(v, (u + 1) % 5);
            groetzsch.add_edge(v, (u + 4) % 5);
        }
        let hub = groetzsch.add_vertex();
        for v in 5..10 {
            groetzsch.add_edge(hub, v);
        }
        assert_eq!(groetzsch.clique_number(), 2);
        assert_eq!(groetzsch.chromatic_number(), 4);
        let wheel = {
            let mut g = Graph::cycle(5);
            let hub = g.add_vertex();
            for u in 0..5 {
                g.add_edge(hub, u);
            }
            g
        };
        assert_eq!(wheel.chromatic_number(), 4);
        assert_eq!(Graph::path(3).radius(), Some(1));
        assert_eq!(Graph::path(3).diameter(), Some(2));
    }

    fn colorable_by_brute_force(g: &Graph, k: usize) -> bool {
        fn assign(g: &Graph, k: usize, colors: &mut Vec<usize>) -> bool {
            let v = colors.len();
            if v == g.n() {
                return true;
            }
            for c in 0..k {
                if g.neighbors(v).below(v).iter().all(|u| colors[u] != c) {
                    colors.push(c);
                    if assign(g, k, colors) {
                        return true;
                    }
                    colors.pop();
                }
            }
            false
        }
        assign(g, k, &mut vec![])
    }

    #[quickcheck]
    fn coloring_matches_brute_force(g: Graph) -> bool {
        (0..=4).all(|k| g.k_colorable(k) == colorable_by_brute_force(&g, k))
    }

    #[quickcheck]
    fn maximal_cliques_are_maximal(g: Graph) -> bool {
        let mut cliques = vec![];
        g.maximal_cliques(|c| cliques.push(c));
        let distinct: std::collections::BTreeSet<_> = cliques.iter().collect();
        let by_subsets = g
            .vertices()
            .subsets()
            .filter(|&s| s.iter().all(|u| s.is_subset(g.closed_neighbors(u))))
            .filter(|&s| {
                (g.vertices() - s)
                    .iter()
                    .all(|v| !s.is_subset(g.neighbors(v)))
            })
            .count();
        distinct.len() == cliques.len() && cliques.len() == by_subsets
    }

    #[quickcheck]
    fn clique_number_is_independence_number_of_complement(g: Graph) -> bool {
        g.clique_number() == g.complement().independence_number()
    }

    #[quickcheck]
    fn independent_sets_by_subsets(g: Graph) -> bool {
        let mut by_size = vec![0u64; g.n() + 1];
        for s in g.vertices().subsets() {
            if s.iter().all(|u| (g.neighbors(u) & s).is_empty()) {
                by_size[s.len()] += 1;
            }
        }
        g.independence_polynomial() == by_size
    }
}
