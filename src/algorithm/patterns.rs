//! Hand-specialized tests and counters for common small patterns.
//!
//! Every routine here agrees with the general [PatternMatch] engine on every graph;
//! they only trade generality for whole-neighborhood set operations.
use crate::{algorithm::*, graph::*, Result};
use ahash::RandomState;
use std::collections::HashMap;

pub trait SmallPatterns
where
    Self: QueryableGraph + Sized,
{
    fn has_induced_p3(&self) -> bool {
        self.vertices().iter().any(|u| {
            let nu = self.neighbors(u);
            nu.iter().any(|v| !(nu - self.closed_neighbors(v)).is_empty())
        })
    }

    fn count_induced_p3s(&self) -> u64 {
        let mut count = 0;
        for u in self.vertices() {
            let nu = self.neighbors(u);
            for v in nu {
                count += (nu - self.neighbors(v)).above(v).len() as u64;
            }
        }
        count
    }

    fn has_k3(&self) -> bool {
        self.vertices().iter().any(|u| {
            let nu = self.neighbors(u);
            nu.above(u)
                .iter()
                .any(|v| !(nu & self.neighbors(v)).is_empty())
        })
    }

    fn has_k4(&self) -> bool {
        for u in self.vertices() {
            let nu = self.neighbors(u);
            for v in nu.above(u) {
                let common = nu & self.neighbors(v);
                for w in common.above(v) {
                    if !(common & self.neighbors(w)).is_empty() {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn has_induced_claw(&self) -> bool {
        self.count_induced_claws_until(1) > 0
    }

    fn count_induced_claws(&self) -> u64 {
        self.count_induced_claws_until(u64::MAX)
    }

    #[doc(hidden)]
    fn count_induced_claws_until(&self, limit: u64) -> u64 {
        let mut count = 0;
        for u in self.vertices() {
            let nu = self.neighbors(u);
            for v in nu {
                let rest = nu - self.neighbors(v);
                for w in rest.above(v) {
                    count += (rest - self.neighbors(w)).above(w).len() as u64;
                    if count >= limit {
                        return count;
                    }
                }
            }
        }
        count
    }

    fn has_induced_paw(&self) -> bool {
        self.count_induced_paws_until(1) > 0
    }

    fn count_induced_paws(&self) -> u64 {
        self.count_induced_paws_until(u64::MAX)
    }

    #[doc(hidden)]
    fn count_induced_paws_until(&self, limit: u64) -> u64 {
        let mut count = 0;
        // u is the vertex of degree 3, v and w the rest of the triangle
        for u in self.vertices() {
            let nu = self.neighbors(u);
            for v in nu {
                let nv = self.neighbors(v);
                for w in (nu & nv).above(v) {
                    count += (nu - nv - self.neighbors(w)).len() as u64;
                    if count >= limit {
                        return count;
                    }
                }
            }
        }
        count
    }

    /// Whether a 4-cycle appears as a subgraph, chords allowed.
    fn has_c4(&self) -> bool {
        self.vertices().iter().any(|u| {
            self.vertices()
                .above(u)
                .iter()
                .any(|v| (self.neighbors(u) & self.neighbors(v)).len() >= 2)
        })
    }

    fn has_induced_c4(&self) -> bool {
        self.count_induced_c4s_until(1) > 0
    }

    fn count_induced_c4s(&self) -> u64 {
        self.count_induced_c4s_until(u64::MAX)
    }

    // every induced 4-cycle is seen once from each diagonal
    #[doc(hidden)]
    fn count_induced_c4s_until(&self, limit: u64) -> u64 {
        let mut count = 0;
        for u in self.vertices() {
            for v in (self.vertices() - self.neighbors(u)).above(u) {
                let common = self.neighbors(u) & self.neighbors(v);
                for w in common {
                    count += (common - self.neighbors(w)).above(w).len() as u64;
                    if count >= limit.saturating_mul(2) {
                        return count / 2;
                    }
                }
            }
        }
        debug_assert_eq!(count % 2, 0);
        count / 2
    }

    fn has_induced_diamond(&self) -> bool {
        // u, v are the two vertices of degree 3
        for u in self.vertices() {
            for v in self.neighbors(u).above(u) {
                let common = self.neighbors(u) & self.neighbors(v);
                if common
                    .iter()
                    .any(|w| !(common - self.neighbors(w) - w).is_empty())
                {
                    return true;
                }
            }
        }
        false
    }

    fn has_induced_p4(&self) -> bool {
        self.count_induced_p4s_until(1) > 0
    }

    fn count_induced_p4s(&self) -> u64 {
        self.count_induced_p4s_until(u64::MAX)
    }

    #[doc(hidden)]
    fn count_induced_p4s_until(&self, limit: u64) -> u64 {
        let mut count = 0;
        // a - b - c - d with b < c
        for b in self.vertices() {
            for c in self.neighbors(b).above(b) {
                let only_b = self.neighbors(b) - self.closed_neighbors(c);
                let only_c = self.neighbors(c) - self.closed_neighbors(b);
                for a in only_b {
                    count += (only_c - self.neighbors(a)).len() as u64;
                    if count >= limit {
                        return count;
                    }
                }
            }
        }
        count
    }

    /// One induced $P_5$ as its vertices in path order.
    fn find_induced_p5(&self) -> Option<[usize; 5]> {
        let mut found = None;
        self.visit_induced_p5s(&mut |p| {
            found = Some(p);
            false
        });
        found
    }

    fn has_induced_p5(&self) -> bool {
        self.find_induced_p5().is_some()
    }

    fn count_induced_p5s(&self) -> u64 {
        let mut count = 0;
        self.visit_induced_p5s(&mut |_| {
            count += 1;
            true
        });
        count
    }

    /// Calls `visit` on every induced $P_5$ `u - v - w - x - y` once, until it returns false.
    #[doc(hidden)]
    fn visit_induced_p5s(&self, visit: &mut dyn FnMut([usize; 5]) -> bool) {
        for w in self.vertices() {
            let nw = self.neighbors(w);
            for v in nw {
                let nv = self.neighbors(v);
                for x in (nw - nv).above(v) {
                    let nx = self.neighbors(x);
                    for u in nv - nw - nx {
                        let nu = self.neighbors(u);
                        for y in nx - nw - nv - nu {
                            if !visit([u, v, w, x, y]) {
                                return;
                            }
                        }
                    }
                }
            }
        }
    }

    fn has_induced_c5(&self) -> bool {
        // u - v - x - y - w - u
        for u in self.vertices() {
            let nu = self.neighbors(u);
            let far = self.vertices() - self.closed_neighbors(u);
            for v in nu {
                let nv = self.neighbors(v);
                for w in (nu - nv).above(v) {
                    let nw = self.neighbors(w);
                    for x in nv & far - nw {
                        if !(nw & far & self.neighbors(x) - nv).is_empty() {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    fn has_induced_fork(&self) -> bool {
        // c has the leaves a, b and the neighbor d, which has the leaf e
        for c in self.vertices() {
            for d in self.neighbors(c) {
                for e in self.neighbors(d) - self.closed_neighbors(c) {
                    let leaves = self.neighbors(c) - self.closed_neighbors(d) - self.neighbors(e);
                    if leaves
                        .iter()
                        .any(|a| !(leaves - self.closed_neighbors(a)).is_empty())
                    {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// The house is the complement of $P_5$.
    fn has_induced_house(&self) -> bool {
        ComplementView::new(self).has_induced_p5()
    }

    fn has_induced_bull(&self) -> bool {
        // triangle a, b, c with the horns d at a and e at b
        for a in self.vertices() {
            for b in self.neighbors(a).above(a) {
                let only_a = self.neighbors(a) - self.closed_neighbors(b);
                let only_b = self.neighbors(b) - self.closed_neighbors(a);
                for c in self.neighbors(a) & self.neighbors(b) {
                    let nc = self.neighbors(c);
                    for d in only_a - nc {
                        if !(only_b - nc - self.neighbors(d)).is_empty() {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Number of induced cycles of every length from 3 on.
    fn count_induced_cycles(&self) -> u64 {
        let mut count = 0;
        for c in self.vertices() {
            let mut search = CycleSearch {
                graph: self,
                start: c,
                allowed: self.vertices().above(c),
                count: 0,
            };
            search.extend(c, VertexSet::singleton(c), VertexSet::EMPTY, 1);
            count += search.count;
        }
        debug_assert_eq!(count % 2, 0);
        count / 2
    }
}

impl<G: QueryableGraph> SmallPatterns for G {}

/// Induced paths starting at the lowest vertex of the cycles being counted.
/// Every cycle is found once in each direction.
struct CycleSearch<'a, G> {
    graph: &'a G,
    start: usize,
    allowed: VertexSet,
    count: u64,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: QueryableGraph,
{
    fn extend(&mut self, last: usize, path: VertexSet, blocked: VertexSet, len: usize) {
        let blocked_next = if len > 1 {
            blocked | self.graph.closed_neighbors(last)
        } else {
            blocked
        };
        for x in self.graph.neighbors(last) & self.allowed - blocked - path {
            if len >= 2 && self.graph.has_edge(x, self.start) {
                self.count += 1;
            } else {
                self.extend(x, path + x, blocked_next, len + 1);
            }
        }
    }
}

type HasTest = fn(&Graph) -> bool;
type CountTest = fn(&Graph) -> u64;

/// Picks the fastest available test or counter for a pattern.
///
/// Patterns isomorphic to one with a specialized routine in [SmallPatterns]
/// get that routine; everything else goes through the general [PatternMatch] engine.
/// Induced and non-induced containment are looked up in separate tables.
pub struct PatternTests {
    has: HashMap<Graph, HasTest, RandomState>,
    count: HashMap<Graph, CountTest, RandomState>,
    subgraph: HashMap<Graph, HasTest, RandomState>,
}

impl PatternTests {
    pub fn new(registry: &NamedGraphs) -> Result<Self> {
        let has_tests: [(&str, HasTest); 13] = [
            ("P3", Graph::has_induced_p3),
            ("K3", Graph::has_k3),
            ("K4", Graph::has_k4),
            ("claw", Graph::has_induced_claw),
            ("paw", Graph::has_induced_paw),
            ("C4", Graph::has_induced_c4),
            ("diamond", Graph::has_induced_diamond),
            ("P4", Graph::has_induced_p4),
            ("P5", Graph::has_induced_p5),
            ("C5", Graph::has_induced_c5),
            ("fork", Graph::has_induced_fork),
            ("house", Graph::has_induced_house),
            ("bull", Graph::has_induced_bull),
        ];
        let count_tests: [(&str, CountTest); 6] = [
            ("P3", Graph::count_induced_p3s),
            ("P4", Graph::count_induced_p4s),
            ("P5", Graph::count_induced_p5s),
            ("claw", Graph::count_induced_claws),
            ("paw", Graph::count_induced_paws),
            ("C4", Graph::count_induced_c4s),
        ];
        // chords allowed, so K3 and K4 serve both tables
        let subgraph_tests: [(&str, HasTest); 3] = [
            ("C4", Graph::has_c4),
            ("K3", Graph::has_k3),
            ("K4", Graph::has_k4),
        ];
        let mut has = HashMap::with_hasher(RandomState::new());
        for (name, test) in has_tests {
            has.insert(registry.get(name)?.canonical(), test);
        }
        let mut count = HashMap::with_hasher(RandomState::new());
        for (name, test) in count_tests {
            count.insert(registry.get(name)?.canonical(), test);
        }
        let mut subgraph = HashMap::with_hasher(RandomState::new());
        for (name, test) in subgraph_tests {
            subgraph.insert(registry.get(name)?.canonical(), test);
        }
        Ok(Self {
            has,
            count,
            subgraph,
        })
    }

    /// A predicate telling whether a graph contains `pattern` as an induced subgraph.
    pub fn has_induced_test(&self, pattern: &Graph) -> Box<dyn Fn(&Graph) -> bool> {
        if let Some(&test) = self.has.get(&pattern.canonical()) {
            return Box::new(test);
        }
        let pattern = pattern.clone();
        Box::new(move |g: &Graph| g.has_induced(&pattern))
    }

    /// A predicate telling whether a graph contains `pattern` as a subgraph,
    /// not necessarily induced.
    pub fn has_subgraph_test(&self, pattern: &Graph) -> Box<dyn Fn(&Graph) -> bool> {
        if let Some(&test) = self.subgraph.get(&pattern.canonical()) {
            return Box::new(test);
        }
        let pattern = pattern.clone();
        Box::new(move |g: &Graph| g.has_subgraph(&pattern))
    }

    /// A counter of the induced copies of `pattern` in a graph.
    pub fn count_induced_test(&self, pattern: &Graph) -> Box<dyn Fn(&Graph) -> u64> {
        if let Some(&test) = self.count.get(&pattern.canonical()) {
            return Box::new(test);
        }
        let pattern = pattern.clone();
        Box::new(move |g: &Graph| g.count_induced(&pattern))
    }

    /// Whether `pattern` has a specialized induced test.
    pub fn is_specialized(&self, pattern: &Graph) -> bool {
        self.has.contains_key(&pattern.canonical())
    }

    /// Whether `pattern` has a specialized non-induced test.
    pub fn is_specialized_subgraph(&self, pattern: &Graph) -> bool {
        self.subgraph.contains_key(&pattern.canonical())
    }
}

#[cfg(test)]
mod tests {
    use crate::{algorithm::*, graph::*};
    use quickcheck_macros::quickcheck;

    fn registry() -> NamedGraphs {
        NamedGraphs::new()
    }

    const HAS_NAMES: [&str; 13] = [
        "P3", "K3", "K4", "claw", "paw", "C4", "diamond", "P4", "P5", "C5", "fork", "house", "bull",
    ];
    const COUNT_NAMES: [&str; 6] = ["P3", "P4", "P5", "claw", "paw", "C4"];
    const SUBGRAPH_NAMES: [&str; 3] = ["C4", "K3", "K4"];

    fn patterns(reg: &NamedGraphs, names: &[&str]) -> Vec<Graph> {
        names.iter().map(|x| reg.get(x).unwrap()).collect()
    }

    fn check_has_tests(orders: std::ops::RangeInclusive<usize>) {
        let reg = registry();
        let tests = PatternTests::new(&reg).unwrap();
        let patterns = patterns(&reg, &HAS_NAMES);
        for p in patterns.iter() {
            assert!(tests.is_specialized(p));
        }
        for n in orders {
            Enumeration::new(n).for_each(|g| {
                for (name, p) in HAS_NAMES.iter().zip(patterns.iter()) {
                    assert_eq!(
                        tests.has_induced_test(p)(g),
                        g.has_induced(p),
                        "{name} in {g}"
                    );
                }
            });
        }
    }

    fn check_count_tests(orders: std::ops::RangeInclusive<usize>) {
        let reg = registry();
        let tests = PatternTests::new(&reg).unwrap();
        let patterns = patterns(&reg, &COUNT_NAMES);
        for n in orders {
            Enumeration::new(n).for_each(|g| {
                for p in patterns.iter() {
                    let count = tests.count_induced_test(p)(g);
                    assert_eq!(count, g.count_induced(p), "{p} in {g}");
                    assert_eq!(count > 0, tests.has_induced_test(p)(g));
                }
            });
        }
    }

    fn check_subgraph_tests(orders: std::ops::RangeInclusive<usize>) {
        let reg = registry();
        let tests = PatternTests::new(&reg).unwrap();
        let patterns = patterns(&reg, &SUBGRAPH_NAMES);
        for p in patterns.iter() {
            assert!(tests.is_specialized_subgraph(p));
        }
        for n in orders {
            Enumeration::new(n).for_each(|g| {
                for (name, p) in SUBGRAPH_NAMES.iter().zip(patterns.iter()) {
                    assert_eq!(
                        tests.has_subgraph_test(p)(g),
                        g.has_subgraph(p),
                        "{name} in {g}"
                    );
                }
            });
        }
    }

    #[test]
    fn specialized_tests_match_engine_exhaustively() {
        check_has_tests(0..=7);
    }

    #[test]
    fn specialized_counters_match_engine_exhaustively() {
        check_count_tests(0..=6);
    }

    #[test]
    fn specialized_subgraph_tests_match_engine_exhaustively() {
        check_subgraph_tests(0..=7);
    }

    // cargo test --release -- --ignored
    #[test]
    #[ignore]
    fn specialized_tests_match_engine_up_to_order_9() {
        check_has_tests(8..=9);
    }

    #[test]
    #[ignore]
    fn specialized_counters_match_engine_up_to_order_9() {
        check_count_tests(7..=9);
    }

    #[test]
    #[ignore]
    fn specialized_subgraph_tests_match_engine_up_to_order_9() {
        check_subgraph_tests(8..=9);
    }

    #[test]
    fn fallback_to_engine() {
        let reg = registry();
        let tests = PatternTests::new(&reg).unwrap();
        let gem = reg.get("gem").unwrap();
        assert!(!tests.is_specialized(&gem));
        assert!(!tests.is_specialized_subgraph(&Graph::cycle(5)));
        assert!(tests.has_subgraph_test(&Graph::cycle(5))(&Graph::complete(5)));
        assert!(!tests.has_subgraph_test(&Graph::cycle(5))(&Graph::complete_bipartite(2, 3)));
        let g = Graph::complete(5);
        assert!(!tests.has_induced_test(&gem)(&g));
        assert_eq!(tests.count_induced_test(&Graph::complete(3))(&g), 10);
    }

    #[test]
    fn small_cases() {
        let c5 = Graph::cycle(5);
        assert!(c5.has_induced_c5());
        assert!(!c5.has_k3());
        assert!(!c5.has_c4());
        assert_eq!(c5.count_induced_p3s(), 5);
        assert_eq!(c5.count_induced_p4s(), 5);
        assert_eq!(c5.count_induced_p5s(), 0);
        assert_eq!(Graph::path(6).count_induced_p5s(), 2);
        assert!(Graph::complete(4).has_k4());
        assert!(Graph::complete(4).has_c4());
        assert!(!Graph::complete(4).has_induced_c4());
        assert_eq!(Graph::complete_bipartite(2, 3).count_induced_c4s(), 3);
        assert_eq!(Graph::complete_bipartite(1, 4).count_induced_claws(), 4);
        let p = Graph::path(5).find_induced_p5().unwrap();
        assert!(p[0] == 0 || p[0] == 4);
        assert!(Graph::cycle(6).find_induced_p5().is_some());
        assert_eq!(Graph::cycle(5).find_induced_p5(), None);
    }

    #[test]
    fn induced_cycles() {
        assert_eq!(Graph::complete(4).count_induced_cycles(), 4);
        assert_eq!(Graph::cycle(7).count_induced_cycles(), 1);
        assert_eq!(Graph::complete_bipartite(2, 3).count_induced_cycles(), 3);
        assert_eq!(Graph::path(5).count_induced_cycles(), 0);
    }

    #[quickcheck]
    fn induced_cycles_match_engine(g: Graph) -> bool {
        let by_engine: u64 = (3..=g.n()).map(|k| g.count_induced(&Graph::cycle(k))).sum();
        g.count_induced_cycles() == by_engine
    }

    #[quickcheck]
    fn found_p5_is_induced(g: Graph) -> bool {
        match g.find_induced_p5() {
            None => !g.has_induced(&Graph::path(5)),
            Some(p) => {
                let s: VertexSet = p.iter().copied().collect();
                s.len() == 5 && (0..4).all(|i| g.has_edge(p[i], p[i + 1])) && g.subgraph(s).m() == 4
            }
        }
    }
}
