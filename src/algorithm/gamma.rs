//! Classes defined through Gallai's forcing relation $\Gamma$.
//!
//! Two arcs $(a, b)$ and $(a', b')$ force each other when they share their
//! source or their sink while the other two endpoints are nonadjacent, that is
//! when together they form an induced $P_3$. The classes of the transitive
//! closure are the implication classes.
use crate::{algorithm::*, graph::*};
use std::collections::VecDeque;

pub trait GammaClasses
where
    Self: QueryableGraph + Sized,
{
    /// Whether the edges can be oriented transitively.
    ///
    /// By Gallai's theorem this holds iff no implication class contains both
    /// orientations of an edge.
    fn is_comparability(&self) -> bool {
        let classes = ImplicationClasses::new(self);
        self.iter_edges()
            .all(|e| classes.class(e.source, e.sink) != classes.class(e.sink, e.source))
    }

    /// Whether the complement is a comparability graph.
    fn is_cocomparability(&self) -> bool {
        ComplementView::new(self).is_comparability()
    }

    /// Both a comparability and a cocomparability graph.
    fn is_permutation(&self) -> bool {
        self.is_comparability() && self.is_cocomparability()
    }

    /// Whether the edges can be colored with 2 colors so that the two edges of
    /// every induced $P_3$ get different colors.
    ///
    /// Colors are propagated along $\Gamma$ on unordered edges component by component.
    fn is_elementary(&self) -> bool {
        let n = self.n();
        let mut color: Vec<Option<bool>> = vec![None; n * n];
        for e in self.iter_edges() {
            if color[e.source * n + e.sink].is_some() {
                continue;
            }
            color[e.source * n + e.sink] = Some(false);
            let mut queue = VecDeque::from([(e.source, e.sink)]);
            while let Some((u, v)) = queue.pop_front() {
                let c = color[u * n + v];
                for (x, y) in forced_edges(self, u, v) {
                    let (x, y) = (x.min(y), x.max(y));
                    match color[x * n + y] {
                        None => {
                            color[x * n + y] = c.map(|c| !c);
                            queue.push_back((x, y));
                        }
                        Some(d) if Some(d) == c => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }
}

impl<G: QueryableGraph> GammaClasses for G {}

/// Pairs forced by `(u, v)`: the other edge of every induced $P_3$ through it.
fn forced_edges<G>(g: &G, u: usize, v: usize) -> impl Iterator<Item = (usize, usize)>
where
    G: QueryableGraph,
{
    let at_u = (g.neighbors(u) - g.closed_neighbors(v))
        .into_iter()
        .map(move |w| (u, w));
    let at_v = (g.neighbors(v) - g.closed_neighbors(u))
        .into_iter()
        .map(move |w| (w, v));
    at_u.chain(at_v)
}

/// Implication class of every arc, numbered in order of discovery.
struct ImplicationClasses {
    n: usize,
    class: Vec<Option<usize>>,
}

impl ImplicationClasses {
    fn new<G: QueryableGraph>(g: &G) -> Self {
        let n = g.n();
        let mut res = Self {
            n,
            class: vec![None; n * n],
        };
        let mut classes = 0;
        for e in g.iter_edges() {
            for (a, b) in [(e.source, e.sink), (e.sink, e.source)] {
                if res.class[a * n + b].is_some() {
                    continue;
                }
                res.class[a * n + b] = Some(classes);
                let mut queue = VecDeque::from([(a, b)]);
                while let Some((x, y)) = queue.pop_front() {
                    for (p, q) in forced_edges(g, x, y) {
                        if res.class[p * n + q].is_none() {
                            res.class[p * n + q] = Some(classes);
                            queue.push_back((p, q));
                        }
                    }
                }
                classes += 1;
            }
        }
        tracing::trace!(arcs = 2 * g.m(), classes, "computed implication classes");
        res
    }

    fn class(&self, a: usize, b: usize) -> Option<usize> {
        self.class[a * self.n + b]
    }
}
