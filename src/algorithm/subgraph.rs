//! Finding and counting copies of a small pattern graph by backtracking.
use crate::{algorithm::factorial, graph::*, Error, Result};
use std::ops::ControlFlow;

/// How pattern edges must be reflected in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Every pattern edge maps to a host edge. Host edges between images of
    /// non-adjacent pattern vertices are allowed.
    Subgraph,
    /// Pattern edges and non-edges map exactly to host edges and non-edges.
    Induced,
}

/// Subgraph and induced-subgraph isomorphism against a fixed pattern.
///
/// Pattern vertices are mapped in ascending order, each to an unused host vertex
/// consistent with all previously mapped pattern vertices.
/// The search is exponential in the order of the pattern and meant for
/// patterns of a handful of vertices.
pub trait PatternMatch
where
    Self: QueryableGraph + Sized,
{
    /// Whether the pattern appears as a (not necessarily induced) subgraph.
    fn has_subgraph<F: QueryableGraph>(&self, pattern: &F) -> bool {
        self.find_embedding(pattern, MatchKind::Subgraph).is_some()
    }

    /// Whether the pattern appears as an induced subgraph.
    fn has_induced<F: QueryableGraph>(&self, pattern: &F) -> bool {
        self.find_embedding(pattern, MatchKind::Induced).is_some()
    }

    /// One embedding of the pattern: entry `i` is the host vertex that pattern vertex `i` maps to.
    ///
    /// The search stops at the first complete mapping.
    fn find_embedding<F: QueryableGraph>(&self, pattern: &F, kind: MatchKind) -> Option<Vec<usize>> {
        if self.n() < pattern.n() {
            return None;
        }
        let mut found = None;
        let _ = Matcher::new(self, pattern, kind).run(&mut |assignment: &[usize]| {
            found = Some(assignment.to_vec());
            ControlFlow::Break(())
        });
        found
    }

    /// Number of injective maps from pattern vertices to host vertices that respect `kind`.
    fn count_embeddings<F: QueryableGraph>(&self, pattern: &F, kind: MatchKind) -> u64 {
        if self.n() < pattern.n() {
            return 0;
        }
        let mut count = 0;
        let _ = Matcher::new(self, pattern, kind).run(&mut |_: &[usize]| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// Number of distinct subgraphs of the host isomorphic to the pattern.
    fn count_subgraphs<F: QueryableGraph>(&self, pattern: &F) -> u64 {
        count_copies(self, pattern, MatchKind::Subgraph)
    }

    /// Number of vertex sets of the host inducing a copy of the pattern.
    fn count_induced<F: QueryableGraph>(&self, pattern: &F) -> u64 {
        count_copies(self, pattern, MatchKind::Induced)
    }

    /// Order of the automorphism group.
    ///
    /// Multiplies the orbit sizes along the stabilizer chain: the orbit of `i`
    /// under the automorphisms fixing `0..i` pointwise. Each orbit member needs
    /// only one witness, so symmetric graphs never enumerate the whole group.
    /// Fails with [Error::Overflow] beyond `u64`.
    fn automorphism_count(&self) -> Result<u64> {
        let mut matcher = Matcher::new(self, self, MatchKind::Induced);
        let mut count: u64 = 1;
        for i in self.vertices() {
            let unfixed = self.vertices() - VertexSet::range(i);
            let orbit = unfixed
                .iter()
                .filter(|&u| matcher.extends_with(u, unfixed))
                .count() as u64;
            count = count.checked_mul(orbit).ok_or(Error::Overflow)?;
            matcher.assignment.push(i);
        }
        tracing::trace!(n = self.n(), count, "counted automorphisms");
        Ok(count)
    }

    /// Number of labeled graphs on the same vertex numbers isomorphic to this one,
    /// i.e. $n! / |\mathrm{Aut}|$.
    fn labeled_copies(&self) -> Result<u64> {
        Ok(factorial(self.n() as u64)? / self.automorphism_count()?)
    }
}

impl<G: QueryableGraph> PatternMatch for G {}

/// Labeled embeddings divided by the automorphisms of the pattern.
///
/// # Panics
/// Panics if the division is inexact, which can only stem from a broken matcher.
fn count_copies<G, F>(host: &G, pattern: &F, kind: MatchKind) -> u64
where
    G: QueryableGraph,
    F: QueryableGraph,
{
    if host.n() < pattern.n() {
        return 0;
    }
    let embeddings = host.count_embeddings(pattern, kind);
    if embeddings == 0 {
        return 0;
    }
    let automorphisms = pattern.count_embeddings(pattern, MatchKind::Induced);
    if embeddings % automorphisms != 0 {
        tracing::error!(embeddings, automorphisms, ?kind, "embeddings not divisible by automorphisms");
        panic!("{embeddings} embeddings are not divisible by {automorphisms} automorphisms");
    }
    tracing::trace!(embeddings, automorphisms, ?kind, "counted pattern copies");
    embeddings / automorphisms
}

struct Matcher<'a, G, F> {
    host: &'a G,
    pattern: &'a F,
    kind: MatchKind,
    assignment: Vec<usize>,
}

impl<'a, G, F> Matcher<'a, G, F>
where
    G: QueryableGraph,
    F: QueryableGraph,
{
    fn new(host: &'a G, pattern: &'a F, kind: MatchKind) -> Self {
        Self {
            host,
            pattern,
            kind,
            assignment: Vec::with_capacity(pattern.n()),
        }
    }

    fn run<V>(&mut self, visit: &mut V) -> ControlFlow<()>
    where
        V: FnMut(&[usize]) -> ControlFlow<()>,
    {
        self.extend(self.host.vertices(), visit)
    }

    fn extend<V>(&mut self, unassigned: VertexSet, visit: &mut V) -> ControlFlow<()>
    where
        V: FnMut(&[usize]) -> ControlFlow<()>,
    {
        if self.assignment.len() == self.pattern.n() {
            return visit(&self.assignment);
        }
        for u_g in unassigned {
            if self.fits(u_g) {
                self.assignment.push(u_g);
                let flow = self.extend(unassigned - u_g, visit);
                self.assignment.pop();
                if flow.is_break() {
                    return flow;
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Whether some complete mapping extends the current one by sending the
    /// next pattern vertex to `u_g`.
    fn extends_with(&mut self, u_g: usize, unassigned: VertexSet) -> bool {
        if !self.fits(u_g) {
            return false;
        }
        self.assignment.push(u_g);
        let flow = self.extend(unassigned - u_g, &mut |_: &[usize]| ControlFlow::Break(()));
        self.assignment.pop();
        flow.is_break()
    }

    /// Whether the next pattern vertex may map to `u_g`.
    fn fits(&self, u_g: usize) -> bool {
        let u_f = self.assignment.len();
        let pattern_nbs = self.pattern.neighbors(u_f);
        let host_nbs = self.host.neighbors(u_g);
        self.assignment.iter().enumerate().all(|(v_f, &v_g)| {
            let in_pattern = pattern_nbs.contains(v_f);
            let in_host = host_nbs.contains(v_g);
            match self.kind {
                MatchKind::Subgraph => !in_pattern || in_host,
                MatchKind::Induced => in_pattern == in_host,
            }
        })
    }
}
