use crate::{graph::*, Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};

/// A simple undirected graph stored as one neighbor [VertexSet] per vertex.
///
/// Equality is structural: same order and same neighbor sets under the same numbering.
/// Use [Graph::canonical] or [Graph::is_isomorphic] to compare up to isomorphism.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Graph {
    neighbors: Vec<VertexSet>,
}

impl Graph {
    /// An edgeless graph on `n` vertices.
    ///
    /// # Panics
    /// Panics if `n` exceeds [MAX_VERTICES].
    pub fn new(n: usize) -> Self {
        assert!(n <= MAX_VERTICES, "{n} vertices exceed the maximum of {MAX_VERTICES}");
        Self {
            neighbors: vec![VertexSet::EMPTY; n],
        }
    }

    /// An edgeless graph on `n` vertices, or an error if `n` exceeds [MAX_VERTICES].
    pub fn try_new(n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(Error::TooManyVertices {
                n,
                max: MAX_VERTICES,
            });
        }
        Ok(Self::new(n))
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    pub(crate) fn from_neighbor_sets(neighbors: Vec<VertexSet>) -> Self {
        debug_assert!(neighbors.len() <= MAX_VERTICES);
        let res = Self { neighbors };
        debug_assert!(res.is_symmetric());
        res
    }

    /// $K_n$.
    pub fn complete(n: usize) -> Self {
        Self::new(n).complement()
    }

    /// $P_n$: the path $0 - 1 - \cdots - (n-1)$.
    pub fn path(n: usize) -> Self {
        let mut g = Self::new(n);
        for u in 1..n {
            g.add_edge(u - 1, u);
        }
        g
    }

    /// $C_n$: the path $P_n$ closed by the edge $(n-1, 0)$.
    ///
    /// # Panics
    /// Panics if `n < 3`.
    pub fn cycle(n: usize) -> Self {
        assert!(n >= 3, "a cycle needs at least 3 vertices");
        let mut g = Self::path(n);
        g.add_edge(n - 1, 0);
        g
    }

    /// $K_{a,b}$ with parts $\{0, \ldots, a-1\}$ and $\{a, \ldots, a+b-1\}$.
    pub fn complete_bipartite(a: usize, b: usize) -> Self {
        let mut g = Self::new(a + b);
        for u in 0..a {
            for v in a..a + b {
                g.add_edge(u, v);
            }
        }
        g
    }

    /// Whether the two graphs are isomorphic, decided by petgraph's VF2.
    pub fn is_isomorphic(&self, other: &Graph) -> bool {
        if self.n() != other.n() || self.m() != other.m() {
            return false;
        }
        let a: UnGraph<(), ()> = self.into();
        let b: UnGraph<(), ()> = other.into();
        petgraph::algo::is_isomorphic(&a, &b)
    }

    /// Writes a `# n = N` header followed by one tab-separated edge per line.
    pub fn write_edge_list<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "# n = {}", self.n())?;
        for e in self.iter_edges() {
            writeln!(out, "{}\t{}", e.source, e.sink)?;
        }
        Ok(())
    }

    fn is_symmetric(&self) -> bool {
        let all = self.vertices();
        self.neighbors.iter().enumerate().all(|(u, nu)| {
            !nu.contains(u) && nu.is_subset(all) && nu.iter().all(|v| self.neighbors[v].contains(u))
        })
    }
}

impl QueryableGraph for Graph {
    fn n(&self) -> usize {
        self.neighbors.len()
    }

    fn neighbors(&self, u: usize) -> VertexSet {
        self.neighbors[u]
    }
}

impl GrowableGraph for Graph {
    fn add_vertex(&mut self) -> usize {
        assert!(self.n() < MAX_VERTICES, "cannot grow beyond {MAX_VERTICES} vertices");
        self.neighbors.push(VertexSet::EMPTY);
        self.n() - 1
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n() && v < self.n());
        debug_assert_ne!(u, v, "self loop at {u}");
        self.neighbors[u].insert(v);
        self.neighbors[v].insert(u);
    }
}

impl EdgeShrinkableGraph for Graph {
    fn remove_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n() && v < self.n());
        self.neighbors[u].remove(v);
        self.neighbors[v].remove(u);
    }

    fn toggle_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n() && v < self.n());
        debug_assert_ne!(u, v, "self loop at {u}");
        self.neighbors[u].toggle(v);
        self.neighbors[v].toggle(u);
    }
}

impl VertexShrinkableGraph for Graph {
    fn delete_vertex(&mut self, u: usize) {
        debug_assert!(u < self.n());
        self.neighbors.remove(u);
        for nb in self.neighbors.iter_mut() {
            *nb = nb.delete_element(u);
        }
    }
}

/// The compact edge list `{{0,1},{1,2}}`; for display only.
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.iter_edges().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{{{},{}}}", e.source, e.sink)?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl From<&Graph> for UnGraph<(), ()> {
    fn from(g: &Graph) -> Self {
        let mut res = UnGraph::with_capacity(g.n(), g.m());
        for _ in 0..g.n() {
            res.add_node(());
        }
        for e in g.iter_edges() {
            res.add_edge(NodeIndex::new(e.source), NodeIndex::new(e.sink), ());
        }
        res
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Graph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let n = usize::arbitrary(g) % 10;
        let mut res = Graph::new(n);
        for u in 0..n {
            for v in u + 1..n {
                if bool::arbitrary(g) {
                    res.add_edge(u, v);
                }
            }
        }
        res
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let me = self.clone();
        let smaller = (0..me.n()).rev().map({
            let me = me.clone();
            move |u| {
                let mut res = me.clone();
                res.delete_vertex(u);
                res
            }
        });
        let edges: Vec<Edge> = me.iter_edges().collect();
        let sparser = edges.into_iter().map(move |e| {
            let mut res = me.clone();
            res.remove_edge(e.source, e.sink);
            res
        });
        Box::new(smaller.chain(sparser))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn basic_queries() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 4);
        assert_eq!(g.deg(2), 3);
        assert!(g.has_edge(3, 2));
        assert!(!g.has_edge(3, 0));
        assert_eq!(g.neighbors(2), VertexSet::from([0, 1, 3]));
        assert_eq!(format!("{}", g), "{{0,1},{0,2},{1,2},{2,3}}");
    }

    #[test]
    fn too_many_vertices() {
        assert!(matches!(
            Graph::try_new(MAX_VERTICES + 1),
            Err(crate::Error::TooManyVertices { .. })
        ));
        assert_eq!(Graph::try_new(MAX_VERTICES).map(|g| g.n()), Ok(MAX_VERTICES));
    }

    #[test]
    fn delete_vertex_renumbers() {
        let mut g = Graph::path(5);
        g.delete_vertex(2);
        assert_eq!(g, Graph::from_edges(4, &[(0, 1), (2, 3)]));
        let mut c = Graph::cycle(4);
        c.delete_vertex(0);
        assert_eq!(c, Graph::path(3));
    }

    #[test]
    fn subgraph_renumbers_ascending() {
        let g = Graph::cycle(6);
        let s = g.subgraph(VertexSet::from([1, 2, 3, 5]));
        assert_eq!(s, Graph::from_edges(4, &[(0, 1), (1, 2)]));
        assert_eq!(g.subgraph(g.vertices()), g);
    }

    #[test]
    fn toggle_and_remove() {
        let mut g = Graph::complete(4);
        g.toggle_edge(0, 1);
        assert!(!g.has_edge(0, 1));
        g.toggle_edge(1, 0);
        assert!(g.has_edge(0, 1));
        g.remove_edge(2, 3);
        assert_eq!(g.m(), 5);
        let v = g.add_vertex();
        assert_eq!(v, 4);
        assert_eq!(g.deg(v), 0);
    }

    #[test]
    fn edge_list_output() {
        let mut buf = vec![];
        Graph::path(3).write_edge_list(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "# n = 3\n0\t1\n1\t2\n");
    }

    #[test]
    fn isomorphism_via_petgraph() {
        let p4 = Graph::path(4);
        let relabeled = Graph::from_edges(4, &[(2, 0), (0, 3), (3, 1)]);
        assert!(p4.is_isomorphic(&relabeled));
        assert!(!p4.is_isomorphic(&Graph::complete_bipartite(1, 3)));
    }

    #[quickcheck]
    fn complement_is_involution(g: Graph) -> bool {
        g.complement().complement() == g
    }

    #[quickcheck]
    fn complement_edge_count(g: Graph) -> bool {
        let n = g.n();
        g.m() + g.complement().m() == n * n.saturating_sub(1) / 2
    }

    #[quickcheck]
    fn iter_edges_agrees_with_has_edge(g: Graph) -> bool {
        let edges: Vec<_> = g.iter_edges().collect();
        edges.len() == g.m() && edges.iter().all(|e| e.source < e.sink && g.has_edge(e.sink, e.source))
    }

    #[quickcheck]
    fn delete_vertex_is_subgraph(g: Graph) -> bool {
        (0..g.n()).all(|u| {
            let mut h = g.clone();
            h.delete_vertex(u);
            h == g.subgraph(g.vertices() - u)
        })
    }
}
