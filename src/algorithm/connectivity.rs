//! 2-edge- and 2-vertex-connectivity by chain decomposition.
use crate::graph::*;

/// Connectivity tests built on one depth-first search.
///
/// Back edges are processed in the preorder of their upper endpoint. Each one
/// starts a chain that walks up the tree edges from the lower endpoint until it
/// meets a vertex already on some chain. The graph is 2-edge-connected iff it is
/// connected and the chains cover every tree edge. It is 2-vertex-connected iff,
/// in addition, no chain other than the first closes into a cycle.
///
/// Graphs with at most one vertex pass all tests; a single edge passes none.
pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// Connected, and still connected after removing any one edge.
    fn is_two_edge_connected(&self) -> bool {
        let chains = ChainDecomposition::new(self);
        chains.connected && chains.covered_tree_edges + 1 == self.n().max(1)
    }

    /// Connected, without cut vertices, and no single edge.
    fn is_biconnected(&self) -> bool {
        let chains = ChainDecomposition::new(self);
        chains.connected && chains.covered_tree_edges + 1 == self.n().max(1) && !chains.later_cycle
    }

    /// 2-edge-connected, but no longer after removing any one edge.
    fn is_minimally_two_edge_connected(&self) -> bool {
        self.is_two_edge_connected() && every_edge_removal_breaks(self, |h| h.is_two_edge_connected())
    }

    /// Biconnected, but no longer after removing any one edge.
    fn is_minimally_biconnected(&self) -> bool {
        self.is_biconnected() && every_edge_removal_breaks(self, |h| h.is_biconnected())
    }

    /// Biconnected, but no longer after deleting any one vertex.
    fn is_critically_biconnected(&self) -> bool {
        if !self.is_biconnected() {
            return false;
        }
        let g = self.to_graph();
        g.vertices().iter().all(|u| {
            let mut h = g.clone();
            h.delete_vertex(u);
            let breaks = !h.is_biconnected();
            tracing::trace!(vertex = u, breaks, "checked vertex deletion");
            breaks
        })
    }
}

impl<G: QueryableGraph> Connectivity for G {}

fn every_edge_removal_breaks<G, P>(g: &G, property: P) -> bool
where
    G: QueryableGraph,
    P: Fn(&Graph) -> bool,
{
    let mut h = g.to_graph();
    let edges: Vec<Edge> = g.iter_edges().collect();
    edges.into_iter().all(|e| {
        h.toggle_edge(e.source, e.sink);
        let breaks = !property(&h);
        h.toggle_edge(e.source, e.sink);
        tracing::trace!(source = e.source, sink = e.sink, breaks, "checked edge removal");
        breaks
    })
}

struct ChainDecomposition {
    connected: bool,
    covered_tree_edges: usize,
    later_cycle: bool,
}

impl ChainDecomposition {
    fn new<G: QueryableGraph>(g: &G) -> Self {
        let n = g.n();
        if n == 0 {
            return Self {
                connected: true,
                covered_tree_edges: 0,
                later_cycle: false,
            };
        }
        let mut dfs = DepthFirst {
            dfi: vec![None; n],
            parent: vec![None; n],
            order: Vec::with_capacity(n),
        };
        dfs.visit(g, 0);
        let mut res = Self {
            connected: dfs.order.len() == n,
            covered_tree_edges: 0,
            later_cycle: false,
        };
        let mut on_chain = VertexSet::EMPTY;
        let mut chains = 0;
        for &v in dfs.order.iter() {
            for w in g.neighbors(v) {
                let back_edge = dfs.dfi[w] > dfs.dfi[v] && dfs.parent[w] != Some(v);
                if !back_edge {
                    continue;
                }
                on_chain.insert(v);
                let mut x = w;
                while !on_chain.contains(x) {
                    on_chain.insert(x);
                    res.covered_tree_edges += 1;
                    match dfs.parent[x] {
                        Some(p) => x = p,
                        None => break,
                    }
                }
                if x == v && chains > 0 {
                    res.later_cycle = true;
                }
                chains += 1;
            }
        }
        res
    }
}

struct DepthFirst {
    dfi: Vec<Option<usize>>,
    parent: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl DepthFirst {
    fn visit<G: QueryableGraph>(&mut self, g: &G, v: usize) {
        self.dfi[v] = Some(self.order.len());
        self.order.push(v);
        for w in g.neighbors(v) {
            if self.dfi[w].is_none() {
                self.parent[w] = Some(v);
                self.visit(g, w);
            }
        }
    }
}
