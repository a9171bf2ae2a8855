use crate::graph::*;

/// Read-only access to a graph on vertices $0, 1, \ldots, n-1$.
///
/// Implementors provide only [QueryableGraph::n] and [QueryableGraph::neighbors];
/// everything else is derived from the neighbor sets.
pub trait QueryableGraph {
    /// Number of vertices.
    fn n(&self) -> usize;
    /// Open neighborhood of `u`, never containing `u` itself.
    fn neighbors(&self, u: usize) -> VertexSet;

    fn vertices(&self) -> VertexSet {
        VertexSet::range(self.n())
    }

    /// Number of edges.
    fn m(&self) -> usize {
        let sum: usize = (0..self.n()).map(|u| self.deg(u)).sum();
        debug_assert_eq!(sum % 2, 0);
        sum / 2
    }

    fn deg(&self, u: usize) -> usize {
        self.neighbors(u).len()
    }

    fn closed_neighbors(&self, u: usize) -> VertexSet {
        self.neighbors(u) + u
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(v)
    }

    /// Iterates over edges, ordered by `source` and then by `sink`.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = (0..self.n()).flat_map(move |u| {
            self.neighbors(u)
                .above(u)
                .into_iter()
                .map(move |v| Edge { source: u, sink: v })
        });
        Box::new(it)
    }

    /// Whether every vertex is reachable from vertex 0. The empty graph is connected.
    fn is_connected(&self) -> bool {
        if self.n() == 0 {
            return true;
        }
        let all = self.vertices();
        let mut queue = VertexSet::singleton(0);
        let mut seen = queue;
        while let Some(u) = queue.pop() {
            queue |= self.neighbors(u) - seen;
            seen |= self.neighbors(u);
            if seen == all {
                return true;
            }
        }
        false
    }

    /// Lazily splits the vertices into connected components,
    /// in the order of their lowest vertices.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: Sized,
    {
        ConnectedComponents::new(self, self.vertices())
    }

    /// Connected components of the subgraph induced by `allowed`,
    /// without renumbering any vertex.
    fn components_within(&self, allowed: VertexSet) -> ConnectedComponents<'_, Self>
    where
        Self: Sized,
    {
        ConnectedComponents::new(self, allowed)
    }

    /// The graph on the same vertices whose edges are exactly the non-edges of this one.
    fn complement(&self) -> Graph {
        let all = self.vertices();
        let neighbors = (0..self.n())
            .map(|u| all - self.neighbors(u) - u)
            .collect();
        Graph::from_neighbor_sets(neighbors)
    }

    /// The subgraph induced by `vertices`, renumbered to $0, \ldots, |S|-1$
    /// in ascending order of the original vertices.
    fn subgraph(&self, vertices: VertexSet) -> Graph {
        debug_assert!(vertices.is_subset(self.vertices()));
        let old: Vec<usize> = vertices.iter().collect();
        let neighbors = old
            .iter()
            .map(|&u| {
                old.iter()
                    .enumerate()
                    .filter(|&(_, &v)| self.has_edge(u, v))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();
        Graph::from_neighbor_sets(neighbors)
    }

    /// Copies this graph into an owned [Graph].
    fn to_graph(&self) -> Graph {
        Graph::from_neighbor_sets((0..self.n()).map(|u| self.neighbors(u)).collect())
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait GrowableGraph {
    /// Appends an isolated vertex and returns its number.
    fn add_vertex(&mut self) -> usize;
    fn add_edge(&mut self, u: usize, v: usize);
}

pub trait EdgeShrinkableGraph {
    /// Removes an edge which must be present.
    fn remove_edge(&mut self, u: usize, v: usize);
    fn toggle_edge(&mut self, u: usize, v: usize);
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes `u` together with its edges.
    /// Every vertex above `u` is renumbered one down.
    fn delete_vertex(&mut self, u: usize);
}
