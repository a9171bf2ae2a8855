use crate::graph::*;

/// Connected components of a graph, produced one breadth-first search at a time.
///
/// Each call to `next` starts from the lowest unvisited vertex and consumes its whole component.
pub struct ConnectedComponents<'a, G> {
    graph: &'a G,
    allowed: VertexSet,
    unvisited: VertexSet,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: QueryableGraph,
{
    pub(crate) fn new(graph: &'a G, allowed: VertexSet) -> Self {
        Self {
            graph,
            allowed,
            unvisited: allowed,
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        let start = VertexSet::min(&self.unvisited)?;
        let mut component = VertexSet::singleton(start);
        let mut queue = component;
        while let Some(u) = queue.pop() {
            let fresh = self.graph.neighbors(u) & self.allowed - component;
            queue |= fresh;
            component |= fresh;
        }
        self.unvisited -= component;
        Some(component)
    }
}
