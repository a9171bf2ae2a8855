use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Every vertex is printed on its own line, followed by its neighbor set.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        write!(f, "{:indention$}", "")
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}:", u)?;
            if self.graph.deg(u) > 0 {
                self.display_indent(f, 1)?;
                writeln!(f, "-- {}", self.graph.neighbors(u))?;
            }
        }
        Ok(())
    }
}
