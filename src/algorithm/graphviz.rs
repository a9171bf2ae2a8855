//! Visualize graphs in the graphviz format.
use crate::graph::*;

/**
 * Provides graphviz attributes for vertices and edges.
 *
 * Both methods default to no attributes. See [DumpInGraphviz] for details.
 */
pub trait GraphvizLabels {
    /**
     * Returns the attribute list of vertex `u`, if any.
     */
    fn vertex_label(&self, _u: usize) -> Option<String> {
        None
    }

    /**
     * Returns the attribute list of edge `e`, if any.
     */
    fn edge_label(&self, _e: Edge) -> Option<String> {
        None
    }
}

/// Plain output without attributes.
pub struct NoLabels;

impl GraphvizLabels for NoLabels {}

/// Colors a vertex set and the edges inside it red, e.g. an induced subgraph that was found.
pub struct Highlight(pub VertexSet);

impl GraphvizLabels for Highlight {
    fn vertex_label(&self, u: usize) -> Option<String> {
        self.0.contains(u).then(|| "color=red".to_owned())
    }

    fn edge_label(&self, e: Edge) -> Option<String> {
        (self.0.contains(e.source) && self.0.contains(e.sink)).then(|| "color=red".to_owned())
    }
}

/**
 * Dumps an undirected graph into graphviz format.
 *
 * # Examples
 *
 * ```rust
 * use tinygraph::{
 *     algorithm::{graphviz::*, *},
 *     graph::*,
 * };
 *
 * let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   0 ;
 *   1 ;
 *   2 ;
 *   3 ;
 *   0 -- 1 ;
 *   0 -- 2 ;
 *   0 -- 3 ;
 *   1 -- 2 ;
 *   2 -- 3 ;
 * }
 * "#
 * );
 *
 * // the triangle on 0, 1 and 2 in red
 * let triangle = g.find_embedding(&Graph::complete(3), MatchKind::Induced).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     let highlight = Highlight(triangle.into_iter().collect());
 *     g.dump_in_graphviz_with(&mut buf, "trial", &highlight).unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   0 [color=red] ;
 *   1 [color=red] ;
 *   2 [color=red] ;
 *   3 ;
 *   0 -- 1 [color=red] ;
 *   0 -- 2 [color=red] ;
 *   0 -- 3 ;
 *   1 -- 2 [color=red] ;
 *   2 -- 3 ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph,
{
    /**
     * Dumps the graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        self.dump_in_graphviz_with(out, graph_name, &NoLabels)
    }

    /**
     * Same as [DumpInGraphviz::dump_in_graphviz], with attributes from `labels`.
     */
    fn dump_in_graphviz_with<W, L>(
        &self,
        out: &mut W,
        graph_name: &str,
        labels: &L,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        L: GraphvizLabels,
    {
        writeln!(out, "graph {} {{", graph_name)?;
        for u in self.vertices() {
            if let Some(label) = labels.vertex_label(u) {
                writeln!(out, "  {} [{}] ;", u, label)?;
            } else {
                writeln!(out, "  {} ;", u)?;
            }
        }
        for e in self.iter_edges() {
            if let Some(label) = labels.edge_label(e) {
                writeln!(out, "  {} -- {} [{}] ;", e.source, e.sink, label)?;
            } else {
                writeln!(out, "  {} -- {} ;", e.source, e.sink)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G: QueryableGraph> DumpInGraphviz for G {}
