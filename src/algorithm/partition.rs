//! Classes defined by a partition of the vertices into two parts,
//! decided by trying every vertex subset as the first part.
use crate::{algorithm::*, graph::*};

pub trait VertexPartitions
where
    Self: QueryableGraph + Sized,
{
    /// Whether the vertices split into a part satisfying `first` and a part
    /// satisfying `second`, either part possibly empty.
    ///
    /// All $2^n$ subsets are tried.
    fn has_partition<P, Q>(&self, first: P, second: Q) -> bool
    where
        P: Fn(&Graph) -> bool,
        Q: Fn(&Graph) -> bool,
    {
        self.vertices().subsets().any(|part| {
            first(&self.subgraph(part)) && second(&self.subgraph(self.vertices() - part))
        })
    }

    /// An independent set plus a cluster graph.
    fn is_monopolar(&self) -> bool {
        self.has_partition(|a| a.is_edgeless(), |b| b.is_cluster())
    }

    /// A complete multipartite graph plus a cluster graph.
    fn is_polar(&self) -> bool {
        self.has_partition(|a| a.is_complete_multipartite(), |b| b.is_cluster())
    }

    /// A clique plus a cluster graph.
    fn is_unipolar(&self) -> bool {
        self.has_partition(|a| a.complement().is_edgeless(), |b| b.is_cluster())
    }

    /// Two split graphs.
    fn is_two_split(&self) -> bool {
        self.has_partition(|a| a.is_split(), |b| b.is_split())
    }
}

impl<G: QueryableGraph> VertexPartitions for G {}
