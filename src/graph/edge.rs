/// An unordered pair of adjacent vertices, stored with `source < sink`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: usize,
    pub sink: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        debug_assert_ne!(u, v, "self loops are not edges");
        if u < v {
            Self { source: u, sink: v }
        } else {
            Self { source: v, sink: u }
        }
    }
}
