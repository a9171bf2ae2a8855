use crate::graph::*;
use std::cmp::Ordering;

impl Graph {
    /// A canonical representative of the isomorphism class of this graph.
    ///
    /// Two graphs are isomorphic iff their canonical forms are equal.
    /// Vertices are placed in order of non-increasing degree, and among all such
    /// orders the one with the greatest adjacency code wins, where the code is the
    /// sequence of columns (the earlier positions adjacent to each position)
    /// compared word by word.
    ///
    /// The search is exponential in the size of the degree classes.
    /// It is meant for small graphs: catalogues, tests and the reference enumerator.
    pub fn canonical(&self) -> Graph {
        let n = self.n();
        let mut degrees: Vec<usize> = (0..n).map(|u| self.deg(u)).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        let mut search = CanonicalSearch {
            graph: self,
            degrees,
            order: Vec::with_capacity(n),
            columns: Vec::with_capacity(n),
            best: None,
        };
        search.extend(self.vertices());
        let order = match search.best {
            Some((order, _)) => order,
            None => Vec::new(),
        };
        let mut res = Graph::new(n);
        for (i, &u) in order.iter().enumerate() {
            for (j, &v) in order.iter().enumerate().skip(i + 1) {
                if self.has_edge(u, v) {
                    res.add_edge(i, j);
                }
            }
        }
        res
    }
}

struct CanonicalSearch<'a> {
    graph: &'a Graph,
    degrees: Vec<usize>,
    order: Vec<usize>,
    columns: Vec<Word>,
    best: Option<(Vec<usize>, Vec<Word>)>,
}

impl<'a> CanonicalSearch<'a> {
    fn extend(&mut self, unplaced: VertexSet) {
        let pos = self.order.len();
        if pos == self.degrees.len() {
            let better = match &self.best {
                None => true,
                Some((_, best)) => self.columns > *best,
            };
            if better {
                self.best = Some((self.order.clone(), self.columns.clone()));
            }
            return;
        }
        for u in unplaced {
            if self.graph.deg(u) != self.degrees[pos] {
                continue;
            }
            let column = self
                .order
                .iter()
                .enumerate()
                .filter(|&(_, &v)| self.graph.has_edge(u, v))
                .fold(0 as Word, |acc, (i, _)| acc | ((1 as Word) << i));
            if let Some((_, best)) = &self.best {
                let prefix = self.columns.iter().chain(std::iter::once(&column));
                if prefix.cmp(best[..=pos].iter()) == Ordering::Less {
                    continue;
                }
            }
            self.order.push(u);
            self.columns.push(column);
            self.extend(unplaced - u);
            self.order.pop();
            self.columns.pop();
        }
    }
}
