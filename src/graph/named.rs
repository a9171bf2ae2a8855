use crate::{graph::*, Error, Result};
use bimap::BiHashMap;

const CATALOGUE: &[(&str, usize, &[(usize, usize)])] = &[
    ("diamond", 4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]),
    ("paw", 4, &[(0, 1), (0, 2), (1, 2), (2, 3)]),
    ("claw", 4, &[(0, 1), (0, 2), (0, 3)]),
    (
        "K5-e",
        5,
        &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3), (0, 4), (2, 4), (3, 4)],
    ),
    (
        "K4&v2",
        5,
        &[(1, 2), (0, 3), (1, 3), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)],
    ),
    (
        "W4",
        5,
        &[(0, 1), (1, 2), (0, 3), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)],
    ),
    ("K4&v1", 5, &[(1, 2), (1, 3), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)]),
    ("C4&v3", 5, &[(0, 2), (1, 2), (0, 3), (1, 3), (0, 4), (1, 4), (2, 4)]),
    ("gem", 5, &[(0, 1), (1, 2), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)]),
    ("K2&3v2", 5, &[(0, 3), (1, 3), (2, 3), (0, 4), (1, 4), (2, 4), (3, 4)]),
    ("bowtie", 5, &[(0, 1), (0, 2), (1, 2), (0, 3), (0, 4), (3, 4)]),
    ("fork", 5, &[(0, 1), (1, 2), (1, 3), (3, 4)]),
    ("kite", 5, &[(0, 2), (0, 3), (2, 3), (0, 4), (1, 4), (2, 4)]),
    ("dart", 5, &[(0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 4)]),
    ("house", 5, &[(0, 2), (0, 3), (1, 3), (0, 4), (1, 4), (2, 4)]),
    ("banner", 5, &[(0, 1), (0, 2), (1, 3), (2, 3), (2, 4)]),
    ("tadpole", 5, &[(1, 2), (0, 3), (0, 4), (1, 4), (3, 4)]),
    ("bull", 5, &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 4)]),
    ("cricket", 5, &[(0, 1), (1, 2), (1, 3), (1, 4), (3, 4)]),
    (
        "domino",
        6,
        &[(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)],
    ),
];

/// A registry of small graphs known by name.
///
/// The catalogue is built once by [NamedGraphs::new] and then passed around by
/// reference. Catalogue entries are stored as canonical forms, so a lookup by
/// graph works for any labeling.
///
/// Besides the catalogue, [NamedGraphs::get] understands the families
/// `Pn`, `Cn`, `Kn`, `Ka,b`, `cPn` and `cCn` (the `c` prefix taking the complement).
pub struct NamedGraphs {
    graphs: BiHashMap<String, Graph>,
}

impl NamedGraphs {
    pub fn new() -> Self {
        let mut res = Self {
            graphs: BiHashMap::new(),
        };
        for &(name, n, edges) in CATALOGUE {
            res.insert(name, &Graph::from_edges(n, edges));
        }
        tracing::debug!(graphs = res.graphs.len(), "named graph catalogue built");
        res
    }

    /// Registers `g` under `name`.
    ///
    /// An older entry with the same name, or with an isomorphic graph, is replaced.
    pub fn insert(&mut self, name: &str, g: &Graph) {
        self.graphs.insert(name.to_owned(), g.canonical());
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Catalogue entries as `(name, canonical form)`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Graph)> {
        self.graphs.iter().map(|(name, g)| (name.as_str(), g))
    }

    /// Looks up a graph by name.
    ///
    /// Family members use the numbering of the matching [Graph] constructor.
    pub fn get(&self, name: &str) -> Result<Graph> {
        if let Some(g) = self.graphs.get_by_left(name) {
            return Ok(g.clone());
        }
        let unknown = || Error::UnknownGraph(name.to_owned());
        if let Some(rest) = name.strip_prefix('c') {
            return match rest.chars().next() {
                Some('P') | Some('C') => Ok(self.get_family(rest).ok_or_else(unknown)??.complement()),
                _ => Err(unknown()),
            };
        }
        self.get_family(name).ok_or_else(unknown)?
    }

    fn get_family(&self, name: &str) -> Option<Result<Graph>> {
        let mut chars = name.chars();
        let family = chars.next()?;
        let args = chars.as_str();
        if family == 'K' {
            if let Some((a, b)) = args.split_once(',') {
                let a = parse_order(a)?;
                let b = parse_order(b)?;
                return Some(checked_order(a + b).map(|_| Graph::complete_bipartite(a, b)));
            }
        }
        let n = parse_order(args)?;
        match family {
            'K' => Some(checked_order(n).map(|_| Graph::complete(n))),
            'P' => Some(checked_order(n).map(|_| Graph::path(n))),
            'C' if n >= 3 => Some(checked_order(n).map(|_| Graph::cycle(n))),
            _ => None,
        }
    }

    /// A human-readable name for `g`.
    ///
    /// Each connected component is named by the catalogue, then as one of
    /// `Kn`, `Pn`, `Cn`, `cPn`, `cCn`, `Ka,b`, and as a last resort by its edge list.
    /// Component names are sorted and repeats are merged into a count,
    /// e.g. `2K1+P3`.
    pub fn name_of(&self, g: &Graph) -> String {
        let mut names: Vec<String> = g
            .connected_components()
            .map(|c| self.component_name(&g.subgraph(c)))
            .collect();
        names.sort();
        let mut res: Vec<String> = vec![];
        let mut i = 0;
        while i < names.len() {
            let run = names[i..].iter().take_while(|x| **x == names[i]).count();
            if run > 1 {
                res.push(format!("{}{}", run, names[i]));
            } else {
                res.push(names[i].clone());
            }
            i += run;
        }
        res.join("+")
    }

    fn component_name(&self, c: &Graph) -> String {
        if let Some(name) = self.graphs.get_by_right(&c.canonical()) {
            return name.clone();
        }
        if let Some(name) = family_name(c) {
            return name;
        }
        let co = c.complement();
        if co.is_connected() {
            if let Some(name) = family_name(&co).filter(|x| x.starts_with(['P', 'C'])) {
                return format!("c{}", name);
            }
        }
        let p1 = c.neighbors(0);
        if let Some(u) = VertexSet::min(&p1) {
            let p2 = c.neighbors(u);
            let bipartite = (p1 | p2) == c.vertices()
                && (p1 & p2).is_empty()
                && c.vertices()
                    .iter()
                    .all(|v| c.neighbors(v) == p1 || c.neighbors(v) == p2);
            if bipartite {
                let (a, b) = (p1.len().min(p2.len()), p1.len().max(p2.len()));
                return format!("K{},{}", a, b);
            }
        }
        format!("{}", c)
    }
}

impl Default for NamedGraphs {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_order(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn checked_order(n: usize) -> Result<()> {
    if n > MAX_VERTICES {
        Err(Error::TooManyVertices {
            n,
            max: MAX_VERTICES,
        })
    } else {
        Ok(())
    }
}

/// `Kn`, `Pn` or `Cn` for a connected graph of that shape.
fn family_name(c: &Graph) -> Option<String> {
    let n = c.n();
    let degs: Vec<usize> = (0..n).map(|u| c.deg(u)).collect();
    if degs.iter().all(|&d| d + 1 == n) {
        return Some(format!("K{}", n));
    }
    if !c.is_connected() {
        return None;
    }
    if c.m() + 1 == n && degs.iter().all(|&d| d <= 2) {
        return Some(format!("P{}", n));
    }
    if degs.iter().all(|&d| d == 2) {
        return Some(format!("C{}", n));
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::{graph::*, Error};

    #[test]
    fn catalogue_entries_are_distinct() {
        let reg = NamedGraphs::new();
        assert_eq!(reg.len(), super::CATALOGUE.len());
        for (name, g) in reg.iter() {
            assert!(g.is_connected(), "{name}");
            assert_eq!(reg.name_of(g), name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let reg = NamedGraphs::default();
        let house = reg.get("house").unwrap();
        assert_eq!((house.n(), house.m()), (5, 6));
        assert!(house.is_isomorphic(&Graph::path(5).complement()));
        assert!(reg.get("claw").unwrap().is_isomorphic(&Graph::complete_bipartite(1, 3)));
        assert_eq!(reg.get("P4"), Ok(Graph::path(4)));
        assert_eq!(reg.get("C6"), Ok(Graph::cycle(6)));
        assert_eq!(reg.get("K3"), Ok(Graph::complete(3)));
        assert_eq!(reg.get("K2,3"), Ok(Graph::complete_bipartite(2, 3)));
        assert_eq!(reg.get("cC6"), Ok(Graph::cycle(6).complement()));
        assert_eq!(reg.get("cP5"), Ok(Graph::path(5).complement()));
    }

    #[test]
    fn lookup_failures() {
        let reg = NamedGraphs::new();
        for name in ["", "Q3", "C2", "P", "K3,", "cK3", "house2", "P-1"] {
            assert_eq!(reg.get(name), Err(Error::UnknownGraph(name.to_owned())), "{name}");
        }
        assert!(matches!(
            reg.get(&format!("K{}", MAX_VERTICES + 1)),
            Err(Error::TooManyVertices { .. })
        ));
    }

    #[test]
    fn names_of_components() {
        let reg = NamedGraphs::new();
        let g = Graph::from_edges(5, &[(1, 3), (3, 4)]);
        assert_eq!(reg.name_of(&g), "2K1+P3");
        assert_eq!(reg.name_of(&Graph::new(0)), "");
        assert_eq!(reg.name_of(&Graph::cycle(7)), "C7");
        assert_eq!(reg.name_of(&Graph::complete_bipartite(2, 3)), "K2,3");
        assert_eq!(reg.name_of(&Graph::cycle(6).complement()), "cC6");
        assert_eq!(reg.name_of(&Graph::complete(4)), "K4");
        let mut both = Graph::from_edges(9, &[(0, 1), (0, 2), (0, 3)]);
        both.add_edge(5, 6);
        both.add_edge(7, 8);
        assert_eq!(reg.name_of(&both), "K1+2K2+claw");
    }

    #[test]
    fn complete_bipartite_names_need_both_sides_complete() {
        let reg = NamedGraphs::new();
        // N(0) and N(1) partition the vertices and 3 * 3 = 9 edges, yet 0, 2, 3 form a triangle
        let g = Graph::from_edges(
            6,
            &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (2, 3), (2, 4), (2, 5), (3, 4)],
        );
        assert_ne!(reg.name_of(&g), "K3,3");
        assert_eq!(reg.name_of(&Graph::complete_bipartite(3, 3)), "K3,3");
    }

    #[test]
    fn complete_bipartite_names_are_exact() {
        let reg = NamedGraphs::new();
        for n in 0..=7 {
            Enumeration::new(n).connected_only().for_each(|g| {
                let name = reg.name_of(g);
                let Some((a, b)) = name.strip_prefix('K').and_then(|x| x.split_once(',')) else {
                    return;
                };
                let (a, b) = (a.parse().unwrap(), b.parse().unwrap());
                assert!(g.is_isomorphic(&Graph::complete_bipartite(a, b)), "{name} for {g}");
            });
        }
    }

    #[test]
    fn custom_entries() {
        let mut reg = NamedGraphs::new();
        reg.insert("net", &Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 4), (2, 5)]));
        let relabeled = Graph::from_edges(6, &[(5, 4), (4, 3), (3, 5), (5, 0), (4, 1), (3, 2)]);
        assert_eq!(reg.name_of(&relabeled), "net");
    }
}
