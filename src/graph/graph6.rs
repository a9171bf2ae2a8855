use crate::{graph::*, Error, Result};

const OFFSET: u8 = 63;
/// Marks a long size prefix; twice in a row for the longest one.
const LONG_SIZE: u8 = 126;
/// Orders from this one on take the four-byte size prefix.
const LONG_ORDER: usize = 63;

/// Splits the size prefix off, returning the order and the edge data.
fn split_order(bytes: &[u8]) -> std::result::Result<(u64, &[u8]), &'static str> {
    let (width, field) = match bytes {
        [] => return Err("empty input"),
        [LONG_SIZE, LONG_SIZE, rest @ ..] => (6, rest),
        [LONG_SIZE, rest @ ..] => (3, rest),
        _ => (1, bytes),
    };
    if field.len() < width {
        return Err("truncated size prefix");
    }
    let (size, body) = field.split_at(width);
    let mut n = 0u64;
    for &b in size {
        if !(OFFSET..=LONG_SIZE).contains(&b) {
            return Err("size byte out of range");
        }
        n = n << 6 | u64::from(b - OFFSET);
    }
    Ok((n, body))
}

impl Graph {
    /// Parses a graph in graph6 format, as printed by nauty's `geng`.
    ///
    /// All three size prefixes are read; orders above [MAX_VERTICES] are
    /// rejected with [Error::TooManyVertices]. A trailing newline is ignored.
    pub fn from_graph6(input: &str) -> Result<Graph> {
        let malformed = |reason: &str| Error::MalformedGraph6 {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };
        let bytes = input.trim_end_matches(['\n', '\r']).as_bytes();
        let (n, body) = split_order(bytes).map_err(malformed)?;
        if n > MAX_VERTICES as u64 {
            return Err(Error::TooManyVertices {
                n: usize::try_from(n).unwrap_or(usize::MAX),
                max: MAX_VERTICES,
            });
        }
        let n = n as usize;
        let bits = n * n.saturating_sub(1) / 2;
        if body.len() != (bits + 5) / 6 {
            return Err(malformed("wrong length for the given order"));
        }
        if body.iter().any(|b| !(OFFSET..=126).contains(b)) {
            return Err(malformed("data byte out of range"));
        }
        let bit_at = |i: usize| (body[i / 6] - OFFSET) >> (5 - i % 6) & 1 == 1;
        let mut g = Graph::new(n);
        let mut i = 0;
        for v in 1..n {
            for u in 0..v {
                if bit_at(i) {
                    g.add_edge(u, v);
                }
                i += 1;
            }
        }
        Ok(g)
    }

    /// Encodes the graph in graph6 format without a trailing newline.
    pub fn to_graph6(&self) -> String {
        let n = self.n();
        let mut out = if n < LONG_ORDER {
            vec![OFFSET + n as u8]
        } else {
            // every supported order fits the 18 bits of the four-byte prefix
            let mut prefix = vec![LONG_SIZE];
            prefix.extend((0..3).rev().map(|i| OFFSET + (n >> (6 * i) & 0x3f) as u8));
            prefix
        };
        let mut chunk = 0u8;
        let mut filled = 0;
        for v in 1..n {
            for u in 0..v {
                chunk = chunk << 1 | self.has_edge(u, v) as u8;
                filled += 1;
                if filled == 6 {
                    out.push(OFFSET + chunk);
                    chunk = 0;
                    filled = 0;
                }
            }
        }
        if filled > 0 {
            out.push(OFFSET + (chunk << (6 - filled)));
        }
        out.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{graph::*, Error};
    use quickcheck_macros::quickcheck;

    #[test]
    fn known_encodings() {
        assert_eq!(Graph::new(0).to_graph6(), "?");
        assert_eq!(Graph::new(1).to_graph6(), "@");
        assert_eq!(Graph::complete(2).to_graph6(), "A_");
        assert_eq!(Graph::complete(3).to_graph6(), "Bw");
        assert_eq!(Graph::complete(4).to_graph6(), "C~");
        assert_eq!(Graph::path(4).to_graph6(), "Ch");
        assert_eq!(Graph::cycle(5).to_graph6(), "Dhc");
        assert_eq!(Graph::from_graph6("C~\n"), Ok(Graph::complete(4)));
        assert_eq!(Graph::from_graph6("Dhc"), Ok(Graph::cycle(5)));
    }

    #[test]
    fn long_size_prefix() {
        if MAX_VERTICES < 64 {
            return;
        }
        let g = Graph::new(63);
        let encoded = g.to_graph6();
        assert!(encoded.starts_with("~??~"));
        assert_eq!(encoded.len(), 4 + (63 * 62 / 2 + 5) / 6);
        assert_eq!(Graph::from_graph6(&encoded), Ok(g));
        for n in [63, 64] {
            let k = Graph::complete(n);
            assert_eq!(Graph::from_graph6(&k.to_graph6()), Ok(k));
        }
        assert!(Graph::complete(64).to_graph6().starts_with("~?@?"));
    }

    #[test]
    fn rejects_orders_above_the_maximum() {
        let too_many = |input: &str| {
            matches!(
                Graph::from_graph6(input),
                Err(Error::TooManyVertices { .. })
            )
        };
        // 65 in the four-byte prefix and 2^36 - 1 in the eight-byte one
        assert!(too_many("~?@@"));
        assert!(too_many("~~~~~~~~"));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "C", "C~~", "C\x20", "~??", "~~???", "~?\x20?"] {
            assert!(
                matches!(
                    Graph::from_graph6(input),
                    Err(Error::MalformedGraph6 { .. })
                ),
                "{input:?}"
            );
        }
    }

    #[quickcheck]
    fn decode_inverts_encode(g: Graph) -> bool {
        Graph::from_graph6(&g.to_graph6()) == Ok(g)
    }
}
