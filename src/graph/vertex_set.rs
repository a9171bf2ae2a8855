use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub,
    SubAssign,
};

/// The machine word backing a [VertexSet].
#[cfg(not(feature = "narrow-word"))]
pub type Word = u64;
/// The machine word backing a [VertexSet].
#[cfg(feature = "narrow-word")]
pub type Word = u32;

/// Size of the universe $W$ of a [VertexSet], and thus the maximum order of a graph.
pub const MAX_VERTICES: usize = Word::BITS as usize;

/// A set of small non-negative integers (vertices or colors) packed into one [Word].
///
/// Only elements below [MAX_VERTICES] may ever be stored.
/// Iteration is always in ascending order.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexSet(Word);

#[inline(always)]
fn bit(x: usize) -> Word {
    debug_assert!(x < MAX_VERTICES, "element {x} out of range");
    (1 as Word) << x
}

impl VertexSet {
    pub const EMPTY: VertexSet = VertexSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn singleton(x: usize) -> Self {
        Self(bit(x))
    }

    /// The set $\{0, 1, \ldots, k-1\}$.
    pub fn range(k: usize) -> Self {
        debug_assert!(k <= MAX_VERTICES);
        if k >= MAX_VERTICES {
            Self(Word::MAX)
        } else {
            Self(bit(k) - 1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, x: usize) -> bool {
        self.0 & bit(x) != 0
    }

    pub fn insert(&mut self, x: usize) {
        self.0 |= bit(x);
    }

    /// Removes an element which must be present.
    pub fn remove(&mut self, x: usize) {
        debug_assert!(self.contains(x), "{x} is not in {self}");
        self.discard(x);
    }

    /// Removes an element if present.
    pub fn discard(&mut self, x: usize) {
        self.0 &= !bit(x);
    }

    pub fn toggle(&mut self, x: usize) {
        self.0 ^= bit(x);
    }

    pub fn is_subset(&self, other: VertexSet) -> bool {
        (*self - other).is_empty()
    }

    pub fn is_superset(&self, other: VertexSet) -> bool {
        other.is_subset(*self)
    }

    pub fn min(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    pub fn max(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(MAX_VERTICES - 1 - self.0.leading_zeros() as usize)
        }
    }

    /// Removes and returns the lowest element.
    pub fn pop(&mut self) -> Option<usize> {
        let x = VertexSet::min(self)?;
        self.0 &= self.0 - 1;
        Some(x)
    }

    /// Elements strictly greater than `x`.
    pub fn above(&self, x: usize) -> VertexSet {
        if x + 1 >= MAX_VERTICES {
            Self::EMPTY
        } else {
            Self(self.0 & (Word::MAX << (x + 1)))
        }
    }

    /// Elements strictly less than `x`.
    pub fn below(&self, x: usize) -> VertexSet {
        *self & Self::range(x.min(MAX_VERTICES))
    }

    /// Removes `x` and shifts every larger element down by one.
    pub fn delete_element(&self, x: usize) -> VertexSet {
        let low = self.below(x).0;
        let high = self.above(x).0 >> 1;
        Self(low | high)
    }

    pub fn iter(&self) -> Iter {
        Iter(*self)
    }

    /// All $2^{|S|}$ subsets, starting with the empty set.
    pub fn subsets(&self) -> Subsets {
        Subsets {
            universe: self.0,
            next: Some(0),
        }
    }

    /// All subsets with exactly `k` elements.
    pub fn combinations(&self, k: usize) -> Combinations {
        Combinations::new(*self, k)
    }
}

impl std::fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<usize> for VertexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut res = Self::EMPTY;
        for x in iter {
            res.insert(x);
        }
        res
    }
}

impl<const N: usize> From<[usize; N]> for VertexSet {
    fn from(xs: [usize; N]) -> Self {
        xs.into_iter().collect()
    }
}

impl IntoIterator for VertexSet {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self)
    }
}

impl IntoIterator for &VertexSet {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(*self)
    }
}

macro_rules! set_op {
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $tr for VertexSet {
            type Output = VertexSet;

            fn $method(self, other: VertexSet) -> VertexSet {
                let $a = self.0;
                let $b = other.0;
                VertexSet($body)
            }
        }

        impl $tr_assign for VertexSet {
            fn $method_assign(&mut self, other: VertexSet) {
                *self = $tr::$method(*self, other);
            }
        }
    };
}

set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
set_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
set_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);
set_op!(Sub, sub, SubAssign, sub_assign, |a, b| a & !b);

impl Add<usize> for VertexSet {
    type Output = VertexSet;

    fn add(mut self, x: usize) -> VertexSet {
        self.insert(x);
        self
    }
}

impl AddAssign<usize> for VertexSet {
    fn add_assign(&mut self, x: usize) {
        self.insert(x);
    }
}

impl Sub<usize> for VertexSet {
    type Output = VertexSet;

    fn sub(mut self, x: usize) -> VertexSet {
        self.discard(x);
        self
    }
}

impl SubAssign<usize> for VertexSet {
    fn sub_assign(&mut self, x: usize) {
        self.discard(x);
    }
}

/// Ascending iterator over the elements of a [VertexSet].
#[derive(Clone)]
pub struct Iter(VertexSet);

impl Iterator for Iter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.0.len();
        (l, Some(l))
    }
}

impl ExactSizeIterator for Iter {}

/// Iterator over all subsets of a [VertexSet].
pub struct Subsets {
    universe: Word,
    next: Option<Word>,
}

impl Iterator for Subsets {
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        let cur = self.next?;
        // Carry-propagating increment restricted to the bits of the universe.
        let nxt = cur.wrapping_sub(self.universe) & self.universe;
        self.next = if nxt == 0 { None } else { Some(nxt) };
        Some(VertexSet(cur))
    }
}

/// Iterator over all `k`-subsets of a [VertexSet].
///
/// Subsets are produced by Gosper's hack over the positions of the elements,
/// so the order is colex over positions, not sorted by value.
pub struct Combinations {
    elements: [u8; MAX_VERTICES],
    len: usize,
    positions: Option<u128>,
}

impl Combinations {
    fn new(set: VertexSet, k: usize) -> Self {
        let mut elements = [0u8; MAX_VERTICES];
        let mut len = 0;
        for x in set {
            elements[len] = x as u8;
            len += 1;
        }
        let positions = if k > len { None } else { Some((1u128 << k) - 1) };
        Self {
            elements,
            len,
            positions,
        }
    }
}

impl Iterator for Combinations {
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        let cur = self.positions?;
        let mut res = VertexSet::EMPTY;
        let mut rest = cur;
        while rest != 0 {
            let i = rest.trailing_zeros() as usize;
            res.insert(self.elements[i] as usize);
            rest &= rest - 1;
        }
        self.positions = if cur == 0 {
            None
        } else {
            let lowest = cur & cur.wrapping_neg();
            let ripple = cur + lowest;
            let nxt = ripple | (((cur ^ ripple) >> 2) / lowest);
            if nxt >> self.len != 0 {
                None
            } else {
                Some(nxt)
            }
        };
        Some(res)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for VertexSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(Word::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(VertexSet))
    }
}
