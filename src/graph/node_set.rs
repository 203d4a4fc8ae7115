use smallvec::SmallVec;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of node ids drawn from the universe `0..universe`, stored as a bitset.
///
/// Graphs of up to 64 nodes fit inline, so cloning a set per search branch does not allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeSet {
    universe: usize,
    words: SmallVec<[u64; 1]>,
}

impl NodeSet {
    /// Construct an empty set over the universe `0..universe`.
    pub fn new(universe: usize) -> Self {
        Self { universe, words: SmallVec::from_elem(0, universe.div_ceil(WORD_BITS)) }
    }

    /// Construct a set over `0..universe` containing the given nodes.
    pub fn from_nodes(universe: usize, nodes: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(universe);
        nodes.into_iter().for_each(|node| { set.insert(node); });
        set
    }

    /// Construct the set containing every node of the universe.
    pub fn full(universe: usize) -> Self { Self::from_nodes(universe, 0..universe) }

    /// Size of the universe the set draws its nodes from.
    #[inline] pub fn universe(&self) -> usize { self.universe }

    /// Number of nodes in the set.
    #[inline] pub fn len(&self) -> usize { self.words.iter().map(|w| w.count_ones() as usize).sum() }

    #[inline] pub fn is_empty(&self) -> bool { self.words.iter().all(|&w| w == 0) }

    /// Check whether `node` is in the set. Nodes outside the universe are never members.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node < self.universe && self.words[node / WORD_BITS] & (1 << (node % WORD_BITS)) != 0
    }

    /// Insert `node`, returning true if it was not already present.
    pub fn insert(&mut self, node: usize) -> bool {
        assert!(node < self.universe, "node {} out of range [0, {})", node, self.universe);
        let (word, bit) = (node / WORD_BITS, 1u64 << (node % WORD_BITS));
        let absent = self.words[word] & bit == 0;
        self.words[word] |= bit;
        absent
    }

    /// Remove `node`, returning true if it was present.
    pub fn remove(&mut self, node: usize) -> bool {
        if !self.contains(node) { return false }
        self.words[node / WORD_BITS] &= !(1u64 << (node % WORD_BITS));
        true
    }

    /// Copy of this set with `node` added. The receiver is left untouched.
    #[inline]
    pub fn with(&self, node: usize) -> Self {
        let mut set = self.clone();
        set.insert(node);
        set
    }

    /// Add every member of `other` to this set.
    pub fn union_with(&mut self, other: &NodeSet) {
        assert!(self.universe == other.universe, "node sets must share a universe");
        self.words.iter_mut().zip(other.words.iter()).for_each(|(a, b)| *a |= b);
    }

    /// Remove every member of `other` from this set.
    pub fn difference_with(&mut self, other: &NodeSet) {
        assert!(self.universe == other.universe, "node sets must share a universe");
        self.words.iter_mut().zip(other.words.iter()).for_each(|(a, b)| *a &= !b);
    }

    /// Check that the two sets share no node.
    pub fn is_disjoint(&self, other: &NodeSet) -> bool {
        self.words.iter().zip(other.words.iter()).all(|(a, b)| a & b == 0)
    }

    /// Check that every member of this set is in `other`.
    pub fn is_subset(&self, other: &NodeSet) -> bool {
        self.words.iter().enumerate()
            .all(|(i, &a)| a & !other.words.get(i).copied().unwrap_or(0) == 0)
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            std::iter::successors((word != 0).then_some(word), |&w| {
                let rest = w & (w - 1);
                (rest != 0).then_some(rest)
            })
            .map(move |w| i * WORD_BITS + w.trailing_zeros() as usize)
        })
    }

    /// Members in ascending order.
    #[inline] pub fn to_vec(&self) -> Vec<usize> { self.iter().collect() }
}
