//! Cache sets and lines.
//!
//! A [`CacheSet`] is a bounded container of at most `ways` [`Line`]s. Lines are kept in
//! insertion order, which is the deterministic iteration order policies scan; an evicted
//! line's slot is reused by the incoming line so the order of survivors never changes.

/// One resident block: its tag and the recency stamp of its latest access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    /// Block tag.
    pub tag: u64,
    /// Global access counter value when this line was last touched.
    pub recency: u64,
}

/// A fixed-capacity group of lines selected by one index value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSet {
    lines: Vec<Line>,
    ways: usize,
}

impl CacheSet {
    /// Creates an empty set holding at most `ways` lines.
    ///
    /// Storage grows with occupancy, so a very wide set costs nothing until it fills.
    pub const fn new(ways: usize) -> Self {
        Self {
            lines: Vec::new(),
            ways,
        }
    }

    /// Resident lines in iteration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of resident lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no line is resident.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Capacity of the set (the cache's associativity).
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Returns `true` once every way holds a line.
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.ways
    }

    /// Position of the line holding `tag`, if resident.
    pub fn position(&self, tag: u64) -> Option<usize> {
        self.lines.iter().position(|line| line.tag == tag)
    }

    /// Returns `true` if a line with `tag` is resident.
    pub fn contains(&self, tag: u64) -> bool {
        self.position(tag).is_some()
    }

    /// Recency stamp of `tag`, if resident.
    pub fn recency_of(&self, tag: u64) -> Option<u64> {
        self.position(tag).map(|way| self.lines[way].recency)
    }

    /// Resident tags in iteration order.
    pub fn tags(&self) -> impl Iterator<Item = u64> + '_ {
        self.lines.iter().map(|line| line.tag)
    }

    /// Restamps the line at `way`.
    pub(crate) fn touch(&mut self, way: usize, recency: u64) {
        self.lines[way].recency = recency;
    }

    /// Appends a line into a free way.
    pub(crate) fn insert(&mut self, line: Line) {
        debug_assert!(!self.is_full(), "insert into a full set");
        debug_assert!(!self.contains(line.tag), "duplicate tag {:#x}", line.tag);
        self.lines.push(line);
    }

    /// Overwrites the line at `way`, returning the evicted line.
    pub(crate) fn replace(&mut self, way: usize, line: Line) -> Line {
        std::mem::replace(&mut self.lines[way], line)
    }
}
