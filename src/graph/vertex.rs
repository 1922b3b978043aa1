/// ID for vertices, which are essentially `usize`.
///
/// Real vertices are labeled `1..=N`; `VertexId::NONE` stands for "no vertex".
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate dense `VertexId`s, starting from 1.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(VertexId::FIRST.0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }

    /// How many ids have been handed out.
    pub fn issued(&self) -> usize {
        self.0 - VertexId::FIRST.0
    }
}

impl VertexId {
    pub const NONE: VertexId = VertexId(0);
    pub const FIRST: VertexId = VertexId(1);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
