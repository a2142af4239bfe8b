/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Dial rings and discs.
    pub const BACKDROP: ZIndex = ZIndex(0);
    /// Phrase and caption text.
    pub const LABEL: ZIndex = ZIndex(10);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
