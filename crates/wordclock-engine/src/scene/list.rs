use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so equal z stays stable.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::text::FontId;

    fn radii(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(c) => Some(c.radius),
                DrawCmd::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(5), Vec2::zero(), 1.0, Color::black());
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 2.0, Color::black());
        list.push_solid_circle(ZIndex(5), Vec2::zero(), 3.0, Color::black());
        list.push_solid_circle(ZIndex(0), Vec2::zero(), 4.0, Color::black());
        assert_eq!(radii(&mut list), [2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(1), Vec2::zero(), 1.0, Color::black());
        list.clear();
        assert!(list.is_empty());
        list.push_solid_circle(ZIndex(1), Vec2::zero(), 2.0, Color::black());
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(radii(&mut list), [2.0]);
    }

    #[test]
    fn text_and_circles_share_the_stream() {
        let mut list = DrawList::new();
        list.push_text(ZIndex::LABEL, "IT'S", FontId(0), 14.0, Color::black(), Vec2::zero());
        list.push_solid_circle(ZIndex::BACKDROP, Vec2::zero(), 1.0, Color::black());
        assert_eq!(list.len(), 2);
        let first = list.iter_in_paint_order().next().map(|i| i.key.z);
        assert_eq!(first, Some(ZIndex::BACKDROP));
    }
}
