use std::ops::Range;

use crate::paint::Color;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands execute in insertion order. `clear()` keeps capacity, so a list
/// reused across frames stops allocating after the first one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn push_clear(&mut self, color: Color) {
        self.push(DrawCmd::Clear(color));
    }

    #[inline]
    pub fn push_draw(&mut self, vertices: Range<u32>) {
        self.push(DrawCmd::Draw { vertices });
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push_clear(Color::rgb(0.0, 0.0, 0.0));
        list.push_draw(0..3);

        assert_eq!(
            list.commands(),
            &[
                DrawCmd::Clear(Color::rgb(0.0, 0.0, 0.0)),
                DrawCmd::Draw { vertices: 0..3 },
            ]
        );
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut list = DrawList::new();
        list.push_draw(0..3);
        let cap = list.cmds.capacity();

        list.clear();
        assert!(list.commands().is_empty());
        assert_eq!(list.cmds.capacity(), cap);
    }
}
