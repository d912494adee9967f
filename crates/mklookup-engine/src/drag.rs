//! Drag-reorder engine for the details panel.
//!
//! Rows are placed by a layout pass ([`layout_rows`]) that is re-run after
//! every render and every reinsertion, so the geometry used for the next
//! pointer move always matches what is on screen. While a drag is active the
//! dragged row is reinserted immediately on each pointer move; dropping only
//! ends the session.

/// Screen area holding the detail rows, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: u16) -> bool {
        y >= self.top && y < self.top.saturating_add(self.height)
    }
}

/// Vertical extent of one row. `top` may be above the viewport when the
/// panel is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBox {
    pub index: usize,
    pub top: i32,
    pub height: u16,
}

impl RowBox {
    pub fn center(&self) -> f32 {
        self.top as f32 + f32::from(self.height) / 2.0
    }

    pub fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.top + i32::from(self.height)
    }
}

/// Stacks rows from the viewport top, shifted up by `scroll` cells.
pub fn layout_rows(
    heights: impl IntoIterator<Item = u16>,
    viewport: Viewport,
    scroll: usize,
) -> Vec<RowBox> {
    let mut top = i32::from(viewport.top) - scroll as i32;
    heights
        .into_iter()
        .enumerate()
        .map(|(index, height)| {
            let row = RowBox { index, top, height };
            top += i32::from(height);
            row
        })
        .collect()
}

/// Row the dragged row should be inserted before, or `None` for the end.
///
/// Picks the row whose center is below the pointer and closest to it. The
/// dragged row itself is never a candidate.
pub fn insertion_point(boxes: &[RowBox], dragged: usize, pointer_y: f32) -> Option<usize> {
    let mut closest: Option<(f32, usize)> = None;
    for row in boxes.iter().filter(|row| row.index != dragged) {
        let offset = pointer_y - row.center();
        if offset < 0.0 && closest.is_none_or(|(best, _)| offset > best) {
            closest = Some((offset, row.index));
        }
    }
    closest.map(|(_, index)| index)
}

/// Final index of the dragged row once it is inserted before `before`.
pub fn target_index(len: usize, dragged: usize, before: Option<usize>) -> usize {
    match before {
        Some(before) if before > dragged => before - 1,
        Some(before) => before,
        None => len.saturating_sub(1),
    }
}

/// Moves one element, shifting the ones in between.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub from: usize,
    pub to: usize,
}

/// State between drag-start and drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub dragged: usize,
    /// Row currently under the pointer (drag-over highlight).
    pub hover: Option<usize>,
}

impl DragSession {
    /// Starts dragging the row under `y`, if any.
    pub fn start(boxes: &[RowBox], y: u16) -> Option<Self> {
        let y = i32::from(y);
        boxes.iter().find(|row| row.contains(y)).map(|row| Self {
            dragged: row.index,
            hover: None,
        })
    }

    /// Where the dragged row goes for a pointer at `y`. Updates the session
    /// to track the row at its new index; the caller applies the move.
    pub fn reorder(&mut self, boxes: &[RowBox], y: u16) -> Option<RowMove> {
        let before = insertion_point(boxes, self.dragged, f32::from(y));
        let to = target_index(boxes.len(), self.dragged, before);
        if to == self.dragged {
            return None;
        }
        let row_move = RowMove {
            from: self.dragged,
            to,
        };
        self.dragged = to;
        Some(row_move)
    }

    /// Pointer enter/leave highlight. Purely visual.
    pub fn update_hover(&mut self, boxes: &[RowBox], y: u16) {
        let y = i32::from(y);
        self.hover = boxes
            .iter()
            .find(|row| row.contains(y) && row.index != self.dragged)
            .map(|row| row.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(n: usize, top: u16) -> Vec<RowBox> {
        layout_rows(std::iter::repeat_n(1, n), Viewport::new(top, 20), 0)
    }

    #[test]
    fn test_layout_stacks_rows() {
        let boxes = layout_rows([1, 2, 1], Viewport::new(5, 10), 0);
        let tops: Vec<i32> = boxes.iter().map(|b| b.top).collect();
        assert_eq!(tops, vec![5, 6, 8]);
        assert_eq!(boxes[1].center(), 7.0);
    }

    #[test]
    fn test_layout_applies_scroll() {
        let boxes = layout_rows([1, 1, 1], Viewport::new(5, 10), 2);
        assert_eq!(boxes[0].top, 3);
        assert_eq!(boxes[2].top, 5);
    }

    #[test]
    fn test_insertion_before_row_whose_center_is_just_below() {
        // Row i spans [10 + i, 11 + i) with center 10.5 + i.
        let boxes = uniform(6, 10);
        for n in 1..6 {
            // Strictly between the centers of row n-1 and row n.
            let y = 10.0 + n as f32;
            assert_eq!(insertion_point(&boxes, 0, y), Some(n));
        }
    }

    #[test]
    fn test_pointer_below_all_rows_inserts_at_end() {
        let boxes = uniform(4, 10);
        assert_eq!(insertion_point(&boxes, 1, 30.0), None);
        assert_eq!(target_index(4, 1, None), 3);
    }

    #[test]
    fn test_dragged_row_is_not_a_candidate() {
        let boxes = uniform(3, 0);
        // Pointer above row 1's center only; row 1 is being dragged.
        assert_eq!(insertion_point(&boxes, 1, 1.0), Some(2));
    }

    #[test]
    fn test_unsorted_boxes_still_pick_nearest() {
        let mut boxes = uniform(4, 0);
        boxes.reverse();
        assert_eq!(insertion_point(&boxes, 3, 1.0), Some(1));
    }

    #[test]
    fn test_drag_down_then_up() {
        let mut rows = vec!["a", "b", "c", "d"];
        let mut boxes = uniform(rows.len(), 0);
        let mut session = DragSession::start(&boxes, 0).unwrap();
        assert_eq!(session.dragged, 0);

        // Pointer on row 2's top edge: insert before c.
        let mv = session.reorder(&boxes, 2).unwrap();
        move_item(&mut rows, mv.from, mv.to);
        assert_eq!(rows, vec!["b", "a", "c", "d"]);
        assert_eq!(session.dragged, 1);

        boxes = uniform(rows.len(), 0);
        // Pointer past the last row: move to the end.
        let mv = session.reorder(&boxes, 9).unwrap();
        move_item(&mut rows, mv.from, mv.to);
        assert_eq!(rows, vec!["b", "c", "d", "a"]);

        boxes = uniform(rows.len(), 0);
        // Back to the top.
        let mv = session.reorder(&boxes, 0).unwrap();
        move_item(&mut rows, mv.from, mv.to);
        assert_eq!(rows, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_move_when_target_is_current_position() {
        let boxes = uniform(3, 0);
        let mut session = DragSession::start(&boxes, 1).unwrap();
        // Insert before row 2 from index 1 keeps it in place.
        assert_eq!(session.reorder(&boxes, 2), None);
        assert_eq!(session.dragged, 1);
    }

    #[test]
    fn test_start_outside_rows() {
        let boxes = uniform(2, 5);
        assert!(DragSession::start(&boxes, 4).is_none());
        assert!(DragSession::start(&boxes, 7).is_none());
    }

    #[test]
    fn test_hover_excludes_dragged_row() {
        let boxes = uniform(3, 0);
        let mut session = DragSession::start(&boxes, 0).unwrap();
        session.update_hover(&boxes, 0);
        assert_eq!(session.hover, None);
        session.update_hover(&boxes, 2);
        assert_eq!(session.hover, Some(2));
        session.update_hover(&boxes, 10);
        assert_eq!(session.hover, None);
    }
}
