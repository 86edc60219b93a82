//! Fold pattern lookup
//!
//! A fold pattern maps every slot to a grid cell and records whether that
//! cell's row is printed upside down. The one-sheet eight-page zine is the
//! only pattern shipped; it is a constant and cannot be altered by callers.

use crate::types::Slot;

use super::{GridPosition, SlotPosition};

/// A fixed imposition grid for one folded sheet
#[derive(Debug, PartialEq, Eq)]
pub struct FoldPattern {
    pub name: &'static str,
    pub cols: u32,
    pub rows: u32,
    /// Row-major: all cells of row 0 first, left to right
    slots: &'static [SlotPosition],
}

const fn at(slot: Slot, row: u32, col: u32, inverted: bool) -> SlotPosition {
    SlotPosition {
        slot,
        grid_pos: GridPosition::new(row, col),
        inverted,
    }
}

impl FoldPattern {
    /// The standard eight-page zine fold.
    ///
    /// ```text
    /// ┌──────┬──────┬──────┬──────┐
    /// │  2   │  1   │FRONT │ BACK │  row 0, printed upside down
    /// ├──────┼──────┼──────┼──────┤
    /// │  3   │  4   │  5   │  6   │  row 1, upright
    /// └──────┴──────┴──────┴──────┘
    /// ```
    pub const EIGHT_PAGE: FoldPattern = FoldPattern {
        name: "eight-page",
        cols: 4,
        rows: 2,
        slots: &[
            at(Slot::Page2, 0, 0, true),
            at(Slot::Page1, 0, 1, true),
            at(Slot::Front, 0, 2, true),
            at(Slot::Back, 0, 3, true),
            at(Slot::Page3, 1, 0, false),
            at(Slot::Page4, 1, 1, false),
            at(Slot::Page5, 1, 2, false),
            at(Slot::Page6, 1, 3, false),
        ],
    };

    /// All slot positions in grid order
    pub fn positions(&self) -> &'static [SlotPosition] {
        self.slots
    }

    /// Look up where a slot is placed
    pub fn position(&self, slot: Slot) -> Option<SlotPosition> {
        self.slots.iter().copied().find(|p| p.slot == slot)
    }

    /// Slots of one row, left to right
    pub fn row(&self, row: u32) -> impl Iterator<Item = Slot> + '_ {
        self.slots
            .iter()
            .filter(move |p| p.grid_pos.row == row)
            .map(|p| p.slot)
    }

    /// Whether the given row is printed upside down
    pub fn is_row_inverted(&self, row: u32) -> bool {
        self.slots
            .iter()
            .any(|p| p.grid_pos.row == row && p.inverted)
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_page_rows() {
        let pattern = &FoldPattern::EIGHT_PAGE;

        let top: Vec<_> = pattern.row(0).collect();
        assert_eq!(top, vec![Slot::Page2, Slot::Page1, Slot::Front, Slot::Back]);

        let bottom: Vec<_> = pattern.row(1).collect();
        assert_eq!(
            bottom,
            vec![Slot::Page3, Slot::Page4, Slot::Page5, Slot::Page6]
        );
    }

    #[test]
    fn test_eight_page_inversion() {
        let pattern = &FoldPattern::EIGHT_PAGE;
        assert!(pattern.is_row_inverted(0));
        assert!(!pattern.is_row_inverted(1));

        for position in pattern.positions() {
            assert_eq!(position.inverted, position.grid_pos.row == 0);
        }
    }

    #[test]
    fn test_every_slot_placed_once() {
        let pattern = &FoldPattern::EIGHT_PAGE;
        assert_eq!(pattern.positions().len(), pattern.cell_count());

        for slot in Slot::ALL {
            let count = pattern
                .positions()
                .iter()
                .filter(|p| p.slot == slot)
                .count();
            assert_eq!(count, 1, "{slot} should appear exactly once");
        }
    }

    #[test]
    fn test_position_lookup() {
        let front = FoldPattern::EIGHT_PAGE.position(Slot::Front).unwrap();
        assert_eq!(front.grid_pos, GridPosition::new(0, 2));
        assert!(front.inverted);

        let six = FoldPattern::EIGHT_PAGE.position(Slot::Page6).unwrap();
        assert_eq!(six.grid_pos, GridPosition::new(1, 3));
        assert!(!six.inverted);
    }
}
