//! Grid cursor.
//!
//! Movement clamps at the edges. The index is row-major, matching the deck
//! order in a snapshot.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    rows: u8,
    cols: u8,
    row: u8,
    col: u8,
}

impl GridCursor {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row as usize * self.cols as usize + self.col as usize
    }

    pub fn move_by(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => {
                if self.row + 1 < self.rows {
                    self.row += 1;
                }
            }
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => {
                if self.col + 1 < self.cols {
                    self.col += 1;
                }
            }
        }
    }

    /// Adopt a new grid shape, keeping the cursor inside it.
    pub fn resize(&mut self, rows: u8, cols: u8) {
        if (rows, cols) == (self.rows, self.cols) {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.row = self.row.min(rows.saturating_sub(1));
        self.col = self.col.min(cols.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_and_clamps() {
        let mut cursor = GridCursor::new(2, 3);
        cursor.move_by(Direction::Up);
        cursor.move_by(Direction::Left);
        assert_eq!(cursor.index(), 0);

        cursor.move_by(Direction::Right);
        cursor.move_by(Direction::Right);
        cursor.move_by(Direction::Right);
        assert_eq!((cursor.row(), cursor.col()), (0, 2));

        cursor.move_by(Direction::Down);
        cursor.move_by(Direction::Down);
        assert_eq!((cursor.row(), cursor.col()), (1, 2));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_resize_keeps_cursor_inside() {
        let mut cursor = GridCursor::new(4, 5);
        for _ in 0..4 {
            cursor.move_by(Direction::Down);
            cursor.move_by(Direction::Right);
        }
        assert_eq!(cursor.index(), 3 * 5 + 4);

        cursor.resize(2, 3);
        assert_eq!((cursor.row(), cursor.col()), (1, 2));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_empty_grid() {
        let mut cursor = GridCursor::default();
        cursor.move_by(Direction::Down);
        cursor.move_by(Direction::Right);
        assert_eq!(cursor.index(), 0);
    }
}
