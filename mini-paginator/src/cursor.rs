//! Wrapping forward/backward cursor over a fixed page list.

use crate::error::PaginatorError;

/// A non-empty, fixed-length list with a current position that wraps at both ends.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Cursor<T> {
    /// Wrap `items`, starting at index 0.
    ///
    /// Fails with [`PaginatorError::EmptyPages`] when `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, PaginatorError> {
        if items.is_empty() {
            return Err(PaginatorError::EmptyPages);
        }

        Ok(Self { items, index: 0 })
    }

    /// Step to the next item, wrapping from the last index back to 0.
    pub fn forward(&mut self) {
        self.index = if self.index + 1 > self.max_index() {
            0
        } else {
            self.index + 1
        };
    }

    /// Step to the previous item, wrapping from 0 to the last index.
    pub fn back(&mut self) {
        self.index = match self.index.checked_sub(1) {
            Some(previous) => previous,
            None => self.max_index(),
        };
    }

    /// Jump to `index`, leaving the cursor untouched when it is out of range.
    pub fn set(&mut self, index: usize) -> Result<(), PaginatorError> {
        if index > self.max_index() {
            return Err(PaginatorError::OutOfRange {
                index,
                len: self.len(),
            });
        }

        self.index = index;
        Ok(())
    }

    /// The item at the current index.
    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_zero() {
        let cursor = Cursor::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(cursor.index(), 0);
        assert_eq!(*cursor.current(), 'a');
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            Cursor::<u8>::new(Vec::new()),
            Err(PaginatorError::EmptyPages)
        ));
    }

    #[test]
    fn full_lap_returns_to_start() {
        for len in 1..=6 {
            let mut cursor = Cursor::new((0..len).collect::<Vec<_>>()).unwrap();
            for _ in 0..len {
                cursor.forward();
            }
            assert_eq!(cursor.index(), 0, "forward lap of {len}");

            for _ in 0..len {
                cursor.back();
            }
            assert_eq!(cursor.index(), 0, "backward lap of {len}");
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut cursor = Cursor::new(vec![10, 20, 30]).unwrap();
        cursor.back();
        assert_eq!(*cursor.current(), 30);
        cursor.forward();
        assert_eq!(*cursor.current(), 10);
    }

    #[test]
    fn set_in_range_moves_cursor() {
        let mut cursor = Cursor::new(vec!["p0", "p1", "p2", "p3"]).unwrap();
        for index in 0..cursor.len() {
            cursor.set(index).unwrap();
            assert_eq!(*cursor.current(), format!("p{index}"));
        }
    }

    #[test]
    fn set_out_of_range_keeps_position() {
        let mut cursor = Cursor::new(vec![1, 2, 3]).unwrap();
        cursor.set(1).unwrap();

        let err = cursor.set(3).unwrap_err();
        assert!(matches!(err, PaginatorError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(*cursor.current(), 2);
    }
}
