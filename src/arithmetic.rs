use std::io::Write;

use crate::error::{DemoError, Result};

// ============================================================================
// Part 1: A bounds-aware element cursor
// ============================================================================

/// A position inside a slice: what `ptr.add(n)` / `ptr.offset_from(p)` do on
/// raw pointers, but in element units and refusing to leave the slice.
#[derive(Debug)]
pub struct ElementCursor<'a, T> {
    elements: &'a [T],
    index: usize,
}

// Manual impls: a derive would demand `T: Clone`.
impl<T> Clone for ElementCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementCursor<'_, T> {}

impl<'a, T> ElementCursor<'a, T> {
    pub fn at(elements: &'a [T], index: usize) -> Option<Self> {
        (index < elements.len()).then_some(ElementCursor { elements, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves by `delta` elements; `None` if that lands outside the slice.
    pub fn offset(&self, delta: isize) -> Option<Self> {
        let index = self.index.checked_add_signed(delta)?;
        Self::at(self.elements, index)
    }

    /// Like `offset`, but reports where it went wrong.
    pub fn try_offset(&self, delta: isize) -> Result<Self> {
        self.offset(delta).ok_or(DemoError::OutOfBounds {
            index: self.index,
            offset: delta,
            len: self.elements.len(),
        })
    }

    pub fn get(&self) -> &'a T {
        &self.elements[self.index]
    }

    /// Signed distance `self - origin`, in elements.
    pub fn distance_from(&self, origin: &Self) -> isize {
        self.index as isize - origin.index as isize
    }
}

// ============================================================================
// Part 2: Pointer arithmetic demo
// ============================================================================

pub fn demonstrate_pointer_arithmetic(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_pointer_arithmetic ===")?;

    let integer_array = [10, 20, 30, 40, 50];
    let last = integer_array.len() - 1;

    let pointer_to_start = ElementCursor::at(&integer_array[..], 0).ok_or(DemoError::OutOfBounds {
        index: 0,
        offset: 0,
        len: integer_array.len(),
    })?;
    let pointer_to_end = pointer_to_start.try_offset(last as isize)?;

    writeln!(out, "pointer_to_start: {}", pointer_to_start.get())?;
    writeln!(out, "pointer_to_start + 2: {}", pointer_to_start.try_offset(2)?.get())?;

    writeln!(out, "pointer_to_end: {}", pointer_to_end.get())?;
    writeln!(out, "pointer_to_end - 2: {}", pointer_to_end.try_offset(-2)?.get())?;

    let distance = pointer_to_end.distance_from(&pointer_to_start);
    writeln!(out, "Distance: {} elements", distance)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pointer_arithmetic_output() {
        let mut buffer = Vec::new();
        demonstrate_pointer_arithmetic(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "=== demonstrate_pointer_arithmetic ===\n\
             pointer_to_start: 10\n\
             pointer_to_start + 2: 30\n\
             pointer_to_end: 50\n\
             pointer_to_end - 2: 30\n\
             Distance: 4 elements\n\
             \n"
        );
    }

    #[test]
    fn test_cursor_rejects_out_of_bounds() {
        let data = [1, 2, 3];
        assert!(ElementCursor::at(&data[..], 3).is_none());

        let start = ElementCursor::at(&data[..], 0).unwrap();
        assert!(start.offset(-1).is_none());
        assert!(start.offset(10).is_none());
        assert_eq!(*start.offset(2).unwrap().get(), 3);
    }

    #[test]
    fn test_try_offset_reports_context() {
        let data = [1, 2, 3];
        let end = ElementCursor::at(&data[..], 2).unwrap();
        let err = end.try_offset(1).unwrap_err();
        assert!(matches!(
            err,
            DemoError::OutOfBounds { index: 2, offset: 1, len: 3 }
        ));
    }

    #[test]
    fn test_empty_slice_has_no_positions() {
        let data: [i32; 0] = [];
        assert!(ElementCursor::at(&data[..], 0).is_none());
    }

    proptest! {
        #[test]
        fn prop_distance_matches_index_difference(
            data in prop::collection::vec(any::<i32>(), 1..64),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let i = a.index(data.len());
            let j = b.index(data.len());
            let from = ElementCursor::at(&data[..], i).unwrap();
            let to = ElementCursor::at(&data[..], j).unwrap();

            prop_assert_eq!(to.distance_from(&from), j as isize - i as isize);
            prop_assert_eq!(from.distance_from(&to), -(to.distance_from(&from)));
        }

        #[test]
        fn prop_offset_by_distance_reaches_target(
            data in prop::collection::vec(any::<i32>(), 1..64),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let from = ElementCursor::at(&data[..], a.index(data.len())).unwrap();
            let to = ElementCursor::at(&data[..], b.index(data.len())).unwrap();

            let reached = from.offset(to.distance_from(&from)).unwrap();
            prop_assert_eq!(reached.index(), to.index());
            prop_assert_eq!(reached.get(), to.get());
        }

        #[test]
        fn prop_offset_is_some_only_inside(
            len in 1usize..64,
            start in 0usize..64,
            delta in -128isize..128,
        ) {
            let data = vec![0u8; len];
            let start = start % len;
            let cursor = ElementCursor::at(&data[..], start).unwrap();
            let target = start as isize + delta;

            prop_assert_eq!(
                cursor.offset(delta).is_some(),
                (0..len as isize).contains(&target)
            );
        }
    }
}
