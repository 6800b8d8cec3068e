// Heap allocation of a fixed-layout record, two ways:
// raw alloc/dealloc through an allocator seam, and Box::new/drop.

use std::alloc::{alloc, dealloc, Layout};
use std::fmt;
use std::io::Write;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::{DemoError, Result};

// ============================================================================
// Part 1: The record
// ============================================================================

/// Bytes reserved for a name, NUL terminator included.
pub const NAME_CAPACITY: usize = 50;

/// A student with C-compatible layout.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub registration_number: i32,
    name: [u8; NAME_CAPACITY],
    pub age: i32,
}

// `[u8; 50]` has no `Default`, so zero it by hand.
impl Default for StudentRecord {
    fn default() -> Self {
        StudentRecord {
            registration_number: 0,
            name: [0; NAME_CAPACITY],
            age: 0,
        }
    }
}

impl StudentRecord {
    /// Copies `name` into the buffer followed by a NUL.
    /// On overflow the buffer is left untouched.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_CAPACITY {
            return Err(DemoError::NameTooLong {
                len: bytes.len(),
                capacity: NAME_CAPACITY,
            });
        }

        self.name[..bytes.len()].copy_from_slice(bytes);
        self.name[bytes.len()] = 0;
        Ok(())
    }

    /// Text up to the first NUL.
    pub fn name(&self) -> &str {
        let end = self
            .name
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(NAME_CAPACITY);
        // Only `set_name` writes the buffer and NUL is ASCII, so the prefix
        // is always a whole number of UTF-8 characters.
        std::str::from_utf8(&self.name[..end]).unwrap_or_default()
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.registration_number, self.name(), self.age)
    }
}

// ============================================================================
// Part 2: Raw allocation seam
// ============================================================================

/// An untyped allocator that reports failure instead of aborting.
pub trait RawAllocator {
    /// Returns a block that fits `layout`, or `None` if none is available.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// # Safety
    ///
    /// `block` must have come from `allocate` on this allocator with the same
    /// `layout`, and must not have been released already.
    unsafe fn deallocate(&self, block: NonNull<u8>, layout: Layout);
}

/// Forwards to the global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl RawAllocator for SystemAllocator {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        // `alloc` with a zero-sized layout is UB.
        if layout.size() == 0 {
            return None;
        }
        NonNull::new(unsafe { alloc(layout) })
    }

    unsafe fn deallocate(&self, block: NonNull<u8>, layout: Layout) {
        dealloc(block.as_ptr(), layout);
    }
}

/// Owns one `StudentRecord` living in a block from a `RawAllocator`.
///
/// `release` consumes the handle, so the record cannot be read after it is
/// freed and cannot be freed twice.
pub struct RawStudent<'a, A: RawAllocator> {
    ptr: NonNull<StudentRecord>,
    allocator: &'a A,
}

impl<'a, A: RawAllocator> RawStudent<'a, A> {
    const LAYOUT: Layout = Layout::new::<StudentRecord>();

    /// Requests a block and writes a zeroed record into it.
    pub fn allocate(allocator: &'a A) -> Option<Self> {
        let ptr = allocator.allocate(Self::LAYOUT)?.cast::<StudentRecord>();
        // SAFETY: fresh block, sized and aligned for StudentRecord.
        unsafe { ptr.as_ptr().write(StudentRecord::default()) };
        Some(RawStudent { ptr, allocator })
    }

    /// Hands the block back to the allocator.
    pub fn release(self) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so this is the only release.
        unsafe { this.free() };
    }

    unsafe fn free(&self) {
        self.allocator.deallocate(self.ptr.cast(), Self::LAYOUT);
    }
}

impl<A: RawAllocator> Deref for RawStudent<'_, A> {
    type Target = StudentRecord;

    fn deref(&self) -> &StudentRecord {
        // SAFETY: initialised in `allocate`, live until release.
        unsafe { self.ptr.as_ref() }
    }
}

impl<A: RawAllocator> DerefMut for RawStudent<'_, A> {
    fn deref_mut(&mut self) -> &mut StudentRecord {
        // SAFETY: as above, and `&mut self` makes the access exclusive.
        unsafe { self.ptr.as_mut() }
    }
}

// Early returns (a failed write, a rejected name) skip `release`.
impl<A: RawAllocator> Drop for RawStudent<'_, A> {
    fn drop(&mut self) {
        unsafe { self.free() };
    }
}

// ============================================================================
// Part 3: The two allocation demos
// ============================================================================

pub fn demonstrate_student_allocation_with_raw_alloc(out: &mut dyn Write) -> Result<()> {
    demonstrate_student_allocation_with_raw_alloc_using(out, &SystemAllocator)
}

pub fn demonstrate_student_allocation_with_raw_alloc_using<A: RawAllocator>(
    out: &mut dyn Write,
    allocator: &A,
) -> Result<()> {
    writeln!(out, "=== demonstrate_student_allocation_with_raw_alloc ===")?;

    let Some(mut student) = RawStudent::allocate(allocator) else {
        writeln!(out, "Allocation failed.")?;
        writeln!(out)?;
        return Ok(());
    };

    student.registration_number = 12345;
    student.set_name("Alice")?;
    student.age = 20;

    writeln!(out, "Student (raw alloc/dealloc): {}", *student)?;

    student.release();
    writeln!(out)?;
    Ok(())
}

pub fn demonstrate_student_allocation_with_box(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_student_allocation_with_box ===")?;

    let mut student = Box::new(StudentRecord::default());

    student.registration_number = 54321;
    student.set_name("Bob")?;
    student.age = 22;

    writeln!(out, "Student (Box::new/drop): {}", student)?;

    drop(student);
    writeln!(out)?;
    Ok(())
}
