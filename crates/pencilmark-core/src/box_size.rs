//! Validated box size for a pencilmark grid.

use std::fmt::{self, Display};

/// The side length of one box, validated to the range 2-8.
///
/// A grid is tiled by `box size × box size` boxes, so the full grid measures
/// `box size²` cells per side: box size 3 is the classic 9×9 Sudoku, box size
/// 2 the 4×4 variant, and box size 8 the largest supported 64×64 grid.
///
/// # Examples
///
/// ```
/// use pencilmark_core::BoxSize;
///
/// let box_size = BoxSize::new(3).unwrap();
/// assert_eq!(box_size.get(), 3);
/// assert_eq!(box_size.grid_size(), 9);
///
/// assert!(BoxSize::new(1).is_err());
/// assert!(BoxSize::new(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxSize(u8);

/// Error returned when constructing a [`BoxSize`] outside the range 2-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("box size {size} is out of range 2-8")]
pub struct BoxSizeOutOfRange {
    /// The rejected size.
    pub size: u8,
}

impl BoxSize {
    /// The smallest supported box size.
    pub const MIN: u8 = 2;
    /// The largest supported box size.
    pub const MAX: u8 = 8;

    /// Creates a box size from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`BoxSizeOutOfRange`] if `size` is not in the range 2-8.
    pub fn new(size: u8) -> Result<Self, BoxSizeOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoxSizeOutOfRange { size })
        }
    }

    /// Returns the box side length (2-8).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the full grid side length, `box size²` (4-64).
    #[must_use]
    pub const fn grid_size(self) -> u8 {
        self.0 * self.0
    }
}

impl TryFrom<u8> for BoxSize {
    type Error = BoxSizeOutOfRange;

    fn try_from(size: u8) -> Result<Self, BoxSizeOutOfRange> {
        Self::new(size)
    }
}

impl From<BoxSize> for u8 {
    fn from(box_size: BoxSize) -> u8 {
        box_size.get()
    }
}

impl Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
