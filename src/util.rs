/// Numeric conversion helpers.
///
/// This module provides functions for converting floating-point values into
/// integers without silent truncation. Every function returns `None` when the
/// value is not finite, out of range, or has a fractional part.
pub mod num;
