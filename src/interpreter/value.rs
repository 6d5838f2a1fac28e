/// Complex number support.
///
/// Defines the [`Number`](complex::Number) type used for all arithmetic,
/// including the elementary functions of the prelude and the textual format
/// in which results are printed.
pub mod complex;
