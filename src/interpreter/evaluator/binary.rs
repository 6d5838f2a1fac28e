/// Dispatch and plain arithmetic.
pub mod core;
/// Exponentiation, including the `e^x` shortcut.
pub mod power;
/// `=`, `<` and the truth value of `:=`.
pub mod comparison;
