/// Chess domain types and rules.
pub mod chess;
/// The game session driven by the presentation layer.
pub mod session;
