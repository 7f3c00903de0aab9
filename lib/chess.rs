mod board;
mod check;
mod color;
mod r#move;
mod outcome;
mod piece;
mod role;
mod rules;
mod square;

pub use board::*;
pub use color::*;
pub use outcome::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use square::*;
