//! Player powers.
//!
//! Each power is a stateless strategy implementing [`Power`]. The standard
//! rules live in the trait's default methods. The three special powers
//! override the move or build handler and the skip handler.

mod extra_build;
mod extra_move;
mod perimeter_move;
mod power;
mod standard;

pub use extra_build::ExtraBuild;
pub use extra_move::ExtraMove;
pub use perimeter_move::PerimeterMove;
pub use power::{Power, PowerKind, TurnContext};
pub use standard::Standard;
