pub use board::*;
pub use errors::*;
pub use game::*;
pub use marbles::*;
pub use player::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod marbles;
mod player;
mod visualization;
