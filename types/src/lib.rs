pub mod board;
pub mod mark;
pub mod square;

pub use board::*;
pub use mark::*;
pub use square::*;
