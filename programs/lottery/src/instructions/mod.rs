pub mod enter;
pub mod initialize;
pub mod pick_winner;
pub mod read;

pub use enter::*;
pub use initialize::*;
pub use pick_winner::*;
pub use read::*;
