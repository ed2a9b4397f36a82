pub mod attach;
pub mod cable;
pub mod config;
pub mod constants;
pub mod integrate;
pub mod path;
pub mod sim;
pub mod solver;
pub mod state;

pub use attach::*;
pub use cable::*;
pub use config::*;
pub use constants::*;
pub use integrate::*;
pub use path::*;
pub use sim::*;
pub use solver::*;
pub use state::*;
