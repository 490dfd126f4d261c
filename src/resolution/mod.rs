pub mod model;
pub mod rank;
pub mod solve;
pub mod time;

pub use solve::Rank;
