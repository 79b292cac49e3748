pub mod prices;
pub mod weather;

pub use prices::*;
pub use weather::*;
