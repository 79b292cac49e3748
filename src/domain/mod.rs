pub mod appliance;
pub mod curves;
pub mod profile;
pub mod schedule;

pub use appliance::*;
pub use curves::*;
pub use profile::*;
pub use schedule::*;
