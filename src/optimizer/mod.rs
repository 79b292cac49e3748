pub mod error;
pub mod milp;
pub mod naive;

pub use error::*;
pub use milp::*;
pub use naive::*;
