pub mod ballot;
pub mod registry;
pub mod voter;
pub mod voting;

pub use ballot::*;
pub use registry::*;
pub use voter::*;
pub use voting::*;
