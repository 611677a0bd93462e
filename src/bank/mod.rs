mod ids;
mod registry;

pub use ids::*;
pub use registry::*;
