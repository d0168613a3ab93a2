mod scalars;
pub use scalars::*;
mod trsm;
pub use trsm::*;
