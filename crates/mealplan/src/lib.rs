mod entry;
mod generate;
mod plan;

pub use entry::*;
pub use generate::*;
pub use plan::*;
