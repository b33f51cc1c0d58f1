mod error;
mod nutrition;
mod slot;

pub use error::*;
pub use nutrition::*;
pub use slot::*;
