mod data;
mod food;
mod recipe;
mod swap;

pub use food::*;
pub use recipe::*;
pub use swap::*;
