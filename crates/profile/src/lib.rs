mod alternatives;
mod auth;
mod bmi;
mod favorites;

pub use alternatives::*;
pub use auth::*;
pub use bmi::*;
pub use favorites::*;
