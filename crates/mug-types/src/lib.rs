pub mod kind;
pub mod params;
pub mod preset;

pub use kind::*;
pub use params::*;
pub use preset::*;
