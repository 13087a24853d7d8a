pub mod decrypt;
pub mod encrypt;
pub mod info;
pub mod input;
pub mod selftest;

pub use decrypt::*;
pub use encrypt::*;
pub use info::*;
pub use input::*;
pub use selftest::*;
