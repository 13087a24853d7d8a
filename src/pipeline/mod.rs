pub mod cipher;
pub mod codec;
pub mod pantun;

pub use cipher::*;
pub use codec::*;
pub use pantun::*;
