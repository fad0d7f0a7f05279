pub mod collection;
pub mod response;

pub use collection::*;
pub use response::*;
