pub mod options;
pub mod request;
pub mod result;

pub use options::*;
pub use request::*;
pub use result::*;
