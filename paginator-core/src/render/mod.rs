pub mod write_pages;
pub mod writer;

pub use write_pages::*;
pub use writer::*;
