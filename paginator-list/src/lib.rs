pub mod error;
pub mod paged_list;
pub mod slice_source;
pub mod text_writer;

pub use error::PagedListError;
pub use paged_list::PagedList;
pub use slice_source::SliceSource;
pub use text_writer::TextPaginatorWriter;

#[cfg(test)]
pub mod test_helper;
