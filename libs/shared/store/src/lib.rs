pub mod error;
pub mod file;
pub mod source;

pub use error::StoreError;
pub use file::FileItemStore;
pub use source::{ItemSource, SourceVersion};
