pub mod directives;
mod document;
mod serialize;
mod value;
pub use document::*;
pub use value::*;
