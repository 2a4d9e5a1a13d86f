//! Token filters
//!
//! Each filter wraps an upstream [`TokenStream`](crate::TokenStream) and
//! rewrites or drops its tokens. End of stream is always passed through.

pub mod accent;
pub mod lowercase;
pub mod standard;
pub mod stop;

pub use accent::AccentFoldingFilter;
pub use lowercase::LowerCaseFilter;
pub use standard::StandardFilter;
pub use stop::{StopFilter, StopWords};
