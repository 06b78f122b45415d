pub mod types;

pub use types::{AppEvent, LinkSpan};
