pub mod annotate;

pub use annotate::{LinkSpans, annotate};
