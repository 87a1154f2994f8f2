pub mod annotate;
pub mod dict;
pub mod lang;
mod trace_init;
pub mod unicode;

pub use annotate::{annotate, annotate_key, annotate_preserving_markup, AnnotationContext};
pub use dict::{DictError, ZhuyinDict};
pub use lang::Lang;
pub use trace_init::init_tracing;
