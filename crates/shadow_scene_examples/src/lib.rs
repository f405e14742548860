#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_classified_to_png, RenderConfig};
