//! Site page rendering

pub mod engine;
pub mod renderer;

pub use engine::{load_templates, slug};
pub use renderer::{render_site, SiteTotals};
