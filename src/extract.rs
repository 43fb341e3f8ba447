pub mod annotations;
pub mod directive;

pub use annotations::extract_annotations;
pub use directive::is_directive;
