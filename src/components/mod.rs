//! Leptos view components.

/// Year/major selection and the one-shot index fetch.
pub mod catalog_picker;
/// Course cards and their hover highlighting.
pub mod course_nodes;
