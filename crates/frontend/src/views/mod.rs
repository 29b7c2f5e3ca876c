pub mod fallback;
pub mod registry;
pub mod view_labels;
