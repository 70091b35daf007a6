mod component;
mod fetch;

pub use component::CatalogPicker;
