pub mod settings;

pub use settings::{parse_assignment, TemplateSettings};
