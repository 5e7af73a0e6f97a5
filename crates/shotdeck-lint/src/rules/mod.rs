//! Built-in lint rules.

pub mod component_naming;
pub mod error_record;
pub mod missing_documentation;
pub mod mixed_control_type;
pub mod one_off_property;

pub use component_naming::ComponentNamingRule;
pub use error_record::ErrorRecordRule;
pub use missing_documentation::MissingDocumentationRule;
pub use mixed_control_type::MixedControlTypeRule;
pub use one_off_property::OneOffPropertyRule;
