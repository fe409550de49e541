//! Registered factory checks.

pub mod class_existence;
pub mod consistent_file_name;
pub mod inline_association;
pub mod missing_associations;
pub mod missing_class_option;
pub mod missing_properties;
pub mod property_order;
pub mod registry;
pub mod single_define_per_file;
pub mod single_factory_per_define;
pub mod singular_factory_name;
pub mod types;

pub use class_existence::ClassExistence;
pub use consistent_file_name::ConsistentFileName;
pub use inline_association::InlineAssociation;
pub use missing_associations::MissingAssociations;
pub use missing_class_option::MissingClassOption;
pub use missing_properties::MissingProperties;
pub use property_order::PropertyOrder;
pub use registry::CheckRegistry;
pub use single_define_per_file::SingleDefinePerFile;
pub use single_factory_per_define::SingleFactoryPerDefine;
pub use singular_factory_name::SingularFactoryName;
pub use types::{Check, CheckContext, Finding, Severity};
