//! Class name to model path and table name.

use crate::naming::{tableize, underscore};

/// `Admin::User` -> `<models_dir>/admin/user.rb`.
pub fn model_path(models_dir: &str, class_name: &str) -> String {
    format!(
        "{}/{}.rb",
        models_dir.trim_end_matches('/'),
        underscore(class_name)
    )
}

/// `Admin::User` -> `admin_users`, `User` -> `users`.
pub fn table_name(class_name: &str) -> String {
    tableize(class_name).replace('/', "_")
}
