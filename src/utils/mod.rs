pub mod fs;
pub mod path;
pub mod photo;
pub mod validation;

pub use fs::{restrict_permissions, write_private};
pub use path::{
    expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir, get_session_path,
};
pub use validation::{PasswordChange, Registration, ValidationError};
