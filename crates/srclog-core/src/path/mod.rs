//! Source path to display name resolution

mod resolver;
mod root;

pub use resolver::{resolve_display_name, longest_common_prefix, UNKNOWN_SOURCE};
pub use root::{ProjectRoot, PROJECT_ROOT_ENV};
