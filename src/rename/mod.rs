mod builder;
mod execute;
mod types;

pub use builder::{build_rename_set, derive_title, BuildError};
pub use execute::{apply_rename, apply_rename_set, RenameError};
pub use types::{RenameOperation, RenameSet};
