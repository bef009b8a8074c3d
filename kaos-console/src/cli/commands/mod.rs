//! Subcommand arguments and handlers

pub mod check;
pub mod highlight;
pub mod roles;
pub mod scripts;
pub mod view;

pub use check::CheckArgs;
pub use highlight::HighlightArgs;
pub use roles::RolesArgs;
pub use scripts::ScriptsArgs;
pub use view::ViewArgs;
