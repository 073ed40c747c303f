pub mod helpers;
pub mod install;
pub mod list;
pub mod regenerate;
pub mod status;
