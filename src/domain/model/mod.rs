mod capability;
mod module;
mod version;
mod wiring;

pub use capability::*;
pub use module::*;
pub use version::*;
pub use wiring::*;
