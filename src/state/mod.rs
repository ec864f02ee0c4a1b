mod catalog;
mod session;

pub use catalog::load_catalog;
pub use session::Session;
