pub mod catalog;
pub mod layout;
pub mod routes;

pub use catalog::*;
pub use layout::*;
pub use routes::*;
