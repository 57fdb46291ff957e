pub mod serve;
pub mod summary;
pub mod validate;

pub use serve::serve;
pub use summary::summary;
pub use validate::validate;
