/// Data access interface
pub mod dam;

pub use dam::DataAccess;
