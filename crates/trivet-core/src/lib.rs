pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{
    ConstraintError, DriverError, Error, MisuseError, ValidationError, Violation,
};

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses Trivet's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
