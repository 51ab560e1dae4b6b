mod events;
pub use events::{Event, Meta};

mod hooks;
pub use hooks::Hooks;

mod ident;
pub use ident::{Identifier, Resolved};

mod options;
pub use options::FindOptions;

mod table;
pub use table::Table;

mod transform;
mod translate;
mod validate;

pub use trivet_core::{
    driver,
    schema::{self, Field, FieldType, Format, Rule, Schema},
    stmt::{self, Record, RecordStream, Value},
    Connection, ConstraintError, DriverError, Error, MisuseError, Result, ValidationError,
    Violation,
};
