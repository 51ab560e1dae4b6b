mod assignments;
pub use assignments::Assignments;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod predicate;
pub use predicate::Predicate;

mod projection;
pub use projection::Projection;

mod record;
pub use record::Record;

mod record_stream;
pub use record_stream::RecordStream;

mod select;
pub use select::Select;

mod statement;
pub use statement::Statement;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
