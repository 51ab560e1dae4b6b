use crate::stmt::{Record, RecordStream, Value};
use crate::Error;

/// The result of executing one statement.
#[derive(Debug)]
pub struct Response {
    pub rows: Rows,

    /// Identity value generated by the storage engine for an INSERT, when
    /// the engine reports one.
    pub last_insert_id: Option<Value>,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows affected by a write
    Count(u64),

    /// Rows returned by a read
    Stream(RecordStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id: None,
        }
    }

    pub fn records(records: Vec<Record>) -> Self {
        Self::stream(RecordStream::from_vec(records))
    }

    pub fn stream(stream: RecordStream) -> Self {
        Self {
            rows: Rows::Stream(stream),
            last_insert_id: None,
        }
    }

    pub fn with_last_insert_id(mut self, id: impl Into<Value>) -> Self {
        self.last_insert_id = Some(id.into());
        self
    }
}

impl Rows {
    pub fn into_count(self) -> crate::Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Stream(_) => Err(Error::misuse(
                "expected an affected-row count, the connection returned rows",
            )),
        }
    }

    pub fn into_stream(self) -> crate::Result<RecordStream> {
        match self {
            Self::Stream(stream) => Ok(stream),
            Self::Count(_) => Err(Error::misuse(
                "expected rows, the connection returned an affected-row count",
            )),
        }
    }
}
