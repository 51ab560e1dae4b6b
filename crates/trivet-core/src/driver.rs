mod response;
pub use response::{Response, Rows};

use crate::{async_trait, stmt::Value};

use std::fmt::Debug;

/// The statement-execution capability the mapper is built over.
///
/// A connection (or transaction handle) executes one parameterized
/// statement and reports rows, an affected-row count, and the generated
/// identity value where applicable. The mapper never opens, commits, or
/// rolls back transactions itself; passing the same handle to several calls
/// batches them inside whatever transaction the caller set up.
#[async_trait]
pub trait Connection: Debug + Send + Sync {
    async fn exec(&self, sql: &str, params: &[Value]) -> crate::Result<Response>;
}
