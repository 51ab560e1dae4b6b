#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use trivet::{
    driver::{Connection, Response},
    stmt::Value,
    Error, Result,
};
use trivet_core::async_trait;

/// A scripted connection: responses are served in push order, and every
/// executed statement is captured for assertion. When the script runs dry,
/// writes get an affected-count of zero.
#[derive(Debug, Default)]
pub struct MockConnection {
    responses: Mutex<VecDeque<Result<Response>>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Response) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, err: impl Into<Error>) -> Self {
        self.responses.lock().unwrap().push_back(Err(err.into()));
        self
    }

    /// The `(sql, params)` pairs executed so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The single executed statement; panics unless exactly one ran.
    pub fn only_call(&self) -> (String, Vec<Value>) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one statement: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&self, sql: &str, params: &[Value]) -> Result<Response> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));

        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(Response::count(0)),
        }
    }
}
