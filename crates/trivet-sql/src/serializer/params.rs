use super::{Formatter, ToSql};

use trivet_core::stmt::Value;

pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;
}

pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
