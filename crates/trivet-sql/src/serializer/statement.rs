use super::{Assign, Comma, FieldName, Formatter, Param, Params, TableName, ToSql, WhereClause};

use std::fmt::Write;

use trivet_core::stmt::{Delete, Insert, Select, Statement, Update};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "SELECT ");

        if self.projections.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(&self.projections));
        }

        fmt!(f, " FROM " TableName WhereClause(&self.predicates));

        if !self.order.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order));
        }

        if let Some(limit) = self.limit {
            let _ = write!(f.dst, " LIMIT {limit}");
        }

        if let Some(offset) = self.offset {
            let _ = write!(f.dst, " OFFSET {offset}");
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(self.assignments.iter().map(|(name, _)| FieldName(name)));
        fmt!(f, "INSERT INTO " TableName " (" columns ") VALUES (");

        let values = Comma(self.assignments.iter().map(|(_, value)| Param(value)));
        fmt!(f, values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let assigns = Comma(
            self.assignments
                .iter()
                .map(|(name, value)| Assign(name, value)),
        );
        fmt!(f, "UPDATE " TableName " SET " assigns WhereClause(&self.predicates));
    }
}

impl ToSql for &Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "DELETE FROM " TableName WhereClause(&self.predicates));
    }
}
