use tokio_stream::StreamExt;
use tracing::debug;

use std::sync::{Arc, PoisonError, RwLock};

use trivet_core::{
    driver::{Connection, Response},
    schema::Schema,
    stmt::{self, Assignments, Record, RecordStream, Select, Statement, Value},
    Error, MisuseError, Result,
};
use trivet_sql::Serializer;

use crate::{
    events::{Event, Subscriber},
    hooks::{Hooks, NoopHooks},
    ident::{Identifier, Resolved},
    options::FindOptions,
    transform, translate,
    validate::{self, Mode},
};

type ErrorAdaptor = Arc<dyn Fn(Error) -> Error + Send + Sync>;

/// The entity mapper for one table.
///
/// A `Table` is built once from a [`Schema`] and lives for the process. It
/// is immutable after construction except for hook, subscriber, and
/// error-adaptor registration, which are eventually-consistent
/// configuration, not per-call state. Calls in flight concurrently against
/// the same instance are fully independent; no lock is held across an
/// await.
///
/// Every operation takes the execution capability explicitly; passing the
/// same transaction handle to several calls batches them in one storage
/// transaction, which the caller owns end to end.
pub struct Table {
    schema: Schema,
    hooks: RwLock<Arc<dyn Hooks>>,
    subscribers: RwLock<Vec<Subscriber>>,
    adaptor: RwLock<ErrorAdaptor>,
}

impl Table {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            hooks: RwLock::new(Arc::new(NoopHooks)),
            subscribers: RwLock::new(Vec::new()),
            adaptor: RwLock::new(Arc::new(|err| err)),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Replaces the hook set for this mapper.
    pub fn set_hooks(&self, hooks: impl Hooks + 'static) {
        *self
            .hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(hooks);
    }

    /// Subscribes an observer to lifecycle notifications.
    pub fn subscribe(&self, subscriber: impl Fn(&Event) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(subscriber));
    }

    /// Post-processes every error before it reaches the caller. Identity by
    /// default.
    pub fn set_error_adaptor(&self, adaptor: impl Fn(Error) -> Error + Send + Sync + 'static) {
        *self
            .adaptor
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(adaptor);
    }

    /// Inserts one record and returns it enriched with the generated
    /// identity value and the read-side transforms applied.
    pub async fn insert(
        &self,
        conn: &dyn Connection,
        record: Record,
        opts: FindOptions,
    ) -> Result<Record> {
        self.insert_inner(conn, record, &opts)
            .await
            .map_err(|err| self.fail(err))
    }

    /// Updates the rows selected by `ids`, setting only the fields present
    /// in `record`. Returns the transformed record and the affected-row
    /// count. An identifier that resolves to no rows, or an empty record,
    /// short-circuits with a count of zero and no storage call.
    pub async fn update(
        &self,
        conn: &dyn Connection,
        ids: impl Into<Identifier>,
        record: Record,
        opts: FindOptions,
    ) -> Result<(Record, u64)> {
        self.update_inner(conn, ids.into(), record, &opts)
            .await
            .map_err(|err| self.fail(err))
    }

    /// Deletes the rows selected by `ids`, returning the affected-row
    /// count. Refuses to run an unrestricted DELETE.
    pub async fn remove(
        &self,
        conn: &dyn Connection,
        ids: impl Into<Identifier>,
        opts: FindOptions,
    ) -> Result<u64> {
        self.remove_inner(conn, ids.into(), &opts)
            .await
            .map_err(|err| self.fail(err))
    }

    /// Runs a SELECT built from the options and materializes every row.
    pub async fn find(&self, conn: &dyn Connection, opts: FindOptions) -> Result<Vec<Record>> {
        self.find_stream(conn, opts)
            .await?
            .collect()
            .await
            .map_err(|err| self.fail(err))
    }

    /// The streaming variant of [`find`](Self::find): rows are transformed
    /// one at a time as the caller consumes them.
    pub async fn find_stream(
        &self,
        conn: &dyn Connection,
        opts: FindOptions,
    ) -> Result<RecordStream> {
        self.find_stream_inner(conn, opts)
            .await
            .map_err(|err| self.fail(err))
    }

    /// Resolves `ids` into predicates, folds them into the options, and
    /// delegates to [`find`](Self::find). An empty identifier sequence
    /// returns an empty result set without a storage call.
    pub async fn find_by_id(
        &self,
        conn: &dyn Connection,
        ids: impl Into<Identifier>,
        mut opts: FindOptions,
    ) -> Result<Vec<Record>> {
        let ids = ids.into();

        let Resolved::Rows { predicates, .. } = ids.resolve(self.schema.id_field()) else {
            return Ok(Vec::new());
        };

        opts.filter.extend(predicates);
        self.find(conn, opts).await
    }

    /// Like [`find_by_id`](Self::find_by_id), unwrapped to "first row or
    /// none" for callers naming a single row.
    pub async fn find_one(
        &self,
        conn: &dyn Connection,
        ids: impl Into<Identifier>,
        opts: FindOptions,
    ) -> Result<Option<Record>> {
        Ok(self.find_by_id(conn, ids, opts).await?.into_iter().next())
    }

    /// Escape hatch: executes caller-supplied statement text directly. The
    /// read-side transforms still apply to every returned row; nothing else
    /// does, and the caller is responsible for the statement's correctness.
    pub async fn query(
        &self,
        conn: &dyn Connection,
        sql: &str,
        params: &[Value],
        opts: FindOptions,
    ) -> Result<Vec<Record>> {
        self.query_stream(conn, sql, params, opts)
            .await?
            .collect()
            .await
            .map_err(|err| self.fail(err))
    }

    /// The streaming variant of [`query`](Self::query).
    pub async fn query_stream(
        &self,
        conn: &dyn Connection,
        sql: &str,
        params: &[Value],
        opts: FindOptions,
    ) -> Result<RecordStream> {
        self.query_stream_inner(conn, sql, params, &opts)
            .await
            .map_err(|err| self.fail(err))
    }

    async fn insert_inner(
        &self,
        conn: &dyn Connection,
        mut record: Record,
        opts: &FindOptions,
    ) -> Result<Record> {
        let hooks = self.hooks();

        transform::apply_defaults(&self.schema, &mut record);
        hooks
            .pre_validate(None, &mut record, true, &opts.meta)
            .await?;
        validate::validate(&self.schema, &record, Mode::Insert)?;
        transform::apply_setters(&self.schema, &mut record);
        hooks.pre_save(None, &mut record, true, &opts.meta).await?;

        let assignments: Assignments = record
            .iter()
            .map(|(name, value)| (name, value.clone()))
            .collect();
        let response = self
            .exec(conn, &stmt::Insert { assignments }.into())
            .await?;

        if let Some(id) = response.last_insert_id {
            record.set(self.schema.id_field(), id);
        }

        transform::apply_getters(
            &self.schema,
            &mut record,
            opts.ignore_private,
            opts.ignore_getters,
        );

        let ids = Identifier::One(
            record
                .get(self.schema.id_field())
                .cloned()
                .unwrap_or(Value::Null),
        );
        hooks.post_save(&ids, &record, true, &opts.meta).await;
        self.emit(Event::Insert {
            ids: ids.clone(),
            record: record.clone(),
            meta: opts.meta.clone(),
        });
        self.emit(Event::Save {
            ids,
            record: record.clone(),
            is_new: true,
            meta: opts.meta.clone(),
        });

        Ok(record)
    }

    async fn update_inner(
        &self,
        conn: &dyn Connection,
        ids: Identifier,
        mut record: Record,
        opts: &FindOptions,
    ) -> Result<(Record, u64)> {
        let Resolved::Rows { predicates, .. } = ids.resolve(self.schema.id_field()) else {
            return Ok((record, 0));
        };

        if record.is_empty() {
            return Ok((record, 0));
        }

        let hooks = self.hooks();

        hooks
            .pre_validate(Some(&ids), &mut record, false, &opts.meta)
            .await?;
        validate::validate(&self.schema, &record, Mode::Update)?;
        transform::apply_setters(&self.schema, &mut record);
        hooks
            .pre_save(Some(&ids), &mut record, false, &opts.meta)
            .await?;

        transform::resolve_absent(&mut record);

        let assignments: Assignments = record
            .iter()
            .map(|(name, value)| (name, value.clone()))
            .collect();
        let response = self
            .exec(
                conn,
                &stmt::Update {
                    assignments,
                    predicates,
                }
                .into(),
            )
            .await?;
        let affected = response.rows.into_count()?;

        transform::apply_getters(
            &self.schema,
            &mut record,
            opts.ignore_private,
            opts.ignore_getters,
        );

        hooks.post_save(&ids, &record, false, &opts.meta).await;
        self.emit(Event::Update {
            ids: ids.clone(),
            record: record.clone(),
            meta: opts.meta.clone(),
        });
        self.emit(Event::Save {
            ids,
            record: record.clone(),
            is_new: false,
            meta: opts.meta.clone(),
        });

        Ok((record, affected))
    }

    async fn remove_inner(
        &self,
        conn: &dyn Connection,
        ids: Identifier,
        opts: &FindOptions,
    ) -> Result<u64> {
        let Resolved::Rows { predicates, .. } = ids.resolve(self.schema.id_field()) else {
            return Ok(0);
        };

        let hooks = self.hooks();

        hooks.pre_delete(&ids, &opts.meta).await?;

        // Never allow an unrestricted delete.
        if predicates.is_empty() {
            return Err(MisuseError::new(
                "refusing to run DELETE without a restricting predicate",
            )
            .into());
        }

        let response = self
            .exec(conn, &stmt::Delete { predicates }.into())
            .await?;
        let affected = response.rows.into_count()?;

        hooks.post_delete(&ids, &opts.meta).await;
        self.emit(Event::Remove {
            ids,
            meta: opts.meta.clone(),
        });

        Ok(affected)
    }

    async fn find_stream_inner(
        &self,
        conn: &dyn Connection,
        opts: FindOptions,
    ) -> Result<RecordStream> {
        let select = Select {
            projections: opts.fields.clone(),
            predicates: opts.filter.clone(),
            order: opts.order.clone(),
            limit: opts.limit,
            offset: opts.offset,
        };

        let response = self.exec(conn, &select.into()).await?;
        let rows = response.rows.into_stream()?;

        Ok(self.transform_stream(rows, &opts))
    }

    async fn query_stream_inner(
        &self,
        conn: &dyn Connection,
        sql: &str,
        params: &[Value],
        opts: &FindOptions,
    ) -> Result<RecordStream> {
        debug!(table = self.schema.table(), sql, "executing raw statement");

        let response = conn.exec(sql, params).await?;
        let rows = response.rows.into_stream()?;

        Ok(self.transform_stream(rows, opts))
    }

    async fn exec(&self, conn: &dyn Connection, stmt: &Statement) -> Result<Response> {
        let mut params = Vec::new();
        let sql = Serializer::new(&self.schema).serialize(stmt, &mut params)?;

        debug!(
            table = self.schema.table(),
            sql = sql.as_str(),
            params = params.len(),
            "executing statement"
        );

        conn.exec(&sql, &params).await
    }

    /// Applies the read-side transforms per row as the stream produces it.
    fn transform_stream(&self, rows: RecordStream, opts: &FindOptions) -> RecordStream {
        let schema = self.schema.clone();
        let ignore_private = opts.ignore_private;
        let ignore_getters = opts.ignore_getters;

        RecordStream::from_stream(rows.map(move |res| {
            res.map(|mut record| {
                transform::apply_getters(&schema, &mut record, ignore_private, ignore_getters);
                record
            })
        }))
    }

    fn hooks(&self) -> Arc<dyn Hooks> {
        self.hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn emit(&self, event: Event) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for subscriber in &subscribers {
            subscriber(&event);
        }
    }

    /// Every error leaves through here: storage failures are translated
    /// into the domain taxonomy, then the registered adaptor runs.
    fn fail(&self, err: Error) -> Error {
        let adaptor = self
            .adaptor
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        adaptor(translate::translate(self.schema.id_field(), err))
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("table", &self.schema.table())
            .field("id_field", &self.schema.id_field())
            .finish()
    }
}
