use crate::{events::Meta, Identifier};

use trivet_core::{async_trait, stmt::Record, Result};

/// Overridable extension points invoked at fixed pipeline stages.
///
/// Every method has a safe no-op default. Pre-hooks are fallible: an error
/// aborts the pipeline before the storage call, exactly like a validation
/// failure. Post-hooks fire only after the persistence stage succeeded.
///
/// `ids` is `None` for insert pre-hooks (the identity value does not exist
/// yet). `is_new` distinguishes insert from update.
#[async_trait]
pub trait Hooks: Send + Sync {
    async fn pre_validate(
        &self,
        ids: Option<&Identifier>,
        record: &mut Record,
        is_new: bool,
        meta: &Meta,
    ) -> Result<()> {
        let _ = (ids, record, is_new, meta);
        Ok(())
    }

    async fn pre_save(
        &self,
        ids: Option<&Identifier>,
        record: &mut Record,
        is_new: bool,
        meta: &Meta,
    ) -> Result<()> {
        let _ = (ids, record, is_new, meta);
        Ok(())
    }

    async fn pre_delete(&self, ids: &Identifier, meta: &Meta) -> Result<()> {
        let _ = (ids, meta);
        Ok(())
    }

    async fn post_save(&self, ids: &Identifier, record: &Record, is_new: bool, meta: &Meta) {
        let _ = (ids, record, is_new, meta);
    }

    async fn post_delete(&self, ids: &Identifier, meta: &Meta) {
        let _ = (ids, meta);
    }
}

/// The default hook set: every stage is a no-op.
pub(crate) struct NoopHooks;

#[async_trait]
impl Hooks for NoopHooks {}
