use crate::Identifier;

use trivet_core::stmt::Record;

/// Opaque per-call payload forwarded untouched to hooks and notifications.
pub type Meta = serde_json::Value;

/// A lifecycle notification, delivered to subscribers after the
/// corresponding persistence stage succeeded.
///
/// `Save` fires for both inserts and updates, always after the specific
/// `Insert`/`Update` event.
#[derive(Debug, Clone)]
pub enum Event {
    Insert {
        ids: Identifier,
        record: Record,
        meta: Meta,
    },
    Update {
        ids: Identifier,
        record: Record,
        meta: Meta,
    },
    Remove {
        ids: Identifier,
        meta: Meta,
    },
    Save {
        ids: Identifier,
        record: Record,
        is_new: bool,
        meta: Meta,
    },
}

pub(crate) type Subscriber = std::sync::Arc<dyn Fn(&Event) + Send + Sync>;
