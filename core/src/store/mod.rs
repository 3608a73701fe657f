//! In-memory caches of server state.
//!
//! # Design
//! Every store owns its collection outright; consumers read through
//! accessors and change it only through store operations. Mutations follow
//! confirm-then-apply: the local collection is touched only after the server
//! accepted the change, and then only with the server's own representation.
//! `load` never fails outward, it records a message in the store's error
//! field and keeps the last good data. Mutating operations record the same
//! way and also hand the error back to the caller.

mod animals;
mod auth;
mod lost;

pub use animals::AnimalStore;
pub use auth::AuthStore;
pub use lost::LostAnimalStore;

use tracing::warn;

use crate::error::ApiError;
use crate::types::{IntoRecordId, RecordId};

fn resolve_id<I: IntoRecordId>(id: &I) -> Result<RecordId, ApiError> {
    id.record_id().ok_or_else(|| ApiError::InvalidId(id.raw()))
}

/// Store `message` in the error slot and pass `err` through for re-raising.
fn record(slot: &mut Option<String>, message: &str, err: ApiError) -> ApiError {
    warn!(error = %err, "{message}");
    *slot = Some(message.to_string());
    err
}

/// Sets a loading flag for as long as the guard lives.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
