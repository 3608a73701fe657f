use tracing::{debug, info, warn};

use super::{record, resolve_id, Loading};
use crate::error::ApiError;
use crate::http::Transport;
use crate::services::LostAnimalService;
use crate::types::{IntoRecordId, LostAnimal, MessageResponse, NewLostAnimal};

const LOAD_FAILED: &str = "failed to load lost animals";
const REPORT_FAILED: &str = "failed to report lost animal";
const MARK_FOUND_FAILED: &str = "failed to mark animal as found";

/// Client-side cache of lost-animal reports, split into the two server
/// partitions. A report sits in exactly one of `lost()` and `found()`.
#[derive(Debug)]
pub struct LostAnimalStore<T> {
    service: LostAnimalService<T>,
    lost: Vec<LostAnimal>,
    found: Vec<LostAnimal>,
    loading: bool,
    error: Option<String>,
}

impl<T: Transport> LostAnimalStore<T> {
    pub fn new(service: LostAnimalService<T>) -> Self {
        Self {
            service,
            lost: Vec::new(),
            found: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn lost(&self) -> &[LostAnimal] {
        &self.lost
    }

    pub fn found(&self) -> &[LostAnimal] {
        &self.found
    }

    /// True until the first `load` finishes and while a load is running.
    /// Because `load` blocks and borrows the store mutably, callers on the
    /// same thread only ever observe the first state.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Fetch both partitions. They are replaced together or not at all.
    pub fn load(&mut self) {
        let _loading = Loading::start(&mut self.loading);
        let fetched = self
            .service
            .list_lost()
            .and_then(|lost| Ok((lost, self.service.list_found()?)));
        match fetched {
            Ok((lost, found)) => {
                debug!(lost = lost.len(), found = found.len(), "lost animals loaded");
                self.lost = lost;
                self.found = found;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Report a missing animal. The contact phone is sent as digits only and
    /// the server's record goes to the front of `lost()`.
    pub fn report(&mut self, input: &NewLostAnimal) -> Result<LostAnimal, ApiError> {
        let report = self
            .service
            .report(&input.clone().normalized())
            .map_err(|e| record(&mut self.error, REPORT_FAILED, e))?;
        self.lost.insert(0, report.clone());
        Ok(report)
    }

    /// Move a report from `lost()` to the front of `found()` once the server
    /// confirms. There is no way back.
    pub fn mark_found<I: IntoRecordId>(&mut self, id: I) -> Result<MessageResponse, ApiError> {
        let id = resolve_id(&id).map_err(|e| record(&mut self.error, MARK_FOUND_FAILED, e))?;
        let ack = self
            .service
            .mark_found(id)
            .map_err(|e| record(&mut self.error, MARK_FOUND_FAILED, e))?;
        if let Some(pos) = self.lost.iter().position(|a| a.id == id) {
            let mut animal = self.lost.remove(pos);
            animal.found = true;
            self.found.insert(0, animal);
        }
        info!(id, "animal marked as found");
        Ok(ack)
    }

    /// Local lookup across both partitions.
    pub fn get<I: IntoRecordId>(&self, id: I) -> Option<&LostAnimal> {
        let id = id.record_id()?;
        self.lost.iter().chain(self.found.iter()).find(|a| a.id == id)
    }

    pub fn clear(&mut self) {
        self.lost.clear();
        self.found.clear();
        self.error = None;
    }
}
