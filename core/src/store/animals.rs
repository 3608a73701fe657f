use tracing::{debug, warn};

use super::{record, resolve_id, Loading};
use crate::error::ApiError;
use crate::services::AnimalService;
use crate::types::{Animal, AnimalUpdate, IntoRecordId, NewAnimal};

const LOAD_FAILED: &str = "failed to load animals";
const CREATE_FAILED: &str = "failed to add animal";
const UPDATE_FAILED: &str = "failed to update animal";
const DELETE_FAILED: &str = "failed to delete animal";

/// Client-side cache of the animal registry.
#[derive(Debug)]
pub struct AnimalStore<T> {
    service: AnimalService<T>,
    animals: Vec<Animal>,
    loading: bool,
    error: Option<String>,
}

impl<T: crate::http::Transport> AnimalStore<T> {
    pub fn new(service: AnimalService<T>) -> Self {
        Self {
            service,
            animals: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Animals in the order the server listed them, newest local creations
    /// first.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
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

    /// Replace the cache with the server's list. A failure is recorded in
    /// `error()` and leaves the previous list in place.
    pub fn load(&mut self) {
        let _loading = Loading::start(&mut self.loading);
        match self.service.list() {
            Ok(animals) => {
                debug!(count = animals.len(), "animals loaded");
                self.animals = animals;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Register an animal and put the server's record at the front.
    pub fn create(&mut self, input: &NewAnimal) -> Result<Animal, ApiError> {
        let animal = self
            .service
            .create(input)
            .map_err(|e| record(&mut self.error, CREATE_FAILED, e))?;
        self.animals.insert(0, animal.clone());
        Ok(animal)
    }

    /// Apply `changes` on the server and swap in its returned record at the
    /// same position.
    pub fn update<I: IntoRecordId>(&mut self, id: I, changes: &AnimalUpdate) -> Result<Animal, ApiError> {
        let id = resolve_id(&id).map_err(|e| record(&mut self.error, UPDATE_FAILED, e))?;
        let updated = self
            .service
            .update(id, changes)
            .map_err(|e| record(&mut self.error, UPDATE_FAILED, e))?;
        if let Some(slot) = self.animals.iter_mut().find(|a| a.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    pub fn delete<I: IntoRecordId>(&mut self, id: I) -> Result<(), ApiError> {
        let id = resolve_id(&id).map_err(|e| record(&mut self.error, DELETE_FAILED, e))?;
        self.service
            .delete(id)
            .map_err(|e| record(&mut self.error, DELETE_FAILED, e))?;
        self.animals.retain(|a| a.id != id);
        Ok(())
    }

    /// Local lookup; never touches the network.
    pub fn get<I: IntoRecordId>(&self, id: I) -> Option<&Animal> {
        let id = id.record_id()?;
        self.animals.iter().find(|a| a.id == id)
    }

    /// Drop everything cached, as on session end.
    pub fn clear(&mut self) {
        self.animals.clear();
        self.error = None;
    }
}
