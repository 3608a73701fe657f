//! The one owned instance of every store.
//!
//! # Design
//! Views get borrows of `AppContext` (or of a single store) passed in; there
//! is no process-wide mutable state. `start` and `shutdown` bracket the
//! session explicitly.

use tracing::info;

use crate::config::ClientConfig;
use crate::gateway::Gateway;
use crate::http::{Transport, UreqTransport};
use crate::services::{AnimalService, LostAnimalService};
use crate::store::{AnimalStore, AuthStore, LostAnimalStore};

#[derive(Debug)]
pub struct AppContext<T> {
    pub auth: AuthStore,
    pub animals: AnimalStore<T>,
    pub lost: LostAnimalStore<T>,
}

impl AppContext<UreqTransport> {
    /// Production wiring over HTTP.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(Gateway::new(&config.api_url, UreqTransport::new()))
    }
}

impl<T: Transport + Clone> AppContext<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self {
            auth: AuthStore::new(),
            animals: AnimalStore::new(AnimalService::new(gateway.clone())),
            lost: LostAnimalStore::new(LostAnimalService::new(gateway)),
        }
    }
}

impl<T: Transport> AppContext<T> {
    /// Fill both data stores. Failures land in each store's `error()`.
    pub fn start(&mut self) {
        info!("loading registry data");
        self.animals.load();
        self.lost.load();
    }

    /// End the session and forget everything cached.
    pub fn shutdown(&mut self) {
        self.auth.logout();
        self.animals.clear();
        self.lost.clear();
        info!("registry session closed");
    }
}
