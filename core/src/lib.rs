//! Client core for the community animal registry.
//!
//! # Overview
//! Keeps a local, consistent copy of the registry's animals and lost-animal
//! reports, mirroring the REST API's CRUD operations, plus the phone
//! formatting and search predicates the views rely on.
//!
//! # Design
//! - `Gateway` wraps the HTTP verbs; the round-trip itself goes through the
//!   `Transport` trait so stores can be driven by a scripted transport in
//!   tests and by `UreqTransport` in production.
//! - `AnimalService` / `LostAnimalService` map each operation to one fixed
//!   verb and path.
//! - Stores apply a change locally only after the server confirmed it, using
//!   the server's returned record.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod http;
pub mod phone;
pub mod services;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use app::AppContext;
pub use config::ClientConfig;
pub use error::ApiError;
pub use filter::{map_search, AnimalFilter, LostAnimalFilter, SpeciesFilter, VaccinationFilter};
pub use gateway::Gateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use phone::{clean_phone_number, format_phone_display, format_phone_input};
pub use services::{AnimalService, LostAnimalService};
pub use store::{AnimalStore, AuthStore, LostAnimalStore};
pub use types::{
    Animal, AnimalUpdate, IntoRecordId, LostAnimal, MessageResponse, NewAnimal, NewLostAnimal, RecordId, Species,
    User,
};
