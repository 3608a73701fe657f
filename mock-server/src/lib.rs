use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub caretaker: String,
    pub caretaker_contact: Option<String>,
    pub vaccinated: bool,
    pub vaccine_details: Option<String>,
    pub neutered: bool,
    pub description: Option<String>,
    pub date_added: String,
}

#[derive(Deserialize)]
pub struct CreateAnimal {
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub caretaker: String,
    pub caretaker_contact: Option<String>,
    #[serde(default)]
    pub vaccinated: bool,
    pub vaccine_details: Option<String>,
    #[serde(default)]
    pub neutered: bool,
    pub description: Option<String>,
}

/// Nullable fields are `Option<Option<T>>`: absent keeps the stored value,
/// `null` clears it.
#[derive(Deserialize)]
pub struct UpdateAnimal {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub photo: Option<Option<String>>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub longitude: Option<Option<f64>>,
    pub caretaker: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub caretaker_contact: Option<Option<String>>,
    pub vaccinated: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub vaccine_details: Option<Option<String>>,
    pub neutered: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LostAnimal {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub last_seen_location: String,
    pub last_seen_date: String,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub found: bool,
    pub date_reported: String,
}

#[derive(Deserialize)]
pub struct ReportLostAnimal {
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub last_seen_location: String,
    pub last_seen_date: String,
    #[serde(default)]
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("animal not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

#[derive(Default)]
pub struct Registry {
    next_id: i64,
    animals: BTreeMap<i64, Animal>,
    lost: BTreeMap<i64, LostAnimal>,
}

impl Registry {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Registry>>;

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Registry::default()));
    Router::new()
        .route("/health", get(health))
        .route("/animals", get(list_animals).post(create_animal))
        .route("/animals/{id}", get(get_animal).put(update_animal).delete(delete_animal))
        .route("/lost", get(list_lost).post(report_lost))
        .route("/lost/found", get(list_found))
        .route("/lost/{id}/found", patch(mark_found))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("mock registry listening on {addr}");
    }
    axum::serve(listener, app().layer(TraceLayer::new_for_http())).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn list_animals(State(db): State<Db>) -> Json<Vec<Animal>> {
    let db = db.read().await;
    Json(db.animals.values().cloned().collect())
}

async fn create_animal(
    State(db): State<Db>,
    Json(input): Json<CreateAnimal>,
) -> (StatusCode, Json<Animal>) {
    let mut db = db.write().await;
    let animal = Animal {
        id: db.allocate_id(),
        name: input.name,
        photo: input.photo,
        species: input.species,
        location: input.location,
        latitude: input.latitude,
        longitude: input.longitude,
        caretaker: input.caretaker,
        caretaker_contact: input.caretaker_contact,
        vaccinated: input.vaccinated,
        vaccine_details: input.vaccine_details,
        neutered: input.neutered,
        description: input.description,
        date_added: now(),
    };
    db.animals.insert(animal.id, animal.clone());
    (StatusCode::CREATED, Json(animal))
}

async fn get_animal(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Animal>, AppError> {
    let db = db.read().await;
    db.animals.get(&id).cloned().map(Json).ok_or(AppError::NotFound)
}

async fn update_animal(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateAnimal>,
) -> Result<Json<Animal>, AppError> {
    let mut db = db.write().await;
    let animal = db.animals.get_mut(&id).ok_or(AppError::NotFound)?;
    if let Some(name) = input.name {
        animal.name = name;
    }
    if let Some(photo) = input.photo {
        animal.photo = photo;
    }
    if let Some(location) = input.location {
        animal.location = location;
    }
    if let Some(latitude) = input.latitude {
        animal.latitude = latitude;
    }
    if let Some(longitude) = input.longitude {
        animal.longitude = longitude;
    }
    if let Some(caretaker) = input.caretaker {
        animal.caretaker = caretaker;
    }
    if let Some(caretaker_contact) = input.caretaker_contact {
        animal.caretaker_contact = caretaker_contact;
    }
    if let Some(vaccinated) = input.vaccinated {
        animal.vaccinated = vaccinated;
    }
    if let Some(vaccine_details) = input.vaccine_details {
        animal.vaccine_details = vaccine_details;
    }
    if let Some(neutered) = input.neutered {
        animal.neutered = neutered;
    }
    if let Some(description) = input.description {
        animal.description = description;
    }
    Ok(Json(animal.clone()))
}

async fn delete_animal(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Message>, AppError> {
    let mut db = db.write().await;
    db.animals.remove(&id).ok_or(AppError::NotFound)?;
    Ok(Json(Message {
        message: "animal removed".to_string(),
    }))
}

async fn list_lost(State(db): State<Db>) -> Json<Vec<LostAnimal>> {
    let db = db.read().await;
    Json(db.lost.values().filter(|a| !a.found).cloned().collect())
}

async fn list_found(State(db): State<Db>) -> Json<Vec<LostAnimal>> {
    let db = db.read().await;
    Json(db.lost.values().filter(|a| a.found).cloned().collect())
}

async fn report_lost(
    State(db): State<Db>,
    Json(input): Json<ReportLostAnimal>,
) -> (StatusCode, Json<LostAnimal>) {
    let mut db = db.write().await;
    let animal = LostAnimal {
        id: db.allocate_id(),
        name: input.name,
        photo: input.photo,
        species: input.species,
        last_seen_location: input.last_seen_location,
        last_seen_date: input.last_seen_date,
        description: input.description,
        contact_name: input.contact_name,
        contact_phone: input.contact_phone,
        found: false,
        date_reported: now(),
    };
    db.lost.insert(animal.id, animal.clone());
    (StatusCode::CREATED, Json(animal))
}

async fn mark_found(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Message>, AppError> {
    let mut db = db.write().await;
    let animal = db.lost.get_mut(&id).ok_or(AppError::NotFound)?;
    animal.found = true;
    Ok(Json(Message {
        message: "animal marked as found".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_animal_defaults_flags_to_false() {
        let input: CreateAnimal = serde_json::from_str(
            r#"{"name":"Rex","species":"dog","location":"Praça","caretaker":"Ana"}"#,
        )
        .unwrap();
        assert!(!input.vaccinated);
        assert!(!input.neutered);
        assert!(input.photo.is_none());
    }

    #[test]
    fn create_animal_rejects_unknown_species() {
        let result: Result<CreateAnimal, _> = serde_json::from_str(
            r#"{"name":"Piu","species":"bird","location":"Praça","caretaker":"Ana"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_animal_all_fields_optional() {
        let input: UpdateAnimal = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.name.is_none());
        assert!(input.vaccinated.is_none());
        assert!(input.vaccine_details.is_none());
    }

    #[test]
    fn update_animal_null_is_not_absent() {
        let input: UpdateAnimal =
            serde_json::from_str(r#"{"vaccine_details":null,"photo":"a.jpg"}"#).unwrap();
        assert_eq!(input.vaccine_details, Some(None));
        assert_eq!(input.photo, Some(Some("a.jpg".to_string())));
        assert!(input.description.is_none());
    }

    #[test]
    fn ids_are_shared_across_collections() {
        let mut registry = Registry::default();
        assert_eq!(registry.allocate_id(), 1);
        assert_eq!(registry.allocate_id(), 2);
    }

    #[test]
    fn not_found_is_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
