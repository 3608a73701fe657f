//! Domain DTOs for the registry API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//! Server-assigned fields (`id`, `date_added`, `date_reported`) appear only on
//! the response types, so the client has no way to send or change them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::phone::clean_phone_number;

/// Server-assigned numeric identity of a record.
pub type RecordId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

/// A community animal as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: RecordId,
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub caretaker: String,
    #[serde(default)]
    pub caretaker_contact: Option<String>,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub vaccine_details: Option<String>,
    #[serde(default)]
    pub neutered: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub date_added: String,
}

/// Request payload for registering a new animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub species: Species,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub caretaker: String,
    #[serde(default)]
    pub caretaker_contact: Option<String>,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub vaccine_details: Option<String>,
    #[serde(default)]
    pub neutered: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial changeset for an existing animal. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
///
/// Nullable fields are three-state: `None` leaves the field alone,
/// `Some(None)` sends `null` and clears it, `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub photo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub longitude: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caretaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub caretaker_contact: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub vaccine_details: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

/// A present field always lands in `Some`, so an explicit `null` becomes
/// `Some(None)`. Absent fields fall back to `#[serde(default)]`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A lost-animal report as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostAnimal {
    pub id: RecordId,
    pub name: String,
    pub photo: Option<String>,
    pub species: Species,
    pub last_seen_location: String,
    pub last_seen_date: String,
    #[serde(default)]
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub found: bool,
    pub date_reported: String,
}

/// Request payload for reporting a lost animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLostAnimal {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub species: Species,
    pub last_seen_location: String,
    pub last_seen_date: String,
    #[serde(default)]
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
}

impl NewLostAnimal {
    /// Returns the payload with `contact_phone` reduced to its digits, the
    /// form the server stores.
    pub fn normalized(mut self) -> Self {
        self.contact_phone = clean_phone_number(&self.contact_phone);
        self
    }
}

/// Acknowledgement body returned by delete and mark-found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The signed-in user. Lives only as long as the client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Anything a caller may hand over as a record id: a number, or text as it
/// arrives from a route parameter.
pub trait IntoRecordId {
    /// The numeric id, or `None` when the input is not a number.
    fn record_id(&self) -> Option<RecordId>;

    /// Text form of the raw input, used in `InvalidId` errors.
    fn raw(&self) -> String;
}

macro_rules! numeric_record_id {
    ($($t:ty),*) => {$(
        impl IntoRecordId for $t {
            fn record_id(&self) -> Option<RecordId> {
                RecordId::try_from(*self).ok()
            }

            fn raw(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

numeric_record_id!(i32, u32, i64, u64);

impl IntoRecordId for &str {
    fn record_id(&self) -> Option<RecordId> {
        self.trim().parse().ok()
    }

    fn raw(&self) -> String {
        (*self).to_string()
    }
}

impl IntoRecordId for String {
    fn record_id(&self) -> Option<RecordId> {
        self.as_str().record_id()
    }

    fn raw(&self) -> String {
        self.clone()
    }
}

impl IntoRecordId for &String {
    fn record_id(&self) -> Option<RecordId> {
        self.as_str().record_id()
    }

    fn raw(&self) -> String {
        (*self).clone()
    }
}
