//! Typed façades mapping registry operations onto gateway calls.
//!
//! Each method is exactly one request with a fixed verb and path.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::Transport;
use crate::types::{Animal, AnimalUpdate, LostAnimal, MessageResponse, NewAnimal, NewLostAnimal, RecordId};

#[derive(Debug, Clone)]
pub struct AnimalService<T> {
    gateway: Gateway<T>,
}

impl<T: Transport> AnimalService<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /animals`
    pub fn list(&self) -> Result<Vec<Animal>, ApiError> {
        self.gateway.get("/animals")
    }

    /// `GET /animals/{id}`
    pub fn fetch(&self, id: RecordId) -> Result<Animal, ApiError> {
        self.gateway.get(&format!("/animals/{id}"))
    }

    /// `POST /animals`
    pub fn create(&self, input: &NewAnimal) -> Result<Animal, ApiError> {
        self.gateway.post("/animals", input)
    }

    /// `PUT /animals/{id}`
    pub fn update(&self, id: RecordId, changes: &AnimalUpdate) -> Result<Animal, ApiError> {
        self.gateway.put(&format!("/animals/{id}"), changes)
    }

    /// `DELETE /animals/{id}`
    pub fn delete(&self, id: RecordId) -> Result<MessageResponse, ApiError> {
        self.gateway.delete(&format!("/animals/{id}"))
    }
}

#[derive(Debug, Clone)]
pub struct LostAnimalService<T> {
    gateway: Gateway<T>,
}

impl<T: Transport> LostAnimalService<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /lost`, animals still missing.
    pub fn list_lost(&self) -> Result<Vec<LostAnimal>, ApiError> {
        self.gateway.get("/lost")
    }

    /// `GET /lost/found`
    pub fn list_found(&self) -> Result<Vec<LostAnimal>, ApiError> {
        self.gateway.get("/lost/found")
    }

    /// `POST /lost`
    pub fn report(&self, input: &NewLostAnimal) -> Result<LostAnimal, ApiError> {
        self.gateway.post("/lost", input)
    }

    /// `PATCH /lost/{id}/found` with an empty object body.
    pub fn mark_found(&self, id: RecordId) -> Result<MessageResponse, ApiError> {
        self.gateway.patch(&format!("/lost/{id}/found"), &serde_json::json!({}))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::types::Species;

    /// Records every request and answers with the configured body.
    struct Recorder {
        body: String,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for Recorder {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    fn recorder(body: &str) -> Recorder {
        Recorder {
            body: body.to_string(),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn last(rec: &Recorder) -> (HttpMethod, String, Option<String>) {
        let seen = rec.seen.borrow();
        let req = seen.last().unwrap();
        (req.method, req.path.clone(), req.body.clone())
    }

    const ANIMAL: &str = r#"{"id":5,"name":"Rex","photo":null,"species":"dog","location":"Praça",
        "latitude":-23.5,"longitude":-46.6,"caretaker":"Ana","caretaker_contact":null,
        "vaccinated":true,"vaccine_details":"V10","neutered":false,"description":null,
        "date_added":"2024-01-01T10:00:00"}"#;

    #[test]
    fn animal_routes() {
        let rec = recorder("[]");
        let svc = AnimalService::new(Gateway::new("http://api", &rec));
        svc.list().unwrap();
        assert_eq!(last(&rec), (HttpMethod::Get, "http://api/animals".to_string(), None));

        let rec = recorder(ANIMAL);
        let svc = AnimalService::new(Gateway::new("http://api", &rec));
        let animal = svc.fetch(5).unwrap();
        assert_eq!(animal.id, 5);
        assert_eq!(last(&rec).1, "http://api/animals/5");

        let changes = AnimalUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        };
        svc.update(5, &changes).unwrap();
        let (method, path, body) = last(&rec);
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(path, "http://api/animals/5");
        assert_eq!(body.as_deref(), Some(r#"{"name":"X"}"#));

        let new = NewAnimal {
            name: "Rex".to_string(),
            photo: None,
            species: Species::Dog,
            location: "Praça".to_string(),
            latitude: None,
            longitude: None,
            caretaker: "Ana".to_string(),
            caretaker_contact: None,
            vaccinated: false,
            vaccine_details: None,
            neutered: false,
            description: None,
        };
        svc.create(&new).unwrap();
        assert_eq!(last(&rec).0, HttpMethod::Post);
        assert_eq!(last(&rec).1, "http://api/animals");
    }

    #[test]
    fn animal_delete_route() {
        let rec = recorder(r#"{"message":"removed"}"#);
        let svc = AnimalService::new(Gateway::new("http://api", &rec));
        let ack = svc.delete(9).unwrap();
        assert_eq!(ack.message, "removed");
        assert_eq!(last(&rec), (HttpMethod::Delete, "http://api/animals/9".to_string(), None));
    }

    #[test]
    fn lost_routes() {
        let rec = recorder("[]");
        let svc = LostAnimalService::new(Gateway::new("http://api", &rec));
        svc.list_lost().unwrap();
        assert_eq!(last(&rec).1, "http://api/lost");
        svc.list_found().unwrap();
        assert_eq!(last(&rec).1, "http://api/lost/found");

        let rec = recorder(r#"{"message":"found"}"#);
        let svc = LostAnimalService::new(Gateway::new("http://api", &rec));
        svc.mark_found(7).unwrap();
        let (method, path, body) = last(&rec);
        assert_eq!(method, HttpMethod::Patch);
        assert_eq!(path, "http://api/lost/7/found");
        assert_eq!(body.as_deref(), Some("{}"));
    }
}
