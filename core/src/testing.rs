//! Scripted transport shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Answers requests from a queue of canned replies and keeps a log of every
/// request it saw. Running out of replies is a transport failure.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::RequestFailed { status: None }));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::RequestFailed { status: None }))
    }
}

pub fn gateway(transport: &ScriptedTransport) -> Gateway<&ScriptedTransport> {
    Gateway::new("http://api", transport)
}

pub fn animal_json(id: i64, name: &str) -> String {
    format!(
        r#"{{"id":{id},"name":"{name}","photo":null,"species":"dog","location":"Praça da Sé",
            "latitude":-23.55,"longitude":-46.63,"caretaker":"Ana","caretaker_contact":"11987654321",
            "vaccinated":true,"vaccine_details":"V10","neutered":false,"description":null,
            "date_added":"2024-01-0{id}T10:00:00"}}"#
    )
}

pub fn lost_json(id: i64, name: &str, found: bool) -> String {
    format!(
        r#"{{"id":{id},"name":"{name}","photo":null,"species":"cat","last_seen_location":"Centro",
            "last_seen_date":"2024-03-02T00:00:00","description":"white paws","contact_name":"João",
            "contact_phone":"11987654321","found":{found},"date_reported":"2024-03-03T09:00:00"}}"#
    )
}

pub fn list_json(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}
