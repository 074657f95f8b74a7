//! In-memory stand-in for one backend collection, shared by the controller
//! flow tests. Keeps a call log so tests can assert which operations did or
//! did not reach the "network".

// Not every test binary uses every constructor.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use catalog_admin::client::{ClientError, CollectionApi};
use catalog_admin::models::{
    Category, Part, Precision, Resource, Size, Unit,
};

fn status_error(operation: &'static str) -> ClientError {
    ClientError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        operation,
    }
}

#[derive(Clone)]
pub struct FakeApi<R: Resource> {
    rows: Arc<Mutex<Vec<R>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_next: Arc<AtomicBool>,
    insert: fn(&R::Payload, &[R]) -> R,
    apply: fn(&R::Key, &R::Payload) -> R,
}

impl<R: Resource> FakeApi<R> {
    pub fn new(
        rows: Vec<R>,
        insert: fn(&R::Payload, &[R]) -> R,
        apply: fn(&R::Key, &R::Payload) -> R,
    ) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(AtomicBool::new(false)),
            insert,
            apply,
        }
    }

    /// Makes the next call answer with a 500.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<R> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self, operation: &'static str) -> Result<(), ClientError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(status_error(operation))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<R: Resource> CollectionApi<R> for FakeApi<R> {
    async fn list(&self, filter: Option<&str>) -> Result<Vec<R>, ClientError> {
        self.record(format!("list {}", filter.unwrap_or("-")));
        self.take_failure("list")?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, payload: &R::Payload) -> Result<R, ClientError> {
        self.record("create".to_string());
        self.take_failure("create")?;
        let mut rows = self.rows.lock().unwrap();
        let row = (self.insert)(payload, &rows);
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, key: &R::Key, payload: &R::Payload) -> Result<R, ClientError> {
        self.record(format!("update {key}"));
        self.take_failure("update")?;
        let row = (self.apply)(key, payload);
        let mut rows = self.rows.lock().unwrap();
        if let Some(slot) = rows.iter_mut().find(|r| r.key() == *key) {
            *slot = row.clone();
        }
        Ok(row)
    }

    async fn delete(&self, key: &R::Key) -> Result<(), ClientError> {
        self.record(format!("delete {key}"));
        self.take_failure("delete")?;
        self.rows.lock().unwrap().retain(|r| r.key() != *key);
        Ok(())
    }
}

pub fn category_api(initial: Vec<Category>) -> FakeApi<Category> {
    FakeApi::new(
        initial,
        |payload, rows| Category {
            id: rows.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: payload.name.clone(),
        },
        |key, payload| Category {
            id: *key,
            name: payload.name.clone(),
        },
    )
}

pub fn size_api(initial: Vec<Size>) -> FakeApi<Size> {
    FakeApi::new(
        initial,
        |payload, _| Size {
            id: payload.id.clone(),
        },
        |_, payload| Size {
            id: payload.id.clone(),
        },
    )
}

pub fn unit_api(initial: Vec<Unit>) -> FakeApi<Unit> {
    FakeApi::new(
        initial,
        |payload, _| Unit {
            id: payload.id.clone(),
        },
        |_, payload| Unit {
            id: payload.id.clone(),
        },
    )
}

pub fn precision_api(initial: Vec<Precision>) -> FakeApi<Precision> {
    FakeApi::new(
        initial,
        |payload, rows| Precision {
            id: rows.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            value: payload.value.clone(),
        },
        |key, payload| Precision {
            id: *key,
            value: payload.value.clone(),
        },
    )
}

pub fn part_api(initial: Vec<Part>) -> FakeApi<Part> {
    FakeApi::new(
        initial,
        |payload, rows| Part {
            id: rows.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: payload.name.clone(),
            category_id: payload.category_id.unwrap_or(0),
            size_id: payload.size_id.clone(),
            unit_id: payload.unit_id.clone(),
            precision_id: payload.precision_id.parse().unwrap_or(0),
        },
        |key, payload| Part {
            id: *key,
            name: payload.name.clone(),
            category_id: payload.category_id.unwrap_or(0),
            size_id: payload.size_id.clone(),
            unit_id: payload.unit_id.clone(),
            precision_id: payload.precision_id.parse().unwrap_or(0),
        },
    )
}
