//! Parts screen aggregate: the part editor plus the four reference
//! collections its rows point into.

use tracing::warn;

use crate::client::{ClientError, CollectionApi, RestClient};
use crate::models::{Category, Part, Precision, Size, Unit};
use crate::resolver::resolve_label;

use super::Editor;

/// The parts editor together with the side collections needed to resolve its
/// foreign keys for display. The side collections are read-only here; they
/// are managed by their own editors on their own screens.
pub struct PartsScreen {
    parts: Editor<Part>,
    categories_api: Box<dyn CollectionApi<Category>>,
    sizes_api: Box<dyn CollectionApi<Size>>,
    units_api: Box<dyn CollectionApi<Unit>>,
    precisions_api: Box<dyn CollectionApi<Precision>>,
    categories: Vec<Category>,
    sizes: Vec<Size>,
    units: Vec<Unit>,
    precisions: Vec<Precision>,
    load_error: Option<String>,
}

impl PartsScreen {
    pub fn new(
        parts_api: Box<dyn CollectionApi<Part>>,
        categories_api: Box<dyn CollectionApi<Category>>,
        sizes_api: Box<dyn CollectionApi<Size>>,
        units_api: Box<dyn CollectionApi<Unit>>,
        precisions_api: Box<dyn CollectionApi<Precision>>,
    ) -> Self {
        Self {
            parts: Editor::new(parts_api),
            categories_api,
            sizes_api,
            units_api,
            precisions_api,
            categories: Vec::new(),
            sizes: Vec::new(),
            units: Vec::new(),
            precisions: Vec::new(),
            load_error: None,
        }
    }

    /// Wires every collection to the same backend.
    pub fn connect(client: &RestClient) -> Self {
        Self::new(
            Box::new(client.clone()),
            Box::new(client.clone()),
            Box::new(client.clone()),
            Box::new(client.clone()),
            Box::new(client.clone()),
        )
    }

    /// Loads the parts list and all four side collections concurrently.
    /// A failing side load is surfaced as the screen error; side collections
    /// that did load are kept, and unresolved keys fall back to their raw
    /// identifiers.
    pub async fn load_all(&mut self) {
        let (_, categories, sizes, units, precisions) = tokio::join!(
            self.parts.load(None),
            self.categories_api.list(None),
            self.sizes_api.list(None),
            self.units_api.list(None),
            self.precisions_api.list(None),
        );
        self.load_error = None;
        accept(&mut self.categories, &mut self.load_error, "categories", categories);
        accept(&mut self.sizes, &mut self.load_error, "sizes", sizes);
        accept(&mut self.units, &mut self.load_error, "units", units);
        accept(&mut self.precisions, &mut self.load_error, "precisions", precisions);
    }

    pub fn editor(&self) -> &Editor<Part> {
        &self.parts
    }

    pub fn editor_mut(&mut self) -> &mut Editor<Part> {
        &mut self.parts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn precisions(&self) -> &[Precision] {
        &self.precisions
    }

    /// Error from the most recent [`PartsScreen::load_all`], if any side
    /// collection failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn category_label(&self, id: i64) -> String {
        resolve_label(&self.categories, &id)
    }

    pub fn size_label(&self, id: &str) -> String {
        resolve_label(&self.sizes, &id.to_string())
    }

    pub fn unit_label(&self, id: &str) -> String {
        resolve_label(&self.units, &id.to_string())
    }

    pub fn precision_label(&self, id: i64) -> String {
        resolve_label(&self.precisions, &id)
    }
}

/// Applies one side-collection result: a success replaces the rows, a
/// failure keeps the previous rows and records the screen error.
fn accept<T>(
    target: &mut Vec<T>,
    load_error: &mut Option<String>,
    collection: &'static str,
    result: Result<Vec<T>, ClientError>,
) {
    match result {
        Ok(rows) => *target = rows,
        Err(err) => {
            warn!(collection, error = %err, "side collection load failed");
            *load_error = Some(err.to_string());
        }
    }
}
