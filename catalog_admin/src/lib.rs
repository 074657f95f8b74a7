//! Administrative client for a small parts reference-data catalog.
//!
//! The catalog consists of four reference collections (categories, sizes,
//! units, precisions) and a dependent `parts` collection whose rows reference
//! all four. Each collection is managed by the same generic
//! [`Editor`](editor::Editor) controller, parameterized by a
//! [`Resource`](models::Resource) schema descriptor; the five entities are
//! trait implementations rather than five copies of the controller.
//!
//! Layers, leaves first:
//! - [`validate`] — pure, synchronous field rules shared by the schemas.
//! - [`client`] — the REST collection client ([`client::RestClient`]) and the
//!   [`client::CollectionApi`] seam the controller is tested against.
//! - [`resolver`] — foreign-key display resolution for the parts screen.
//! - [`editor`] — the list-and-edit controller and the parts aggregate.
//!
//! The backend is an external collaborator reached over HTTP; its location is
//! the single recognized configuration option ([`config::AdminConfig`]).

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod editor;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod validate;
