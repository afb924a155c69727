//! Client-side core for the catalog admin: REST transcoding services for
//! the Area and Curso entities, form-binding services feeding the update
//! screens, and the supporting settings/request plumbing.

pub mod area_form;
pub mod area_service;
pub mod config;
pub mod curso_form;
pub mod curso_service;
pub mod error;
pub mod forms;
pub mod request;
mod rest;

pub use area_form::{AreaFormGroup, AreaFormService};
pub use area_service::{add_area_to_collection_if_missing, compare_area, AreaService};
pub use config::{endpoint_for, load_settings, Settings};
pub use curso_form::{CursoFormGroup, CursoFormService};
pub use curso_service::{add_curso_to_collection_if_missing, compare_curso, CursoService};
pub use error::ServiceError;
pub use request::QueryOptions;

#[cfg(test)]
mod tests;
