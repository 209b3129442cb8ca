pub mod error;
pub mod model;
pub mod service;
pub mod validate;

pub use error::CatalogueServiceError;
pub use model::{Catalogue, Category, Phrase, PhraseList, Translation};
pub use service::{CatalogueService, CatalogueServiceApi};
pub use validate::{validate, ValidationReport};
