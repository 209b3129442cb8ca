pub mod catalogue_repository;
pub mod file_catalogue_repository;
pub mod google_tts_repository;
pub mod synthesis_repository;

pub use catalogue_repository::CatalogueRepository;
pub use file_catalogue_repository::FileCatalogueRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use synthesis_repository::SynthesisRepository;
