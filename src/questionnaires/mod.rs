//! Questionnaire engines and their collaborator seams.

pub mod psychosocial;
pub mod repository;
pub mod service;
pub mod trauma;
