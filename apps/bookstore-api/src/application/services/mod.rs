//! Application Services
//!
//! Services sit between driver adapters and repository ports. Business
//! rules (validation, authorization, derived fields) belong here.

mod catalog_service;

pub use catalog_service::CatalogService;
