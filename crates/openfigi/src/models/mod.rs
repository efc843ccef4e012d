//! Request and response models for the mapping endpoint.

mod id_type;
mod record;
mod request;

pub use id_type::{is_valid_identifier, IdType};
pub use record::FigiRecord;
pub use request::{MappingJob, MappingRequest, DEFAULT_TIMEOUT};
