//! Transport to the mapping endpoint.
//!
//! The [`Transport`] trait is the seam between the lookup pipeline and the
//! network. [`HttpTransport`] is the production implementation.

mod http;
mod traits;

pub use http::{HttpTransport, API_KEY_HEADER, API_URL};
pub use traits::{MappingCall, Transport, TransportResponse};
