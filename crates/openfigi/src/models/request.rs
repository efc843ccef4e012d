//! Mapping request model.

use std::io;
use std::time::Duration;

use serde::Serialize;
use serde_json::ser::Formatter;

use super::id_type::IdType;
use crate::errors::FigiError;

/// Timeout applied to the whole HTTP exchange unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The single query object sent to the mapping endpoint.
///
/// Field order is the wire order, and the serialized batch doubles as the
/// cache key, so reordering fields here invalidates existing cache entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingJob {
    id_type: IdType,
    id_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mic_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    market_sec_des: Option<String>,
}

impl MappingJob {
    pub fn id_type(&self) -> IdType {
        self.id_type
    }

    pub fn id_value(&self) -> &str {
        &self.id_value
    }

    pub fn exch_code(&self) -> Option<&str> {
        self.exch_code.as_deref()
    }

    pub fn mic_code(&self) -> Option<&str> {
        self.mic_code.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn market_sec_des(&self) -> Option<&str> {
        self.market_sec_des.as_deref()
    }
}

/// A single identifier lookup with its per-call options.
///
/// Built with [`MappingRequest::new`] and configured through the consuming
/// `with_*` methods; execution takes the request by value.
///
/// ```
/// use openfigi::MappingRequest;
///
/// let request = MappingRequest::new("ID_ISIN", "US3623931009")?
///     .with_exchange("US")
///     .with_api_key("my-key");
/// assert_eq!(request.job().exch_code(), Some("US"));
/// # Ok::<(), openfigi::FigiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MappingRequest {
    job: MappingJob,
    api_key: Option<String>,
    timeout: Duration,
}

impl MappingRequest {
    /// Create a request, validating the identifier type code.
    ///
    /// Fails with [`FigiError::InvalidIdentifier`] when `id_type` is not
    /// one of [`IdType::ALL`].
    pub fn new(id_type: &str, id_value: impl Into<String>) -> Result<Self, FigiError> {
        let id_type: IdType = id_type.parse()?;
        Ok(Self::for_id_type(id_type, id_value))
    }

    /// Create a request from an already validated identifier type.
    pub fn for_id_type(id_type: IdType, id_value: impl Into<String>) -> Self {
        Self {
            job: MappingJob {
                id_type,
                id_value: id_value.into(),
                exch_code: None,
                mic_code: None,
                currency: None,
                market_sec_des: None,
            },
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Limit results to an exchange code (e.g. "US"). Empty clears it.
    pub fn with_exchange(mut self, exch_code: impl Into<String>) -> Self {
        self.job.exch_code = non_empty(exch_code.into());
        self
    }

    /// Limit results to a Market Identifier Code (ISO 10383). Empty clears it.
    pub fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
        self.job.mic_code = non_empty(mic_code.into());
        self
    }

    /// Limit results to a currency. Empty clears it.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.job.currency = non_empty(currency.into());
        self
    }

    /// Limit results to a market sector (e.g. "Equity"). Empty clears it.
    pub fn with_market_sector(mut self, market_sec_des: impl Into<String>) -> Self {
        self.job.market_sec_des = non_empty(market_sec_des.into());
        self
    }

    /// Set the API key sent as `X-OPENFIGI-APIKEY`.
    ///
    /// The API works without a key but rate limits anonymous callers harder.
    /// The key is never part of the request body or the cache key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_empty(api_key.into());
        self
    }

    /// Override the timeout for the HTTP exchange.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn job(&self) -> &MappingJob {
        &self.job
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Serialize the one-element batch sent to the API.
    ///
    /// Strings are HTML-escaped (`<`, `>`, `&`, U+2028, U+2029 become
    /// `\uXXXX`) so the bytes, and with them the cache key, match what the
    /// existing OpenFIGI tooling writes.
    pub fn to_batch_body(&self) -> Result<Vec<u8>, FigiError> {
        let mut body = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, HtmlSafeFormatter);
        [&self.job].serialize(&mut serializer)?;
        Ok(body)
    }
}

/// Compact JSON with HTML-safe string escapes.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
