//! Mapping record returned by the API.

use serde::{Deserialize, Deserializer, Serialize};

/// One instrument matched by a mapping request.
///
/// All fields are passed through as the API reports them. The API sends
/// `null` for attributes it does not have; those decode as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigiRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub figi: String,
    #[serde(rename = "securityType", default, deserialize_with = "null_as_empty")]
    pub security_type: String,
    #[serde(rename = "marketSector", default, deserialize_with = "null_as_empty")]
    pub market_sector: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ticker: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "uniqueID", default, deserialize_with = "null_as_empty")]
    pub unique_id: String,
    #[serde(rename = "exchCode", default, deserialize_with = "null_as_empty")]
    pub exchange_code: String,
    #[serde(rename = "shareClassFIGI", default, deserialize_with = "null_as_empty")]
    pub share_class_figi: String,
    #[serde(rename = "compositeFIGI", default, deserialize_with = "null_as_empty")]
    pub composite_figi: String,
    #[serde(rename = "securityType2", default, deserialize_with = "null_as_empty")]
    pub security_type2: String,
    #[serde(
        rename = "securityDescription",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub security_description: String,
    #[serde(rename = "uniqueIDFutOpt", default, deserialize_with = "null_as_empty")]
    pub unique_id_fut_opt: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parsing() {
        let json = r#"{
            "figi": "BBG000BCR153",
            "securityType": "Common Stock",
            "marketSector": "Equity",
            "ticker": "GTT",
            "name": "GTT COMMUNICATIONS INC",
            "uniqueID": "EQ0000000009561290",
            "exchCode": "US",
            "shareClassFIGI": "BBG001S5PXG8",
            "compositeFIGI": "BBG000BCR153",
            "securityType2": "Common Stock",
            "securityDescription": "GTT",
            "uniqueIDFutOpt": null
        }"#;

        let record: FigiRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.figi, "BBG000BCR153");
        assert_eq!(record.ticker, "GTT");
        assert_eq!(record.name, "GTT COMMUNICATIONS INC");
        assert_eq!(record.unique_id, "EQ0000000009561290");
        assert_eq!(record.exchange_code, "US");
        assert_eq!(record.share_class_figi, "BBG001S5PXG8");
        assert_eq!(record.unique_id_fut_opt, "");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: FigiRecord = serde_json::from_str(r#"{"figi": "BBG000BLNNH6"}"#).unwrap();
        assert_eq!(record.figi, "BBG000BLNNH6");
        assert_eq!(record.ticker, "");
        assert_eq!(record.security_description, "");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let record = FigiRecord {
            ticker: "IBM".to_string(),
            exchange_code: "UN".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["ticker"], "IBM");
        assert_eq!(value["exchCode"], "UN");
        assert_eq!(value["uniqueIDFutOpt"], "");
    }
}
