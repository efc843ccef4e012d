//! Identifier types accepted by the mapping endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::FigiError;

/// How the API should interpret an identifier value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdType {
    /// International Securities Identification Number
    Isin,
    /// Bloomberg unique identifier
    BbUnique,
    /// Stock Exchange Daily Official List
    Sedol,
    /// Common Code (Euroclear/Clearstream)
    Common,
    /// Wertpapierkennnummer
    Wertpapier,
    /// Committee on Uniform Securities Identification Procedures
    Cusip,
    /// CUSIP International Numbering System
    Cins,
    Bb,
    /// Italian identifier number
    Italy,
    /// Local exchange symbol
    ExchSymbol,
    FullExchangeSymbol,
    CompositeBbGlobal,
    BbGlobalShareClassLevel,
    /// FIGI
    BbGlobal,
    BbSecNumDes,
    Ticker,
    /// First 8 characters of a CUSIP
    Cusip8Chr,
    /// Options Clearing Corporation symbol
    OccSymbol,
    UniqueIdFutOpt,
    /// Options Price Reporting Authority symbol
    OpraSymbol,
    TradingSystemIdentifier,
}

impl IdType {
    /// Every identifier type, in the order the API documents them.
    pub const ALL: [IdType; 21] = [
        IdType::Isin,
        IdType::BbUnique,
        IdType::Sedol,
        IdType::Common,
        IdType::Wertpapier,
        IdType::Cusip,
        IdType::Cins,
        IdType::Bb,
        IdType::Italy,
        IdType::ExchSymbol,
        IdType::FullExchangeSymbol,
        IdType::CompositeBbGlobal,
        IdType::BbGlobalShareClassLevel,
        IdType::BbGlobal,
        IdType::BbSecNumDes,
        IdType::Ticker,
        IdType::Cusip8Chr,
        IdType::OccSymbol,
        IdType::UniqueIdFutOpt,
        IdType::OpraSymbol,
        IdType::TradingSystemIdentifier,
    ];

    /// The wire code sent as `idType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Isin => "ID_ISIN",
            IdType::BbUnique => "ID_BB_UNIQUE",
            IdType::Sedol => "ID_SEDOL",
            IdType::Common => "ID_COMMON",
            IdType::Wertpapier => "ID_WERTPAPIER",
            IdType::Cusip => "ID_CUSIP",
            IdType::Cins => "ID_CINS",
            IdType::Bb => "ID_BB",
            IdType::Italy => "ID_ITALY",
            IdType::ExchSymbol => "ID_EXCH_SYMBOL",
            IdType::FullExchangeSymbol => "ID_FULL_EXCHANGE_SYMBOL",
            IdType::CompositeBbGlobal => "COMPOSITE_ID_BB_GLOBAL",
            IdType::BbGlobalShareClassLevel => "ID_BB_GLOBAL_SHARE_CLASS_LEVEL",
            IdType::BbGlobal => "ID_BB_GLOBAL",
            IdType::BbSecNumDes => "ID_BB_SEC_NUM_DES",
            IdType::Ticker => "TICKER",
            IdType::Cusip8Chr => "ID_CUSIP_8_CHR",
            IdType::OccSymbol => "OCC_SYMBOL",
            IdType::UniqueIdFutOpt => "UNIQUE_ID_FUT_OPT",
            IdType::OpraSymbol => "OPRA_SYMBOL",
            IdType::TradingSystemIdentifier => "TRADING_SYSTEM_IDENTIFIER",
        }
    }
}

/// Check an identifier type code against the codes the API accepts.
///
/// Matching is exact: `"id_isin"` is not valid.
pub fn is_valid_identifier(id_type: &str) -> bool {
    IdType::ALL.iter().any(|t| t.as_str() == id_type)
}

impl FromStr for IdType {
    type Err = FigiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FigiError::InvalidIdentifier(s.to_string()))
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IdType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
