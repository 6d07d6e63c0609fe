//! Currency identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized currency key. Always stored lowercase, rendered uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// Lowercase form, as used by the rates API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_uppercase())
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<Currency> for CurrencyCode {
    fn from(currency: Currency) -> Self {
        Self::new(currency.code())
    }
}

/// Currencies the fetcher can sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Gbp,
    Jpy,
    Chf,
    Cad,
    Aud,
    Nzd,
    Sek,
    Nok,
    Dkk,
    Pln,
    Czk,
    Huf,
    Ron,
    Isk,
    Try,
    Cny,
    Hkd,
    Sgd,
    Inr,
    Krw,
    Thb,
    Idr,
    Myr,
    Php,
    Mxn,
    Brl,
    Zar,
    Ils,
    Aed,
}

impl Currency {
    pub const ALL: [Currency; 30] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Chf,
        Currency::Cad,
        Currency::Aud,
        Currency::Nzd,
        Currency::Sek,
        Currency::Nok,
        Currency::Dkk,
        Currency::Pln,
        Currency::Czk,
        Currency::Huf,
        Currency::Ron,
        Currency::Isk,
        Currency::Try,
        Currency::Cny,
        Currency::Hkd,
        Currency::Sgd,
        Currency::Inr,
        Currency::Krw,
        Currency::Thb,
        Currency::Idr,
        Currency::Myr,
        Currency::Php,
        Currency::Mxn,
        Currency::Brl,
        Currency::Zar,
        Currency::Ils,
        Currency::Aed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Gbp => "gbp",
            Currency::Jpy => "jpy",
            Currency::Chf => "chf",
            Currency::Cad => "cad",
            Currency::Aud => "aud",
            Currency::Nzd => "nzd",
            Currency::Sek => "sek",
            Currency::Nok => "nok",
            Currency::Dkk => "dkk",
            Currency::Pln => "pln",
            Currency::Czk => "czk",
            Currency::Huf => "huf",
            Currency::Ron => "ron",
            Currency::Isk => "isk",
            Currency::Try => "try",
            Currency::Cny => "cny",
            Currency::Hkd => "hkd",
            Currency::Sgd => "sgd",
            Currency::Inr => "inr",
            Currency::Krw => "krw",
            Currency::Thb => "thb",
            Currency::Idr => "idr",
            Currency::Myr => "myr",
            Currency::Php => "php",
            Currency::Mxn => "mxn",
            Currency::Brl => "brl",
            Currency::Zar => "zar",
            Currency::Ils => "ils",
            Currency::Aed => "aed",
        }
    }
}
