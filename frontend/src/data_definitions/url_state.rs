//! Directory view packed into the `/companies/:view` path segment.
//!
//! Segment = URL-safe base64 of the CBOR form, so a copied link restores the
//! exact filters, search and page.

use std::{fmt::Display, str::FromStr};

use base64::{Engine, engine::general_purpose::URL_SAFE};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A route segment holding a whole serializable value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlState<T>(pub T);

impl<T> From<T> for UrlState<T> {
    fn from(value: T) -> Self {
        UrlState(value)
    }
}

impl<T: Serialize> UrlState<T> {
    /// `None` only when the value cannot be written as CBOR.
    pub fn encode(&self) -> Option<String> {
        let mut cbor = Vec::new();
        ciborium::into_writer(&self.0, &mut cbor).ok()?;
        Some(URL_SAFE.encode(cbor))
    }
}

impl<T: DeserializeOwned> UrlState<T> {
    pub fn decode(segment: &str) -> Result<Self, UrlStateError> {
        let cbor = URL_SAFE.decode(segment.as_bytes()).map_err(UrlStateError::Base64)?;
        ciborium::from_reader(cbor.as_slice()).map(UrlState).map_err(UrlStateError::Cbor)
    }
}

// an unencodable value renders as an empty segment, which fails to decode
impl<T: Serialize> Display for UrlState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.encode().as_deref().unwrap_or_default())
    }
}

impl<T: DeserializeOwned> FromStr for UrlState<T> {
    type Err = UrlStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// A view segment that is not one this app wrote.
#[derive(Debug)]
pub enum UrlStateError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "view segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "view segment does not decode: {}", err),
        }
    }
}

impl std::error::Error for UrlStateError {}
