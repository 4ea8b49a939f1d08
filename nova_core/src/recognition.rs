//! Scan events and their recognition results.
//!
//! A miss is an ordinary outcome: the scanned code simply is not a Nova card.
//! Callers show `RecognitionError::user_message` and let the user try again.

use thiserror::Error;

use crate::card::CardDefinition;

/// How a card was identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanMethod {
    /// Payload decoded from the card's QR code, matched verbatim.
    Qr,
    /// Image marker already resolved by the AR layer to a card id.
    Marker,
}

impl ScanMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Marker => "marker",
        }
    }
}

impl std::fmt::Display for ScanMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token handed over by the scanning layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Qr(String),
    Marker(String),
}

impl ScanEvent {
    #[must_use]
    pub const fn method(&self) -> ScanMethod {
        match self {
            Self::Qr(_) => ScanMethod::Qr,
            Self::Marker(_) => ScanMethod::Marker,
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Qr(token) | Self::Marker(token) => token,
        }
    }
}

/// A successfully recognized card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition<'a> {
    pub card: &'a CardDefinition,
    pub method: ScanMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("token not recognized ({method}): {token}")]
    TokenNotRecognized { token: String, method: ScanMethod },
}

impl RecognitionError {
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::TokenNotRecognized { token, .. } => token,
        }
    }

    /// Retry prompt shown to the user after a miss.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::TokenNotRecognized {
                method: ScanMethod::Qr,
                ..
            } => "QR Code tidak dikenali sebagai kartu Nova yang valid.",
            Self::TokenNotRecognized {
                method: ScanMethod::Marker,
                ..
            } => "Kartu tidak dapat dikenali. Pastikan kartu terlihat jelas.",
        }
    }
}
