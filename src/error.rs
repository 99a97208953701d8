use std::fmt::{Display, Error, Formatter};

use qrcode::types::QrError;

// Error
//------------------------------------------------------------------------------

/// Failure to produce a barcode bitmap.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    /// Input text was empty; there is nothing to encode.
    EmptyData,
    /// Requested width or height was zero.
    InvalidDimensions { width: u32, height: u32 },
    /// Write failure from the underlying encoder, carried verbatim.
    Write(QrError),
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::EmptyData => f.write_str("empty data"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}")
            }
            Self::Write(e) => write!(f, "barcode write failed: {e}"),
        }
    }
}

impl std::error::Error for QRError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QrError> for QRError {
    fn from(e: QrError) -> Self {
        Self::Write(e)
    }
}

pub type QRResult<T> = Result<T, QRError>;
