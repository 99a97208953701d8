//! # qrgen
//!
//! A small Rust library for generating QR code bitmaps. Encoding is
//! delegated to a mature QR encoder; this crate binds it to the `image`
//! crate and renders grayscale bitmaps fitted and centered to the requested
//! pixel dimensions.
//!
//! ## Features
//!
//! - **One-shot generation**: encode a string and get back an owned
//!   [`image::GrayImage`], or a typed error if the text cannot be encoded
//! - **Dimension fitting**: the symbol and its quiet zone are scaled by the
//!   largest whole module size that fits the request and centered on a
//!   white canvas of exactly the requested dimensions
//! - **Typed failures**: over-capacity text, empty input, and zero
//!   dimensions surface as [`QRError`] values, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use qrgen::generate_bar_code;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = generate_bar_code("https://example.com", 200, 200)?;
//! assert_eq!(img.dimensions(), (200, 200));
//! img.save("qr.png")?;
//! # std::fs::remove_file("qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Builder with defaults
//!
//! ```rust
//! use qrgen::{BarcodeBuilder, DEFAULT_SIZE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Width and height default to 200 pixels.
//! let img = BarcodeBuilder::new("Hello, world!").render()?;
//! assert_eq!(img.dimensions(), (DEFAULT_SIZE, DEFAULT_SIZE));
//! # Ok(())
//! # }
//! ```
//!
//! ### Handling encode failures
//!
//! ```rust
//! use qrgen::{generate_bar_code, QRError};
//!
//! // Several kilobytes exceed QR capacity at error correction level L.
//! let text = "x".repeat(4096);
//! let err = generate_bar_code(&text, 200, 200).unwrap_err();
//! assert!(matches!(err, QRError::Write(_)));
//! ```

pub mod builder;
pub mod error;
pub(crate) mod render;

pub use builder::{generate_bar_code, BarcodeBuilder, DEFAULT_SIZE};
pub use error::{QRError, QRResult};
