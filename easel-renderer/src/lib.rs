//! Software rasterizer for the easel drawing surface.
//!
//! Implements the [`easel_core::Surface`] trait over a plain RGBA pixel
//! buffer, so every input modality in `easel-core` renders through real
//! pixels without a GPU or a windowing system. Snapshots are PNG, which
//! doubles as the wire format the persistence server stores.
//!
//! ## Modules
//!
//! - [`surface`]: [`RasterSurface`], the CPU painting implementation
//! - [`font`]: a built-in 5x7 bitmap font for placeholder labels
//! - [`export`]: PNG data URL encoding for the persistence API
//! - [`error`]: rasterizer error types

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod export;
pub mod font;
pub mod surface;

pub use error::{RenderError, RenderResult};
pub use export::{snapshot_from_data_url, snapshot_to_data_url, DATA_URL_PREFIX};
pub use surface::RasterSurface;
