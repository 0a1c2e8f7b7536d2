//! Greyscale display of observation images.
//!
//! Images are `f32` planes shown on a fixed `[-1, 1]` scale: `-1` is
//! black, `1` is white, anything outside is clamped and NaN is black.
//! [`draw`] shows an image full-screen in the terminal until a key is
//! pressed; [`render_ascii`] writes a ten-step character ramp to any
//! writer and [`save_pgm`] an 8-bit PGM for any image viewer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod image;
pub mod output;
pub mod terminal;

pub use error::RenderError;
pub use image::{to_gray, ImageView, VMAX, VMIN};
pub use output::{ramp_char, render_ascii, save_pgm, write_pgm, RAMP};
pub use terminal::{draw, image_paragraph, render_image, show_until_key};
