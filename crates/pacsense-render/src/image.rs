//! Borrowed greyscale images.

use crate::error::RenderError;

/// Lower end of the display range.
pub const VMIN: f32 = -1.0;
/// Upper end of the display range.
pub const VMAX: f32 = 1.0;

/// A row-major `(height, width)` single-channel image.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    data: &'a [f32],
    height: usize,
    width: usize,
}

impl<'a> ImageView<'a> {
    /// Wrap `data` as a `height x width` image.
    ///
    /// ```
    /// use pacsense_render::ImageView;
    ///
    /// let img = ImageView::new(&[0.0; 6], 2, 3).unwrap();
    /// assert_eq!(img.row(1).len(), 3);
    /// assert!(ImageView::new(&[0.0; 5], 2, 3).is_err());
    /// ```
    pub fn new(data: &'a [f32], height: usize, width: usize) -> Result<Self, RenderError> {
        if height == 0 || width == 0 {
            return Err(RenderError::Empty { height, width });
        }
        if height.checked_mul(width) != Some(data.len()) {
            return Err(RenderError::Shape {
                height,
                width,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row `r`. Panics if `r >= height`.
    pub fn row(&self, r: usize) -> &'a [f32] {
        &self.data[r * self.width..(r + 1) * self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [f32]> {
        self.data.chunks_exact(self.width)
    }

    /// Every pixel mapped through [`to_gray`].
    pub fn to_gray(&self) -> Vec<u8> {
        self.data.iter().map(|&v| to_gray(v)).collect()
    }
}

/// Map a value in `[VMIN, VMAX]` to an 8-bit grey level.
///
/// Values outside the range are clamped; NaN is black.
pub fn to_gray(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    let t = (v.clamp(VMIN, VMAX) - VMIN) / (VMAX - VMIN);
    (t * 255.0).round() as u8
}
