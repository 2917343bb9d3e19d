//! Drawing surface capability used by the compiler
//!
//! The core only needs blank off-screen surfaces and axis-aligned rectangle
//! copies between equally sized regions. Any `image` buffer provides both.

use crate::io::error::{AutotileError, Result};
use image::{ImageBuffer, Pixel};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a region from its origin and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square region with the given edge length
    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Check that the region lies fully inside a surface of the given size
    pub const fn fits_within(&self, (width, height): (u32, u32)) -> bool {
        (self.x as u64 + self.width as u64) <= width as u64
            && (self.y as u64 + self.height as u64) <= height as u64
    }

    const fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Off-screen drawing surface
pub trait Surface: Sized {
    /// Create a fully transparent surface
    fn blank(width: u32, height: u32) -> Self;

    /// Surface size as (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Copy `region` of `source` to `(dest_x, dest_y)` on this surface
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` if the region does not fit the source or
    /// the destination. Nothing is written in that case.
    fn copy_region(&mut self, source: &Self, region: Region, dest_x: u32, dest_y: u32)
    -> Result<()>;
}

fn ensure_fits(surface: &'static str, region: Region, bounds: (u32, u32)) -> Result<()> {
    if region.fits_within(bounds) {
        Ok(())
    } else {
        Err(AutotileError::RegionOutOfBounds {
            surface,
            region: region.as_tuple(),
            bounds,
        })
    }
}

impl<P: Pixel> Surface for ImageBuffer<P, Vec<P::Subpixel>> {
    fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn copy_region(
        &mut self,
        source: &Self,
        region: Region,
        dest_x: u32,
        dest_y: u32,
    ) -> Result<()> {
        ensure_fits("source", region, Surface::dimensions(source))?;
        let target = Region::new(dest_x, dest_y, region.width, region.height);
        ensure_fits("destination", target, Surface::dimensions(self))?;

        for dy in 0..region.height {
            for dx in 0..region.width {
                let pixel = *source.get_pixel(region.x + dx, region.y + dy);
                self.put_pixel(dest_x + dx, dest_y + dy, pixel);
            }
        }

        Ok(())
    }
}
