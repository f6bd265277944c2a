//! Raster previews of generated snowflakes

use crate::gen::Snowflake;
use crate::{Float, Point};

use eyre::Context;
use image::{ImageBuffer, Rgba};
use imageproc::drawing::{self, Blend};
use std::path::Path;

/// Creates a color from the provided RGBA integer
///
/// See also: [`rgb`].
///
/// ## Panics
///
/// This function does not panic; every `u32` is a valid RGBA color.
pub fn rgba(int: u32) -> Color {
    let r = ((int >> 24) & 0xff) as u8;
    let g = ((int >> 16) & 0xff) as u8;
    let b = ((int >> 8) & 0xff) as u8;
    let a = (int & 0xff) as u8;

    Rgba([r, g, b, a])
}

/// Creates a color from the provided RGB integer
///
/// See also: [`rgba`].
///
/// ## Panics
///
/// This function panics if the provided integer is greater than `0xffffff`.
pub fn rgb(int: u32) -> Color {
    assert!(int <= 0xffffff);

    rgba((int << 8) + 0xff)
}

/// The color type we're using
pub type Color = Rgba<u8>;

/// Type alias to represent a number of pixels. This is only provided so that the meaning behind
/// types can be more clear.
pub type PixelCount = u32;

/// Configuration items for making an image
#[derive(Debug)]
pub struct ImageConfig {
    /// Extra space added around each side of the snowflake's canvas
    pub padding: PixelCount,
    /// Background color of the image
    pub background: Color,
    /// Color of the snowflake itself
    pub fill: Color,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            padding: 10,
            background: rgba(0x00000000),
            fill: rgb(0xFFFFFF),
        }
    }
}

/// Helper type alias
type ImageCanvas = Blend<ImageBuffer<Color, Vec<u8>>>;

impl ImageConfig {
    /// Creates an `ImageBuffer` with the snowflake drawn in the center
    ///
    /// The image is a square, with side length equal to the snowflake's canvas (`2L`) plus the
    /// padding on either side. Polygons are not antialiased.
    pub fn make_image(&self, flake: &Snowflake) -> ImageBuffer<Color, Vec<u8>> {
        let side = (2.0 * flake.extent()).ceil() as PixelCount + 2 * self.padding;

        // Blending from the `image` crate generally assumes that `self` is the background and
        // `other` is the foreground, so we can just draw everything in order.
        let mut buf = Blend(ImageBuffer::from_pixel(side, side, self.background));

        let ctx = DrawContext {
            center: side as Float / 2.0,
            height: side,
        };

        for polygon in flake.polygons() {
            self.draw_polygon(&mut buf, ctx, polygon.vertices());
        }

        buf.0
    }

    /// Renders the snowflake and saves it to `path`. The format is chosen by the file extension.
    pub fn save(&self, flake: &Snowflake, path: &Path) -> eyre::Result<()> {
        self.make_image(flake)
            .save(path)
            .wrap_err_with(|| format!("failed to write image to {:?}", path.to_string_lossy()))
    }

    fn draw_polygon(&self, canvas: &mut ImageCanvas, ctx: DrawContext, vertices: &[Point]) {
        let mut points: Vec<_> = vertices.iter().map(|&p| ctx.point_to_coords(p)).collect();

        // `draw_polygon_mut` panics if the polygon is explicitly closed, which can happen here
        // after rounding small polygons to whole pixels.
        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return;
        }

        drawing::draw_polygon_mut(canvas, &points, self.fill);
    }
}

#[derive(Copy, Clone, Debug)]
struct DrawContext {
    /// Pixel offset of the snowflake's center from the top-left corner, in both directions
    center: Float,

    /// The height of the image. We need this because drawing has the origin at the top-left
    /// corner, so we need to flip the image to get positive Y pointing up.
    height: PixelCount,
}

impl DrawContext {
    /// Converts a point to its corresponding location in the image
    fn point_to_coords(&self, p: Point) -> imageproc::point::Point<i32> {
        let x = (p.x + self.center).round() as i32;
        let y = (p.y + self.center).round() as i32;
        imageproc::point::Point::new(x, self.height as i32 - y)
    }
}
