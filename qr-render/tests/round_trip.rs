//! Draw-and-decode round trip through an in-memory surface

use image::{Rgb as ImageRgb, RgbImage};
use qr_render::{Error, QrRenderer, RenderOptions, Result, Rgb, Surface};

const ANNIVERSARY_URL: &str = "https://aaniversary-eight.vercel.app/";

/// In-memory pixel surface standing in for the browser canvas
#[derive(Default)]
struct PixelSurface {
    image: Option<RgbImage>,
}

impl PixelSurface {
    fn image(&self) -> &RgbImage {
        self.image.as_ref().expect("surface was never cleared")
    }
}

impl Surface for PixelSurface {
    fn clear(&mut self, side: u32, background: Rgb) -> Result<()> {
        let pixel = ImageRgb([background.0, background.1, background.2]);
        self.image = Some(RgbImage::from_pixel(side, side, pixel));
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) -> Result<()> {
        let image = self
            .image
            .as_mut()
            .ok_or_else(|| Error::Surface("fill_rect before clear".to_string()))?;
        let (width, height) = image.dimensions();

        // Round each edge independently; adjacent modules share edges, so
        // rounding cannot open gaps between them
        let x0 = (x.round().max(0.0) as u32).min(width);
        let x1 = ((x + w).round().max(0.0) as u32).min(width);
        let y0 = (y.round().max(0.0) as u32).min(height);
        let y1 = ((y + h).round().max(0.0) as u32).min(height);

        let pixel = ImageRgb([color.0, color.1, color.2]);
        for py in y0..y1 {
            for px in x0..x1 {
                image.put_pixel(px, py, pixel);
            }
        }
        Ok(())
    }
}

fn decode(image: &RgbImage) -> String {
    let gray = image::DynamicImage::ImageRgb8(image.clone()).to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code on the surface");
    let (_meta, content) = grids[0].decode().expect("decode failed");
    content
}

#[test]
fn drawn_surface_matches_requested_size() {
    let renderer = QrRenderer::new();
    let mut surface = PixelSurface::default();
    renderer
        .draw(ANNIVERSARY_URL, &RenderOptions::default(), &mut surface)
        .unwrap();

    assert_eq!(surface.image().dimensions(), (200, 200));
}

#[test]
fn custom_size_is_honored() {
    let renderer = QrRenderer::new();
    let mut surface = PixelSurface::default();
    let options = RenderOptions {
        size: 300,
        ..RenderOptions::default()
    };
    renderer
        .draw(ANNIVERSARY_URL, &options, &mut surface)
        .unwrap();

    assert_eq!(surface.image().dimensions(), (300, 300));
}

#[test]
fn round_trip_decodes_to_the_exact_url() {
    let renderer = QrRenderer::new();
    let mut surface = PixelSurface::default();
    renderer
        .draw(ANNIVERSARY_URL, &RenderOptions::default(), &mut surface)
        .unwrap();

    assert_eq!(decode(surface.image()), ANNIVERSARY_URL);
}

#[test]
fn oversized_payload_fails_and_leaves_surface_untouched() {
    let renderer = QrRenderer::new();
    let mut surface = PixelSurface::default();
    let payload = "x".repeat(3000);
    let err = renderer
        .draw(&payload, &RenderOptions::default(), &mut surface)
        .unwrap_err();

    assert!(matches!(err, Error::Encode(_)));
    assert!(surface.image.is_none());
}
