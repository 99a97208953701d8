use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

/// Quiet zone width in modules, per the QR specification.
const QUIET_ZONE: u32 = 4;

// Render
//------------------------------------------------------------------------------

/// Renders the symbol onto a white canvas of `width x height` pixels,
/// scaled by the largest whole module size that fits and centered.
///
/// A request too small to contain the symbol and its quiet zone is clamped
/// up to the symbol's minimum pixel size, so the output is always readable.
pub(crate) fn render_fitted(code: &QrCode, width: u32, height: u32) -> GrayImage {
    let modules = code.width() as u32;
    let min_size = modules + 2 * QUIET_ZONE;

    let out_w = width.max(min_size);
    let out_h = height.max(min_size);
    let multiple = ((out_w / min_size).min(out_h / min_size)).max(1);

    // Quiet zone is absorbed into the centering padding.
    let left = (out_w - modules * multiple) / 2;
    let top = (out_h - modules * multiple) / 2;

    let mut canvas = GrayImage::from_pixel(out_w, out_h, Luma([255]));
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = left + (i as u32 % modules) * multiple;
        let y = top + (i as u32 / modules) * multiple;
        for dy in 0..multiple {
            for dx in 0..multiple {
                canvas.put_pixel(x + dx, y + dy, Luma([0]));
            }
        }
    }

    canvas
}
