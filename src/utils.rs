//! Utility functions

use std::path::PathBuf;

// Header logo: rounded tile, prompt caret, cursor bar
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.k1{fill:none;stroke:#a78bfa;stroke-width:14px;stroke-linecap:round;stroke-linejoin:round}.k2{fill:#a78bfa}</style></defs><rect x="8" y="8" width="144" height="144" rx="28" fill="#16161d" stroke="#23232b" stroke-width="4"/><polyline class="k1" points="44,52 76,80 44,108"/><rect class="k2" x="84" y="102" width="36" height="13" rx="6.5"/></svg>"##;

// Borderless square variant for the window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.k1{fill:none;stroke:#a78bfa;stroke-width:16px;stroke-linecap:round;stroke-linejoin:round}.k2{fill:#a78bfa}</style></defs><rect width="160" height="160" rx="32" fill="#16161d"/><polyline class="k1" points="42,50 78,80 42,110"/><rect class="k2" x="86" y="102" width="38" height="14" rx="7"/></svg>"##;

/// Rasterize an SVG string at the given pixel width, keeping aspect ratio.
/// Returns straight-alpha RGBA plus the output dimensions.
fn rasterize_svg(svg: &str, width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()).unwrap();
    let scale = width as f32 / tree.size().width();
    let height = (tree.size().height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia yields premultiplied alpha; egui wants straight
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                [
                    (p.red() as u16 * 255 / a as u16) as u8,
                    (p.green() as u16 * 255 / a as u16) as u8,
                    (p.blue() as u16 * 255 / a as u16) as u8,
                    a,
                ]
            }
        })
        .collect();
    (rgba, width, height)
}

pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    rasterize_svg(LOGO_SVG, width)
}

pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize_svg(ICON_SVG, size)
}

/// App data directory (settings, logs)
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Prompt Studio")
}
