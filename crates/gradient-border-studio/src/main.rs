use std::path::{Path, PathBuf};

use anyhow::Context;
use gradient_border::border::RenderConfig;
use gradient_border::logging::{LoggingConfig, init_logging};
use gradient_border::paint::{Color, GradientDirection};
use gradient_border::raster::Pixmap;
use gradient_border::{Drawable, GradientBorderDrawable};

/// One gallery entry: output name, canvas size, and the drawable to paint.
struct Swatch {
    name: &'static str,
    width: u32,
    height: u32,
    drawable: GradientBorderDrawable,
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │     GRADIENT BORDER STUDIO v0.1      │");
    println!("  └──────────────────────────────────────┘");
    println!();

    let gallery = gallery();
    for swatch in &gallery {
        let path = render_swatch(swatch, &out_dir)?;
        println!("  {:<20} {}x{}  ->  {}", swatch.name, swatch.width, swatch.height, path.display());
    }

    println!();
    log::info!("rendered {} swatches into {}", gallery.len(), out_dir.display());
    Ok(())
}

fn render_swatch(swatch: &Swatch, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let mut pixmap = Pixmap::new(swatch.width, swatch.height)
        .with_context(|| format!("allocating canvas for '{}'", swatch.name))?;

    swatch.drawable.draw(&mut pixmap);

    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.to_straight_rgba8())
        .context("pixel buffer does not match canvas size")?;

    let path = out_dir.join(format!("{}.png", swatch.name));
    img.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    log::debug!("wrote {}", path.display());
    Ok(path)
}

fn swatch(name: &'static str, width: u32, height: u32, config: RenderConfig) -> Swatch {
    let mut drawable = GradientBorderDrawable::new(config);
    drawable.set_bounds(width as f32, height as f32);
    Swatch { name, width, height, drawable }
}

fn gallery() -> Vec<Swatch> {
    let coral = Color::from_argb(0xFFFF6B6B);
    let amber = Color::from_argb(0xFFFFD93D);
    let teal = Color::from_argb(0xFF1ABC9C);
    let indigo = Color::from_argb(0xFF4C6EF5);
    let night = Color::from_argb(0xFF1E1E2E);
    let slate = Color::from_argb(0xFF313244);

    let mut translucent = swatch(
        "translucent",
        240,
        120,
        RenderConfig::new()
            .border_colors([teal, indigo])
            .background_colors([night, slate])
            .border_width(8.0)
            .corner_radius(24.0),
    );
    translucent.drawable.set_alpha(128);

    vec![
        swatch(
            "left_right",
            240,
            120,
            RenderConfig::new()
                .border_colors([Color::RED, Color::BLUE])
                .background_colors([Color::WHITE])
                .border_width(6.0)
                .corner_radius(16.0),
        ),
        swatch(
            "top_bottom",
            240,
            120,
            RenderConfig::new()
                .border_colors([coral, amber])
                .border_direction(GradientDirection::TopBottom)
                .background_colors([night, slate])
                .background_direction(GradientDirection::TopBottom)
                .border_width(4.0)
                .corner_radius(12.0),
        ),
        swatch(
            "diagonal",
            200,
            200,
            RenderConfig::new()
                .border_colors([coral, amber, teal, indigo])
                .border_direction(GradientDirection::LeftTopBottomRight)
                .background_colors([Color::WHITE, Color::from_argb(0xFFE9ECEF)])
                .background_direction(GradientDirection::LeftBottomRightTop)
                .border_width(10.0)
                .corner_radius(40.0),
        ),
        swatch(
            "pill",
            300,
            80,
            RenderConfig::new()
                .border_colors([indigo, teal])
                .background_colors([slate])
                .border_width(3.0)
                .corner_radius(40.0),
        ),
        swatch(
            "square_corners",
            160,
            160,
            RenderConfig::new()
                .border_colors([amber])
                .background_colors([Color::TRANSPARENT, night])
                .border_width(12.0)
                .corner_radius(0.0),
        ),
        translucent,
    ]
}
