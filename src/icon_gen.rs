use crate::manifest::Manifest;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Opaque black, the fill used when no color is given
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Largest edge length accepted for a single icon
pub const MAX_ICON_SIZE: u32 = 8192;

// Define Args struct for library compilation
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub color: String,
    pub platforms: Vec<String>,
    pub manifest: Option<PathBuf>,
    pub create_dirs: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            color: "#000000".to_string(),
            platforms: Vec::new(),
            manifest: None,
            create_dirs: false,
        }
    }
}

pub fn generate_icons(args: Args) -> Result<()> {
    let mut manifest = match &args.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin()?,
    };

    if !args.platforms.is_empty() {
        manifest.retain_platforms(&args.platforms)?;
    }

    let fill = parse_color(&args.color)?;

    for table in &manifest.platforms {
        for icon in &table.icons {
            let path = resolve_path(&args.output, &icon.path);

            if args.create_dirs {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    create_dir_all(parent).with_context(|| {
                        format!("Can't create directory {}", parent.display())
                    })?;
                }
            }

            emit_filled(icon.size, &path, fill)?;
        }
    }

    if fill == BLACK {
        println!("All black icons created successfully!");
    } else {
        println!("All icons created successfully!");
    }

    Ok(())
}

/// Write a `size`x`size` opaque black PNG to `path`
pub fn emit(size: u32, path: &Path) -> Result<()> {
    emit_filled(size, path, BLACK)
}

/// Write a `size`x`size` PNG to `path` with every pixel set to `fill`
///
/// The parent directory must already exist. An existing file is overwritten.
/// Nothing is written when `size` is zero or above [`MAX_ICON_SIZE`].
pub fn emit_filled(size: u32, path: &Path, fill: Rgb<u8>) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive (got 0 for {})", path.display());
    }
    if size > MAX_ICON_SIZE {
        anyhow::bail!(
            "Icon size {} exceeds the {}px limit for {}",
            size,
            MAX_ICON_SIZE,
            path.display()
        );
    }

    let image = RgbImage::from_pixel(size, size, fill);

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, size)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    println!(
        "Created {} ({size}x{size}) - {}",
        path.display(),
        describe_fill(fill)
    );
    Ok(())
}

fn describe_fill(fill: Rgb<u8>) -> String {
    if fill == BLACK {
        "pure black, no white circle".to_string()
    } else {
        let Rgb([r, g, b]) = fill;
        format!("solid #{r:02x}{g:02x}{b:02x}")
    }
}

/// Parse a CSS color into an opaque RGB fill; alpha is dropped
fn parse_color(color: &str) -> Result<Rgb<u8>> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
            ])
        })
        .map_err(|_| anyhow::anyhow!("Invalid color: {}", color))
}

// Manifest paths are printed verbatim when writing into the current directory
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if root.as_os_str().is_empty() || root == Path::new(".") {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgb8)?;
    Ok(())
}
