use anyhow::Result;
use black_icon_gen::icon_gen;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "black-icon-gen",
    about = "Write solid black placeholder launcher icons for Android and iOS"
)]
struct Args {
    /// Project root that the icon paths are relative to.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Fill color for every icon (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#000000")]
    color: String,

    /// Write only the Android launcher icons
    #[clap(long)]
    android: bool,

    /// Write only the iOS app icons
    #[clap(long)]
    ios: bool,

    /// JSON file with custom platform tables, replacing the built-in ones
    #[clap(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Create missing parent directories instead of failing
    #[clap(long)]
    create_dirs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut platforms = Vec::new();
    if args.android {
        platforms.push("android".to_string());
    }
    if args.ios {
        platforms.push("ios".to_string());
    }

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        color: args.color,
        platforms,
        manifest: args.manifest,
        create_dirs: args.create_dirs,
    })
}
