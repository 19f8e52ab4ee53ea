use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dracogen", version, about = "Paint a procedural dragon portrait")]
struct Cli {
    /// Dragon name; the same name always paints the same dragon. Defaults to the current time.
    name: Option<String>,

    /// Directory the PNG is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Optional JSON render settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// `name` with every character that is not alphanumeric, `-` or `_` replaced by `_`, so the
/// file always lands directly inside the output directory.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => dracogen::DragonSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => dracogen::DragonSettings::default(),
    };

    let name = match cli.name {
        Some(name) => name,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before 1970")?
            .as_secs()
            .to_string(),
    };
    let seed = dracogen::seed_from_name(&name);
    tracing::info!(%name, seed, "painting dragon");

    let frame = dracogen::render_dragon(seed, &settings)?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir '{}'", cli.out_dir.display()))?;
    let out = cli.out_dir.join(format!("dragon_{}.png", file_stem(&name)));
    image::save_buffer_with_format(
        &out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
