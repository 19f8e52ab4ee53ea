use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphgen", version, about = "Draw an NFA dump as a node-link diagram")]
struct Cli {
    /// NFA text dump.
    nfa: PathBuf,

    /// TrueType/OpenType font used for names and labels.
    #[arg(long)]
    font: PathBuf,

    /// Directory the PNG is written into.
    #[arg(long, default_value = "fsm")]
    out_dir: PathBuf,

    /// Seed for the initial node placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Optional JSON layout and render settings.
    #[arg(long)]
    config: Option<PathBuf>,
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
        Some(path) => dracogen::GraphSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => dracogen::GraphSettings::default(),
    };
    settings.validate()?;

    let text = std::fs::read_to_string(&cli.nfa)
        .with_context(|| format!("read nfa '{}'", cli.nfa.display()))?;
    let mut graph = dracogen::parse_nfa(&text)
        .with_context(|| format!("parse nfa '{}'", cli.nfa.display()))?;
    let glyphs = dracogen::FontdueGlyphs::from_path(&cli.font)
        .with_context(|| format!("load font '{}'", cli.font.display()))?;

    dracogen::run_layout(&mut graph, &settings, cli.seed);
    let frame = dracogen::render_graph(&graph, &glyphs, &settings)?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir '{}'", cli.out_dir.display()))?;
    let out = cli.out_dir.join(output_name(&cli.nfa));
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

fn output_name(nfa: &Path) -> PathBuf {
    let stem = nfa
        .file_stem()
        .map_or_else(|| "graph".into(), |s| s.to_string_lossy().into_owned());
    PathBuf::from(format!("{stem}.png"))
}
