use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fxconfig", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the field schema synthesized from a default-instance JSON file.
    Schema(SchemaArgs),
    /// Decode a wire payload and print it re-encoded with every default filled in.
    Decode(DecodeArgs),
    /// Rescale a project's effect list from one canvas profile to another.
    Scale(ScaleArgs),
    /// List the canvas profile catalog.
    Resolutions(ResolutionsArgs),
}

#[derive(Parser, Debug)]
struct SchemaArgs {
    /// Input default instance (wire JSON object).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Input wire JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    /// Input effect list (JSON array of effects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Source profile key or alias (`fhd`, `1080p`, `1920x1080`, ...).
    #[arg(long)]
    from: String,

    /// Target profile key or alias.
    #[arg(long)]
    to: String,

    /// Orientation of the source canvas.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    horizontal: bool,

    /// Orientation of the target canvas; defaults to `--horizontal`.
    #[arg(long, action = ArgAction::Set)]
    to_horizontal: Option<bool>,
}

#[derive(Parser, Debug)]
struct ResolutionsArgs {
    /// Show portrait dimensions instead of landscape.
    #[arg(long, default_value_t = false)]
    vertical: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Schema(args) => cmd_schema(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Scale(args) => cmd_scale(args),
        Command::Resolutions(args) => cmd_resolutions(args),
    }
}

fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    let payload = read_json(&args.in_path)?;
    let instance = fxconfig::config_from_wire(&payload)
        .with_context(|| format!("decode default instance '{}'", args.in_path.display()))?;
    let fields = fxconfig::synthesize(&instance);
    tracing::info!(fields = fields.len(), "synthesized schema");
    emit(args.out.as_deref(), &serde_json::to_string_pretty(&fields)?)
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let payload = read_json(&args.in_path)?;
    let value = fxconfig::from_wire(&payload);
    emit(
        args.out.as_deref(),
        &serde_json::to_string_pretty(&fxconfig::to_wire(&value))?,
    )
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let effects = fxconfig::effects_from_json(&text)
        .with_context(|| format!("parse effect list '{}'", args.in_path.display()))?;
    let project: serde_json::Value = serde_json::from_str(&text)?;

    let old = fxconfig::resolve_dimensions(&args.from, args.horizontal)?;
    let new_horizontal = args.to_horizontal.unwrap_or(args.horizontal);
    let new = fxconfig::resolve_dimensions(&args.to, new_horizontal)?;
    // Scaled on the wire so untouched properties keep their exact spelling.
    let scaled = fxconfig::scale_wire(
        &project,
        fxconfig::ScaleFactors::from_canvases(old, new),
        fxconfig::ScaleOpts::default(),
    );
    tracing::info!(
        effects = effects.len(),
        from = %format!("{}x{}", old.width(), old.height()),
        to = %format!("{}x{}", new.width(), new.height()),
        "rescaled effect list"
    );
    emit(args.out.as_deref(), &serde_json::to_string_pretty(&scaled)?)
}

fn cmd_resolutions(args: ResolutionsArgs) -> anyhow::Result<()> {
    let mut text = String::new();
    for p in fxconfig::profiles() {
        let label = fxconfig::display_label(p.key(), !args.vertical)?;
        text.push_str(&format!("{}\t{}\n", p.key(), label));
    }
    print!("{text}");
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse json '{}'", path.display()))
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, format!("{text}\n"))
        .with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
