use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gradsync", version)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Give every gradient a unique name so it can be edited externally.
    Rename(RenameArgs),
    /// Dump the gradient name -> color table of a file as JSON.
    Extract(ExtractArgs),
    /// List gradients of an edited file that a reference file can restore.
    List(ListArgs),
    /// Restore gradient colors from a reference file.
    Restore(RestoreArgs),
}

#[derive(Parser, Debug)]
struct RenameArgs {
    /// Input animation (.json or .tgs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path [default: <stem>_renamed.json next to the input].
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Input animation (.json or .tgs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path for the table [default: stdout].
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Edited animation (.json or .tgs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reference animation holding the original colors.
    #[arg(long)]
    reference: PathBuf,
}

#[derive(Parser, Debug)]
struct RestoreArgs {
    /// Edited animation (.json or .tgs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reference animation holding the original colors.
    #[arg(long)]
    reference: PathBuf,

    /// Restore only these gradient names (repeatable) [default: all].
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,

    /// Output container.
    #[arg(long, value_enum, default_value_t = FormatChoice::Json)]
    format: FormatChoice,

    /// Output path [default: <stem>_fixed.<format> next to the input].
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Json,
    Tgs,
}

impl From<FormatChoice> for gradsync::Container {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Json => gradsync::Container::Json,
            FormatChoice::Tgs => gradsync::Container::Tgs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Rename(args) => cmd_rename(args),
        Command::Extract(args) => cmd_extract(args),
        Command::List(args) => cmd_list(args),
        Command::Restore(args) => cmd_restore(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gradsync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_document(path: &Path) -> anyhow::Result<gradsync::Document> {
    let bytes =
        std::fs::read(path).with_context(|| format!("open animation '{}'", path.display()))?;
    let container = gradsync::Container::detect(&bytes, Some(path));
    let doc = gradsync::decode_document_as(&bytes, container)
        .with_context(|| format!("read animation '{}'", path.display()))?;
    Ok(doc)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

/// `dir/<stem><suffix>.<ext>` for an input at `dir/<stem>.<whatever>`.
fn sibling_output(input: &Path, suffix: &str, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "animation".to_string());
    input.with_file_name(format!("{stem}{suffix}.{ext}"))
}

fn print_counts(verb: &str, counts: gradsync::KindCounts) {
    println!("{verb} {} gradients", counts.total());
    println!("  fills (gf):   {}", counts.fill);
    println!("  strokes (gs): {}", counts.stroke);
}

fn cmd_rename(args: RenameArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let prepared = gradsync::prepare_for_editing(&doc)?;

    let out = args
        .out
        .unwrap_or_else(|| sibling_output(&args.in_path, "_renamed", "json"));
    let bytes = gradsync::encode_document(&prepared.document, gradsync::Container::Json)?;
    write_bytes(&out, &bytes)?;

    print_counts("renamed", prepared.counts);
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let table = gradsync::extract_gradients(&doc)?;
    let json = serde_json::to_string_pretty(&table).context("serialize gradient table")?;

    match args.out {
        Some(out) => write_bytes(&out, json.as_bytes())?,
        None => println!("{json}"),
    }
    eprintln!("{} named gradients", table.len());
    Ok(())
}

fn open_session(in_path: &Path, reference: &Path) -> anyhow::Result<gradsync::RestoreSession> {
    let target = read_document(in_path)?;
    let reference_doc = read_document(reference)?;
    let session = gradsync::RestoreSession::new(target, Some(&reference_doc))
        .with_context(|| format!("use '{}' as reference", reference.display()))?;
    Ok(session)
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, &args.reference)?;
    if session.restorable().is_empty() {
        eprintln!("no matching gradients found");
    }
    for name in session.restorable() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_restore(args: RestoreArgs) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, &args.reference)?;

    let allow = if args.only.is_empty() {
        None
    } else {
        for name in &args.only {
            if !session.restorable().contains(name) {
                eprintln!("warning: '{name}' is not restorable from this reference");
            }
        }
        Some(args.only.iter().cloned().collect::<gradsync::AllowSet>())
    };

    let restored = session.apply(allow.as_ref())?;

    let container = gradsync::Container::from(args.format);
    let out = args
        .out
        .unwrap_or_else(|| sibling_output(&args.in_path, "_fixed", container.extension()));
    let bytes = gradsync::encode_document(&restored.document, container)?;
    write_bytes(&out, &bytes)?;

    print_counts("restored", restored.counts);
    Ok(())
}
