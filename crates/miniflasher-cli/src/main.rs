use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use glob::glob;
use log::{debug, info};
use miniflasher_core::{
    DocumentError, FlashError, PresetSlot, StructuredPreset, check_document_path,
    preset_from_json, preset_to_json, read_dump_file, read_request, violations, write_preset,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MINIFLASHER_BUILD_COMMIT"),
    ", ",
    env!("MINIFLASHER_BUILD_DATE"),
    ")"
);

const DUMP_EXTENSION: &str = "syx";

#[derive(Parser, Debug)]
#[command(name = "miniflasher")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Read and write Akai MPK mini presets as JSON documents.",
    long_about = None,
    after_help = "Examples:\n  miniflasher request 1 -o request.syx\n  miniflasher read 1 preset.json --dump response.syx\n  miniflasher check preset.json --all\n  miniflasher write 1 preset.json -o store.syx"
)]
struct Cli {
    /// Log filter when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a preset dump (.syx) into a JSON document.
    #[command(alias = "r")]
    Read {
        /// Preset slot the dump was taken from (1-4)
        slot: PresetSlot,

        /// Target JSON document
        #[arg(required_unless_present = "stdout")]
        preset: Option<PathBuf>,

        /// Sysex dump received from the device (.syx, glob patterns allowed)
        #[arg(short = 'd', long)]
        dump: PathBuf,

        /// Overwrite an existing JSON document
        #[arg(long)]
        force: bool,

        /// Write the JSON document to stdout
        #[arg(long, conflicts_with = "preset")]
        stdout: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Validate a JSON document and encode it as a sysex write request.
    #[command(alias = "w")]
    Write {
        /// Preset slot to store into (1-4)
        slot: PresetSlot,

        /// Source JSON document
        preset: PathBuf,

        /// Output sysex file (.syx)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Check a JSON document against the device's value ranges.
    Check {
        /// JSON document to check
        preset: PathBuf,

        /// List every violation instead of stopping at the first one
        #[arg(long)]
        all: bool,
    },
    /// Write the sysex request that asks the device for a preset dump.
    Request {
        /// Preset slot to request (1-4)
        slot: PresetSlot,

        /// Output sysex file (.syx)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();
    debug!("{:?}", cli.command);

    let result = match cli.command {
        Commands::Read {
            slot,
            preset,
            dump,
            force,
            stdout,
            quiet,
        } => cmd_read(slot, preset, dump, force, stdout, quiet),
        Commands::Write {
            slot,
            preset,
            output,
            quiet,
        } => cmd_write(slot, preset, output, quiet),
        Commands::Check { preset, all } => cmd_check(preset, all),
        Commands::Request {
            slot,
            output,
            quiet,
        } => cmd_request(slot, output, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<FlashError> for CliError {
    fn from(err: FlashError) -> Self {
        let hint = match &err {
            FlashError::Validation(_) => {
                Some("run `miniflasher check --all <preset.json>` to list every violation")
            }
            FlashError::SlotMismatch { .. } => Some("pass the slot the dump was requested for"),
            FlashError::Sysex(_) | FlashError::EmptyDump => {
                Some("expected a single MPK mini preset dump (110 bytes, F0 ... F7)")
            }
            FlashError::Format(_) => Some("each pad bank needs 8 pads and there must be 8 knobs"),
            _ => None,
        };
        CliError::new(err.to_string(), hint.map(str::to_string))
    }
}

fn cmd_read(
    slot: PresetSlot,
    preset: Option<PathBuf>,
    dump: PathBuf,
    force: bool,
    stdout: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let target = if stdout {
        None
    } else {
        let path = preset.ok_or_else(|| {
            CliError::new(
                "missing preset path",
                Some("pass a .json path or --stdout".to_string()),
            )
        })?;
        check_document(&path)?;
        if path.exists() && !force {
            return Err(CliError::new(
                format!("preset file already exists: {}", path.display()),
                Some("pass --force to overwrite it".to_string()),
            ));
        }
        Some(path)
    };

    let resolved_dump = resolve_input_path(&dump)?;
    validate_dump_file(&resolved_dump)?;

    let structured = read_dump_file(&resolved_dump, slot)?;
    let json = preset_to_json(&structured).context("JSON serialization failed")?;

    let Some(target) = target else {
        println!("{}", json);
        return Ok(());
    };

    write_output(&target, json.as_bytes())?;
    info!("stored slot {} from {}", slot, resolved_dump.display());
    if !quiet {
        eprintln!(
            "OK: preset slot {} stored -> {}",
            slot,
            target.display()
        );
    }
    Ok(())
}

fn cmd_write(
    slot: PresetSlot,
    preset: PathBuf,
    output: PathBuf,
    quiet: bool,
) -> Result<(), CliError> {
    check_document(&preset)?;
    check_dump_extension(&output)?;
    let structured = load_preset(&preset)?;

    let message = write_preset(slot, structured)?;
    write_output(&output, &message)?;
    if !quiet {
        eprintln!(
            "OK: write request for slot {} -> {}",
            slot,
            output.display()
        );
    }
    Ok(())
}

fn cmd_check(preset: PathBuf, all: bool) -> Result<(), CliError> {
    check_document(&preset)?;
    let structured = load_preset(&preset)?;

    let found = violations(&structured);
    let Some(first) = found.first() else {
        eprintln!("OK: {} is valid", preset.display());
        return Ok(());
    };

    if all {
        eprintln!("Violations:");
        for violation in &found {
            eprintln!("  {}", violation);
        }
        return Err(CliError::new(
            format!("preset rejected: {} violation(s)", found.len()),
            None,
        ));
    }
    Err(CliError::new(
        format!("preset rejected: {}", first),
        Some("use --all to list every violation".to_string()),
    ))
}

fn cmd_request(slot: PresetSlot, output: PathBuf, quiet: bool) -> Result<(), CliError> {
    check_dump_extension(&output)?;
    write_output(&output, &read_request(slot))?;
    if !quiet {
        eprintln!(
            "OK: read request for slot {} -> {}",
            slot,
            output.display()
        );
    }
    Ok(())
}

fn load_preset(path: &Path) -> Result<StructuredPreset, CliError> {
    if !path.is_file() {
        return Err(CliError::new(
            format!("preset file not found: {}", path.display()),
            Some("use an existing .json document".to_string()),
        ));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset: {}", path.display()))?;
    preset_from_json(&text).map_err(|err| {
        let hint = matches!(err, DocumentError::Field(_))
            .then(|| "document numbers must fit the field's range".to_string());
        CliError::new(
            format!("Failed to load preset: {}: {}", path.display(), err),
            hint,
        )
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

fn check_document(path: &Path) -> Result<(), CliError> {
    check_document_path(path).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("preset documents are .json files".to_string()),
        )
    })
}

fn has_dump_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DUMP_EXTENSION))
}

fn check_dump_extension(path: &Path) -> Result<(), CliError> {
    if !has_dump_extension(path) {
        return Err(CliError::new(
            format!("unsupported sysex file '{}'", path.display()),
            Some("expected a .syx file".to_string()),
        ));
    }
    Ok(())
}

fn validate_dump_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("dump file not found: {}", input.display()),
            Some("use a .syx file received from the device".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("dump is not a file: {}", input.display()),
            Some("use a .syx file received from the device".to_string()),
        ));
    }
    check_dump_extension(input)
}

/// Expands a glob to exactly one `.syx` dump; plain paths pass through.
fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let invalid = |detail: String| {
        CliError::new(
            format!("invalid dump pattern '{}'", pattern),
            Some(format!("pattern error: {}", detail)),
        )
    };
    let mut dumps = Vec::new();
    for entry in glob(&pattern).map_err(|err| invalid(err.msg.to_string()))? {
        let path = entry.map_err(|err| invalid(err.to_string()))?;
        if path.is_file() && has_dump_extension(&path) {
            dumps.push(path);
        }
    }

    match dumps.len() {
        0 => Err(CliError::new(
            format!("no .syx dump matches pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(dumps.remove(0)),
        count => Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} dumps, first: {})",
                pattern,
                count,
                dumps[0].display()
            ),
            Some("a dump holds one preset; pass a single .syx file".to_string()),
        )),
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
