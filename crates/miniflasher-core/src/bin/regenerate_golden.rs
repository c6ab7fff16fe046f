use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use miniflasher_core::{MessageSource, SyxFileSource, decode, parse_preset_message, preset_to_json};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("dump.syx");
        if !input.exists() {
            continue;
        }
        let output = path.join("preset.json");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

// Slot is taken from the dump itself, so no slot check happens here.
fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let mut source = SyxFileSource::open(input)
        .map_err(|err| format!("failed to open {}: {}", input.display(), err))?;
    let message = source
        .next_message()
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?
        .ok_or_else(|| format!("no sysex message in {}", input.display()))?;
    let parsed = parse_preset_message(&message)
        .map_err(|err| format!("bad dump {}: {}", input.display(), err))?;
    let preset = decode(parsed.preset)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let json = preset_to_json(&preset)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
