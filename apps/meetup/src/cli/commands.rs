//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use meetup_core::{
    MeetupError, Roster, RosterSummary, Status, morse::encode_text, parse_roster, render_roster,
    transition_table,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for roster and text input (100 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MeetupError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| MeetupError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(MeetupError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input path.
///
/// Canonicalizes the path (resolving symlinks and "..") and requires it to
/// be an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, MeetupError> {
    let canonical = path.canonicalize().map_err(|e| {
        MeetupError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(MeetupError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path.
///
/// The parent directory must exist; the file itself may not.
fn validate_output_path(path: &Path) -> Result<PathBuf, MeetupError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        MeetupError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(MeetupError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| MeetupError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Read a validated input file as UTF-8 text.
fn read_input(path: &Path) -> Result<String, MeetupError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_INPUT_FILE_SIZE)?;

    std::fs::read_to_string(&validated_path)
        .map_err(|e| MeetupError::IoError(format!("Read file: {}", e)))
}

// =============================================================================
// ROSTER LOADING
// =============================================================================

/// Load and validate a roster file in the given format ("json" or "text").
pub fn load_roster(path: &Path, format: &str) -> Result<Roster, MeetupError> {
    tracing::info!("Loading roster from {:?} (format: {})", path, format);

    let contents = read_input(path)?;

    let roster = match format {
        "json" => {
            let roster: Roster = serde_json::from_str(&contents)
                .map_err(|e| MeetupError::SerializationError(e.to_string()))?;
            roster.validate()?;
            roster
        }
        "text" => parse_roster(&contents)?,
        _ => {
            return Err(MeetupError::SerializationError(format!(
                "Unknown format: {}. Use: json, text",
                format
            )));
        }
    };

    tracing::debug!("Loaded {} agents", roster.len());
    Ok(roster)
}

// =============================================================================
// MEET COMMAND
// =============================================================================

/// Run `rounds` meetup rounds over a roster file and print the result.
pub fn cmd_meet(
    file: &Path,
    format: &str,
    rounds: usize,
    json_mode: bool,
) -> Result<(), MeetupError> {
    let roster = load_roster(file, format)?.advance(rounds);

    let summary = RosterSummary::from_roster(&roster);
    tracing::debug!(
        rounds,
        active = summary.active(),
        dead = summary.count(Status::Dead),
        "Rounds complete"
    );

    if json_mode {
        let output = serde_json::json!({
            "rounds": rounds,
            "roster": roster,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Roster after {} round(s)", rounds);
    println!("======================");
    print!("{}", render_roster(roster.agents()));

    Ok(())
}

// =============================================================================
// SUMMARY COMMAND
// =============================================================================

/// Print per-status counts for a roster file.
pub fn cmd_summary(file: &Path, format: &str, json_mode: bool) -> Result<(), MeetupError> {
    let roster = load_roster(file, format)?;
    let summary = RosterSummary::from_roster(&roster);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Roster Summary");
    println!("==============");
    println!("File:    {:?}", file);
    println!();
    for status in Status::ALL {
        println!("{:<8} {}", status.name(), summary.count(status));
    }
    println!();
    println!("Active:  {}", summary.active());
    println!("Total:   {}", summary.total);

    Ok(())
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// Print the encounter table.
pub fn cmd_table(json_mode: bool) -> Result<(), MeetupError> {
    let table = transition_table();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&table).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Encounter Table");
    println!("===============");
    println!("{:<8} {:<8} -> {:<8} {:<8}", "A", "B", "A'", "B'");
    for row in &table {
        println!(
            "{:<8} {:<8} -> {:<8} {:<8}",
            row.first.name(),
            row.second.name(),
            row.first_after.name(),
            row.second_after.name()
        );
    }
    println!();
    println!("HEALTHY and DEAD agents never meet and never change.");

    Ok(())
}

// =============================================================================
// MORSE COMMAND
// =============================================================================

/// Convert a text file to Morse code and return the written path.
pub fn convert_file(input: &Path, output: &Path) -> Result<PathBuf, MeetupError> {
    let validated_output = validate_output_path(output)?;
    let text = read_input(input)?;

    let morse = encode_text(&text);
    std::fs::write(&validated_output, &morse)
        .map_err(|e| MeetupError::IoError(format!("Write file: {}", e)))?;

    tracing::info!(
        "Wrote {} bytes of Morse code to {:?}",
        morse.len(),
        validated_output
    );
    Ok(validated_output)
}

/// Convert a text file to Morse code.
pub fn cmd_morse(input: &Path, output: &Path, json_mode: bool) -> Result<(), MeetupError> {
    let written = convert_file(input, output)?;

    if json_mode {
        let output = serde_json::json!({ "output": written.to_string_lossy() });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Morse code written to {}", written.display());
    Ok(())
}
