//! Roster wire formats.
//!
//! The legacy format is the historical on-disk contract: one record per
//! line, fields joined with literal commas, no quoting or escaping. A field
//! that itself contains a comma corrupts the round-trip; that limitation is
//! kept for compatibility with existing roster files. The strict `csv`
//! format is an opt-in alternative that quotes embedded commas.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::domain::model::Participant;
use crate::utils::error::{Result, RosterError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterFormat {
    /// Unescaped comma-joined lines. Default, compatible with existing files.
    #[default]
    Legacy,
    /// RFC 4180 style quoting via the `csv` crate. No header row.
    Csv,
}

impl FromStr for RosterFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "legacy" => Ok(RosterFormat::Legacy),
            "csv" => Ok(RosterFormat::Csv),
            other => Err(RosterError::ConfigError {
                message: format!("Unsupported roster format: {}. Valid formats: legacy, csv", other),
            }),
        }
    }
}

impl fmt::Display for RosterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterFormat::Legacy => write!(f, "legacy"),
            RosterFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Serializes participants into file contents, one record per line,
/// `first_name,last_name,email,special_request`, with a trailing newline.
pub fn encode(participants: &[Participant], format: RosterFormat) -> Result<String> {
    match format {
        RosterFormat::Legacy => Ok(encode_legacy(participants)),
        RosterFormat::Csv => encode_csv(participants),
    }
}

/// Parses file contents into participants, in file order. Empty lines carry
/// no record and are skipped.
pub fn parse(contents: &str, format: RosterFormat) -> Result<Vec<Participant>> {
    match format {
        RosterFormat::Legacy => parse_legacy(contents),
        RosterFormat::Csv => parse_csv(contents),
    }
}

fn encode_legacy(participants: &[Participant]) -> String {
    let mut out = String::new();
    for participant in participants {
        out.push_str(&format!(
            "{},{},{},{}\n",
            participant.first_name,
            participant.last_name,
            participant.email,
            participant.special_request
        ));
    }
    out
}

fn parse_legacy(contents: &str) -> Result<Vec<Participant>> {
    let mut participants = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(RosterError::FormatError {
                line: idx + 1,
                found: fields.len(),
            });
        }

        participants.push(Participant::new(fields[0], fields[1], fields[2], fields[3]));
    }

    Ok(participants)
}

fn encode_csv(participants: &[Participant]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for participant in participants {
        writer.serialize(participant)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let contents = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(contents)
}

fn parse_csv(contents: &str) -> Result<Vec<Participant>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(contents.as_bytes());

    let mut participants = Vec::new();
    for record in reader.deserialize() {
        participants.push(record?);
    }

    Ok(participants)
}
