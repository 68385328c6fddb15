// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::error::{FixtureError, Result};
use crate::fixture::RoundId;
use crate::plan::BoxEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fixtures: FixtureOptions,
    pub sql: SqlOptions,
    pub export: ExportOptions,
}

/// Where the boxes of a run come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoxSource {
    Single(BoxEntry),
    Plan(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureOptions {
    pub round_id: RoundId,
    pub boxes: BoxSource,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            round_id: 1,
            boxes: BoxSource::Single(BoxEntry { box_id: 1, players: Vec::new() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqlOptions {
    pub table: String,
    pub include_comments: bool,
}

impl Default for SqlOptions {
    fn default() -> Self {
        Self {
            table: s!(DEFAULT_TABLE),
            include_comments: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Sql,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Sql => "sql",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for record formats; `None` for SQL.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Sql => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Some(ExportFormat::Sql),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub target: Target,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Sql,
            target: Target::File,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if typed).
    /// A trailing separator means "this directory, default file name".
    pub fn set_path(&mut self, text: &str) -> Result<()> {
        let s = text.trim();
        if s.is_empty() {
            return Err(FixtureError::EmptyPath);
        }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path = OutputPath { dir: PathBuf::from(s), ..OutputPath::default() };
            return Ok(());
        }

        let p = Path::new(s);
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
