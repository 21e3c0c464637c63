// file: src/surface/terminal.rs
// description: terminal surface printing tables and saving exports to disk

use crate::config::OutputConfig;
use crate::error::{QueryError, Result};
use crate::models::{ExportedFile, ResultTable};
use crate::surface::Surface;
use crate::utils::Validator;
use crate::utils::logging::{format_error, format_heading, format_warning};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

const MAX_NAME_ATTEMPTS: usize = 100;

pub struct TerminalSurface<W: Write = Stdout> {
    fields: HashMap<String, String>,
    out: W,
    download_dir: PathBuf,
    default_filename: String,
    output_override: Option<PathBuf>,
    max_cell_width: usize,
}

impl TerminalSurface<Stdout> {
    pub fn stdout(output: &OutputConfig) -> Self {
        Self::with_writer(io::stdout(), output)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn with_writer(out: W, output: &OutputConfig) -> Self {
        Self {
            fields: HashMap::new(),
            out,
            download_dir: output.download_dir.clone(),
            default_filename: output.default_filename.clone(),
            output_override: None,
            max_cell_width: output.max_cell_width,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Saves exports to exactly this path instead of the header-derived name.
    pub fn with_output_override(mut self, path: Option<PathBuf>) -> Self {
        self.output_override = path;
        self
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn target_path(&self, file: &ExportedFile) -> PathBuf {
        if let Some(path) = &self.output_override {
            return path.clone();
        }

        let name = Validator::sanitize_filename(&file.filename).unwrap_or_else(|| {
            warn!("Unusable export filename {:?}", file.filename);
            eprintln!(
                "{}",
                format_warning(&format!(
                    "Server suggested an unusable filename, saving as {}",
                    self.default_filename
                ))
            );
            self.default_filename.clone()
        });

        self.download_dir.join(name)
    }

    fn fit(&self, text: &str) -> String {
        if self.max_cell_width == 0 {
            text.to_string()
        } else {
            Validator::truncate_text(text, self.max_cell_width)
        }
    }

    fn write_region(&mut self, lines: &[String]) {
        let written = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{}", line))
            .and_then(|_| self.out.flush());

        if let Err(e) = written {
            warn!("Failed to write results: {}", e);
        }
    }

    fn render_table(&self, table: &ResultTable) -> Vec<String> {
        let headers: Vec<String> = table.headers.iter().map(|h| self.fit(h)).collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| self.fit(cell)).collect())
            .collect();

        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for line in std::iter::once(&headers).chain(rows.iter()) {
            for (idx, cell) in line.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }

        let header_line = join_padded(&headers, &widths);
        let rule = widths
            .iter()
            .take(headers.len())
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");

        let mut lines = vec![format_heading("Results:"), format_heading(&header_line), rule];
        lines.extend(rows.iter().map(|row| join_padded(row, &widths)));
        lines
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn read_field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn show_table(&mut self, table: &ResultTable) {
        let lines = self.render_table(table);
        self.write_region(&lines);
    }

    fn show_notice(&mut self, message: &str) {
        self.write_region(&[format_heading("Results:"), message.to_string()]);
    }

    fn show_error(&mut self, message: &str) {
        self.write_region(&[message.red().to_string()]);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", format_error(message));
    }

    /// Stages the bytes in a temporary file next to the target and renames it
    /// into place. The staged file is removed on drop if anything fails first.
    ///
    /// An explicit output path is overwritten. A server-named download never
    /// replaces an existing file: it is saved as `name (1).ext`, `name (2).ext`
    /// and so on instead.
    fn save_file(&mut self, file: &ExportedFile) -> Result<PathBuf> {
        let target = self.target_path(file);
        let dir = staging_dir(&target);

        fs::create_dir_all(dir).map_err(|e| QueryError::io(dir, e))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| QueryError::io(dir, e))?;
        debug!("Staging {} bytes in {}", file.len(), staged.path().display());

        staged
            .write_all(&file.bytes)
            .and_then(|_| staged.flush())
            .map_err(|e| QueryError::io(staged.path(), e))?;

        if self.output_override.is_some() {
            staged
                .persist(&target)
                .map_err(|e| QueryError::io(&target, e.error))?;
            return Ok(target);
        }

        let saved = persist_unique(staged, &target)?;
        if saved != target {
            eprintln!(
                "{}",
                format_warning(&format!(
                    "{} already exists, saved as {}",
                    target.display(),
                    saved.display()
                ))
            );
        }

        Ok(saved)
    }
}

fn persist_unique(mut staged: NamedTempFile, target: &Path) -> Result<PathBuf> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let candidate = numbered_path(target, attempt);
        match staged.persist_noclobber(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{} exists, trying the next name", candidate.display());
                staged = e.file;
            }
            Err(e) => return Err(QueryError::io(&candidate, e.error)),
        }
    }

    Err(QueryError::io(
        target,
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} numbered copies already exist", MAX_NAME_ATTEMPTS),
        ),
    ))
}

/// `report.csv` for 0, `report (n).csv` otherwise.
fn numbered_path(target: &Path, n: usize) -> PathBuf {
    if n == 0 {
        return target.to_path_buf();
    }

    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match target.extension() {
        Some(ext) => format!("{} ({}).{}", stem, n, ext.to_string_lossy()),
        None => format!("{} ({})", stem, n),
    };

    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn surface(dir: &Path) -> TerminalSurface<Vec<u8>> {
        colored::control::set_override(false);
        TerminalSurface::with_writer(Vec::new(), &Config::default_config().output)
            .with_download_dir(dir)
    }

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_writer()).unwrap()
    }

    #[test]
    fn test_renders_aligned_table() {
        let dir = TempDir::new().unwrap();
        let mut surface = surface(dir.path());
        surface.show_table(&ResultTable {
            headers: vec!["Id".to_string(), "School name".to_string()],
            rows: vec![
                vec!["1".to_string(), "Alpha".to_string()],
                vec!["10".to_string(), "Beta".to_string()],
            ],
        });

        assert_eq!(
            output(surface),
            "Results:\nId | School name\n---+------------\n1  | Alpha\n10 | Beta\n"
        );
    }

    #[test]
    fn test_truncates_wide_cells() {
        let dir = TempDir::new().unwrap();
        let mut output_config = Config::default_config().output;
        output_config.max_cell_width = 4;
        colored::control::set_override(false);
        let mut surface = TerminalSurface::with_writer(Vec::new(), &output_config)
            .with_download_dir(dir.path());

        surface.show_table(&ResultTable {
            headers: vec!["Name".to_string()],
            rows: vec![vec!["Stanford University".to_string()]],
        });

        let text = output(surface);
        assert!(text.contains("Stan..."));
        assert!(!text.contains("Stanford"));
    }

    #[test]
    fn test_notice_and_error() {
        let dir = TempDir::new().unwrap();
        let mut surface = surface(dir.path());
        surface.show_notice("No results found.");
        surface.show_error("Error: HTTP error! status: 500");

        assert_eq!(
            output(surface),
            "Results:\nNo results found.\nError: HTTP error! status: 500\n"
        );
    }

    #[test]
    fn test_saves_into_download_dir() {
        let dir = TempDir::new().unwrap();
        let mut surface = surface(dir.path());
        let file = ExportedFile::new("report.csv", b"id,name\n1,Alpha\n".to_vec());

        let path = surface.save_file(&file).unwrap();

        assert_eq!(path, dir.path().join("report.csv"));
        assert_eq!(fs::read(&path).unwrap(), file.bytes);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_header_cannot_escape_download_dir() {
        let dir = TempDir::new().unwrap();
        let mut surface = surface(dir.path());
        let file = ExportedFile::new("../../evil.csv", b"x".to_vec());

        let path = surface.save_file(&file).unwrap();
        assert_eq!(path, dir.path().join("evil.csv"));
    }

    #[test]
    fn test_unusable_name_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut surface = surface(dir.path());
        let file = ExportedFile::new("..", b"x".to_vec());

        let path = surface.save_file(&file).unwrap();
        assert_eq!(path, dir.path().join("query_export.csv"));
    }

    #[test]
    fn test_existing_download_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("report.csv"), "old").unwrap();
        let mut surface = surface(dir.path());
        let file = ExportedFile::new("report.csv", b"new".to_vec());

        let first = surface.save_file(&file).unwrap();
        let second = surface.save_file(&file).unwrap();

        assert_eq!(first, dir.path().join("report (1).csv"));
        assert_eq!(second, dir.path().join("report (2).csv"));
        assert_eq!(fs::read_to_string(dir.path().join("report.csv")).unwrap(), "old");
        assert_eq!(fs::read(&first).unwrap(), b"new".to_vec());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_numbered_path() {
        let target = Path::new("out/report.csv");
        assert_eq!(numbered_path(target, 0), PathBuf::from("out/report.csv"));
        assert_eq!(numbered_path(target, 3), PathBuf::from("out/report (3).csv"));
        assert_eq!(
            numbered_path(Path::new("export"), 1),
            PathBuf::from("export (1)")
        );
    }

    #[test]
    fn test_output_override_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("schools.csv");
        fs::write(&target, "old").unwrap();
        let mut surface = surface(dir.path()).with_output_override(Some(target.clone()));

        let path = surface.save_file(&ExportedFile::new("report.csv", b"new".to_vec())).unwrap();

        assert_eq!(path, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_output_override() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/schools.csv");
        let mut surface = surface(dir.path()).with_output_override(Some(target.clone()));
        let file = ExportedFile::new("report.csv", b"x".to_vec());

        let path = surface.save_file(&file).unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
        assert!(!dir.path().join("report.csv").exists());
    }
}
