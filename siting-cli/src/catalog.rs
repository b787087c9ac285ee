//! Loading and checking site catalogs on disk.

use camino::Utf8Path;
use siting_core::SiteAttributes;
use std::io::{BufReader, Write};

use crate::{ARG_CATALOG, CliError, fs};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field: ARG_CATALOG,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field: ARG_CATALOG,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_CATALOG,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON array of sites from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<SiteAttributes>, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let sites: Vec<SiteAttributes> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} sites from {path}", sites.len());
    Ok(sites)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: serde::Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
