//! Rendering the tree and writing it to its destination.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use backstage_config_types::Config;
use tracing::info;

use crate::WizardError;

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Serialize the configuration tree to YAML.
pub fn render(config: &Config) -> Result<String, WizardError> {
    Ok(serde_yaml::to_string(config)?)
}

/// Write `document` to `destination`.
///
/// On stdout the document is followed by an extra newline. A file is created
/// or truncated and a confirmation line is printed to `stdout` instead.
pub fn write_document(
    document: &str,
    destination: &Destination,
    stdout: &mut impl Write,
) -> Result<(), WizardError> {
    match destination {
        Destination::Stdout => {
            writeln!(stdout, "{document}")
                .and_then(|()| stdout.flush())
                .map_err(WizardError::Stdout)?;
        }
        Destination::File(path) => {
            write_file(path, document).map_err(|source| WizardError::WriteFile {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = document.len(), "configuration written");
            writeln!(stdout, "Configuration written to {}", path.display())
                .map_err(WizardError::Stdout)?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, document: &str) -> io::Result<()> {
    let mut file = open_for_write(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_gets_document_and_trailing_newline() {
        let mut stdout = Vec::new();
        write_document("app: {}\n", &Destination::Stdout, &mut stdout).unwrap();

        assert_eq!(stdout, b"app: {}\n\n");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let path = PathBuf::from("/nonexistent-backstage-wizard-dir/app-config.yaml");
        let mut stdout = Vec::new();
        let err = write_document("app: {}\n", &Destination::File(path.clone()), &mut stdout)
            .unwrap_err();

        assert!(matches!(err, WizardError::WriteFile { path: ref p, .. } if *p == path));
        assert!(
            err.to_string()
                .starts_with("Error writing file /nonexistent-backstage-wizard-dir")
        );
        assert!(stdout.is_empty());
    }

    #[test]
    fn destination_from_optional_path() {
        assert_eq!(Destination::from(None), Destination::Stdout);
        assert_eq!(
            Destination::from(Some(PathBuf::from("out.yaml"))),
            Destination::File(PathBuf::from("out.yaml"))
        );
    }
}
