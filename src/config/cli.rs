use crate::domain::model::Sum;
use crate::domain::ports::{InputReader, OutputWriter};
use crate::utils::error::{Result, SumError};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Where input bytes come from: the `-file` path, or stdin when none was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) if !p.is_empty() => InputSource::File(PathBuf::from(p)),
            _ => InputSource::Stdin,
        }
    }
}

impl InputReader for InputSource {
    async fn read_all(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        match self {
            InputSource::File(path) => {
                let mut file =
                    tokio::fs::File::open(path)
                        .await
                        .map_err(|source| SumError::FileOpen {
                            path: path.display().to_string(),
                            source,
                        })?;
                file.read_to_end(&mut data)
                    .await
                    .map_err(|source| SumError::FileRead {
                        path: path.display().to_string(),
                        source,
                    })?;
            }
            InputSource::Stdin => {
                tokio::io::stdin()
                    .read_to_end(&mut data)
                    .await
                    .map_err(SumError::StdinRead)?;
            }
        }
        Ok(data)
    }

    fn describe(&self) -> String {
        match self {
            InputSource::File(path) => format!("File: {}", path.display()),
            InputSource::Stdin => "Stdin".to_string(),
        }
    }
}

/// Where the result line goes: the `-output` path, or stdout when none was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) if !p.is_empty() => OutputTarget::File(PathBuf::from(p)),
            _ => OutputTarget::Stdout,
        }
    }
}

impl OutputWriter for OutputTarget {
    async fn write_sum(&self, sum: Sum) -> Result<()> {
        let line = sum.render();
        let write_error = |source: std::io::Error| SumError::OutputWrite {
            destination: self.describe(),
            source,
        };

        match self {
            OutputTarget::File(path) => {
                let mut file =
                    tokio::fs::File::create(path)
                        .await
                        .map_err(|source| SumError::OutputCreate {
                            path: path.display().to_string(),
                            source,
                        })?;
                file.write_all(line.as_bytes()).await.map_err(write_error)?;
                file.flush().await.map_err(write_error)?;
                tracing::info!("Output written to file: {}", path.display());
            }
            OutputTarget::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(line.as_bytes()).await.map_err(write_error)?;
                stdout.flush().await.map_err(write_error)?;
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "stdout".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path() {
        assert_eq!(InputSource::from_path(None), InputSource::Stdin);
        assert_eq!(InputSource::from_path(Some("")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path(Some("in.json")),
            InputSource::File(PathBuf::from("in.json"))
        );
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_path(Some("out.txt")),
            OutputTarget::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(InputSource::Stdin.describe(), "Stdin");
        assert_eq!(
            InputSource::File(PathBuf::from("data/in.json")).describe(),
            "File: data/in.json"
        );
        assert_eq!(OutputTarget::Stdout.describe(), "stdout");
    }

    #[tokio::test]
    async fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.json");
        std::fs::write(&path, r#"{"values": [4, 5]}"#).unwrap();

        let data = InputSource::File(path).read_all().await.unwrap();
        assert_eq!(data, br#"{"values": [4, 5]}"#);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = InputSource::File(path).read_all().await.unwrap_err();
        assert!(matches!(err, SumError::FileOpen { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_read_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = InputSource::File(temp_dir.path().to_path_buf())
            .read_all()
            .await
            .unwrap_err();
        assert!(matches!(err, SumError::FileRead { .. }));
    }

    #[tokio::test]
    async fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sum.txt");
        std::fs::write(&path, "stale content that is longer than the result\n").unwrap();

        OutputTarget::File(path.clone())
            .write_sum(Sum(6))
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Sum of numbers: 6\n");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_is_create_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("sum.txt");

        let err = OutputTarget::File(path).write_sum(Sum(1)).await.unwrap_err();
        assert!(matches!(err, SumError::OutputCreate { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
