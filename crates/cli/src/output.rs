use std::convert::Infallible;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

/// Where a file argument points: a path, or `-` for the standard stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Std,
    Path(PathBuf),
}

impl FromStr for Target {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Std
        } else {
            Self::Path(PathBuf::from(s))
        })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Std => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Target {
    /// Read everything from the file, or from stdin for `-`.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Std => {
                let mut buf = Vec::new();
                std::io::Read::read_to_end(&mut std::io::stdin().lock(), &mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            Self::Path(path) => {
                std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    /// Write `bytes` to the file (creating parent directories), or to
    /// stdout for `-`.
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            Self::Std => {
                let mut out = std::io::stdout().lock();
                out.write_all(bytes).context("failed to write stdout")?;
                out.flush().context("failed to flush stdout")
            }
            Self::Path(path) => {
                create_parent(path)?;
                std::fs::write(path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))
            }
        }
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_standard_stream() {
        assert_eq!("-".parse::<Target>(), Ok(Target::Std));
        assert_eq!(
            "out/chart.svg".parse::<Target>(),
            Ok(Target::Path(PathBuf::from("out/chart.svg")))
        );
    }

    #[test]
    fn displays_like_it_parses() {
        assert_eq!(Target::Std.to_string(), "-");
        assert_eq!(Target::Path(PathBuf::from("a.svg")).to_string(), "a.svg");
    }
}
