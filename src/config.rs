use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_SEED: u64 = 31415;
pub const DEFAULT_OUT: &str = "data.txt";

/// Validated run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub size: usize,
    pub passes: usize,
    pub seed: u64,
    /// Results file, appended to.
    pub out: PathBuf,
    /// Where to save the full report as JSON, if anywhere.
    pub json: Option<PathBuf>,
}

impl Config {
    /// Check the positional arguments before anything is generated.
    pub fn validate(
        size: Option<usize>,
        passes: Option<usize>,
        seed: Option<u64>,
        out: Option<PathBuf>,
        json: Option<PathBuf>,
    ) -> Result<Config> {
        let (Some(size), Some(passes)) = (size, passes) else {
            return Err(Error::InvalidArgument(
                "expected 2 arguments: <size> <passes>".to_string(),
            ));
        };
        if size == 0 {
            return Err(Error::InvalidArgument(
                "size must be positive".to_string(),
            ));
        }
        if passes == 0 {
            return Err(Error::InvalidArgument(
                "passes must be positive".to_string(),
            ));
        }
        Ok(Config {
            size,
            passes,
            seed: seed.unwrap_or(DEFAULT_SEED),
            out: out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT)),
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::validate(Some(100), Some(3), None, None, None).unwrap();
        assert_eq!(c.size, 100);
        assert_eq!(c.passes, 3);
        assert_eq!(c.seed, DEFAULT_SEED);
        assert_eq!(c.out, PathBuf::from("data.txt"));
        assert_eq!(c.json, None);
    }

    #[test]
    fn missing_or_zero_is_invalid() {
        for (size, passes) in [
            (None, Some(1)),
            (Some(1), None),
            (None, None),
            (Some(0), Some(1)),
            (Some(1), Some(0)),
        ] {
            assert!(
                matches!(
                    Config::validate(size, passes, None, None, None),
                    Err(Error::InvalidArgument(_))
                ),
                "{size:?} {passes:?}"
            );
        }
    }
}
