//! External media-encoder presence check
//!
//! Runs `<command> -version` through a shell and decides whether the encoder
//! is usable. Version parsing exists as a separate opt-in gate: the check
//! itself accepts any version (see [`enforce_minimum_version`]).

use crate::decode::decode_bytes;
use crate::error::ToolError;
use tokio::process::Command;

/// Default encoder binary name
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// A parsed encoder version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolVersion {
    /// Git snapshot builds report a build date, e.g. `2023-06-11-git-abc`
    Calendar { year: u32, month: u32, day: u32 },

    /// Release builds report `major.minor.patch`
    Semantic { major: u32, minor: u32, patch: u32 },
}

/// Verify that `command` is present by running `<command> -version`.
///
/// The call blocks the task until the process exits; there is no timeout, so a
/// hung binary stalls the caller. Returns the decoded version banner on
/// success. Any version is accepted; callers that want a minimum run the
/// banner through [`enforce_minimum_version`] themselves.
pub async fn check_tool(command: &str) -> Result<String, ToolError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(format!("{command} -version"))
        .output()
        .await
        .map_err(|source| ToolError::Spawn {
            command: command.to_string(),
            source,
        })?;

    // Prefer stdout; some builds write the banner to stderr
    let raw = if output.stdout.is_empty() {
        &output.stderr
    } else {
        &output.stdout
    };
    let out = decode_bytes(raw)?;

    if !output.status.success() {
        return Err(ToolError::NotFound {
            command: command.to_string(),
            output: out,
        });
    }

    Ok(out)
}

/// Parse the version banner and reject encoders below the supported minimum.
///
/// Not called by [`check_tool`]: the original deployment accepted any version,
/// and turning this gate on is an explicit product decision. Calendar versions
/// before 2022 and semantic versions with major <= 4 fail as too old.
pub fn enforce_minimum_version(command: &str, banner: &str) -> Result<ToolVersion, ToolError> {
    let first_line = banner
        .lines()
        .next()
        .ok_or_else(|| ToolError::VersionNotFound {
            command: command.to_string(),
        })?
        .to_lowercase();

    let version = first_line
        .split(" copyright")
        .next()
        .unwrap_or(&first_line)
        .replace("ffmpeg version ", "")
        .trim()
        .to_string();

    if version.is_empty() {
        return Err(ToolError::VersionNotFound {
            command: command.to_string(),
        });
    }

    let not_matched = || ToolError::VersionNotMatched {
        command: command.to_string(),
        version: version.clone(),
    };

    if version.contains('-') {
        tracing::debug!("calendar version string: {}", version);
        let parts: Vec<u32> = version
            .splitn(4, '-')
            .take(3)
            .map(|item| item.parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| not_matched())?;
        let [year, month, day]: [u32; 3] = parts.try_into().map_err(|_| not_matched())?;
        tracing::debug!("version year: {}, month: {}, day: {}", year, month, day);

        if year < 2022 {
            return Err(ToolError::TooOld {
                command: command.to_string(),
                version,
            });
        }
        return Ok(ToolVersion::Calendar { year, month, day });
    }

    tracing::debug!("semantic version string: {}", version);
    let parts: Vec<u32> = version
        .split('.')
        .map(|item| item.parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| not_matched())?;
    let [major, minor, patch]: [u32; 3] = parts.try_into().map_err(|_| not_matched())?;
    tracing::debug!("version major: {}, minor: {}, patch: {}", major, minor, patch);

    if major <= 4 {
        return Err(ToolError::TooOld {
            command: command.to_string(),
            version,
        });
    }
    Ok(ToolVersion::Semantic {
        major,
        minor,
        patch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_tool_missing_command() {
        let err = check_tool("definitely-not-an-encoder-binary")
            .await
            .unwrap_err();
        match err {
            ToolError::NotFound { output, .. } => assert!(!output.is_empty()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_check_tool_accepts_any_version() {
        // echo exits 0 no matter what we pass it, standing in for an encoder
        // of arbitrary version
        let banner = check_tool("echo").await.unwrap();
        assert_eq!(banner.trim(), "-version");
    }

    #[test]
    fn test_semantic_version_ok() {
        let banner = "ffmpeg version 6.1.1 Copyright (c) 2000-2023 the FFmpeg developers";
        assert_eq!(
            enforce_minimum_version("ffmpeg", banner).unwrap(),
            ToolVersion::Semantic {
                major: 6,
                minor: 1,
                patch: 1
            }
        );
    }

    #[test]
    fn test_semantic_version_too_old() {
        let banner = "ffmpeg version 4.4.2 Copyright (c) 2000-2021 the FFmpeg developers";
        assert!(matches!(
            enforce_minimum_version("ffmpeg", banner),
            Err(ToolError::TooOld { .. })
        ));
    }

    #[test]
    fn test_calendar_version_ok() {
        let banner = "ffmpeg version 2023-06-11-git-09621fd7d9 Copyright (c) 2000-2023";
        assert_eq!(
            enforce_minimum_version("ffmpeg", banner).unwrap(),
            ToolVersion::Calendar {
                year: 2023,
                month: 6,
                day: 11
            }
        );
    }

    #[test]
    fn test_calendar_version_too_old() {
        let banner = "ffmpeg version 2021-12-01-git-abcdef Copyright (c) 2000-2021";
        assert!(matches!(
            enforce_minimum_version("ffmpeg", banner),
            Err(ToolError::TooOld { .. })
        ));
    }

    #[test]
    fn test_version_not_matched() {
        let banner = "ffmpeg version n5.1-custom Copyright (c) 2000-2022";
        assert!(matches!(
            enforce_minimum_version("ffmpeg", banner),
            Err(ToolError::VersionNotMatched { .. })
        ));
    }

    #[test]
    fn test_version_not_found() {
        assert!(matches!(
            enforce_minimum_version("ffmpeg", ""),
            Err(ToolError::VersionNotFound { .. })
        ));
    }
}
