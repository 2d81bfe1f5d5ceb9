//! Host timezone detection.
//!
//! Detection is a one-shot, synchronous inspection of the environment. It may fail
//! (no `TZ`, no `/etc/localtime`); callers treat any failure as "use the default".

use crate::domain::error::{Result, TourfinderError};
use std::path::{Path, PathBuf};

/// Something that can report an IANA timezone name such as `Asia/Dhaka`.
pub trait TimezoneSource {
    /// Returns the timezone name.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone cannot be determined.
    fn timezone_name(&self) -> Result<String>;
}

/// A timezone given up front, e.g. from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone(pub String);

impl TimezoneSource for FixedTimezone {
    fn timezone_name(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Reads the host timezone.
///
/// Checked in order:
/// 1. the `TZ` environment variable (a leading `:` is stripped)
/// 2. the contents of `/etc/timezone`
/// 3. the target of the `/etc/localtime` symlink, after its `zoneinfo/` component
#[derive(Debug, Clone)]
pub struct SystemTimezone {
    timezone_file: PathBuf,
    localtime_link: PathBuf,
}

impl Default for SystemTimezone {
    fn default() -> Self {
        Self {
            timezone_file: PathBuf::from("/etc/timezone"),
            localtime_link: PathBuf::from("/etc/localtime"),
        }
    }
}

impl SystemTimezone {
    /// Uses alternative locations for the timezone file and localtime link.
    #[must_use]
    pub fn with_paths(timezone_file: PathBuf, localtime_link: PathBuf) -> Self {
        Self {
            timezone_file,
            localtime_link,
        }
    }

    fn from_env() -> Option<String> {
        let tz = std::env::var("TZ").ok()?;
        let tz = tz.trim().trim_start_matches(':');
        (!tz.is_empty()).then(|| tz.to_string())
    }

    fn from_timezone_file(path: &Path) -> Option<String> {
        let contents = std::fs::read_to_string(path).ok()?;
        let name = contents.lines().next()?.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    fn from_localtime_link(path: &Path) -> Option<String> {
        let target = std::fs::read_link(path).ok()?;
        zone_from_zoneinfo_path(&target)
    }
}

impl TimezoneSource for SystemTimezone {
    fn timezone_name(&self) -> Result<String> {
        Self::from_env()
            .or_else(|| Self::from_timezone_file(&self.timezone_file))
            .or_else(|| Self::from_localtime_link(&self.localtime_link))
            .ok_or_else(|| TourfinderError::NotFound("host timezone".to_string()))
    }
}

/// Extracts `Region/City` from a path like `/usr/share/zoneinfo/Region/City`.
fn zone_from_zoneinfo_path(path: &Path) -> Option<String> {
    let text = path.to_str()?;
    let (_, zone) = text.split_once("zoneinfo/")?;
    (!zone.is_empty()).then(|| zone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_timezone_reports_its_name() {
        let source = FixedTimezone("Asia/Dhaka".to_string());
        assert_eq!(source.timezone_name().unwrap(), "Asia/Dhaka");
    }

    #[test]
    fn zoneinfo_path_parsing() {
        assert_eq!(
            zone_from_zoneinfo_path(Path::new("/usr/share/zoneinfo/Asia/Dhaka")).as_deref(),
            Some("Asia/Dhaka")
        );
        assert_eq!(
            zone_from_zoneinfo_path(Path::new("../usr/share/zoneinfo/UTC")).as_deref(),
            Some("UTC")
        );
        assert!(zone_from_zoneinfo_path(Path::new("/etc/localtime")).is_none());
    }

    #[test]
    fn reads_timezone_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("timezone");
        std::fs::write(&file, "Asia/Dhaka\n").unwrap();
        assert_eq!(SystemTimezone::from_timezone_file(&file).as_deref(), Some("Asia/Dhaka"));

        std::fs::write(&file, "\n").unwrap();
        assert!(SystemTimezone::from_timezone_file(&file).is_none());
    }
}
