//! Platform paths.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "tourfinder";

/// Directory for trace output and other local data.
///
/// `$XDG_DATA_HOME/tourfinder`, else `$HOME/.local/share/tourfinder`, else
/// `tourfinder` under the system temp directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| !p.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = home.filter(|p| !p.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    env::temp_dir().join(APP_DIR)
}

/// Expands a leading `~` to `$HOME`. Other paths, and `~` when `HOME` is unset,
/// are returned unchanged.
///
/// ```
/// use tourfinder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/tours.json"), std::path::PathBuf::from("/etc/tours.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (_, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_prefers_xdg() {
        assert_eq!(
            data_dir_from(Some("/xdg".into()), Some("/home/u".into())),
            PathBuf::from("/xdg/tourfinder")
        );
        assert_eq!(
            data_dir_from(Some(String::new()), Some("/home/u".into())),
            PathBuf::from("/home/u/.local/share/tourfinder")
        );
        assert_eq!(data_dir_from(None, None), env::temp_dir().join("tourfinder"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_with_home("~/data/tours.json", Some("/home/u")), PathBuf::from("/home/u/data/tours.json"));
        assert_eq!(expand_with_home("~", Some("/home/u")), PathBuf::from("/home/u"));
        assert_eq!(expand_with_home("~other/x", Some("/home/u")), PathBuf::from("~other/x"));
        assert_eq!(expand_with_home("~/x", None), PathBuf::from("~/x"));
    }
}
