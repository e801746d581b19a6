//! Built-asset discovery and IO.
//!
//! The pipeline operates on named assets: files under a build output tree,
//! identified by their root-relative path with `/` separators. Processor
//! patterns match those names, never absolute filesystem paths.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

/// One processable asset: a name (what patterns match) plus its location.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Root-relative name with `/` separators (e.g. `docs/index.html`).
    pub name: String,
    /// Filesystem path.
    pub path: PathBuf,
}

/// Collect all regular files under `root` as named assets.
///
/// A `root` that is itself a file yields a single asset named after its
/// file name.
pub fn collect_assets(root: &Path) -> Vec<Asset> {
    if root.is_file() {
        return vec![Asset {
            name: file_name(root),
            path: root.to_path_buf(),
        }];
    }

    WalkDir::new(root)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let path = e.path();
            Asset {
                name: asset_name(root, &path),
                path,
            }
        })
        .collect()
}

/// Read an asset's text content.
pub fn read_text(asset: &Asset) -> Result<String> {
    fs::read_to_string(&asset.path)
        .with_context(|| format!("failed to read {}", asset.path.display()))
}

/// Replace an asset's text content.
pub fn write_text(asset: &Asset, text: &str) -> Result<()> {
    fs::write(&asset.path, text)
        .with_context(|| format!("failed to write {}", asset.path.display()))
}

/// Root-relative asset name with `/` separators.
fn asset_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_assets_nested_names() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("docs/guide.html"), "<html></html>").unwrap();

        let mut names: Vec<_> = collect_assets(dir.path())
            .into_iter()
            .map(|a| a.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["docs/guide.html", "index.html"]);
    }

    #[test]
    fn test_collect_assets_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        assert!(collect_assets(dir.path()).is_empty());
    }

    #[test]
    fn test_collect_assets_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "<html></html>").unwrap();

        let assets = collect_assets(&file);
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "page.html");
        assert_eq!(assets[0].path, file);
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "before").unwrap();

        let asset = Asset {
            name: "page.html".to_string(),
            path: file.clone(),
        };
        assert_eq!(read_text(&asset).unwrap(), "before");

        write_text(&asset, "after").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "after");
    }
}
