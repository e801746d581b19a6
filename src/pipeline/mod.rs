//! Post-build asset pipeline.
//!
//! Processors register with a name pattern and run over matching assets after
//! the rest of the build has produced them. Each asset is read once, threaded
//! through every matching processor in registration order, and written back
//! only when its text actually changed.
//!
//! Assets are processed in parallel; the transform for one asset is
//! synchronous and shares no state with other assets, so the only
//! coordination is the first-error abort.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use regex::Regex;

use crate::asset::{self, Asset};
use crate::log;
use crate::logger::ProgressLine;

/// One registered asset processor.
pub trait AssetProcessor: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Pattern matched against root-relative asset names.
    fn pattern(&self) -> &Regex;

    /// Transform the asset's text. Returning an error fails the whole run.
    fn process(&self, asset_name: &str, text: &str) -> Result<String>;
}

/// Ordered collection of processors applied to a build output tree.
pub struct Pipeline {
    processors: Vec<Box<dyn AssetProcessor>>,
    can_print: bool,
    dry_run: bool,
}

/// Counters reported by one pipeline run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Assets whose name matched at least one processor.
    pub matched: usize,
    /// Assets whose text changed (written back unless dry-run).
    pub rewritten: usize,
}

impl RunSummary {
    pub fn merge(&mut self, other: RunSummary) {
        self.matched += other.matched;
        self.rewritten += other.rewritten;
    }
}

impl Pipeline {
    pub fn new(can_print: bool, dry_run: bool) -> Self {
        Self {
            processors: Vec::new(),
            can_print,
            dry_run,
        }
    }

    /// Register a processor. Processors run in registration order.
    pub fn register(mut self, processor: impl AssetProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Process all matching assets under `root` in parallel.
    ///
    /// The first processor error aborts the run: remaining workers stop at
    /// the next asset boundary and no further files are written.
    pub fn run(&self, root: &Path) -> Result<RunSummary> {
        let assets: Vec<Asset> = asset::collect_assets(root)
            .into_iter()
            .filter(|a| self.matches(&a.name))
            .collect();

        if assets.is_empty() {
            return Ok(RunSummary::default());
        }

        let progress = self
            .can_print
            .then(|| ProgressLine::new("assets", assets.len()));
        let rewritten = AtomicUsize::new(0);
        let has_error = AtomicBool::new(false);

        let result = assets.par_iter().try_for_each(|a| {
            if has_error.load(Ordering::Relaxed) {
                return Err(anyhow!("Aborted"));
            }
            match self.process_asset(a) {
                Ok(changed) => {
                    if changed {
                        rewritten.fetch_add(1, Ordering::Relaxed);
                    }
                    if let Some(p) = &progress {
                        p.inc();
                    }
                    Ok(())
                }
                Err(e) => {
                    if !has_error.swap(true, Ordering::Relaxed) {
                        log!("error"; "{}: {:#}", a.name, e);
                    }
                    Err(anyhow!("asset processing failed"))
                }
            }
        });

        if let Some(p) = progress {
            p.finish();
        }
        result?;

        Ok(RunSummary {
            matched: assets.len(),
            rewritten: rewritten.into_inner(),
        })
    }

    fn matches(&self, name: &str) -> bool {
        self.processors.iter().any(|p| p.pattern().is_match(name))
    }

    /// Run every matching processor over one asset.
    ///
    /// Returns whether the asset's text changed.
    fn process_asset(&self, asset: &Asset) -> Result<bool> {
        let original = asset::read_text(asset)?;
        let mut text = original.clone();

        for processor in &self.processors {
            if !processor.pattern().is_match(&asset.name) {
                continue;
            }
            text = processor
                .process(&asset.name, &text)
                .with_context(|| format!("{} processor", processor.name()))?;
        }

        let changed = text != original;
        if changed {
            crate::debug!("process"; "rewrote {}", asset.name);
            if !self.dry_run {
                asset::write_text(asset, &text)?;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Upcase {
        pattern: Regex,
    }

    impl Upcase {
        fn html() -> Self {
            Self {
                pattern: Regex::new(r"\.html$").unwrap(),
            }
        }
    }

    impl AssetProcessor for Upcase {
        fn name(&self) -> &str {
            "upcase"
        }
        fn pattern(&self) -> &Regex {
            &self.pattern
        }
        fn process(&self, _asset_name: &str, text: &str) -> Result<String> {
            Ok(text.to_uppercase())
        }
    }

    struct Append {
        pattern: Regex,
        suffix: &'static str,
    }

    impl Append {
        fn html(suffix: &'static str) -> Self {
            Self {
                pattern: Regex::new(r"\.html$").unwrap(),
                suffix,
            }
        }
    }

    impl AssetProcessor for Append {
        fn name(&self) -> &str {
            "append"
        }
        fn pattern(&self) -> &Regex {
            &self.pattern
        }
        fn process(&self, _asset_name: &str, text: &str) -> Result<String> {
            Ok(format!("{}{}", text, self.suffix))
        }
    }

    struct Failing {
        pattern: Regex,
    }

    impl Failing {
        fn html() -> Self {
            Self {
                pattern: Regex::new(r"\.html$").unwrap(),
            }
        }
    }

    impl AssetProcessor for Failing {
        fn name(&self) -> &str {
            "failing"
        }
        fn pattern(&self) -> &Regex {
            &self.pattern
        }
        fn process(&self, _asset_name: &str, _text: &str) -> Result<String> {
            Err(anyhow!("boom"))
        }
    }

    fn site(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_only_matching_assets_touched() {
        let dir = site(&[("index.html", "ab"), ("style.css", "ab")]);
        let pipeline = Pipeline::new(false, false).register(Upcase::html());

        let summary = pipeline.run(dir.path()).unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "AB");
        assert_eq!(fs::read_to_string(dir.path().join("style.css")).unwrap(), "ab");
    }

    #[test]
    fn test_unchanged_asset_not_counted() {
        let dir = site(&[("index.html", "ALREADY")]);
        let pipeline = Pipeline::new(false, false).register(Upcase::html());

        let summary = pipeline.run(dir.path()).unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.rewritten, 0);
    }

    #[test]
    fn test_processors_run_in_registration_order() {
        let dir = site(&[("index.html", "ab")]);
        let pipeline = Pipeline::new(false, false)
            .register(Append::html("!"))
            .register(Upcase::html());

        pipeline.run(dir.path()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "AB!");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = site(&[("index.html", "ab")]);
        let pipeline = Pipeline::new(false, true).register(Upcase::html());

        let summary = pipeline.run(dir.path()).unwrap();

        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "ab");
    }

    #[test]
    fn test_first_error_fails_run() {
        let dir = site(&[("index.html", "ab")]);
        let pipeline = Pipeline::new(false, false).register(Failing::html());

        assert!(pipeline.run(dir.path()).is_err());
        // Failed asset is never written
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "ab");
    }

    #[test]
    fn test_no_matching_assets_is_empty_summary() {
        let dir = site(&[("style.css", "ab")]);
        let pipeline = Pipeline::new(false, false).register(Upcase::html());

        let summary = pipeline.run(dir.path()).unwrap();
        assert_eq!(summary.matched, 0);
        assert_eq!(summary.rewritten, 0);
    }

    #[test]
    fn test_single_file_root() {
        let dir = site(&[("page.html", "ab")]);
        let file = dir.path().join("page.html");
        let pipeline = Pipeline::new(false, false).register(Upcase::html());

        let summary = pipeline.run(&file).unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "AB");
    }
}
