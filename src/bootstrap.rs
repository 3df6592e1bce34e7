//! Content-directory bootstrap.
//!
//! Runs before the host scans for content. A fresh site has no content
//! directory yet; creating it here means the host's file sourcing always has
//! a directory to watch and the user gets an obvious place to put documents.

use crate::config::PluginOptions;
use crate::host::PreBootstrap;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("failed to create content directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Pre-bootstrap hook: ensure the configured content directory exists.
///
/// Creates missing ancestor directories too. Idempotent — an existing
/// directory is left untouched. Filesystem errors propagate; the host
/// aborts its bootstrap on failure.
pub fn on_pre_bootstrap(
    ctx: &PreBootstrap<'_>,
    options: &PluginOptions,
) -> Result<(), BootstrapError> {
    let config = options.resolve();
    let dir = ctx.project_dir.join(&config.content_path);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "created content directory");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_content_directory() {
        let tmp = TempDir::new().unwrap();
        let ctx = PreBootstrap {
            project_dir: tmp.path(),
        };
        on_pre_bootstrap(&ctx, &PluginOptions::default()).unwrap();
        assert!(tmp.path().join("docs").is_dir());
    }

    #[test]
    fn creates_missing_ancestors() {
        let tmp = TempDir::new().unwrap();
        let ctx = PreBootstrap {
            project_dir: tmp.path(),
        };
        let options = PluginOptions {
            content_path: Some("content/docs/guides".to_string()),
            base_path: None,
        };
        on_pre_bootstrap(&ctx, &options).unwrap();
        assert!(tmp.path().join("content/docs/guides").is_dir());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let ctx = PreBootstrap {
            project_dir: tmp.path(),
        };
        let options = PluginOptions::default();
        on_pre_bootstrap(&ctx, &options).unwrap();
        assert!(tmp.path().join("docs").is_dir());
        on_pre_bootstrap(&ctx, &options).unwrap();
        assert!(tmp.path().join("docs").is_dir());
    }

    #[test]
    fn existing_directory_contents_are_untouched() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        std::fs::write(docs.join("setup.mdx"), "# Setup\n").unwrap();

        let ctx = PreBootstrap {
            project_dir: tmp.path(),
        };
        on_pre_bootstrap(&ctx, &PluginOptions::default()).unwrap();
        assert!(docs.join("setup.mdx").is_file());
    }
}
