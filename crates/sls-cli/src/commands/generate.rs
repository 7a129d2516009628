use crate::commands::load_config;
use crate::logger;
use crate::GlobalOpts;
use anyhow::{Context, Result};
use sls_manifest::{BuildSummary, ManifestBuilder};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Format an elapsed time the way the summary line shows it: `m:ss.sss`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    format!("{}:{:.3}", elapsed.as_secs() / 60, secs % 60.0)
}

/// Generate the template manifest for `examples_root` (or the configured root)
pub fn handle_generate(examples_root: Option<PathBuf>, opts: &GlobalOpts) -> Result<BuildSummary> {
    let start = Instant::now();
    let config = load_config(opts, examples_root)?;
    logger::debug(&format!(
        "Examples root: {}",
        config.examples_root.display()
    ));

    logger::progress("Discovering .slsproj files and updating templates.xml.");
    logger::spinner_start("Discovering descriptors...");
    let result = ManifestBuilder::new(&config).and_then(ManifestBuilder::run);
    logger::spinner_stop();

    let summary = result.with_context(|| {
        format!(
            "Failed to generate manifest from {}",
            config.examples_root.display()
        )
    })?;

    if summary.skipped > 0 {
        logger::warn(&format!(
            "Skipped {} of {} project(s); see messages above",
            summary.skipped, summary.discovered
        ));
    }
    logger::success(&format!(
        "Wrote {} template(s) to {}",
        summary.written,
        summary.output.display()
    ));
    logger::progress(&format!("DONE! ({})", format_elapsed(start.elapsed())));

    Ok(summary)
}
