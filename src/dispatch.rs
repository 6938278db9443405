//! Parallel render fan-out and failure aggregation.
//!
//! Every template is rendered and written by its own task; a failing task
//! records its output path and never disturbs its siblings. The aggregate
//! result is only computed after every task has finished.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::ioutils::write_file;
use crate::renderer::TemplateRenderer;
use crate::template::{TemplateSet, TemplateUnit};

/// Renders every template in `set` against the shared `variables` and writes
/// the outputs into `target_dir`, one task per template.
///
/// Returns `Ok(())` only when every template rendered and wrote cleanly;
/// otherwise the error names every failed output path.
pub fn render_all(
    set: &TemplateSet,
    engine: &dyn TemplateRenderer,
    variables: &serde_json::Value,
    target_dir: &Path,
) -> Result<()> {
    let failures: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

    set.units().par_iter().for_each(|unit| {
        let output_path = target_dir.join(unit.output_name());
        if let Err(err) = render_to_file(engine, unit, variables, &output_path) {
            log::error!("failed to render '{}': {err}", output_path.display());
            failures
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(output_path);
        }
    });

    let mut failed =
        failures.into_inner().unwrap_or_else(PoisonError::into_inner);
    if failed.is_empty() {
        return Ok(());
    }
    failed.sort();
    Err(Error::RenderFailures { failed })
}

/// One unit of work: render one template and stream the result into its
/// output file. Stops at the first error without retrying.
fn render_to_file(
    engine: &dyn TemplateRenderer,
    unit: &TemplateUnit,
    variables: &serde_json::Value,
    output_path: &Path,
) -> Result<()> {
    let content = engine.render(unit.name(), variables)?;
    write_file(&content, output_path)?;
    log::debug!("rendered '{}' to '{}'", unit.name(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;
    use crate::template::TemplateSet;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn set_from(templates: &[(&str, &str)]) -> (TemplateSet, MiniJinjaRenderer) {
        let source = TempDir::new().unwrap();
        for (name, content) in templates {
            fs::write(source.path().join(name), content).unwrap();
        }
        let mut engine = MiniJinjaRenderer::new();
        let set = TemplateSet::discover(source.path(), &mut engine).unwrap();
        (set, engine)
    }

    #[test]
    fn writes_one_output_per_template() {
        let (set, engine) =
            set_from(&[("a.tmpl", "A={{ value }}"), ("b.tmpl", "B={{ value }}")]);
        let target = TempDir::new().unwrap();

        render_all(&set, &engine, &json!({"value": 1}), target.path()).unwrap();

        assert_eq!(fs::read_to_string(target.path().join("a")).unwrap(), "A=1");
        assert_eq!(fs::read_to_string(target.path().join("b")).unwrap(), "B=1");
    }

    #[test]
    fn one_failing_template_does_not_abort_the_others() {
        let (set, engine) = set_from(&[
            ("good-one.tmpl", "{{ value }}"),
            ("bad.tmpl", "{{ missing.field }}"),
            ("good-two.tmpl", "{{ value }}{{ value }}"),
        ]);
        let target = TempDir::new().unwrap();

        let err =
            render_all(&set, &engine, &json!({"value": 7}), target.path()).unwrap_err();
        match err {
            Error::RenderFailures { failed } => {
                assert_eq!(failed, vec![target.path().join("bad")]);
            }
            other => panic!("expected RenderFailures, got: {other}"),
        }

        assert_eq!(fs::read_to_string(target.path().join("good-one")).unwrap(), "7");
        assert_eq!(fs::read_to_string(target.path().join("good-two")).unwrap(), "77");
        assert!(!target.path().join("bad").exists());
    }

    #[test]
    fn failed_paths_are_reported_sorted() {
        let (set, engine) = set_from(&[
            ("z-last.tmpl", "{{ nope }}"),
            ("a-first.tmpl", "{{ nope }}"),
        ]);
        let target = TempDir::new().unwrap();

        let err = render_all(&set, &engine, &json!({}), target.path()).unwrap_err();
        match err {
            Error::RenderFailures { failed } => {
                assert_eq!(
                    failed,
                    vec![
                        target.path().join("a-first"),
                        target.path().join("z-last")
                    ]
                );
            }
            other => panic!("expected RenderFailures, got: {other}"),
        }
    }

    #[test]
    fn overwrites_pre_existing_output_files() {
        let (set, engine) = set_from(&[("out.tmpl", "fresh")]);
        let target = TempDir::new().unwrap();
        fs::write(target.path().join("out"), "stale content that is longer").unwrap();

        render_all(&set, &engine, &json!({}), target.path()).unwrap();
        assert_eq!(fs::read_to_string(target.path().join("out")).unwrap(), "fresh");
    }
}
