//! Template discovery in the source directory.
//!
//! Discovery is non-recursive and all-or-nothing: every file matching the
//! template extension must parse, otherwise the whole set is rejected before
//! any rendering starts.

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;

use crate::constants::TEMPLATE_EXT;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// One discovered template, addressable by its source file name.
///
/// The parsed template content itself lives in the rendering engine, keyed
/// by this name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    name: String,
}

impl TemplateUnit {
    /// The source file name, including the template extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The output file name: the source name with the trailing template
    /// extension stripped, and nothing else changed.
    pub fn output_name(&self) -> &str {
        let suffix = format!(".{TEMPLATE_EXT}");
        self.name.strip_suffix(suffix.as_str()).unwrap_or(&self.name)
    }
}

/// The immutable collection of templates discovered in one source directory.
#[derive(Debug)]
pub struct TemplateSet {
    units: Vec<TemplateUnit>,
}

impl TemplateSet {
    /// Discovers all `*.tmpl` files directly inside `dir` and registers each
    /// one with `engine`.
    ///
    /// Fails with [`Error::NoTemplatesError`] when no file matches, and with
    /// [`Error::TemplateSyntaxError`] as soon as one template does not parse.
    pub fn discover<P: AsRef<Path>>(
        dir: P,
        engine: &mut dyn TemplateRenderer,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let matcher = Glob::new(&format!("*.{TEMPLATE_EXT}"))?.compile_matcher();

        let mut units = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                log::warn!("skipping non-UTF-8 file name: {file_name:?}");
                continue;
            };
            if matcher.is_match(name) {
                units.push((name.to_string(), entry.path()));
            }
        }

        if units.is_empty() {
            return Err(Error::NoTemplatesError { dir: dir.display().to_string() });
        }

        // Deterministic registration order regardless of directory order.
        units.sort();

        let units = units
            .into_iter()
            .map(|(name, path)| {
                let source = read_template(&path)?;
                engine.add_template(&name, &source)?;
                log::debug!("parsed template '{name}'");
                Ok(TemplateUnit { name })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { units })
    }

    pub fn units(&self) -> &[TemplateUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn read_template(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}
