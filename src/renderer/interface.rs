use crate::error::Result;

/// Trait for template rendering engines.
///
/// Implementations must be shareable across render tasks (`Send + Sync`);
/// rendering itself is side-effect-free and never touches the filesystem.
pub trait TemplateRenderer: Send + Sync {
    /// Adds a template to the renderer's template collection, parsing it
    /// eagerly so syntax errors surface before any rendering starts.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `source` - Template content as string
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Renders a previously added template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of the template to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
