use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance holding every added template
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance.
    ///
    /// Undefined behavior is strict: referencing a variable that is absent
    /// from the context fails the render instead of producing empty output.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| Error::TemplateSyntaxError {
                name: name.to_string(),
                source,
            })
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let render = || self.env.get_template(name)?.render(context);
        render().map_err(|source| Error::RenderError { name: name.to_string(), source })
    }
}
