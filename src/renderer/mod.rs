pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Returns the default template rendering engine.
pub fn get_template_engine() -> Box<dyn TemplateRenderer> {
    Box::new(MiniJinjaRenderer::new())
}
