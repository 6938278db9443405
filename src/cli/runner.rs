use crate::{
    cli::Args,
    constants::VARS_FILE,
    dispatch,
    error::Result,
    renderer::get_template_engine,
    template::TemplateSet,
    variables,
};

/// Main CLI runner that orchestrates the rendering pipeline.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete rendering workflow: load variables, discover
    /// templates, render everything in parallel.
    ///
    /// Variable and discovery failures abort before any output file is
    /// written; render failures are aggregated after all templates have been
    /// attempted.
    pub fn run(self) -> Result<()> {
        let mut engine = get_template_engine();

        let vars_path = self.args.source_dir.join(VARS_FILE);
        let vars = variables::load(&vars_path)?;
        log::debug!("loaded variables from '{}'", vars_path.display());

        let templates = TemplateSet::discover(&self.args.source_dir, engine.as_mut())?;
        log::info!(
            "discovered {} template(s) in '{}'",
            templates.len(),
            self.args.source_dir.display()
        );

        dispatch::render_all(&templates, engine.as_ref(), &vars, &self.args.target_dir)?;

        println!(
            "Rendered {} template(s) into {}.",
            templates.len(),
            self.args.target_dir.display()
        );
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
