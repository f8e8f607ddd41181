use crate::{
    apply::{self, ApplyReport},
    engine,
    errors::IoError,
    install,
    plan::FilePlan,
    preview::preview_as_tree,
    prompt::{self, PromptSource, Resolution},
    selection::{Selection, SelectionError},
};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error("no target directory to scaffold into")]
    #[diagnostic(
        code(forja::missing_target),
        help("Pass the destination directory as an argument.")
    )]
    MissingTarget,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] engine::EngineError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Whether to run the dependency install after a successful apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Prompt,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy)]
pub struct ScaffoldOptions {
    /// Skip the preview confirmation.
    pub assume_yes: bool,
    pub install: InstallChoice,
}
impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            assume_yes: false,
            install: InstallChoice::Prompt,
        }
    }
}

/// How an invocation ended. Both variants are terminal; there are no retries.
#[derive(Debug)]
pub enum Outcome {
    Applied(ApplyReport),
    Cancelled,
}

/// Interactive entry point: resolve selections through prompts, then scaffold.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - A prompt interaction fails (cancellation is an [`Outcome`], not an error).
/// - The selections are incomplete for the chosen project type.
/// - A directory or file cannot be created or written to.
pub fn scaffold(
    prompt: &mut dyn PromptSource,
    destination: &str,
    options: &ScaffoldOptions,
) -> Result<Outcome, ScaffoldError> {
    match prompt::resolve_selections(prompt)? {
        Resolution::Cancelled => {
            eprintln!("{}", "cancelled, no files were written".red());

            Ok(Outcome::Cancelled)
        }
        Resolution::Selections(selection) => {
            scaffold_with(&selection, prompt, destination, options)
        }
    }
}

/// Scaffolds from an already resolved selection, e.g. one loaded from a preset
/// file. The prompt source is still consulted for the preview confirmation and
/// the install question unless the options bypass them.
pub fn scaffold_with(
    selection: &Selection,
    prompt: &mut dyn PromptSource,
    destination: &str,
    options: &ScaffoldOptions,
) -> Result<Outcome, ScaffoldError> {
    if destination.trim().is_empty() {
        return Err(ScaffoldError::MissingTarget);
    }

    let plan = engine::build_plan(selection)?;
    let root = PathBuf::from(destination);

    preview_as_tree(&plan, &root);

    if !options.assume_yes {
        match prompt.confirm("Apply these changes?")? {
            Some(true) => {}
            Some(false) | None => {
                eprintln!("{}", "cancelled, no files were written".red());

                return Ok(Outcome::Cancelled);
            }
        }
    }

    let report = apply::apply(&plan, &root)?;

    log::debug!(
        "applied plan: {} directories, {} files",
        report.dirs_created,
        report.files_written
    );
    println!(
        "{} scaffolded {} into {}",
        "done:".green().bold(),
        format!("{} files", report.files_written),
        root.display()
    );

    run_install_step(&plan, prompt, &root, options)?;

    Ok(Outcome::Applied(report))
}

/// The optional install step. Runs after the scaffold result is already final;
/// an install failure is reported on its own and never demotes the scaffold
/// outcome.
fn run_install_step(
    plan: &FilePlan,
    prompt: &mut dyn PromptSource,
    root: &std::path::Path,
    options: &ScaffoldOptions,
) -> Result<(), ScaffoldError> {
    if !plan.contains_file("package.json") {
        return Ok(());
    }

    let wanted = match options.install {
        InstallChoice::Always => true,
        InstallChoice::Never => false,
        InstallChoice::Prompt => prompt
            .confirm("Install dependencies with yarn now?")?
            .unwrap_or(false),
    };

    if !wanted {
        println!(
            "Run {} in the project directory to install dependencies.",
            "'yarn install'".cyan()
        );

        return Ok(());
    }

    match install::install_dependencies(root) {
        Ok(()) => println!("{}", "dependencies installed".green()),
        Err(error) => {
            eprintln!("{} {:?}", "install failed:".red(), miette::Report::new(error));
        }
    }

    Ok(())
}
