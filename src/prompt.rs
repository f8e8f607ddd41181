use crate::selection::{
    ApiStyle, AuthMethod, Database, Language, ProjectType, Selection, StateManagement, Styling,
};
use inquire::{Confirm, InquireError, Select};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("error occurred trying to prompt user")]
    #[diagnostic(code(forja::prompt::interaction))]
    Interaction {
        #[source]
        source: InquireError,
    },

    #[error("'{choice}' is not a valid answer for '{category}'")]
    #[diagnostic(code(forja::prompt::unknown_choice))]
    UnknownChoice { category: String, choice: String },
}

/// Where answers come from. The interactive implementation talks to the
/// terminal; tests script their own.
///
/// `Ok(None)` means the user dismissed the prompt, which callers treat as
/// cancellation rather than an error.
pub trait PromptSource {
    fn ask_choice(
        &mut self,
        category: &str,
        options: &[&str],
    ) -> Result<Option<String>, PromptError>;

    fn confirm(&mut self, message: &str) -> Result<Option<bool>, PromptError>;
}

/// Terminal prompts via inquire.
pub struct InquirePrompt;

impl PromptSource for InquirePrompt {
    fn ask_choice(
        &mut self,
        category: &str,
        options: &[&str],
    ) -> Result<Option<String>, PromptError> {
        match Select::new(category, options.to_vec()).prompt() {
            Ok(choice) => Ok(Some(choice.to_string())),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(error) => Err(PromptError::Interaction { source: error }),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>, PromptError> {
        match Confirm::new(message).with_default(true).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(error) => Err(PromptError::Interaction { source: error }),
        }
    }
}

/// How a round of selection prompts ended.
#[derive(Debug)]
pub enum Resolution {
    Selections(Selection),
    Cancelled,
}

macro_rules! ask {
    ($prompt:expr, $category:expr, $variants:expr) => {{
        let labels: Vec<&str> = $variants.iter().map(|v| v.label()).collect();

        match $prompt.ask_choice($category, &labels)? {
            Some(choice) => {
                let Some(picked) = $variants.iter().find(|v| v.label() == choice) else {
                    return Err(PromptError::UnknownChoice {
                        category: $category.to_string(),
                        choice,
                    });
                };
                *picked
            }
            None => return Ok(Resolution::Cancelled),
        }
    }};
}

/// Walks the user through the option categories for their chosen project type.
///
/// Categories irrelevant to the project type are skipped entirely and stay
/// unspecified on the returned selection. Dismissing any prompt ends the round
/// with [`Resolution::Cancelled`].
pub fn resolve_selections(prompt: &mut dyn PromptSource) -> Result<Resolution, PromptError> {
    let mut selection = Selection::default();

    let project = ask!(prompt, "Select your project type", ProjectType::ALL);
    selection.project = Some(project);

    match project {
        ProjectType::Web => {
            selection.language = Some(ask!(prompt, "Choose your language", Language::ALL));
            selection.state_management =
                Some(ask!(prompt, "Select state management", StateManagement::ALL));
            selection.authentication =
                Some(ask!(prompt, "Select authentication", AuthMethod::ALL));
            selection.styling = Some(ask!(prompt, "Choose styling solution", Styling::ALL));
        }
        ProjectType::Mobile => {
            selection.language = Some(ask!(prompt, "Choose your language", Language::ALL));
            selection.state_management =
                Some(ask!(prompt, "Select state management", StateManagement::ALL));
        }
        ProjectType::Backend => {
            selection.api = Some(ask!(prompt, "Choose your API type", ApiStyle::ALL));
            selection.database = Some(ask!(prompt, "Choose your database", Database::ALL));
        }
    }

    log::debug!("resolved selection: {:?}", selection);

    Ok(Resolution::Selections(selection))
}
