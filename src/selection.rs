use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SelectionError {
    #[error("I/O error while loading preset")]
    #[diagnostic(code(forja::selection::io))]
    Io(#[from] IoError),

    #[error("Unable to parse preset file at '{path}': {source}")]
    #[diagnostic(
        code(forja::selection::parse_toml),
        help("Review the preset file; keys are project, language, state_management, authentication, styling, api, database")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Web,
    Mobile,
    Backend,
}
impl ProjectType {
    pub const ALL: &'static [Self] = &[Self::Web, Self::Mobile, Self::Backend];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web (React)",
            Self::Mobile => "Mobile (React Native)",
            Self::Backend => "Backend (Node/Express)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    TypeScript,
    JavaScript,
}
impl Language {
    pub const ALL: &'static [Self] = &[Self::TypeScript, Self::JavaScript];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateManagement {
    None,
    Redux,
    Mobx,
}
impl StateManagement {
    pub const ALL: &'static [Self] = &[Self::None, Self::Redux, Self::Mobx];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Redux => "Redux",
            Self::Mobx => "MobX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMethod {
    None,
    Jwt,
    OAuth,
}
impl AuthMethod {
    pub const ALL: &'static [Self] = &[Self::None, Self::Jwt, Self::OAuth];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Jwt => "JWT",
            Self::OAuth => "OAuth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    None,
    CssModules,
    TailwindCss,
    StyledComponents,
    Sass,
    Less,
}
impl Styling {
    pub const ALL: &'static [Self] = &[
        Self::None,
        Self::CssModules,
        Self::TailwindCss,
        Self::StyledComponents,
        Self::Sass,
        Self::Less,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::CssModules => "CSS Modules",
            Self::TailwindCss => "TailwindCSS",
            Self::StyledComponents => "Styled-components",
            Self::Sass => "Sass",
            Self::Less => "Less",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiStyle {
    Rest,
    GraphQl,
}
impl ApiStyle {
    pub const ALL: &'static [Self] = &[Self::Rest, Self::GraphQl];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::GraphQl => "GraphQL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Database {
    Postgres,
    MongoDb,
    Firestore,
}
impl Database {
    pub const ALL: &'static [Self] = &[Self::Postgres, Self::MongoDb, Self::Firestore];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Postgres => "Postgres",
            Self::MongoDb => "MongoDB",
            Self::Firestore => "Firestore",
        }
    }
}

/// The user's resolved answers to the project-configuration prompts.
///
/// `None` on a field means the category was never answered, which is distinct
/// from the explicit sentinel variants (`StateManagement::None`, ...) the user
/// can pick on purpose. Categories irrelevant to the chosen project type stay
/// unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selection {
    pub project: Option<ProjectType>,
    pub language: Option<Language>,
    pub state_management: Option<StateManagement>,
    pub authentication: Option<AuthMethod>,
    pub styling: Option<Styling>,
    pub api: Option<ApiStyle>,
    pub database: Option<Database>,
}
impl Selection {
    /// Loads a preset selection from a TOML file, for non-interactive runs.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SelectionError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed = toml::from_str(&content).map_err(|error| SelectionError::ParseToml {
            path: path.to_path_buf(),
            source: error,
        })?;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_parses_partial_answers() {
        let selection: Selection = toml::from_str(
            r#"
            project = "web"
            language = "type-script"
            state_management = "redux"
            "#,
        )
        .unwrap();

        assert_eq!(selection.project, Some(ProjectType::Web));
        assert_eq!(selection.language, Some(Language::TypeScript));
        assert_eq!(selection.state_management, Some(StateManagement::Redux));
        // unanswered categories stay unspecified, not "None"
        assert_eq!(selection.styling, None);
        assert_eq!(selection.authentication, None);
    }

    #[test]
    fn explicit_none_is_not_unspecified() {
        let selection: Selection = toml::from_str(
            r#"
            project = "web"
            styling = "none"
            "#,
        )
        .unwrap();

        assert_eq!(selection.styling, Some(Styling::None));
        assert_eq!(selection.state_management, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Selection, _> = toml::from_str("framework = \"react\"");

        assert!(result.is_err());
    }
}
