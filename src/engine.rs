use crate::{
    manifest,
    plan::FilePlan,
    selection::{ApiStyle, Language, ProjectType, Selection, StateManagement, Styling},
    templates,
};
use miette::Diagnostic;
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("no answer for the '{category}' option")]
    #[diagnostic(
        code(forja::engine::missing_selection),
        help("Answer the prompt for this category, or add the key to your preset file.")
    )]
    MissingSelection { category: &'static str },

    #[error("error occurred attempting to render a template fragment")]
    #[diagnostic(code(forja::engine::render))]
    Render {
        #[source]
        source: tera::Error,
    },

    #[error("error occurred attempting to serialize the package manifest")]
    #[diagnostic(code(forja::engine::manifest))]
    Manifest {
        #[source]
        source: serde_json::Error,
    },
}

/// Renders fixed fragments against a context hydrated from the selection.
struct Fragments {
    tera: Tera,
    context: Context,
}
impl Fragments {
    fn new(selection: &Selection) -> Self {
        Self {
            tera: Tera::default(),
            context: hydrate_context(selection),
        }
    }

    fn render(&mut self, template: &str) -> Result<String, EngineError> {
        self.tera
            .render_str(template, &self.context)
            .map_err(|error| EngineError::Render { source: error })
    }
}

fn hydrate_context(selection: &Selection) -> Context {
    let mut context = Context::new();

    let typescript = selection.language != Some(Language::JavaScript);
    context.insert("typescript", &typescript);
    context.insert("source_ext", if typescript { "tsx" } else { "jsx" });

    if let Some(project) = selection.project {
        let framework = match project {
            ProjectType::Web => "React",
            ProjectType::Mobile => "React Native",
            ProjectType::Backend => "Node/Express",
        };
        context.insert("framework", framework);
    }
    if let Some(language) = selection.language {
        context.insert("language", language.label());
    }
    if let Some(state_management) = selection.state_management {
        context.insert("state_management", state_management.label());
    }
    if let Some(api) = selection.api {
        let route_module = match api {
            ApiStyle::Rest => "api",
            ApiStyle::GraphQl => "graphql",
        };
        context.insert("route_module", route_module);
    }

    context
}

fn require<T: Copy>(field: Option<T>, category: &'static str) -> Result<T, EngineError> {
    field.ok_or(EngineError::MissingSelection { category })
}

/// Derives the full file plan for a selection. Pure: no I/O, and identical
/// selections always yield byte-identical plans.
pub fn build_plan(selection: &Selection) -> Result<FilePlan, EngineError> {
    let project = require(selection.project, "project type")?;

    match project {
        ProjectType::Web => build_web_plan(selection),
        ProjectType::Mobile => build_mobile_plan(selection),
        ProjectType::Backend => build_backend_plan(selection),
    }
}

fn source_ext(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::TypeScript => ("ts", "tsx"),
        Language::JavaScript => ("js", "jsx"),
    }
}

fn manifest_json(manifest: &manifest::Manifest) -> Result<String, EngineError> {
    manifest
        .to_json()
        .map_err(|error| EngineError::Manifest { source: error })
}

fn push_store_files(
    plan: &mut FilePlan,
    fragments: &mut Fragments,
    state_management: StateManagement,
    ext: &str,
) -> Result<(), EngineError> {
    match state_management {
        StateManagement::Redux => {
            plan.ensure_dir("src/store");
            plan.write_file(
                format!("src/store/store.{}", ext),
                fragments.render(templates::REDUX_STORE_TMPL)?,
            );
            plan.write_file(
                format!("src/store/appSlice.{}", ext),
                fragments.render(templates::REDUX_SLICE_TMPL)?,
            );
        }
        StateManagement::Mobx => {
            plan.ensure_dir("src/store");
            plan.write_file(
                format!("src/store/appStore.{}", ext),
                fragments.render(templates::MOBX_STORE_TMPL)?,
            );
        }
        StateManagement::None => {}
    }

    Ok(())
}

fn build_web_plan(selection: &Selection) -> Result<FilePlan, EngineError> {
    let language = require(selection.language, "language")?;
    let state_management = require(selection.state_management, "state management")?;
    require(selection.authentication, "authentication")?;
    let styling = require(selection.styling, "styling")?;

    let (ext, ext_x) = source_ext(language);
    let mut fragments = Fragments::new(selection);
    let mut plan = FilePlan::new();

    plan.ensure_dir("src");
    plan.ensure_dir("src/components");
    plan.ensure_dir("src/styles");
    plan.ensure_dir("public");

    plan.write_file("package.json", manifest_json(&manifest::web_manifest(selection))?);
    plan.write_file(".gitignore", templates::GITIGNORE.to_string());
    plan.write_file("README.md", fragments.render(templates::README_TMPL)?);
    plan.write_file(".env", templates::ENV_WEB.to_string());
    plan.write_file(".eslintrc.js", fragments.render(templates::ESLINTRC_TMPL)?);
    plan.write_file(".prettierrc", templates::PRETTIERRC.to_string());
    plan.write_file("public/index.html", templates::INDEX_HTML.to_string());

    let (style_entry, app_shell) = if styling == Styling::TailwindCss {
        (
            templates::INDEX_CSS_TAILWIND.to_string(),
            fragments.render(templates::APP_SHELL_TAILWIND_TMPL)?,
        )
    } else {
        (
            templates::INDEX_CSS_BASE.to_string(),
            fragments.render(templates::APP_SHELL_TMPL)?,
        )
    };

    plan.write_file("src/index.css", style_entry);
    plan.write_file(
        format!("src/index.{}", ext_x),
        fragments.render(templates::INDEX_ENTRY_TMPL)?,
    );
    plan.write_file(format!("src/App.{}", ext_x), app_shell);
    plan.write_file(
        format!("src/components/ComponentTemplate.{}", ext_x),
        fragments.render(templates::COMPONENT_TEMPLATE_TMPL)?,
    );

    if styling == Styling::TailwindCss {
        plan.write_file("tailwind.config.js", templates::TAILWIND_CONFIG.to_string());
        plan.write_file("postcss.config.js", templates::POSTCSS_CONFIG.to_string());
    }

    push_store_files(&mut plan, &mut fragments, state_management, ext)?;

    Ok(plan)
}

fn build_mobile_plan(selection: &Selection) -> Result<FilePlan, EngineError> {
    let language = require(selection.language, "language")?;
    let state_management = require(selection.state_management, "state management")?;

    let (ext, ext_x) = source_ext(language);
    let mut fragments = Fragments::new(selection);
    let mut plan = FilePlan::new();

    plan.ensure_dir("src");
    plan.ensure_dir("src/screens");
    plan.ensure_dir("src/components");

    plan.write_file(
        "package.json",
        manifest_json(&manifest::mobile_manifest(selection))?,
    );
    plan.write_file(".gitignore", templates::GITIGNORE.to_string());
    plan.write_file("README.md", fragments.render(templates::README_MOBILE_TMPL)?);
    plan.write_file(
        format!("src/App.{}", ext_x),
        fragments.render(templates::MOBILE_APP_TMPL)?,
    );
    plan.write_file(
        format!("src/screens/Home.{}", ext_x),
        fragments.render(templates::MOBILE_HOME_TMPL)?,
    );

    push_store_files(&mut plan, &mut fragments, state_management, ext)?;

    Ok(plan)
}

fn build_backend_plan(selection: &Selection) -> Result<FilePlan, EngineError> {
    let api = require(selection.api, "API type")?;
    require(selection.database, "database")?;

    let mut fragments = Fragments::new(selection);
    let mut plan = FilePlan::new();

    plan.ensure_dir("src");
    plan.ensure_dir("src/routes");

    plan.write_file(
        "package.json",
        manifest_json(&manifest::backend_manifest(selection))?,
    );
    plan.write_file(".gitignore", templates::GITIGNORE.to_string());
    plan.write_file("README.md", fragments.render(templates::README_BACKEND_TMPL)?);
    plan.write_file(".env", templates::ENV_BACKEND.to_string());
    plan.write_file(
        "src/index.ts",
        fragments.render(templates::BACKEND_INDEX_TMPL)?,
    );

    // backend stubs stay TypeScript regardless of the language answer
    match api {
        ApiStyle::Rest => {
            plan.write_file("src/routes/api.ts", templates::BACKEND_REST_ROUTE.to_string());
        }
        ApiStyle::GraphQl => {
            plan.write_file(
                "src/routes/graphql.ts",
                templates::BACKEND_GRAPHQL_ROUTE.to_string(),
            );
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{AuthMethod, Database};
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn web_selection() -> Selection {
        Selection {
            project: Some(ProjectType::Web),
            language: Some(Language::TypeScript),
            state_management: Some(StateManagement::None),
            authentication: Some(AuthMethod::None),
            styling: Some(Styling::None),
            ..Selection::default()
        }
    }

    #[test]
    fn identical_selections_build_identical_plans() {
        let mut selection = web_selection();
        selection.state_management = Some(StateManagement::Redux);
        selection.styling = Some(Styling::TailwindCss);

        let first = build_plan(&selection).unwrap();
        let second = build_plan(&selection).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn every_file_parent_is_in_the_directory_list() {
        let selections = [
            web_selection(),
            Selection {
                state_management: Some(StateManagement::Redux),
                styling: Some(Styling::TailwindCss),
                ..web_selection()
            },
            Selection {
                project: Some(ProjectType::Mobile),
                language: Some(Language::JavaScript),
                state_management: Some(StateManagement::Mobx),
                ..Selection::default()
            },
            Selection {
                project: Some(ProjectType::Backend),
                api: Some(ApiStyle::GraphQl),
                database: Some(Database::Postgres),
                ..Selection::default()
            },
        ];

        for selection in &selections {
            let plan = build_plan(selection).unwrap();

            let dirs: HashSet<&PathBuf> = plan.dirs().iter().collect();
            assert_eq!(dirs.len(), plan.dirs().len(), "duplicate directory entries");

            for file in plan.files() {
                if let Some(parent) = file.path.parent() {
                    if !parent.as_os_str().is_empty() {
                        assert!(
                            dirs.contains(&parent.to_path_buf()),
                            "missing parent dir {} for {}",
                            parent.display(),
                            file.path.display()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn redux_includes_store_and_slice() {
        let mut selection = web_selection();
        selection.state_management = Some(StateManagement::Redux);

        let plan = build_plan(&selection).unwrap();

        assert!(plan.contains_file("src/store/store.ts"));
        assert!(plan.contains_file("src/store/appSlice.ts"));
    }

    #[test]
    fn no_state_management_means_no_store_files() {
        let plan = build_plan(&web_selection()).unwrap();

        assert!(!plan.contains_file("src/store/store.ts"));
        assert!(!plan.contains_file("src/store/appSlice.ts"));
        assert!(!plan.dirs().iter().any(|d| d.ends_with("store")));
    }

    #[test]
    fn tailwind_writes_directives_and_config() {
        let mut selection = web_selection();
        selection.styling = Some(Styling::TailwindCss);

        let plan = build_plan(&selection).unwrap();

        let css = plan.file_contents("src/index.css").unwrap();
        assert!(css.contains("@tailwind base;"));
        assert!(css.contains("@tailwind components;"));
        assert!(css.contains("@tailwind utilities;"));
        assert!(plan.contains_file("tailwind.config.js"));
        assert!(plan.contains_file("postcss.config.js"));
    }

    #[test]
    fn non_tailwind_styling_omits_the_config_pair() {
        for styling in [Styling::None, Styling::CssModules, Styling::Sass, Styling::Less] {
            let mut selection = web_selection();
            selection.styling = Some(styling);

            let plan = build_plan(&selection).unwrap();

            assert!(!plan.contains_file("tailwind.config.js"), "{:?}", styling);
            assert!(!plan.contains_file("postcss.config.js"), "{:?}", styling);
        }
    }

    #[test]
    fn baseline_produces_exactly_the_baseline_file_set() {
        let plan = build_plan(&web_selection()).unwrap();

        let expected: Vec<PathBuf> = [
            "package.json",
            ".gitignore",
            "README.md",
            ".env",
            ".eslintrc.js",
            ".prettierrc",
            "public/index.html",
            "src/index.css",
            "src/index.tsx",
            "src/App.tsx",
            "src/components/ComponentTemplate.tsx",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        let planned: Vec<&PathBuf> = plan.files().iter().map(|f| &f.path).collect();
        assert_eq!(planned.len(), expected.len());
        for path in &expected {
            assert!(plan.contains_file(path), "missing {}", path.display());
        }

        let manifest = plan.file_contents("package.json").unwrap();
        for name in ["@reduxjs/toolkit", "mobx", "tailwindcss", "styled-components"] {
            assert!(!manifest.contains(name), "{name} leaked into the manifest");
        }
    }

    #[test]
    fn javascript_selection_uses_jsx_extensions() {
        let mut selection = web_selection();
        selection.language = Some(Language::JavaScript);

        let plan = build_plan(&selection).unwrap();

        assert!(plan.contains_file("src/index.jsx"));
        assert!(plan.contains_file("src/App.jsx"));
        assert!(!plan.contains_file("src/index.tsx"));

        let entry = plan.file_contents("src/index.jsx").unwrap();
        assert!(!entry.contains("as HTMLElement"));
    }

    #[test]
    fn unspecified_category_is_an_error_not_a_default() {
        let mut selection = web_selection();
        selection.state_management = None;

        let error = build_plan(&selection).unwrap_err();

        assert!(matches!(
            error,
            EngineError::MissingSelection {
                category: "state management"
            }
        ));
    }

    #[test]
    fn backend_rest_and_graphql_pick_different_routes() {
        let mut selection = Selection {
            project: Some(ProjectType::Backend),
            api: Some(ApiStyle::Rest),
            database: Some(Database::Postgres),
            ..Selection::default()
        };

        let rest = build_plan(&selection).unwrap();
        assert!(rest.contains_file("src/routes/api.ts"));
        assert!(!rest.contains_file("src/routes/graphql.ts"));

        selection.api = Some(ApiStyle::GraphQl);
        let graphql = build_plan(&selection).unwrap();
        assert!(graphql.contains_file("src/routes/graphql.ts"));
        assert!(!graphql.contains_file("src/routes/api.ts"));
    }
}
