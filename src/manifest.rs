use crate::selection::{ApiStyle, AuthMethod, Database, Language, Selection, StateManagement, Styling};
use indexmap::IndexMap;
use serde::Serialize;

/// A package manifest modeled as structured data and serialized once.
///
/// The dependency sections are ordered maps so that identical selections always
/// serialize to byte-identical output, and conditional entries can never leave
/// a dangling delimiter behind.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browserslist: Option<Browserslist>,
}

#[derive(Debug, Serialize)]
pub struct Browserslist {
    pub production: Vec<String>,
    pub development: Vec<String>,
}
impl Browserslist {
    fn react_defaults() -> Self {
        Self {
            production: vec![
                ">0.2%".to_string(),
                "not dead".to_string(),
                "not op_mini all".to_string(),
            ],
            development: vec![
                "last 1 chrome version".to_string(),
                "last 1 firefox version".to_string(),
                "last 1 safari version".to_string(),
            ],
        }
    }
}

impl Manifest {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');

        Ok(rendered)
    }
}

fn entry(map: &mut IndexMap<String, String>, name: &str, version: &str) {
    map.insert(name.to_string(), version.to_string());
}

fn state_management_dependencies(
    state_management: Option<StateManagement>,
    dependencies: &mut IndexMap<String, String>,
) {
    match state_management {
        Some(StateManagement::Redux) => {
            entry(dependencies, "@reduxjs/toolkit", "^1.9.5");
            entry(dependencies, "react-redux", "^8.0.5");
        }
        Some(StateManagement::Mobx) => {
            entry(dependencies, "mobx", "^6.9.0");
            entry(dependencies, "mobx-react-lite", "^3.4.3");
        }
        Some(StateManagement::None) | None => {}
    }
}

pub fn web_manifest(selection: &Selection) -> Manifest {
    let typescript = selection.language == Some(Language::TypeScript);

    let mut scripts = IndexMap::new();
    entry(&mut scripts, "dev", "react-scripts start");
    entry(&mut scripts, "build", "react-scripts build");
    entry(&mut scripts, "start", "react-scripts start");
    entry(&mut scripts, "lint", "eslint .");
    entry(&mut scripts, "format", "prettier --write .");

    let mut dependencies = IndexMap::new();
    entry(&mut dependencies, "react", "^18.2.0");
    entry(&mut dependencies, "react-dom", "^18.2.0");
    entry(&mut dependencies, "react-scripts", "latest");
    entry(&mut dependencies, "axios", "^1.4.0");

    state_management_dependencies(selection.state_management, &mut dependencies);

    match selection.authentication {
        Some(AuthMethod::Jwt) => entry(&mut dependencies, "jsonwebtoken", "^9.0.0"),
        Some(AuthMethod::OAuth) => entry(&mut dependencies, "next-auth", "^4.22.1"),
        Some(AuthMethod::None) | None => {}
    }

    match selection.styling {
        Some(Styling::StyledComponents) => {
            entry(&mut dependencies, "styled-components", "^5.3.10");
        }
        Some(Styling::Sass) => entry(&mut dependencies, "sass", "^1.62.1"),
        Some(Styling::Less) => entry(&mut dependencies, "less", "^4.1.3"),
        _ => {}
    }

    let mut dev_dependencies = IndexMap::new();
    entry(&mut dev_dependencies, "eslint", "^8.40.0");
    entry(&mut dev_dependencies, "eslint-config-prettier", "^8.8.0");
    entry(&mut dev_dependencies, "eslint-plugin-react", "^7.32.2");
    entry(&mut dev_dependencies, "prettier", "^2.8.8");

    if typescript {
        entry(&mut dev_dependencies, "typescript", "^5.0.4");
        entry(&mut dev_dependencies, "@typescript-eslint/eslint-plugin", "^5.59.6");
        entry(&mut dev_dependencies, "@typescript-eslint/parser", "^5.59.6");
        entry(&mut dev_dependencies, "@types/react", "^18.2.0");
        entry(&mut dev_dependencies, "@types/react-dom", "^18.2.0");
    } else {
        entry(&mut dev_dependencies, "@babel/eslint-parser", "^7.21.8");
    }

    if selection.styling == Some(Styling::TailwindCss) {
        entry(&mut dev_dependencies, "tailwindcss", "^3.3.2");
        entry(&mut dev_dependencies, "postcss", "^8.4.24");
        entry(&mut dev_dependencies, "autoprefixer", "^10.4.14");
    }

    Manifest {
        name: "react-boilerplate".to_string(),
        version: "1.0.0".to_string(),
        description: describe("React", selection),
        license: "MIT".to_string(),
        scripts,
        dependencies,
        dev_dependencies,
        browserslist: Some(Browserslist::react_defaults()),
    }
}

pub fn mobile_manifest(selection: &Selection) -> Manifest {
    let typescript = selection.language == Some(Language::TypeScript);

    let mut scripts = IndexMap::new();
    entry(&mut scripts, "start", "react-native start");
    entry(&mut scripts, "android", "react-native run-android");
    entry(&mut scripts, "ios", "react-native run-ios");
    entry(&mut scripts, "lint", "eslint .");

    let mut dependencies = IndexMap::new();
    entry(&mut dependencies, "react", "^18.2.0");
    entry(&mut dependencies, "react-native", "^0.72.0");

    state_management_dependencies(selection.state_management, &mut dependencies);

    let mut dev_dependencies = IndexMap::new();
    entry(&mut dev_dependencies, "@babel/core", "^7.21.0");
    entry(&mut dev_dependencies, "eslint", "^8.40.0");
    entry(&mut dev_dependencies, "prettier", "^2.8.8");

    if typescript {
        entry(&mut dev_dependencies, "typescript", "^5.0.4");
        entry(&mut dev_dependencies, "@types/react", "^18.2.0");
    }

    Manifest {
        name: "react-native-boilerplate".to_string(),
        version: "1.0.0".to_string(),
        description: describe("React Native", selection),
        license: "MIT".to_string(),
        scripts,
        dependencies,
        dev_dependencies,
        browserslist: None,
    }
}

pub fn backend_manifest(selection: &Selection) -> Manifest {
    let mut scripts = IndexMap::new();
    entry(&mut scripts, "dev", "nodemon src/index.ts");
    entry(&mut scripts, "start", "ts-node src/index.ts");
    entry(&mut scripts, "lint", "eslint .");

    let mut dependencies = IndexMap::new();
    entry(&mut dependencies, "express", "^4.18.2");
    entry(&mut dependencies, "dotenv", "^16.0.3");

    if selection.api == Some(ApiStyle::GraphQl) {
        entry(&mut dependencies, "apollo-server-express", "^3.12.0");
        entry(&mut dependencies, "graphql", "^16.6.0");
    }

    match selection.database {
        Some(Database::Postgres) => entry(&mut dependencies, "pg", "^8.11.0"),
        Some(Database::MongoDb) => entry(&mut dependencies, "mongodb", "^5.6.0"),
        Some(Database::Firestore) => entry(&mut dependencies, "firebase-admin", "^11.9.0"),
        None => {}
    }

    let mut dev_dependencies = IndexMap::new();
    entry(&mut dev_dependencies, "typescript", "^5.0.4");
    entry(&mut dev_dependencies, "ts-node", "^10.9.1");
    entry(&mut dev_dependencies, "nodemon", "^2.0.22");
    entry(&mut dev_dependencies, "@types/express", "^4.17.17");
    entry(&mut dev_dependencies, "eslint", "^8.40.0");

    Manifest {
        name: "express-api".to_string(),
        version: "1.0.0".to_string(),
        description: describe("Node/Express", selection),
        license: "MIT".to_string(),
        scripts,
        dependencies,
        dev_dependencies,
        browserslist: None,
    }
}

fn describe(framework: &str, selection: &Selection) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(state_management) = selection.state_management {
        if state_management != StateManagement::None {
            parts.push(state_management.label());
        }
    }
    if let Some(authentication) = selection.authentication {
        if authentication != AuthMethod::None {
            parts.push(authentication.label());
        }
    }
    if let Some(api) = selection.api {
        parts.push(api.label());
    }
    if let Some(database) = selection.database {
        parts.push(database.label());
    }

    if parts.is_empty() {
        format!("A {} boilerplate", framework)
    } else {
        format!("A {} boilerplate with {}", framework, parts.join(" and "))
    }
}
