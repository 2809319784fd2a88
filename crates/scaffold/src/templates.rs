//! Built-in template table
//!
//! The generated layout is fixed: five scaffold directories and five files.
//! Template bodies use `{{ProjectName}}`, `{{ModuleName}}` and
//! `{{RuntimeVersion}}` placeholders, nothing else.

use serde::Serialize;

use crate::config::ProjectConfig;

/// Directories created under the project root, in creation order
pub const SCAFFOLD_DIRS: &[&str] = &["cmd", "pkg", "internal", "docs", "scripts"];

/// A recognised placeholder token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    ModuleName,
    RuntimeVersion,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::ProjectName,
        Placeholder::ModuleName,
        Placeholder::RuntimeVersion,
    ];

    /// Name between the braces
    pub fn token(&self) -> &'static str {
        match self {
            Self::ProjectName => "ProjectName",
            Self::ModuleName => "ModuleName",
            Self::RuntimeVersion => "RuntimeVersion",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    /// The configuration value this placeholder stands for
    pub fn value<'a>(&self, config: &'a ProjectConfig) -> &'a str {
        match self {
            Self::ProjectName => &config.project_name,
            Self::ModuleName => &config.module_name,
            Self::RuntimeVersion => &config.runtime_version,
        }
    }
}

/// A named template and where its rendered text goes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateEntry {
    /// Logical name used in messages
    pub name: &'static str,
    /// Target path relative to the project root
    pub path: &'static str,
    #[serde(skip)]
    pub body: &'static str,
}

impl TemplateEntry {
    const fn new(name: &'static str, path: &'static str, body: &'static str) -> Self {
        Self { name, path, body }
    }
}

/// All files written into a new project, in write order
pub const TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry::new("root-file", "cmd/root.go", ROOT_GO),
    TemplateEntry::new("package-file", "pkg/mypackage.go", PACKAGE_GO),
    TemplateEntry::new("manifest-file", "go.mod", GO_MOD),
    TemplateEntry::new("entry-file", "main.go", MAIN_GO),
    TemplateEntry::new("readme-file", "README.md", README_MD),
];

const ROOT_GO: &str = r#"package main

import (
	"fmt"
	"os"
)

func main() {
	fmt.Println("Hello from {{ProjectName}}!")
	os.Exit(0)
}
"#;

const PACKAGE_GO: &str = r#"package mypackage

// Add your package functionality here.
"#;

const GO_MOD: &str = r#"module {{ModuleName}}

go {{RuntimeVersion}}
"#;

const MAIN_GO: &str = r#"package main

import (
	_ "{{ModuleName}}/pkg"
)

func main() {
	// Entry point for your application
}
"#;

const README_MD: &str = r#"# {{ProjectName}}

This is a simple CLI application created with Go.

## Installation

```sh
go install {{ModuleName}}@latest
```

## Usage

```sh
go run .
go run ./cmd
```

Requires Go {{RuntimeVersion}} or newer.

## License

Add your license here.
"#;
