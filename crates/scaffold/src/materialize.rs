//! Writing the project tree to disk
//!
//! The root directory is created with `create_dir`, never `create_dir_all`,
//! so an existing directory is refused instead of written into. After that
//! every step is fail-fast and nothing is rolled back: whatever was created
//! before the failure stays on disk for the operator to inspect or remove.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use scaffold_core::Console;
use serde::Serialize;

use crate::config::ProjectConfig;
use crate::error::{FilesystemError, ScaffoldError};
use crate::render::render;
use crate::templates::{TemplateEntry, SCAFFOLD_DIRS, TEMPLATES};

/// What a planned path will be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One path the materializer will create, relative to the parent directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
    /// Template rendered into this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static str>,
}

/// Everything a run creates, in creation order: root, scaffold directories, files.
pub fn plan(config: &ProjectConfig) -> Vec<PlannedEntry> {
    let root = PathBuf::from(&config.project_name);

    let mut entries = vec![PlannedEntry {
        kind: EntryKind::Directory,
        path: root.clone(),
        template: None,
    }];

    entries.extend(SCAFFOLD_DIRS.iter().map(|dir| PlannedEntry {
        kind: EntryKind::Directory,
        path: root.join(dir),
        template: None,
    }));

    entries.extend(TEMPLATES.iter().map(|t| PlannedEntry {
        kind: EntryKind::File,
        path: root.join(t.path),
        template: Some(t.name),
    }));

    entries
}

/// Creates project trees under a parent directory
#[derive(Debug, Clone)]
pub struct Materializer {
    parent: PathBuf,
    dirs: &'static [&'static str],
    templates: &'static [TemplateEntry],
}

impl Materializer {
    pub fn new(parent: impl Into<PathBuf>) -> Self {
        Self {
            parent: parent.into(),
            dirs: SCAFFOLD_DIRS,
            templates: TEMPLATES,
        }
    }

    /// Use a different set of scaffold directories than the built-in one
    pub fn with_dirs(mut self, dirs: &'static [&'static str]) -> Self {
        self.dirs = dirs;
        self
    }

    /// Use a different file table than the built-in one
    pub fn with_templates(mut self, templates: &'static [TemplateEntry]) -> Self {
        self.templates = templates;
        self
    }

    /// Directory the project root will be created in
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Where the project root for `config` goes
    pub fn root(&self, config: &ProjectConfig) -> PathBuf {
        self.parent.join(&config.project_name)
    }

    /// Create the full tree for an already validated `config`, reporting each
    /// created path.
    ///
    /// Returns the created paths in creation order.
    pub fn materialize<W: Write>(
        &self,
        config: &ProjectConfig,
        console: &mut Console<W>,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let root = self.root(config);
        let mut created = Vec::with_capacity(1 + self.dirs.len() + self.templates.len());

        create_root(&root)?;
        self.report(console, &root);
        created.push(root.clone());

        for dir in self.dirs {
            let path = root.join(dir);
            fs::create_dir(&path).map_err(|source| FilesystemError::DirectoryCreateFailed {
                path: path.clone(),
                source,
            })?;
            self.report(console, &path);
            created.push(path);
        }

        for entry in self.templates {
            let path = root.join(entry.path);
            let content = render(entry.name, entry.body, config)?;
            write_file(&path, &content)?;
            tracing::debug!(template = entry.name, path = %path.display(), bytes = content.len(), "wrote file");
            self.report(console, &path);
            created.push(path);
        }

        tracing::info!(root = %root.display(), entries = created.len(), "project created");
        Ok(created)
    }

    fn report<W: Write>(&self, console: &mut Console<W>, path: &Path) {
        let shown = path.strip_prefix(&self.parent).unwrap_or(path);
        console.success(shown.display());
    }
}

fn create_root(root: &Path) -> Result<(), FilesystemError> {
    // symlink_metadata also catches dangling symlinks that create_dir would trip over
    if root.symlink_metadata().is_ok() {
        return Err(FilesystemError::RootAlreadyExists {
            path: root.to_path_buf(),
        });
    }

    fs::create_dir(root).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => FilesystemError::RootAlreadyExists {
            path: root.to_path_buf(),
        },
        _ => FilesystemError::DirectoryCreateFailed {
            path: root.to_path_buf(),
            source,
        },
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    let mut file = File::create(path).map_err(|source| FilesystemError::FileCreateFailed {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content.as_bytes())
        .map_err(|source| FilesystemError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
