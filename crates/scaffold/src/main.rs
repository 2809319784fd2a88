//! scaffold - Go project scaffolding
//!
//! "Three answers in, a buildable skeleton out."
//!
//! Run without arguments to be asked for everything. Flags preset answers,
//! preview the tree, or show the built-in templates.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use colored::Colorize;
use scaffold::render::placeholders_in;
use scaffold::{
    plan, Collector, FilesystemError, Materializer, Preset, ProjectConfig, ScaffoldError,
    TemplateEntry, TEMPLATES,
};
use scaffold_core::{Console, Status};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Create a new Go project skeleton")]
#[command(version)]
#[command(group(ArgGroup::new("listing").args(["dry_run", "list_templates"]).multiple(true)))]
#[command(after_help = r#"GENERATED LAYOUT:
    <name>/cmd/root.go          Runnable entry point with a greeting
    <name>/pkg/mypackage.go     Package stub
    <name>/go.mod               Module path and Go version
    <name>/main.go              Top-level entry importing the package
    <name>/README.md            Project README
    <name>/internal, docs, scripts

TEMPLATE VARIABLES:
    {{ProjectName}}     Project name
    {{ModuleName}}      Go module path
    {{RuntimeVersion}}  Go version (default 1.21)

EXAMPLES:
    scaffold                                    # Answer prompts
    scaffold --name demo --module example.com/demo
    scaffold --name demo --dry-run --json       # Preview without writing
    scaffold --list-templates --json
"#)]
struct Cli {
    /// Project name (skips the prompt)
    #[arg(long)]
    name: Option<String>,

    /// Go module path (skips the prompt)
    #[arg(long)]
    module: Option<String>,

    /// Go version for go.mod (skips the prompt)
    #[arg(long = "go-version", value_name = "VERSION")]
    go_version: Option<String>,

    /// Directory to create the project in
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,

    /// Show what would be created without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Output the dry-run plan or template list as JSON
    #[arg(long, requires = "listing")]
    json: bool,

    /// List built-in templates and exit
    #[arg(long)]
    list_templates: bool,
}

impl Cli {
    fn preset(&self) -> Preset {
        Preset {
            project_name: self.name.clone(),
            module_name: self.module.clone(),
            runtime_version: self.go_version.clone(),
        }
    }
}

fn main() -> ExitCode {
    scaffold_core::logging::init();

    let cli = Cli::parse();

    match run_with(&cli, Collector::stdio()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", Status::Failure.line(format!("error: {}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run_with<R: BufRead, W: Write>(cli: &Cli, mut collector: Collector<R, W>) -> Result<()> {
    if cli.list_templates {
        return cmd_list_templates(cli.json);
    }

    let config = collector.collect(&cli.preset())?;
    config.validate()?;
    tracing::debug!(?config, "configuration validated");

    if cli.dry_run {
        return cmd_plan(&config, cli.json);
    }

    cmd_new(&config, Materializer::new(&cli.dir))
}

/// Create the project tree
fn cmd_new(config: &ProjectConfig, materializer: Materializer) -> Result<()> {
    let mut console = Console::stdout();

    console.plain("");
    console.info(format!(
        "Creating {} in {}",
        config.project_name,
        materializer.parent().display()
    ));

    if let Err(e) = materializer.materialize(config, &mut console) {
        let root = materializer.root(config);
        let ours = !matches!(
            e,
            ScaffoldError::Filesystem(FilesystemError::RootAlreadyExists { .. })
        );
        if ours && root.exists() {
            console.warn(format!(
                "Partially created project left at {}; remove it before running again",
                root.display()
            ));
        }
        return Err(e.into());
    }

    console.plain("");
    console.success(format!("Project created: {}", config.project_name));
    console.plain("");
    console.plain("Next steps:".bold());
    console.plain(format!("  cd {}", materializer.root(config).display()));
    console.plain("  go run .");

    Ok(())
}

/// Print the tree that would be created
fn cmd_plan(config: &ProjectConfig, json: bool) -> Result<()> {
    let entries = plan(config);

    if json {
        let out = serde_json::json!({
            "config": config,
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Would create:".bold());
    for entry in &entries {
        match entry.template {
            Some(template) => println!("  {}  {}", entry.path.display(), format!("({})", template).dimmed()),
            None => println!("  {}/", entry.path.display()),
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct TemplateInfo<'a> {
    #[serde(flatten)]
    entry: &'a TemplateEntry,
    placeholders: Vec<String>,
}

/// Show the built-in template table
fn cmd_list_templates(json: bool) -> Result<()> {
    if json {
        let infos: Vec<_> = TEMPLATES
            .iter()
            .map(|entry| TemplateInfo {
                entry,
                placeholders: placeholders_in(entry.body),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{}", "Built-in Templates".bold());
    println!();

    for entry in TEMPLATES {
        let tokens = placeholders_in(entry.body);
        let used = if tokens.is_empty() {
            "(no placeholders)".to_string()
        } else {
            tokens
                .iter()
                .map(|t| format!("{{{{{}}}}}", t))
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  {:14} {:18} {}", entry.name.green(), entry.path, used.dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold::{InputError, ValidationError};
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_required() {
        let cli = Cli::try_parse_from(["scaffold"]).unwrap();
        let preset = cli.preset();
        assert!(preset.project_name.is_none());
        assert!(!preset.is_complete());
        assert_eq!(cli.dir, PathBuf::from("."));
    }

    #[test]
    fn test_flags_fill_preset() {
        let cli = Cli::try_parse_from([
            "scaffold",
            "--name",
            "demo",
            "--module",
            "example.com/demo",
            "--go-version",
            "1.22",
            "-C",
            "/tmp",
        ])
        .unwrap();
        assert!(cli.preset().is_complete());
        assert_eq!(cli.dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_json_requires_listing() {
        assert!(Cli::try_parse_from(["scaffold", "--json"]).is_err());
        assert!(Cli::try_parse_from(["scaffold", "--dry-run", "--json"]).is_ok());
        assert!(Cli::try_parse_from(["scaffold", "--list-templates", "--json"]).is_ok());
    }

    fn in_memory(input: &str) -> Collector<Cursor<Vec<u8>>, Vec<u8>> {
        Collector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn cli_in(dir: &Path, extra: &[&str]) -> Cli {
        let dir = dir.to_string_lossy().to_string();
        let mut args = vec!["scaffold", "-C", dir.as_str()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_invalid_version_writes_nothing() {
        let tmp = tempdir().unwrap();
        let cli = cli_in(
            tmp.path(),
            &["--name", "demo", "--module", "example.com/demo", "--go-version", "2.0"],
        );

        let err = run_with(&cli, in_memory("")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidRuntimeVersion("2.0".to_string()))
        );
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_project_name_writes_nothing() {
        let tmp = tempdir().unwrap();
        let cli = cli_in(tmp.path(), &[]);

        let err = run_with(&cli, in_memory("\nexample.com/demo\n\n")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyProjectName)
        );
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_closed_input_is_error() {
        let tmp = tempdir().unwrap();
        let cli = cli_in(tmp.path(), &[]);

        let err = run_with(&cli, in_memory("demo\n")).unwrap_err();

        assert!(err.downcast_ref::<InputError>().is_some());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_interactive_run_creates_project() {
        let tmp = tempdir().unwrap();
        let cli = cli_in(tmp.path(), &[]);

        run_with(&cli, in_memory("demo\nexample.com/demo\n\n")).unwrap();

        let root = tmp.path().join("demo");
        let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
        assert_eq!(go_mod, "module example.com/demo\n\ngo 1.21\n");
        let readme = fs::read_to_string(root.join("README.md")).unwrap();
        assert_eq!(readme.lines().next(), Some("# demo"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = tempdir().unwrap();
        let cli = cli_in(tmp.path(), &["--name", "demo", "--module", "m", "--go-version", "", "--dry-run"]);

        run_with(&cli, in_memory("")).unwrap();

        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_template_info_json() {
        let entry = &TEMPLATES[2];
        let info = TemplateInfo {
            entry,
            placeholders: placeholders_in(entry.body),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["name"], "manifest-file");
        assert_eq!(value["path"], "go.mod");
        assert_eq!(value["placeholders"], serde_json::json!(["ModuleName", "RuntimeVersion"]));
        assert!(value.get("body").is_none());
    }
}
