//! Interactive collection of the project configuration
//!
//! Prompts are asked in a fixed order: project name, module name, Go version.
//! Answers given on the command line skip their prompt.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::config::{ProjectConfig, DEFAULT_RUNTIME_VERSION};
use crate::error::InputError;

const BANNER: &str = r#"
  ___  ___ __ _ / _|/ _| ___ | | __| |
 / __|/ __/ _` | |_| |_ / _ \| |/ _` |
 \__ \ (_| (_| |  _|  _| (_) | | (_| |
 |___/\___\__,_|_| |_|  \___/|_|\__,_|
"#;

/// A single question with an optional default answer
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub label: &'a str,
    pub default: Option<&'a str>,
}

impl<'a> Prompt<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label, default: None }
    }

    pub fn with_default(label: &'a str, default: &'a str) -> Self {
        Self {
            label,
            default: Some(default),
        }
    }

    fn text(&self) -> String {
        match self.default {
            Some(default) => format!("{} [{}]: ", self.label, default),
            None => format!("{}: ", self.label),
        }
    }
}

/// Answers already known before prompting (from command-line flags)
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub project_name: Option<String>,
    pub module_name: Option<String>,
    pub runtime_version: Option<String>,
}

impl Preset {
    /// True when every field is preset and no prompt will be shown
    pub fn is_complete(&self) -> bool {
        self.project_name.is_some() && self.module_name.is_some() && self.runtime_version.is_some()
    }
}

/// Reads answers from `input`, writes prompts to `output`
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl Collector<StdinLock<'static>, Stdout> {
    /// Collector bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question and return the trimmed answer.
    ///
    /// Blank input yields the default when there is one, otherwise the empty
    /// string is returned for validation to deal with. End of input is an
    /// error: there is no sensible answer to make up.
    pub fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String, InputError> {
        write!(self.output, "{}", prompt.text()).map_err(InputError::Prompt)?;
        self.output.flush().map_err(InputError::Prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| InputError::Read {
                field: prompt.label.to_string(),
                source,
            })?;

        if read == 0 {
            return Err(InputError::UnexpectedEof {
                field: prompt.label.to_string(),
            });
        }

        let answer = line.trim();
        match (answer.is_empty(), prompt.default) {
            (true, Some(default)) => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }

    /// Print the banner and ask every question not answered by `preset`
    pub fn collect(&mut self, preset: &Preset) -> Result<ProjectConfig, InputError> {
        if !preset.is_complete() {
            writeln!(self.output, "{}", BANNER).map_err(InputError::Prompt)?;
            writeln!(self.output, "Create a new Go project\n").map_err(InputError::Prompt)?;
        }

        let project_name = match &preset.project_name {
            Some(name) => name.clone(),
            None => self.ask(&Prompt::new("Project name"))?,
        };
        tracing::debug!(project_name = %project_name, "project name");

        let module_name = match &preset.module_name {
            Some(module) => module.clone(),
            None => match project_name.trim() {
                "" => self.ask(&Prompt::new("Module name"))?,
                name => self.ask(&Prompt::with_default("Module name", name))?,
            },
        };
        tracing::debug!(module_name = %module_name, "module name");

        let runtime_version = match &preset.runtime_version {
            Some(version) => version.clone(),
            None => self.ask(&Prompt::with_default("Go version", DEFAULT_RUNTIME_VERSION))?,
        };
        tracing::debug!(runtime_version = %runtime_version, "go version");

        Ok(ProjectConfig::new(&project_name, &module_name, &runtime_version))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> Collector<Cursor<Vec<u8>>, Vec<u8>> {
        Collector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_input() {
        let mut c = collector("  demo  \n");
        assert_eq!(c.ask(&Prompt::new("Project name")).unwrap(), "demo");
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Project name: ");
    }

    #[test]
    fn test_ask_uses_default_on_blank() {
        let mut c = collector("   \n");
        let answer = c.ask(&Prompt::with_default("Go version", "1.21")).unwrap();
        assert_eq!(answer, "1.21");
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Go version [1.21]: ");
    }

    #[test]
    fn test_ask_keeps_blank_without_default() {
        let mut c = collector("\n");
        assert_eq!(c.ask(&Prompt::new("Project name")).unwrap(), "");
    }

    #[test]
    fn test_ask_eof_is_error() {
        let mut c = collector("");
        let err = c.ask(&Prompt::new("Project name")).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { field } if field == "Project name"));
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut c = collector("demo");
        assert_eq!(c.ask(&Prompt::new("Project name")).unwrap(), "demo");
    }

    #[test]
    fn test_collect_in_order() {
        let mut c = collector("demo\nexample.com/demo\n\n");
        let config = c.collect(&Preset::default()).unwrap();

        assert_eq!(config, ProjectConfig::new("demo", "example.com/demo", "1.21"));

        let out = String::from_utf8(c.into_output()).unwrap();
        let name = out.find("Project name").unwrap();
        let module = out.find("Module name").unwrap();
        let version = out.find("Go version").unwrap();
        assert!(name < module && module < version);
    }

    #[test]
    fn test_collect_module_defaults_to_project_name() {
        let mut c = collector("demo\n\n1.22\n");
        let config = c.collect(&Preset::default()).unwrap();
        assert_eq!(config.module_name, "demo");
        assert_eq!(config.runtime_version, "1.22");
    }

    #[test]
    fn test_collect_eof_midway() {
        let mut c = collector("demo\n");
        let err = c.collect(&Preset::default()).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEof { field } if field == "Module name"));
    }

    #[test]
    fn test_collect_skips_preset_fields() {
        let preset = Preset {
            project_name: Some("demo".to_string()),
            module_name: None,
            runtime_version: Some("1.22".to_string()),
        };
        let mut c = collector("example.com/demo\n");
        let config = c.collect(&preset).unwrap();
        assert_eq!(config, ProjectConfig::new("demo", "example.com/demo", "1.22"));

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(!out.contains("Project name"));
        assert!(out.contains("Module name [demo]: "));
    }

    #[test]
    fn test_collect_complete_preset_reads_nothing() {
        let preset = Preset {
            project_name: Some("demo".to_string()),
            module_name: Some("example.com/demo".to_string()),
            runtime_version: Some(String::new()),
        };
        let mut c = collector("");
        let config = c.collect(&preset).unwrap();
        assert_eq!(config.runtime_version, DEFAULT_RUNTIME_VERSION);
        assert!(c.into_output().is_empty());
    }
}
