use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio-page")]
#[command(about = "Render a personal portfolio page and keep edits in local storage")]
pub struct CliConfig {
    #[arg(long, default_value = "./folio-store.json", help = "File backing the local store")]
    pub store: String,

    #[arg(long, help = "TOML file replacing the built-in default portfolio")]
    pub seed: Option<String>,

    #[arg(long, help = "Write the rendered page here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the page without changing anything
    Render,
    AddProject {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        url: String,
    },
    AddSkill {
        name: String,
    },
    RemoveProject {
        id: i64,
    },
    RemoveSkill {
        name: String,
    },
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store", &self.store)?;
        if let Some(seed) = &self.seed {
            validate_path("seed", seed)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_render() {
        let config = CliConfig::parse_from(["folio-page"]);
        assert_eq!(config.store, "./folio-store.json");
        assert!(config.command.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_add_project() {
        let config = CliConfig::parse_from([
            "folio-page",
            "--store",
            "/tmp/s.json",
            "add-project",
            "--id",
            "3",
            "--title",
            "T",
            "--description",
            "D",
            "--url",
            "https://x.dev",
        ]);
        match config.command {
            Some(Command::AddProject { id, ref title, .. }) => {
                assert_eq!(id, 3);
                assert_eq!(title, "T");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_store_path() {
        let config = CliConfig::parse_from(["folio-page", "--store", ""]);
        assert!(config.validate().is_err());
    }
}
