use clap::Parser;
use folio_page::config::{default_portfolio, load_seed};
use folio_page::render::banner::error_banner;
use folio_page::render::page::{render_error_page, standard_document};
use folio_page::utils::{logger, validation::Validate};
use folio_page::{App, CliConfig, Command, ErrorCategory, FileStore, PortfolioError, ProfileUpdate};
use folio_page::{ProjectFields, Result};

async fn write_output(path: Option<&str>, html: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            tracing::info!("📁 Page written to: {}", path);
        }
        None => print!("{}", html),
    }
    Ok(())
}

async fn run_command(app: &mut App<FileStore>, command: Command) -> Result<()> {
    match command {
        Command::Render => {}
        Command::AddProject {
            id,
            title,
            description,
            url,
        } => {
            let project = app
                .add_project(ProjectFields::new(id, title, description, url))
                .await?;
            tracing::info!("Added project {} '{}'", project.id(), project.title());
        }
        Command::AddSkill { name } => {
            let skill = app.add_skill(name).await?;
            tracing::info!("Skill '{}' listed", skill.name());
        }
        Command::RemoveProject { id } => {
            if !app.remove_project(id).await? {
                tracing::warn!("No project with id {}", id);
            }
        }
        Command::RemoveSkill { name } => {
            if !app.remove_skill(&name).await? {
                tracing::warn!("No skill named '{}'", name);
            }
        }
        Command::UpdateProfile { name, summary } => {
            app.update_profile(ProfileUpdate { name, summary }).await?;
        }
    }
    Ok(())
}

fn exit_code(e: &PortfolioError) -> i32 {
    match e.category() {
        ErrorCategory::Input | ErrorCategory::Conflict => 1,
        ErrorCategory::Storage => 2,
        ErrorCategory::State | ErrorCategory::Page => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting folio-page");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let seed = match &config.seed {
        Some(path) => load_seed(path).await,
        None => Ok(default_portfolio()),
    };

    let mut app = App::new(FileStore::new(&config.store), standard_document());
    let initialized = match seed {
        Ok(seed) => app.initialize(seed).await,
        Err(e) => Err(e),
    };

    // 初始化失敗時只顯示錯誤橫幅
    if let Err(e) = initialized {
        tracing::error!("❌ Initialization failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        let banner = error_banner(&format!("Failed to load portfolio: {}", e.user_friendly_message()));
        write_output(config.output.as_deref(), &render_error_page(&banner)).await?;
        std::process::exit(exit_code(&e));
    }

    if let Some(command) = config.command.clone() {
        if let Err(e) = run_command(&mut app, command).await {
            eprintln!("❌ {}", e.user_friendly_message());
            if app.has_unsaved_changes() {
                eprintln!("⚠️  The change was applied but could not be saved");
            }
            std::process::exit(exit_code(&e));
        }
    }

    write_output(config.output.as_deref(), &app.render_page()).await?;
    tracing::info!("✅ Portfolio page rendered");
    Ok(())
}
