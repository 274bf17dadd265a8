use anyhow::Context;
use clap::Parser;
use text_resume::core::ConfigProvider;
use text_resume::utils::{logger, validation::Validate};
use text_resume::{app, render_plain, CliConfig, HttpResumeApi, ResumeLoader, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.print {
        logger::init_cli_logger(cli.verbose);
    } else {
        let log_path = cli.log_file.clone().unwrap_or_else(logger::default_log_path);
        logger::init_file_logger(cli.verbose, &log_path)
            .with_context(|| format!("cannot open log file {}", log_path.display()))?;
    }

    tracing::info!("Starting text-resume");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("cannot start tokio runtime")?;

    if cli.print {
        return runtime.block_on(print_resume(&settings));
    }

    app::run(&settings, runtime.handle()).context("terminal UI failed")?;
    Ok(())
}

async fn print_resume(settings: &Settings) -> anyhow::Result<()> {
    let api = HttpResumeApi::from_config(settings)?;
    let loader = ResumeLoader::new(api, settings.resume_name());

    match loader.fetch().await {
        Ok(resume) => {
            println!("{}", render_plain(&resume));
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to load resume: {}", e);
            // 2 for anything the endpoint did wrong, 1 for local setup problems
            let exit_code = if e.is_fetch_error() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }
}
