//! resume-analyzer: score resumes, match them to job descriptions and build ATS-safe PDFs

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use resume_analyzer::builder::{render_resume_pdf, suggested_pdf_filename, ResumeDocument};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::input::InputManager;
use resume_analyzer::output::{
    save_report_to_file, suggest_filename, AnalysisReport, JobSource, ReportGenerator, ReportMetadata,
};
use resume_analyzer::processing::ResumeAnalyzer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const JOB_EXTENSIONS: &[&str] = &["txt", "md", "pdf", "docx"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            let started = Instant::now();
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            if let Some(job) = &job {
                cli::validate_file_extension(job, JOB_EXTENSIONS)
                    .map_err(|e| anyhow::anyhow!("Job description file: {}", e))?;
            }

            let mut input_manager = InputManager::from_config(&config.input);
            let resume_input = input_manager
                .load_resume(&resume)
                .await
                .with_context(|| format!("Could not read resume {}", resume.display()))?;
            info!(
                "Resume: {} ({}, {} characters)",
                resume.display(),
                resume_input.file_type,
                resume_input.text.chars().count()
            );

            let (jd_text, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let text = input_manager
                        .load_job_description(&path)
                        .await
                        .with_context(|| format!("Could not read job description {}", path.display()))?;
                    (text, JobSource::File(path.display().to_string()))
                }
                (None, Some(text)) => (text, JobSource::Inline),
                (None, None) => (String::new(), JobSource::None),
            };
            let job_source = if jd_text.trim().is_empty() {
                info!("No job description given, running resume-only analysis");
                JobSource::None
            } else {
                job_source
            };

            let analyzer = ResumeAnalyzer::from_config(&config)?;
            let analysis = analyzer.analyze(&resume_input.text, &jd_text);

            let metadata = ReportMetadata::new(
                resume.display().to_string(),
                resume_input.file_type,
                job_source,
                &resume_input.text,
                config.input.preview_chars,
                started.elapsed().as_millis() as u64,
            );
            let report = AnalysisReport::new(analysis, metadata);

            let mut output_config = config.output.clone();
            output_config.color_output &= save.is_none();
            output_config.detailed |= detailed;
            let generator = ReportGenerator::from_config(&output_config);
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Build { input, output, paper } => {
            let document = ResumeDocument::from_file(&input)
                .await
                .with_context(|| format!("Could not load resume JSON {}", input.display()))?;

            let mut builder_config = config.builder.clone();
            if let Some(paper) = paper {
                builder_config.paper = cli::parse_paper_size(&paper).map_err(anyhow::Error::msg)?;
            }

            let bytes = render_resume_pdf(&document, &builder_config)?;
            let path = output.unwrap_or_else(|| PathBuf::from(suggested_pdf_filename(&document.name)));
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("Could not write {}", path.display()))?;

            println!("✅ Wrote {} ({} bytes)", path.display(), bytes.len());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
