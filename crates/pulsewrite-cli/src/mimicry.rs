//! Author mimicry command handlers for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;
use pulsewrite_core::{
    AppConfig, AuthorRef, MimicryStage, MimicryWorkflow, StyleFeature, WritingSample,
};

/// Sub-commands available under `mimicry`.
#[derive(Debug, Subcommand)]
pub enum MimicryCommands {
    /// Analyze writing samples, train a style model and print sample output
    Run {
        /// Text file holding a writing sample (repeatable)
        #[arg(long = "sample-file")]
        sample_files: Vec<PathBuf>,
        /// Inline writing sample (repeatable)
        #[arg(long = "text")]
        texts: Vec<String>,
        /// Style feature to capture (repeatable); defaults to all
        #[arg(long = "feature")]
        features: Vec<StyleFeature>,
        /// Profile name, required with --save
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Print the alternate generated paragraph instead of the first
        #[arg(long)]
        regenerate: bool,
        /// Save the profile to the backend and make it the active author
        #[arg(long)]
        save: bool,
    },
}

pub(crate) async fn run(config: &AppConfig, command: MimicryCommands) -> anyhow::Result<()> {
    match command {
        MimicryCommands::Run {
            sample_files,
            texts,
            features,
            name,
            description,
            regenerate,
            save,
        } => {
            let mut workflow = MimicryWorkflow::new();
            for path in &sample_files {
                let sample = WritingSample::from_file(path)?;
                workflow.add_sample(sample)?;
            }
            for text in texts {
                workflow.add_sample(WritingSample::from_text(text))?;
            }
            let features = if features.is_empty() {
                StyleFeature::ALL.to_vec()
            } else {
                features
            };
            for feature in features {
                if !workflow.features().contains(&feature) {
                    workflow.toggle_feature(feature);
                }
            }
            workflow.profile_name = name.unwrap_or_default();
            workflow.profile_description = description.unwrap_or_default();

            if save && workflow.profile_name.trim().is_empty() {
                anyhow::bail!("--save needs a profile name (--name)");
            }

            run_mimicry(config, &mut workflow, regenerate).await?;

            if save {
                save_profile(config, &workflow).await?;
            }
            Ok(())
        }
    }
}

/// Drive the staged workflow through analysis, training and generation.
async fn run_mimicry(
    config: &AppConfig,
    workflow: &mut MimicryWorkflow,
    regenerate: bool,
) -> anyhow::Result<()> {
    let words: usize = workflow.samples().iter().map(WritingSample::word_count).sum();
    println!(
        "{} samples ({words} words), {} features",
        workflow.samples().len(),
        workflow.features().len()
    );

    workflow.start_analysis()?;
    drive_progress(config, workflow).await;
    workflow.start_training()?;
    drive_progress(config, workflow).await;

    let mut text = workflow.generate()?;
    if regenerate {
        text = workflow.regenerate()?;
    }
    println!("\n{text}\n");
    Ok(())
}

/// Tick the running stage at the configured interval until it completes.
async fn drive_progress(config: &AppConfig, workflow: &mut MimicryWorkflow) {
    let period = Duration::from_millis(config.progress_tick_ms.max(1));
    let mut interval = tokio::time::interval(period);
    interval.tick().await;
    loop {
        interval.tick().await;
        let Some((stage, percent)) = workflow.tick(config.progress_step) else {
            break;
        };
        println!("{:<10}{percent:>3}%", stage_label(stage));
        if percent >= 100 {
            tracing::info!(stage = %stage, "mimicry stage complete");
            break;
        }
    }
}

fn stage_label(stage: MimicryStage) -> &'static str {
    match stage {
        MimicryStage::Analyze => "analyzing",
        MimicryStage::Train => "training",
        MimicryStage::Samples | MimicryStage::Features | MimicryStage::Generate => "",
    }
}

/// Save the profile and record it as the active author for content generation.
async fn save_profile(config: &AppConfig, workflow: &MimicryWorkflow) -> anyhow::Result<()> {
    if !workflow.can_save_profile() {
        anyhow::bail!("profile cannot be saved yet: name and completed analysis are required");
    }
    let draft = workflow.profile_draft()?;
    let client = crate::backend_client(config)?;
    let profile = client.create_author_personality(&draft).await?;

    let mut store = crate::open_store(config)?;
    store
        .update_payload(|p| {
            p.author = Some(AuthorRef {
                id: profile.id.clone(),
                name: profile.name.clone(),
            });
        })
        .map_err(|e| anyhow::anyhow!("failed to record active author: {e}"))?;

    println!("saved profile '{}' ({})", profile.name, profile.id);
    Ok(())
}
