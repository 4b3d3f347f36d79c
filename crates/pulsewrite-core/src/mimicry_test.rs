use super::*;

fn run_to_completion(workflow: &mut MimicryWorkflow, step: u8) -> usize {
    let mut ticks = 0;
    while workflow.tick(step).is_some_and(|(_, pct)| pct <= 100) {
        ticks += 1;
        if ticks > 1_000 {
            panic!("simulated stage never finished");
        }
        if !workflow.analysis().running && !workflow.training().running {
            break;
        }
    }
    ticks
}

fn ready_for_analysis() -> MimicryWorkflow {
    let mut wf = MimicryWorkflow::new();
    wf.add_sample(WritingSample::from_text("I write in short bursts. Like this."))
        .unwrap();
    wf.toggle_feature(StyleFeature::Tone);
    wf
}

#[test]
fn starts_at_samples_stage() {
    let wf = MimicryWorkflow::new();
    assert_eq!(wf.current_stage(), MimicryStage::Samples);
}

#[test]
fn blank_sample_is_rejected() {
    let mut wf = MimicryWorkflow::new();
    assert_eq!(
        wf.add_sample(WritingSample::from_text("   ")),
        Err(MimicryError::EmptySample)
    );
}

#[test]
fn analysis_locked_without_features() {
    let mut wf = MimicryWorkflow::new();
    wf.add_sample(WritingSample::from_text("hello world")).unwrap();
    assert_eq!(
        wf.start_analysis(),
        Err(MimicryError::StageLocked {
            stage: MimicryStage::Analyze,
            requires: MimicryStage::Features,
        })
    );
}

#[test]
fn training_locked_until_analysis_completes() {
    let mut wf = ready_for_analysis();
    wf.start_analysis().unwrap();
    wf.tick(50);
    assert!(matches!(
        wf.start_training(),
        Err(MimicryError::StageLocked {
            requires: MimicryStage::Analyze,
            ..
        })
    ));
}

#[test]
fn ticks_advance_by_fixed_step_and_clamp() {
    let mut wf = ready_for_analysis();
    wf.start_analysis().unwrap();
    assert_eq!(wf.tick(30), Some((MimicryStage::Analyze, 30)));
    assert_eq!(wf.tick(30), Some((MimicryStage::Analyze, 60)));
    assert_eq!(wf.tick(30), Some((MimicryStage::Analyze, 90)));
    assert_eq!(wf.tick(30), Some((MimicryStage::Analyze, 100)));
    assert!(wf.analysis().is_complete());
    assert_eq!(wf.tick(30), None);
}

#[test]
fn ten_percent_steps_take_ten_ticks() {
    let mut wf = ready_for_analysis();
    wf.start_analysis().unwrap();
    assert_eq!(run_to_completion(&mut wf, 10), 10);
}

#[test]
fn full_pipeline_reaches_generate() {
    let mut wf = ready_for_analysis();
    wf.start_analysis().unwrap();
    run_to_completion(&mut wf, 25);
    wf.start_training().unwrap();
    run_to_completion(&mut wf, 25);
    assert_eq!(wf.current_stage(), MimicryStage::Generate);

    let first = wf.generate().unwrap();
    let second = wf.regenerate().unwrap();
    let third = wf.regenerate().unwrap();
    assert_ne!(first, second);
    assert_eq!(first, third);
    assert_eq!(wf.generated_text(), Some(third));
}

#[test]
fn generate_locked_before_training() {
    let mut wf = ready_for_analysis();
    assert!(wf.generate().is_err());
    assert_eq!(wf.regenerate(), Err(MimicryError::NothingGenerated));
}

#[test]
fn changing_samples_invalidates_analysis() {
    let mut wf = ready_for_analysis();
    wf.start_analysis().unwrap();
    run_to_completion(&mut wf, 50);
    assert!(wf.analysis().is_complete());

    wf.add_sample(WritingSample::from_text("Another paragraph."))
        .unwrap();
    assert!(!wf.analysis().is_complete());
    assert_eq!(wf.current_stage(), MimicryStage::Analyze);
}

#[test]
fn remove_sample_by_id() {
    let mut wf = ready_for_analysis();
    let id = wf.samples()[0].id.clone();
    assert!(wf.remove_sample(&id));
    assert!(!wf.remove_sample(&id));
    assert_eq!(wf.current_stage(), MimicryStage::Samples);
}

#[test]
fn toggle_feature_twice_deselects() {
    let mut wf = MimicryWorkflow::new();
    assert!(wf.toggle_feature(StyleFeature::Vocabulary));
    assert!(!wf.toggle_feature(StyleFeature::Vocabulary));
    assert!(wf.features().is_empty());
}

#[test]
fn save_disabled_for_blank_name_regardless_of_analysis() {
    let mut wf = ready_for_analysis();
    wf.profile_name = "   ".to_string();
    assert!(!wf.can_save_profile());

    wf.start_analysis().unwrap();
    run_to_completion(&mut wf, 100);
    assert!(wf.analysis().is_complete());
    assert!(!wf.can_save_profile());
    assert_eq!(wf.profile_draft(), Err(MimicryError::MissingProfileName));
}

#[test]
fn save_requires_completed_analysis() {
    let mut wf = ready_for_analysis();
    wf.profile_name = "Brand Voice".to_string();
    assert!(!wf.can_save_profile());
    assert_eq!(wf.profile_draft(), Err(MimicryError::AnalysisIncomplete));

    wf.start_analysis().unwrap();
    run_to_completion(&mut wf, 20);
    assert!(wf.can_save_profile());

    let draft = wf.profile_draft().unwrap();
    assert_eq!(draft.name, "Brand Voice");
    assert_eq!(draft.samples.len(), 1);
    assert_eq!(draft.features, vec!["tone"]);
}

#[test]
fn style_feature_parses_loose_spellings() {
    assert_eq!(
        "sentence-structure".parse::<StyleFeature>().unwrap(),
        StyleFeature::SentenceStructure
    );
    assert_eq!(
        "Rhetorical Devices".parse::<StyleFeature>().unwrap(),
        StyleFeature::RhetoricalDevices
    );
    assert!("rhythm".parse::<StyleFeature>().is_err());
}
