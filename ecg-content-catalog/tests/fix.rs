use std::cell::RefCell;
use std::fs;
use std::path::Path;

use ecg_content_catalog::fix::{CategoryChange, FixProgress, execute_fixes, plan_fixes};
use ecg_content_catalog::{RuleSet, YamlError, load_record};
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn seed_videos(dir: &Path) {
    write_yaml(
        dir,
        "first-degree-av-block.yaml",
        "title: First Degree AV Block\ndescription: Prolonged PR interval\ncategory: Conduction Disorders\n",
    );
    write_yaml(
        dir,
        "vt-after-infarct.yaml",
        "title: VT After Infarct\ndescription: Scar-mediated VT following myocardial infarction\ncategory: Arrhythmias\n",
    );
    write_yaml(
        dir,
        "anterior-stemi.yaml",
        "title: Anterior STEMI\ndescription: ST elevation in V1-V4\ncategory: STEMI & MI\n",
    );
    write_yaml(
        dir,
        "hyperkalemia-explained-causes-ecg-symptoms-treatment-icu-essentials.yaml",
        "title: Hyperkalemia Explained\ndescription: Peaked T waves\ncategory: Electrolytes\n",
    );
    write_yaml(
        dir,
        "sinus-rhythm.yaml",
        "title: Sinus Rhythm\ndescription: The normal rhythm\ncategory: Arrhythmias\n",
    );
}

fn no_progress(_: FixProgress) {}

fn ignore_written(_: &CategoryChange) {}

#[test]
fn plan_reports_changes_without_writing() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());

    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &no_progress).unwrap();
    assert_eq!(plan.processed, 5);
    assert!(plan.skipped.is_empty());

    let changes: Vec<_> = plan
        .changes
        .iter()
        .map(|c| (c.file_name(), c.from.as_str(), c.to.as_str()))
        .collect();
    assert_eq!(
        changes,
        vec![
            (
                "first-degree-av-block.yaml".to_string(),
                "Conduction Disorders",
                "Conduction Blocks"
            ),
            (
                "hyperkalemia-explained-causes-ecg-symptoms-treatment-icu-essentials.yaml"
                    .to_string(),
                "Electrolytes",
                "ECG Interpretation"
            ),
            (
                "vt-after-infarct.yaml".to_string(),
                "Arrhythmias",
                "STEMI & MI"
            ),
        ]
    );

    // Nothing on disk changed yet.
    let untouched = load_record(&tmp.path().join("first-degree-av-block.yaml")).unwrap();
    assert_eq!(untouched.category(), "Conduction Disorders");
}

#[test]
fn tally_counts_final_categories() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());

    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &no_progress).unwrap();
    assert_eq!(
        plan.tally.sorted(),
        vec![
            ("STEMI & MI", 2),
            ("Arrhythmias", 1),
            ("Conduction Blocks", 1),
            ("ECG Interpretation", 1),
        ]
    );
}

#[test]
fn execute_writes_changes_and_rerun_is_noop() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());
    let rules = RuleSet::builtin();

    let plan = plan_fixes(tmp.path(), &rules, &no_progress).unwrap();
    let written = RefCell::new(Vec::new());
    let summary = execute_fixes(&plan, &|c: &CategoryChange| {
        written.borrow_mut().push(c.file_name())
    })
    .unwrap();
    assert_eq!(summary.written, 3);
    assert_eq!(
        written.into_inner(),
        vec![
            "first-degree-av-block.yaml",
            "hyperkalemia-explained-causes-ecg-symptoms-treatment-icu-essentials.yaml",
            "vt-after-infarct.yaml",
        ]
    );

    let fixed = load_record(&tmp.path().join("vt-after-infarct.yaml")).unwrap();
    assert_eq!(fixed.category(), "STEMI & MI");
    assert_eq!(fixed.title(), "VT After Infarct");

    let second = plan_fixes(tmp.path(), &rules, &no_progress).unwrap();
    assert!(second.changes.is_empty());
    assert_eq!(second.tally, plan.tally);
}

#[test]
fn malformed_record_is_skipped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());
    write_yaml(
        tmp.path(),
        "broken.yaml",
        "title: \"The \"Widow Maker\" Lesion\"\ncategory: Conduction Disorders\n",
    );

    let skipped_names = RefCell::new(Vec::new());
    let progress = |p: FixProgress| {
        if let FixProgress::Skipped { file_name, .. } = p {
            skipped_names.borrow_mut().push(file_name);
        }
    };

    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &progress).unwrap();
    assert_eq!(plan.processed, 5);
    assert_eq!(plan.skipped.len(), 1);
    assert!(plan.skipped[0].0.ends_with("broken.yaml"));
    assert_eq!(skipped_names.into_inner(), vec!["broken.yaml".to_string()]);
    assert_eq!(plan.changes.len(), 3);

    // The malformed file is never rewritten.
    execute_fixes(&plan, &ignore_written).unwrap();
    let raw = fs::read_to_string(tmp.path().join("broken.yaml")).unwrap();
    assert!(raw.contains("Conduction Disorders"));
}

#[test]
fn missing_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let err = plan_fixes(&tmp.path().join("videos"), &RuleSet::builtin(), &no_progress).unwrap_err();
    assert!(matches!(err, YamlError::DirNotFound(_)));
}

#[test]
fn record_without_category_is_not_counted() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "draft.yaml", "title: Draft\ndescription: tbd\n");

    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &no_progress).unwrap();
    assert_eq!(plan.processed, 1);
    assert!(plan.changes.is_empty());
    assert!(plan.tally.is_empty());
}

#[test]
fn progress_reports_scan_and_done() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());

    let events = RefCell::new(Vec::new());
    let progress = |p: FixProgress| {
        let tag = match p {
            FixProgress::Scanning { file_count } => format!("scan:{file_count}"),
            FixProgress::Classifying { file_index, total, .. } => {
                format!("file:{}/{}", file_index + 1, total)
            }
            FixProgress::Skipped { .. } => "skip".to_string(),
            FixProgress::Done => "done".to_string(),
        };
        events.borrow_mut().push(tag);
    };

    plan_fixes(tmp.path(), &RuleSet::builtin(), &progress).unwrap();
    let events = events.into_inner();
    assert_eq!(events.first().map(String::as_str), Some("scan:5"));
    assert_eq!(events.last().map(String::as_str), Some("done"));
    assert_eq!(events.len(), 7);
}

#[test]
fn empty_and_comment_only_records_are_skipped() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());
    write_yaml(tmp.path(), "empty.yaml", "");
    write_yaml(tmp.path(), "comment.yaml", "# just a comment\n");
    write_yaml(tmp.path(), "null.yaml", "~\n");

    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &no_progress).unwrap();
    assert_eq!(plan.processed, 5);

    let mut skipped: Vec<_> = plan
        .skipped
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    skipped.sort();
    assert_eq!(skipped, vec!["comment.yaml", "empty.yaml", "null.yaml"]);
}

#[test]
fn failed_write_is_not_reported_as_written() {
    let tmp = TempDir::new().unwrap();
    seed_videos(tmp.path());
    let plan = plan_fixes(tmp.path(), &RuleSet::builtin(), &no_progress).unwrap();

    // Occupy the temp-file path of the second change so its save fails.
    fs::create_dir(
        tmp.path()
            .join("hyperkalemia-explained-causes-ecg-symptoms-treatment-icu-essentials.yaml.tmp"),
    )
    .unwrap();

    let written = RefCell::new(Vec::new());
    let result = execute_fixes(&plan, &|c: &CategoryChange| {
        written.borrow_mut().push(c.file_name())
    });
    assert!(result.is_err());
    assert_eq!(written.into_inner(), vec!["first-degree-av-block.yaml"]);

    let untouched = load_record(&tmp.path().join("vt-after-infarct.yaml")).unwrap();
    assert_eq!(untouched.category(), "Arrhythmias");
}
