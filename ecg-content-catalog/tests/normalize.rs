use ecg_content_catalog::normalize::{Reason, normalize};
use ecg_content_catalog::{ContentRecord, RuleSet};

fn record(title: &str, description: &str, category: &str) -> ContentRecord {
    ContentRecord::new(title, description, category)
}

#[test]
fn legacy_rename_applies() {
    let c = normalize(
        "first-degree-av-block",
        &record("First Degree AV Block", "PR interval over 200 ms", "Conduction Disorders"),
        &RuleSet::builtin(),
    );
    assert_eq!(c.category, "Conduction Blocks");
    assert!(c.changed);
    assert!(matches!(c.reason, Some(Reason::LegacyRename { .. })));
}

#[test]
fn keyword_in_description_reclassifies() {
    let c = normalize(
        "vt-vs-svt",
        &record("VT or SVT?", "Differentiating wide complex rhythms after a STEMI", "Arrhythmias"),
        &RuleSet::builtin(),
    );
    assert_eq!(c.category, "STEMI & MI");
    assert!(c.changed);
    assert_eq!(
        c.reason,
        Some(Reason::Keyword {
            keyword: "stemi".to_string(),
            to: "STEMI & MI".to_string(),
        })
    );
}

#[test]
fn protected_category_is_left_alone() {
    let c = normalize(
        "inferior-stemi",
        &record("Inferior STEMI", "Classic stemi pattern in II, III, aVF", "STEMI & MI"),
        &RuleSet::builtin(),
    );
    assert_eq!(c.category, "STEMI & MI");
    assert!(!c.changed);
    assert!(c.reason.is_none());
}

#[test]
fn override_beats_legacy_rename() {
    let mut rules = RuleSet::builtin();
    rules.overrides.insert("x".to_string(), "Arrhythmias".to_string());

    let c = normalize(
        "x",
        &record("Narrow complex tachycardia", "Rate and regularity", "Conduction Disorders"),
        &rules,
    );
    assert_eq!(c.category, "Arrhythmias");
    assert!(c.changed);
    assert_eq!(
        c.reason,
        Some(Reason::Override {
            to: "Arrhythmias".to_string()
        })
    );
}

#[test]
fn keyword_scan_sees_overridden_category() {
    // An override into a protected category shields the record from the scan.
    let mut rules = RuleSet::builtin();
    rules
        .overrides
        .insert("ihd".to_string(), "Myocardial Infarction".to_string());
    let c = normalize("ihd", &record("Ischemic heart disease", "heart attack", "Basics"), &rules);
    assert_eq!(c.category, "Myocardial Infarction");

    // An override into an unprotected category can still be reclassified.
    rules.overrides.insert("ihd".to_string(), "Basics".to_string());
    let c = normalize("ihd", &record("Ischemic heart disease", "heart attack", "Other"), &rules);
    assert_eq!(c.category, "STEMI & MI");
    assert!(matches!(c.reason, Some(Reason::Keyword { .. })));
}

#[test]
fn keyword_match_is_case_insensitive() {
    let c = normalize(
        "posterior",
        &record("Posterior Wall Infarct", "", "ECG Interpretation"),
        &RuleSet::builtin(),
    );
    assert_eq!(c.category, "STEMI & MI");
}

#[test]
fn keyword_in_title_or_description_first_listed_wins() {
    // "stemi" is listed before "nstemi", and "nstemi" contains "stemi".
    let c = normalize("n", &record("NSTEMI", "", "Basics"), &RuleSet::builtin());
    assert_eq!(
        c.reason,
        Some(Reason::Keyword {
            keyword: "stemi".to_string(),
            to: "STEMI & MI".to_string(),
        })
    );
}

#[test]
fn normalize_is_idempotent() {
    let rules = RuleSet::builtin();
    let cases = [
        ("a", record("Heart block", "", "Conduction Disorders")),
        ("b", record("VF", "after a heart attack", "Arrhythmias")),
        ("ventricular-fibrillation-v-fib-terminal-cardiac-rhythm", record("VF", "", "Basics")),
        (
            "ventricular-fibrillation-v-fib-terminal-cardiac-rhythm",
            record("VF", "post heart attack", "Basics"),
        ),
        ("what-is-ihd-ischemic-heart-disease", record("IHD", "", "Conduction Disorders")),
        ("c", record("Sinus rhythm", "Normal", "")),
        ("d", record("STEMI", "", "Myocardial Infarction")),
    ];

    for (id, r) in cases {
        let first = normalize(id, &r, &rules);
        let mut updated = r.clone();
        updated.set_category(first.category.clone());
        let second = normalize(id, &updated, &rules);
        assert_eq!(second.category, first.category, "record {id}");
        assert!(!second.changed, "record {id} changed on second pass");
    }
}

#[test]
fn keyword_step_never_fires_on_protected_categories() {
    let rules = RuleSet::builtin();
    for protected in &rules.protected {
        for keyword in &rules.keywords {
            let text = format!("about {keyword} things");
            let c = normalize("p", &record(&text, &text, protected), &rules);
            assert!(
                !matches!(c.reason, Some(Reason::Keyword { .. })),
                "keyword {keyword:?} fired on {protected}"
            );
            assert_eq!(&c.category, protected);
        }
    }
}

#[test]
fn keyword_overrides_legacy_rename() {
    let c = normalize(
        "inferior-block",
        &record(
            "Heart Block in Inferior Infarction",
            "AV block complicating an inferior stemi",
            "Conduction Disorders",
        ),
        &RuleSet::builtin(),
    );
    assert_eq!(c.original, "Conduction Disorders");
    assert_eq!(c.category, "STEMI & MI");
    assert!(c.changed);
    assert!(matches!(c.reason, Some(Reason::Keyword { .. })));
}
