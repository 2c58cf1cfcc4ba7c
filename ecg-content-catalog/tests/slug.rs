use ecg_content_catalog::{MAX_SLUG_LEN, slugify};

const TITLES: &[&str] = &[
    "De Winter T-Waves Explained: The Hidden STEMI Equivalent!",
    "Hyperkalemia Explained | Causes, ECG, Symptoms & Treatment (ICU Essentials)",
    "   leading and trailing   ",
    "---",
    "",
    "Ventricular Fibrillation (V-Fib) – Terminal Cardiac Rhythm",
    "Ärztliche Übersicht: Vorhofflimmern",
    "QRS > 120ms?? Think BBB!!!",
    "tab\tand\nnewline",
];

#[test]
fn worked_example() {
    assert_eq!(
        slugify("De Winter T-Waves Explained: The Hidden STEMI Equivalent!"),
        "de-winter-t-waves-explained-the-hidden-stemi-equivalent"
    );
}

#[test]
fn deterministic() {
    for title in TITLES {
        assert_eq!(slugify(title), slugify(title));
    }
}

#[test]
fn character_set_and_edges() {
    let long = "Long title with many words ".repeat(10);
    let hyphen_at_cut = format!("{}-x", "y".repeat(MAX_SLUG_LEN - 1));
    let extra = [long.as_str(), hyphen_at_cut.as_str()];

    for title in TITLES.iter().copied().chain(extra) {
        let slug = slugify(title);
        assert!(slug.chars().count() <= MAX_SLUG_LEN, "{title:?} -> {slug:?}");
        assert!(
            slug.chars()
                .all(|c| c == '-' || c == '_' || (c.is_alphanumeric() && !c.is_uppercase())),
            "{title:?} -> {slug:?}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{title:?} -> {slug:?}");
        assert!(!slug.contains("--"), "{title:?} -> {slug:?}");
    }
}

#[test]
fn slugify_is_a_fixed_point_on_its_output() {
    for title in TITLES {
        let once = slugify(title);
        assert_eq!(slugify(&once), once);
    }
}

#[test]
fn spaced_dashes_collapse() {
    assert_eq!(
        slugify("Ventricular Fibrillation (V-Fib) – Terminal Cardiac Rhythm"),
        "ventricular-fibrillation-v-fib-terminal-cardiac-rhythm"
    );
    assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
}
