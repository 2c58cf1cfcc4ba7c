use ecg_content_catalog::slugify;

/// Print one slug per title, in argument order.
///
/// Slugs are data rather than log output, so they bypass the logger and are
/// printed even with `--quiet`.
pub(crate) fn run_slugify(titles: &[String]) {
    for title in titles {
        println!("{}", slugify(title));
    }
}
