use unitplan_model::UnitDraft;

/// Stem used when nothing usable is left after sanitizing.
pub const FALLBACK_STEM: &str = "unit";

const CATEGORY_PLACEHOLDER: &str = "Unit";

/// `<category>-<book>-<chapter>.json`, with every run of characters outside
/// `[A-Za-z0-9-]` collapsed to one `_`.
pub fn suggested_filename(draft: &UnitDraft) -> String {
    let path = &draft.path;
    let title = format!(
        "{}-{}-{}",
        path.category
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(CATEGORY_PLACEHOLDER),
        path.book.as_deref().unwrap_or_default(),
        path.chapter.as_deref().unwrap_or_default(),
    );
    let stem = sanitize(&title);
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.json")
    } else {
        format!("{stem}.json")
    }
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
