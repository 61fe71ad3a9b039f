use std::path::Path;

/// Build a display title from a file name: drop the extension and collapse
/// every run of `-` / `_` into a single space.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let mut title = String::with_capacity(stem.len());
    let mut in_separator_run = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator_run {
                title.push(' ');
            }
            in_separator_run = true;
        } else {
            title.push(c);
            in_separator_run = false;
        }
    }
    title
}

/// Join the public prefix and a file name into the path the page requests.
pub(super) fn public_src(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("/{file_name}")
    } else {
        format!("/{prefix}/{file_name}")
    }
}
