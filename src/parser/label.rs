// file: src/parser/label.rs
// description: snake_case field names to human-readable column labels

/// Turns `school_name` into `School name`: underscores become single spaces
/// and the first character of the label is upper-cased. Every other
/// character is left as is.
///
/// Empty segments (leading, trailing or doubled underscores) stay empty, so
/// `_id` becomes `" id"`. An empty name yields an empty label.
pub fn format_label(name: &str) -> String {
    let mut segments = name.split('_');
    let first = segments.next().map(capitalize_segment).unwrap_or_default();

    std::iter::once(first)
        .chain(segments.map(str::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
