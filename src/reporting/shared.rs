pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn format_distance(distance: Option<u64>) -> String {
    distance.map_or_else(|| "∞".to_string(), |d| d.to_string())
}

pub(crate) fn join_route(path: &[String]) -> String {
    path.join(" → ")
}
