/// Converts a category display name into the id used in URLs.
///
/// `"AI & Technology Innovation"` becomes `"ai-technology-innovation"`.
/// Every place that produces or matches a category id goes through here.
pub fn slugify(label: &str) -> String {
    label.to_lowercase().replace(" & ", "-").replace(' ', "-")
}
