//! Output formatting utilities

use crate::domain::tags::ReviewItem;

/// Format review items for display, one line per item
pub fn format_review_items(items: &[&ReviewItem]) -> String {
    if items.is_empty() {
        return "No review items found".to_string();
    }

    let mut output = String::new();
    for item in items {
        let location = format!("{}:{}", item.source_file.display(), item.line_number);
        if item.title_path.is_empty() {
            output.push_str(&format!(
                "{}  {}  ({})\n",
                item.date.format("%d-%m-%Y"),
                item.tag,
                location
            ));
        } else {
            output.push_str(&format!(
                "{}  {}  {}  ({})\n",
                item.date.format("%d-%m-%Y"),
                item.tag,
                item.title_path.join(" > "),
                location
            ));
        }
    }
    output
}
