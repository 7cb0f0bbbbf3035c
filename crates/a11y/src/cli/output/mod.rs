//! Rendering and JSON serialization for CLI output.
//!
//! Every renderer returns markdown text; commands decide where it goes.

use std::process::ExitCode;

use a11y_document::{DocumentNode, SectionKey};
use a11y_index::{Catalog, SearchMatch, count_documents, format_tree, section_keys_present};
use serde::Serialize;

/// Hint appended to not-found messages.
const LIST_HINT: &str = "Use `a11y list` to see available templates.";

/// Upstream project the documentation comes from.
const DATA_SOURCE: &str = "https://github.com/tmobile/magentaA11y";

/// Sections shown by `notes`, in display order.
const NOTE_SECTIONS: [SectionKey; 3] = [
    SectionKey::DeveloperNotes,
    SectionKey::AndroidDeveloperNotes,
    SectionKey::IosDeveloperNotes,
];

/// Sections listed as alternatives when the requested criteria format is missing.
const CRITERIA_SECTIONS: [SectionKey; 3] = [
    SectionKey::Condensed,
    SectionKey::Gherkin,
    SectionKey::GeneralNotes,
];

/// JSON output for `search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Total matches returned.
    total_matches: usize,
    /// Matches in traversal order.
    results: &'a [SearchMatch],
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search matches as JSON.
pub fn print_search_json(query: &str, matches: &[SearchMatch]) -> ExitCode {
    print_json(&JsonSearchOutput {
        query,
        total_matches: matches.len(),
        results: matches,
    })
}

/// Message for a template that does not exist in a category.
pub fn template_not_found(name: &str, category: &str) -> String {
    format!("Template '{name}' not found in category '{category}'.\n\n{LIST_HINT}\n")
}

/// Every category with its count and full outline.
pub fn render_list(catalog: &Catalog) -> String {
    let mut out = String::from("# MagentaA11y Accessibility Issue Templates\n\n");
    for category in catalog.iter() {
        out.push_str(&format!(
            "## {}\n\nTotal templates: {}\n\n{}\n",
            category.key.to_uppercase(),
            count_documents(category.nodes),
            format_tree(category.nodes, 3)
        ));
    }
    out
}

/// A template with every section it has, in priority order.
pub fn render_document(doc: &DocumentNode, category: &str) -> String {
    let mut out = format!(
        "# {}\n\n**Category:** {category}\n**Name:** {}\n\n",
        doc.label, doc.name
    );
    for (key, text) in doc.sections.iter() {
        out.push_str(&format!("## {}\n\n{text}\n\n", key.title()));
    }
    out
}

/// Search results, or a no-match line.
pub fn render_search(query: &str, matches: &[SearchMatch]) -> String {
    if matches.is_empty() {
        return format!("No templates found matching '{query}'.\n");
    }

    let mut out = format!(
        "# Search Results for '{query}'\n\nFound {} template(s):\n\n",
        matches.len()
    );
    for m in matches {
        out.push_str(&format!(
            "• **{}** ({}/{})\n  Path: {}\n\n",
            m.label, m.category, m.name, m.path
        ));
    }
    out
}

/// One category's count and outline, or the list of known categories.
pub fn render_category(catalog: &Catalog, key: &str) -> String {
    let Some(nodes) = catalog.get(key) else {
        let available: Vec<&str> = catalog.keys().collect();
        return format!(
            "Category '{key}' not found. Available categories: {}\n",
            available.join(", ")
        );
    };

    format!(
        "# {} Accessibility Templates\n\n**Total templates:** {}\n\n## Structure\n\n{}",
        key.to_uppercase(),
        count_documents(nodes),
        format_tree(nodes, 1)
    )
}

/// Developer notes for every platform the template covers.
pub fn render_notes(doc: &DocumentNode) -> String {
    let mut out = format!("# {} - Developer Notes\n\n", doc.label);
    let mut found = false;
    for key in NOTE_SECTIONS {
        if let Some(text) = doc.section(key) {
            out.push_str(&format!("## {}\n\n{text}\n\n", key.title()));
            found = true;
        }
    }
    if !found {
        out.push_str("No developer notes available for this template.\n");
    }
    out
}

/// Maps a criteria format name to its section. Unknown names mean condensed.
pub fn criteria_section(format: &str) -> SectionKey {
    match format {
        "gherkin" => SectionKey::Gherkin,
        "general" => SectionKey::GeneralNotes,
        _ => SectionKey::Condensed,
    }
}

/// Test criteria in the requested format, or the formats that are available.
///
/// The section text is emitted as stored, without a trailing newline.
pub fn render_criteria(doc: &DocumentNode, format: &str) -> String {
    let mut out = format!("# {} - Test Criteria\n\n", doc.label);
    if let Some(text) = doc.section(criteria_section(format)) {
        out.push_str(text);
        return out;
    }

    out.push_str(&format!(
        "No {format} criteria available for this template.\n\nAvailable formats:\n"
    ));
    let present = section_keys_present(doc);
    for key in CRITERIA_SECTIONS.iter().filter(|key| present.contains(key)) {
        out.push_str(&format!("• {key}\n"));
    }
    out
}

/// Category names with their counts.
pub fn render_categories(catalog: &Catalog) -> String {
    let mut out = String::from("# MagentaA11y Categories\n\n");
    for category in catalog.iter() {
        out.push_str(&format!(
            "• **{}**: {} templates\n",
            category.key,
            count_documents(category.nodes)
        ));
    }
    out.push_str("\nUse `a11y category <category>` to see details about a specific category.\n");
    out
}

/// Version, source and totals.
pub fn render_info(catalog: &Catalog, source: &str) -> String {
    let total: usize = catalog.iter().map(|c| count_documents(c.nodes)).sum();
    let categories: Vec<&str> = catalog.keys().collect();
    format!(
        "**a11y** v{version}\n\n\
         Accessibility testing documentation from T-Mobile's MagentaA11y project.\n\n\
         **Data Source:** {DATA_SOURCE}\n\
         **Loaded From:** {source}\n\
         **Total Templates:** {total}\n\
         **Categories:** {categories}\n\n\
         {LIST_HINT}\n",
        version = env!("CARGO_PKG_VERSION"),
        categories = categories.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use a11y_document::{GroupNode, build_document};

    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "web",
            vec![
                build_document("button", "## Condensed\n- Name\n## Gherkin\nGiven a button")
                    .into(),
                GroupNode::new("forms", vec![build_document("checkbox", "plain").into()]).into(),
            ],
        );
        catalog.insert("native", vec![]);
        catalog
    }

    fn button() -> DocumentNode {
        build_document(
            "button",
            "## General Notes\nUse a button\n## Android Developer Notes\nandroid\n## Videos\nv",
        )
    }

    #[test]
    fn test_render_list() {
        let out = render_list(&catalog());

        assert!(out.starts_with("# MagentaA11y Accessibility Issue Templates\n\n## WEB\n\n"));
        assert!(out.contains("Total templates: 2\n\n    • Button (`button`)\n    **Forms**\n"));
        assert!(out.contains("## NATIVE\n\nTotal templates: 0\n\n\n"));
    }

    #[test]
    fn test_render_document_in_priority_order() {
        let out = render_document(&button(), "web");

        assert!(out.starts_with("# Button\n\n**Category:** web\n**Name:** button\n\n"));
        let general = out.find("## General Notes").unwrap();
        let videos = out.find("## Videos").unwrap();
        let android = out.find("## Android Developer Notes").unwrap();
        assert!(general < videos && videos < android);
        assert!(!out.contains("## Gherkin"));
    }

    #[test]
    fn test_template_not_found_names_category_and_hint() {
        let out = template_not_found("nonexistent", "web");

        assert!(out.contains("'nonexistent'"));
        assert!(out.contains("'web'"));
        assert!(out.trim_end().ends_with("Use `a11y list` to see available templates."));
    }

    #[test]
    fn test_render_search() {
        let matches = vec![SearchMatch {
            name: "checkbox".into(),
            label: "Checkbox".into(),
            category: "web".into(),
            path: "forms/checkbox".into(),
        }];

        assert_eq!(
            render_search("check", &matches),
            "# Search Results for 'check'\n\nFound 1 template(s):\n\n\
             • **Checkbox** (web/checkbox)\n  Path: forms/checkbox\n\n"
        );
        assert_eq!(
            render_search("zzz", &[]),
            "No templates found matching 'zzz'.\n"
        );
    }

    #[test]
    fn test_render_category() {
        let catalog = catalog();

        let out = render_category(&catalog, "web");
        assert!(out.starts_with("# WEB Accessibility Templates\n\n**Total templates:** 2\n"));
        assert!(out.ends_with("• Button (`button`)\n**Forms**\n  • Checkbox (`checkbox`)\n"));

        assert_eq!(
            render_category(&catalog, "desktop"),
            "Category 'desktop' not found. Available categories: web, native\n"
        );
    }

    #[test]
    fn test_render_notes() {
        let out = render_notes(&button());
        assert!(out.contains("## Android Developer Notes\n\nandroid\n\n"));
        assert!(!out.contains("No developer notes"));

        let bare = build_document("link", "## Videos\nonly videos");
        assert!(render_notes(&bare).ends_with("No developer notes available for this template.\n"));
    }

    #[test]
    fn test_render_criteria_formats() {
        let doc = build_document("button", "## Condensed\n- Name\n## Gherkin\nGiven a button");

        assert_eq!(
            render_criteria(&doc, "gherkin"),
            "# Button - Test Criteria\n\nGiven a button"
        );
        assert!(render_criteria(&doc, "condensed").ends_with("\n\n- Name"));
        assert!(render_criteria(&doc, "bogus").ends_with("\n\n- Name"));
    }

    #[test]
    fn test_render_criteria_lists_available_formats() {
        let doc = build_document("switch", "## Gherkin\nGiven a switch");

        let out = render_criteria(&doc, "general");

        assert!(out.contains("No general criteria available for this template.\n"));
        assert!(out.ends_with("Available formats:\n• gherkin\n"));
    }

    #[test]
    fn test_render_criteria_lists_formats_in_fixed_order() {
        let doc = build_document(
            "slider",
            "## General Notes\nnotes\n## Gherkin\nGiven a slider\n## Videos\nclip",
        );

        let out = render_criteria(&doc, "condensed");

        assert!(out.ends_with("Available formats:\n• gherkin\n• generalNotes\n"));
        assert!(!out.contains("videos"));
    }

    #[test]
    fn test_render_categories_and_info() {
        let catalog = catalog();

        let out = render_categories(&catalog);
        assert!(out.contains("• **web**: 2 templates\n• **native**: 0 templates\n"));

        let info = render_info(&catalog, "content file data/content.json");
        assert!(info.contains("**Total Templates:** 2\n"));
        assert!(info.contains("**Categories:** web, native\n"));
        assert!(info.contains("**Loaded From:** content file data/content.json\n"));
    }
}
