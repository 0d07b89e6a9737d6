use super::*;
use crate::workspace::WorkspaceCommand;

fn section<'a>(page: &'a str, id: &str) -> &'a str {
    let open = format!("<section id=\"{id}\"");
    let start = page.find(&open).unwrap();
    let end = start + page[start..].find("</section>").unwrap();
    &page[start..end]
}

/// The opening tag that contains `needle`.
fn tag_with<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html.find(needle).unwrap_or_else(|| panic!("{needle} not found"));
    let start = html[..=at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

fn has_flag(tag: &str, flag: &str) -> bool {
    tag.split([' ', '>', '/'])
        .any(|part| part == flag || part.starts_with(&format!("{flag}=")))
}

// =============================================================================
// tabs
// =============================================================================

#[test]
fn tab_from_query_defaults_to_sheet() {
    assert_eq!(Tab::from_query("doc"), Tab::Doc);
    assert_eq!(Tab::from_query("slides"), Tab::Slides);
    assert_eq!(Tab::from_query("sheet"), Tab::Sheet);
    assert_eq!(Tab::from_query("bogus"), Tab::Sheet);
}

#[test]
fn tab_href_round_trips_through_query() {
    for tab in Tab::ALL {
        let href = tab.href();
        let raw = href.strip_prefix("/?tab=").unwrap();
        assert_eq!(Tab::from_query(raw), tab);
    }
}

// =============================================================================
// page
// =============================================================================

#[test]
fn page_draws_all_three_sections_with_one_visible() {
    let page = render_page(&Workspace::default(), Tab::Doc);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("NeoCel - AI Office Suite</title>"));
    assert!(has_flag(tag_with(&page, "<section id=\"sheet\""), "hidden"));
    assert!(!has_flag(tag_with(&page, "<section id=\"doc\""), "hidden"));
    assert!(has_flag(tag_with(&page, "<section id=\"slides\""), "hidden"));
}

#[test]
fn active_tab_is_marked() {
    let page = render_page(&Workspace::default(), Tab::Doc);
    assert!(tag_with(&page, "href=\"/?tab=doc\"").contains("tab--active"));
    assert!(!tag_with(&page, "href=\"/?tab=sheet\"").contains("tab--active"));
    assert!(!tag_with(&page, "href=\"/?tab=slides\"").contains("tab--active"));
}

#[test]
fn sheet_section_lists_columns_and_tools() {
    let page = render_page(&Workspace::default(), Tab::Sheet);
    let sheet = section(&page, "sheet");
    for (c, name) in ["A", "B", "C"].iter().enumerate() {
        let tag = tag_with(sheet, &format!("name=\"col_{c}\""));
        assert!(tag.contains(&format!("value=\"{name}\"")), "{tag}");
    }
    assert!(sheet.contains("No rows yet"));
    assert!(sheet.contains("AI_PREDICT</option>"));
    assert!(sheet.contains("href=\"/export/neocel_data.csv\""));
    assert!(!sheet.contains("class=\"info\""));
}

#[test]
fn sheet_section_shows_insights_and_cells() {
    let ws = Workspace::default()
        .apply(WorkspaceCommand::AddRow)
        .unwrap()
        .apply(WorkspaceCommand::SetCell { row: 0, col: 1, value: "42".into() })
        .unwrap()
        .apply(WorkspaceCommand::SetInsights { text: "AI Insights:\n- up".into() })
        .unwrap();
    let page = render_page(&ws, Tab::Sheet);
    let sheet = section(&page, "sheet");
    assert!(tag_with(sheet, "name=\"cell_0_1\"").contains("value=\"42\""));
    assert!(tag_with(sheet, "name=\"rows\"").contains("value=\"1\""));
    assert!(sheet.contains("AI Insights:\n- up</div>"));
    assert!(!sheet.contains("No rows yet"));
}

#[test]
fn grid_buttons_share_the_grid_form() {
    let ws = Workspace::default().apply(WorkspaceCommand::AddRow).unwrap();
    let page = render_page(&ws, Tab::Sheet);
    let sheet = section(&page, "sheet");
    let form_start = sheet.find("<form").unwrap();
    let form_end = sheet.find("</form>").unwrap();
    let form = &sheet[form_start..form_end];

    assert_eq!(sheet.matches("<form").count(), 1);
    assert!(tag_with(form, "<form").contains("action=\"/sheet\""));
    for action in ["/sheet/row\"", "/sheet/row/delete", "/sheet/column\"", "/sheet/column/delete", "/sheet/insights"] {
        assert!(form.contains(&format!("formaction=\"{action}")), "{action}");
    }
    // The plain save button comes first so Enter saves the grid.
    let first_button = tag_with(form, "<button");
    assert!(!first_button.contains("formaction"), "{first_button}");
}

#[test]
fn user_text_is_escaped() {
    let ws = Workspace::default()
        .apply(WorkspaceCommand::RenameColumn { col: 0, name: "\"><script>".into() })
        .unwrap()
        .apply(WorkspaceCommand::ReplaceDocument { text: "</textarea><b>".into() })
        .unwrap();
    let page = render_page(&ws, Tab::Sheet);
    assert!(!page.contains("\"><script"));
    assert!(!page.contains("</textarea><b>"));
    assert!(page.contains("&lt;/textarea&gt;"));
}

#[test]
fn doc_section_has_editor_preview_and_export() {
    let page = render_page(&Workspace::default(), Tab::Doc);
    let doc = section(&page, "doc");
    assert!(doc.contains("# New Document\n</textarea>"));
    assert!(doc.contains("<h1>New Document</h1>"));
    assert!(doc.contains("href=\"/export/neocel_document.md\""));
    assert!(doc.contains("formaction=\"/doc/generate\""));
    assert!(doc.contains("Add Table"));
    assert!(doc.contains("Insert Image"));
}

#[test]
fn doc_preview_drops_raw_html() {
    let ws = Workspace::default()
        .apply(WorkspaceCommand::ReplaceDocument { text: "hi <img src=x onerror=alert(1)>".into() })
        .unwrap();
    let page = render_page(&ws, Tab::Doc);
    assert!(!page.contains("<img"));
}

#[test]
fn slides_section_shows_position_and_current_slide() {
    let ws = Workspace::default().apply(WorkspaceCommand::AddSlide).unwrap();
    let page = render_page(&ws, Tab::Slides);
    let slides = section(&page, "slides");
    assert!(slides.contains("Slide 2/2"));
    assert!(tag_with(slides, "name=\"title\"").contains("value=\"New Slide\""));

    let outline_start = slides.find("<ol").unwrap();
    let outline = &slides[outline_start..slides.find("</ol>").unwrap()];
    let current = &outline[..outline.find("value=\"2\"").unwrap()];
    let current_item = &current[current.rfind("<li").unwrap()..];
    assert!(tag_with(current_item, "<li").contains("current"));
    assert!(!tag_with(outline, "<li").contains("current"));

    assert!(!has_flag(tag_with(slides, "formaction=\"/slides/delete\""), "disabled"));
}

#[test]
fn single_slide_disables_delete() {
    let page = render_page(&Workspace::default(), Tab::Slides);
    let delete = tag_with(section(&page, "slides"), "formaction=\"/slides/delete\"");
    assert!(has_flag(delete, "disabled"), "{delete}");
}

#[test]
fn slide_buttons_share_the_editor_form() {
    let page = render_page(&Workspace::default(), Tab::Slides);
    let slides = section(&page, "slides");
    let form = &slides[slides.find("<form").unwrap()..slides.find("</form>").unwrap()];
    assert!(tag_with(form, "<form").contains("action=\"/slides/current\""));
    for action in ["prev", "next", "select", "new", "generate", "delete", "export"] {
        assert!(form.contains(&format!("formaction=\"/slides/{action}\"")), "{action}");
    }
    assert!(form.contains("name=\"title\""));
    assert!(form.contains("name=\"content\""));
}

#[test]
fn export_notice_is_rendered() {
    let ws = Workspace::default().apply(WorkspaceCommand::ExportDeck).unwrap();
    let page = render_page(&ws, Tab::Slides);
    assert!(section(&page, "slides").contains("Export functionality would be implemented here"));
}
