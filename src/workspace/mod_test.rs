use super::*;

#[test]
fn default_workspace_matches_fresh_session() {
    let ws = Workspace::default();
    assert_eq!(ws.table.columns(), ["A", "B", "C"]);
    assert_eq!(ws.document.text(), "# New Document\n");
    assert_eq!(ws.deck.len(), 1);
    assert!(ws.insights.is_none());
    assert!(ws.notice.is_none());
}

#[test]
fn apply_leaves_original_untouched() {
    let ws = Workspace::default();
    let next = ws.apply(WorkspaceCommand::AddRow).unwrap();
    assert_eq!(next.table.row_count(), 1);
    assert_eq!(ws.table.row_count(), 0);
}

#[test]
fn replace_table_stores_edited_table() {
    let ws = Workspace::default()
        .apply(WorkspaceCommand::ReplaceTable {
            columns: vec!["x".into(), "y".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        })
        .unwrap();
    assert_eq!(ws.table.columns(), ["x", "y"]);
    assert_eq!(ws.table.to_csv(), "x,y\n1,2\n");
}

#[test]
fn failed_command_reports_error() {
    let err = Workspace::default()
        .apply(WorkspaceCommand::SetCell { row: 0, col: 0, value: "v".into() })
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::RowOutOfRange { row: 0, rows: 0 }));
}

#[test]
fn create_slide_adds_one_and_selects_it() {
    let ws = Workspace::default();
    let next = ws
        .apply(WorkspaceCommand::CreateSlide { title: "Roadmap".into(), content: "## Roadmap".into() })
        .unwrap();
    assert_eq!(next.deck.len(), ws.deck.len() + 1);
    assert_eq!(next.deck.current().title, "Roadmap");
    assert_eq!(next.deck.position(), next.deck.len());
}

#[test]
fn add_slide_uses_placeholder_title() {
    let ws = Workspace::default().apply(WorkspaceCommand::AddSlide).unwrap();
    assert_eq!(ws.deck.current().title, "New Slide");
    assert_eq!(ws.deck.current().content, "");
}

#[test]
fn export_deck_sets_notice_until_next_action() {
    let ws = Workspace::default().apply(WorkspaceCommand::ExportDeck).unwrap();
    assert_eq!(ws.notice.as_deref(), Some(EXPORT_DECK_NOTICE));

    let ws = ws.apply(WorkspaceCommand::NextSlide).unwrap();
    assert!(ws.notice.is_none());
}

#[test]
fn insights_persist_across_other_edits() {
    let ws = Workspace::default()
        .apply(WorkspaceCommand::SetInsights { text: "AI Insights".into() })
        .unwrap()
        .apply(WorkspaceCommand::ReplaceDocument { text: "body".into() })
        .unwrap();
    assert_eq!(ws.insights.as_deref(), Some("AI Insights"));
    assert_eq!(ws.document.text(), "body");
}

#[test]
fn workspace_serializes_deck_by_id() {
    let ws = Workspace::default().apply(WorkspaceCommand::AddSlide).unwrap();
    let json = serde_json::to_value(&ws).unwrap();
    assert_eq!(json["deck"]["current"], 2);
    assert_eq!(json["deck"]["slides"]["1"]["title"], "First Slide");
    assert_eq!(json["document"]["text"], "# New Document\n");
}
