use std::fs;
use std::sync::Arc;

use menubar_store::{FileSource, LOAD_FAILURE_MESSAGE, MenuDataStore};
use menubar_tui::{LoadStatus, ViewState};
use menubar_types::{MenuCollection, MenuDocument, MenuKey, MenuLocations, Msg};

const MENU1: &str = r#"{
    "title": "A",
    "categories": { "private": [{ "name": "X" }], "corporate": [{ "name": "Y" }] },
    "footerLinks": ["L1"]
}"#;
const MENU2: &str = r#"{
    "title": "B",
    "categories": { "corporate": [{ "name": "Z" }], "kunskapsbank": [{ "name": "K" }] },
    "footerLinks": ["L2", "L3"]
}"#;
const MENU3: &str = r#"{ "title": "C", "categories": { "kunskapsbank": [{ "name": "Guide" }] } }"#;

fn document(json: &str) -> MenuDocument {
    serde_json::from_str(json).expect("fixture document")
}

fn collection() -> MenuCollection {
    MenuCollection::new(document(MENU1), document(MENU2), document(MENU3))
}

fn loaded() -> ViewState {
    let mut state = ViewState::new();
    state.update(&Msg::MenusLoaded(Box::new(collection())));
    state
}

fn names(state: &ViewState) -> Vec<&str> {
    state.visible_items().iter().map(|node| node.name.as_str()).collect()
}

fn assert_theme_follows_category(state: &ViewState) {
    assert_eq!(state.is_alternate_theme(), state.selected_category() == Some("corporate"));
}

#[test]
fn load_selects_first_menu_and_its_first_category() {
    let state = loaded();
    assert!(matches!(state.load_status(), LoadStatus::Ready(_)));
    assert_eq!(state.selected_menu(), MenuKey::Menu1);
    assert_eq!(state.selected_category(), Some("private"));
    assert_eq!(names(&state), vec!["X"]);
    assert!(!state.is_alternate_theme());
    assert_eq!(state.footer_links(), ["L1".to_string()]);
}

#[test]
fn selecting_any_tab_resets_to_its_first_category() {
    let mut state = loaded();
    for key in MenuKey::ALL {
        state.select_category("kunskapsbank");
        state.select_menu(key);
        assert_eq!(state.selected_menu(), key);
        let first = collection().get(key).first_category().map(str::to_string);
        assert_eq!(state.selected_category().map(str::to_string), first);
        assert_theme_follows_category(&state);
    }
}

#[test]
fn theme_flag_tracks_category_across_every_transition() {
    let mut state = ViewState::new();
    assert_theme_follows_category(&state);

    let script = [
        Msg::MenusLoaded(Box::new(collection())),
        Msg::SelectCategory("corporate".into()),
        Msg::SelectMenu(MenuKey::Menu2),
        Msg::SelectCategory("kunskapsbank".into()),
        Msg::SelectCategory("private".into()),
        Msg::SelectMenu(MenuKey::Menu3),
        Msg::SelectCategory("corporate".into()),
        Msg::SelectMenu(MenuKey::Menu1),
        Msg::SelectCategory("corporate".into()),
    ];
    for msg in &script {
        state.update(msg);
        assert_theme_follows_category(&state);
    }
    assert!(state.is_alternate_theme());
}

#[test]
fn corporate_category_switches_items_and_theme() {
    let mut state = loaded();
    state.update(&Msg::SelectCategory("corporate".into()));
    assert_eq!(names(&state), vec!["Y"]);
    assert!(state.is_alternate_theme());

    state.update(&Msg::SelectMenu(MenuKey::Menu2));
    assert_eq!(state.selected_category(), Some("corporate"));
    assert_eq!(names(&state), vec!["Z"]);
    assert!(state.is_alternate_theme());
}

#[tokio::test]
async fn missing_document_leaves_only_the_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locations = MenuLocations::default();
    fs::write(dir.path().join(&locations.menu1), MENU1).expect("write menu1");
    fs::write(dir.path().join(&locations.menu2), MENU2).expect("write menu2");

    let store = MenuDataStore::new(Arc::new(FileSource::new(dir.path(), locations)));
    let mut state = ViewState::new();
    let msg = match store.load().await {
        Ok(collection) => Msg::MenusLoaded(Box::new(collection)),
        Err(error) => Msg::MenusFailed(error.user_message().to_string()),
    };
    state.update(&msg);

    assert_eq!(state.error(), Some(LOAD_FAILURE_MESSAGE));
    assert!(state.collection().is_none());
    assert!(state.current_menu().is_none());
    assert!(state.category_keys().is_empty());
    assert!(state.visible_items().is_empty());
    assert!(state.footer_links().is_empty());

    assert!(!state.update(&Msg::MenusLoaded(Box::new(collection()))));
    assert!(!state.update(&Msg::SelectMenu(MenuKey::Menu2)));
    assert_eq!(state.error(), Some(LOAD_FAILURE_MESSAGE));
}
