//! Round-trip against a real backend. Requires `CATALOG_API_BASE_URL` to
//! point at a running instance, so these are ignored by default.

use catalog_admin::client::RestClient;
use catalog_admin::config::{AdminConfig, BASE_URL_ENV};
use catalog_admin::editor::{Editor, PartsScreen, RemoveOutcome};
use catalog_admin::models::Category;
use serial_test::serial;

#[tokio::test]
#[serial]
#[ignore]
async fn category_round_trip() {
    if std::env::var(BASE_URL_ENV).is_err() {
        println!("Skipping category_round_trip: {BASE_URL_ENV} not set.");
        return;
    }
    let config = AdminConfig::from_env().expect("config from env");
    let client = RestClient::new(&config);

    let mut editor: Editor<Category> = Editor::new(Box::new(client.clone()));
    editor.load(None).await;
    assert!(
        editor.last_error().is_none(),
        "initial load failed: {:?}",
        editor.last_error()
    );

    let marker = format!("it-cat-{}", std::process::id());
    editor.create_draft_mut().name = marker.clone();
    editor.create().await;
    assert!(
        editor.last_error().is_none(),
        "create failed: {:?}",
        editor.last_error()
    );
    let created = editor
        .items()
        .iter()
        .find(|c| c.name == marker)
        .expect("created category should be listed")
        .clone();

    assert_eq!(
        editor.remove(&created.id),
        RemoveOutcome::ConfirmationRequired
    );
    editor.confirm_remove().await;
    assert!(
        editor.last_error().is_none(),
        "delete failed: {:?}",
        editor.last_error()
    );
    assert!(editor.items().iter().all(|c| c.id != created.id));
}

#[tokio::test]
#[serial]
#[ignore]
async fn parts_screen_loads_all_collections() {
    if std::env::var(BASE_URL_ENV).is_err() {
        println!("Skipping parts_screen_loads_all_collections: {BASE_URL_ENV} not set.");
        return;
    }
    let config = AdminConfig::from_env().expect("config from env");
    let client = RestClient::new(&config);

    let mut screen = PartsScreen::connect(&client);
    screen.load_all().await;
    assert!(
        screen.load_error().is_none(),
        "side collection load failed: {:?}",
        screen.load_error()
    );
    assert!(screen.editor().last_error().is_none());
}
