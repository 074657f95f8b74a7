//! Command-line front for the catalog. A thin presentation layer: every
//! command drives the same [`Editor`] controller the way a screen would, and
//! controller state (validation messages, network errors) is what gets
//! reported back to the terminal.

mod commands;

pub use commands::{Cli, Command};

use anyhow::bail;
use commands::{CategoryAction, PartAction, PrecisionAction, RenameAction};

use crate::client::RestClient;
use crate::config::AdminConfig;
use crate::editor::{Editor, PartsScreen, RemoveOutcome};
use crate::models::{
    Category, CategoryDraft, Part, PartDraft, PartQuery, Precision, PrecisionDraft, Resource,
    Size, SizeDraft, Unit, UnitDraft,
};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AdminConfig::load_path(path)?,
        None => AdminConfig::from_env()?,
    };
    let client = RestClient::new(&config);

    match cli.command {
        Command::Categories { action } => match action {
            CategoryAction::List { filter } => {
                list_rows::<Category>(&client, filter.as_deref(), |row| {
                    format!("{}\t{}", row.id, row.name)
                })
                .await
            }
            CategoryAction::Add { name } => {
                create_row::<Category>(&client, CategoryDraft { name }).await
            }
            CategoryAction::Update { id, name } => {
                update_row::<Category>(&client, id, |draft| draft.name = name).await
            }
            CategoryAction::Delete { id, yes } => delete_row::<Category>(&client, id, yes).await,
        },
        Command::Sizes { action } => match action {
            RenameAction::List { filter } => {
                list_rows::<Size>(&client, filter.as_deref(), |row| row.id.clone()).await
            }
            RenameAction::Add { id } => create_row::<Size>(&client, SizeDraft { id }).await,
            RenameAction::Update { old_id, new_id } => {
                update_row::<Size>(&client, old_id, |draft| draft.id = new_id).await
            }
            RenameAction::Delete { id, yes } => delete_row::<Size>(&client, id, yes).await,
        },
        Command::Units { action } => match action {
            RenameAction::List { filter } => {
                list_rows::<Unit>(&client, filter.as_deref(), |row| row.id.clone()).await
            }
            RenameAction::Add { id } => create_row::<Unit>(&client, UnitDraft { id }).await,
            RenameAction::Update { old_id, new_id } => {
                update_row::<Unit>(&client, old_id, |draft| draft.id = new_id).await
            }
            RenameAction::Delete { id, yes } => delete_row::<Unit>(&client, id, yes).await,
        },
        Command::Precisions { action } => match action {
            PrecisionAction::List { filter } => {
                list_rows::<Precision>(&client, filter.as_deref(), |row| {
                    format!("{}\t{}", row.id, row.value)
                })
                .await
            }
            PrecisionAction::Add { value } => {
                create_row::<Precision>(&client, PrecisionDraft { value }).await
            }
            PrecisionAction::Update { id, value } => {
                update_row::<Precision>(&client, id, |draft| draft.value = value).await
            }
            PrecisionAction::Delete { id, yes } => {
                delete_row::<Precision>(&client, id, yes).await
            }
        },
        Command::Parts { action } => match action {
            PartAction::List {
                name,
                category_ids,
                size_ids,
                unit_ids,
                precision_id,
            } => {
                list_parts(
                    &client,
                    PartQuery {
                        name,
                        category_ids,
                        size_ids,
                        unit_ids,
                        precision_id,
                    },
                )
                .await
            }
            PartAction::Add {
                name,
                category_id,
                size_id,
                unit_id,
                precision_id,
            } => {
                create_row::<Part>(
                    &client,
                    PartDraft {
                        name,
                        category_id,
                        size_id,
                        unit_id,
                        precision_id,
                    },
                )
                .await
            }
            PartAction::Update {
                id,
                name,
                category_id,
                size_id,
                unit_id,
                precision_id,
            } => {
                update_row::<Part>(&client, id, |draft| {
                    if let Some(name) = name {
                        draft.name = name;
                    }
                    if let Some(category_id) = category_id {
                        draft.category_id = category_id;
                    }
                    if let Some(size_id) = size_id {
                        draft.size_id = size_id;
                    }
                    if let Some(unit_id) = unit_id {
                        draft.unit_id = unit_id;
                    }
                    if let Some(precision_id) = precision_id {
                        draft.precision_id = precision_id;
                    }
                })
                .await
            }
            PartAction::Delete { id, yes } => delete_row::<Part>(&client, id, yes).await,
        },
    }
}

async fn list_rows<R: Resource>(
    client: &RestClient,
    filter: Option<&str>,
    render: impl Fn(&R) -> String,
) -> anyhow::Result<()> {
    let mut editor: Editor<R> = Editor::new(Box::new(client.clone()));
    editor.load(filter).await;
    if let Some(err) = editor.last_error() {
        bail!("{err}");
    }
    if editor.items().is_empty() {
        println!("(no rows)");
    }
    for row in editor.items() {
        println!("{}", render(row));
    }
    Ok(())
}

async fn create_row<R: Resource>(client: &RestClient, draft: R::Draft) -> anyhow::Result<()> {
    let mut editor: Editor<R> = Editor::new(Box::new(client.clone()));
    *editor.create_draft_mut() = draft;
    editor.create().await;
    if let Some(msg) = editor.validation_message() {
        bail!("{msg}");
    }
    if let Some(err) = editor.last_error() {
        bail!("{err}");
    }
    println!("created");
    Ok(())
}

async fn update_row<R: Resource>(
    client: &RestClient,
    key: R::Key,
    mutate: impl FnOnce(&mut R::Draft),
) -> anyhow::Result<()> {
    let mut editor: Editor<R> = Editor::new(Box::new(client.clone()));
    editor.load(None).await;
    if let Some(err) = editor.last_error() {
        bail!("{err}");
    }
    if !editor.begin_edit(&key) {
        bail!("no {} row with id {key}", R::COLLECTION);
    }
    if let Some(draft) = editor.edit_draft_mut() {
        mutate(draft);
    }
    editor.save().await;
    if let Some(msg) = editor.validation_message() {
        bail!("{msg}");
    }
    if let Some(err) = editor.last_error() {
        bail!("{err}");
    }
    println!("updated");
    Ok(())
}

async fn delete_row<R: Resource>(
    client: &RestClient,
    key: R::Key,
    yes: bool,
) -> anyhow::Result<()> {
    let mut editor: Editor<R> = Editor::new(Box::new(client.clone()));
    editor.load(None).await;
    if let Some(err) = editor.last_error() {
        bail!("{err}");
    }
    match editor.remove(&key) {
        RemoveOutcome::UnknownKey => bail!("no {} row with id {key}", R::COLLECTION),
        RemoveOutcome::ConfirmationRequired => {
            if !yes {
                editor.cancel_remove();
                bail!("refusing to delete {key} without --yes");
            }
            editor.confirm_remove().await;
            if let Some(err) = editor.last_error() {
                bail!("{err}");
            }
            println!("deleted");
            Ok(())
        }
    }
}

async fn list_parts(client: &RestClient, query: PartQuery) -> anyhow::Result<()> {
    let mut screen = PartsScreen::connect(client);
    screen.load_all().await;
    if let Some(err) = screen.load_error() {
        bail!("{err}");
    }
    if let Some(err) = screen.editor().last_error() {
        bail!("{err}");
    }
    let rows: Vec<Part> = if query.is_empty() {
        screen.editor().items().to_vec()
    } else {
        client.search_parts(&query).await?
    };
    if rows.is_empty() {
        println!("(no rows)");
    }
    for part in &rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            part.id,
            part.name,
            screen.category_label(part.category_id),
            screen.size_label(&part.size_id),
            screen.unit_label(&part.unit_id),
            screen.precision_label(part.precision_id),
        );
    }
    Ok(())
}
