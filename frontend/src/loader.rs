use wasm_bindgen_futures::spawn_local;

use shared::constants::{
    ORDER_CREATED, ORDER_RANK, SEED_CHANNEL_TYPES, SEED_PHONE_LABELS, SEED_POSITION_LABELS,
    SEED_PRODUCTS, SEED_STATUSES, STORAGE_SESSION, TABLE_ACTIVITY_LOGS, TABLE_NOTES,
    TABLE_SALES_NUMBERS,
};
use shared::types::{
    ActivityDraft, ActivityLog, ChangeEvent, ChangeRecord, ClientError, LabelDraft, LabelItem,
    LabelKind, Note, NoteDraft, RankPatch, SalesNumber, Session, LABEL_KINDS,
};
use shared::store::needs_default_labels;
use shared::views::{duplicate_number, next_rank, reorder};

use crate::client::client;
use crate::connect_fetch as fetch;
use crate::connect_realtime::{start_realtime, stop_realtime, subscribe_notes, unsubscribe_notes};
use crate::state::{
    show_message, COLUMN_ORDER, EDITING_ID, EDIT_FORM, MESSAGE, NEW_NOTE, NEW_NUMBER, NOTES,
    NOTES_FOR, SESSION, SHELL, STORE,
};
use crate::types::ShellState;
use crate::utils::{load_column_order, location_reload, storage_get, storage_remove};

/// Entry point of the shell state machine: loading resolves to no-config,
/// signed-out, or a restored session.
pub fn boot() {
    if client().is_err() {
        SHELL.set(ShellState::NoConfig);
        return;
    }
    COLUMN_ORDER.set(load_column_order());
    let stored = storage_get(STORAGE_SESSION)
        .and_then(|text| serde_json::from_str::<Session>(&text).ok());
    match stored {
        Some(session) => set_session(Some(session)),
        None => SHELL.set(ShellState::SignedOut),
    }
}

pub fn set_session(session: Option<Session>) {
    match session {
        Some(session) => {
            SESSION.set(Some(session.clone()));
            SHELL.set(ShellState::SignedIn);
            spawn_local(async move {
                init_data(session).await;
            });
        }
        None => {
            SESSION.set(None);
            SHELL.set(ShellState::SignedOut);
        }
    }
}

async fn init_data(session: Session) {
    let (numbers, products, statuses, phones, positions, channels, logs) = futures::join!(
        fetch::select_all::<SalesNumber>(TABLE_SALES_NUMBERS, ORDER_CREATED, false),
        fetch::select_all::<LabelItem>(LabelKind::Product.table(), ORDER_RANK, true),
        fetch::select_all::<LabelItem>(LabelKind::Status.table(), ORDER_RANK, true),
        fetch::select_all::<LabelItem>(LabelKind::PhoneNumberLabel.table(), ORDER_RANK, true),
        fetch::select_all::<LabelItem>(LabelKind::PositionLabel.table(), ORDER_RANK, true),
        fetch::select_all::<LabelItem>(LabelKind::ChannelType.table(), ORDER_RANK, true),
        fetch::select_all::<ActivityLog>(TABLE_ACTIVITY_LOGS, ORDER_CREATED, false),
    );

    let seed_needed = needs_default_labels(&products, &statuses);

    if let Some(err) = [numbers.as_ref().err(), products.as_ref().err(), statuses.as_ref().err()]
        .into_iter()
        .flatten()
        .next()
    {
        let text = err.to_string();
        log::error!("carga inicial: {text}");
        // These stay on screen; there is no retry path.
        if text.contains("relation") && text.contains("does not exist") {
            MESSAGE.set("Error Crítico: Las tablas de la base de datos no existen.".to_string());
        } else {
            MESSAGE.set(format!("Error de conexión: {text}"));
        }
    }

    if let Ok(rows) = numbers {
        STORE.sales_numbers.set(rows);
    }
    if let Ok(rows) = products {
        STORE.products.set(rows);
    }
    if let Ok(rows) = statuses {
        STORE.statuses.set(rows);
    }
    if let Ok(rows) = phones {
        STORE.phone_number_labels.set(rows);
    }
    if let Ok(rows) = positions {
        STORE.position_labels.set(rows);
    }
    if let Ok(rows) = channels {
        STORE.channel_types.set(rows);
    }
    if let Ok(rows) = logs {
        STORE.activity_logs.set(rows);
    }

    // First run: give the new account the stock taxonomies, then start over
    // with a full fetch. A failed fetch leaves the collections empty too, so
    // the guard checks the fetch results, not the store.
    if seed_needed {
        match seed_defaults(&session).await {
            Ok(()) => {
                location_reload();
                return;
            }
            Err(err) => log::error!("datos iniciales: {err}"),
        }
    }

    start_realtime(&session);
}

async fn seed_defaults(session: &Session) -> Result<(), ClientError> {
    let seeds: [(LabelKind, &[&str]); 5] = [
        (LabelKind::Status, &SEED_STATUSES),
        (LabelKind::Product, &SEED_PRODUCTS),
        (LabelKind::PhoneNumberLabel, &SEED_PHONE_LABELS),
        (LabelKind::PositionLabel, &SEED_POSITION_LABELS),
        (LabelKind::ChannelType, &SEED_CHANNEL_TYPES),
    ];
    for (kind, names) in seeds {
        let rows: Vec<LabelDraft> = names
            .iter()
            .enumerate()
            .map(|(index, name)| LabelDraft {
                name: name.to_string(),
                order: index as i32,
                user_id: Some(session.user.id.clone()),
            })
            .collect();
        fetch::insert(kind.table(), &rows).await?;
    }
    Ok(())
}

// === change feed ===

fn label_kind(table: &str) -> Option<LabelKind> {
    LABEL_KINDS.iter().copied().find(|kind| kind.table() == table)
}

pub fn table_channel(record: ChangeRecord) {
    if record.table == TABLE_SALES_NUMBERS {
        match ChangeEvent::<SalesNumber>::decode(&record) {
            Ok(event) => STORE.apply_sales_change(event),
            Err(err) => log::error!("[feed] {}: {err}", record.table),
        }
    } else if let Some(kind) = label_kind(&record.table) {
        match ChangeEvent::<LabelItem>::decode(&record) {
            Ok(event) => STORE.apply_label_change(kind, event),
            Err(err) => log::error!("[feed] {}: {err}", record.table),
        }
    } else if record.table == TABLE_ACTIVITY_LOGS {
        match ChangeEvent::<ActivityLog>::decode(&record) {
            Ok(event) => STORE.apply_log_change(event),
            Err(err) => log::error!("[feed] {}: {err}", record.table),
        }
    } else if record.table == TABLE_NOTES {
        notes_channel(record);
    } else {
        log::info!("[feed] tabla sin manejador: {}", record.table);
    }
}

/// The notes feed only carries inserts; the panel ignores everything else.
pub fn notes_channel(record: ChangeRecord) {
    match ChangeEvent::<Note>::decode(&record) {
        Ok(ChangeEvent::Insert(note)) => {
            let open_for = NOTES_FOR.get_cloned();
            if open_for.map_or(false, |row| row.id == note.sales_number_id) {
                NOTES.lock_mut().insert(0, note);
            }
        }
        Ok(_) => {}
        Err(err) => log::error!("[feed] notes: {err}"),
    }
}

// === mutations ===

pub fn log_activity(action_type: &str, record_type: &str, description: String) {
    let session = match SESSION.get_cloned() {
        Some(session) => session,
        None => return,
    };
    let draft = ActivityDraft {
        action_type: action_type.to_string(),
        record_type: record_type.to_string(),
        description,
        user_id: session.user.id,
    };
    spawn_local(async move {
        if let Err(err) = fetch::insert(TABLE_ACTIVITY_LOGS, &draft).await {
            log::error!("registro de actividad: {err}");
        }
    });
}

pub fn add_sales_number() {
    let session = match SESSION.get_cloned() {
        Some(session) => session,
        None => return,
    };
    let draft = NEW_NUMBER.to_draft(Some(session.user.id));
    if draft.number.is_empty() || draft.status.is_empty() {
        show_message("Por favor, rellena los campos obligatorios.");
        return;
    }
    if duplicate_number(&STORE.sales_numbers.lock_ref(), &draft.number) {
        show_message("Este número de venta ya existe.");
        return;
    }
    spawn_local(async move {
        match fetch::insert(TABLE_SALES_NUMBERS, &draft).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                show_message("Número de venta añadido correctamente.");
                log_activity("created", "salesNumber", format!("Número '{}' añadido.", draft.number));
                NEW_NUMBER.clear();
            }
        }
    });
}

pub fn start_editing(row: &SalesNumber) {
    EDIT_FORM.fill(row);
    EDITING_ID.set(Some(row.id.clone()));
}

pub fn cancel_editing() {
    EDITING_ID.set(None);
}

pub fn update_sales_number() {
    let id = match EDITING_ID.get_cloned() {
        Some(id) => id,
        None => return,
    };
    let draft = EDIT_FORM.to_draft(None);
    spawn_local(async move {
        match fetch::update(TABLE_SALES_NUMBERS, &id, &draft).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                show_message("Número actualizado.");
                log_activity("updated", "salesNumber", format!("Número '{}' actualizado.", draft.number));
                EDITING_ID.set(None);
            }
        }
    });
}

pub fn delete_sales_number(id: String) {
    let number = STORE
        .sales_numbers
        .lock_ref()
        .iter()
        .find(|row| row.id == id)
        .map(|row| row.number.clone())
        .unwrap_or_default();
    spawn_local(async move {
        match fetch::delete_row(TABLE_SALES_NUMBERS, &id).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                show_message("Número eliminado.");
                log_activity("deleted", "salesNumber", format!("Número '{number}' eliminado."));
            }
        }
    });
}

pub fn add_option(kind: LabelKind, name: String) {
    let name = name.trim().to_string();
    if name.is_empty() {
        return;
    }
    let session = match SESSION.get_cloned() {
        Some(session) => session,
        None => return,
    };
    let order = next_rank(&STORE.labels(kind).lock_ref());
    let draft = LabelDraft { name: name.clone(), order, user_id: Some(session.user.id) };
    spawn_local(async move {
        match fetch::insert(kind.table(), &draft).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                show_message(&format!("{} añadido.", kind.item_name()));
                log_activity("created", kind.item_name(), format!("{} '{name}' añadido.", kind.item_name()));
            }
        }
    });
}

pub fn delete_option(kind: LabelKind, id: String, name: String) {
    spawn_local(async move {
        match fetch::delete_row(kind.table(), &id).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                show_message(&format!("{} eliminado.", kind.item_name()));
                log_activity("deleted", kind.item_name(), format!("{} '{name}' eliminado.", kind.item_name()));
            }
        }
    });
}

/// One rank update per row, no transaction; a failure mid-sequence only
/// produces the generic toast.
pub fn reorder_options(kind: LabelKind, dragged: usize, dropped: usize) {
    let sequence = reorder(&STORE.labels(kind).lock_ref(), dragged, dropped);
    spawn_local(async move {
        let updates = sequence.into_iter().enumerate().map(|(index, item)| async move {
            fetch::update(kind.table(), &item.id, &RankPatch { order: index as i32 }).await
        });
        let results = futures::future::join_all(updates).await;
        if results.iter().any(|result| result.is_err()) {
            show_message("Error al reordenar.");
        } else {
            show_message("Orden actualizado.");
        }
    });
}

// === notes panel ===

pub fn open_notes(row: SalesNumber) {
    NOTES.set(vec![]);
    NEW_NOTE.set("".to_string());
    NOTES_FOR.set(Some(row.clone()));
    if let Some(session) = SESSION.get_cloned() {
        subscribe_notes(&row.id, &session.access_token);
    }
    spawn_local(async move {
        let filter = format!("sales_number_id=eq.{}", row.id);
        match fetch::select_where::<Note>(TABLE_NOTES, &filter, ORDER_CREATED, false).await {
            Ok(notes) => NOTES.set(notes),
            Err(err) => show_message(&format!("Error: {err}")),
        }
    });
}

pub fn close_notes() {
    if let Some(row) = NOTES_FOR.get_cloned() {
        unsubscribe_notes(&row.id);
    }
    NOTES_FOR.set(None);
    NOTES.set(vec![]);
    NEW_NOTE.set("".to_string());
}

/// The list is only updated by the server's own echo on the notes feed.
pub fn add_note() {
    let row = match NOTES_FOR.get_cloned() {
        Some(row) => row,
        None => return,
    };
    let text = NEW_NOTE.get_cloned().trim().to_string();
    if text.is_empty() {
        return;
    }
    let draft = NoteDraft { text: text.clone(), sales_number_id: row.id.clone() };
    spawn_local(async move {
        match fetch::insert(TABLE_NOTES, &draft).await {
            Err(err) => show_message(&format!("Error: {err}")),
            Ok(()) => {
                log_activity(
                    "note_added",
                    "salesNumberNote",
                    format!("Nota añadida a '{}': {text}", row.number),
                );
                NEW_NOTE.set("".to_string());
            }
        }
    });
}

// === session ===

pub fn logout() {
    spawn_local(async move {
        if let Err(err) = fetch::sign_out().await {
            log::error!("cierre de sesión: {err}");
        }
        stop_realtime();
        storage_remove(STORAGE_SESSION);
        set_session(None);
        STORE.clear_all();
    });
}
