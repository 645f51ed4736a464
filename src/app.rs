use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::domain::entities::edit::CellKey;
use crate::domain::entities::grid::{
    column, next_sort, page_count, FetchOptions, PageRequest, SortDirection, SortSpec, COLUMNS,
};
use crate::domain::entities::user::{ColumnId, UserRow};
use crate::infra::settings::Settings;
use crate::ui::state::app_state::GridState;
use crate::ui::state::selection::{toggle_all, toggle_row, SelectionStore};
use crate::usecase::services::grid_service::GridService;
use crate::{
    build_grid_service, detail_group_style, detail_panel_style, error_banner_style,
    loaded_status, pager_label, root_container_style, table_container_style,
    table_header_cell_style,
};

const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px;";

#[derive(Clone)]
struct ServiceHandle(Arc<GridService>);

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn sort_indicator(sort: Option<SortSpec>, column: ColumnId) -> &'static str {
    match sort {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_context::<Settings>();
    let service = use_hook(|| build_grid_service(&settings));
    let page_size = settings.page_size();

    match service {
        Ok(service) => rsx! {
            UserGrid { service: ServiceHandle(service), page_size }
        },
        Err(err) => rsx! {
            div {
                p { "Cannot use the user service: {err}" }
            }
        },
    }
}

#[component]
fn UserGrid(service: ServiceHandle, page_size: u64) -> Element {
    let GridState {
        mut rows,
        mut page,
        mut total_rows,
        mut filter_inputs,
        mut sort,
        mut reload_nonce,
        mut busy,
        mut status,
        mut last_error,
        mut editing_cell,
        mut editing_value,
    } = GridState::new();
    let mut selection = use_context_provider(|| Signal::new(SelectionStore::default()));

    let service_for_fetch = service.0.clone();
    use_effect(move || {
        let request = PageRequest {
            page: page(),
            size: page_size,
            options: FetchOptions::from_inputs(&filter_inputs.read(), sort()),
        };
        let _ = reload_nonce();
        let service = service_for_fetch.clone();
        busy.set(true);
        spawn(async move {
            let Some(result) = service.fetch_latest(&request).await else {
                return;
            };
            match result {
                Ok(fetched) => {
                    let pages = page_count(fetched.meta.total, request.size);
                    status.set(loaded_status(fetched.data.len(), Local::now()));
                    total_rows.set(fetched.meta.total);
                    rows.set(fetched.data);
                    last_error.set(None);
                    if request.page >= pages {
                        page.set(pages - 1);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, page = request.page, "page fetch failed");
                    status.set("Loading failed".to_string());
                    last_error.set(Some(format!("Could not load users: {err}")));
                }
            }
            busy.set(false);
        });
    });

    let service_for_update = service.0.clone();
    let commit_edit = move |row: UserRow, column_id: ColumnId, value: String| {
        editing_cell.set(None);
        editing_value.set(String::new());
        if row.fields.get(column_id) == value {
            return;
        }

        let service = service_for_update.clone();
        let edited = row.with_value(column_id, value);
        busy.set(true);
        status.set(format!("Saving {} of row {}", column(column_id).title, edited.id));
        spawn(async move {
            match service.update_row(&edited).await {
                Ok(()) => {
                    status.set(format!("Saved row {}", edited.id));
                    last_error.set(None);
                    *reload_nonce.write() += 1;
                }
                Err(err) => {
                    let message = format!("Could not save row {}: {err}", edited.id);
                    status.set("Save failed".to_string());
                    last_error.set(Some(message.clone()));
                    MessageDialog::new()
                        .set_level(MessageLevel::Error)
                        .set_title("Save failed")
                        .set_description(message)
                        .set_buttons(MessageButtons::Ok)
                        .show();
                }
            }
            busy.set(false);
        });
    };

    let current_rows = rows();
    let current_page = page();
    let current_total = total_rows();
    let pages = page_count(current_total, page_size);
    let sort_snapshot = sort();
    let filter_snapshot = filter_inputs();
    let editing_snapshot = editing_cell();
    let selection_snapshot = selection();
    let all_rows_selected =
        !current_rows.is_empty() && current_rows.iter().all(|row| selection_snapshot.contains(row));

    rsx! {
        div {
            style: "{root_container_style()}",
            div {
                style: "flex: 2; display: flex; flex-direction: column; min-width: 0;",
                nav {
                    style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                    button {
                        disabled: busy() || current_page == 0,
                        onclick: move |_| {
                            let current = page();
                            if current > 0 {
                                page.set(current - 1);
                            }
                        },
                        "Previous"
                    }
                    span { "{pager_label(current_page, current_total, page_size)}" }
                    button {
                        disabled: busy() || current_page + 1 >= pages,
                        onclick: move |_| {
                            *page.write() += 1;
                        },
                        "Next"
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            *reload_nonce.write() += 1;
                        },
                        "Refresh"
                    }
                    if busy() {
                        span { "Loading…" }
                    }
                    span { " {status}" }
                }

                if let Some(message) = last_error() {
                    div {
                        style: "{error_banner_style()}",
                        span { "{message}" }
                        button {
                            style: "margin-left: 12px;",
                            onclick: move |_| last_error.set(None),
                            "Dismiss"
                        }
                    }
                }

                div {
                    style: "{table_container_style()}",
                    table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                        thead {
                            tr {
                                th { style: "{table_header_cell_style(false)}",
                                    input {
                                        r#type: "checkbox",
                                        checked: all_rows_selected,
                                        onclick: {
                                            let page_rows = current_rows.clone();
                                            move |_| {
                                                let next = toggle_all(&page_rows, selection.read().selection());
                                                selection.write().set_selection(next);
                                            }
                                        }
                                    }
                                }
                                {COLUMNS.into_iter().map(|descriptor| {
                                    let column_id = descriptor.id;
                                    let title = descriptor.title;
                                    let indicator = sort_indicator(sort_snapshot, column_id);
                                    let filter_value = filter_snapshot
                                        .get(&column_id)
                                        .cloned()
                                        .unwrap_or_default();
                                    let title_style = if descriptor.sortable {
                                        "font-weight: 600; cursor: pointer; user-select: none;"
                                    } else {
                                        "font-weight: 600;"
                                    };
                                    rsx!(
                                        th {
                                            key: "{column_id}",
                                            style: "{table_header_cell_style(descriptor.resizable)}",
                                            div {
                                                style: "{title_style}",
                                                onclick: move |_| {
                                                    if !descriptor.sortable {
                                                        return;
                                                    }
                                                    sort.set(next_sort(sort(), column_id));
                                                    page.set(0);
                                                },
                                                "{title}{indicator}"
                                            }
                                            if descriptor.filterable {
                                                input {
                                                    style: "width: 100%; box-sizing: border-box; margin-top: 4px;",
                                                    placeholder: "Filter",
                                                    value: "{filter_value}",
                                                    oninput: move |event| {
                                                        filter_inputs.write().insert(column_id, event.value());
                                                        page.set(0);
                                                    }
                                                }
                                            }
                                        }
                                    )
                                })}
                            }
                        }
                        tbody {
                            {current_rows.iter().map(|row| {
                                let row = row.clone();
                                let is_selected = selection_snapshot.contains(&row);
                                let row_style = if is_selected { "background: #eef4ff;" } else { "" };
                                let page_rows = current_rows.clone();
                                let row_for_toggle = row.clone();
                                rsx!(
                                    tr {
                                        key: "{row.id}",
                                        style: "{row_style}",
                                        td { style: "{CELL_STYLE} text-align: center;",
                                            input {
                                                r#type: "checkbox",
                                                checked: is_selected,
                                                onclick: move |_| {
                                                    let next = toggle_row(
                                                        &page_rows,
                                                        selection.read().selection(),
                                                        &row_for_toggle,
                                                    );
                                                    selection.write().set_selection(next);
                                                }
                                            }
                                        }
                                        {COLUMNS.into_iter().map(|descriptor| {
                                            let cell_key = CellKey {
                                                row_id: row.id.clone(),
                                                column: descriptor.id,
                                            };
                                            let value = row.fields.get(descriptor.id).to_string();
                                            if editing_snapshot.as_ref() == Some(&cell_key) {
                                                let row_for_commit = row.clone();
                                                let mut commit_edit = commit_edit.clone();
                                                rsx!(
                                                    td { style: "{CELL_STYLE}",
                                                        input {
                                                            style: "width: 100%; box-sizing: border-box;",
                                                            autofocus: true,
                                                            value: editing_value(),
                                                            oninput: move |event| {
                                                                editing_value.set(event.value());
                                                            },
                                                            onkeydown: move |event| {
                                                                if event.key() == Key::Enter {
                                                                    commit_edit(
                                                                        row_for_commit.clone(),
                                                                        descriptor.id,
                                                                        editing_value(),
                                                                    );
                                                                } else if event.key() == Key::Escape {
                                                                    editing_cell.set(None);
                                                                    editing_value.set(String::new());
                                                                }
                                                            }
                                                        }
                                                    }
                                                )
                                            } else {
                                                let display = value.clone();
                                                rsx!(
                                                    td {
                                                        style: "{CELL_STYLE}",
                                                        ondoubleclick: move |_| {
                                                            if !descriptor.editable || busy() {
                                                                return;
                                                            }
                                                            editing_cell.set(Some(cell_key.clone()));
                                                            editing_value.set(value.clone());
                                                        },
                                                        "{display}"
                                                    }
                                                )
                                            }
                                        })}
                                    }
                                )
                            })}
                        }
                    }
                }
            }

            DetailPanel {}
        }
    }
}

/// Read-only view of the current selection, one field group per row.
#[component]
fn DetailPanel() -> Element {
    let selection = use_context::<Signal<SelectionStore>>();
    let selected = selection.read().selection().to_vec();

    rsx! {
        div {
            style: "{detail_panel_style()}",
            h1 { "Selected Items" }
            {selected.iter().map(|row| {
                rsx!(
                    div {
                        key: "{row.id}",
                        style: "{detail_group_style()}",
                        {COLUMNS.into_iter().map(|descriptor| {
                            let caption = descriptor.detail_label;
                            let value = row.fields.get(descriptor.id).to_string();
                            rsx!(
                                label {
                                    style: "display: block; margin-bottom: 6px;",
                                    span { style: "display: block; font-size: 12px; color: #555;", "{caption}" }
                                    input {
                                        r#type: "text",
                                        readonly: true,
                                        value: "{value}",
                                    }
                                }
                            )
                        })}
                    }
                )
            })}
        }
    }
}
