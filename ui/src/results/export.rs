use dioxus::prelude::*;
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};
use tracing::{info, warn};

use api::OptimizationResult;

use crate::results::table::ResultsTable;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExportError {
    #[error("Couldn't serialise results: {0}")]
    Serialize(String),
    #[error("Couldn't deliver export: {0}")]
    Delivery(String),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn ResultsExportPanel(batch: Vec<OptimizationResult>, table: ResultsTable) -> Element {
    let total_rows = table.rows.len();
    let column_count = table.columns.len();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("results-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let json_handler = {
        let export_batch = batch.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing JSON"));
            let export_batch = export_batch.clone();
            spawn(async move {
                match perform_json_export(export_batch).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err.to_string())),
                }
                busy_signal.set(false);
            });
        }
    };

    let csv_handler = {
        let export_table = table.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));
            let export_table = export_table.clone();
            spawn(async move {
                match perform_csv_export(export_table).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err.to_string())),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { "Export" }
            }

            if total_rows == 0 {
                p { class: "results-card__placeholder", "Exports unlock once an optimization returns results." }
            } else {
                ul { class: "results-export__summary",
                    li { strong { "{total_rows}" } " rows" }
                    li { strong { "{column_count}" } " columns" }
                }

                div { class: "results-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: json_handler,
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: csv_handler,
                        "Export CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_json_export(batch: Vec<OptimizationResult>) -> Result<String, ExportError> {
    let json = build_json(&batch)?;
    let copied = match copy_to_clipboard(json.clone()) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "skipping clipboard copy");
            false
        }
    };
    let filename = export_filename("json", OffsetDateTime::now_utc());
    let delivery = download_bytes(&filename, "application/json", json.into_bytes())?;
    info!(%filename, rows = batch.len(), "exported results as JSON");
    Ok(match (delivery, copied) {
        (Some(path), true) => format!("JSON copied and saved to {path}"),
        (Some(path), false) => format!("JSON saved to {path}"),
        (None, _) => "JSON download started".to_string(),
    })
}

async fn perform_csv_export(table: ResultsTable) -> Result<String, ExportError> {
    let csv = build_csv(&table);
    let filename = export_filename("csv", OffsetDateTime::now_utc());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes())?;
    info!(%filename, rows = table.rows.len(), "exported results as CSV");
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

/// Pretty JSON of the raw batch, pass-through fields included.
pub fn build_json(batch: &[OptimizationResult]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(batch).map_err(|err| ExportError::Serialize(err.to_string()))
}

/// CSV with one header row of column keys followed by the displayed cell text.
pub fn build_csv(table: &ResultsTable) -> String {
    let mut csv = String::new();
    let header = table
        .columns
        .iter()
        .map(|column| escape_csv(&column.key))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&header);
    csv.push('\n');

    for row in &table.rows {
        let line = table
            .columns
            .iter()
            .map(|column| escape_csv(&row.cell(&column.key).display()))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

/// Characters that force a CSV field into quotes (RFC 4180).
const CSV_SPECIALS: [char; 4] = [',', '"', '\n', '\r'];

fn escape_csv(value: &str) -> String {
    if !value.contains(CSV_SPECIALS) {
        return value.to_string();
    }
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// `greenwave-results-YYYYMMDD_HHMMSS.{extension}` for the given instant.
fn export_filename(extension: &str, at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!("[year][month][day]_[hour][minute][second]"))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("greenwave-results-{stamp}.{extension}")
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(_payload: String) -> Result<(), ExportError> {
    Err(ExportError::Clipboard(
        "browser exports download the file instead".to_string(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
    clipboard
        .set_text(payload)
        .map_err(|err| ExportError::Clipboard(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
    let url = object_url(mime, &bytes)?;
    let clicked = click_download(&url, filename);
    web_sys::Url::revoke_object_url(&url).ok();
    clicked.map(|()| None)
}

/// Wrap `bytes` in a Blob and return a `blob:` URL pointing at it.
#[cfg(target_arch = "wasm32")]
fn object_url(mime: &str, bytes: &[u8]) -> Result<String, ExportError> {
    use web_sys::{Blob, BlobPropertyBag, Url};

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).buffer());
    let options = BlobPropertyBag::new();
    options.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .and_then(|blob| Url::create_object_url_with_blob(&blob))
        .map_err(|_| ExportError::Delivery(format!("could not prepare {mime} download")))
}

/// Click a hidden anchor so the browser saves `url` as `filename`.
#[cfg(target_arch = "wasm32")]
fn click_download(url: &str, filename: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlAnchorElement;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Delivery("no document to attach the download to".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Delivery("document has no body".into()))?;
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or_else(|| ExportError::Delivery("could not create download link".into()))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    body.append_child(&anchor).ok();
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
    use std::fs;

    let _ = mime;
    let dir = desktop_export_dir()?;
    fs::create_dir_all(&dir).map_err(|err| ExportError::Delivery(err.to_string()))?;
    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|err| ExportError::Delivery(err.to_string()))?;
    Ok(Some(path.to_string_lossy().to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("org", "Greenwave", "Greenwave").ok_or_else(|| {
        ExportError::Delivery("unable to determine export directory".to_string())
    })?;
    Ok(dirs.data_dir().join("exports"))
}
