use anyhow::{anyhow, Context, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlAnchorElement, Url};

use shared::{render_transactions_csv, CSV_FILENAME};

/// Read the visible movement rows from the table body, cells in DOM
/// order. Re-derived on every call; nothing is cached. Cell text is
/// passed through as-is; trimming happens in the CSV renderer.
pub fn collect_table_rows(document: &Document) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    let Ok(row_nodes) = document.query_selector_all(".transaction-table tbody tr") else {
        return rows;
    };

    for i in 0..row_nodes.length() {
        let Some(row) = row_nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Ok(cells) = row.query_selector_all("td") else {
            continue;
        };

        let mut values = Vec::with_capacity(cells.length() as usize);
        for j in 0..cells.length() {
            let text = cells.get(j).and_then(|c| c.text_content()).unwrap_or_default();
            values.push(text);
        }
        rows.push(values);
    }

    rows
}

/// Serialize the visible movements table and hand the browser a
/// download named `transacciones.csv`.
pub fn export_transactions(document: &Document) -> Result<()> {
    let rows = collect_table_rows(document);
    let csv = render_transactions_csv(&rows);
    download_csv(document, &csv, CSV_FILENAME)
}

/// Blob -> temporary object URL -> hidden anchor -> click, then release
/// the URL and remove the anchor. Acquire/use/release, in that order.
fn download_csv(document: &Document, csv: &str, filename: &str) -> Result<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow!("failed to build CSV blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object URL: {:?}", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {:?}", e))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    let body = document.body().context("document has no body")?;
    body.append_child(&anchor)
        .map_err(|e| anyhow!("failed to attach anchor: {:?}", e))?;
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    anchor.remove();

    Ok(())
}
