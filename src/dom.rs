//! DOM Handles
//!
//! web-sys implementations of the handler traits.

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

use crate::error::DomError;
use crate::form::FormFields;
use crate::handlers::{BinForm, BinTable, Notifier};

pub const RECENT_BINS_ID: &str = "recent-bins";
pub const NEW_BIN_FORM_ID: &str = "newBin";

/// The `recent-bins` table
#[derive(Clone)]
pub struct DomTable {
    table: HtmlTableElement,
}

impl DomTable {
    pub fn new(table: HtmlTableElement) -> Self {
        Self { table }
    }
}

impl BinTable for DomTable {
    fn append_row(&self, title: &str, content: &str) -> Result<(), DomError> {
        // Rows go into the body; the table's own insertRow would pick <thead>
        let inserted = match self.table.t_bodies().item(0) {
            Some(body) => body
                .dyn_into::<HtmlTableSectionElement>()
                .map_err(|_| DomError::WrongType { id: RECENT_BINS_ID, expected: "tbody" })?
                .insert_row()?,
            None => self.table.insert_row()?,
        };
        let row: HtmlTableRowElement = inserted
            .dyn_into()
            .map_err(|_| DomError::WrongType { id: RECENT_BINS_ID, expected: "table row" })?;
        for text in [title, content] {
            // textContent only: field values are never parsed as markup
            row.insert_cell()?.set_text_content(Some(text));
        }
        Ok(())
    }
}

/// The `newBin` form
#[derive(Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl BinForm for DomForm {
    fn fields(&self) -> Result<FormFields, DomError> {
        let data = FormData::new_with_form(&self.form)?;
        let entries = js_sys::try_iter(&data)?
            .ok_or_else(|| DomError::Js("FormData is not iterable".into()))?;

        let mut fields = FormFields::new();
        for entry in entries {
            let pair = js_sys::Array::from(&entry?);
            let name = pair.get(0).as_string().unwrap_or_default();
            // File inputs carry a Blob, which has no place in a urlencoded body
            if let Some(value) = pair.get(1).as_string() {
                fields.push(name, value);
            }
        }
        Ok(fields)
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::error!("[ALERT] Could not show alert: {}", message);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn make_table() -> HtmlTableElement {
        document().create_element("table").unwrap().dyn_into().unwrap()
    }

    /// Same structure the recent bins component renders
    fn make_sectioned_table() -> HtmlTableElement {
        let table = make_table();
        table.set_inner_html("<thead><tr><th>Title</th><th>Content</th></tr></thead><tbody></tbody>");
        table
    }

    fn make_form(title: &str, content: &str) -> HtmlFormElement {
        let doc = document();
        let form: HtmlFormElement = doc.create_element("form").unwrap().dyn_into().unwrap();

        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_name("title");
        input.set_value(title);
        form.append_child(&input).unwrap();

        let area: HtmlTextAreaElement = doc.create_element("textarea").unwrap().dyn_into().unwrap();
        area.set_name("content");
        area.set_value(content);
        form.append_child(&area).unwrap();

        form
    }

    #[wasm_bindgen_test]
    fn table_cells_hold_plain_text() {
        let table = make_table();
        let handle = DomTable::new(table.clone());
        handle.append_row("<b>x</b>", "<img src=x onerror=alert(1)>").unwrap();
        handle.append_row("c", "d").unwrap();

        assert_eq!(table.rows().length(), 2);
        let first: HtmlTableRowElement = table.rows().item(0).unwrap().dyn_into().unwrap();
        let cells = first.cells();
        assert_eq!(cells.length(), 2);
        assert_eq!(cells.item(0).unwrap().text_content().unwrap(), "<b>x</b>");
        assert_eq!(cells.item(0).unwrap().child_element_count(), 0);
        assert_eq!(cells.item(1).unwrap().child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn form_fields_and_reset() {
        let form = make_form("T", "hello world");
        let handle = DomForm::new(form.clone());

        let fields = handle.fields().unwrap();
        assert_eq!(fields.get("title"), Some("T"));
        assert_eq!(fields.to_urlencoded(), "title=T&content=hello+world");

        handle.reset();
        let cleared = handle.fields().unwrap();
        assert_eq!(cleared.get("title"), Some(""));
        assert_eq!(cleared.get("content"), Some(""));
    }

    #[wasm_bindgen_test]
    fn rows_land_in_tbody_below_header() {
        let table = make_sectioned_table();
        let handle = DomTable::new(table.clone());
        handle.append_row("a", "b").unwrap();
        handle.append_row("c", "d").unwrap();

        let head = table.t_head().unwrap();
        assert_eq!(head.rows().length(), 1);

        let body: HtmlTableSectionElement = table.t_bodies().item(0).unwrap().dyn_into().unwrap();
        let rows = body.rows();
        assert_eq!(rows.length(), 2);
        let first: HtmlTableRowElement = rows.item(0).unwrap().dyn_into().unwrap();
        let second: HtmlTableRowElement = rows.item(1).unwrap().dyn_into().unwrap();
        assert_eq!(first.cells().item(0).unwrap().text_content().unwrap(), "a");
        assert_eq!(second.cells().item(1).unwrap().text_content().unwrap(), "d");
    }
}
