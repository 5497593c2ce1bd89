//! In-memory fakes for the handler traits

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::commands::{BinTransport, HttpRequest, HttpResponse};
use crate::error::{ApiError, DomError};
use crate::form::FormFields;
use crate::handlers::{BinForm, BinTable, Notifier};

/// Expected table row
pub fn row(title: &str, content: &str) -> (String, String) {
    (title.to_string(), content.to_string())
}

/// Answers every request with the same scripted result and records what was sent
#[derive(Clone)]
pub struct FakeTransport {
    reply: Result<HttpResponse, ApiError>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse { status, body: body.to_string() }),
            sent: Rc::default(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn failing(err: ApiError) -> Self {
        Self { reply: Err(err), sent: Rc::default() }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

impl BinTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.reply.clone()
    }
}

#[derive(Clone, Default)]
pub struct FakeTable {
    rows: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeTable {
    pub fn rows(&self) -> Vec<(String, String)> {
        self.rows.borrow().clone()
    }
}

impl BinTable for FakeTable {
    fn append_row(&self, title: &str, content: &str) -> Result<(), DomError> {
        self.rows.borrow_mut().push((title.to_string(), content.to_string()));
        Ok(())
    }
}

/// Two-field form; `None` values make `fields()` fail
#[derive(Clone)]
pub struct FakeForm {
    values: Rc<RefCell<Option<(String, String)>>>,
    resets: Rc<Cell<usize>>,
}

impl FakeForm {
    pub fn with_values(title: &str, content: &str) -> Self {
        Self {
            values: Rc::new(RefCell::new(Some((title.to_string(), content.to_string())))),
            resets: Rc::default(),
        }
    }

    pub fn broken() -> Self {
        Self { values: Rc::default(), resets: Rc::default() }
    }

    pub fn values(&self) -> (String, String) {
        self.values.borrow().clone().unwrap_or_default()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

impl BinForm for FakeForm {
    fn fields(&self) -> Result<FormFields, DomError> {
        let values = self.values.borrow();
        let (title, content) = values.as_ref().ok_or(DomError::Missing("newBin"))?;
        Ok([("title", title.as_str()), ("content", content.as_str())].into_iter().collect())
    }

    fn reset(&self) {
        if let Some(values) = self.values.borrow_mut().as_mut() {
            *values = (String::new(), String::new());
        }
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct FakeNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl FakeNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
