//! Re-rendering every bound entity after a language change.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::binding::{Document, UpdateOptions};
use crate::interpreter::{BindingError, Engine};

/// Callback run when the active language changes or its catalog is replaced.
///
/// Implemented for any `FnMut(&Engine) -> RefreshReport` closure, and by
/// [`DocumentRefresh`] for [`Document`] hosts.
pub trait Refresh {
    /// Re-render tracked entities against the engine's current state.
    fn refresh(&mut self, engine: &Engine) -> RefreshReport;
}

impl<F> Refresh for F
where
    F: FnMut(&Engine) -> RefreshReport,
{
    fn refresh(&mut self, engine: &Engine) -> RefreshReport {
        self(engine)
    }
}

/// Outcome of a refresh pass.
///
/// Refresh continues past failing entities; each failure is recorded here.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Entities rendered successfully.
    pub refreshed: usize,
    /// Entities that could not be rendered.
    pub failures: Vec<RefreshFailure>,
}

impl RefreshReport {
    /// A report for a pass that rendered `refreshed` entities without failures.
    pub fn refreshed(refreshed: usize) -> Self {
        Self {
            refreshed,
            failures: Vec::new(),
        }
    }

    /// Whether every entity was rendered.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One entity that failed to render during a refresh.
#[derive(Debug, PartialEq, Eq)]
pub struct RefreshFailure {
    /// Position among the marked entities. None when the pass could not
    /// start at all.
    pub position: Option<usize>,
    /// What went wrong.
    pub error: BindingError,
}

impl Engine {
    /// Re-render every marked entity of a document from its stored metadata.
    ///
    /// Entities are visited in the document's collection order. A failing
    /// entity is logged and recorded, and the pass continues with the rest.
    pub fn refresh_document<D: Document + ?Sized>(&self, document: &mut D) -> RefreshReport {
        let mut report = RefreshReport::default();
        let options = UpdateOptions::default();

        for (position, entity) in document.marked_entities().into_iter().enumerate() {
            match self.update_with(entity, &options) {
                Ok(_) => report.refreshed += 1,
                Err(error) => {
                    warn!(position, %error, "failed to refresh translated entity");
                    report.failures.push(RefreshFailure {
                        position: Some(position),
                        error,
                    });
                }
            }
        }

        debug!(
            language = self.language(),
            refreshed = report.refreshed,
            failed = report.failures.len(),
            "refreshed document"
        );
        report
    }
}

/// Refresh callback driving a shared [`Document`].
///
/// The document stays reachable by the caller through the shared handle.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use j18s::{DocumentRefresh, Engine, MemoryDocument};
///
/// let document = Rc::new(RefCell::new(MemoryDocument::new()));
/// let mut engine = Engine::new();
/// engine.set_refresh(DocumentRefresh::new(Rc::clone(&document)));
///
/// let report = engine.set_language("et", false).unwrap();
/// assert_eq!(report.refreshed, 0);
/// ```
pub struct DocumentRefresh<D> {
    document: Rc<RefCell<D>>,
}

impl<D> DocumentRefresh<D> {
    /// Drive refreshes over a shared document.
    pub fn new(document: Rc<RefCell<D>>) -> Self {
        Self { document }
    }

    /// The shared document.
    pub fn document(&self) -> &Rc<RefCell<D>> {
        &self.document
    }
}

impl<D: Document> Refresh for DocumentRefresh<D> {
    fn refresh(&mut self, engine: &Engine) -> RefreshReport {
        match self.document.try_borrow_mut() {
            Ok(mut document) => engine.refresh_document(&mut *document),
            Err(_) => {
                warn!("document is borrowed elsewhere, skipping refresh");
                RefreshReport {
                    refreshed: 0,
                    failures: vec![RefreshFailure {
                        position: None,
                        error: BindingError::DocumentBusy,
                    }],
                }
            }
        }
    }
}
