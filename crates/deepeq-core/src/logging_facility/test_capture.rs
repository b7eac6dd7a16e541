//! In-memory event capture for tests
//!
//! Assertion and CLI operations report their boundaries through the
//! `log_op_*` macros. Installing [`init_test_capture`] routes every event of
//! the test binary into a shared buffer, where tests look events up by the
//! operation name they passed to the macros.

use crate::core_types::schema::{FIELD_EVENT, FIELD_OP};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event, every field rendered to text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Operation name given to the `log_op_*` macros
    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// Boundary marker: `start`, `end` or `end_error`
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    fn is_boundary(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct TextFields<'a>(&'a mut BTreeMap<String, String>);

impl TextFields<'_> {
    fn put(&mut self, field: &Field, text: String) {
        self.0.insert(field.name().to_string(), text);
    }
}

impl Visit for TextFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut TextFields(&mut fields));

        let meta = event.metadata();
        let captured = CapturedEvent {
            level: *meta.level(),
            target: meta.target().to_string(),
            fields,
        };
        if let Ok(mut events) = self.buffer.lock() {
            events.push(captured);
        }
    }
}

/// Read side of the capture buffer
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events emitted for one operation, in order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// Panics unless `op` logged the `event` boundary at least once.
    pub fn assert_boundary(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is_boundary(op, event)),
            "no `{}` boundary for op `{}` among {} captured events",
            event,
            op,
            events.len()
        );
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return its handle.
///
/// Only the first call installs; later calls share the same buffer. Tests in
/// one binary run in parallel, so each should pick an `op` name of its own.
///
/// ```
/// use deepeq_core::logging_facility::test_capture::init_test_capture;
/// use deepeq_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_boundary("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer {
                    buffer: buffer.clone(),
                })
                .init();
            TestCapture { buffer }
        })
        .clone()
}
