//! Test capture mode for deterministic logging assertions
//!
//! A test-only subscriber layer that records every event in memory so tests
//! can assert on `op`/`event` pairs and structured fields.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::schema::{FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP, FIELD_REQUEST_ID};

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Whether this event belongs to `op` and has the given event name
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }

    /// Look up a structured field by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Correlation id of the dispatched line, if the event carries one
    pub fn request_id(&self) -> Option<&str> {
        self.field(FIELD_REQUEST_ID)
    }

    /// Stable `ERR_*` code of a failure event
    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer that pushes every event into a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: Arc::clone(&events),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: visitor.fields.get(FIELD_COMPONENT).cloned(),
            op: visitor.fields.get(FIELD_OP).cloned(),
            event: visitor.fields.get(FIELD_EVENT).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events for one operation and event name, in emission order
    pub fn find(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first call and
/// returns a handle to the shared buffer. Tests running in the same binary
/// share it, so they should filter on distinctive op names or field values.
///
/// # Example
///
/// ```
/// use tally_core::logging_facility::test_capture::init_test_capture;
/// use tally_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
