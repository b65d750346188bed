use std::{
    fmt,
    sync::{Arc, Mutex, Once, PoisonError},
};

use dioxus_logger::tracing::{
    self,
    field::{Field, Visit},
    subscriber::DefaultGuard,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

static INIT: Once = Once::new();

/// Install the tracing subscriber for tests once per test binary.
///
/// Later calls are no-ops, and a subscriber installed elsewhere is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = dioxus_logger::init(Level::DEBUG);
    });
}

/// One event recorded by [`capture_logs`].
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Events recorded on the current thread since [`capture_logs`] was called.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedLogs {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded events at exactly `level`.
    pub fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level == level)
            .collect()
    }

    fn push(&self, event: CapturedEvent) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Record every tracing event emitted on this thread until the returned guard is dropped.
///
/// The capture is thread-local, so async tests must run on the current-thread runtime (the
/// `#[tokio::test]` default) for events from spawned server tasks to be seen.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(logs.clone()));

    (logs, tracing::subscriber::set_default(subscriber))
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageVisitor::default();
        event.record(&mut message);

        self.0.push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: message.0,
        });
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}
