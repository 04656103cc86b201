//! Tracing setup for the binary.
//!
//! Logs go to stderr so stdout stays parseable. The filter comes from
//! `RUST_LOG`, defaulting to warnings only.

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    impl<S: tracing::Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut message = String::new();
            event.record(&mut |field: &tracing::field::Field, value: &dyn std::fmt::Debug| {
                if field.name() == "message" {
                    message = format!("{:?}", value);
                }
            });
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        super::init_logging();
        super::init_logging();
    }

    #[test]
    #[serial_test::serial]
    fn rejected_roll_is_logged_as_warning() {
        let captured = Captured::default();
        let registry = Registry::default().with(captured.clone());

        tracing::subscriber::with_default(registry, || {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let code = crate::run(
                ["yahtzee", "score", "--dice", "1,2,3", "--format", "text"],
                &mut out,
                &mut err,
            );
            assert_eq!(code, crate::exit_code::ERROR);
        });

        let entries = captured.0.lock().unwrap();
        assert!(
            entries
                .iter()
                .any(|(level, msg)| *level == Level::WARN && msg.contains("rejected roll"))
        );
    }
}
