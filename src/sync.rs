//! Persistence Sync
//!
//! Sends a new subcategory order to the backend and reports the outcome.
//! The visual order is never reverted here: after a failure the page keeps
//! showing what the user dragged, and the backend may be stale.

use crate::commands::CategoryApi;
use crate::error::FetchError;
use crate::models::ReorderRequest;

/// User-facing feedback for a persist round trip
pub trait Notifier {
    fn saved(&self, request: &ReorderRequest);
    fn failed(&self, err: &FetchError);
}

/// Send `request` as the full replacement ordering. Not retried.
pub async fn persist(
    api: &CategoryApi,
    notifier: &dyn Notifier,
    request: &ReorderRequest,
) -> Result<(), FetchError> {
    match api.update_subcategory_order(request).await {
        Ok(()) => {
            log::info!("[SYNC] saved order of {} subcategories", request.len());
            notifier.saved(request);
            Ok(())
        }
        Err(err) => {
            log::error!("[SYNC] saving subcategory order failed: {}", err);
            notifier.failed(&err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{config, Notice, RecordingNotifier, RecordingTransport};
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn test_persist_success_notifies() {
        let transport = Rc::new(RecordingTransport::new());
        let api = CategoryApi::new(transport.clone(), config());
        let notifier = RecordingNotifier::default();
        let request = ReorderRequest::from_ids(["b", "a"]);

        block_on(persist(&api, &notifier, &request)).unwrap();

        assert_eq!(notifier.notices(), vec![Notice::Saved(request)]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_persist_failure_reports_and_does_not_retry() {
        let transport = Rc::new(RecordingTransport::new());
        let err = FetchError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: String::new(),
        };
        transport.respond(Err(err.clone()));
        let api = CategoryApi::new(transport.clone(), config());
        let notifier = RecordingNotifier::default();

        let result = block_on(persist(&api, &notifier, &ReorderRequest::from_ids(["a"])));

        assert_eq!(result, Err(err.clone()));
        assert_eq!(notifier.notices(), vec![Notice::Failed(err)]);
        assert_eq!(transport.requests().len(), 1);
    }
}
