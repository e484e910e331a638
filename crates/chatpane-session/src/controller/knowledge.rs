//! Knowledge submission: free-form text posted to the server, with the
//! server's answer shown in the diagnostic log.

use chatpane_common::{DiagnosticEntry, ExchangeError};
use tracing::{info, warn};

use super::manager::SessionController;

impl SessionController {
    /// Post `text` to the knowledge endpoint.
    ///
    /// The reply (or an `Error: ...` line on failure) is appended to the
    /// diagnostic log. The conversation is never touched.
    pub async fn submit_knowledge(&self, text: &str) -> Result<(), ExchangeError> {
        if text.trim().is_empty() {
            return Err(ExchangeError::EmptyInput);
        }

        info!(session = %self.id, chars = text.len(), "submitting knowledge");
        let result =
            tokio::time::timeout(self.config.timeout, self.transport.post_knowledge(text)).await;

        let (entries, outcome) = match result {
            Ok(Ok(value)) => (DiagnosticEntry::from_payload(&value), Ok(())),
            Ok(Err(e)) => {
                warn!(error = %e, "knowledge submission failed");
                (vec![DiagnosticEntry::new(format!("Error: {e}"))], Err(e.classify()))
            }
            Err(_) => {
                warn!("knowledge submission timed out");
                let error = ExchangeError::Timeout;
                (vec![DiagnosticEntry::new(format!("Error: {error}"))], Err(error))
            }
        };

        let mut state = self.shared.lock();
        let added = state.diagnostics.extend(entries);
        self.shared.sink.render_diagnostics(added);
        outcome
    }
}
