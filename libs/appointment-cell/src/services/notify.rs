use async_trait::async_trait;
use tracing::info;

/// Fire-and-forget patient notification channel. Implementations must not
/// influence the outcome of the operation that triggered them.
#[async_trait]
pub trait PatientNotifier: Send + Sync {
    async fn notify(&self, phone: &str, message: &str);
}

/// Stand-in SMS gateway that writes the message to the log.
pub struct SmsLogNotifier;

#[async_trait]
impl PatientNotifier for SmsLogNotifier {
    async fn notify(&self, phone: &str, message: &str) {
        info!("[SMS to {}] {}", phone, message);
    }
}
