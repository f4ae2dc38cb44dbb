pub mod qr;

use async_trait::async_trait;

/// Produces the confirmation image handed to an employee after a committed
/// booking. Generation is best-effort: callers log failures and never roll
/// back the booking.
#[async_trait]
pub trait ArtifactProvider: Send + Sync {
    /// Render a scannable encoding of the employee id as PNG bytes.
    async fn generate(&self, employee_id: &str) -> anyhow::Result<Vec<u8>>;
}
