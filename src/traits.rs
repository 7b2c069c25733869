//! Seams between the file task and the pieces it drives.

/// Produces text fragments from the full content of a classified binary.
///
/// Implementations must be `Send + Sync`: a single extractor is shared by
/// every worker in the pool.
pub trait TextExtractor: Send + Sync {
    /// Returns the fragments found in `content`, in a deterministic order.
    fn extract(&self, content: &[u8]) -> Vec<String>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    #[inline]
    fn extract(&self, content: &[u8]) -> Vec<String> {
        (**self).extract(content)
    }
}

/// Receives one notification per completed task.
///
/// Calls arrive serialized and with a strictly increasing `completed`
/// count, the last one having `completed == total`.
pub trait ProgressSink: Send + Sync {
    fn update(&self, completed: usize, total: usize);

    /// Called once after the final update.
    fn finish(&self) {}
}

/// Discards progress notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn update(&self, _completed: usize, _total: usize) {}
}
