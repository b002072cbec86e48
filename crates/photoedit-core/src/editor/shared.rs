//! Cross-thread parameter cell.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::transform::params::AdjustmentParams;

/// Last-write-wins cell shared between the UI thread that moves sliders and
/// a render thread that reads a snapshot per frame.
#[derive(Debug, Clone, Default)]
pub struct SharedParams {
    inner: Arc<RwLock<AdjustmentParams>>,
}

impl SharedParams {
    pub fn new(params: AdjustmentParams) -> Self {
        Self {
            inner: Arc::new(RwLock::new(params)),
        }
    }

    /// Replace the stored params.
    pub fn store(&self, params: AdjustmentParams) {
        *self.inner.write() = params;
    }

    /// Copy of the latest params.
    pub fn load(&self) -> AdjustmentParams {
        *self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_across_threads() {
        let shared = SharedParams::default();
        let writer = shared.clone();
        std::thread::spawn(move || {
            writer.store(AdjustmentParams::new(10.0, 2.0));
            writer.store(AdjustmentParams::new(20.0, 3.0));
        })
        .join()
        .unwrap();
        assert_eq!(shared.load(), AdjustmentParams::new(20.0, 3.0));
    }
}
