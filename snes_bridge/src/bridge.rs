//! The bridge between the emulator core and its host environment.
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::LogDiagnostics;
use crate::persistence::StatePersistence;
use crate::state::StateBlob;
use crate::viewport::ViewportProvider;
use crate::viewport::ViewportSize;

/// Exposes host services to the emulator core: persisting state and measuring the rendering
/// surface.
///
/// Persistence is optional. Without it, saves are discarded with a warning on the diagnostic
/// sink and the core is not told. Use [`HostBridge::supports_persistence`] to find out up
/// front.
pub struct HostBridge {
    persistence: Option<Box<dyn StatePersistence>>,
    viewport: Box<dyn ViewportProvider>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl HostBridge {
    pub fn new(viewport: impl ViewportProvider + 'static) -> Self {
        Self {
            persistence: None,
            viewport: Box::new(viewport),
            diagnostics: Box::new(LogDiagnostics),
        }
    }

    pub fn with_persistence(mut self, persistence: impl StatePersistence + 'static) -> Self {
        self.persistence = Some(Box::new(persistence));
        self
    }

    /// Like [`HostBridge::with_persistence`], for hosts that discover the capability at
    /// runtime.
    pub fn with_optional_persistence(
        mut self,
        persistence: Option<Box<dyn StatePersistence>>,
    ) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn supports_persistence(&self) -> bool {
        self.persistence.is_some()
    }

    /// Hands a named state snapshot to the host.
    pub fn persist_state(&mut self, name: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let blob = StateBlob::new(name, payload);
        match &mut self.persistence {
            Some(persistence) => persistence.persist(blob),
            None => self.diagnostics.warn(&format!(
                "State persistence is not implemented by the host. Save of {:?} ({} bytes) was ignored.",
                blob.name,
                blob.payload.len()
            )),
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport.width()
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport.height()
    }

    pub fn viewport_size(&self) -> ViewportSize {
        self.viewport.size()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::persistence::MemoryPersistence;
    use crate::viewport::SharedViewport;

    #[test]
    fn test_forwards_state_unchanged() {
        let recorder = MemoryPersistence::default();
        let diagnostics = RecordingDiagnostics::default();
        let mut bridge = HostBridge::new(ViewportSize::new(800, 600))
            .with_persistence(recorder.clone())
            .with_diagnostics(diagnostics.clone());

        bridge.persist_state("slot1", b"ABC".to_vec());

        assert_eq!(*recorder.records(), vec![StateBlob::new("slot1", b"ABC".to_vec())]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_persistence_warns_once_per_call() {
        let diagnostics = RecordingDiagnostics::default();
        let mut bridge =
            HostBridge::new(ViewportSize::new(800, 600)).with_diagnostics(diagnostics.clone());
        assert!(!bridge.supports_persistence());

        bridge.persist_state("slot1", b"state".to_vec());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.messages()[0].contains("\"slot1\""));

        bridge.persist_state("slot1", b"state".to_vec());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_optional_persistence() {
        let recorder = MemoryPersistence::default();
        let bridge = HostBridge::new(ViewportSize::default())
            .with_optional_persistence(Some(Box::new(recorder)));
        assert!(bridge.supports_persistence());

        let bridge = HostBridge::new(ViewportSize::default()).with_optional_persistence(None);
        assert!(!bridge.supports_persistence());
    }

    #[test]
    fn test_viewport_queries() {
        let viewport = SharedViewport::new(ViewportSize::new(800, 600));
        let bridge = HostBridge::new(viewport.clone());
        assert_eq!(bridge.viewport_width(), 800);
        assert_eq!(bridge.viewport_height(), 600);
        assert_eq!(bridge.viewport_width(), 800);

        viewport.resize(ViewportSize::new(320, 240));
        assert_eq!(bridge.viewport_size(), ViewportSize::new(320, 240));
    }
}
