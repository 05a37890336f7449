//! Scenarios of an emulator core talking to differently equipped hosts.
use std::fs;

use pretty_assertions::assert_eq;
use snes_bridge::common::logging;
use snes_bridge::diagnostics::RecordingDiagnostics;
use snes_bridge::persistence::DirectoryPersistence;
use snes_bridge::persistence::MemoryPersistence;
use snes_bridge::viewport::ResizeTracker;
use snes_bridge::viewport::SharedViewport;
use snes_bridge::HostBridge;
use snes_bridge::StateBlob;
use snes_bridge::ViewportSize;

#[test]
pub fn test_save_without_host_support_is_discarded() {
    logging::test_init(false);
    let diagnostics = RecordingDiagnostics::default();
    let mut bridge =
        HostBridge::new(ViewportSize::new(800, 600)).with_diagnostics(diagnostics.clone());

    assert!(!bridge.supports_persistence());
    bridge.persist_state("slot1", vec![1, 2, 3, 4]);

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.messages()[0].contains("ignored"));
}

#[test]
pub fn test_save_with_recorder() {
    logging::test_init(false);
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
pub fn test_save_to_directory() {
    logging::test_init(false);
    let dir = tempfile::tempdir().unwrap();
    let mut bridge = HostBridge::new(ViewportSize::new(800, 600))
        .with_persistence(DirectoryPersistence::new(dir.path()).unwrap());

    let payload: Vec<u8> = (0..4096).map(|i| (i * 7 % 251) as u8).collect();
    bridge.persist_state("mario.frz", payload.clone());
    bridge.persist_state("mario.srm", Vec::new());

    assert_eq!(fs::read(dir.path().join("mario.frz")).unwrap(), payload);
    assert_eq!(fs::read(dir.path().join("mario.srm")).unwrap(), Vec::<u8>::new());
}

#[test]
pub fn test_viewport_stable_between_resizes() {
    let viewport = SharedViewport::new(ViewportSize::new(800, 600));
    let bridge = HostBridge::new(viewport.clone());
    let mut tracker = ResizeTracker::default();

    assert_eq!(bridge.viewport_width(), 800);
    assert_eq!(bridge.viewport_height(), 600);
    assert_eq!(
        tracker.observe(bridge.viewport_size()),
        Some(ViewportSize::new(800, 600))
    );
    for _ in 0..3 {
        assert_eq!(bridge.viewport_size(), ViewportSize::new(800, 600));
        assert_eq!(tracker.observe(bridge.viewport_size()), None);
    }

    viewport.resize(ViewportSize::new(1920, 1080));
    assert_eq!(bridge.viewport_width(), 1920);
    assert_eq!(bridge.viewport_height(), 1080);
    assert_eq!(
        tracker.observe(bridge.viewport_size()),
        Some(ViewportSize::new(1920, 1080))
    );
}

#[test]
pub fn test_calls_do_not_depend_on_history() {
    let recorder = MemoryPersistence::default();
    let mut bridge =
        HostBridge::new(ViewportSize::new(640, 480)).with_persistence(recorder.clone());

    for round in 0..3u8 {
        bridge.persist_state("slot1", vec![round]);
        assert_eq!(bridge.viewport_size(), ViewportSize::new(640, 480));
    }

    let payloads: Vec<Vec<u8>> = recorder
        .records()
        .iter()
        .map(|blob| blob.payload.clone())
        .collect();
    assert_eq!(payloads, vec![vec![0], vec![1], vec![2]]);
}
