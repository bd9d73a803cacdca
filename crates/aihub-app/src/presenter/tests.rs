use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use aihub_common::{BridgeError, LayoutError, LayoutMode, PlatformError, ServiceId, WindowHandleId};
use aihub_layout::{ServiceRegistry, SlotLayout, ToggleOutcome};
use aihub_windows::{LaunchOutcome, Launcher, UrlOpener, WindowBridge, WindowRequest};
use async_trait::async_trait;
use tokio::runtime::Handle;

use super::*;

// =============================================================================
// FAKES
// =============================================================================

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// In-memory window manager: one handle per service, no real windows.
#[derive(Default)]
struct FakeBridge {
    windows: Mutex<HashMap<ServiceId, WindowHandleId>>,
    next: AtomicU64,
    fail: bool,
}

#[async_trait]
impl WindowBridge for FakeBridge {
    async fn create_or_focus(&self, request: WindowRequest) -> Result<WindowHandleId, BridgeError> {
        if self.fail {
            return Err(BridgeError::Unavailable);
        }
        let mut windows = self.windows.lock().unwrap();
        let handle = *windows
            .entry(request.service)
            .or_insert_with(|| WindowHandleId(self.next.fetch_add(1, Ordering::SeqCst) + 1));
        Ok(handle)
    }

    async fn close(&self, service: &ServiceId) -> Result<bool, BridgeError> {
        Ok(self.windows.lock().unwrap().remove(service).is_some())
    }

    async fn list_open(&self) -> Result<Vec<ServiceId>, BridgeError> {
        let mut ids: Vec<ServiceId> = self.windows.lock().unwrap().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

fn layout(mode: LayoutMode) -> SlotLayout {
    SlotLayout::new(Arc::new(ServiceRegistry::builtin()), mode)
}

fn browser_only(mode: LayoutMode) -> (Presenter, Arc<RecordingOpener>) {
    let opener = Arc::new(RecordingOpener::default());
    let launcher = Launcher::browser_only(opener.clone());
    (
        Presenter::new(layout(mode), launcher, Handle::current(), 0.1),
        opener,
    )
}

fn native(bridge: FakeBridge) -> (Presenter, Arc<RecordingOpener>) {
    let opener = Arc::new(RecordingOpener::default());
    let launcher = Launcher::native(Arc::new(bridge), opener.clone());
    (
        Presenter::new(layout(LayoutMode::Double), launcher, Handle::current(), 0.1),
        opener,
    )
}

fn active(p: &Presenter) -> Vec<String> {
    p.layout().active().ids().map(|s| s.to_string()).collect()
}

fn slot_ids(p: &Presenter) -> Vec<String> {
    p.layout()
        .visible_slots()
        .into_iter()
        .map(|(_, s)| s.id.to_string())
        .collect()
}

// =============================================================================
// ACTIVATION
// =============================================================================

#[tokio::test]
async fn embeddable_service_toggles() {
    let (mut p, opener) = browser_only(LayoutMode::Double);
    let activation = p.handle_service_activation("perplexity").unwrap();
    assert!(matches!(
        activation,
        Activation::Toggled(ToggleOutcome::Added { evicted: None })
    ));
    assert_eq!(active(&p), vec!["perplexity"]);
    assert!(opener.opened().is_empty());
}

#[tokio::test]
async fn toggle_at_capacity_evicts_oldest() {
    let (mut p, _) = browser_only(LayoutMode::Single);
    p.handle_service_activation("kimi").unwrap();
    p.handle_service_activation("perplexity").unwrap();
    assert_eq!(active(&p), vec!["perplexity"]);
}

#[tokio::test]
async fn forced_window_outside_native_shell_opens_browser() {
    let (mut p, opener) = browser_only(LayoutMode::Double);
    let slots_before = slot_ids(&p);
    let active_before = active(&p);

    let Activation::Launched(task) = p.handle_service_activation("claude-web").unwrap() else {
        panic!("expected a launch");
    };
    assert_eq!(task.await.unwrap(), LaunchOutcome::Browser);

    assert_eq!(opener.opened(), vec!["https://claude.ai/"]);
    assert_eq!(slot_ids(&p), slots_before);
    assert_eq!(active(&p), active_before);
}

#[tokio::test]
async fn forced_window_in_native_shell_opens_window() {
    let (mut p, opener) = native(FakeBridge::default());
    let Activation::Launched(task) = p.handle_service_activation("grok").unwrap() else {
        panic!("expected a launch");
    };
    assert!(matches!(task.await.unwrap(), LaunchOutcome::Window(_)));
    assert!(opener.opened().is_empty());

    assert!(p.poll_open_windows());
    assert_eq!(p.open_windows(), &[ServiceId::from("grok")]);
    assert!(p.snapshot().native_shell);
}

#[tokio::test]
async fn activating_twice_focuses_same_window() {
    let (mut p, _) = native(FakeBridge::default());
    let mut handles = Vec::new();
    for _ in 0..2 {
        let Activation::Launched(task) = p.handle_service_activation("gemini").unwrap() else {
            panic!("expected a launch");
        };
        handles.push(task.await.unwrap());
    }
    assert_eq!(handles[0], handles[1]);
}

#[tokio::test]
async fn failing_window_manager_falls_back_to_browser() {
    let (mut p, opener) = native(FakeBridge {
        fail: true,
        ..Default::default()
    });
    let Activation::Launched(task) = p.handle_service_activation("deepseek").unwrap() else {
        panic!("expected a launch");
    };
    assert_eq!(task.await.unwrap(), LaunchOutcome::Browser);
    assert_eq!(opener.opened(), vec!["https://chat.deepseek.com/sign_in"]);
}

#[tokio::test]
async fn unknown_service_is_rejected() {
    let (mut p, opener) = browser_only(LayoutMode::Double);
    assert!(matches!(
        p.handle_service_activation("bard"),
        Err(LayoutError::UnknownService(_))
    ));
    assert!(p.handle_external_request("bard").is_err());
    assert!(opener.opened().is_empty());
}

#[tokio::test]
async fn external_request_for_embeddable_service() {
    let (mut p, opener) = browser_only(LayoutMode::Double);
    let task = p.handle_external_request("kimi").unwrap();
    assert_eq!(task.await.unwrap(), LaunchOutcome::Browser);
    assert_eq!(opener.opened(), vec!["https://www.kimi.com/"]);
    assert!(active(&p).is_empty());
}

// =============================================================================
// SLOTS AND EMBED FAILURES
// =============================================================================

#[tokio::test]
async fn failure_shows_fallback_until_reassigned() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    p.handle_slot_service_change(1, "perplexity").unwrap();

    assert!(p.handle_embed_failure(1, &ServiceId::from("perplexity")));
    assert!(p.snapshot().slots[1].failed);
    // Layout changes alone do not clear it.
    p.set_layout_mode(LayoutMode::Triple);
    assert!(p.snapshot().slots[1].failed);

    p.handle_slot_service_change(1, "perplexity").unwrap();
    assert!(!p.snapshot().slots[1].failed);
    assert!(p.failures().is_empty());
}

#[tokio::test]
async fn failure_follows_service_to_other_slots() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    p.handle_slot_service_change(0, "perplexity").unwrap();
    p.handle_embed_failure(0, &ServiceId::from("perplexity"));
    // Slot 1 shows kimi; failure is keyed by service, not by slot.
    assert!(!p.snapshot().slots[1].failed);
    assert!(p.snapshot().slots[0].failed);
}

#[tokio::test]
async fn stale_failure_report_is_ignored() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    p.handle_slot_service_change(0, "perplexity").unwrap();
    p.handle_slot_service_change(0, "kimi").unwrap();

    assert!(!p.handle_embed_failure(0, &ServiceId::from("perplexity")));
    assert!(!p.failures().is_failed("perplexity"));
}

#[tokio::test]
async fn failure_for_hidden_slot_is_ignored() {
    let (mut p, _) = browser_only(LayoutMode::Single);
    assert!(!p.handle_embed_failure(1, &ServiceId::from("kimi")));
    assert!(p.failures().is_empty());
}

#[tokio::test]
async fn invalid_slot_change_leaves_state_unchanged() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    let before = slot_ids(&p);
    assert!(p.handle_slot_service_change(5, "kimi").is_err());
    assert!(p.handle_slot_service_change(0, "bard").is_err());
    assert_eq!(slot_ids(&p), before);
}

#[tokio::test]
async fn shrinking_layout_uses_fifo() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    p.handle_service_activation("kimi").unwrap();
    p.handle_service_activation("perplexity").unwrap();
    let evicted = p.set_layout_mode(LayoutMode::Single);
    assert_eq!(evicted, vec![ServiceId::from("kimi")]);
    assert_eq!(active(&p), vec!["perplexity"]);
}

// =============================================================================
// ZOOM, SIDEBAR, WINDOWS
// =============================================================================

#[tokio::test]
async fn zoom_uses_configured_step_and_clamps() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    assert_eq!(p.handle_zoom_in("kimi").unwrap(), 1.1);
    assert_eq!(p.handle_zoom_out("kimi").unwrap(), 1.0);
    assert_eq!(p.handle_zoom_adjust("kimi", 10.0).unwrap(), 2.0);
    assert_eq!(p.handle_zoom_adjust("kimi", -10.0).unwrap(), 0.5);
    assert_eq!(p.handle_zoom_reset("kimi").unwrap(), 1.0);
    assert_eq!(p.handle_zoom_reset("kimi").unwrap(), 1.0);
    assert!(p.handle_zoom_in("bard").is_err());
}

#[tokio::test]
async fn sidebar_toggle_shows_in_snapshot() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    assert!(!p.snapshot().sidebar_collapsed);
    assert!(p.toggle_sidebar());
    assert!(p.snapshot().sidebar_collapsed);
    assert!(!p.toggle_sidebar());
}

#[tokio::test]
async fn close_window_refreshes_list() {
    let (mut p, _) = native(FakeBridge::default());
    let Activation::Launched(task) = p.handle_service_activation("grok").unwrap() else {
        panic!("expected a launch");
    };
    task.await.unwrap();
    assert!(p.poll_open_windows());

    assert!(p.close_window(ServiceId::from("grok")).await.unwrap());
    assert!(p.poll_open_windows());
    assert!(p.open_windows().is_empty());
    assert!(!p.close_window(ServiceId::from("grok")).await.unwrap());
}

#[tokio::test]
async fn browser_only_has_no_open_windows() {
    let (mut p, _) = browser_only(LayoutMode::Double);
    p.refresh_open_windows();
    tokio::task::yield_now().await;
    assert!(!p.poll_open_windows());
    assert!(!p.snapshot().native_shell);
}

#[tokio::test]
async fn refused_navigation_goes_to_browser() {
    let (p, opener) = browser_only(LayoutMode::Double);
    let outcome = p.open_in_browser("https://example.com/".into()).await.unwrap();
    assert_eq!(outcome, LaunchOutcome::Browser);
    assert_eq!(opener.opened(), vec!["https://example.com/"]);
}
