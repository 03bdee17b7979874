//! The full session scenario: construction, pairing, typed payloads.

mod helpers;

use std::time::Duration;

use armio_sdk::{EmgMode, Error, EventKind, FirmwareVersion, Hub, LockingPolicy, UnlockKind, VibrationKind};
use helpers::{hub_over, recorder, Call, Command, ScriptedLink, TestEvent};

const WINDOW: Duration = Duration::from_millis(100);
const H1: u64 = 0xC0FFEE01;

#[test]
fn construction_accepts_valid_identifiers_and_rejects_malformed_ones() {
    assert!(Hub::with_link("com.example.test", ScriptedLink::empty()).is_ok());

    // The empty identifier is the wildcard.
    assert!(Hub::with_link("", ScriptedLink::empty()).is_ok());

    let err = Hub::with_link("bad id!", ScriptedLink::empty()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn a_session_sees_pairing_then_emg_data() {
    let link = ScriptedLink::new([
        TestEvent::new(EventKind::Paired, H1, 1000).firmware(1, 2, 3, 1),
        TestEvent::new(EventKind::Emg, H1, 2000).emg([1, -1, 2, -2, 3, -3, 4, -4]),
    ]);
    let mut hub = hub_over(link);
    let (recorder, listener) = recorder();
    hub.add_listener(listener);

    hub.run(WINDOW).unwrap();

    let calls = recorder.borrow().calls.clone();
    let pairs: Vec<&Call> = calls.iter().filter(|c| matches!(c, Call::Pair { .. })).collect();
    assert_eq!(
        pairs,
        vec![&Call::Pair {
            device: H1,
            timestamp: 1000,
            firmware: FirmwareVersion { major: 1, minor: 2, patch: 3, hardware_rev: 1 },
        }]
    );

    let emg: Vec<&Call> = calls.iter().filter(|c| matches!(c, Call::Emg { .. })).collect();
    assert_eq!(
        emg,
        vec![&Call::Emg { device: H1, timestamp: 2000, emg: [1, -1, 2, -2, 3, -3, 4, -4] }]
    );
}

#[test]
fn commands_and_policy_changes_reach_the_native_layer() {
    let link = ScriptedLink::new([TestEvent::new(EventKind::Paired, H1, 1000)]);
    let mut hub = hub_over(link.clone());

    hub.set_locking_policy(LockingPolicy::Standard).unwrap();

    let device = hub.wait_for_device(Some(WINDOW)).unwrap().expect("device paired");
    device.vibrate(VibrationKind::Medium).unwrap();
    device.unlock(UnlockKind::Hold).unwrap();
    device.lock().unwrap();
    device.request_rssi().unwrap();
    device.request_battery_level().unwrap();
    device.notify_user_action().unwrap();
    device.set_emg_mode(EmgMode::Enabled).unwrap();

    assert_eq!(
        link.commands(),
        vec![
            Command::SetLockingPolicy(LockingPolicy::Standard),
            Command::Vibrate(H1, VibrationKind::Medium),
            Command::Unlock(H1, UnlockKind::Hold),
            Command::Lock(H1),
            Command::RequestRssi(H1),
            Command::RequestBatteryLevel(H1),
            Command::NotifyUserAction(H1),
            Command::SetEmgMode(H1, EmgMode::Enabled),
        ]
    );
}

#[test]
fn device_clones_share_identity_with_the_registry() {
    let link = ScriptedLink::new([TestEvent::new(EventKind::Paired, H1, 1000)]);
    let mut hub = hub_over(link);

    let discovered = hub.wait_for_device(Some(WINDOW)).unwrap().expect("device paired");
    let listed = hub.devices();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], discovered);
    assert_eq!(discovered.clone(), discovered);
}
