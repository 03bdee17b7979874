//! The event wire contract: discriminants and kind-specific payload types.
//!
//! The discriminant set and the payload accessor semantics are shared with
//! the native layer and must not be renumbered or reinterpreted. Values not
//! in [`EventKind`] are carried raw and are inert in typed dispatch (only
//! the catch-all listener hook sees them).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of EMG sensors on an armband; the length of every EMG sample.
pub const EMG_SENSOR_COUNT: usize = armio_sys::ARMIO_EMG_SENSOR_COUNT as usize;

/// Kinds of events delivered by the native pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum EventKind {
    /// Successfully paired with an armband.
    Paired = armio_sys::ARMIO_EVENT_PAIRED,
    /// Successfully unpaired from an armband.
    Unpaired = armio_sys::ARMIO_EVENT_UNPAIRED,
    /// A paired armband has connected.
    Connected = armio_sys::ARMIO_EVENT_CONNECTED,
    /// A paired armband has disconnected.
    Disconnected = armio_sys::ARMIO_EVENT_DISCONNECTED,
    /// The sync gesture was recognized; the armband knows which arm it is on.
    ArmSynced = armio_sys::ARMIO_EVENT_ARM_SYNCED,
    /// The armband was moved or removed from the arm.
    ArmUnsynced = armio_sys::ARMIO_EVENT_ARM_UNSYNCED,
    /// Orientation data (quaternion, accelerometer, gyroscope).
    Orientation = armio_sys::ARMIO_EVENT_ORIENTATION,
    /// A change in pose was detected.
    Pose = armio_sys::ARMIO_EVENT_POSE,
    /// An RSSI value, in response to a request.
    Rssi = armio_sys::ARMIO_EVENT_RSSI,
    /// The armband became unlocked.
    Unlocked = armio_sys::ARMIO_EVENT_UNLOCKED,
    /// The armband became locked.
    Locked = armio_sys::ARMIO_EVENT_LOCKED,
    /// An 8-channel EMG sample.
    Emg = armio_sys::ARMIO_EVENT_EMG,
    /// A battery level value, in response to a request.
    BatteryLevel = armio_sys::ARMIO_EVENT_BATTERY_LEVEL,
    /// The warmup period has completed.
    WarmupCompleted = armio_sys::ARMIO_EVENT_WARMUP_COMPLETED,
}

impl EventKind {
    /// Decode a native discriminant. Returns `None` for values this version
    /// of the SDK does not know about.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let kind = match raw {
            armio_sys::ARMIO_EVENT_PAIRED => EventKind::Paired,
            armio_sys::ARMIO_EVENT_UNPAIRED => EventKind::Unpaired,
            armio_sys::ARMIO_EVENT_CONNECTED => EventKind::Connected,
            armio_sys::ARMIO_EVENT_DISCONNECTED => EventKind::Disconnected,
            armio_sys::ARMIO_EVENT_ARM_SYNCED => EventKind::ArmSynced,
            armio_sys::ARMIO_EVENT_ARM_UNSYNCED => EventKind::ArmUnsynced,
            armio_sys::ARMIO_EVENT_ORIENTATION => EventKind::Orientation,
            armio_sys::ARMIO_EVENT_POSE => EventKind::Pose,
            armio_sys::ARMIO_EVENT_RSSI => EventKind::Rssi,
            armio_sys::ARMIO_EVENT_UNLOCKED => EventKind::Unlocked,
            armio_sys::ARMIO_EVENT_LOCKED => EventKind::Locked,
            armio_sys::ARMIO_EVENT_EMG => EventKind::Emg,
            armio_sys::ARMIO_EVENT_BATTERY_LEVEL => EventKind::BatteryLevel,
            armio_sys::ARMIO_EVENT_WARMUP_COMPLETED => EventKind::WarmupCompleted,
            _ => return None,
        };
        Some(kind)
    }

    /// The native value for this kind.
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Components of a firmware version, used as the index of the native
/// firmware version accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VersionComponent {
    Major = armio_sys::ARMIO_VERSION_MAJOR,
    Minor = armio_sys::ARMIO_VERSION_MINOR,
    Patch = armio_sys::ARMIO_VERSION_PATCH,
    HardwareRev = armio_sys::ARMIO_VERSION_HARDWARE_REV,
}

impl VersionComponent {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Firmware version of an armband, as reported by pair and connect events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Hardware revision; not part of the firmware proper.
    pub hardware_rev: u32,
}

impl FirmwareVersion {
    /// The hardware revision as a known enumeration value, if it is one.
    pub fn hardware_revision(&self) -> Option<HardwareRevision> {
        HardwareRevision::from_raw(self.hardware_rev)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Known hardware revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum HardwareRevision {
    /// Alpha units.
    RevC = armio_sys::ARMIO_HARDWARE_REV_C,
    /// Consumer units.
    RevD = armio_sys::ARMIO_HARDWARE_REV_D,
}

impl HardwareRevision {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            armio_sys::ARMIO_HARDWARE_REV_C => Some(HardwareRevision::RevC),
            armio_sys::ARMIO_HARDWARE_REV_D => Some(HardwareRevision::RevD),
            _ => None,
        }
    }
}

/// Which arm the armband is worn on. Reported by arm-sync events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Arm {
    Right = armio_sys::ARMIO_ARM_RIGHT,
    Left = armio_sys::ARMIO_ARM_LEFT,
    Unknown = armio_sys::ARMIO_ARM_UNKNOWN,
}

impl Arm {
    /// Decode a native arm value, falling back to [`Arm::Unknown`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            armio_sys::ARMIO_ARM_RIGHT => Arm::Right,
            armio_sys::ARMIO_ARM_LEFT => Arm::Left,
            _ => Arm::Unknown,
        }
    }
}

/// Direction of the armband's +x axis relative to the wearer's arm.
/// Reported by arm-sync events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum XDirection {
    TowardWrist = armio_sys::ARMIO_X_DIRECTION_TOWARD_WRIST,
    TowardElbow = armio_sys::ARMIO_X_DIRECTION_TOWARD_ELBOW,
    Unknown = armio_sys::ARMIO_X_DIRECTION_UNKNOWN,
}

impl XDirection {
    /// Decode a native x-direction value, falling back to
    /// [`XDirection::Unknown`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            armio_sys::ARMIO_X_DIRECTION_TOWARD_WRIST => XDirection::TowardWrist,
            armio_sys::ARMIO_X_DIRECTION_TOWARD_ELBOW => XDirection::TowardElbow,
            _ => XDirection::Unknown,
        }
    }
}

/// Warmup state of an armband at sync time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum WarmupState {
    Unknown = armio_sys::ARMIO_WARMUP_STATE_UNKNOWN,
    Cold = armio_sys::ARMIO_WARMUP_STATE_COLD,
    Warm = armio_sys::ARMIO_WARMUP_STATE_WARM,
}

impl WarmupState {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            armio_sys::ARMIO_WARMUP_STATE_COLD => WarmupState::Cold,
            armio_sys::ARMIO_WARMUP_STATE_WARM => WarmupState::Warm,
            _ => WarmupState::Unknown,
        }
    }
}

/// Outcome of the warmup period, reported by warmup-completed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum WarmupResult {
    Unknown = armio_sys::ARMIO_WARMUP_RESULT_UNKNOWN,
    Success = armio_sys::ARMIO_WARMUP_RESULT_SUCCESS,
    FailedTimeout = armio_sys::ARMIO_WARMUP_RESULT_FAILED_TIMEOUT,
}

impl WarmupResult {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            armio_sys::ARMIO_WARMUP_RESULT_SUCCESS => WarmupResult::Success,
            armio_sys::ARMIO_WARMUP_RESULT_FAILED_TIMEOUT => WarmupResult::FailedTimeout,
            _ => WarmupResult::Unknown,
        }
    }
}

/// Index into orientation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OrientationIndex {
    /// First component of the quaternion's vector part.
    X = armio_sys::ARMIO_ORIENTATION_X,
    /// Second component of the quaternion's vector part.
    Y = armio_sys::ARMIO_ORIENTATION_Y,
    /// Third component of the quaternion's vector part.
    Z = armio_sys::ARMIO_ORIENTATION_Z,
    /// Scalar component of the quaternion.
    W = armio_sys::ARMIO_ORIENTATION_W,
}

impl OrientationIndex {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_round_trip_and_unknown_values_stay_raw() {
        for raw in 0..14 {
            let kind = EventKind::from_raw(raw).expect("known discriminant");
            assert_eq!(kind.as_raw(), raw);
        }
        assert_eq!(EventKind::from_raw(14), None);
        assert_eq!(EventKind::from_raw(u32::MAX), None);
    }

    #[test]
    fn wire_order_is_preserved() {
        assert_eq!(EventKind::Paired.as_raw(), 0);
        assert_eq!(EventKind::Orientation.as_raw(), 6);
        assert_eq!(EventKind::Emg.as_raw(), 11);
        assert_eq!(EventKind::WarmupCompleted.as_raw(), 13);
    }

    #[test]
    fn payload_enums_fall_back_to_unknown() {
        assert_eq!(Arm::from_raw(0), Arm::Right);
        assert_eq!(Arm::from_raw(7), Arm::Unknown);
        assert_eq!(XDirection::from_raw(1), XDirection::TowardElbow);
        assert_eq!(XDirection::from_raw(7), XDirection::Unknown);
        assert_eq!(WarmupState::from_raw(2), WarmupState::Warm);
        assert_eq!(WarmupState::from_raw(7), WarmupState::Unknown);
        assert_eq!(WarmupResult::from_raw(1), WarmupResult::Success);
        assert_eq!(WarmupResult::from_raw(7), WarmupResult::Unknown);
    }

    #[test]
    fn payload_types_round_trip_through_json() {
        let version = FirmwareVersion { major: 1, minor: 2, patch: 3, hardware_rev: 1 };
        let json = serde_json::to_string(&version).unwrap();
        let back: FirmwareVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);

        assert_eq!(serde_json::to_string(&Arm::Left).unwrap(), "\"Left\"");
        assert_eq!(serde_json::to_string(&EventKind::Emg).unwrap(), "\"Emg\"");
    }

    #[test]
    fn firmware_version_display_and_revision() {
        let version = FirmwareVersion { major: 1, minor: 5, patch: 1970, hardware_rev: 2 };
        assert_eq!(version.to_string(), "1.5.1970");
        assert_eq!(version.hardware_revision(), Some(HardwareRevision::RevD));

        let odd = FirmwareVersion { major: 0, minor: 0, patch: 0, hardware_rev: 9 };
        assert_eq!(odd.hardware_revision(), None);
    }
}
