//! The listener interface for device events.

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::Device;
use crate::event::{Arm, FirmwareVersion, WarmupResult, WarmupState, XDirection, EMG_SENSOR_COUNT};
use crate::link::RawEvent;
use crate::math::{Quaternion, Vector3};
use crate::pose::Pose;

/// Shared handle to a registered listener.
///
/// Listeners are shared, mutable, single-threaded observers; the hub holds
/// one `Rc` clone per registration and identifies a listener by its
/// allocation, so registering the same handle twice is a no-op.
pub type SharedListener = Rc<RefCell<dyn DeviceListener>>;

/// A DeviceListener receives events about an armband.
///
/// Every method has a no-op default, so implementors override only the
/// events they care about. All timestamps are microseconds since an
/// unspecified epoch and are monotonically non-decreasing.
///
/// See [`Hub::add_listener`](crate::Hub::add_listener).
pub trait DeviceListener {
    /// Called once per event, before any typed callback, regardless of
    /// whether the event kind has one. This is the forward-compatibility
    /// hook: event kinds this SDK does not know yet still arrive here.
    fn on_raw_event(&mut self, _event: &dyn RawEvent) {}

    /// Called when an armband has been paired.
    fn on_pair(&mut self, _device: &Device, _timestamp: u64, _firmware: FirmwareVersion) {}

    /// Called when an armband has been unpaired.
    fn on_unpair(&mut self, _device: &Device, _timestamp: u64) {}

    /// Called when a paired armband has connected.
    fn on_connect(&mut self, _device: &Device, _timestamp: u64, _firmware: FirmwareVersion) {}

    /// Called when a paired armband has disconnected.
    fn on_disconnect(&mut self, _device: &Device, _timestamp: u64) {}

    /// Called when a paired armband recognizes that it is on an arm.
    ///
    /// `rotation_on_arm` is the estimated rotation of the armband on the
    /// arm in radians (0: logo facing down, π: logo facing up); older
    /// firmware always reports 0.
    fn on_arm_sync(
        &mut self,
        _device: &Device,
        _timestamp: u64,
        _arm: Arm,
        _x_direction: XDirection,
        _rotation_on_arm: f32,
        _warmup_state: WarmupState,
    ) {
    }

    /// Called when a paired armband is moved or removed from the arm.
    fn on_arm_unsync(&mut self, _device: &Device, _timestamp: u64) {}

    /// Called when a paired armband becomes unlocked.
    fn on_unlock(&mut self, _device: &Device, _timestamp: u64) {}

    /// Called when a paired armband becomes locked.
    fn on_lock(&mut self, _device: &Device, _timestamp: u64) {}

    /// Called when a paired armband has provided a new pose.
    fn on_pose(&mut self, _device: &Device, _timestamp: u64, _pose: Pose) {}

    /// Called when a paired armband has provided new orientation data.
    fn on_orientation_data(&mut self, _device: &Device, _timestamp: u64, _rotation: Quaternion) {}

    /// Called when a paired armband has provided new accelerometer data, in
    /// units of g.
    fn on_accelerometer_data(&mut self, _device: &Device, _timestamp: u64, _accel: Vector3) {}

    /// Called when a paired armband has provided new gyroscope data, in
    /// deg/s.
    fn on_gyroscope_data(&mut self, _device: &Device, _timestamp: u64, _gyro: Vector3) {}

    /// Called when a paired armband has provided a new RSSI value.
    ///
    /// See [`Device::request_rssi`].
    fn on_rssi(&mut self, _device: &Device, _timestamp: u64, _rssi: i8) {}

    /// Called when a paired armband has provided a new battery level, as a
    /// percentage.
    ///
    /// See [`Device::request_battery_level`].
    fn on_battery_level(&mut self, _device: &Device, _timestamp: u64, _level: u8) {}

    /// Called when a paired armband has provided new EMG data, one sample
    /// per sensor.
    fn on_emg_data(&mut self, _device: &Device, _timestamp: u64, _emg: [i8; EMG_SENSOR_COUNT]) {}

    /// Called when the warmup period for an armband has completed.
    fn on_warmup_completed(&mut self, _device: &Device, _timestamp: u64, _result: WarmupResult) {}
}
