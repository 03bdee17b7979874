//! Raw declarations for the native armio core library.
//!
//! The core library is a closed-source binary that owns the Bluetooth
//! transport, sensor fusion and pose classification for armio armbands.
//! This crate only mirrors its C surface: opaque handles, wire-contract
//! enumerations and the `extern "C"` entry points. Nothing here is safe to
//! call directly; use the `armio-sdk` crate instead.
//!
//! Enumeration values are the wire contract with the native layer and must
//! not be renumbered.
//!
//! The `native` cargo feature controls whether the extern declarations are
//! emitted and the `armio` library is linked. Without it this crate still
//! provides every type and constant, which is enough to compile and test the
//! SDK against a simulated backend.

#![allow(non_camel_case_types)]
#![no_std]

use core::ffi::{c_uint, c_void};

#[cfg(feature = "native")]
use core::ffi::{c_char, c_float};

/// Opaque handle to a hub (one native session).
pub type armio_hub_t = *mut c_void;

/// Opaque handle corresponding to a known armband.
pub type armio_device_t = *mut c_void;

/// Opaque handle to one event delivered by [`armio_run`]. Valid only for the
/// duration of the handler invocation it is passed to.
pub type armio_event_t = *const c_void;

/// Opaque handle to detailed error information.
pub type armio_error_details_t = *mut c_void;

/// Opaque string allocated by the native library. Free with
/// [`armio_string_free`].
pub type armio_string_t = *mut c_void;

/// Function result codes. All fallible native functions return one of these.
pub type armio_result_t = c_uint;
pub const ARMIO_SUCCESS: armio_result_t = 0;
pub const ARMIO_ERROR: armio_result_t = 1;
pub const ARMIO_ERROR_INVALID_ARGUMENT: armio_result_t = 2;
pub const ARMIO_ERROR_RUNTIME: armio_result_t = 3;

/// Locking policies.
pub type armio_locking_policy_t = c_uint;
/// Pose events are always delivered.
pub const ARMIO_LOCKING_POLICY_NONE: armio_locking_policy_t = 0;
/// Pose events are suppressed while an armband is locked.
pub const ARMIO_LOCKING_POLICY_STANDARD: armio_locking_policy_t = 1;

/// Vibration lengths.
pub type armio_vibration_type_t = c_uint;
pub const ARMIO_VIBRATION_SHORT: armio_vibration_type_t = 0;
pub const ARMIO_VIBRATION_MEDIUM: armio_vibration_type_t = 1;
pub const ARMIO_VIBRATION_LONG: armio_vibration_type_t = 2;

/// EMG streaming modes.
pub type armio_stream_emg_t = c_uint;
pub const ARMIO_STREAM_EMG_DISABLED: armio_stream_emg_t = 0;
pub const ARMIO_STREAM_EMG_ENABLED: armio_stream_emg_t = 1;

/// Unlock types.
pub type armio_unlock_type_t = c_uint;
/// Unlock for a fixed period of time.
pub const ARMIO_UNLOCK_TIMED: armio_unlock_type_t = 0;
/// Unlock until explicitly told to re-lock.
pub const ARMIO_UNLOCK_HOLD: armio_unlock_type_t = 1;

/// User action types.
pub type armio_user_action_type_t = c_uint;
/// A single, discrete action, such as pausing a video.
pub const ARMIO_USER_ACTION_SINGLE: armio_user_action_type_t = 0;

/// Recognized poses.
pub type armio_pose_t = c_uint;
pub const ARMIO_POSE_REST: armio_pose_t = 0;
pub const ARMIO_POSE_FIST: armio_pose_t = 1;
pub const ARMIO_POSE_WAVE_IN: armio_pose_t = 2;
pub const ARMIO_POSE_WAVE_OUT: armio_pose_t = 3;
pub const ARMIO_POSE_FINGERS_SPREAD: armio_pose_t = 4;
pub const ARMIO_POSE_DOUBLE_TAP: armio_pose_t = 5;
/// Number of supported poses; not a valid pose.
pub const ARMIO_NUM_POSES: armio_pose_t = 6;
pub const ARMIO_POSE_UNKNOWN: armio_pose_t = 0xffff;

/// Event discriminants delivered by [`armio_run`].
pub type armio_event_type_t = c_uint;
pub const ARMIO_EVENT_PAIRED: armio_event_type_t = 0;
pub const ARMIO_EVENT_UNPAIRED: armio_event_type_t = 1;
pub const ARMIO_EVENT_CONNECTED: armio_event_type_t = 2;
pub const ARMIO_EVENT_DISCONNECTED: armio_event_type_t = 3;
pub const ARMIO_EVENT_ARM_SYNCED: armio_event_type_t = 4;
pub const ARMIO_EVENT_ARM_UNSYNCED: armio_event_type_t = 5;
pub const ARMIO_EVENT_ORIENTATION: armio_event_type_t = 6;
pub const ARMIO_EVENT_POSE: armio_event_type_t = 7;
pub const ARMIO_EVENT_RSSI: armio_event_type_t = 8;
pub const ARMIO_EVENT_UNLOCKED: armio_event_type_t = 9;
pub const ARMIO_EVENT_LOCKED: armio_event_type_t = 10;
pub const ARMIO_EVENT_EMG: armio_event_type_t = 11;
pub const ARMIO_EVENT_BATTERY_LEVEL: armio_event_type_t = 12;
pub const ARMIO_EVENT_WARMUP_COMPLETED: armio_event_type_t = 13;

/// Components of a firmware version, used to index
/// [`armio_event_get_firmware_version`].
pub type armio_version_component_t = c_uint;
pub const ARMIO_VERSION_MAJOR: armio_version_component_t = 0;
pub const ARMIO_VERSION_MINOR: armio_version_component_t = 1;
pub const ARMIO_VERSION_PATCH: armio_version_component_t = 2;
pub const ARMIO_VERSION_HARDWARE_REV: armio_version_component_t = 3;

/// Hardware revisions.
pub type armio_hardware_rev_t = c_uint;
/// Alpha units.
pub const ARMIO_HARDWARE_REV_C: armio_hardware_rev_t = 1;
/// Consumer units.
pub const ARMIO_HARDWARE_REV_D: armio_hardware_rev_t = 2;

/// Which arm an armband is worn on.
pub type armio_arm_t = c_uint;
pub const ARMIO_ARM_RIGHT: armio_arm_t = 0;
pub const ARMIO_ARM_LEFT: armio_arm_t = 1;
pub const ARMIO_ARM_UNKNOWN: armio_arm_t = 2;

/// Direction of the armband's +x axis relative to the wearer's arm.
pub type armio_x_direction_t = c_uint;
pub const ARMIO_X_DIRECTION_TOWARD_WRIST: armio_x_direction_t = 0;
pub const ARMIO_X_DIRECTION_TOWARD_ELBOW: armio_x_direction_t = 1;
pub const ARMIO_X_DIRECTION_UNKNOWN: armio_x_direction_t = 2;

/// Warmup states.
pub type armio_warmup_state_t = c_uint;
pub const ARMIO_WARMUP_STATE_UNKNOWN: armio_warmup_state_t = 0;
pub const ARMIO_WARMUP_STATE_COLD: armio_warmup_state_t = 1;
pub const ARMIO_WARMUP_STATE_WARM: armio_warmup_state_t = 2;

/// Warmup results.
pub type armio_warmup_result_t = c_uint;
pub const ARMIO_WARMUP_RESULT_UNKNOWN: armio_warmup_result_t = 0;
pub const ARMIO_WARMUP_RESULT_SUCCESS: armio_warmup_result_t = 1;
pub const ARMIO_WARMUP_RESULT_FAILED_TIMEOUT: armio_warmup_result_t = 2;

/// Index into orientation data, which is provided as a unit quaternion
/// `w + x*i + y*j + z*k`.
pub type armio_orientation_index_t = c_uint;
pub const ARMIO_ORIENTATION_X: armio_orientation_index_t = 0;
pub const ARMIO_ORIENTATION_Y: armio_orientation_index_t = 1;
pub const ARMIO_ORIENTATION_Z: armio_orientation_index_t = 2;
pub const ARMIO_ORIENTATION_W: armio_orientation_index_t = 3;

/// Return type for event handlers.
pub type armio_handler_result_t = c_uint;
pub const ARMIO_HANDLER_CONTINUE: armio_handler_result_t = 0;
pub const ARMIO_HANDLER_STOP: armio_handler_result_t = 1;

/// Callback invoked by [`armio_run`] once per event.
pub type armio_handler_t =
    Option<unsafe extern "C" fn(user_data: *mut c_void, event: armio_event_t) -> armio_handler_result_t>;

/// Number of EMG sensors on an armband.
pub const ARMIO_EMG_SENSOR_COUNT: c_uint = 8;

#[cfg(feature = "native")]
#[link(name = "armio")]
extern "C" {
    // Error handling.
    pub fn armio_error_cstring(error: armio_error_details_t) -> *const c_char;
    pub fn armio_error_kind(error: armio_error_details_t) -> armio_result_t;
    pub fn armio_free_error_details(error: armio_error_details_t);

    // Strings.
    pub fn armio_string_c_str(string: armio_string_t) -> *const c_char;
    pub fn armio_string_free(string: armio_string_t);

    // MAC address utilities. The string form is `00-00-00-00-00-00`.
    pub fn armio_mac_address_to_string(address: u64) -> armio_string_t;
    pub fn armio_string_to_mac_address(string: *const c_char) -> u64;

    // Hub lifecycle.
    pub fn armio_init_hub(
        out_hub: *mut armio_hub_t,
        application_identifier: *const c_char,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
    pub fn armio_shutdown_hub(hub: armio_hub_t, out_error: *mut armio_error_details_t) -> armio_result_t;
    pub fn armio_set_locking_policy(
        hub: armio_hub_t,
        locking_policy: armio_locking_policy_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;

    // Device commands. All are fire-and-forget; acknowledgement arrives as a
    // later event, never as a return value.
    pub fn armio_get_mac_address(device: armio_device_t) -> u64;
    pub fn armio_vibrate(
        device: armio_device_t,
        kind: armio_vibration_type_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
    pub fn armio_request_rssi(device: armio_device_t, out_error: *mut armio_error_details_t) -> armio_result_t;
    pub fn armio_request_battery_level(
        device: armio_device_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
    pub fn armio_set_stream_emg(
        device: armio_device_t,
        emg: armio_stream_emg_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
    pub fn armio_device_unlock(
        device: armio_device_t,
        kind: armio_unlock_type_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
    pub fn armio_device_lock(device: armio_device_t, out_error: *mut armio_error_details_t) -> armio_result_t;
    pub fn armio_device_notify_user_action(
        device: armio_device_t,
        kind: armio_user_action_type_t,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;

    // Event accessors. Payload accessors are only valid for the event kinds
    // documented by the native library.
    pub fn armio_event_get_type(event: armio_event_t) -> u32;
    pub fn armio_event_get_timestamp(event: armio_event_t) -> u64;
    pub fn armio_event_get_device(event: armio_event_t) -> armio_device_t;
    pub fn armio_event_get_mac_address(event: armio_event_t) -> u64;
    pub fn armio_event_get_device_name(event: armio_event_t) -> armio_string_t;
    pub fn armio_event_get_firmware_version(
        event: armio_event_t,
        component: armio_version_component_t,
    ) -> c_uint;
    pub fn armio_event_get_arm(event: armio_event_t) -> armio_arm_t;
    pub fn armio_event_get_x_direction(event: armio_event_t) -> armio_x_direction_t;
    pub fn armio_event_get_warmup_state(event: armio_event_t) -> armio_warmup_state_t;
    pub fn armio_event_get_warmup_result(event: armio_event_t) -> armio_warmup_result_t;
    pub fn armio_event_get_rotation_on_arm(event: armio_event_t) -> c_float;
    pub fn armio_event_get_orientation(event: armio_event_t, index: armio_orientation_index_t) -> c_float;
    pub fn armio_event_get_accelerometer(event: armio_event_t, index: c_uint) -> c_float;
    pub fn armio_event_get_gyroscope(event: armio_event_t, index: c_uint) -> c_float;
    pub fn armio_event_get_pose(event: armio_event_t) -> armio_pose_t;
    pub fn armio_event_get_rssi(event: armio_event_t) -> i8;
    pub fn armio_event_get_battery_level(event: armio_event_t) -> u8;
    pub fn armio_event_get_emg(event: armio_event_t, sensor: c_uint) -> i8;

    // Event pump. Runs for up to approximately `duration_ms` milliseconds or
    // until a handler returns `ARMIO_HANDLER_STOP`.
    pub fn armio_run(
        hub: armio_hub_t,
        duration_ms: c_uint,
        handler: armio_handler_t,
        user_data: *mut c_void,
        out_error: *mut armio_error_details_t,
    ) -> armio_result_t;
}
