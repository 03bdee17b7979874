//! The seam with the native core library.
//!
//! Everything the SDK needs from the native layer is expressed as two
//! object-safe traits: [`Link`], one native session (the blocking event
//! pump plus the fire-and-forget device commands), and [`RawEvent`], the
//! accessor surface of one opaque event. [`Hub`](crate::Hub) is written
//! against these traits only, so it can be driven by the real
//! [`NativeLink`] or by a scripted implementation in tests and simulators.

use std::time::Duration;

use crate::device::{EmgMode, UnlockKind, VibrationKind};
use crate::error::Result;
use crate::event::{Arm, EventKind, OrientationIndex, VersionComponent, WarmupResult, WarmupState, XDirection};
use crate::hub::LockingPolicy;
use crate::mac::MacAddress;
use crate::pose::Pose;

/// Opaque identity token for one physical armband.
///
/// In the native backend this is the pointer value of the native device
/// handle; simulated backends fabricate their own values. Identity of a
/// device wrapper is equality of this token, never anything value-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(u64);

impl DeviceHandle {
    /// The null handle. Never identifies a device.
    pub const NULL: DeviceHandle = DeviceHandle(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Handler verdict for the event pump: keep pumping or stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Accessor surface of one opaque event.
///
/// An event is only valid for the duration of the pump callback it is
/// passed to; it must not be retained. Payload accessors are only
/// meaningful for the event kinds documented on each method; for other
/// kinds they return an unspecified default, mirroring the native layer.
pub trait RawEvent {
    /// The raw discriminant. Values with no [`EventKind`] mapping are
    /// delivered to the catch-all listener hook only.
    fn raw_kind(&self) -> u32;

    /// Microseconds since an unspecified epoch; monotonically
    /// non-decreasing across a session.
    fn timestamp(&self) -> u64;

    /// The originating device.
    fn device_handle(&self) -> DeviceHandle;

    /// The decoded discriminant, if this SDK knows it.
    fn kind(&self) -> Option<EventKind> {
        EventKind::from_raw(self.raw_kind())
    }

    /// MAC address of the originating device.
    fn mac_address(&self) -> MacAddress {
        MacAddress::default()
    }

    /// Name of the originating device.
    fn device_name(&self) -> String {
        String::new()
    }

    /// Firmware version component. Paired and connected events.
    fn firmware_version(&self, _component: VersionComponent) -> u32 {
        0
    }

    /// Which arm the armband synced on. Arm-synced events.
    fn arm(&self) -> Arm {
        Arm::Unknown
    }

    /// +x axis direction on the arm. Arm-synced events.
    fn x_direction(&self) -> XDirection {
        XDirection::Unknown
    }

    /// Warmup state at sync time. Arm-synced events.
    fn warmup_state(&self) -> WarmupState {
        WarmupState::Unknown
    }

    /// Warmup outcome. Warmup-completed events.
    fn warmup_result(&self) -> WarmupResult {
        WarmupResult::Unknown
    }

    /// Estimated rotation of the armband on the arm, in radians.
    /// Arm-synced events.
    fn rotation_on_arm(&self) -> f32 {
        0.0
    }

    /// One orientation quaternion component. Orientation events.
    fn orientation(&self, _index: OrientationIndex) -> f32 {
        0.0
    }

    /// One accelerometer axis in units of g, `axis < 3`. Orientation events.
    fn accelerometer(&self, _axis: usize) -> f32 {
        0.0
    }

    /// One gyroscope axis in deg/s, `axis < 3`. Orientation events.
    fn gyroscope(&self, _axis: usize) -> f32 {
        0.0
    }

    /// The detected pose. Pose events.
    fn pose(&self) -> Pose {
        Pose::Unknown
    }

    /// Received signal strength. Rssi events.
    fn rssi(&self) -> i8 {
        0
    }

    /// Battery percentage. Battery-level events.
    fn battery_level(&self) -> u8 {
        0
    }

    /// One EMG sensor sample, `sensor < EMG_SENSOR_COUNT`. Emg events.
    fn emg(&self, _sensor: usize) -> i8 {
        0
    }
}

/// One native session: the blocking event pump and the per-device commands.
///
/// Commands take `&self`: the native layer is internally synchronized and
/// this layer adds no locking of its own. All commands are fire-and-forget,
/// acknowledged only by a later event. The pump is not reentrant; drive a
/// session from one thread only.
pub trait Link {
    /// Pump events for up to `window`, invoking `handler` synchronously for
    /// each one, until the window elapses or the handler answers
    /// [`Flow::Stop`].
    fn pump(&self, window: Duration, handler: &mut dyn FnMut(&dyn RawEvent) -> Flow) -> Result<()>;

    /// Set the session-wide locking policy.
    fn set_locking_policy(&self, policy: LockingPolicy) -> Result<()>;

    /// Vibrate the given armband.
    fn vibrate(&self, device: DeviceHandle, kind: VibrationKind) -> Result<()>;

    /// Request an RSSI reading; answered by a later rssi event.
    fn request_rssi(&self, device: DeviceHandle) -> Result<()>;

    /// Request a battery reading; answered by a later battery-level event.
    fn request_battery_level(&self, device: DeviceHandle) -> Result<()>;

    /// Unlock the given armband.
    fn unlock(&self, device: DeviceHandle, kind: UnlockKind) -> Result<()>;

    /// Lock the given armband immediately.
    fn lock(&self, device: DeviceHandle) -> Result<()>;

    /// Notify the armband that a user action was recognized.
    fn notify_user_action(&self, device: DeviceHandle) -> Result<()>;

    /// Enable or disable EMG streaming.
    fn set_emg_mode(&self, device: DeviceHandle, mode: EmgMode) -> Result<()>;
}

#[cfg(feature = "native")]
pub use self::native::NativeLink;

#[cfg(feature = "native")]
mod native {
    use std::ffi::{c_uint, c_void, CStr, CString};
    use std::ptr;
    use std::time::Duration;

    use armio_sys as sys;

    use super::{DeviceHandle, Flow, Link, RawEvent};
    use crate::device::{EmgMode, UnlockKind, VibrationKind};
    use crate::error::{Error, Result};
    use crate::event::{Arm, OrientationIndex, VersionComponent, WarmupResult, WarmupState, XDirection};
    use crate::hub::LockingPolicy;
    use crate::mac::MacAddress;
    use crate::pose::Pose;

    /// A live connection to the native core library.
    pub struct NativeLink {
        hub: sys::armio_hub_t,
    }

    impl NativeLink {
        /// Open a native session. The identifier is assumed to be already
        /// validated; the native layer re-checks it regardless.
        pub fn connect(application_identifier: &str) -> Result<Self> {
            let identifier = CString::new(application_identifier).map_err(|_| {
                Error::invalid_argument("application identifier contains an interior NUL byte")
            })?;

            let mut hub: sys::armio_hub_t = ptr::null_mut();
            let mut error: sys::armio_error_details_t = ptr::null_mut();
            let rc = unsafe { sys::armio_init_hub(&mut hub, identifier.as_ptr(), &mut error) };
            check(rc, error)?;

            if hub.is_null() {
                return Err(Error::Runtime(
                    "native layer reported success but returned no hub".into(),
                ));
            }
            Ok(Self { hub })
        }

        fn command(
            &self,
            device: DeviceHandle,
            f: impl FnOnce(sys::armio_device_t, *mut sys::armio_error_details_t) -> sys::armio_result_t,
        ) -> Result<()> {
            let mut error: sys::armio_error_details_t = ptr::null_mut();
            let rc = f(device_ptr(device), &mut error);
            check(rc, error)
        }
    }

    impl Drop for NativeLink {
        fn drop(&mut self) {
            // Invalidates every device handle issued by this session.
            unsafe { sys::armio_shutdown_hub(self.hub, ptr::null_mut()) };
        }
    }

    impl Link for NativeLink {
        fn pump(&self, window: Duration, handler: &mut dyn FnMut(&dyn RawEvent) -> Flow) -> Result<()> {
            let mut shim: &mut dyn FnMut(&dyn RawEvent) -> Flow = handler;
            let user_data = (&mut shim as *mut &mut dyn FnMut(&dyn RawEvent) -> Flow).cast::<c_void>();

            let mut error: sys::armio_error_details_t = ptr::null_mut();
            let rc = unsafe {
                sys::armio_run(self.hub, window_ms(window), Some(trampoline), user_data, &mut error)
            };
            check(rc, error)
        }

        fn set_locking_policy(&self, policy: LockingPolicy) -> Result<()> {
            let mut error: sys::armio_error_details_t = ptr::null_mut();
            let rc = unsafe { sys::armio_set_locking_policy(self.hub, policy.as_raw(), &mut error) };
            check(rc, error)
        }

        fn vibrate(&self, device: DeviceHandle, kind: VibrationKind) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_vibrate(ptr, kind.as_raw(), err) })
        }

        fn request_rssi(&self, device: DeviceHandle) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_request_rssi(ptr, err) })
        }

        fn request_battery_level(&self, device: DeviceHandle) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_request_battery_level(ptr, err) })
        }

        fn unlock(&self, device: DeviceHandle, kind: UnlockKind) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_device_unlock(ptr, kind.as_raw(), err) })
        }

        fn lock(&self, device: DeviceHandle) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_device_lock(ptr, err) })
        }

        fn notify_user_action(&self, device: DeviceHandle) -> Result<()> {
            self.command(device, |ptr, err| unsafe {
                sys::armio_device_notify_user_action(ptr, sys::ARMIO_USER_ACTION_SINGLE, err)
            })
        }

        fn set_emg_mode(&self, device: DeviceHandle, mode: EmgMode) -> Result<()> {
            self.command(device, |ptr, err| unsafe { sys::armio_set_stream_emg(ptr, mode.as_raw(), err) })
        }
    }

    /// Forwards each native event to the borrowed closure. A panic in the
    /// handler aborts the process; `extern "C"` does not unwind.
    unsafe extern "C" fn trampoline(user_data: *mut c_void, event: sys::armio_event_t) -> sys::armio_handler_result_t {
        let handler = user_data.cast::<&mut dyn FnMut(&dyn RawEvent) -> Flow>();
        let event = NativeEvent(event);
        match (*handler)(&event) {
            Flow::Continue => sys::ARMIO_HANDLER_CONTINUE,
            Flow::Stop => sys::ARMIO_HANDLER_STOP,
        }
    }

    /// One opaque native event, valid for the duration of the trampoline
    /// invocation that created it.
    struct NativeEvent(sys::armio_event_t);

    impl RawEvent for NativeEvent {
        fn raw_kind(&self) -> u32 {
            unsafe { sys::armio_event_get_type(self.0) }
        }

        fn timestamp(&self) -> u64 {
            unsafe { sys::armio_event_get_timestamp(self.0) }
        }

        fn device_handle(&self) -> DeviceHandle {
            DeviceHandle::from_raw(unsafe { sys::armio_event_get_device(self.0) } as usize as u64)
        }

        fn mac_address(&self) -> MacAddress {
            MacAddress::from_raw(unsafe { sys::armio_event_get_mac_address(self.0) })
        }

        fn device_name(&self) -> String {
            unsafe {
                let string = sys::armio_event_get_device_name(self.0);
                if string.is_null() {
                    return String::new();
                }
                let c_str = sys::armio_string_c_str(string);
                let name = if c_str.is_null() {
                    String::new()
                } else {
                    CStr::from_ptr(c_str).to_string_lossy().into_owned()
                };
                sys::armio_string_free(string);
                name
            }
        }

        fn firmware_version(&self, component: VersionComponent) -> u32 {
            unsafe { sys::armio_event_get_firmware_version(self.0, component.as_raw()) }
        }

        fn arm(&self) -> Arm {
            Arm::from_raw(unsafe { sys::armio_event_get_arm(self.0) })
        }

        fn x_direction(&self) -> XDirection {
            XDirection::from_raw(unsafe { sys::armio_event_get_x_direction(self.0) })
        }

        fn warmup_state(&self) -> WarmupState {
            WarmupState::from_raw(unsafe { sys::armio_event_get_warmup_state(self.0) })
        }

        fn warmup_result(&self) -> WarmupResult {
            WarmupResult::from_raw(unsafe { sys::armio_event_get_warmup_result(self.0) })
        }

        fn rotation_on_arm(&self) -> f32 {
            unsafe { sys::armio_event_get_rotation_on_arm(self.0) }
        }

        fn orientation(&self, index: OrientationIndex) -> f32 {
            unsafe { sys::armio_event_get_orientation(self.0, index.as_raw()) }
        }

        fn accelerometer(&self, axis: usize) -> f32 {
            unsafe { sys::armio_event_get_accelerometer(self.0, axis as c_uint) }
        }

        fn gyroscope(&self, axis: usize) -> f32 {
            unsafe { sys::armio_event_get_gyroscope(self.0, axis as c_uint) }
        }

        fn pose(&self) -> Pose {
            Pose::from_raw(unsafe { sys::armio_event_get_pose(self.0) })
        }

        fn rssi(&self) -> i8 {
            unsafe { sys::armio_event_get_rssi(self.0) }
        }

        fn battery_level(&self) -> u8 {
            unsafe { sys::armio_event_get_battery_level(self.0) }
        }

        fn emg(&self, sensor: usize) -> i8 {
            unsafe { sys::armio_event_get_emg(self.0, sensor as c_uint) }
        }
    }

    fn device_ptr(device: DeviceHandle) -> sys::armio_device_t {
        device.as_raw() as usize as sys::armio_device_t
    }

    fn window_ms(window: Duration) -> c_uint {
        window.as_millis().try_into().unwrap_or(c_uint::MAX)
    }

    /// Translate a native result plus optional error details into the SDK
    /// error model, freeing the details.
    fn check(rc: sys::armio_result_t, error: sys::armio_error_details_t) -> Result<()> {
        if rc == sys::ARMIO_SUCCESS {
            return Ok(());
        }

        let (kind, message) = if error.is_null() {
            (rc, String::from("native call failed without details"))
        } else {
            unsafe {
                let kind = sys::armio_error_kind(error);
                let c_str = sys::armio_error_cstring(error);
                let message = if c_str.is_null() {
                    String::from("native call failed without details")
                } else {
                    CStr::from_ptr(c_str).to_string_lossy().into_owned()
                };
                sys::armio_free_error_details(error);
                (kind, message)
            }
        };

        tracing::debug!(kind, %message, "native call failed");
        match kind {
            sys::ARMIO_ERROR_INVALID_ARGUMENT => Err(Error::InvalidArgument(message)),
            _ => Err(Error::Runtime(message)),
        }
    }
}
