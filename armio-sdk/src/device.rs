//! Per-armband device handles.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::link::{DeviceHandle, Link};

/// Vibration lengths supported by an armband.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum VibrationKind {
    Short = armio_sys::ARMIO_VIBRATION_SHORT,
    Medium = armio_sys::ARMIO_VIBRATION_MEDIUM,
    Long = armio_sys::ARMIO_VIBRATION_LONG,
}

impl VibrationKind {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Unlock modes supported by an armband.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum UnlockKind {
    /// Unlock for a fixed period of time, then re-lock automatically.
    Timed = armio_sys::ARMIO_UNLOCK_TIMED,
    /// Unlock until explicitly told to re-lock.
    Hold = armio_sys::ARMIO_UNLOCK_HOLD,
}

impl UnlockKind {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// EMG streaming modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum EmgMode {
    /// Do not send EMG data.
    Disabled = armio_sys::ARMIO_STREAM_EMG_DISABLED,
    /// Send EMG data.
    Enabled = armio_sys::ARMIO_STREAM_EMG_ENABLED,
}

impl EmgMode {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Handle to one physical armband.
///
/// Devices cannot be constructed directly; the owning [`Hub`](crate::Hub)
/// creates one per native handle the first time it sees it, so two handles
/// compare equal exactly when they refer to the same physical unit. Clones
/// are cheap and share identity.
///
/// Every command is fire-and-forget: it is acknowledged only by a later
/// event, never by a return value. A command can be issued while the
/// armband is paired, including from inside a listener callback.
///
/// Device handles are invalidated when the owning hub is dropped; issuing
/// commands after that is a caller error the SDK does not detect.
#[derive(Clone)]
pub struct Device {
    handle: DeviceHandle,
    link: Rc<dyn Link>,
}

impl Device {
    /// Wrap a native handle. A null handle is rejected: it indicates an
    /// internal consistency fault in the caller's registry.
    pub(crate) fn new(handle: DeviceHandle, link: Rc<dyn Link>) -> Result<Self> {
        if handle.is_null() {
            return Err(Error::invalid_argument("cannot construct a device from a null handle"));
        }
        Ok(Self { handle, link })
    }

    /// The native identity token for this device.
    pub fn handle(&self) -> DeviceHandle {
        self.handle
    }

    /// Vibrate the armband.
    pub fn vibrate(&self, kind: VibrationKind) -> Result<()> {
        self.link.vibrate(self.handle, kind)
    }

    /// Request the RSSI of the armband; an
    /// [`on_rssi`](crate::DeviceListener::on_rssi) event will likely follow.
    pub fn request_rssi(&self) -> Result<()> {
        self.link.request_rssi(self.handle)
    }

    /// Request the battery level of the armband; an
    /// [`on_battery_level`](crate::DeviceListener::on_battery_level) event
    /// will follow.
    pub fn request_battery_level(&self) -> Result<()> {
        self.link.request_battery_level(self.handle)
    }

    /// Unlock the armband. If it was locked, an
    /// [`on_unlock`](crate::DeviceListener::on_unlock) event follows.
    pub fn unlock(&self, kind: UnlockKind) -> Result<()> {
        self.link.unlock(self.handle, kind)
    }

    /// Lock the armband immediately. If it was unlocked, an
    /// [`on_lock`](crate::DeviceListener::on_lock) event follows.
    pub fn lock(&self) -> Result<()> {
        self.link.lock(self.handle)
    }

    /// Notify the armband that a user action was recognized. Causes a
    /// vibration.
    pub fn notify_user_action(&self) -> Result<()> {
        self.link.notify_user_action(self.handle)
    }

    /// Set the EMG streaming mode.
    pub fn set_emg_mode(&self, mode: EmgMode) -> Result<()> {
        self.link.set_emg_mode(self.handle, mode)
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Device {}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device").field("handle", &self.handle).finish()
    }
}
