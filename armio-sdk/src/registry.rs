//! Device and listener registries owned by a hub.

use std::rc::Rc;

use crate::device::Device;
use crate::error::Result;
use crate::link::{DeviceHandle, Link};
use crate::listener::SharedListener;

/// The set of devices seen during a session, in first-sight order.
///
/// A wrapper is created at most once per distinct native handle; there is
/// no removal operation. Wrappers live until the owning hub is dropped,
/// even after the armband unpairs.
#[derive(Default)]
pub(crate) struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Look up the wrapper for a native handle.
    pub(crate) fn resolve(&self, handle: DeviceHandle) -> Option<Device> {
        self.devices.iter().find(|device| device.handle() == handle).cloned()
    }

    /// Return the wrapper for a native handle, creating and registering one
    /// on first sight.
    pub(crate) fn ensure(&mut self, handle: DeviceHandle, link: &Rc<dyn Link>) -> Result<Device> {
        if let Some(device) = self.resolve(handle) {
            return Ok(device);
        }

        let device = Device::new(handle, Rc::clone(link))?;
        tracing::debug!(handle = handle.as_raw(), "registering new device");
        self.devices.push(device.clone());
        Ok(device)
    }

    /// The most recently created wrapper.
    pub(crate) fn latest(&self) -> Option<Device> {
        self.devices.last().cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.devices.len()
    }

    pub(crate) fn devices(&self) -> Vec<Device> {
        self.devices.clone()
    }
}

/// The ordered set of registered listeners.
///
/// Listeners are identified by allocation, not value; registering the same
/// handle twice keeps a single entry, and fan-out follows registration
/// order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<SharedListener>,
}

impl ListenerRegistry {
    /// Register a listener. No-op if it is already registered.
    pub(crate) fn add(&mut self, listener: SharedListener) {
        if self.listeners.iter().any(|known| Rc::ptr_eq(known, &listener)) {
            return;
        }
        self.listeners.push(listener);
    }

    /// Remove a listener. No-op if it is not registered; the relative order
    /// of the others is preserved.
    pub(crate) fn remove(&mut self, listener: &SharedListener) {
        self.listeners.retain(|known| !Rc::ptr_eq(known, listener));
    }

    /// Registered listeners in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &SharedListener> {
        self.listeners.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
