//! The hub: one session against the native core library.

use std::rc::Rc;
use std::time::Duration;

use crate::device::Device;
use crate::error::Result;
use crate::event::{EventKind, FirmwareVersion, OrientationIndex, VersionComponent, EMG_SENSOR_COUNT};
use crate::ident::validate_application_identifier;
use crate::link::{Flow, Link, RawEvent};
use crate::listener::SharedListener;
use crate::math::{Quaternion, Vector3};
use crate::registry::{DeviceRegistry, ListenerRegistry};

/// Locking policies for armbands connected to a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum LockingPolicy {
    /// Pose events are always delivered.
    None = armio_sys::ARMIO_LOCKING_POLICY_NONE,
    /// Pose events are suppressed while an armband is locked.
    Standard = armio_sys::ARMIO_LOCKING_POLICY_STANDARD,
}

impl LockingPolicy {
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Slice size for the unbounded discovery wait.
const PAIRING_SLICE: Duration = Duration::from_secs(1);

/// A hub provides access to one or more armbands.
///
/// The hub owns the native session, the set of device wrappers created
/// during the session, and the registered listeners. Dropping the hub
/// closes the native session and invalidates every [`Device`] handle
/// obtained from it.
///
/// The model is single-threaded and cooperative: [`run`](Hub::run) blocks
/// on the native pump, which delivers events synchronously on the calling
/// thread; listener callbacks run inline. The driver methods take
/// `&mut self`, so a hub cannot be pumped from two places at once.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
///
/// let mut hub = armio_sdk::Hub::new("com.example.hello-armio")?;
/// let device = hub
///     .wait_for_device(Some(Duration::from_secs(10)))?
///     .expect("no armband paired within 10 seconds");
///
/// hub.add_listener(listener);
/// loop {
///     hub.run(Duration::from_millis(100))?;
/// }
/// ```
pub struct Hub {
    link: Rc<dyn Link>,
    devices: DeviceRegistry,
    listeners: ListenerRegistry,
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub").finish_non_exhaustive()
    }
}

impl Hub {
    /// Open a session against the native core library.
    ///
    /// `application_identifier` must be in reverse domain name format with
    /// at least three segments (ex. `com.example.hello-armio`), or empty to
    /// act as a wildcard; see
    /// [`validate_application_identifier`](crate::ident::validate_application_identifier)
    /// for the precise grammar. A malformed identifier fails with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument); a session
    /// that cannot be established (typically because the background service
    /// is not running) fails with
    /// [`Error::Runtime`](crate::Error::Runtime). On failure no session
    /// exists and nothing needs to be torn down.
    #[cfg(feature = "native")]
    pub fn new(application_identifier: &str) -> Result<Self> {
        validate_application_identifier(application_identifier)?;
        let link = crate::link::NativeLink::connect(application_identifier)?;
        Ok(Self::from_link(Rc::new(link)))
    }

    /// Open a session over a caller-provided [`Link`] implementation.
    ///
    /// This is the entry point for simulated backends: replay rigs, test
    /// harnesses, or any event source that is not the native library. The
    /// identifier is validated exactly as in [`Hub::new`].
    pub fn with_link(application_identifier: &str, link: Rc<dyn Link>) -> Result<Self> {
        validate_application_identifier(application_identifier)?;
        Ok(Self::from_link(link))
    }

    fn from_link(link: Rc<dyn Link>) -> Self {
        Self {
            link,
            devices: DeviceRegistry::default(),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Register a listener to be called when device events occur. No-op if
    /// the same listener allocation is already registered. Fan-out follows
    /// registration order.
    pub fn add_listener(&mut self, listener: SharedListener) {
        self.listeners.add(listener);
    }

    /// Remove a previously registered listener. No-op if it was never
    /// registered.
    pub fn remove_listener(&mut self, listener: &SharedListener) {
        self.listeners.remove(listener);
    }

    /// Set the locking policy for armbands connected to this hub.
    pub fn set_locking_policy(&mut self, policy: LockingPolicy) -> Result<()> {
        self.link.set_locking_policy(policy)
    }

    /// Every device seen during this session, in first-sight order.
    pub fn devices(&self) -> Vec<Device> {
        self.devices.devices()
    }

    /// Run the event loop for the given duration, dispatching every event
    /// received within the window to the registered listeners.
    pub fn run(&mut self, duration: Duration) -> Result<()> {
        self.drive(duration, Flow::Continue)
    }

    /// Run the event loop until a single event has been processed, or the
    /// given duration has elapsed, whichever comes first.
    pub fn run_once(&mut self, duration: Duration) -> Result<()> {
        self.drive(duration, Flow::Stop)
    }

    fn drive(&mut self, duration: Duration, after_event: Flow) -> Result<()> {
        let link = Rc::clone(&self.link);
        let mut failure = None;

        link.pump(duration, &mut |event| match self.dispatch_event(event) {
            Ok(()) => after_event,
            Err(err) => {
                failure = Some(err);
                Flow::Stop
            }
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Wait for an armband to pair.
    ///
    /// With `Some(timeout)`, pumps for exactly that window once and returns
    /// `Ok(None)` if no new armband paired within it; a pairing ends the
    /// wait immediately. With `None`, pumps in fixed slices indefinitely
    /// until a new armband pairs, i.e. the call can block forever.
    ///
    /// During the wait only pairing events register devices; no listener
    /// callbacks are invoked. Must not be called concurrently with
    /// [`run`](Hub::run) or [`run_once`](Hub::run_once) (enforced by
    /// `&mut self`).
    pub fn wait_for_device(&mut self, timeout: Option<Duration>) -> Result<Option<Device>> {
        let known = self.devices.len();

        loop {
            let link = Rc::clone(&self.link);
            let mut failure = None;

            link.pump(timeout.unwrap_or(PAIRING_SLICE), &mut |event| {
                if event.kind() != Some(EventKind::Paired) {
                    return Flow::Continue;
                }
                let before = self.devices.len();
                match self.devices.ensure(event.device_handle(), &self.link) {
                    // Stop only on a genuinely new device; a re-pair of a
                    // known one keeps the window open.
                    Ok(_) if self.devices.len() > before => Flow::Stop,
                    Ok(_) => Flow::Continue,
                    Err(err) => {
                        failure = Some(err);
                        Flow::Stop
                    }
                }
            })?;

            if let Some(err) = failure {
                return Err(err);
            }
            if self.devices.len() > known {
                return Ok(self.devices.latest());
            }
            if timeout.is_some() {
                return Ok(None);
            }
        }
    }

    /// Resolve an event's device and fan it out to the listeners.
    ///
    /// A paired event for an unseen handle registers the device first; any
    /// other kind for an unseen handle is dropped without dispatch. Each
    /// listener receives the catch-all hook before its typed callback, and
    /// an orientation event fans out as orientation, accelerometer,
    /// gyroscope, in that order.
    fn dispatch_event(&mut self, event: &dyn RawEvent) -> Result<()> {
        let handle = event.device_handle();

        let device = match self.devices.resolve(handle) {
            Some(device) => device,
            None if event.kind() == Some(EventKind::Paired) => self.devices.ensure(handle, &self.link)?,
            None => {
                // Unknown armband and not a pairing: nothing to attribute
                // the event to.
                tracing::debug!(
                    handle = handle.as_raw(),
                    raw_kind = event.raw_kind(),
                    "dropping event for unknown device"
                );
                return Ok(());
            }
        };

        let timestamp = event.timestamp();

        for listener in self.listeners.iter() {
            let mut listener = listener.borrow_mut();

            listener.on_raw_event(event);

            let Some(kind) = event.kind() else {
                continue;
            };

            match kind {
                EventKind::Paired => listener.on_pair(&device, timestamp, read_firmware(event)),
                EventKind::Unpaired => listener.on_unpair(&device, timestamp),
                EventKind::Connected => listener.on_connect(&device, timestamp, read_firmware(event)),
                EventKind::Disconnected => listener.on_disconnect(&device, timestamp),
                EventKind::ArmSynced => listener.on_arm_sync(
                    &device,
                    timestamp,
                    event.arm(),
                    event.x_direction(),
                    event.rotation_on_arm(),
                    event.warmup_state(),
                ),
                EventKind::ArmUnsynced => listener.on_arm_unsync(&device, timestamp),
                EventKind::Unlocked => listener.on_unlock(&device, timestamp),
                EventKind::Locked => listener.on_lock(&device, timestamp),
                EventKind::Orientation => {
                    listener.on_orientation_data(&device, timestamp, read_orientation(event));
                    listener.on_accelerometer_data(&device, timestamp, read_accelerometer(event));
                    listener.on_gyroscope_data(&device, timestamp, read_gyroscope(event));
                }
                EventKind::Pose => listener.on_pose(&device, timestamp, event.pose()),
                EventKind::Rssi => listener.on_rssi(&device, timestamp, event.rssi()),
                EventKind::Emg => listener.on_emg_data(&device, timestamp, read_emg(event)),
                EventKind::BatteryLevel => listener.on_battery_level(&device, timestamp, event.battery_level()),
                EventKind::WarmupCompleted => {
                    listener.on_warmup_completed(&device, timestamp, event.warmup_result())
                }
            }
        }

        Ok(())
    }
}

fn read_firmware(event: &dyn RawEvent) -> FirmwareVersion {
    FirmwareVersion {
        major: event.firmware_version(VersionComponent::Major),
        minor: event.firmware_version(VersionComponent::Minor),
        patch: event.firmware_version(VersionComponent::Patch),
        hardware_rev: event.firmware_version(VersionComponent::HardwareRev),
    }
}

fn read_orientation(event: &dyn RawEvent) -> Quaternion {
    Quaternion::new(
        event.orientation(OrientationIndex::X),
        event.orientation(OrientationIndex::Y),
        event.orientation(OrientationIndex::Z),
        event.orientation(OrientationIndex::W),
    )
}

fn read_accelerometer(event: &dyn RawEvent) -> Vector3 {
    Vector3::new(event.accelerometer(0), event.accelerometer(1), event.accelerometer(2))
}

fn read_gyroscope(event: &dyn RawEvent) -> Vector3 {
    Vector3::new(event.gyroscope(0), event.gyroscope(1), event.gyroscope(2))
}

fn read_emg(event: &dyn RawEvent) -> [i8; EMG_SENSOR_COUNT] {
    std::array::from_fn(|sensor| event.emg(sensor))
}
