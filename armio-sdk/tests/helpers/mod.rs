//! Shared test doubles: a scripted link standing in for the native core
//! library, and a listener that records every callback it receives.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use armio_sdk::{
    Arm, Device, DeviceHandle, DeviceListener, EmgMode, Error, EventKind, FirmwareVersion, Flow,
    Hub, Link, LockingPolicy, Pose, Quaternion, RawEvent, Result, SharedListener, UnlockKind,
    Vector3, VibrationKind, WarmupResult, WarmupState, XDirection, EMG_SENSOR_COUNT,
};

/// One scripted event. Builders fill in the payload fields relevant to the
/// event kind; everything else stays at the inert default.
#[derive(Clone)]
pub struct TestEvent {
    raw_kind: u32,
    timestamp: u64,
    device: DeviceHandle,
    firmware: FirmwareVersion,
    arm: Arm,
    x_direction: XDirection,
    warmup_state: WarmupState,
    warmup_result: WarmupResult,
    rotation_on_arm: f32,
    orientation: [f32; 4],
    accelerometer: [f32; 3],
    gyroscope: [f32; 3],
    pose: Pose,
    rssi: i8,
    battery: u8,
    emg: [i8; EMG_SENSOR_COUNT],
}

impl TestEvent {
    pub fn new(kind: EventKind, device: u64, timestamp: u64) -> Self {
        Self::with_raw_kind(kind.as_raw(), device, timestamp)
    }

    pub fn with_raw_kind(raw_kind: u32, device: u64, timestamp: u64) -> Self {
        Self {
            raw_kind,
            timestamp,
            device: DeviceHandle::from_raw(device),
            firmware: FirmwareVersion { major: 0, minor: 0, patch: 0, hardware_rev: 0 },
            arm: Arm::Unknown,
            x_direction: XDirection::Unknown,
            warmup_state: WarmupState::Unknown,
            warmup_result: WarmupResult::Unknown,
            rotation_on_arm: 0.0,
            orientation: [0.0; 4],
            accelerometer: [0.0; 3],
            gyroscope: [0.0; 3],
            pose: Pose::Unknown,
            rssi: 0,
            battery: 0,
            emg: [0; EMG_SENSOR_COUNT],
        }
    }

    pub fn firmware(mut self, major: u32, minor: u32, patch: u32, hardware_rev: u32) -> Self {
        self.firmware = FirmwareVersion { major, minor, patch, hardware_rev };
        self
    }

    pub fn arm_sync(mut self, arm: Arm, x_direction: XDirection, rotation: f32, state: WarmupState) -> Self {
        self.arm = arm;
        self.x_direction = x_direction;
        self.rotation_on_arm = rotation;
        self.warmup_state = state;
        self
    }

    pub fn orientation(mut self, xyzw: [f32; 4], accel: [f32; 3], gyro: [f32; 3]) -> Self {
        self.orientation = xyzw;
        self.accelerometer = accel;
        self.gyroscope = gyro;
        self
    }

    pub fn pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn rssi(mut self, rssi: i8) -> Self {
        self.rssi = rssi;
        self
    }

    pub fn battery(mut self, level: u8) -> Self {
        self.battery = level;
        self
    }

    pub fn emg(mut self, emg: [i8; EMG_SENSOR_COUNT]) -> Self {
        self.emg = emg;
        self
    }

    pub fn warmup_result(mut self, result: WarmupResult) -> Self {
        self.warmup_result = result;
        self
    }
}

impl RawEvent for TestEvent {
    fn raw_kind(&self) -> u32 {
        self.raw_kind
    }
    fn timestamp(&self) -> u64 {
        self.timestamp
    }
    fn device_handle(&self) -> DeviceHandle {
        self.device
    }
    fn firmware_version(&self, component: armio_sdk::VersionComponent) -> u32 {
        match component {
            armio_sdk::VersionComponent::Major => self.firmware.major,
            armio_sdk::VersionComponent::Minor => self.firmware.minor,
            armio_sdk::VersionComponent::Patch => self.firmware.patch,
            armio_sdk::VersionComponent::HardwareRev => self.firmware.hardware_rev,
        }
    }
    fn arm(&self) -> Arm {
        self.arm
    }
    fn x_direction(&self) -> XDirection {
        self.x_direction
    }
    fn warmup_state(&self) -> WarmupState {
        self.warmup_state
    }
    fn warmup_result(&self) -> WarmupResult {
        self.warmup_result
    }
    fn rotation_on_arm(&self) -> f32 {
        self.rotation_on_arm
    }
    fn orientation(&self, index: armio_sdk::OrientationIndex) -> f32 {
        self.orientation[index.as_raw() as usize]
    }
    fn accelerometer(&self, axis: usize) -> f32 {
        self.accelerometer[axis]
    }
    fn gyroscope(&self, axis: usize) -> f32 {
        self.gyroscope[axis]
    }
    fn pose(&self) -> Pose {
        self.pose
    }
    fn rssi(&self) -> i8 {
        self.rssi
    }
    fn battery_level(&self) -> u8 {
        self.battery
    }
    fn emg(&self, sensor: usize) -> i8 {
        self.emg[sensor]
    }
}

/// A device command observed by the scripted link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetLockingPolicy(LockingPolicy),
    Vibrate(u64, VibrationKind),
    RequestRssi(u64),
    RequestBatteryLevel(u64),
    Unlock(u64, UnlockKind),
    Lock(u64),
    NotifyUserAction(u64),
    SetEmgMode(u64, EmgMode),
}

/// A [`Link`] that replays a fixed event script.
///
/// Each `pump` call drains queued events one at a time until the handler
/// answers [`Flow::Stop`] or the script is exhausted (standing in for the
/// window elapsing). Commands are recorded instead of executed.
pub struct ScriptedLink {
    events: RefCell<VecDeque<TestEvent>>,
    failure: RefCell<Option<Error>>,
    pub commands: RefCell<Vec<Command>>,
    pub pump_windows: RefCell<Vec<Duration>>,
}

impl ScriptedLink {
    pub fn new(events: impl IntoIterator<Item = TestEvent>) -> Rc<Self> {
        Rc::new(Self {
            events: RefCell::new(events.into_iter().collect()),
            failure: RefCell::new(None),
            commands: RefCell::new(Vec::new()),
            pump_windows: RefCell::new(Vec::new()),
        })
    }

    pub fn empty() -> Rc<Self> {
        Self::new([])
    }

    /// Fail the next `pump` call with the given error.
    pub fn failing(error: Error) -> Rc<Self> {
        let link = Self::empty();
        *link.failure.borrow_mut() = Some(error);
        link
    }

    /// Queue another event behind whatever is already scripted.
    pub fn push(&self, event: TestEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Events still queued, i.e. not yet seen by any handler.
    pub fn remaining(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }
}

impl Link for ScriptedLink {
    fn pump(&self, window: Duration, handler: &mut dyn FnMut(&dyn RawEvent) -> Flow) -> Result<()> {
        self.pump_windows.borrow_mut().push(window);

        if let Some(error) = self.failure.borrow_mut().take() {
            return Err(error);
        }

        loop {
            let Some(event) = self.events.borrow_mut().pop_front() else {
                return Ok(());
            };
            if handler(&event) == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn set_locking_policy(&self, policy: LockingPolicy) -> Result<()> {
        self.commands.borrow_mut().push(Command::SetLockingPolicy(policy));
        Ok(())
    }

    fn vibrate(&self, device: DeviceHandle, kind: VibrationKind) -> Result<()> {
        self.commands.borrow_mut().push(Command::Vibrate(device.as_raw(), kind));
        Ok(())
    }

    fn request_rssi(&self, device: DeviceHandle) -> Result<()> {
        self.commands.borrow_mut().push(Command::RequestRssi(device.as_raw()));
        Ok(())
    }

    fn request_battery_level(&self, device: DeviceHandle) -> Result<()> {
        self.commands.borrow_mut().push(Command::RequestBatteryLevel(device.as_raw()));
        Ok(())
    }

    fn unlock(&self, device: DeviceHandle, kind: UnlockKind) -> Result<()> {
        self.commands.borrow_mut().push(Command::Unlock(device.as_raw(), kind));
        Ok(())
    }

    fn lock(&self, device: DeviceHandle) -> Result<()> {
        self.commands.borrow_mut().push(Command::Lock(device.as_raw()));
        Ok(())
    }

    fn notify_user_action(&self, device: DeviceHandle) -> Result<()> {
        self.commands.borrow_mut().push(Command::NotifyUserAction(device.as_raw()));
        Ok(())
    }

    fn set_emg_mode(&self, device: DeviceHandle, mode: EmgMode) -> Result<()> {
        self.commands.borrow_mut().push(Command::SetEmgMode(device.as_raw(), mode));
        Ok(())
    }
}

/// One recorded listener callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Raw { kind: u32, device: u64, timestamp: u64 },
    Pair { device: u64, timestamp: u64, firmware: FirmwareVersion },
    Unpair { device: u64, timestamp: u64 },
    Connect { device: u64, timestamp: u64, firmware: FirmwareVersion },
    Disconnect { device: u64, timestamp: u64 },
    ArmSync { device: u64, timestamp: u64, arm: Arm, x_direction: XDirection, rotation: f32, warmup_state: WarmupState },
    ArmUnsync { device: u64, timestamp: u64 },
    Unlock { device: u64, timestamp: u64 },
    Lock { device: u64, timestamp: u64 },
    Pose { device: u64, timestamp: u64, pose: Pose },
    Orientation { device: u64, timestamp: u64, rotation: Quaternion },
    Accelerometer { device: u64, timestamp: u64, accel: Vector3 },
    Gyroscope { device: u64, timestamp: u64, gyro: Vector3 },
    Rssi { device: u64, timestamp: u64, rssi: i8 },
    Emg { device: u64, timestamp: u64, emg: [i8; EMG_SENSOR_COUNT] },
    Battery { device: u64, timestamp: u64, level: u8 },
    WarmupCompleted { device: u64, timestamp: u64, result: WarmupResult },
}

/// Records every callback in arrival order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

fn id(device: &Device) -> u64 {
    device.handle().as_raw()
}

impl DeviceListener for Recorder {
    fn on_raw_event(&mut self, event: &dyn RawEvent) {
        self.calls.push(Call::Raw {
            kind: event.raw_kind(),
            device: event.device_handle().as_raw(),
            timestamp: event.timestamp(),
        });
    }

    fn on_pair(&mut self, device: &Device, timestamp: u64, firmware: FirmwareVersion) {
        self.calls.push(Call::Pair { device: id(device), timestamp, firmware });
    }

    fn on_unpair(&mut self, device: &Device, timestamp: u64) {
        self.calls.push(Call::Unpair { device: id(device), timestamp });
    }

    fn on_connect(&mut self, device: &Device, timestamp: u64, firmware: FirmwareVersion) {
        self.calls.push(Call::Connect { device: id(device), timestamp, firmware });
    }

    fn on_disconnect(&mut self, device: &Device, timestamp: u64) {
        self.calls.push(Call::Disconnect { device: id(device), timestamp });
    }

    fn on_arm_sync(
        &mut self,
        device: &Device,
        timestamp: u64,
        arm: Arm,
        x_direction: XDirection,
        rotation_on_arm: f32,
        warmup_state: WarmupState,
    ) {
        self.calls.push(Call::ArmSync {
            device: id(device),
            timestamp,
            arm,
            x_direction,
            rotation: rotation_on_arm,
            warmup_state,
        });
    }

    fn on_arm_unsync(&mut self, device: &Device, timestamp: u64) {
        self.calls.push(Call::ArmUnsync { device: id(device), timestamp });
    }

    fn on_unlock(&mut self, device: &Device, timestamp: u64) {
        self.calls.push(Call::Unlock { device: id(device), timestamp });
    }

    fn on_lock(&mut self, device: &Device, timestamp: u64) {
        self.calls.push(Call::Lock { device: id(device), timestamp });
    }

    fn on_pose(&mut self, device: &Device, timestamp: u64, pose: Pose) {
        self.calls.push(Call::Pose { device: id(device), timestamp, pose });
    }

    fn on_orientation_data(&mut self, device: &Device, timestamp: u64, rotation: Quaternion) {
        self.calls.push(Call::Orientation { device: id(device), timestamp, rotation });
    }

    fn on_accelerometer_data(&mut self, device: &Device, timestamp: u64, accel: Vector3) {
        self.calls.push(Call::Accelerometer { device: id(device), timestamp, accel });
    }

    fn on_gyroscope_data(&mut self, device: &Device, timestamp: u64, gyro: Vector3) {
        self.calls.push(Call::Gyroscope { device: id(device), timestamp, gyro });
    }

    fn on_rssi(&mut self, device: &Device, timestamp: u64, rssi: i8) {
        self.calls.push(Call::Rssi { device: id(device), timestamp, rssi });
    }

    fn on_battery_level(&mut self, device: &Device, timestamp: u64, level: u8) {
        self.calls.push(Call::Battery { device: id(device), timestamp, level });
    }

    fn on_emg_data(&mut self, device: &Device, timestamp: u64, emg: [i8; EMG_SENSOR_COUNT]) {
        self.calls.push(Call::Emg { device: id(device), timestamp, emg });
    }

    fn on_warmup_completed(&mut self, device: &Device, timestamp: u64, result: WarmupResult) {
        self.calls.push(Call::WarmupCompleted { device: id(device), timestamp, result });
    }
}

/// A registered recorder plus the handle the hub knows it by.
pub fn recorder() -> (Rc<RefCell<Recorder>>, SharedListener) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let listener: SharedListener = recorder.clone();
    (recorder, listener)
}

/// A hub over the given link, constructed with a well-formed identifier.
pub fn hub_over(link: Rc<ScriptedLink>) -> Hub {
    Hub::with_link("com.example.test", link).expect("valid identifier")
}
