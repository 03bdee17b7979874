//! # armio-sdk — gesture-control armband SDK
//!
//! A sync-first SDK for armio armbands. The heavy lifting — Bluetooth
//! transport, sensor fusion, pose classification — lives in the
//! closed-source native core library; this crate wraps its opaque handle
//! and callback interface in idiomatic types: a [`Hub`] session, [`Device`]
//! handles, a [`DeviceListener`] observer trait and plain value types for
//! poses, orientation and EMG samples.
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use armio_sdk::{DeviceListener, Device, Hub, Pose};
//!
//! struct PosePrinter;
//!
//! impl DeviceListener for PosePrinter {
//!     fn on_pose(&mut self, _device: &Device, _timestamp: u64, pose: Pose) {
//!         println!("pose: {pose}");
//!     }
//! }
//!
//! fn main() -> armio_sdk::Result<()> {
//!     let mut hub = Hub::new("com.example.hello-armio")?;
//!     hub.wait_for_device(Some(Duration::from_secs(10)))?
//!         .expect("no armband paired");
//!
//!     hub.add_listener(Rc::new(RefCell::new(PosePrinter)));
//!     loop {
//!         hub.run(Duration::from_millis(100))?;
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Hub (session: device registry, listener fan-out, run loop)
//!     ↓
//! Link / RawEvent (trait seam: pump, commands, event accessors)
//!     ↓
//! armio-sys (raw C surface of the native core library)
//! ```
//!
//! [`Hub`] is written against the [`Link`] seam only. With the `native`
//! feature it drives the real library; without it, any [`Link`]
//! implementation — a replay rig, a simulator, the test harness — can
//! stand in via [`Hub::with_link`].
//!
//! Everything is single-threaded and cooperative: the pump blocks, events
//! are delivered synchronously on the calling thread, and listener
//! callbacks run inline. Drive a hub from one thread only.

pub use device::{Device, EmgMode, UnlockKind, VibrationKind};
pub use error::{Error, Result};
pub use event::{
    Arm, EventKind, FirmwareVersion, HardwareRevision, OrientationIndex, VersionComponent,
    WarmupResult, WarmupState, XDirection, EMG_SENSOR_COUNT,
};
pub use hub::{Hub, LockingPolicy};
pub use link::{DeviceHandle, Flow, Link, RawEvent};
pub use listener::{DeviceListener, SharedListener};
pub use mac::MacAddress;
pub use math::{Quaternion, Vector3};
pub use pose::Pose;

#[cfg(feature = "native")]
pub use link::NativeLink;

mod device;
mod error;
mod event;
mod hub;
pub mod ident;
mod link;
mod listener;
pub mod logging;
mod mac;
mod math;
mod pose;
mod registry;
