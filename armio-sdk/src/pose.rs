//! Pose recognition results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pose represents a detected configuration of the wearer's hand.
///
/// The set is closed: the native classifier only ever reports one of these
/// discriminants. Values are the wire contract and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Pose {
    /// Rest pose.
    Rest = armio_sys::ARMIO_POSE_REST,
    /// The wearer is making a fist.
    Fist = armio_sys::ARMIO_POSE_FIST,
    /// Open palm rotated towards the posterior of the wrist.
    WaveIn = armio_sys::ARMIO_POSE_WAVE_IN,
    /// Open palm rotated towards the anterior of the wrist.
    WaveOut = armio_sys::ARMIO_POSE_WAVE_OUT,
    /// Open palm with the fingers spread away from each other.
    FingersSpread = armio_sys::ARMIO_POSE_FINGERS_SPREAD,
    /// Thumb and middle finger tapped together twice in succession.
    DoubleTap = armio_sys::ARMIO_POSE_DOUBLE_TAP,
    /// Unknown pose.
    Unknown = armio_sys::ARMIO_POSE_UNKNOWN,
}

impl Pose {
    /// Decode a native pose value. Anything outside the closed set maps to
    /// [`Pose::Unknown`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            armio_sys::ARMIO_POSE_REST => Pose::Rest,
            armio_sys::ARMIO_POSE_FIST => Pose::Fist,
            armio_sys::ARMIO_POSE_WAVE_IN => Pose::WaveIn,
            armio_sys::ARMIO_POSE_WAVE_OUT => Pose::WaveOut,
            armio_sys::ARMIO_POSE_FINGERS_SPREAD => Pose::FingersSpread,
            armio_sys::ARMIO_POSE_DOUBLE_TAP => Pose::DoubleTap,
            _ => Pose::Unknown,
        }
    }

    /// The native value for this pose.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Canonical string form of the pose.
    pub fn name(self) -> &'static str {
        match self {
            Pose::Rest => "rest",
            Pose::Fist => "fist",
            Pose::WaveIn => "waveIn",
            Pose::WaveOut => "waveOut",
            Pose::FingersSpread => "fingersSpread",
            Pose::DoubleTap => "doubleTap",
            Pose::Unknown => "unknown",
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::Unknown
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
