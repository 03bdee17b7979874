//! Pair with an armband and print poses as they are recognized.
//!
//! Requires the native core library: `cargo run --features native --example
//! hello_armio`.

use std::cell::RefCell;
use std::process;
use std::rc::Rc;
use std::time::Duration;

use armio_sdk::{Arm, Device, DeviceListener, Hub, Pose, WarmupState, XDirection};

#[derive(Default)]
struct PosePrinter {
    arm: Option<Arm>,
}

impl DeviceListener for PosePrinter {
    fn on_arm_sync(
        &mut self,
        _device: &Device,
        _timestamp: u64,
        arm: Arm,
        _x_direction: XDirection,
        _rotation_on_arm: f32,
        _warmup_state: WarmupState,
    ) {
        self.arm = Some(arm);
        println!("synced on the {arm:?} arm");
    }

    fn on_arm_unsync(&mut self, _device: &Device, _timestamp: u64) {
        self.arm = None;
        println!("arm lost");
    }

    fn on_pose(&mut self, device: &Device, _timestamp: u64, pose: Pose) {
        println!("pose: {pose}");

        if pose == Pose::FingersSpread {
            let _ = device.vibrate(armio_sdk::VibrationKind::Short);
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> armio_sdk::Result<()> {
    armio_sdk::logging::init_logging_from_env().expect("logging setup");

    let mut hub = Hub::new("com.example.hello-armio")?;

    println!("waiting for an armband...");
    let device = loop {
        if let Some(device) = hub.wait_for_device(Some(Duration::from_secs(10)))? {
            break device;
        }
        println!("still waiting; is the armband charged and nearby?");
    };
    println!("paired with {:?}", device.handle());

    hub.add_listener(Rc::new(RefCell::new(PosePrinter::default())));

    loop {
        // Dispatch at roughly 20 Hz; each call blocks for the window.
        hub.run(Duration::from_millis(50))?;
    }
}
