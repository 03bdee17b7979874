//! Stream raw EMG data from the first paired armband.
//!
//! Requires the native core library: `cargo run --features native --example
//! emg_stream`.

use std::cell::RefCell;
use std::process;
use std::rc::Rc;
use std::time::Duration;

use armio_sdk::{Device, DeviceListener, EmgMode, Hub, EMG_SENSOR_COUNT};

struct EmgPrinter;

impl DeviceListener for EmgPrinter {
    fn on_emg_data(&mut self, _device: &Device, timestamp: u64, emg: [i8; EMG_SENSOR_COUNT]) {
        let row: Vec<String> = emg.iter().map(|sample| format!("{sample:4}")).collect();
        println!("{timestamp} [{}]", row.join(" "));
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> armio_sdk::Result<()> {
    let mut hub = Hub::new("com.example.emg-stream")?;

    println!("waiting for an armband...");
    let device = hub
        .wait_for_device(None)?
        .expect("unbounded wait only returns with a device");

    device.set_emg_mode(EmgMode::Enabled)?;

    hub.add_listener(Rc::new(RefCell::new(EmgPrinter)));

    loop {
        hub.run(Duration::from_millis(20))?;
    }
}
