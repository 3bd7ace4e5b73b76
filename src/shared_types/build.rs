use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use web_host_core::{
    events::{ConfigEvent, MeasurementEvent, StatusEvent, WifiEvent},
    types::{ConnectionIndicator, MeasurementView, ScanState, SignalQuality},
    App, Startup, TimerOperation, TimerOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register component event enums to ensure all variants are traced
    gen.register_type::<ConfigEvent>()?;
    gen.register_type::<StatusEvent>()?;
    gen.register_type::<MeasurementEvent>()?;
    gen.register_type::<WifiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<Startup>()?;
    gen.register_type::<ConnectionIndicator>()?;
    gen.register_type::<MeasurementView>()?;
    gen.register_type::<ScanState>()?;
    gen.register_type::<SignalQuality>()?;
    gen.register_type::<TimerOperation>()?;
    gen.register_type::<TimerOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
