//! Build script for portcullis-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates gate.toml at compile time
//! - Bakes the validated configuration into the binary as `GATE_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use portcullis_core::config::ellipsize;
use portcullis_core::GateConfig;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate gate.toml and write it out as a Rust constant
fn generate_config() {
    // Re-run if gate.toml changes
    println!("cargo:rerun-if-changed=gate.toml");

    let config_path = Path::new("gate.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: gate.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a gate.toml configuration file.           ║\n\
            ║  Please create one in the portcullis-firmware directory.         ║\n\
            ║  Every key is optional; an empty file selects the defaults.      ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read gate.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML into the typed configuration
    let config: GateConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid gate.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Check values the tasks cannot run with
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: gate.toml validation failed                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("gate_config.rs"), render_config(&config)).unwrap();

    println!("cargo:warning=gate.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = match ellipsize(line, 64) {
                (text, true) => format!("{}...", text),
                (text, false) => text.to_string(),
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the configuration as a `const` item
fn render_config(config: &GateConfig) -> String {
    let t = &config.timing;
    let m = &config.motion;
    let s = &config.servo;

    format!(
        "/// Gate configuration parsed from gate.toml\n\
         pub const GATE_CONFIG: GateConfig = GateConfig {{\n\
         \x20   timing: TimingConfig {{\n\
         \x20       lock_timeout_ms: {},\n\
         \x20       settle_ms: {},\n\
         \x20       blink_half_period_ms: {},\n\
         \x20       indicator_period_ms: {},\n\
         \x20       alert_idle_ms: {},\n\
         \x20       debounce_ms: {},\n\
         \x20   }},\n\
         \x20   motion: MotionProfile {{\n\
         \x20       closed_deg: {},\n\
         \x20       intermediate_deg: {},\n\
         \x20       open_deg: {},\n\
         \x20       step_interval_ms: {},\n\
         \x20   }},\n\
         \x20   servo: ServoCalibration {{\n\
         \x20       frequency_hz: {},\n\
         \x20       min_pulse_us: {},\n\
         \x20       max_pulse_us: {},\n\
         \x20       full_scale_deg: {},\n\
         \x20   }},\n\
         }};\n",
        t.lock_timeout_ms,
        t.settle_ms,
        t.blink_half_period_ms,
        t.indicator_period_ms,
        t.alert_idle_ms,
        t.debounce_ms,
        m.closed_deg,
        m.intermediate_deg,
        m.open_deg,
        m.step_interval_ms,
        s.frequency_hz,
        s.min_pulse_us,
        s.max_pulse_us,
        s.full_scale_deg,
    )
}
