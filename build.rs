use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Vector units that change the lane width chosen for the kernels
#[derive(PartialEq, Eq, Debug)]
struct VectorUnit {
    name: &'static str,
    register_bits: usize,
    detected: bool,
}

impl VectorUnit {
    // Widest register first (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx512f" => 0,
            "avx2" => 1,
            "neon" => 2,
            "sse4_1" => 3,
            _ => usize::MAX,
        }
    }

    fn units() -> Vec<VectorUnit> {
        vec![
            VectorUnit {
                name: "sse4_1",
                register_bits: 128,
                detected: false,
            },
            VectorUnit {
                name: "avx2",
                register_bits: 256,
                detected: false,
            },
            VectorUnit {
                name: "avx512f",
                register_bits: 512,
                detected: false,
            },
            VectorUnit {
                name: "neon",
                register_bits: 128,
                detected: false,
            },
        ]
    }
}

impl Ord for VectorUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for VectorUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait VectorUnitDetector {
    fn detect(&self, units: &mut [VectorUnit]);
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl VectorUnitDetector for LinuxDetector {
    fn detect(&self, units: &mut [VectorUnit]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for unit in units.iter_mut() {
                // aarch64 kernels report NEON as "asimd"
                unit.detected = match unit.name {
                    "neon" => contents.contains("asimd") || contents.contains(" neon"),
                    name => contents.contains(name),
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl VectorUnitDetector for MacOSDetector {
    fn detect(&self, units: &mut [VectorUnit]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for unit in units.iter_mut() {
                unit.detected = match unit.name {
                    "avx512f" => contents.contains("hw.optional.avx512f: 1"),
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_1" => contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

fn detectors() -> Vec<Box<dyn VectorUnitDetector>> {
    vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
}

fn main() {
    println!("cargo::rustc-check-cfg=cfg(wide_lanes)");
    println!("cargo:rerun-if-changed=build.rs");

    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    // Cross builds keep the 128-bit defaults
    if host != target {
        return;
    }

    let mut units = VectorUnit::units();
    if let Some(detector) = detectors().into_iter().find(|d| d.is_applicable()) {
        detector.detect(&mut units);
    }

    units.sort();

    let register_bits = units
        .iter()
        .find(|unit| unit.detected)
        .map(|unit| unit.register_bits)
        .unwrap_or(128);

    if register_bits >= 256 {
        println!("cargo:rustc-cfg=wide_lanes");
    }
}
