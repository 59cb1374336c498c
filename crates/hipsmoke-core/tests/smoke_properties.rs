//! Observable behaviour of both tools through the public core API.

use std::cell::Cell;

use hipsmoke_core::{
    Arch, DeviceHandle, DeviceOrdinal, GlibcVersion, GpuRuntimePort, HipStatus, LibcInfo,
    PlatformInfo, PlatformProbePort, ProbeOutcome, RuntimeResult, run_device_probe,
    select_release_directory,
};

/// Simulated runtime with a single device and optional failing init.
struct SimulatedRuntime {
    total_bytes: u64,
    init_status: Option<HipStatus>,
    device_queries: Cell<u32>,
}

impl SimulatedRuntime {
    fn with_memory(total_bytes: u64) -> Self {
        Self {
            total_bytes,
            init_status: None,
            device_queries: Cell::new(0),
        }
    }

    fn failing_init() -> Self {
        Self {
            init_status: Some(HipStatus(100)),
            ..Self::with_memory(0)
        }
    }
}

impl GpuRuntimePort for SimulatedRuntime {
    fn runtime_version(&self) -> RuntimeResult<i32> {
        Ok(70_000_000)
    }

    fn init(&self, _flags: u32) -> RuntimeResult<()> {
        self.init_status.map_or(Ok(()), Err)
    }

    fn device_get(&self, ordinal: i32) -> RuntimeResult<DeviceHandle> {
        self.device_queries.set(self.device_queries.get() + 1);
        if ordinal == 0 {
            Ok(DeviceHandle(0))
        } else {
            Err(HipStatus(101))
        }
    }

    fn device_name(&self, _device: DeviceHandle, _max_len: usize) -> RuntimeResult<String> {
        Ok("Simulated GPU".to_string())
    }

    fn device_total_mem(&self, _device: DeviceHandle) -> RuntimeResult<u64> {
        Ok(self.total_bytes)
    }
}

struct FixedPlatform(PlatformInfo);

impl PlatformProbePort for FixedPlatform {
    fn detect(&self) -> PlatformInfo {
        self.0.clone()
    }
}

fn probe(runtime: &SimulatedRuntime, arg: Option<&str>) -> (u8, String) {
    let mut out = Vec::new();
    let code = match DeviceOrdinal::parse_arg(arg) {
        Ok(ordinal) => match run_device_probe(runtime, ordinal, &mut out) {
            Ok(outcome) => outcome.exit_code(),
            Err(err) => err.exit_code(),
        },
        Err(err) => hipsmoke_core::ProbeError::from(err).exit_code(),
    };
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn non_numeric_ordinal_exits_1() {
    let runtime = SimulatedRuntime::with_memory(0);
    for arg in ["gpu", "1e3", "--", "0.5", "one"] {
        let (code, out) = probe(&runtime, Some(arg));
        assert_eq!(code, 1, "argument {arg:?}");
        assert!(out.is_empty());
    }
}

#[test]
fn absent_or_negative_ordinal_exits_0_even_when_init_fails() {
    for runtime in [SimulatedRuntime::with_memory(0), SimulatedRuntime::failing_init()] {
        for arg in [None, Some("-1"), Some("-7")] {
            let (code, out) = probe(&runtime, arg);
            assert_eq!(code, 0);
            assert!(out.contains("Not testing on GPU device"));
        }
        assert_eq!(runtime.device_queries.get(), 0);
    }
}

#[test]
fn reported_mib_is_truncating_division() {
    for total in [0_u64, 1_048_575, 1_048_576, 8_589_934_591, 68_702_699_520] {
        let runtime = SimulatedRuntime::with_memory(total);
        let mut out = Vec::new();
        let outcome = run_device_probe(&runtime, DeviceOrdinal::new(0), &mut out).unwrap();

        let expected = total / 1_048_576;
        let report = outcome.report().expect("device was tested");
        assert_eq!(report.total_memory_mib, expected);
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with(&format!("Device memory: {expected} MiB\n")));
    }
}

#[test]
fn missing_device_exits_4() {
    let runtime = SimulatedRuntime::with_memory(1);
    let (code, _) = probe(&runtime, Some("3"));
    assert_eq!(code, 4);
}

#[test]
fn skipped_outcome_keeps_raw_ordinal() {
    let runtime = SimulatedRuntime::with_memory(0);
    let mut out = Vec::new();
    let outcome = run_device_probe(&runtime, DeviceOrdinal::new(-2), &mut out).unwrap();
    assert_eq!(
        outcome,
        ProbeOutcome::Skipped {
            runtime_version: 70_000_000,
            ordinal: Some(-2)
        }
    );
}

#[test]
fn selector_properties() {
    let cases = [
        ((2, 30), Ok("linux_glibc_2_28_x86_64")),
        ((2, 20), Err("unsupported glibc minor version 2.20")),
        ((3, 1), Err("unsupported glibc version 3.1")),
    ];

    for ((major, minor), expected) in cases {
        let probe = FixedPlatform(PlatformInfo {
            libc: LibcInfo::Glibc(GlibcVersion::new(major, minor)),
            arch: Arch::X86_64,
        });
        let result = select_release_directory(&probe.detect());
        match expected {
            Ok(dir) => assert_eq!(result.unwrap().to_string(), dir),
            Err(msg) => {
                let err = result.unwrap_err();
                assert_eq!(err.to_string(), msg);
                assert_eq!(err.exit_code(), 1);
            }
        }
    }
}
