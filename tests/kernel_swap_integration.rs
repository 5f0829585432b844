//! Integration tests for the NVIDIA kernel swap

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use hostkit::exec::RecordingRunner;
use hostkit::kernel_swap::{resolve_staged_packages, swap_kernel, KernelSwapError, SwapOutcome};
use hostkit::KernelSwapConfig;

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

const STAGED: &[&str] = &[
    "kernel-6.9.7-200.fc40.x86_64.rpm",
    "kernel-core-6.9.7-200.fc40.x86_64.rpm",
    "kernel-modules-6.9.7-200.fc40.x86_64.rpm",
    "kernel-modules-core-6.9.7-200.fc40.x86_64.rpm",
    "kernel-modules-extra-6.9.7-200.fc40.x86_64.rpm",
    "kernel-devel-6.9.7-200.fc40.x86_64.rpm",
];

fn unique_test_dir() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = PathBuf::from(format!("/tmp/hostkit-test-{}-{}", std::process::id(), id));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn staged_config(files: &[&str]) -> KernelSwapConfig {
    let dir = unique_test_dir();
    for name in files {
        fs::write(dir.join(name), b"rpm").unwrap();
    }
    KernelSwapConfig {
        staged_dir: dir,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_unset_flag_issues_no_commands() {
    let config = staged_config(STAGED);
    let runner = RecordingRunner::new();

    let outcome = swap_kernel(&runner, &config, None).await.unwrap();

    assert_eq!(outcome, SwapOutcome::Skipped);
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_empty_flag_issues_no_commands() {
    let config = staged_config(STAGED);
    let runner = RecordingRunner::new();

    let outcome = swap_kernel(&runner, &config, Some("")).await.unwrap();

    assert_eq!(outcome, SwapOutcome::Skipped);
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_empty_flag_ignores_missing_staged_dir() {
    let config = KernelSwapConfig {
        staged_dir: PathBuf::from("/nonexistent/hostkit-kernel-rpms"),
        ..Default::default()
    };
    let runner = RecordingRunner::new();

    assert_eq!(swap_kernel(&runner, &config, None).await.unwrap(), SwapOutcome::Skipped);
}

#[tokio::test]
async fn test_removal_precedes_install_for_any_flag_value() {
    for flag in ["open", "closed", "1", "nvidia-open"] {
        let config = staged_config(STAGED);
        let runner = RecordingRunner::new();

        swap_kernel(&runner, &config, Some(flag)).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2, "flag {}", flag);

        let removal = &calls[0];
        assert_eq!(removal.program, "rpm");
        assert_eq!(&removal.args[..2], &["--erase", "--nodeps"]);
        for package in &config.packages {
            assert!(removal.args.contains(package), "{} not removed", package);
        }

        assert_eq!(calls[1].program, "rpm-ostree");
        assert_eq!(calls[1].args[0], "install");
    }
}

#[tokio::test]
async fn test_installs_only_matching_staged_files() {
    let config = staged_config(STAGED);
    let runner = RecordingRunner::new();

    let outcome = swap_kernel(&runner, &config, Some("open")).await.unwrap();

    let SwapOutcome::Swapped { installed, .. } = outcome else {
        panic!("expected a swap");
    };
    let names: Vec<String> = installed
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec![
            "kernel-6.9.7-200.fc40.x86_64.rpm",
            "kernel-core-6.9.7-200.fc40.x86_64.rpm",
            "kernel-modules-6.9.7-200.fc40.x86_64.rpm",
            "kernel-modules-core-6.9.7-200.fc40.x86_64.rpm",
            "kernel-modules-extra-6.9.7-200.fc40.x86_64.rpm",
        ]
    );
    assert!(!names.iter().any(|n| n.starts_with("kernel-devel")));
    assert_eq!(runner.calls()[1].args.len(), 1 + installed.len());
}

#[tokio::test]
async fn test_removal_failure_stops_before_install() {
    let config = staged_config(STAGED);
    let runner = RecordingRunner::new().failing("rpm");

    let err = swap_kernel(&runner, &config, Some("open")).await.unwrap_err();

    assert!(matches!(err, KernelSwapError::Exec(_)));
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "rpm");
}

#[tokio::test]
async fn test_install_failure_is_an_error() {
    let config = staged_config(STAGED);
    let runner = RecordingRunner::new().failing("rpm-ostree");

    let err = swap_kernel(&runner, &config, Some("open")).await.unwrap_err();

    assert!(matches!(err, KernelSwapError::Exec(_)));
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn test_missing_modules_fails_before_removal() {
    let config = staged_config(&[
        "kernel-6.9.7-200.fc40.x86_64.rpm",
        "kernel-core-6.9.7-200.fc40.x86_64.rpm",
    ]);
    let runner = RecordingRunner::new();

    let err = swap_kernel(&runner, &config, Some("open")).await.unwrap_err();

    match err {
        KernelSwapError::NoStagedPackages { pattern, .. } => {
            assert_eq!(pattern, "kernel-modules-*.rpm");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(runner.calls().is_empty());
}

#[test]
fn test_resolve_keeps_pattern_order() {
    let config = staged_config(&[
        "kernel-modules-6.9.7.rpm",
        "kernel-core-6.9.7.rpm",
        "kernel-6.9.7.rpm",
    ]);

    let files = resolve_staged_packages(&config.staged_dir, &config.patterns).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec!["kernel-6.9.7.rpm", "kernel-core-6.9.7.rpm", "kernel-modules-6.9.7.rpm"]
    );
}
