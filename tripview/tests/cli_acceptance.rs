use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    trips: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");
        let trips = base.join("trips");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        seed_trip_fixtures(&trips);

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
            trips,
        }
    }

    fn trip(&self, name: &str) -> String {
        self.trips.join(name).to_string_lossy().into_owned()
    }

    fn write_config(&self, content: &str) {
        let dir = self.xdg_config.join("tripview");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("failed to write config");
    }
}

fn seed_trip_fixtures(target: &Path) {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tripview-core/tests/fixtures/trips");

    fs::create_dir_all(target).expect("failed to create trip fixture directory");
    for entry in fs::read_dir(&source).expect("missing trip fixtures") {
        let entry = entry.expect("failed to read fixture entry");
        fs::copy(entry.path(), target.join(entry.file_name())).expect("failed to copy fixture");
    }
}

fn command(env: &CliTestEnv, args: &[&str]) -> Command {
    let mut command = Command::new(PathBuf::from(assert_cmd::cargo::cargo_bin!("tripview")));
    command
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("RUST_LOG");
    command
}

fn run_bin(env: &CliTestEnv, args: &[&str]) -> Output {
    command(env, args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute tripview: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "tripview {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

#[test]
fn renders_full_trip_as_text() {
    let env = CliTestEnv::new();
    let path = env.trip("full-trip.json");
    let args = [path.as_str()];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Lisbon\n"), "unexpected output:\n{stdout}");
    assert!(stdout.contains("Hotel Recommendations"));
    assert!(stdout.contains("Price: $120 per night"));

    // Days keep payload order: day2 before day1
    let day2 = stdout.find("📅 Day 2").expect("day 2 missing");
    let day1 = stdout.find("📅 Day 1").expect("day 1 missing");
    assert!(day2 < day1);

    assert!(
        env.xdg_state.join("tripview").exists(),
        "log directory should be created under XDG_STATE_HOME"
    );
}

#[test]
fn renders_json_tree() {
    let env = CliTestEnv::new();
    let path = env.trip("empty-itinerary.json");
    let args = [path.as_str(), "--format", "json"];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let tree: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(tree["view"], "trip");
    assert_eq!(tree["itinerary"]["body"]["kind"], "empty");
}

#[test]
fn invalid_details_still_succeed_and_warn() {
    let env = CliTestEnv::new();
    let path = env.trip("invalid-details.json");
    let args = [path.as_str(), "--warnings"];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with("Lisbon\n"));
    assert!(!stdout.contains("Itinerary Overview"));
    assert!(
        stderr.contains("warning: failed to decode trip details"),
        "expected decode warning, got:\n{stderr}"
    );
    let log_dir = env.xdg_state.join("tripview");
    assert!(
        stderr.contains(&format!("details logged under {}", log_dir.display())),
        "expected log directory hint, got:\n{stderr}"
    );
}

#[test]
fn clean_trip_with_warnings_flag_prints_nothing_to_stderr() {
    let env = CliTestEnv::new();
    let path = env.trip("full-trip.json");
    let args = [path.as_str(), "--warnings"];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("details logged under"));
}

#[test]
fn missing_core_fields_print_fallback() {
    let env = CliTestEnv::new();
    let path = env.trip("missing-core.json");
    let args = [path.as_str()];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "No trip details available. Please try again.\n"
    );
}

#[test]
fn reads_stdin_and_fingerprints_deterministically() {
    let env = CliTestEnv::new();
    let content = fs::read_to_string(env.trip("full-trip.json")).expect("fixture");

    let mut fingerprints = Vec::new();
    for _ in 0..2 {
        let mut child = command(&env, &["-", "--fingerprint"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn tripview");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(content.as_bytes())
            .expect("failed to write stdin");
        let output = child.wait_with_output().expect("failed to wait for tripview");
        assert_success(&["-", "--fingerprint"], &output);
        fingerprints.push(String::from_utf8_lossy(&output.stdout).trim().to_string());
    }

    assert_eq!(fingerprints[0], fingerprints[1]);
    assert_eq!(fingerprints[0].len(), 64);
}

#[test]
fn config_overrides_placeholder_image() {
    let env = CliTestEnv::new();
    env.write_config("[render]\nhotel_image_url = \"https://img.example.com/hotel.png\"\n");
    let path = env.trip("full-trip.json");
    let args = [path.as_str()];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("[https://img.example.com/hotel.png]"));
}

#[test]
fn unknown_format_and_missing_file_fail() {
    let env = CliTestEnv::new();
    let path = env.trip("full-trip.json");

    let output = run_bin(&env, &[path.as_str(), "--format", "yaml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value 'yaml'"));

    // Rejected before any rendering, even when only the fingerprint is wanted
    let output = run_bin(&env, &[path.as_str(), "--format", "yaml", "--fingerprint"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        !env.xdg_state.join("tripview").exists(),
        "argument errors should fail before logging starts"
    );

    let missing = env.trip("nope.json");
    let output = run_bin(&env, &[missing.as_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn explicit_config_path_is_used() {
    let env = CliTestEnv::new();
    let config_path = env.trips.join("custom.toml");
    fs::write(
        &config_path,
        "[render]\nactivity_image_url = \"https://img.example.com/slot.png\"\n",
    )
    .expect("failed to write config");

    let path = env.trip("full-trip.json");
    let config_arg = config_path.to_string_lossy().into_owned();
    let args = [path.as_str(), "--config", config_arg.as_str()];

    let output = run_bin(&env, &args);
    assert_success(&args, &output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("[https://img.example.com/slot.png]"));
}
