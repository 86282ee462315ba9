use std::path::Path;
use std::process::{Command, Output};

use ictgen::config::BlockConfig;
use ictgen::validate::validate_args;
use ictgen::{generate, NfsError};

fn ictgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ictgen"))
        .args(args)
        .output()
        .expect("failed to run ictgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_generate_staircase() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("staircase.txt");
    let params = validate_args(&["1", "2", path.to_str().unwrap()])?;

    let lines = generate(&params, &BlockConfig::default())?;
    assert_eq!(lines, 5 + 4);

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines[0], "%Partition%\tLogical_Physical\tLogical_Physical");
    assert_eq!(
        &lines[5..],
        &[
            "BLK_1_IN\tBLOCK_A_IN",
            "BLK_1_OUT\tBLOCK_A_OUT",
            "BLK_2_IN\t\tBLOCK_A_IN",
            "BLK_2_OUT\t\tBLOCK_A_OUT",
        ]
    );
    assert!(contents.ends_with('\n'));
    Ok(())
}

#[test]
fn test_generate_large_range() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("large.nfs");
    let params = validate_args(&["0", "4096", path.to_str().unwrap()])?;

    generate(&params, &BlockConfig::default())?;

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 5 + 4097 * 2);
    assert!(lines[..5].iter().all(|l| l.split('\t').count() == 4098));
    assert_eq!(lines.last().unwrap().matches('\t').count(), 4097);
    Ok(())
}

#[test]
fn test_generate_missing_directory() {
    let params = validate_args(&["0", "1", "/nonexistent/ictgen/out.nfs"]).unwrap();
    let err = generate(&params, &BlockConfig::default()).unwrap_err();
    assert!(matches!(err, NfsError::Io { .. }));
}

#[test]
fn test_cli_success_uses_legacy_status() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cli.nfs");

    let output = ictgen(&["--quiet", "0", "0", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("NFS file successfully created!"));
    assert_eq!(
        std::fs::read_to_string(&path)?.lines().last(),
        Some("BLK_0_OUT\tBLOCK_A_OUT")
    );
    Ok(())
}

#[test]
fn test_cli_posix_status() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("posix.nfs");

    let output = ictgen(&[
        "--quiet",
        "--exit-codes",
        "posix",
        "0",
        "3",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let output = ictgen(&["--quiet", "--exit-codes", "posix", "3", "0", "x.nfs"]);
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_cli_options_after_inputs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("trailing.nfs");

    let output = ictgen(&["0", "1", path.to_str().unwrap(), "--quiet", "--exit-codes", "posix"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("NFS file successfully created!"));
    assert!(!out.contains("Tasks:"));
    assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 5 + 2 * 2);

    let output = ictgen(&["3", "0", "x.nfs", "--exit-codes", "posix", "-q"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Minimum number needs to be smaller"));
    Ok(())
}

#[test]
fn test_cli_unknown_option() {
    let output = ictgen(&["--bogus", "0", "1", "x.nfs"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--bogus"));
    assert!(stdout(&output).contains("Command syntax - ictgen"));
    assert!(!Path::new("x.nfs").exists());
}

#[test]
fn test_cli_failures() {
    let cases: &[(&[&str], &str)] = &[
        (&["1", "2"], "You need to provide three arguments!"),
        (&["a", "2", "out.nfs"], "The arguments must be an integer."),
        (&["3", "2", "out.nfs"], "Minimum number needs to be smaller"),
        (&["-1", "2", "out.nfs"], "Arguments need to be greater than 0!"),
        (&["0", "5000", "out.nfs"], "Too many blocks"),
        (&["0", "1", " "], "You need to specify a path!"),
        (&["0", "1", "out.csv"], "ending in .txt or .nfs"),
    ];

    for (args, message) in cases {
        let mut full = vec!["--quiet"];
        full.extend_from_slice(args);
        let output = ictgen(&full);
        let out = stdout(&output);
        assert_eq!(output.status.code(), Some(0), "args: {args:?}");
        assert!(out.contains(message), "args: {args:?}, stdout: {out}");
        assert!(out.contains("Command syntax - ictgen"), "args: {args:?}");
        assert!(!out.contains("successfully created"));
    }
    assert!(!Path::new("out.nfs").exists());
}

#[test]
fn test_cli_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("smb.toml");
    std::fs::write(
        &config,
        r#"
header_values = ["Logical_Physical", "True", "False", "SMB_wCRFP", "SMB_wCRFP.1"]
netlist_pins = ["ALT", "RFI1"]
netlist_nets = ["ALT", "RFIN_1"]
"#,
    )?;
    let path = dir.path().join("smb.nfs");

    let output = ictgen(&[
        "--quiet",
        "--config",
        config.to_str().unwrap(),
        "7",
        "8",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));

    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.contains("%Symbol Name%\tSMB_wCRFP.1\tSMB_wCRFP.1\n"));
    assert!(contents.ends_with("BLK_8_RFIN_1\t\tRFI1\n"));
    Ok(())
}

#[test]
fn test_cli_mismatched_config_keeps_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "netlist_nets = [\"IN\"]\n")?;
    let path = dir.path().join("keep.nfs");
    std::fs::write(&path, "previous\n")?;

    let output = ictgen(&[
        "--quiet",
        "-c",
        config.to_str().unwrap(),
        "0",
        "1",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("array size mismatch"));
    assert_eq!(std::fs::read_to_string(&path)?, "previous\n");
    Ok(())
}
