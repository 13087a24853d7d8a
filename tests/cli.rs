use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn lirik_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lirik"));
    cmd.env_remove("LIRIK_THEME").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(lirik_command().args(args).output()?)
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Result<Output, Box<dyn Error>> {
    let mut child = lirik_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn cli_encrypt_decrypt_via_stdin() -> Result<(), Box<dyn Error>> {
    let plain = "Baris satu.\nBaris dua.\nBaris tiga.";

    let enc = run_with_stdin(&["encrypt", "--key", "KUNCI", "--pantun"], plain)?;
    assert!(
        enc.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&enc.stderr)
    );
    let lyric = String::from_utf8(enc.stdout)?;
    assert_eq!(lyric.lines().count(), 4, "pantun should have four lines");

    let dec = run_with_stdin(&["decrypt", "--key", "KUNCI"], &lyric)?;
    assert!(
        dec.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&dec.stderr)
    );
    assert_eq!(String::from_utf8(dec.stdout)?, plain);

    Ok(())
}

#[test]
fn cli_caesar_with_inline_text_and_theme_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let theme = dir.path().join("theme.json");
    let lyric_file = dir.path().join("lyric.txt");

    // Same words as the bundled theme, different name
    let tokens: serde_json::Map<String, serde_json::Value> = lirik::Codebook::default_theme()?
        .entries()
        .map(|(s, w)| (s.to_string(), serde_json::Value::from(w)))
        .collect();
    let config = serde_json::json!({
        "name": "uji",
        "alphabet": "base64",
        "tokens": tokens,
    });
    fs::write(&theme, serde_json::to_vec(&config)?)?;

    let plain = "1234567890 -- tetap utuh, non-alfabet.";
    let theme_arg = theme.to_str().ok_or("non-utf8 path")?;
    let enc = run(&["encrypt", "--algo", "caesar", "--key", "123", "--theme", theme_arg, plain])?;
    assert!(enc.status.success(), "{}", String::from_utf8_lossy(&enc.stderr));
    fs::write(&lyric_file, &enc.stdout)?;

    let dec = run(&[
        "decrypt",
        "--algo",
        "caesar",
        "--key",
        "123",
        "--theme",
        theme_arg,
        "--input",
        lyric_file.to_str().ok_or("non-utf8 path")?,
    ])?;
    assert!(dec.status.success(), "{}", String::from_utf8_lossy(&dec.stderr));
    assert_eq!(String::from_utf8(dec.stdout)?, plain);

    Ok(())
}

#[test]
fn cli_decrypt_unknown_word_fails() -> Result<(), Box<dyn Error>> {
    let out = run(&["decrypt", "--key", "GARUDA", "cahaya bukankata"])?;
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr)?;
    assert!(stderr.contains("bukankata"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn cli_rejects_unknown_algorithm() -> Result<(), Box<dyn Error>> {
    let out = run(&["encrypt", "--algo", "rot13", "--key", "x", "teks"])?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn cli_rejects_incomplete_theme() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let theme = dir.path().join("bad.json");
    fs::write(
        &theme,
        r#"{"name":"kurang","alphabet":"base64","tokens":{"A":"satu"}}"#,
    )?;
    let out = run(&["info", "--theme", theme.to_str().ok_or("non-utf8 path")?])?;
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)?.contains("missing mapping"));
    Ok(())
}

#[test]
fn cli_self_test_and_info() -> Result<(), Box<dyn Error>> {
    let test = run(&["test"])?;
    assert!(test.status.success(), "{}", String::from_utf8_lossy(&test.stderr));
    assert!(String::from_utf8(test.stdout)?.contains("Self-test OK"));

    let info = run(&["info"])?;
    let stdout = String::from_utf8(info.stdout)?;
    assert!(stdout.contains("Name: default_codebook_id"));
    assert!(stdout.contains("Fingerprint: "));
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let out = run(&["--version"])?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.starts_with("lirik "), "unexpected version line: {}", stdout);
    assert!(stdout.contains("build"));
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let out = lirik_command().output()?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("encrypt"));
    assert!(stdout.contains("decrypt"));
    Ok(())
}
