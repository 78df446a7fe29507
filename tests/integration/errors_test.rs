//! Failure-path tests: missing source, unreadable source, unwritable results

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn correos() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("correos"))
}

/// Missing input reports the path and writes nothing
#[test]
fn test_missing_source() {
    let temp = TempDir::new().unwrap();

    correos()
        .arg("no_existe.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No se encontró el archivo 'no_existe.txt'"));

    assert!(!temp.path().join("correos_validos.txt").exists());
    assert!(!temp.path().join("correos_invalidos.txt").exists());
}

/// Input that is not UTF-8 is a read failure and writes nothing
#[test]
fn test_invalid_utf8_source() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), [0xc3, 0x28, 0x0a]).unwrap();

    correos()
        .arg("in.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Error al leer el archivo"));

    assert!(!temp.path().join("correos_validos.txt").exists());
}

/// A directory given as input is a read failure
#[test]
fn test_directory_source() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("carpeta")).unwrap();

    correos()
        .arg("carpeta")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(4);
}

/// The invalid file cannot be written: the valid file stays, exit is non-zero
#[test]
fn test_write_failure_keeps_first_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "a@b.co\nnope\n").unwrap();
    fs::create_dir(temp.path().join("correos_invalidos.txt")).unwrap();

    correos()
        .arg("in.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Error al guardar los resultados"))
        .stderr(predicate::str::contains("correos_invalidos.txt"))
        .stdout(predicate::str::contains("Se encontraron").not());

    assert_eq!(fs::read_to_string(temp.path().join("correos_validos.txt")).unwrap(), "a@b.co");
}
