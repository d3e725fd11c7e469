#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rclinic::db::initialize::init_db;
use rclinic::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rclinic")
}

/// Create a unique test workbook path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclinic.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the workbook through the CLI (no config file is written)
pub fn init_cli_db(db_path: &str) {
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the workbook and book two appointments on the same day
pub fn init_db_with_data(db_path: &str) {
    init_cli_db(db_path);

    rcl()
        .args([
            "--db",
            db_path,
            "book",
            "Ana Souza",
            "2099-03-10",
            "09:00",
            "--contact",
            "11 99999-0000",
        ])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            db_path,
            "book",
            "Beatriz Lima",
            "2099-03-10",
            "10:00",
            "--reason",
            "Limpeza de pele",
        ])
        .assert()
        .success();
}

/// Open an initialized workbook through the library API
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    init_db(&conn).expect("init db");
    drop(conn);
    DbPool::new(&db_path).expect("open pool")
}

/// Minimal filled-in intake form
pub fn intake_yaml(name: &str, date: &str, time: &str, total: &str) -> String {
    format!(
        r#"identification:
  name: "{name}"
  birth_date: "01/02/1990"
  phone: "11 98888-7777"
  origin: "Indicação"
anamnesis:
  clinical:
    allergies: true
    epilepsy: true
  notes: "Alergia a dipirona"
body:
  sleep: "Ruim"
  measurements:
    weight: 62.5
    height: 1.65
  complaint: "Gordura localizada"
facial:
  sunscreen: true
  phototype: "III"
  lesions: ["Melasma", "Espinhas"]
  plan: "Peeling"
closing:
  date: "{date}"
  time: "{time}"
  treatment: "Drenagem"
  total: {total}
  payment: "PIX"
"#
    )
}
