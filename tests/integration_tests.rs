mod common;
use common::{init_cli_db, init_db_with_data, intake_yaml, rcl, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_workbook() {
    let db_path = setup_test_db("init_creates_workbook");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Workbook initialized"));

    assert!(Path::new(&db_path).exists());

    // second run is a no-op
    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already up to date"));

    rcl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_missing_workbook_is_a_connectivity_error() {
    let db_path = setup_test_db("missing_workbook");

    rcl()
        .args(["--db", &db_path, "agenda"])
        .assert()
        .failure()
        .stderr(contains("workbook not found"))
        .stderr(contains("rclinic init"));
}

#[test]
fn test_book_and_agenda() {
    let db_path = setup_test_db("book_and_agenda");
    init_db_with_data(&db_path);

    rcl()
        .args(["--db", &db_path, "agenda", "--period", "2099-03"])
        .assert()
        .success()
        .stdout(contains("Ana Souza"))
        .stdout(contains("Beatriz Lima"))
        .stdout(contains("2 appointment(s)"));

    rcl()
        .args(["--db", &db_path, "agenda", "--client", "ana souza"])
        .assert()
        .success()
        .stdout(contains("Agenda of ana souza"))
        .stdout(contains("1 appointment(s)"));
}

#[test]
fn test_book_conflict_fails_and_writes_nothing() {
    let db_path = setup_test_db("book_conflict");
    init_db_with_data(&db_path);

    rcl()
        .args(["--db", &db_path, "book", "Carla", "2099-03-10", "09:30"])
        .assert()
        .failure()
        .stderr(contains("already taken by Ana Souza"))
        .stderr(contains("Nothing was written"));

    rcl()
        .args(["--db", &db_path, "agenda", "--period", "2099-03-10"])
        .assert()
        .success()
        .stdout(contains("2 appointment(s)"));
}

#[test]
fn test_book_rejects_bad_input() {
    let db_path = setup_test_db("book_bad_input");
    init_cli_db(&db_path);

    rcl()
        .args(["--db", &db_path, "book", "Ana", "2000-01-01", "09:00"])
        .assert()
        .failure()
        .stderr(contains("past"));

    rcl()
        .args(["--db", &db_path, "book", "Ana", "2099-13-01", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rcl()
        .args(["--db", &db_path, "book", "Ana", "2099-03-10", "9h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_intake_from_file_then_update() {
    let db_path = setup_test_db("intake_from_file");
    init_db_with_data(&db_path);

    let form = temp_out("intake_from_file", "yaml");
    fs::write(&form, intake_yaml("Ana Souza", "2099-03-10", "09:00", "350")).unwrap();

    rcl()
        .args(["--db", &db_path, "intake", "--file", &form])
        .assert()
        .success()
        .stdout(contains("Updated evaluation of Ana Souza"))
        .stdout(contains("R$ 350,00"));

    let form2 = temp_out("intake_from_file_new", "yaml");
    fs::write(&form2, intake_yaml("Daniela Rocha", "2099-03-11", "15:00", "120")).unwrap();

    rcl()
        .args(["--db", &db_path, "intake", "--file", &form2])
        .assert()
        .success()
        .stdout(contains("Saved evaluation of Daniela Rocha"));

    rcl()
        .args(["--db", &db_path, "agenda", "--period", "2099-03"])
        .assert()
        .success()
        .stdout(contains("Completo"))
        .stdout(contains("3 appointment(s)"));
}

#[test]
fn test_intake_rejects_malformed_form() {
    let db_path = setup_test_db("intake_malformed");
    init_cli_db(&db_path);

    let form = temp_out("intake_malformed", "yaml");
    fs::write(&form, "identification:\n  nome: Ana\n").unwrap();

    rcl()
        .args(["--db", &db_path, "intake", "--file", &form])
        .assert()
        .failure()
        .stderr(contains("Invalid form"));
}

#[test]
fn test_intake_template() {
    rcl()
        .args(["intake", "--template"])
        .assert()
        .success()
        .stdout(contains("identification:"))
        .stdout(contains("closing:"))
        .stdout(contains("# payment: PIX | Cartão | Dinheiro"));
}

#[test]
fn test_expense_and_cashflow() {
    let db_path = setup_test_db("expense_and_cashflow");
    init_cli_db(&db_path);

    let form = temp_out("expense_and_cashflow", "yaml");
    fs::write(&form, intake_yaml("Ana Souza", "2099-03-10", "09:00", "1500")).unwrap();
    rcl()
        .args(["--db", &db_path, "intake", "--file", &form])
        .assert()
        .success();

    rcl()
        .args([
            "--db", &db_path, "expense", "1.234,56", "--desc", "Aluguel", "--category", "rent",
            "--date", "2099-03-01",
        ])
        .assert()
        .success()
        .stdout(contains("R$ 1.234,56"))
        .stdout(contains("Aluguel"));

    rcl()
        .args(["--db", &db_path, "expense", "-10", "--date", "2099-03-02"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    rcl()
        .args(["--db", &db_path, "expenses", "--period", "2099-03"])
        .assert()
        .success()
        .stdout(contains("Total: R$ 1.234,56"));

    rcl()
        .args(["--db", &db_path, "cashflow", "--month", "3", "--year", "2099"])
        .assert()
        .success()
        .stdout(contains("Cash flow March 2099"))
        .stdout(contains("1.500,00"))
        .stdout(contains("1.234,56"))
        .stdout(contains("265,44"));

    rcl()
        .args(["--db", &db_path, "cashflow", "--month", "13", "--year", "2099"])
        .assert()
        .failure();
}

#[test]
fn test_print_sheet_html_and_pdf() {
    let db_path = setup_test_db("print_sheet");
    init_cli_db(&db_path);

    let form = temp_out("print_sheet", "yaml");
    fs::write(&form, intake_yaml("Ana Souza", "2099-03-10", "09:00", "350")).unwrap();
    rcl()
        .args(["--db", &db_path, "intake", "--file", &form])
        .assert()
        .success();

    let html = temp_out("print_sheet", "html");
    rcl()
        .args(["--db", &db_path, "print", "--client", "ana souza", "--file", &html])
        .assert()
        .success()
        .stdout(contains("written to"));

    let page = fs::read_to_string(&html).unwrap();
    assert!(page.contains("FICHA DE AVALIAÇÃO ESTÉTICA"));
    assert!(page.contains("Ana Souza"));
    assert!(page.contains("Alergia"));
    assert!(page.contains("Drenagem"));

    let pdf = temp_out("print_sheet", "pdf");
    rcl()
        .args([
            "--db", &db_path, "print", "--client", "Ana Souza", "--date", "10/03/2099", "--format",
            "pdf", "--file", &pdf,
        ])
        .assert()
        .success();
    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));

    rcl()
        .args(["--db", &db_path, "print", "--client", "Nobody", "--file", &html])
        .assert()
        .failure()
        .stderr(contains("No records found"));

    rcl()
        .args(["--db", &db_path, "print", "--clients"])
        .assert()
        .success()
        .stdout(contains("Ana Souza"));
}

#[test]
fn test_photo_attach() {
    let db_path = setup_test_db("photo_cli");
    init_db_with_data(&db_path);

    let pic = temp_out("photo_cli", "png");
    fs::write(&pic, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();

    rcl()
        .args(["--db", &db_path, "photo", "--client", "Beatriz Lima", "--file", &pic])
        .assert()
        .success()
        .stdout(contains("attached to Beatriz Lima"));

    let html = temp_out("photo_cli", "html");
    rcl()
        .args(["--db", &db_path, "print", "--client", "Beatriz Lima", "--file", &html])
        .assert()
        .success();
    assert!(fs::read_to_string(&html).unwrap().contains("data:image/png;base64,"));
}

#[test]
fn test_import_csv() {
    let db_path = setup_test_db("import_cli");
    init_cli_db(&db_path);

    let csv = temp_out("import_cli", "csv");
    fs::write(
        &csv,
        "Data,Descricao,Categoria,Valor\n01/03/2099,Aluguel,Aluguel,\"1.500,00\"\n02/03/2099,Luz,,\"89,90\"\n",
    )
    .unwrap();

    rcl()
        .args(["--db", &db_path, "import", "--sheet", "despesas", "--file", &csv, "--dry-run"])
        .assert()
        .success()
        .stdout(contains("Dry run"));

    rcl()
        .args(["--db", &db_path, "import", "--sheet", "despesas", "--file", &csv])
        .assert()
        .success()
        .stdout(contains("2 imported"));

    rcl()
        .args(["--db", &db_path, "expenses", "--period", "2099-03"])
        .assert()
        .success()
        .stdout(contains("Total: R$ 1.589,90"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_cli");
    init_db_with_data(&db_path);

    let dest = temp_out("backup_cli", "sqlite");
    let zip = temp_out("backup_cli", "zip");

    rcl()
        .args(["--db", &db_path, "backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success();

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&dest).exists());

    rcl()
        .args(["--db", &db_path, "backup", "--file", &db_path])
        .assert()
        .failure()
        .stderr(contains("workbook itself"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_cli");
    init_db_with_data(&db_path);

    rcl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Booked Ana Souza"));

    rcl()
        .args(["--db", &db_path, "log", "--op", "book"])
        .assert()
        .success()
        .stdout(contains("Booked Beatriz Lima"));
}

#[test]
fn test_config_print_and_db_info() {
    let db_path = setup_test_db("config_print");
    init_db_with_data(&db_path);

    rcl()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("slot_minutes: 60"))
        .stdout(contains(db_path.as_str()));

    rcl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("agendamentos"));
}
