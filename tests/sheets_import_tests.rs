mod common;
use chrono::NaiveTime;
use common::open_pool;
use rclinic::config::Config;
use rclinic::core::import::{ImportLogic, appointment_from_row, expense_from_row};
use rclinic::core::print::EvaluationSheet;
use rclinic::db::expenses::load_expenses;
use rclinic::db::queries::load_appointments;
use rclinic::models::Status;
use rclinic::sheets::{APPOINTMENTS, EXPENSES, SheetTable};

const LEGACY_AGENDA: &str = "\
Nome_Cliente,Data,Hora,Status,Orcamento,Coluna_Velha
Ana Souza,10/03/2099,09:00,Completo,Trat:Drenagem | Pag:PIX | Valor: R$ 150,
Beatriz Lima,2099-03-10,,Agendado,,x
,,,,,
Carla,31/02/2099,10:00,Agendado,,
";

#[test]
fn test_columns_are_repaired_by_header_name() {
    let table = SheetTable::read(LEGACY_AGENDA.as_bytes(), APPOINTMENTS).unwrap();

    assert_eq!(table.len(), 3);
    assert!(table.warnings.iter().any(|w| w.contains("'Contato'")));
    assert!(table.warnings.iter().any(|w| w.contains("'Coluna_Velha'")));

    let first = table.iter().next().unwrap();
    assert_eq!(first.get("Nome_Cliente"), "Ana Souza");
    assert_eq!(first.get("Data"), "10/03/2099");
    assert_eq!(first.get("Contato"), "");
    assert_eq!(first.get("NaoExiste"), "");
    assert_eq!(table.rows[0].len(), APPOINTMENTS.columns.len());
}

#[test]
fn test_missing_key_column_gives_empty_table() {
    let table = SheetTable::read("Descricao,Categoria\nLuz,Contas\n".as_bytes(), EXPENSES).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.warnings.len(), 1);
    assert!(table.warnings[0].contains("'Valor'"));
}

#[test]
fn test_row_conversion() {
    let table = SheetTable::read(LEGACY_AGENDA.as_bytes(), APPOINTMENTS).unwrap();
    let rows: Vec<_> = table.iter().collect();

    let ana = appointment_from_row(&rows[0], 60).unwrap();
    assert_eq!(ana.status, Status::Complete);
    assert_eq!(ana.budget_cents, Some(15000));
    assert_eq!(ana.personal_data, "-");

    let bia = appointment_from_row(&rows[1], 45).unwrap();
    assert_eq!(bia.time, NaiveTime::MIN);
    assert_eq!(bia.duration_min, 45);
    assert_eq!(bia.budget_cents, None);

    assert!(appointment_from_row(&rows[2], 60).is_err());
}

#[test]
fn test_import_skips_duplicates_on_second_run() {
    let mut pool = open_pool("import_duplicates");
    let cfg = Config::default();
    let table = SheetTable::read(LEGACY_AGENDA.as_bytes(), APPOINTMENTS).unwrap();

    let report = ImportLogic::appointments(&mut pool, &cfg, &table, false).unwrap();
    assert_eq!(report.read, 3);
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.duplicates, 0);

    let again = ImportLogic::appointments(&mut pool, &cfg, &table, false).unwrap();
    assert_eq!(again.imported, 0);
    assert_eq!(again.duplicates, 2);

    assert_eq!(load_appointments(&pool.conn, None).unwrap().records.len(), 2);
}

#[test]
fn test_expense_import_and_dry_run() {
    let mut pool = open_pool("import_expenses");
    let csv = "\
Data,Descricao,Categoria,Valor
01/03/2099,Aluguel,Aluguel,\"1.500,00\"
02/03/2099,Cremes,,\"89,90\"
03/03/2099,Estorno,Outros,\"-10,00\"
";
    let table = SheetTable::read(csv.as_bytes(), EXPENSES).unwrap();
    let rows: Vec<_> = table.iter().collect();

    let cremes = expense_from_row(&rows[1]).unwrap();
    assert_eq!(cremes.category, "Outros");
    assert_eq!(cremes.amount_cents, 8990);
    assert!(expense_from_row(&rows[2]).is_err());

    let dry = ImportLogic::expenses(&mut pool, &table, true).unwrap();
    assert_eq!(dry.imported, 2);
    assert_eq!(dry.skipped, 1);
    assert!(load_expenses(&pool.conn, None).unwrap().records.is_empty());

    ImportLogic::expenses(&mut pool, &table, false).unwrap();
    let stored = load_expenses(&pool.conn, None).unwrap().records;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].amount_cents, 150000);
}

#[test]
fn test_expense_reimport_is_idempotent() {
    let mut pool = open_pool("import_expenses_twice");
    let csv = "\
Data,Descricao,Categoria,Valor
01/03/2099,Aluguel,Aluguel,\"1.500,00\"
05/03/2099,Toalhas,Produtos,\"20,00\"
05/03/2099,Toalhas,Produtos,\"20,00\"
";
    let table = SheetTable::read(csv.as_bytes(), EXPENSES).unwrap();

    let first = ImportLogic::expenses(&mut pool, &table, false).unwrap();
    assert_eq!(first.imported, 3);
    assert_eq!(first.duplicates, 0);

    let again = ImportLogic::expenses(&mut pool, &table, false).unwrap();
    assert_eq!(again.imported, 0);
    assert_eq!(again.duplicates, 3);

    let stored = load_expenses(&pool.conn, None).unwrap().records;
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.iter().map(|e| e.amount_cents).sum::<i64>(), 154000);
}

#[test]
fn test_expense_row_above_ceiling_is_skipped() {
    let csv = "Data,Descricao,Categoria,Valor\n01/03/2099,Erro,Outros,\"100.000.000.000.000,00\"\n";
    let table = SheetTable::read(csv.as_bytes(), EXPENSES).unwrap();
    let row = table.iter().next().unwrap();
    assert!(expense_from_row(&row).unwrap_err().contains("out of range"));
}

#[test]
fn test_old_app_anamnesis_prints_as_checklist() {
    let mut pool = open_pool("import_old_anamnesis");
    let csv = "\
Nome_Cliente,Data,Hora,Anamnese_Geral,Saude_Mulher,Orcamento
Ana Souza,10/03/2099,09:00,\"Alergia, Sol | Gest:True, DIU:False, Horm:False | Obs:dipirona\",-,\"Trat:Drenagem | Pag:PIX | Valor: R$ 150,00\"
";
    let table = SheetTable::read(csv.as_bytes(), APPOINTMENTS).unwrap();
    let report = ImportLogic::appointments(&mut pool, &Config::default(), &table, false).unwrap();
    assert_eq!(report.imported, 1);

    let stored = load_appointments(&pool.conn, None).unwrap().records;
    let sheet = EvaluationSheet::from_record(&stored[0], None, "Clínica", None);
    let health = &sheet.sections[0];

    assert_eq!(health.list, vec!["Alergia", "Sol"]);
    assert_eq!(
        health.lines,
        vec!["Gest:True, DIU:False, Horm:False", "Obs: dipirona"]
    );
}
