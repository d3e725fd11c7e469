mod common;
use chrono::{NaiveDate, NaiveTime};
use common::{intake_yaml, open_pool};
use rclinic::config::Config;
use rclinic::core::intake::{IntakeLogic, UpsertOutcome};
use rclinic::core::photo::PhotoLogic;
use rclinic::core::schedule::{BookingRequest, ScheduleLogic};
use rclinic::db::queries::{load_appointments, load_for_client};
use rclinic::errors::{AppError, ErrorClass};
use rclinic::forms::IntakeForm;
use rclinic::models::Status;
use std::fs;

fn form(name: &str, date: &str, time: &str, total: &str) -> IntakeForm {
    IntakeForm::from_yaml(&intake_yaml(name, date, time, total)).expect("valid form")
}

#[test]
fn test_form_flattens_into_sheet_text() {
    let f = form("Ana Souza", "2099-03-10", "10:00", "350");

    assert_eq!(
        f.anamnesis_text(),
        "Alergia, Epilepsia | Obs:Alergia a dipirona"
    );
    assert_eq!(f.women_health_text(), "Gest:Não, DIU:Não, Horm:Não");
    assert_eq!(f.budget_text(), "Trat:Drenagem | Pag:PIX | Valor: R$ 350,00");

    let body = f.body_text();
    assert!(body.starts_with("Peso:62.5 Alt:1.65 Busto:0"));
    assert!(body.contains("Hab:Regular,Ruim,"));
    assert!(body.contains("Queixa:Gordura localizada"));

    let facial = f.facial_text();
    assert!(facial.contains("Foto:III"));
    assert!(facial.contains("Filtro:Sim"));
    assert!(facial.contains("Lesões:Melasma, Espinhas"));

    assert!(f.personal_text().contains("Origem:Indicação"));
}

#[test]
fn test_empty_checkbox_sets_store_nothing_marker() {
    let f = IntakeForm::from_yaml(
        "identification:\n  name: Ana\nclosing:\n  date: 2099-03-10\n  time: \"09:00\"\n",
    )
    .unwrap();
    assert_eq!(f.anamnesis_text(), "Nada | Obs:");
    assert!(f.facial_text().contains("Lesões:Nada"));
}

#[test]
fn test_form_rejects_unknown_fields_and_bad_values() {
    let unknown = IntakeForm::from_yaml("identification:\n  nome: Ana\n");
    assert!(matches!(unknown, Err(AppError::InvalidForm(_))));

    let bad_choice = IntakeForm::from_yaml("facial:\n  phototype: VII\n");
    assert!(matches!(bad_choice, Err(AppError::InvalidForm(_))));

    let negative = form("Ana", "2099-03-10", "10:00", "-5").to_appointment(60);
    assert!(matches!(negative, Err(AppError::InvalidAmount(_))));

    let huge = form("Ana", "2099-03-10", "10:00", "1.0e17").to_appointment(60);
    assert!(matches!(huge, Err(AppError::InvalidAmount(_))));
    assert_eq!(huge.unwrap_err().class(), ErrorClass::Validation);

    let no_name = form("  ", "2099-03-10", "10:00", "100").to_appointment(60);
    assert!(matches!(no_name, Err(AppError::Validation(_))));

    let bad_date = form("Ana", "2099-02-30", "10:00", "100").to_appointment(60);
    assert!(matches!(bad_date, Err(AppError::InvalidDate(_))));

    let bad_time = form("Ana", "2099-03-10", "25:00", "100").to_appointment(60);
    assert!(matches!(bad_time, Err(AppError::InvalidTime(_))));
}

#[test]
fn test_form_accepts_ascii_aliases() {
    let f = IntakeForm::from_yaml(
        "identification:\n  name: Ana\n  origin: Indicacao\nclosing:\n  payment: Cartao\n",
    )
    .unwrap();
    assert!(f.personal_text().ends_with("Origem:Indicação"));
    assert!(f.budget_text().contains("Pag:Cartão"));
}

#[test]
fn test_same_client_same_day_is_updated_in_place() {
    let mut pool = open_pool("intake_upsert");
    let cfg = Config::default();

    let (first, outcome) =
        IntakeLogic::submit(&mut pool, &cfg, &form("Ana Souza", "2099-03-10", "09:00", "350"))
            .expect("first submit");
    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(first.status, Status::Complete);

    let (second, outcome) =
        IntakeLogic::submit(&mut pool, &cfg, &form(" ana  souza ", "10/03/2099", "10:00", "400"))
            .expect("second submit");
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(second.id, first.id);

    let rows = load_for_client(&pool.conn, "ana souza").unwrap().records;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].budget_cents, Some(40000));
    assert_eq!(rows[0].time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(rows[0].created_at, first.created_at);
}

#[test]
fn test_other_day_appends_a_new_row() {
    let mut pool = open_pool("intake_other_day");
    let cfg = Config::default();

    IntakeLogic::submit(&mut pool, &cfg, &form("Ana", "2099-03-10", "09:00", "100")).unwrap();
    let (_, outcome) =
        IntakeLogic::submit(&mut pool, &cfg, &form("Ana", "2099-03-17", "09:00", "100")).unwrap();

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(load_for_client(&pool.conn, "ana").unwrap().records.len(), 2);
}

#[test]
fn test_intake_completes_the_booking_and_keeps_the_photo() {
    let mut pool = open_pool("intake_after_booking");
    let cfg = Config::default();

    let booking = BookingRequest {
        name: "Carla Dias".into(),
        contact: "11 90000-0000".into(),
        date: NaiveDate::from_ymd_opt(2099, 3, 10).unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        duration_min: None,
        reason: String::new(),
    };
    let booked = ScheduleLogic::book(
        &mut pool,
        &cfg,
        &booking,
        NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
    )
    .unwrap();

    let pic = std::env::temp_dir().join("intake_after_booking_rclinic.png");
    fs::write(&pic, [0x89, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();
    let (_, photo) = PhotoLogic::attach(&mut pool, "carla dias", &pic).unwrap();

    let (appt, outcome) =
        IntakeLogic::submit(&mut pool, &cfg, &form("Carla Dias", "2099-03-10", "09:30", "250"))
            .expect("intake over own booking");

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(appt.id, booked.id);
    assert_eq!(appt.photo_id, Some(photo.id));

    let rows = load_appointments(&pool.conn, None).unwrap().records;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, Status::Complete);
    assert_eq!(rows[0].photo_id, Some(photo.id));
}

#[test]
fn test_intake_cannot_take_another_clients_slot() {
    let mut pool = open_pool("intake_conflict");
    let cfg = Config::default();

    IntakeLogic::submit(&mut pool, &cfg, &form("Ana", "2099-03-10", "09:00", "100")).unwrap();
    let err = IntakeLogic::submit(&mut pool, &cfg, &form("Beatriz", "2099-03-10", "09:30", "100"))
        .unwrap_err();

    assert!(matches!(err, AppError::SlotTaken { .. }));
    assert_eq!(load_appointments(&pool.conn, None).unwrap().records.len(), 1);
}
