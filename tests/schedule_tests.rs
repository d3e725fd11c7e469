mod common;
use chrono::{NaiveDate, NaiveTime};
use common::open_pool;
use rclinic::config::Config;
use rclinic::core::schedule::{BookingRequest, ScheduleLogic, Slot, find_conflict};
use rclinic::db::queries::load_appointments;
use rclinic::errors::{AppError, ErrorClass};
use rclinic::models::{Appointment, Status};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn request(name: &str, date: NaiveDate, time: NaiveTime, duration: Option<i64>) -> BookingRequest {
    BookingRequest {
        name: name.to_string(),
        contact: String::new(),
        date,
        time,
        duration_min: duration,
        reason: String::new(),
    }
}

#[test]
fn test_slot_overlap_rules() {
    let day = d(2099, 3, 10);
    let nine = Slot::new(day, t(9, 0), 60);

    assert!(nine.overlaps(&Slot::new(day, t(9, 30), 60)));
    assert!(nine.overlaps(&Slot::new(day, t(8, 30), 45)));
    assert!(nine.overlaps(&Slot::new(day, t(9, 15), 10)));

    // back-to-back
    assert!(!nine.overlaps(&Slot::new(day, t(10, 0), 60)));
    assert!(!nine.overlaps(&Slot::new(day, t(8, 0), 60)));
}

#[test]
fn test_slot_crossing_midnight() {
    let late = Slot::new(d(2099, 3, 10), t(23, 30), 60);
    assert!(late.overlaps(&Slot::new(d(2099, 3, 11), t(0, 0), 30)));
    assert!(!late.overlaps(&Slot::new(d(2099, 3, 11), t(0, 30), 30)));
}

#[test]
fn test_find_conflict_ignores_excluded_row() {
    let mut a = Appointment::new(d(2099, 3, 10), t(9, 0), 60, "Ana", "");
    a.id = 7;
    let rows = vec![a];
    let candidate = Slot::new(d(2099, 3, 10), t(9, 30), 30);

    assert!(find_conflict(&rows, &candidate, None).is_some());
    assert!(find_conflict(&rows, &candidate, Some(7)).is_none());
}

#[test]
fn test_book_then_conflict() {
    let mut pool = open_pool("book_then_conflict");
    let cfg = Config::default();
    let today = d(2099, 1, 1);

    let appt = ScheduleLogic::book(
        &mut pool,
        &cfg,
        &request("  Ana   Souza ", d(2099, 3, 10), t(9, 0), None),
        today,
    )
    .expect("first booking");

    assert_eq!(appt.client_name, "Ana Souza");
    assert_eq!(appt.duration_min, 60);
    assert_eq!(appt.status, Status::Scheduled);

    let err = ScheduleLogic::book(
        &mut pool,
        &cfg,
        &request("Beatriz", d(2099, 3, 10), t(9, 30), Some(30)),
        today,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::SlotTaken { .. }));
    assert_eq!(err.class(), ErrorClass::Validation);

    // back-to-back is fine
    ScheduleLogic::book(
        &mut pool,
        &cfg,
        &request("Beatriz", d(2099, 3, 10), t(10, 0), Some(30)),
        today,
    )
    .expect("back-to-back booking");

    let rows = load_appointments(&pool.conn, None).unwrap();
    assert_eq!(rows.records.len(), 2);
}

#[test]
fn test_book_conflict_across_midnight() {
    let mut pool = open_pool("book_midnight");
    let cfg = Config::default();
    let today = d(2099, 1, 1);

    ScheduleLogic::book(
        &mut pool,
        &cfg,
        &request("Carla", d(2099, 3, 10), t(23, 30), Some(60)),
        today,
    )
    .expect("late booking");

    let err = ScheduleLogic::book(
        &mut pool,
        &cfg,
        &request("Diana", d(2099, 3, 11), t(0, 15), Some(30)),
        today,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::SlotTaken { .. }));
}

#[test]
fn test_book_rejects_invalid_requests() {
    let mut pool = open_pool("book_invalid");
    let cfg = Config::default();
    let today = d(2099, 3, 10);

    let past = ScheduleLogic::book(&mut pool, &cfg, &request("Ana", d(2099, 3, 9), t(9, 0), None), today);
    assert!(matches!(past, Err(AppError::Validation(_))));

    let blank = ScheduleLogic::book(&mut pool, &cfg, &request("   ", today, t(9, 0), None), today);
    assert!(matches!(blank, Err(AppError::Validation(_))));

    let zero = ScheduleLogic::book(&mut pool, &cfg, &request("Ana", today, t(9, 0), Some(0)), today);
    assert!(matches!(zero, Err(AppError::Validation(_))));

    assert!(load_appointments(&pool.conn, None).unwrap().records.is_empty());
}

#[test]
fn test_book_reason_goes_to_budget() {
    let mut pool = open_pool("book_reason");
    let cfg = Config::default();

    let mut req = request("Ana", d(2099, 3, 10), t(14, 0), None);
    req.reason = " Limpeza de pele ".to_string();

    let appt = ScheduleLogic::book(&mut pool, &cfg, &req, d(2099, 1, 1)).unwrap();
    assert_eq!(appt.budget, "Motivo:Limpeza de pele");
    assert_eq!(appt.personal_data, "-");
    assert_eq!(appt.amount(), None);
}
