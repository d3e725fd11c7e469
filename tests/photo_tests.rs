mod common;
use chrono::NaiveDate;
use common::{intake_yaml, open_pool};
use rclinic::config::Config;
use rclinic::core::intake::IntakeLogic;
use rclinic::core::photo::PhotoLogic;
use rclinic::db::photos::load_photo;
use rclinic::errors::AppError;
use rclinic::forms::IntakeForm;
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let p = std::env::temp_dir().join(name);
    fs::write(&p, bytes).unwrap();
    p
}

#[test]
fn test_attach_photo_to_latest_record() {
    let mut pool = open_pool("photo_attach");
    let cfg = Config::default();

    for date in ["2099-03-10", "2099-04-10"] {
        let form = IntakeForm::from_yaml(&intake_yaml("Ana", date, "09:00", "100")).unwrap();
        IntakeLogic::submit(&mut pool, &cfg, &form).unwrap();
    }

    let bytes = [0xff, 0xd8, 0xff, 0xe0, 1, 2, 3];
    let pic = temp_file("photo_attach_rclinic.JPG", &bytes);

    let (appt, photo) = PhotoLogic::attach(&mut pool, "Ana", &pic).unwrap();
    assert_eq!(appt.date, NaiveDate::from_ymd_opt(2099, 4, 10).unwrap());
    assert_eq!(photo.mime, "image/jpeg");
    assert!(photo.data_uri().starts_with("data:image/jpeg;base64,"));

    let stored = load_photo(&pool.conn, photo.id).unwrap().expect("stored photo");
    assert_eq!(stored.file_name, "photo_attach_rclinic.JPG");
    assert_eq!(stored.decoded().unwrap(), bytes);
}

#[test]
fn test_attach_photo_rejections() {
    let mut pool = open_pool("photo_reject");

    let txt = temp_file("photo_reject_rclinic.txt", b"hello");
    let err = PhotoLogic::attach(&mut pool, "Ana", &txt).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let empty = temp_file("photo_reject_empty_rclinic.png", b"");
    let err = PhotoLogic::attach(&mut pool, "Ana", &empty).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let png = temp_file("photo_reject_rclinic.png", &[0x89, b'P', b'N', b'G']);
    let err = PhotoLogic::attach(&mut pool, "Nobody", &png).unwrap_err();
    assert!(matches!(err, AppError::ClientNotFound(_)));
}
