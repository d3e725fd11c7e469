use crate::config::Config;
use crate::db::log::audit;
use crate::db::photos::load_photo;
use crate::db::pool::DbPool;
use crate::db::queries::latest_for_client;
use crate::errors::{AppError, AppResult};
use crate::export::html::render_sheet;
use crate::export::pdf::PdfManager;
use crate::forms::parse_selection;
use crate::models::client::{client_key, validate_name};
use crate::models::photo::mime_for;
use crate::models::{Appointment, Photo};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    Html,
    Pdf,
}

/// One titled block of the printed sheet.
#[derive(Debug, Clone)]
pub struct SheetSection {
    pub title: &'static str,
    /// Rendered as a bullet list.
    pub list: Vec<String>,
    pub lines: Vec<String>,
}

/// Everything the printed evaluation sheet shows, already as text.
#[derive(Debug, Clone)]
pub struct EvaluationSheet {
    pub clinic_name: String,
    /// `data:` URI of the configured logo.
    pub logo: Option<String>,
    pub date: String,
    pub time: String,
    pub client: String,
    pub contact: String,
    pub personal: String,
    pub sections: Vec<SheetSection>,
    pub photo: Option<Photo>,
}

/// Split a stored blob on its " | " separators; "-" means not filled.
fn blob_parts(text: &str) -> Vec<String> {
    let t = text.trim();
    if t.is_empty() || t == "-" {
        return Vec::new();
    }
    t.split(" | ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl EvaluationSheet {
    pub const TITLE: &'static str = "FICHA DE AVALIAÇÃO ESTÉTICA";

    pub fn from_record(
        appt: &Appointment,
        photo: Option<Photo>,
        clinic_name: &str,
        logo: Option<String>,
    ) -> Self {
        // "<selection> | Obs:<notes>", or "<selection> | Gest:.. | Obs:<notes>"
        // in rows written by the old app; older rows hold free text.
        let (list, mut health_lines) = match appt.anamnesis.split_once(" | Obs:") {
            Some((head, notes)) => {
                let (selection, rest) = head.split_once(" | ").unwrap_or((head, ""));
                let mut lines = blob_parts(rest);
                let notes = notes.trim();
                if !notes.is_empty() {
                    lines.push(format!("Obs: {notes}"));
                }
                (parse_selection(selection), lines)
            }
            None => (Vec::new(), blob_parts(&appt.anamnesis)),
        };
        health_lines.extend(blob_parts(&appt.women_health));

        let sections = vec![
            SheetSection {
                title: "SAÚDE & HISTÓRICO",
                list,
                lines: health_lines,
            },
            SheetSection {
                title: "CORPORAL & HÁBITOS",
                list: Vec::new(),
                lines: blob_parts(&appt.body_measurements),
            },
            SheetSection {
                title: "FACIAL & PELE",
                list: Vec::new(),
                lines: blob_parts(&appt.facial_analysis),
            },
            SheetSection {
                title: "ORÇAMENTO",
                list: Vec::new(),
                lines: blob_parts(&appt.budget),
            },
        ];

        Self {
            clinic_name: clinic_name.to_string(),
            logo,
            date: appt.date_br(),
            time: appt.time_str(),
            client: appt.client_name.clone(),
            contact: appt.contact.clone(),
            personal: appt.personal_data.clone(),
            sections,
            photo,
        }
    }
}

/// Logo file as a `data:` URI. A missing or unsupported logo only warns:
/// the sheet is still printable without it.
fn load_logo(path: &str) -> Option<String> {
    let p = expand_tilde(path);
    let Some(mime) = mime_for(&p) else {
        warning(format!("Logo {} is not a supported image", p.display()));
        return None;
    };
    match fs::read(&p) {
        Ok(bytes) => Some(format!("data:{};base64,{}", mime, STANDARD.encode(bytes))),
        Err(e) => {
            warning(format!("Cannot read logo {}: {}", p.display(), e));
            None
        }
    }
}

pub struct PrintLogic;

impl PrintLogic {
    /// Latest record of `client` (optionally on `date`) as a printable sheet.
    pub fn build(
        pool: &DbPool,
        cfg: &Config,
        client: &str,
        date: Option<NaiveDate>,
    ) -> AppResult<(Appointment, EvaluationSheet)> {
        let name = validate_name(client)?;
        let appt = latest_for_client(&pool.conn, &client_key(&name), date)?
            .ok_or_else(|| match date {
                Some(d) => AppError::ClientNotFound(format!("{name} on {}", d.format("%d/%m/%Y"))),
                None => AppError::ClientNotFound(name.clone()),
            })?;

        let photo = match appt.photo_id {
            Some(id) => load_photo(&pool.conn, id)?,
            None => None,
        };

        let logo = cfg.logo.as_deref().and_then(load_logo);
        let sheet = EvaluationSheet::from_record(&appt, photo, &cfg.clinic_name, logo);
        Ok((appt, sheet))
    }

    pub fn write(sheet: &EvaluationSheet, format: PrintFormat, path: &Path) -> AppResult<()> {
        match format {
            PrintFormat::Html => {
                fs::write(path, render_sheet(sheet).into_string())?;
            }
            PrintFormat::Pdf => {
                let mut pdf = PdfManager::new();
                pdf.write_sheet(sheet);
                pdf.save(path)
                    .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;
            }
        }
        Ok(())
    }

    pub fn print(
        pool: &DbPool,
        cfg: &Config,
        client: &str,
        date: Option<NaiveDate>,
        format: PrintFormat,
        path: &Path,
    ) -> AppResult<Appointment> {
        let (appt, sheet) = Self::build(pool, cfg, client, date)?;
        Self::write(&sheet, format, path)?;

        audit(
            &pool.conn,
            "print",
            &appt.record_key(),
            &format!("Printed sheet to {}", path.display()),
        )?;
        Ok(appt)
    }
}
