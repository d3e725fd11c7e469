//! Full evaluation form ("ficha completa").
//!
//! The form is read from YAML and flattened into the text columns of one
//! `agendamentos` row.

use super::checkbox::{serialize_checkboxes, serialize_labels};
use super::options::{Bowel, Lesion, Origin, Payment, Phototype, Sleep, SkinType, Water};
use crate::errors::{AppError, AppResult};
use crate::models::client::validate_name;
use crate::models::{Appointment, Status};
use crate::utils::date::{self, parse_date};
use crate::utils::formatting::{measure, yes_no};
use crate::utils::money::{MAX_AMOUNT, checked_cents, format_amount};
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeForm {
    pub identification: Identification,
    pub anamnesis: Anamnesis,
    pub body: Body,
    pub facial: Facial,
    pub closing: Closing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Identification {
    pub name: String,
    pub birth_date: String,
    pub cpf: String,
    pub profession: String,
    pub address: String,
    pub phone: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Anamnesis {
    pub clinical: ClinicalChecks,
    pub skin: SkinChecks,
    pub laser: LaserChecks,
    pub women: WomenHealth,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicalChecks {
    pub allergies: bool,
    pub medications: bool,
    pub medical_treatment: bool,
    pub oncology_history: bool,
    pub cardiac_or_pacemaker: bool,
    pub hepatitis_or_renal: bool,
    pub epilepsy: bool,
}

impl ClinicalChecks {
    pub fn items(&self) -> [(&'static str, bool); 7] {
        [
            ("Alergia", self.allergies),
            ("Medicamentos", self.medications),
            ("Trat_Medico", self.medical_treatment),
            ("Oncologico", self.oncology_history),
            ("Cardiaco", self.cardiac_or_pacemaker),
            ("Hepatite", self.hepatitis_or_renal),
            ("Epilepsia", self.epilepsy),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkinChecks {
    pub keloids: bool,
    pub folliculitis: bool,
    pub spots: bool,
    pub psoriasis: bool,
    pub varicose_or_thrombosis: bool,
}

impl SkinChecks {
    pub fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("Queloides", self.keloids),
            ("Foliculite", self.folliculitis),
            ("Manchas", self.spots),
            ("Psoriase", self.psoriasis),
            ("Varizes", self.varicose_or_thrombosis),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaserChecks {
    pub previous_hair_removal: bool,
    pub recent_sun: bool,
    pub uses_acids: bool,
    pub isotretinoin: bool,
}

impl LaserChecks {
    pub fn items(&self) -> [(&'static str, bool); 4] {
        [
            ("Depilacao_Ant", self.previous_hair_removal),
            ("Sol", self.recent_sun),
            ("Acidos", self.uses_acids),
            ("Roacutan", self.isotretinoin),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WomenHealth {
    pub pregnant_or_nursing: bool,
    pub iud: bool,
    pub hormonal: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Body {
    pub bowel: Bowel,
    pub sleep: Sleep,
    pub water: Water,
    /// Physical activity, smoking or alcohol.
    pub activity_smoking_alcohol: bool,
    pub measurements: Measurements,
    pub complaint: String,
}

/// Weight in kg, height in m, circumferences in cm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Measurements {
    pub weight: f64,
    pub height: f64,
    pub bust: f64,
    pub arms: f64,
    pub waist: f64,
    pub abdomen: f64,
    pub hips: f64,
    pub thighs: f64,
    pub culottes: f64,
}

impl Measurements {
    fn items(&self) -> [(&'static str, f64); 9] {
        [
            ("Peso", self.weight),
            ("Alt", self.height),
            ("Busto", self.bust),
            ("Braços", self.arms),
            ("Cint", self.waist),
            ("Abd", self.abdomen),
            ("Quad", self.hips),
            ("Coxas", self.thighs),
            ("Culote", self.culottes),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Facial {
    pub lenses_or_creams: bool,
    pub sunscreen: bool,
    pub phototype: Phototype,
    pub skin_type: SkinType,
    pub lesions: Vec<Lesion>,
    pub plan: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Closing {
    /// `YYYY-MM-DD` or `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Defaults to the configured slot length.
    pub duration_min: Option<i64>,
    pub treatment: String,
    pub total: f64,
    pub payment: Payment,
}

impl IntakeForm {
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        serde_yaml::from_str(text).map_err(|e| AppError::InvalidForm(e.to_string()))
    }

    /// Blank form for `intake --template`, dated today at 09:00.
    pub fn template() -> Self {
        let mut form = IntakeForm::default();
        form.closing.date = date::today().format("%Y-%m-%d").to_string();
        form.closing.time = "09:00".to_string();
        form
    }

    pub fn closing_date(&self) -> AppResult<NaiveDate> {
        parse_date(&self.closing.date)
            .ok_or_else(|| AppError::InvalidDate(format!("closing.date '{}'", self.closing.date)))
    }

    pub fn personal_text(&self) -> String {
        let id = &self.identification;
        format!(
            "Nasc:{} | CPF:{} | Prof:{} | End:{} | Origem:{}",
            id.birth_date.trim(),
            id.cpf.trim(),
            id.profession.trim(),
            id.address.trim(),
            id.origin.label()
        )
    }

    /// Clinical, skin and laser answers in one selection, then the notes.
    pub fn anamnesis_text(&self) -> String {
        let a = &self.anamnesis;
        let selection = serialize_checkboxes(
            a.clinical
                .items()
                .into_iter()
                .chain(a.skin.items())
                .chain(a.laser.items()),
        );
        format!("{} | Obs:{}", selection, a.notes.trim())
    }

    pub fn women_health_text(&self) -> String {
        let w = &self.anamnesis.women;
        format!(
            "Gest:{}, DIU:{}, Horm:{}",
            yes_no(w.pregnant_or_nursing),
            yes_no(w.iud),
            yes_no(w.hormonal)
        )
    }

    pub fn body_text(&self) -> String {
        let b = &self.body;
        let measures = b
            .measurements
            .items()
            .iter()
            .map(|(label, v)| format!("{}:{}", label, measure(*v)))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{} | Hab:{},{},{} | Ativ:{} | Queixa:{}",
            measures,
            b.bowel.label(),
            b.sleep.label(),
            b.water.label(),
            yes_no(b.activity_smoking_alcohol),
            b.complaint.trim()
        )
    }

    pub fn facial_text(&self) -> String {
        let f = &self.facial;
        format!(
            "Foto:{} Pele:{} | Filtro:{} Lentes:{} | Lesões:{} | Plano:{}",
            f.phototype.label(),
            f.skin_type.label(),
            yes_no(f.sunscreen),
            yes_no(f.lenses_or_creams),
            serialize_labels(f.lesions.iter().map(Lesion::label)),
            f.plan.trim()
        )
    }

    pub fn budget_text(&self) -> String {
        let c = &self.closing;
        format!(
            "Trat:{} | Pag:{} | Valor: R$ {}",
            c.treatment.trim(),
            c.payment.label(),
            format_amount(c.total)
        )
    }

    /// Validate the answers and build the row to store (`id = 0`).
    pub fn to_appointment(&self, default_duration: i64) -> AppResult<Appointment> {
        let name = validate_name(&self.identification.name)?;
        let date = self.closing_date()?;
        let time = parse_time(&self.closing.time)
            .ok_or_else(|| AppError::InvalidTime(format!("closing.time '{}'", self.closing.time)))?;

        let total = self.closing.total;
        let total_cents = checked_cents(total).ok_or_else(|| {
            AppError::InvalidAmount(format!(
                "closing.total must be between 0 and {}, got {total}",
                format_amount(MAX_AMOUNT)
            ))
        })?;

        if let Some((label, v)) = self
            .body
            .measurements
            .items()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            return Err(AppError::Validation(format!(
                "measurement {label} must be zero or positive, got {v}"
            )));
        }

        let duration = self.closing.duration_min.unwrap_or(default_duration);

        let mut appt = Appointment::new(
            date,
            time,
            duration,
            &name,
            self.identification.phone.trim(),
        );
        appt.personal_data = self.personal_text();
        appt.anamnesis = self.anamnesis_text();
        appt.women_health = self.women_health_text();
        appt.body_measurements = self.body_text();
        appt.facial_analysis = self.facial_text();
        appt.budget = self.budget_text();
        appt.budget_cents = Some(total_cents);
        appt.status = Status::Complete;

        Ok(appt)
    }
}
