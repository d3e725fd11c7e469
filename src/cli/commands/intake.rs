use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::intake::{IntakeLogic, UpsertOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::forms::IntakeForm;
use crate::forms::options::{Bowel, Lesion, Origin, Payment, Phototype, Sleep, SkinType, Water};
use crate::ui::messages::success;
use crate::utils::money::format_brl;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Intake { file, template } = cmd {
        if *template {
            print_template()?;
            return Ok(());
        }

        let Some(file) = file else {
            return Ok(());
        };

        let text = fs::read_to_string(file)?;
        let form = IntakeForm::from_yaml(&text)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let (appt, outcome) = IntakeLogic::submit(&mut pool, cfg, &form)?;

        let verb = match outcome {
            UpsertOutcome::Inserted => "Saved",
            UpsertOutcome::Updated => "Updated",
        };
        success(format!(
            "{verb} evaluation of {} on {} ({})",
            appt.client_name,
            appt.slot().describe(),
            appt.amount().map(format_brl).unwrap_or_else(|| "-".into())
        ));
    }
    Ok(())
}

fn labels<T: Copy>(all: &[T], label: fn(&T) -> &'static str) -> String {
    all.iter().map(label).collect::<Vec<_>>().join(" | ")
}

/// Blank form plus the accepted answers as YAML comments.
fn print_template() -> AppResult<()> {
    let yaml = serde_yaml::to_string(&IntakeForm::template())
        .map_err(|e| AppError::InvalidForm(e.to_string()))?;

    println!("# Evaluation form. Fill in and run: rclinic intake --file <this file>");
    println!("# origin: {}", labels(Origin::ALL, Origin::label));
    println!("# bowel: {}", labels(Bowel::ALL, Bowel::label));
    println!("# sleep: {}", labels(Sleep::ALL, Sleep::label));
    println!("# water: {}", labels(Water::ALL, Water::label));
    println!("# phototype: {}", labels(Phototype::ALL, Phototype::label));
    println!("# skin_type: {}", labels(SkinType::ALL, SkinType::label));
    println!("# lesions (list): {}", labels(Lesion::ALL, Lesion::label));
    println!("# payment: {}", labels(Payment::ALL, Payment::label));
    print!("{yaml}");
    Ok(())
}
