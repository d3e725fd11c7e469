use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{ImportLogic, ImportReport};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::SheetKind;
use crate::sheets::{self, SheetTable};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        sheet,
        file,
        dry_run,
    } = cmd
    {
        let path = expand_tilde(file);
        let layout = match sheet {
            SheetKind::Agendamentos => sheets::APPOINTMENTS,
            SheetKind::Despesas => sheets::EXPENSES,
        };

        let table = SheetTable::read_path(&path, layout)?;
        info(format!("Read {} row(s) from {}", table.len(), path.display()));

        let mut pool = DbPool::new(&cfg.database)?;
        let report = match sheet {
            SheetKind::Agendamentos => ImportLogic::appointments(&mut pool, cfg, &table, *dry_run)?,
            SheetKind::Despesas => ImportLogic::expenses(&mut pool, &table, *dry_run)?,
        };

        print_report(&report, *dry_run);
    }
    Ok(())
}

fn print_report(report: &ImportReport, dry_run: bool) {
    for w in &report.warnings {
        warning(w);
    }

    let summary = format!(
        "{} imported, {} already present, {} skipped (of {})",
        report.imported, report.duplicates, report.skipped, report.read
    );
    if dry_run {
        info(format!("Dry run, nothing written: {summary}"));
    } else {
        success(summary);
    }
}
