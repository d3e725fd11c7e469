use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        sheet,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let written = ExportLogic::export(&pool, *sheet, format.clone(), file, range, *force)?;
        if written > 0 {
            info(format!("{written} {} row(s) written", sheet.as_str()));
        }
    }
    Ok(())
}
