use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::photo::PhotoLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Photo { client, file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let (appt, photo) = PhotoLogic::attach(&mut pool, client, &expand_tilde(file))?;

        success(format!(
            "Photo {} attached to {} ({})",
            photo.file_name,
            appt.client_name,
            appt.date_br()
        ));
    }
    Ok(())
}
