use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dataset::load_dataset;
use crate::errors::AppResult;
use crate::report::{ReportKind, ensure_writable, export_hr, export_projects};
use crate::ui::messages::progress;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        report,
        out,
        force,
    } = cmd
    {
        let dest = match out {
            Some(f) => f.clone(),
            None => match report {
                ReportKind::Projects => cfg.projects_file.clone(),
                ReportKind::Hr => cfg.hr_file.clone(),
            },
        };
        let dest = Path::new(&dest);

        ensure_writable(dest, *force)?;

        let dataset = load_dataset(Path::new(file))?;

        let on_progress = |pct: u8| progress(pct);
        match report {
            ReportKind::Projects => {
                export_projects(&dataset, dest, Some(&on_progress))?;
            }
            ReportKind::Hr => {
                export_hr(&dataset, dest, Some(&on_progress))?;
            }
        }
    }
    Ok(())
}
