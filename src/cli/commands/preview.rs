use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dataset::load_dataset;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { file, rows } = cmd {
        let path = Path::new(file);
        let dataset = load_dataset(path)?;
        let limit = rows.unwrap_or(cfg.preview_rows);

        let mut table = Table::new(dataset.columns.clone());
        for row in dataset.rows.iter().take(limit) {
            table.add_row(row.iter().map(|c| c.display()).collect());
        }
        print!("{}", table.render());

        info(format!(
            "Loaded {} records from {}",
            dataset.rows.len(),
            path.display()
        ));
    }
    Ok(())
}
