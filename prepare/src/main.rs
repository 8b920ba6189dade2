use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use unicode_case_prepare::{cli::Cli, output, prepare};
use unicode_case_source::Ucd;

fn main() -> Result<()>
{
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = cli.resolve_config()?;

    let ucd = Ucd::read(&config.ucd_dir)
        .with_context(|| format!("не удалось разобрать UCD из {}", config.ucd_dir.display()))?;

    let tables = prepare(&ucd, config.merge_policy)?;

    output::stats::print(&tables);

    // сначала формируем данные целиком: при ошибке файл не должен остаться недописанным
    let data = output::render(&tables, config.line_width);

    fs::write(&config.output, data)
        .with_context(|| format!("не удалось записать {}", config.output.display()))?;

    log::info!("таблицы записаны в {}", config.output.display());

    Ok(())
}
