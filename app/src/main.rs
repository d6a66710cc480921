//! FILENAME: app/src/main.rs
// PURPOSE: Demo driver. Seeds a session, filters, sorts, aggregates, exports.
// USAGE: table-demo [config.json]

use std::path::PathBuf;

use app_lib::{init_logging, log_info, AppConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&PathBuf::from(path))?,
        None => AppConfig::default(),
    };
    init_logging(&config)?;

    let mut session = Session::with_sample_users(config.seed_rows)?;
    log_info!("DEMO", "seeded {} users", session.engine().len());

    let view = session.set_filter("eng");
    println!("Showing {} of {} users (filtered by \"{}\")", view.info.visible, view.info.total, view.info.filter);

    session.sort_by("salary");
    for row in session.get_view().rows {
        println!("  {}", row.cells.join(" | "));
    }

    session.set_filter("");
    let totals = session.aggregate("department", "salary");
    println!("Salary by department:");
    for total in &totals.totals {
        println!("  {:<12} {:>10.0}", total.category, total.total);
    }

    let export = session.export_csv();
    if let Some(csv) = export.content {
        println!("{}", csv);
    }

    std::fs::create_dir_all(&config.export_dir)?;
    let xlsx_path = config.export_dir.join("users.xlsx");
    let result = session.export_xlsx(&xlsx_path);
    match result.error {
        Some(error) => eprintln!("XLSX export failed: {}", error),
        None => log_info!("DEMO", "wrote {} rows to {:?}", result.row_count, xlsx_path),
    }

    Ok(())
}
