// src/cli.rs
use std::{env, path::PathBuf};

use log::info;

use crate::config::options::Params;
use crate::core::net::HttpClient;
use crate::progress::Progress;
use crate::scrape;

/// Console progress sink: one log line per major and per page.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, majors: usize) {
        info!("Index lists {majors} majors");
    }
    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
    fn major_started(&mut self, major: &str, pages: u32) {
        info!("Crawling {major}, {pages} page(s)…");
    }
    fn page_done(&mut self, major: &str, page: u32, items: usize) {
        info!("{major} page {page} saved, {items} item(s)");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    let client = HttpClient::new()?;
    let mut progress = ConsoleProgress;
    let summary = scrape::crawl(&client, &params, Some(&mut progress))?;

    info!(
        "Done: {} major(s), {} page(s) fetched, {} record(s) appended to {}",
        summary.majors_seen,
        summary.pages_fetched,
        summary.records_written,
        params.out.display(),
    );
    if summary.majors_skipped > 0 || summary.pages_skipped > 0 {
        info!(
            "Skipped {} major(s) and {} page(s)",
            summary.majors_skipped, summary.pages_skipped,
        );
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => params.out = PathBuf::from(args.next().ok_or("Missing output path")?),
            "--profiles" => params.profiles = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
