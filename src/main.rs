use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use log::debug;

use sliding_median::logger;
use sliding_median::progbase;
use sliding_median::window::Window;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    progbase::init();
    let _ = logger::init_logger();

    let window = Window::new(progbase::window_size())?;

    let reader: Box<dyn BufRead> = match progbase::input_file() {
        Some(path) => Box::new(BufReader::new(File::open(&path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut count: u64 = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let value: i64 = line.parse()?;
        window.add_val(value);
        // -1 is the undefined-median marker of the line protocol, printed
        // while the window still holds fewer than two values
        writeln!(out, "{}", window.median().unwrap_or(-1))?;
        count += 1;
    }
    debug!("processed {} values", count);

    Ok(())
}
