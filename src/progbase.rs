include!(concat!(env!("OUT_DIR"), "/version.rs"));

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::exit;
use std::sync::{Arc, Mutex};

#[derive(Parser, Default)]
pub struct Opts {
    /// Number of values the sliding window holds
    #[clap(short, long, default_value = "100")]
    pub size: usize,
    /// Input file with one integer per line, stdin when omitted
    #[clap(short, long)]
    pub file: Option<PathBuf>,
    #[clap(short, long, default_value = "info")]
    pub log_level: String,
    #[clap(short, long)]
    pub version: bool,
}

pub struct Options {
    pub exe: String,
    pub size: usize,
    pub file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Options {
    pub fn new(opts: Opts) -> Self {
        let exe_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_default();

        let log_level = match opts.log_level.as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        };

        Options {
            exe: exe_name,
            size: opts.size,
            file: opts.file,
            log_level,
        }
    }
}

// Singleton for Options
lazy_static::lazy_static! {
    static ref OPTIONS: Arc<Mutex<Options>> = Arc::new(Mutex::new(Options {
        exe: String::new(),
        size: 100,
        file: None,
        log_level: LevelFilter::Info,
    }));
}

pub fn try_init() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = OPTIONS.lock().unwrap();
    let mut opts = Opts::default();
    // try_update_from keeps existing field values for absent flags, so the
    // clap defaults have to be preset here
    opts.size = 100;
    opts.log_level = "info".to_string();

    let res = opts.try_update_from(std::env::args());
    if opts.version {
        println!("Hash: {}", GIT_HASH);
        println!("Branch: {}", GIT_BRANCH);
        println!("Commit date: {}", GIT_COMMIT_DATE);
        println!("Build date: {}", BUILD_DATE);
        exit(0)
    }
    *options = Options::new(opts);
    Ok(res?)
}

pub fn init() {
    let res = try_init();
    if res.is_err() {
        panic!("Failed to initialize program base: {}", res.err().unwrap());
    }
}

#[allow(dead_code)]
pub fn exe_name() -> String {
    let options = OPTIONS.lock().unwrap();
    options.exe.clone()
}

pub fn window_size() -> usize {
    let options = OPTIONS.lock().unwrap();
    options.size
}

pub fn input_file() -> Option<PathBuf> {
    let options = OPTIONS.lock().unwrap();
    options.file.clone()
}

pub fn log_lvl() -> LevelFilter {
    let options = OPTIONS.lock().unwrap();
    options.log_level
}
