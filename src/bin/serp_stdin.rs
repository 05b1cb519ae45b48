//! Reads a results page from stdin and prints its JSON record to stdout.
//!
//! Usage: `serp_stdin [--fields d,p,u,t,s] [--captcha | --region [DEFAULT]]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::env;
use std::error::Error;
use std::io::{self, Read};

use tracing::info;
use tracing_subscriber::EnvFilter;
use yandex_serp::{Options, SerpDocument};

enum Mode {
    Serp,
    Captcha,
    Region(u64),
}

struct Args {
    options: Options,
    mode: Mode,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut options = Options::default();
    let mut mode = Mode::Serp;

    let mut args = env::args().skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fields" => {
                let list = args.next().ok_or("--fields needs a comma-separated list")?;
                options = Options::from_field_list(&list)?;
            }
            "--captcha" => mode = Mode::Captcha,
            "--region" => {
                let default = match args.next_if(|next| !next.starts_with("--")) {
                    Some(value) => value.parse()?,
                    None => 0,
                };
                mode = Mode::Region(default);
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    Ok(Args { options, mode })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Args { options, mode } = parse_args()?;

    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    info!(bytes = bytes.len(), "read page from stdin");

    let page = SerpDocument::from_bytes(&bytes, options);
    let output = match mode {
        Mode::Serp => serde_json::to_string(&page.serp()?)?,
        Mode::Captcha => serde_json::to_string(&page.captcha()?)?,
        Mode::Region(default) => page.region_code(default)?.to_string(),
    };

    println!("{output}");
    Ok(())
}
