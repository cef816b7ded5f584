//! Reads a commented configuration file through [`jsonc_strip::Decoder`] and
//! deserializes it with `serde_json`.
//!
//! Pass a path to read that file, or nothing to use the built-in sample:
//!
//! ```bash
//! cargo run -p jsonc-strip --example read_config -- settings.jsonc
//! ```
#![allow(missing_docs)]

use std::{env, fs::File, io::BufReader, process::ExitCode};

use jsonc_strip::Decoder;
use serde::Deserialize;

const SAMPLE: &str = r#"{
    /*
        some block comment
    */
    "string": "foo", // a string
    "bool": true, // a boolean
    "number": 42, // a number
    // "object":{
    //     "key":"val"
    // },
    "array": [ // example of an array
        1,
        2,
        3
    ]
}
"#;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Settings {
    string: String,
    bool: bool,
    number: i64,
    array: Vec<i64>,
}

fn main() -> ExitCode {
    let parsed: Result<Settings, serde_json::Error> = match env::args_os().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => serde_json::from_reader(Decoder::new(BufReader::new(file))),
            Err(err) => {
                eprintln!("cannot open {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => serde_json::from_reader(Decoder::new(SAMPLE.as_bytes())),
    };

    match parsed {
        Ok(settings) => {
            println!("{settings:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error decoding commented json: {err}");
            ExitCode::FAILURE
        }
    }
}
