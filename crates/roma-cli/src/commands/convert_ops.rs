use serde::Serialize;

use roma_core::converter::explain::{explain, format_text};
use roma_core::{Converter, Frontend};

#[derive(Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    token: Option<String>,
    error: Option<String>,
}

pub fn convert_cmd<F: Frontend>(converter: &Converter<F>, texts: &[String], json: bool) {
    let records: Vec<ConvertRecord> = texts
        .iter()
        .map(|text| match converter.convert(text) {
            Ok(token) => ConvertRecord {
                input: text,
                token: Some(token),
                error: None,
            },
            Err(e) => ConvertRecord {
                input: text,
                token: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&records), "Error: {}");
        println!("{out}");
    } else {
        for r in &records {
            match (&r.token, &r.error) {
                (Some(token), _) => println!("{token}"),
                (None, Some(err)) => eprintln!("Error: {err}"),
                (None, None) => {}
            }
        }
    }

    if records.iter().any(|r| r.error.is_some()) {
        std::process::exit(1);
    }
}

pub fn explain_cmd<F: Frontend>(converter: &Converter<F>, text: &str, json: bool) {
    let result = explain(converter, text);
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
    if result.error.is_some() {
        std::process::exit(1);
    }
}
