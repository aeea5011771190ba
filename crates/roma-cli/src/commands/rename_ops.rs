use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use roma_core::settings::settings;
use roma_core::{Converter, Frontend};

use crate::batch::{self, RenamePlan};

fn confirm(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn plan_dir<F: Frontend>(converter: &Converter<F>, dir: &Path) -> RenamePlan {
    let extensions = &settings().batch.extensions;
    let files = die!(batch::list_audio_files(dir, extensions), "Error: {}");
    if files.is_empty() {
        println!(
            "No .{} files in {}",
            extensions.join("/."),
            dir.display()
        );
        process::exit(0);
    }
    batch::plan(converter, &files)
}

fn report_failures(plan: &RenamePlan) {
    for f in &plan.failed {
        eprintln!("FAILED {}: {}", f.path.display(), f.error);
    }
}

pub fn preview_cmd<F: Frontend>(converter: &Converter<F>, input_dir: &str) {
    let dir = PathBuf::from(input_dir);
    die!(batch::ensure_dir(&dir), "Error: {}");

    let plan = plan_dir(converter, &dir);
    for e in &plan.entries {
        println!("{} -> {}", e.stem, e.token);
    }
    report_failures(&plan);
    if !plan.is_complete() {
        process::exit(1);
    }
}

pub fn rename_cmd<F: Frontend>(
    converter: &Converter<F>,
    input_dir: &str,
    output_dir: &str,
    yes: bool,
    skip_failed: bool,
) {
    let input = PathBuf::from(input_dir);
    let output = PathBuf::from(output_dir);
    die!(batch::ensure_dir(&input), "Error: input folder: {}");
    die!(batch::ensure_dir(&output), "Error: output folder: {}");

    if die!(batch::same_dir(&input, &output), "Error: {}")
        && !yes
        && !confirm("Input and output are the same folder. Continue?")
    {
        eprintln!("Aborted.");
        process::exit(1);
    }

    let plan = plan_dir(converter, &input);
    if !plan.is_complete() {
        report_failures(&plan);
        if !skip_failed {
            eprintln!(
                "Error: {} file(s) could not be converted; nothing was copied (use --skip-failed to copy the rest)",
                plan.failed.len()
            );
            process::exit(1);
        }
    }

    if !yes
        && !confirm(&format!(
            "Copy {} file(s) to {}?",
            plan.entries.len(),
            output.display()
        ))
    {
        eprintln!("Aborted.");
        process::exit(1);
    }

    let log_file = &settings().batch.log_file;
    let copied = die!(batch::execute(&plan, &output, log_file), "Error: {}");
    println!(
        "Copied {copied} file(s) to {}; mapping written to {log_file}",
        output.display()
    );
}
