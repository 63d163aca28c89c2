use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use pseudo::{errors::diagnostic::ReportConfig, frontend::Frontend};

fn main() -> ExitCode {
    let files: Vec<String> = env::args().skip(1).collect();

    if files.is_empty() {
        println!("Usage: pseudo <file>...");
        return ExitCode::from(2);
    }

    let start = Instant::now();
    let frontend = match Frontend::builtin() {
        Ok(frontend) => frontend,
        Err(error) => {
            println!("Error: failed to initialise grammar ({})", error);
            return ExitCode::from(2);
        }
    };
    println!("Grammar compiled in {:?}", start.elapsed());

    let mut failed = false;

    for file in files {
        let source = match read_to_string(&file) {
            Ok(source) => source,
            Err(error) => {
                println!("Error: failed to read {} ({})", file, error);
                failed = true;
                continue;
            }
        };

        let frontend = frontend.clone().with_config(ReportConfig {
            file_name: Some(file.clone()),
            ..ReportConfig::default()
        });

        let parse_start = Instant::now();
        match frontend.parse(&source) {
            Ok(program) => {
                println!(
                    "{}: OK ({} subroutines, {} main statements), parsed in {:?}",
                    file,
                    program.subroutines.len(),
                    program.main.body.len(),
                    parse_start.elapsed()
                );
            }
            Err(diagnostic) => {
                println!("{}", diagnostic);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
