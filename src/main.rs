use arcrule::eval::runner::run_dir;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" {
        usage();
        return;
    }

    let data_dir = args[0].clone();
    let mut out_dir: Option<String> = None;
    let mut max_tasks: Option<usize> = None;
    let mut detail = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" if i + 1 < args.len() => {
                out_dir = Some(args[i + 1].clone());
                i += 2;
            }
            "--max" if i + 1 < args.len() => {
                max_tasks = args[i + 1].parse().ok();
                i += 2;
            }
            "--detail" => {
                detail = true;
                i += 1;
            }
            other => {
                eprintln!("unknown argument: {}", other);
                usage();
                std::process::exit(2);
            }
        }
    }

    if let Some(dir) = &out_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("cannot create output dir {}: {}", dir, e);
            std::process::exit(1);
        }
    }

    match run_dir(&data_dir, out_dir.as_deref(), max_tasks) {
        Ok(report) => {
            if detail {
                report.print_detail();
            } else {
                report.print_summary();
            }
        }
        Err(e) => {
            eprintln!("run failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn usage() {
    println!("arcrule — rule-inference engine for ARC-style grid puzzles");
    println!();
    println!("Usage: arcrule <data-dir> [--out <dir>] [--max <n>] [--detail]");
    println!();
    println!("  <data-dir>   directory of task .json files");
    println!("  --out <dir>  write <task_id>_guess.json prediction files here");
    println!("  --max <n>    only process the first n tasks (file-name order)");
    println!("  --detail     per-task report instead of the summary");
}
