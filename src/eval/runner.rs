// Batch runner: load every task in a directory, solve it, optionally write
// `<id>_guess.json` next to an output directory, and score against ground
// truth when the task file carries test outputs.

use std::path::Path;
use std::time::Instant;

use crate::core::grid::Grid;
use crate::detect::Transformation;
use crate::io::predict::{write_prediction, Prediction};
use crate::io::task::{load_task, Task};
use crate::solver::solve_with_rule;

use super::metrics::{exact_match, pixel_accuracy, Score};

#[derive(Debug)]
pub struct RunReport {
    pub total_tasks: usize,
    /// Tasks with at least one ground-truth test output.
    pub scored_tasks: usize,
    /// Scored tasks whose every test output matched exactly.
    pub exact_tasks: usize,
    pub task_accuracy: f64,
    pub scored_outputs: usize,
    pub exact_outputs: usize,
    pub avg_pixel_acc: f64,
    pub elapsed_ms: u64,
    pub by_rule: Vec<(String, usize)>,
    pub per_task: Vec<TaskReport>,
}

#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task_id: String,
    pub rule: String,
    pub exact: Option<bool>,
    pub pixel_acc: Option<f64>,
    pub elapsed_ms: u64,
}

/// Solve every test input of one task.
pub fn solve_task(task: &Task) -> Vec<(Grid, Transformation)> {
    let pairs = task.training_pairs();
    task.test
        .iter()
        .map(|case| solve_with_rule(&pairs, &case.input))
        .collect()
}

/// Run over a directory of `*.json` task files (guess files excluded).
/// Tasks are processed in file-name order; each one is independent.
pub fn run_dir(data_dir: &str, out_dir: Option<&str>, max_tasks: Option<usize>) -> anyhow::Result<RunReport> {
    let mut entries: Vec<_> = std::fs::read_dir(Path::new(data_dir))?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.extension().map(|ext| ext == "json").unwrap_or(false)
                && !path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.ends_with("_guess"))
                    .unwrap_or(false)
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    if let Some(max) = max_tasks {
        entries.truncate(max);
    }

    let total_start = Instant::now();
    let mut per_task = Vec::new();
    let mut score = Score::default();
    let mut rule_counts: rustc_hash::FxHashMap<String, usize> = Default::default();

    for entry in &entries {
        let path = entry.path();
        let task = match load_task(path.to_str().unwrap_or("")) {
            Ok(t) => t,
            Err(_) => continue,
        };

        let start = Instant::now();
        let solved = solve_task(&task);
        let elapsed = start.elapsed().as_millis() as u64;

        let rule_name = solved
            .first()
            .map(|(_, rule)| rule.name())
            .unwrap_or("identity")
            .to_string();
        *rule_counts.entry(rule_name.clone()).or_default() += 1;

        if let Some(out) = out_dir {
            let outputs: Vec<Grid> = solved.iter().map(|(g, _)| g.clone()).collect();
            let prediction = Prediction::for_task(&task, &outputs);
            let guess_path = Path::new(out).join(format!("{}_guess.json", task.id));
            write_prediction(guess_path.to_str().unwrap_or(""), &prediction)?;
        }

        let mut task_exact = None;
        let mut task_pixel = None;
        for (case, (predicted, _)) in task.test.iter().zip(&solved) {
            if let Some(truth) = &case.output {
                score.record(predicted, truth);
                task_exact = Some(task_exact.unwrap_or(true) && exact_match(predicted, truth));
                task_pixel =
                    Some(task_pixel.unwrap_or(0.0) + pixel_accuracy(predicted, truth));
            }
        }
        if let Some(sum) = task_pixel {
            let scored_cases = task.test.iter().filter(|c| c.output.is_some()).count();
            task_pixel = Some(sum / scored_cases.max(1) as f64);
        }

        per_task.push(TaskReport {
            task_id: task.id,
            rule: rule_name,
            exact: task_exact,
            pixel_acc: task_pixel,
            elapsed_ms: elapsed,
        });
    }

    let mut by_rule: Vec<(String, usize)> = rule_counts.into_iter().collect();
    by_rule.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    // A task counts once no matter how many test cases it carries.
    let scored_tasks = per_task.iter().filter(|t| t.exact.is_some()).count();
    let exact_tasks = per_task.iter().filter(|t| t.exact == Some(true)).count();

    Ok(RunReport {
        total_tasks: per_task.len(),
        scored_tasks,
        exact_tasks,
        task_accuracy: if scored_tasks == 0 {
            0.0
        } else {
            exact_tasks as f64 / scored_tasks as f64
        },
        scored_outputs: score.total,
        exact_outputs: score.exact,
        avg_pixel_acc: score.avg_pixel_accuracy(),
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        by_rule,
        per_task,
    })
}

impl RunReport {
    pub fn print_summary(&self) {
        println!("=== arcrule run ===");
        println!("Tasks: {} | Time: {}ms", self.total_tasks, self.elapsed_ms);
        if self.scored_tasks > 0 {
            println!(
                "Scored tasks: {} | Exact: {} ({:.1}%)",
                self.scored_tasks,
                self.exact_tasks,
                self.task_accuracy * 100.0
            );
            println!(
                "Scored outputs: {} | Exact: {} | Pixel: {:.1}%",
                self.scored_outputs,
                self.exact_outputs,
                self.avg_pixel_acc * 100.0
            );
        }
        println!("\nBy rule:");
        for (rule, count) in &self.by_rule {
            println!("  {}: {}", rule, count);
        }
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!("\nPer-task detail:");
        for t in &self.per_task {
            let status = match t.exact {
                Some(true) => "OK",
                Some(false) => "--",
                None => "??",
            };
            let pixel = t
                .pixel_acc
                .map(|p| format!("{:.1}%", p * 100.0))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "  [{}] {} | rule={} pixel={} time={}ms",
                status, t.task_id, t.rule, pixel, t.elapsed_ms
            );
        }
    }
}
