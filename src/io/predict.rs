// Prediction files mirror the task encoding: the train section is echoed
// back and each test case carries the predicted output. Written compact,
// one file per task, `<task_id>_guess.json`.

use serde::Serialize;

use crate::core::grid::{self, Grid};

use super::task::{Task, TrainPair};

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub train: Vec<TrainPair>,
    pub test: Vec<PredictedCase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictedCase {
    pub input: Grid,
    pub output: Grid,
}

impl Prediction {
    /// Pair each test input of the task with its predicted output.
    /// Extra or missing outputs are a caller bug; lengths must agree.
    pub fn for_task(task: &Task, outputs: &[Grid]) -> Self {
        let test = task
            .test
            .iter()
            .zip(outputs)
            .map(|(case, output)| PredictedCase {
                input: case.input.clone(),
                output: output.clone(),
            })
            .collect();
        Prediction {
            train: task.train.clone(),
            test,
        }
    }
}

pub fn write_prediction(path: &str, prediction: &Prediction) -> anyhow::Result<()> {
    let json = serde_json::to_string(prediction)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Submission-format check for one prediction file. Returns the list of
/// problems found; an empty list means the file conforms.
pub fn verify_prediction_file(path: &str) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let mut problems = Vec::new();

    if raw.get("train").is_none() {
        problems.push("missing 'train' key".to_string());
    }
    match raw.get("test").and_then(|v| v.as_array()) {
        None => problems.push("missing or non-array 'test' key".to_string()),
        Some(cases) if cases.is_empty() => problems.push("empty 'test' array".to_string()),
        Some(cases) => {
            for (i, case) in cases.iter().enumerate() {
                if case.get("input").is_none() {
                    problems.push(format!("test[{}] missing 'input'", i));
                }
                match case.get("output") {
                    None => problems.push(format!("test[{}] missing 'output'", i)),
                    Some(output) => {
                        let grid = super::task::parse_value_grid(output);
                        for p in verify_grid(&grid) {
                            problems.push(format!("test[{}] output {}", i, p));
                        }
                    }
                }
            }
        }
    }
    Ok(problems)
}

/// Structural conformance of one output grid.
pub fn verify_grid(g: &Grid) -> Vec<String> {
    let mut problems = Vec::new();
    if g.is_empty() || g[0].is_empty() {
        problems.push("is empty".to_string());
        return problems;
    }
    let cols = g[0].len();
    if g.iter().any(|row| row.len() != cols) {
        problems.push("is not rectangular".to_string());
    }
    if g.iter().flatten().any(|&c| c > grid::MAX_COLOR) {
        problems.push("has colors outside 0-9".to_string());
    }
    problems
}
