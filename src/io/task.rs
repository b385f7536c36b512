// Task files: {"train": [{"input", "output"}...], "test": [{"input", ...}]}.
// Grids are nested integer arrays. Test cases may carry an "output" (the
// ground truth) in evaluation datasets; predictions never depend on it.

use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainPair {
    pub input: Grid,
    pub output: Grid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub train: Vec<TrainPair>,
    pub test: Vec<TestCase>,
}

impl Task {
    /// Training pairs in the shape the detectors consume.
    pub fn training_pairs(&self) -> Vec<(Grid, Grid)> {
        self.train
            .iter()
            .map(|p| (p.input.clone(), p.output.clone()))
            .collect()
    }
}

/// Load one task file, tolerating minor schema drift: missing keys become
/// empty sections and non-integer cells become background.
pub fn load_task(path: &str) -> anyhow::Result<Task> {
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;

    let mut train = Vec::new();
    if let Some(train_arr) = raw.get("train").and_then(|v| v.as_array()) {
        for ex in train_arr {
            if let (Some(input), Some(output)) = (ex.get("input"), ex.get("output")) {
                train.push(TrainPair {
                    input: parse_value_grid(input),
                    output: parse_value_grid(output),
                });
            }
        }
    }

    let mut test = Vec::new();
    if let Some(test_arr) = raw.get("test").and_then(|v| v.as_array()) {
        for ex in test_arr {
            if let Some(input) = ex.get("input") {
                test.push(TestCase {
                    input: parse_value_grid(input),
                    output: ex.get("output").map(parse_value_grid),
                });
            }
        }
    }

    let id = std::path::Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Task { id, train, test })
}

pub(crate) fn parse_value_grid(val: &serde_json::Value) -> Grid {
    val.as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    row.as_array()
                        .map(|cells| cells.iter().map(|c| c.as_u64().unwrap_or(0) as u8).collect())
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_parse_with_optional_ground_truth() {
        let json = r#"{
            "train": [{"input": [[0, 1]], "output": [[1, 0]]}],
            "test": [{"input": [[2, 0]]}]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.train.len(), 1);
        assert_eq!(task.test[0].input, vec![vec![2, 0]]);
        assert!(task.test[0].output.is_none());

        let pairs = task.training_pairs();
        assert_eq!(pairs[0].1, vec![vec![1, 0]]);
    }

    #[test]
    fn lenient_loader_takes_id_from_file_stem() {
        let path = std::env::temp_dir().join("arcrule_task01.json");
        std::fs::write(
            &path,
            r#"{"train": [{"input": [[3]], "output": [[7]]}],
                "test": [{"input": [[3, 3]], "output": [[7, 7]]}]}"#,
        )
        .unwrap();
        let task = load_task(path.to_str().unwrap()).unwrap();
        assert_eq!(task.id, "arcrule_task01");
        assert_eq!(task.test[0].output, Some(vec![vec![7, 7]]));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_sections_become_empty() {
        let path = std::env::temp_dir().join("arcrule_task_empty.json");
        std::fs::write(&path, r#"{"test": [{"input": [[1]]}]}"#).unwrap();
        let task = load_task(path.to_str().unwrap()).unwrap();
        assert!(task.train.is_empty());
        assert_eq!(task.test.len(), 1);
        std::fs::remove_file(&path).ok();
    }
}
