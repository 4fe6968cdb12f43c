// Batch sequence recognizer
//
// Pure glue over externally trained scoring models: for every test item,
// score it against every labeled model and report the full log-likelihood
// table plus the arg-max label. A model that fails to score an item is
// recorded as -inf for that label and never aborts the rest of the batch.

use std::collections::{BTreeMap, HashMap};
use std::error::Error;

use log::debug;

/// One test item: an observation matrix (rows are frames) and the lengths
/// of the concatenated sequences it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub observations: Vec<Vec<f64>>,
    pub lengths: Vec<usize>,
}

/// A pre-trained model that can score a test item.
///
/// Training is out of scope; implementations wrap whatever statistical
/// model the caller trained elsewhere. Scoring may fail for any reason
/// (degenerate parameters, dimension mismatch) and the recognizer treats
/// every failure the same way: that label scores -inf for that item.
pub trait SequenceModel {
    fn log_likelihood(&self, item: &TestItem) -> Result<f64, Box<dyn Error>>;
}

impl<M: SequenceModel + ?Sized> SequenceModel for Box<M> {
    fn log_likelihood(&self, item: &TestItem) -> Result<f64, Box<dyn Error>> {
        (**self).log_likelihood(item)
    }
}

/// Score every test item against every labeled model.
///
/// Returns two parallel vectors ordered by ascending test-item id: the
/// per-item label -> log-likelihood table, and the per-item best-guess
/// label. Ties keep the lexicographically first label; an empty model map
/// yields an empty table and an empty guess for each item, keeping the
/// vectors parallel.
pub fn recognize<M: SequenceModel>(
    models: &BTreeMap<String, M>,
    test_set: &BTreeMap<u32, TestItem>,
) -> (Vec<HashMap<String, f64>>, Vec<String>) {
    let mut probabilities = Vec::with_capacity(test_set.len());
    let mut guesses = Vec::with_capacity(test_set.len());

    for (item_id, item) in test_set {
        let mut table = HashMap::with_capacity(models.len());
        let mut best: Option<(&str, f64)> = None;

        for (label, model) in models {
            let log_l = match model.log_likelihood(item) {
                Ok(value) => value,
                Err(err) => {
                    debug!("model {label} could not score item {item_id}: {err}");
                    f64::NEG_INFINITY
                }
            };
            table.insert(label.clone(), log_l);
            if best.map_or(true, |(_, b)| log_l > b) {
                best = Some((label, log_l));
            }
        }

        probabilities.push(table);
        guesses.push(best.map(|(label, _)| label.to_string()).unwrap_or_default());
    }

    (probabilities, guesses)
}
