use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::models::{FEATURE_COUNT, FeatureVector, GoalTag};

/// Anything that can guess which goal a nutrient profile serves.
///
/// The allocator only sees this trait, so the model behind it can be
/// retrained on other data without touching allocation.
pub trait GoalPredictor {
    fn predict(&self, features: &FeatureVector) -> GoalTag;
}

/// Which predictor to train for a planning call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorKind {
    #[default]
    DecisionTree,
    CatalogTags,
}

impl PredictorKind {
    pub fn train(self, catalog: &FoodCatalog) -> Box<dyn GoalPredictor> {
        match self {
            PredictorKind::DecisionTree => Box::new(DecisionTree::fit(catalog)),
            PredictorKind::CatalogTags => {
                Box::new(CatalogTags::from_catalog(catalog, GoalTag::Maintain))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(GoalTag),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// CART classification tree grown with Gini impurity until every leaf is pure
/// or cannot be split.
///
/// Among equally good splits the lowest feature index wins, then the lowest
/// threshold. Unsplittable mixed leaves predict the majority label, with ties
/// going to the earlier label in `GoalTag::ALL`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

/// A training example: features and their label.
pub type Sample = (FeatureVector, GoalTag);

impl DecisionTree {
    pub fn fit(catalog: &FoodCatalog) -> Self {
        let samples: Vec<Sample> = catalog
            .items()
            .iter()
            .map(|f| (f.features(), f.goal_tag))
            .collect();
        Self::fit_samples(&samples)
    }

    /// An empty training set yields a tree that always predicts `Maintain`.
    pub fn fit_samples(samples: &[Sample]) -> Self {
        if samples.is_empty() {
            return Self {
                root: Node::Leaf(GoalTag::Maintain),
            };
        }

        let indices: Vec<usize> = (0..samples.len()).collect();
        let root = build_node(samples, &indices);
        tracing::debug!(samples = samples.len(), "trained goal decision tree");
        Self { root }
    }

    /// Feature index and threshold of the root split, if the tree has one.
    pub fn root_split(&self) -> Option<(usize, f64)> {
        match &self.root {
            Node::Leaf(_) => None,
            Node::Split {
                feature, threshold, ..
            } => Some((*feature, *threshold)),
        }
    }

    pub fn depth(&self) -> usize {
        fn depth_of(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Split { left, right, .. } => 1 + depth_of(left).max(depth_of(right)),
            }
        }
        depth_of(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn leaves_of(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 1,
                Node::Split { left, right, .. } => leaves_of(left) + leaves_of(right),
            }
        }
        leaves_of(&self.root)
    }
}

impl GoalPredictor for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> GoalTag {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(tag) => return *tag,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn label_index(tag: GoalTag) -> usize {
    match tag {
        GoalTag::Maintain => 0,
        GoalTag::WeightGain => 1,
        GoalTag::WeightLoss => 2,
    }
}

fn label_counts<'a>(samples: &[Sample], indices: impl Iterator<Item = &'a usize>) -> [usize; 3] {
    let mut counts = [0; 3];
    for &i in indices {
        counts[label_index(samples[i].1)] += 1;
    }
    counts
}

fn gini(counts: &[usize; 3], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum::<f64>()
}

fn majority(counts: &[usize; 3]) -> GoalTag {
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    GoalTag::ALL[best]
}

/// Lowest weighted Gini split as (feature, threshold), or `None` when every
/// sample shares the same feature vector.
fn best_split(samples: &[Sample], indices: &[usize]) -> Option<(usize, f64)> {
    let n = indices.len() as f64;
    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..FEATURE_COUNT {
        let mut values: Vec<f64> = indices.iter().map(|&i| samples[i].0[feature]).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();

        for pair in values.windows(2) {
            let mut threshold = (pair[0] + pair[1]) / 2.0;
            // Adjacent floats can round the midpoint up onto the larger value.
            if threshold >= pair[1] {
                threshold = pair[0];
            }

            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| samples[i].0[feature] <= threshold);

            let left_counts = label_counts(samples, left.iter());
            let right_counts = label_counts(samples, right.iter());
            let weighted = (left.len() as f64 * gini(&left_counts, left.len())
                + right.len() as f64 * gini(&right_counts, right.len()))
                / n;

            if best.is_none_or(|(_, _, score)| weighted < score) {
                best = Some((feature, threshold, weighted));
            }
        }
    }

    best.map(|(feature, threshold, _)| (feature, threshold))
}

fn build_node(samples: &[Sample], indices: &[usize]) -> Node {
    let counts = label_counts(samples, indices.iter());
    if counts.iter().filter(|&&c| c > 0).count() <= 1 {
        return Node::Leaf(majority(&counts));
    }

    match best_split(samples, indices) {
        None => Node::Leaf(majority(&counts)),
        Some((feature, threshold)) => {
            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| samples[i].0[feature] <= threshold);
            Node::Split {
                feature,
                threshold,
                left: Box::new(build_node(samples, &left)),
                right: Box::new(build_node(samples, &right)),
            }
        }
    }
}

/// Predicts the stored tag of the first catalog item with an identical
/// feature vector, or `fallback` when none matches.
#[derive(Debug, Clone)]
pub struct CatalogTags {
    entries: Vec<Sample>,
    fallback: GoalTag,
}

impl CatalogTags {
    pub fn from_catalog(catalog: &FoodCatalog, fallback: GoalTag) -> Self {
        Self {
            entries: catalog
                .items()
                .iter()
                .map(|f| (f.features(), f.goal_tag))
                .collect(),
            fallback,
        }
    }
}

impl GoalPredictor for CatalogTags {
    fn predict(&self, features: &FeatureVector) -> GoalTag {
        self.entries
            .iter()
            .find(|(f, _)| f == features)
            .map(|(_, tag)| *tag)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_reproduces_builtin_tags() {
        let catalog = FoodCatalog::builtin();
        let tree = DecisionTree::fit(&catalog);
        for item in catalog.items() {
            assert_eq!(tree.predict(&item.features()), item.goal_tag, "{}", item.name);
        }
    }

    fn split(feature: usize, threshold: f64, left: Node, right: Node) -> Node {
        Node::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_tree_shape_on_builtin_catalog() {
        let tree = DecisionTree::fit(&FoodCatalog::builtin());
        // protein <= 9.0 separates the high-protein loss foods first
        assert_eq!(tree.root_split(), Some((1, 9.0)));
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 4);

        let expected = split(
            1,
            9.0,
            split(
                2,
                (1.8 + 3.0) / 2.0,
                split(
                    0,
                    90.5,
                    Node::Leaf(GoalTag::WeightLoss),
                    Node::Leaf(GoalTag::Maintain),
                ),
                Node::Leaf(GoalTag::WeightGain),
            ),
            Node::Leaf(GoalTag::WeightLoss),
        );
        assert_eq!(tree.root, expected);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(DecisionTree::fit(&catalog), DecisionTree::fit(&catalog));
    }

    #[test]
    fn test_empty_training_set_predicts_maintain() {
        let tree = DecisionTree::fit_samples(&[]);
        assert_eq!(tree.predict(&[100.0, 1.0, 1.0, 1.0]), GoalTag::Maintain);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_single_split() {
        let samples = vec![
            ([100.0, 30.0, 2.0, 0.0], GoalTag::WeightLoss),
            ([400.0, 10.0, 20.0, 50.0], GoalTag::WeightGain),
        ];
        let tree = DecisionTree::fit_samples(&samples);
        assert_eq!(tree.root_split(), Some((0, 250.0)));
        assert_eq!(tree.predict(&[120.0, 0.0, 0.0, 0.0]), GoalTag::WeightLoss);
        assert_eq!(tree.predict(&[900.0, 0.0, 0.0, 0.0]), GoalTag::WeightGain);
    }

    #[test]
    fn test_conflicting_duplicates_use_majority() {
        let x = [150.0, 5.0, 3.0, 27.0];
        let samples = vec![
            (x, GoalTag::WeightLoss),
            (x, GoalTag::WeightGain),
            (x, GoalTag::WeightGain),
        ];
        let tree = DecisionTree::fit_samples(&samples);
        assert_eq!(tree.predict(&x), GoalTag::WeightGain);
    }

    #[test]
    fn test_conflicting_duplicates_tie_goes_to_label_order() {
        let x = [150.0, 5.0, 3.0, 27.0];
        let tree = DecisionTree::fit_samples(&[(x, GoalTag::WeightLoss), (x, GoalTag::WeightGain)]);
        assert_eq!(tree.predict(&x), GoalTag::WeightGain);

        let tree = DecisionTree::fit_samples(&[(x, GoalTag::WeightLoss), (x, GoalTag::Maintain)]);
        assert_eq!(tree.predict(&x), GoalTag::Maintain);
    }

    #[test]
    fn test_catalog_tags_lookup() {
        let catalog = FoodCatalog::builtin();
        let lookup = CatalogTags::from_catalog(&catalog, GoalTag::Maintain);
        for item in catalog.items() {
            assert_eq!(lookup.predict(&item.features()), item.goal_tag);
        }
        assert_eq!(lookup.predict(&[1.0, 2.0, 3.0, 4.0]), GoalTag::Maintain);
    }

    #[test]
    fn test_predictor_kinds_agree_on_builtin_catalog() {
        let catalog = FoodCatalog::builtin();
        let tree = PredictorKind::DecisionTree.train(&catalog);
        let tags = PredictorKind::CatalogTags.train(&catalog);
        for item in catalog.items() {
            assert_eq!(tree.predict(&item.features()), tags.predict(&item.features()));
        }
    }
}
