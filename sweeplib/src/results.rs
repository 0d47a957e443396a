use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use crate::enumerator::Configuration;
use crate::parser::Metrics;

/// A small map which iterates in insertion order
///
/// Tables here hold a handful of keys per level, so a linear scan beats hashing and keeps the
/// frame counts in the order the x axis needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing (in place) and returning any previous value for the key
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.get_mut(&key) {
            Some(existing) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets the value for a key, inserting a default on first use
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key, V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Results for one algorithm, keyed by frame count
pub type FrameResults = OrderedMap<u32, Metrics>;

/// Results for one workload, keyed by algorithm name
pub type AlgorithmResults = OrderedMap<String, FrameResults>;

/// Every result of a sweep, as workload -> algorithm -> frame count -> metrics
///
/// Each level keeps the order configurations were inserted in, so inserting in enumeration order
/// keeps frame counts in the configured order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    workloads: OrderedMap<String, AlgorithmResults>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the metrics of one configuration, creating the workload and algorithm levels on
    /// first use. A repeated configuration silently replaces the earlier result, which is returned.
    pub fn insert(&mut self, configuration: &Configuration, metrics: Metrics) -> Option<Metrics> {
        self.workloads
            .get_or_default(configuration.workload.clone())
            .get_or_default(configuration.algorithm.clone())
            .insert(configuration.frame_count, metrics)
    }

    pub fn get(&self, workload: &str, algorithm: &str, frame_count: u32) -> Option<&Metrics> {
        self.workloads.get(workload)?.get(algorithm)?.get(&frame_count)
    }

    pub fn workload(&self, workload: &str) -> Option<&AlgorithmResults> {
        self.workloads.get(workload)
    }

    pub fn workloads(&self) -> impl Iterator<Item = (&String, &AlgorithmResults)> {
        self.workloads.iter()
    }

    /// Total number of metrics entries across every workload and algorithm
    pub fn len(&self) -> usize {
        self.workloads.iter()
            .flat_map(|(_, algorithms)| algorithms.iter())
            .map(|(_, frames)| frames.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
