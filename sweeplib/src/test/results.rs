use crate::enumerator::Configuration;
use crate::parser::Metrics;
use crate::results::{OrderedMap, ResultTable};

fn configuration(workload: &str, algorithm: &str, frame_count: u32) -> Configuration {
    Configuration { workload: workload.to_string(), algorithm: algorithm.to_string(), frame_count }
}

#[test]
fn ordered_map_keeps_insertion_order() {
    let mut map = OrderedMap::new();
    for key in [50, 1, 25, 10] {
        map.insert(key, key * 2);
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![50, 1, 25, 10]);
    assert_eq!(map.insert(25, 0), Some(50));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![50, 1, 25, 10]);
    assert_eq!(map.get(&25), Some(&0));
}

#[test]
fn insert_creates_levels_and_replaces_duplicates() {
    let mut table = ResultTable::new();
    let first = Metrics { page_faults: 3, disk_reads: 2, disk_writes: 1 };
    let second = Metrics { page_faults: 30, disk_reads: 20, disk_writes: 10 };
    assert!(table.is_empty());
    assert_eq!(table.insert(&configuration("scan", "fifo", 10), first), None);
    assert_eq!(table.get("scan", "fifo", 10), Some(&first));
    assert_eq!(table.insert(&configuration("scan", "fifo", 10), second), Some(first));
    assert_eq!(table.get("scan", "fifo", 10), Some(&second));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("scan", "rand", 10), None);
    assert_eq!(table.get("sort", "fifo", 10), None);
}

#[test]
fn serialises_as_nested_objects() {
    let mut table = ResultTable::new();
    table.insert(&configuration("focus", "rand", 2), Metrics { page_faults: 5, disk_reads: 4, disk_writes: 1 });
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json, serde_json::json!({
        "focus": { "rand": { "2": { "page_faults": 5, "disk_reads": 4, "disk_writes": 1 } } }
    }));
}
