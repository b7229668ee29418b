use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use mlbb_meta::proxy::ProxyRotator;

fn pool(n: usize) -> ProxyRotator {
    let endpoints = (0..n).map(|i| format!("127.0.0.1:{}", 60000 + i)).collect();
    ProxyRotator::new(endpoints).expect("non-empty pool should build")
}

#[test]
fn rejects_empty_pool() {
    assert!(ProxyRotator::new(Vec::new()).is_err());
}

#[test]
fn cycles_endpoints_in_order() {
    let rotator = pool(3);
    let indices: Vec<usize> = (0..7).map(|_| rotator.next().0).collect();
    assert_eq!(indices, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn spreads_load_evenly() {
    let rotator = pool(3);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..31 {
        let (_, endpoint) = rotator.next();
        *counts.entry(endpoint.to_string()).or_default() += 1;
    }
    // 31 draws over 3 endpoints: 11/10/10.
    let mut seen: Vec<usize> = counts.values().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![10, 10, 11]);
}

#[test]
fn balances_under_concurrent_draws() {
    let rotator = Arc::new(pool(4));
    let mut handles = Vec::new();
    for _ in 0..4 {
        let rotator = Arc::clone(&rotator);
        handles.push(thread::spawn(move || {
            let mut counts = vec![0usize; 4];
            for _ in 0..25 {
                counts[rotator.next().0] += 1;
            }
            counts
        }));
    }
    let mut totals = vec![0usize; 4];
    for handle in handles {
        for (idx, n) in handle.join().expect("worker thread").iter().enumerate() {
            totals[idx] += n;
        }
    }
    // 100 draws over 4 endpoints land exactly 25 on each.
    assert_eq!(totals, vec![25, 25, 25, 25]);
}
