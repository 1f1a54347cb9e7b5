#![no_main]
extern crate argocd_rollback_versions;
extern crate libfuzzer_sys;

use argocd_rollback_versions::{sort_rollback_versions, Ordering};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(labels) = std::str::from_utf8(data) {
        let labels: Vec<String> = labels.split('\n').map(|s| s.to_string()).collect();

        let ascending = sort_rollback_versions(labels.clone(), &Ordering::Ascending);
        let descending = sort_rollback_versions(labels.clone(), &Ordering::Descending);
        assert_eq!(ascending.is_ok(), descending.is_ok());

        if let Ok(ascending) = ascending {
            assert_eq!(ascending.len(), labels.len());
            let again = sort_rollback_versions(ascending.clone(), &Ordering::Ascending).unwrap();
            assert_eq!(ascending, again);
        }
    }
});
