#![no_main]
extern crate argocd_rollback_versions;
extern crate libfuzzer_sys;

use argocd_rollback_versions::select_rollback_version;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(id_and_labels) = std::str::from_utf8(data) {
        let parts: Vec<&str> = id_and_labels.split('\n').collect();
        if parts.len() > 1 {
            if let Ok(id) = parts[0].trim().parse::<i64>() {
                let labels: Vec<String> = parts[1..].iter().map(|s| s.to_string()).collect();
                let _ = select_rollback_version(&labels, id);
            }
        }
    }
});
