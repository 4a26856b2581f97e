//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has the expected count
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated and follow `UCS::*::V1\0`
//! 4. No raw `UCS::` domain literals in library source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ucs_graph::proof::hash_domain::HashDomain;

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        5,
        "expected 5 domain variants; if you added a new domain, update this count"
    );
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_wire_format() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.ends_with(&[0]), "{domain} is not null-terminated");
        assert!(bytes.starts_with(b"UCS::"), "{domain} does not start with UCS::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn no_raw_domain_literals_outside_registry() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap();
    let mut files = Vec::new();
    for krate in ["graph/src", "search/src"] {
        rust_sources(&root.join(krate), &mut files);
    }
    assert!(!files.is_empty(), "no library sources found under {root:?}");

    let needle = concat!("b\"", "UCS::");
    for file in files {
        if file.ends_with("hash_domain.rs") {
            continue;
        }
        let text = fs::read_to_string(&file).unwrap();
        assert!(
            !text.contains(needle),
            "{} declares a raw hash domain literal; add it to HashDomain instead",
            file.display()
        );
    }
}
