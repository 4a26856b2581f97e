//! Domain separators for [`super::hash::canonical_hash`].
//!
//! A graph digest and a trace digest over identical bytes must differ, so
//! every hash names its domain. The list below is the only place domain
//! byte strings are spelled out.

/// Expands one list of `Variant => b"..."` pairs into [`HashDomain`], its
/// byte table, `ALL`, and `Display`.
macro_rules! hash_domains {
    ($( $(#[$doc:meta])* $name:ident => $tag:expr, )+) => {
        /// Which kind of content a digest covers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $( $(#[$doc])* $name, )+
        }

        impl HashDomain {
            /// Every domain, in declaration order.
            pub const ALL: &[HashDomain] = &[$( HashDomain::$name ),+];

            /// Null-terminated prefix fed to SHA-256 ahead of the content.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( HashDomain::$name => $tag, )+
                }
            }

            /// Variant name, for diagnostics.
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $( HashDomain::$name => stringify!($name), )+
                }
            }
        }

        impl std::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

hash_domains! {
    /// Whole-graph snapshot: nodes, values, weighted edges.
    GraphSnapshot => b"UCS::GRAPH_SNAPSHOT::V1\0",
    /// One dequeue record.
    SearchStep => b"UCS::SEARCH_STEP::V1\0",
    /// Complete trace: steps plus metadata.
    SearchTrace => b"UCS::SEARCH_TRACE::V1\0",
    /// Search policy.
    SearchPolicy => b"UCS::SEARCH_POLICY::V1\0",
    /// Benchmark determinism guard.
    BenchGuard => b"UCS::BENCH_GUARD::V1\0",
}
