use crate::sbom_processing::domain::{
    IdRemapTable, IdentityKey, SpdxDocument, SpdxPackage, SpdxRelationship,
};
use std::collections::{HashMap, HashSet};

/// Counters collected while merging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub packages_seen: usize,
    pub packages_retained: usize,
    pub duplicates_collapsed: usize,
    pub relationships_seen: usize,
    pub relationships_retained: usize,
    pub self_references_dropped: usize,
    /// SPDXIDs kept for two different identity keys (one per extra claim)
    pub colliding_ids: Vec<String>,
}

/// Packages and relationships that survived the merge
#[derive(Debug, Clone)]
pub struct MergedContent {
    pub packages: Vec<SpdxPackage>,
    pub relationships: Vec<SpdxRelationship>,
    pub stats: MergeStats,
}

/// SbomMerger service folding SPDX documents into one package set
///
/// Packages are deduplicated by [`IdentityKey`] and the first occurrence wins.
/// Every document gets its own remapping table from its SPDXIDs to the
/// SPDXIDs that were kept, and its relationships are rewritten through it.
/// A relationship that points at itself after rewriting is dropped; other
/// repeated relationships are kept as they are.
///
/// All state lives in the merger value, so each merge starts empty.
#[derive(Debug, Default)]
pub struct SbomMerger {
    kept_ids: HashMap<IdentityKey, String>,
    claimed_ids: HashSet<String>,
    packages: Vec<SpdxPackage>,
    relationships: Vec<SpdxRelationship>,
    stats: MergeStats,
}

impl SbomMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a whole batch of documents in order
    pub fn merge<I>(documents: I) -> MergedContent
    where
        I: IntoIterator<Item = SpdxDocument>,
    {
        let mut merger = Self::new();
        for document in documents {
            merger.add_document(document);
        }
        merger.finish()
    }

    /// Folds one document into the merge
    ///
    /// Document metadata is ignored; only packages and relationships are used.
    pub fn add_document(&mut self, document: SpdxDocument) {
        let SpdxDocument {
            packages,
            relationships,
            ..
        } = document;

        let remap = self.absorb_packages(packages);
        self.absorb_relationships(relationships, &remap);
    }

    pub fn finish(mut self) -> MergedContent {
        self.stats.packages_retained = self.packages.len();
        self.stats.relationships_retained = self.relationships.len();

        MergedContent {
            packages: self.packages,
            relationships: self.relationships,
            stats: self.stats,
        }
    }

    fn absorb_packages(&mut self, packages: Vec<SpdxPackage>) -> IdRemapTable {
        let mut remap = IdRemapTable::with_capacity(packages.len());

        for package in packages {
            self.stats.packages_seen += 1;
            let key = package.identity_key();

            if let Some(kept_id) = self.kept_ids.get(&key) {
                remap.insert(package.spdx_id, kept_id.clone());
                self.stats.duplicates_collapsed += 1;
                continue;
            }

            if !self.claimed_ids.insert(package.spdx_id.clone()) {
                self.stats.colliding_ids.push(package.spdx_id.clone());
            }
            self.kept_ids.insert(key, package.spdx_id.clone());
            remap.insert(package.spdx_id.clone(), package.spdx_id.clone());
            self.packages.push(package);
        }

        remap
    }

    fn absorb_relationships(&mut self, relationships: Vec<SpdxRelationship>, remap: &IdRemapTable) {
        for relationship in relationships {
            self.stats.relationships_seen += 1;
            let relationship = relationship.remap(remap);

            if relationship.is_self_reference() {
                self.stats.self_references_dropped += 1;
                continue;
            }
            self.relationships.push(relationship);
        }
    }
}
