use super::{DocumentMetadata, IdentityKey};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// SPDX version written into merged documents
pub const SPDX_VERSION: &str = "SPDX-2.3";

/// Data license every SPDX document must declare
pub const DATA_LICENSE: &str = "CC0-1.0";

/// Pseudo element ID of the document root
pub const DOCUMENT_ROOT_ID: &str = "SPDXRef-DOCUMENT";

/// External reference type carrying a Package URL
pub const PURL_REFERENCE_TYPE: &str = "purl";

/// SPDX 2.3 JSON document
///
/// Only the fields the merge and submit paths need are typed. Everything else
/// is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_license: Option<String>,
    #[serde(rename = "SPDXID", default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_info: Option<CreationInfo>,
    #[serde(default)]
    pub packages: Vec<SpdxPackage>,
    #[serde(default)]
    pub relationships: Vec<SpdxRelationship>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpdxDocument {
    /// Builds a document around freshly generated metadata
    pub fn assemble(
        metadata: &DocumentMetadata,
        packages: Vec<SpdxPackage>,
        relationships: Vec<SpdxRelationship>,
    ) -> Self {
        Self {
            spdx_version: Some(SPDX_VERSION.to_string()),
            data_license: Some(DATA_LICENSE.to_string()),
            spdx_id: Some(DOCUMENT_ROOT_ID.to_string()),
            name: Some(metadata.name().to_string()),
            document_namespace: Some(metadata.namespace().to_string()),
            creation_info: Some(CreationInfo {
                created: Some(metadata.created().to_string()),
                creators: metadata.creators().to_vec(),
                extra: Map::new(),
            }),
            packages,
            relationships,
            extra: Map::new(),
        }
    }

    /// Package URLs of all packages that carry one, in package order
    pub fn purls(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().filter_map(SpdxPackage::purl)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub creators: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// SPDX package entry
///
/// `spdx_id` is only unique inside the document the package came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_refs: Option<Vec<ExternalRef>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpdxPackage {
    pub fn new(spdx_id: &str, name: &str, version: Option<&str>) -> Self {
        Self {
            spdx_id: spdx_id.to_string(),
            name: name.to_string(),
            version_info: version.map(str::to_string),
            external_refs: None,
            extra: Map::new(),
        }
    }

    /// Adds a `PACKAGE-MANAGER`/`purl` external reference
    pub fn with_purl(mut self, purl: &str) -> Self {
        self.external_refs
            .get_or_insert_with(Vec::new)
            .push(ExternalRef::purl(purl));
        self
    }

    /// Locator of the first `purl` external reference, if any
    pub fn purl(&self) -> Option<&str> {
        self.external_refs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|r| r.reference_type == PURL_REFERENCE_TYPE)
            .map(|r| r.reference_locator.as_str())
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::from_package(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_category: Option<String>,
    pub reference_type: String,
    pub reference_locator: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExternalRef {
    pub fn purl(locator: &str) -> Self {
        Self {
            reference_category: Some("PACKAGE-MANAGER".to_string()),
            reference_type: PURL_REFERENCE_TYPE.to_string(),
            reference_locator: locator.to_string(),
            extra: Map::new(),
        }
    }
}

/// Mapping from a source document's SPDXIDs to the SPDXIDs kept in the merge
pub type IdRemapTable = HashMap<String, String>;

/// SPDX relationship between two elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxRelationship {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpdxRelationship {
    pub fn new(source: &str, relationship_type: &str, target: &str) -> Self {
        Self {
            spdx_element_id: source.to_string(),
            relationship_type: relationship_type.to_string(),
            related_spdx_element: target.to_string(),
            extra: Map::new(),
        }
    }

    /// Rewrites both endpoints through `table`; unknown IDs pass through.
    pub fn remap(mut self, table: &IdRemapTable) -> Self {
        if let Some(mapped) = table.get(&self.spdx_element_id) {
            self.spdx_element_id = mapped.clone();
        }
        if let Some(mapped) = table.get(&self.related_spdx_element) {
            self.related_spdx_element = mapped.clone();
        }
        self
    }

    pub fn is_self_reference(&self) -> bool {
        self.spdx_element_id == self.related_spdx_element
    }
}
