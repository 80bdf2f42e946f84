use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::region::ContigLengths;

/// A single contig/sequence in a reference genome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name (SN tag in SAM, first column of .fai)
    pub name: String,

    /// Sequence length (LN tag in SAM, second column of .fai)
    pub length: u64,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// An ordered set of contigs loaded from a FASTA index, sequence dictionary or
/// chromsizes table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContigDictionary {
    /// Source file path (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Contigs in file order
    pub contigs: Vec<Contig>,

    /// Name -> index into `contigs`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ContigDictionary {
    /// Build a dictionary, keeping the first occurrence of a repeated name.
    #[must_use]
    pub fn new(contigs: Vec<Contig>) -> Self {
        let mut dictionary = Self {
            source: None,
            contigs,
            index: HashMap::new(),
        };

        dictionary.rebuild_index();
        dictionary
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn rebuild_index(&mut self) {
        self.index.clear();

        for (i, contig) in self.contigs.iter().enumerate() {
            if self.index.contains_key(&contig.name) {
                warn!(
                    contig = %contig.name,
                    "Duplicate contig name in dictionary, keeping first occurrence"
                );
                continue;
            }
            self.index.insert(contig.name.clone(), i);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Contig> {
        self.index.get(name).map(|&i| &self.contigs[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
}

impl ContigLengths for ContigDictionary {
    fn contig_length(&self, name: &str) -> Option<u64> {
        self.get(name).map(|c| c.length)
    }
}
