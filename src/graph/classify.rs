use std::collections::BTreeMap;

use crate::graph::TumorTable;

/// Gene to per-tumor correlation mapping built across all loaded tables.
///
/// Both map levels are ordered so classification results compare equal
/// independently of table iteration order. A gene's entry set is exactly the
/// set of tumors in which it passed the correlation filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub associations: BTreeMap<String, BTreeMap<String, f64>>,
}

pub fn classify(tables: &[TumorTable]) -> Classification {
    let mut associations: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for table in tables {
        for row in &table.rows {
            associations
                .entry(row.gene.clone())
                .or_default()
                .insert(table.tumor_id.clone(), row.pcc);
        }
    }
    Classification { associations }
}

impl Classification {
    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }

    pub fn is_cross(&self, gene: &str) -> bool {
        self.associations
            .get(gene)
            .map(|tumors| tumors.len() >= 2)
            .unwrap_or(false)
    }

    /// (tumor-specific, cross-tumor) gene counts.
    pub fn partition_counts(&self) -> (usize, usize) {
        let cross = self
            .associations
            .values()
            .filter(|tumors| tumors.len() >= 2)
            .count();
        (self.associations.len() - cross, cross)
    }

    pub fn cross_genes(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, f64>)> {
        self.associations
            .iter()
            .filter(|(_, tumors)| tumors.len() >= 2)
    }
}

/// The tumor with the highest correlation for a gene. Ties go to the
/// lexicographically smallest tumor id.
pub fn primary_tumor(tumors: &BTreeMap<String, f64>) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (tumor, pcc) in tumors {
        let better = match best {
            Some((_, best_pcc)) => *pcc > best_pcc,
            None => true,
        };
        if better {
            best = Some((tumor.as_str(), *pcc));
        }
    }
    best
}
