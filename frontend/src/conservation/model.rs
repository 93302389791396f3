use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// IUCN Red List category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Acronym {
    Ne,
    Dd,
    Lc,
    Nt,
    Vu,
    En,
    Cr,
    Ew,
    Ex,
}

impl Acronym {
    pub fn as_str(self) -> &'static str {
        match self {
            Acronym::Ne => "NE",
            Acronym::Dd => "DD",
            Acronym::Lc => "LC",
            Acronym::Nt => "NT",
            Acronym::Vu => "VU",
            Acronym::En => "EN",
            Acronym::Cr => "CR",
            Acronym::Ew => "EW",
            Acronym::Ex => "EX",
        }
    }

    /// The five categories drawn as bars.
    pub fn visible(self) -> Option<VisibleStatus> {
        match self {
            Acronym::Lc => Some(VisibleStatus::LeastConcern),
            Acronym::Nt => Some(VisibleStatus::NearThreatened),
            Acronym::Vu => Some(VisibleStatus::Vulnerable),
            Acronym::En => Some(VisibleStatus::Endangered),
            Acronym::Cr => Some(VisibleStatus::CriticallyEndangered),
            Acronym::Ne | Acronym::Dd | Acronym::Ew | Acronym::Ex => None,
        }
    }

    /// Categories only mentioned in the "no species recorded" panel.
    pub fn is_panel_only(self) -> bool {
        matches!(self, Acronym::Ne | Acronym::Dd | Acronym::Ew | Acronym::Ex)
    }
}

impl fmt::Display for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleStatus {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
}

impl VisibleStatus {
    pub const ALL: [VisibleStatus; 5] = [
        VisibleStatus::LeastConcern,
        VisibleStatus::NearThreatened,
        VisibleStatus::Vulnerable,
        VisibleStatus::Endangered,
        VisibleStatus::CriticallyEndangered,
    ];

    pub fn acronym(self) -> Acronym {
        match self {
            VisibleStatus::LeastConcern => Acronym::Lc,
            VisibleStatus::NearThreatened => Acronym::Nt,
            VisibleStatus::Vulnerable => Acronym::Vu,
            VisibleStatus::Endangered => Acronym::En,
            VisibleStatus::CriticallyEndangered => Acronym::Cr,
        }
    }

    pub fn bar_color(self) -> &'static str {
        match self {
            VisibleStatus::LeastConcern => "#22c55e",
            VisibleStatus::NearThreatened => "#eab308",
            VisibleStatus::Vulnerable => "#f97316",
            VisibleStatus::Endangered => "#ef4444",
            VisibleStatus::CriticallyEndangered => "#b91c1c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationRecord {
    pub acronym: Acronym,
    pub status: String,
    pub count: u32,
    /// Shown as-is; never recomputed from `count`.
    pub percentage: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetCode {
    #[default]
    L1,
    L3,
}

impl DatasetCode {
    pub const ALL: [DatasetCode; 2] = [DatasetCode::L1, DatasetCode::L3];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetCode::L1 => "L1",
            DatasetCode::L3 => "L3",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }

    pub fn button_color(self) -> &'static str {
        match self {
            DatasetCode::L1 => "#6366f1",
            DatasetCode::L3 => "#d946ef",
        }
    }
}

impl fmt::Display for DatasetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a dataset inside a locale catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetTable {
    pub description: String,
    pub data: Vec<ConservationRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub code: DatasetCode,
    pub description: String,
    pub records: Vec<ConservationRecord>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset {code} lists {acronym} more than once")]
    DuplicateAcronym { code: DatasetCode, acronym: Acronym },
    #[error("dataset {code} has no {acronym} record")]
    MissingStatus { code: DatasetCode, acronym: Acronym },
}

impl Dataset {
    pub fn from_table(code: DatasetCode, table: DatasetTable) -> Result<Self, DatasetError> {
        let dataset = Self {
            code,
            description: table.description,
            records: table.data,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = Vec::with_capacity(self.records.len());
        for record in &self.records {
            if seen.contains(&record.acronym) {
                return Err(DatasetError::DuplicateAcronym {
                    code: self.code,
                    acronym: record.acronym,
                });
            }
            seen.push(record.acronym);
        }
        for status in VisibleStatus::ALL {
            if !seen.contains(&status.acronym()) {
                return Err(DatasetError::MissingStatus {
                    code: self.code,
                    acronym: status.acronym(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(acronym: Acronym, status: &str, count: u32, percentage: &str) -> ConservationRecord {
        ConservationRecord {
            acronym,
            status: status.to_string(),
            count,
            percentage: percentage.to_string(),
        }
    }

    pub fn l1() -> Dataset {
        Dataset {
            code: DatasetCode::L1,
            description: "Based to a Brazil location whitelist".to_string(),
            records: vec![
                record(Acronym::Ne, "Not Evaluated", 0, "0.00%"),
                record(Acronym::Dd, "Data Deficient", 0, "0.00%"),
                record(Acronym::Lc, "Least Concern", 634, "91.09%"),
                record(Acronym::Nt, "Near Threatened", 35, "5.03%"),
                record(Acronym::Vu, "Vulnerable", 18, "2.59%"),
                record(Acronym::En, "Endangered", 7, "1.01%"),
                record(Acronym::Cr, "Critically Endangered", 2, "0.29%"),
                record(Acronym::Ew, "Extinct in the Wild", 0, "0.00%"),
                record(Acronym::Ex, "Extinct", 0, "0.00%"),
            ],
        }
    }

    pub fn l3() -> Dataset {
        Dataset {
            code: DatasetCode::L3,
            description: "Species must be captured by two or more of the models".to_string(),
            records: vec![
                record(Acronym::Ne, "Not Evaluated", 0, "0.00%"),
                record(Acronym::Dd, "Data Deficient", 0, "0.00%"),
                record(Acronym::Lc, "Least Concern", 239, "95.22%"),
                record(Acronym::Nt, "Near Threatened", 7, "2.79%"),
                record(Acronym::Vu, "Vulnerable", 4, "1.59%"),
                record(Acronym::En, "Endangered", 1, "0.40%"),
                record(Acronym::Cr, "Critically Endangered", 0, "0.00%"),
                record(Acronym::Ew, "Extinct in the Wild", 0, "0.00%"),
                record(Acronym::Ex, "Extinct", 0, "0.00%"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn dataset_codes_parse_only_known_values() {
        assert_eq!(DatasetCode::parse("L1"), Some(DatasetCode::L1));
        assert_eq!(DatasetCode::parse("L3"), Some(DatasetCode::L3));
        assert_eq!(DatasetCode::parse("l1"), None);
        assert_eq!(DatasetCode::parse("L2"), None);
        assert_eq!(DatasetCode::default(), DatasetCode::L1);
    }

    #[test]
    fn acronyms_deserialize_from_uppercase_codes() {
        let record: ConservationRecord = serde_json::from_str(
            r#"{"acronym":"CR","status":"Critically Endangered","count":2,"percentage":"0.29%"}"#,
        )
        .unwrap();
        assert_eq!(record.acronym, Acronym::Cr);
        assert!(serde_json::from_str::<Acronym>(r#""XX""#).is_err());
    }

    #[test]
    fn every_acronym_is_either_a_bar_or_panel_only() {
        use Acronym::*;
        for acronym in [Ne, Dd, Lc, Nt, Vu, En, Cr, Ew, Ex] {
            assert_ne!(acronym.visible().is_some(), acronym.is_panel_only(), "{acronym}");
        }
    }

    #[test]
    fn reference_datasets_validate() {
        assert_eq!(l1().validate(), Ok(()));
        assert_eq!(l3().validate(), Ok(()));
    }

    #[test]
    fn duplicate_acronym_is_rejected() {
        let mut dataset = l1();
        dataset.records.push(record(Acronym::Lc, "Least Concern", 1, "0.1%"));
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::DuplicateAcronym { code: DatasetCode::L1, acronym: Acronym::Lc })
        );
    }

    #[test]
    fn missing_visible_status_is_rejected() {
        let mut dataset = l3();
        dataset.records.retain(|r| r.acronym != Acronym::Vu);
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::MissingStatus { code: DatasetCode::L3, acronym: Acronym::Vu })
        );
    }

    #[test]
    fn panel_only_records_are_optional() {
        let mut dataset = l1();
        dataset.records.retain(|r| !r.acronym.is_panel_only());
        assert_eq!(dataset.validate(), Ok(()));
    }
}
