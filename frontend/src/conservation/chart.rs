use super::model::{ConservationRecord, Dataset, DatasetCode, VisibleStatus};

/// Which dataset the chart shows. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    current: DatasetCode,
}

impl Selection {
    pub fn current(&self) -> DatasetCode {
        self.current
    }

    /// Switches to `code` if it names a known dataset. Unknown codes leave the
    /// current selection untouched.
    pub fn select(&mut self, code: &str) -> bool {
        match DatasetCode::parse(code) {
            Some(code) => self.select_code(code),
            None => {
                log::debug!("ignoring unknown dataset code {:?}", code);
                false
            }
        }
    }

    /// Reads a URL fragment such as `#L3`. An empty fragment is not a request.
    pub fn select_from_hash(&mut self, hash: &str) -> bool {
        let code = hash.trim_start_matches('#');
        !code.is_empty() && self.select(code)
    }

    pub fn select_code(&mut self, code: DatasetCode) -> bool {
        let changed = self.current != code;
        self.current = code;
        changed
    }
}

/// A record that is drawn as a bar, with its color-carrying status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRecord<'a> {
    pub status: VisibleStatus,
    pub record: &'a ConservationRecord,
}

impl VisibleRecord<'_> {
    pub fn color(&self) -> &'static str {
        self.status.bar_color()
    }
}

pub fn visible_records(dataset: &Dataset) -> Vec<VisibleRecord<'_>> {
    dataset
        .records
        .iter()
        .filter_map(|record| {
            record
                .acronym
                .visible()
                .map(|status| VisibleRecord { status, record })
        })
        .collect()
}

/// Panel-only categories with no recorded species. An empty result means the
/// panel is not rendered.
pub fn zero_records(dataset: &Dataset) -> Vec<&ConservationRecord> {
    dataset
        .records
        .iter()
        .filter(|record| record.count == 0 && record.acronym.is_panel_only())
        .collect()
}

/// Bar height in percent of the tallest visible bar, to two decimals.
pub fn bar_height(record: &ConservationRecord, visible: &[VisibleRecord<'_>]) -> f64 {
    let max = visible.iter().map(|v| v.record.count).max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    let ratio = f64::from(record.count) / f64::from(max) * 100.0;
    (ratio * 100.0).round() / 100.0
}
