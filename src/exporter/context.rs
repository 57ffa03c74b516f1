use super::sinks::{ExportStats, TableSinks};
use crate::constants::CUSTODIAN_ELEMENT;
use crate::errors::AppResult;
use crate::models::{CustodianRow, TableRow};
use crate::parser::Element;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Clears the bar when dropped, so a failed export does not leave it half drawn.
struct ProgressDisplay(ProgressBar);

impl Drop for ProgressDisplay {
    fn drop(&mut self) {
        if !self.0.is_finished() {
            self.0.finish_and_clear();
        }
    }
}

/// Mutable state threaded through one export: the open table sinks, the set of
/// custodian codes already written, and the progress display.
pub struct ExportContext<W: Write> {
    sinks: TableSinks<W>,
    custodian_codes: HashSet<String>,
    progress: ProgressDisplay,
}

impl<W: Write> ExportContext<W> {
    pub fn new(sinks: TableSinks<W>) -> Self {
        Self {
            sinks,
            custodian_codes: HashSet::new(),
            progress: ProgressDisplay(ProgressBar::hidden()),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = ProgressDisplay(progress);
        self
    }

    pub fn emit<R: TableRow>(&mut self, row: &R) -> AppResult<()> {
        self.sinks.write(row)
    }

    pub(crate) fn tick(&self) {
        self.progress.0.inc(1);
    }

    pub fn stats(&self) -> &ExportStats {
        self.sinks.stats()
    }

    /// Writes the Custodian row for `parent`'s `<Custodian>` the first time its code
    /// is seen, and returns the code either way.
    ///
    /// Later references never overwrite the first row: field values come from the
    /// earliest Property or Structure in document order.
    pub fn register_custodian(&mut self, parent: &Element) -> AppResult<String> {
        let custodian = parent.required_child(CUSTODIAN_ELEMENT)?;
        let code = custodian.required_attr("code")?.to_string();

        if self.custodian_codes.contains(&code) {
            return Ok(code);
        }

        let row = CustodianRow {
            code: code.clone(),
            is_department: custodian.optional_attr("isDepartment"),
            is_agency: custodian.optional_attr("isAgency"),
            is_crown_corporation: custodian.optional_attr("isCrownCorporation"),
            portfolio_last_certified_date: custodian.optional_attr("portfolioLastCertifiedDate"),
            name: custodian.required_text("Name_E")?,
            contact_name: custodian.optional_text(&["Official_Contact_Name"]),
            contact_telephone: custodian.optional_text(&["Official_Contact_Telephone"]),
            contact_email: custodian.optional_text(&["Official_Contact_Email"]),
            contact_webform: custodian.optional_text(&["Official_Contact_Webform"]),
        };
        self.emit(&row)?;
        debug!(code = %code, name = %row.name, "New custodian");
        self.custodian_codes.insert(code.clone());

        Ok(code)
    }

    /// Finishes the progress display and flushes every sink.
    pub fn finish(self) -> AppResult<(ExportStats, Vec<W>)> {
        self.progress.0.finish_and_clear();
        let stats = self.sinks.stats().clone();
        let outputs = self.sinks.finish()?;
        Ok((stats, outputs))
    }
}
