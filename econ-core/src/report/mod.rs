//! Tabular summary report of a unit economics scenario.
//!
//! [`build_report`] lays the summary and the three cost breakdowns out as
//! rows of text cells; [`csv`] turns those rows into the downloadable file.

pub mod csv;

use rust_decimal::Decimal;

use crate::calculations::common::{round_to_tenth, round_to_won_ties_up};
use crate::{CostItem, DerivedMetrics, PricingInput};

pub use self::csv::{CSV_FILE_NAME, CSV_MIME_TYPE, CsvExport, escape_cell, to_csv};

const ITEM_HEADER: [&str; 2] = ["항목", "금액(원)"];

/// One row of the report. A row with no cells renders as a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    cells: Vec<String>,
}

impl ReportRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lays out the report rows for a scenario.
///
/// `effective_fixed_items` should already carry the loan and rent lines so
/// the fixed section matches `metrics.total_fixed`.
pub fn build_report(
    pricing: &PricingInput,
    metrics: &DerivedMetrics,
    variable_items: &[CostItem],
    effective_fixed_items: &[CostItem],
    sunk_items: &[CostItem],
) -> Vec<ReportRow> {
    let mut rows = vec![
        ReportRow::new(["유닛 이코노믹스 저장"]),
        ReportRow::new(["제품명", pricing.product_name.as_str()]),
        ReportRow::new(["목표 판매가".to_string(), format_amount(pricing.target_price)]),
        ReportRow::new(["마진율(%)".to_string(), format_percent(metrics.margin_percent)]),
        ReportRow::new([
            "월 예상 순이익".to_string(),
            format_amount(round_to_won_ties_up(metrics.monthly_profit)),
        ]),
        ReportRow::new([
            "손익분기점(판매수량)".to_string(),
            metrics.breakeven_units.to_string(),
        ]),
        ReportRow::blank(),
    ];

    let sections = [
        ("변동비 항목", variable_items, "변동비 합계", metrics.total_variable),
        ("고정비 항목", effective_fixed_items, "고정비 합계", metrics.total_fixed),
        ("초기 투자 비용 (PSI)", sunk_items, "PSI 합계", metrics.total_sunk),
    ];
    for (index, (title, items, total_label, total)) in sections.into_iter().enumerate() {
        if index > 0 {
            rows.push(ReportRow::blank());
        }
        push_section(&mut rows, title, items, total_label, total);
    }

    rows
}

fn push_section(
    rows: &mut Vec<ReportRow>,
    title: &str,
    items: &[CostItem],
    total_label: &str,
    total: Decimal,
) {
    rows.push(ReportRow::new([title]));
    rows.push(ReportRow::new(ITEM_HEADER));
    rows.extend(
        items
            .iter()
            .map(|item| ReportRow::new([item.name.clone(), format_amount(item.amount)])),
    );
    rows.push(ReportRow::new([total_label.to_string(), format_amount(total)]));
}

/// Plain-form amount: no exponent, no trailing fractional zeros.
fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Margin with exactly one decimal place, `-0.0` shown as `0.0`.
fn format_percent(value: Decimal) -> String {
    let mut rounded = round_to_tenth(value);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(1);
    rounded.to_string()
}
