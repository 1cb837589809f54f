mod line_calculator;
mod line_collection;

pub use line_calculator::{
    compute_line_total, LineBreakdown, LineCalculator, LINE_TOTAL_SCALE, MAX_QUANTITY,
    MAX_TAX_PERCENT, MAX_UNIT_PRICE,
};
pub use line_collection::LineCollection;
