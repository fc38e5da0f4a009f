//! Core module - tables, spec limits, binning, and unit lookup

pub mod dedupe;
pub mod histogram;
pub mod limits;
pub mod loader;
pub mod locate;
pub mod session;
pub mod table;

pub use dedupe::dedupe;
pub use histogram::{compute_histogram, DegenerateRangeError, Histogram, DEFAULT_BIN_COUNT};
pub use limits::{
    display_range, SpecLimits, SpecTable, VariableNotFoundError, DISPLAY_PAD_FACTOR,
};
pub use loader::{
    load_results, load_spec, FileLoadError, RESULT_KEY_COLUMN, SPEC_LSL_COLUMN, SPEC_NAME_COLUMN,
    SPEC_USL_COLUMN,
};
pub use locate::{locate, present_record, LocatedPoint, NotFoundError};
pub use session::Session;
pub use table::{Cell, DataTable};
