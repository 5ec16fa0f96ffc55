use std::fmt;

use demand_consumer::{Bundle, IncomeMatch};

/// What a command found, ready for printing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    Bundle(Bundle),
    Matched(IncomeMatch),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundle(bundle) => write_bundle(f, bundle),
            Self::Matched(matched) => {
                write_bundle(f, &matched.bundle)?;
                writeln!(f, "utility:\t{:.2}", matched.utility)?;
                writeln!(f, "expenditure:\t{:.2}", matched.expenditure)
            }
        }
    }
}

fn write_bundle(f: &mut fmt::Formatter<'_>, bundle: &Bundle) -> fmt::Result {
    writeln!(f, "bundle:\t({:.2}, {:.2})", bundle.x1, bundle.x2)
}
