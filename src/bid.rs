//! The record stored in the tree.

use std::fmt;

/// A single procurement bid. Bids are keyed by `id`, which is compared as a
/// string: `"100"` sorts before `"99"`.
///
/// The [`Default`] bid has an empty `id` and can be used as a "not found"
/// placeholder by callers that prefer it over `Option`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    /// Unique identifier and search key.
    pub id: String,
    /// What was bid on.
    pub title: String,
    /// The fund the bid is charged to.
    pub fund: String,
    /// The bid amount with the currency symbol stripped.
    pub amount: f64,
}

impl Bid {
    /// Creates a new bid.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }

    /// The long form used when listing the tree or reporting a removal.
    ///
    /// ```
    /// use bidtree::Bid;
    ///
    /// let bid = Bid::new("98109", "Chair", "General Fund", 12.5);
    /// assert_eq!(
    ///     bid.detail().to_string(),
    ///     "Bid ID: 98109 || Bid Title: Chair || Bid Amount: 12.5 || Bid Fund: General Fund"
    /// );
    /// ```
    pub fn detail(&self) -> Detail<'_> {
        Detail(self)
    }
}

/// Short form: `<id>: <title> | <amount> | <fund>`.
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id,
            self.title,
            Amount(self.amount),
            self.fund
        )
    }
}

/// Display adapter returned by [`Bid::detail`].
pub struct Detail<'a>(&'a Bid);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bid = self.0;
        write!(
            f,
            "Bid ID: {} || Bid Title: {} || Bid Amount: {} || Bid Fund: {}",
            bid.id,
            bid.title,
            Amount(bid.amount),
            bid.fund
        )
    }
}

/// Significant digits printed for an amount.
const PRECISION: i32 = 6;

/// Prints a number the way C's `%g` does: six significant digits, trailing
/// zeros dropped, scientific notation below `1e-4` or from `1e6` up.
struct Amount(f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 || !value.is_finite() {
            return write!(f, "{}", value);
        }

        // Rounding to the precision first decides which notation is used.
        let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let (mantissa, exponent) = match scientific
            .split_once('e')
            .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        {
            Some(parts) => parts,
            None => return write!(f, "{}", value),
        };

        if exponent < -4 || exponent >= PRECISION {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_zeros(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let fixed = format!("{:.*}", (PRECISION - 1 - exponent) as usize, value);
            f.write_str(trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
