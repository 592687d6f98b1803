// SPDX-License-Identifier: MPL-2.0
//! Page input validation.
//!
//! Pure function over the raw text of the page field, usable without any UI
//! toolkit.

use super::{PageCount, PageNumber, ValidationError};

/// Parses page-field text into a page of a document with `total_pages` pages.
///
/// Surrounding whitespace is ignored. The text must be a whole number with
/// `0 < n <= total_pages`; fractional values are rejected.
///
/// # Errors
///
/// - [`ValidationError::PageCountUnknown`] while the document has not loaded
/// - [`ValidationError::NotANumber`] for anything that is not an integer
/// - [`ValidationError::OutOfRange`] for integers outside the document
///
/// # Example
///
/// ```
/// use folio::domain::{validate_page_input, PageCount};
///
/// let total = PageCount::new(10);
/// assert_eq!(validate_page_input("7", total).unwrap().get(), 7);
/// assert!(validate_page_input("15", total).is_err());
/// ```
pub fn validate_page_input(
    text: &str,
    total_pages: Option<PageCount>,
) -> Result<PageNumber, ValidationError> {
    if total_pages.is_none() {
        return Err(ValidationError::PageCountUnknown);
    }
    let trimmed = text.trim();

    let requested: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;

    validate_page(requested, total_pages)
}

/// Checks that `requested` is a page of a document with `total_pages` pages.
///
/// # Errors
///
/// - [`ValidationError::PageCountUnknown`] while the document has not loaded
/// - [`ValidationError::OutOfRange`] unless `0 < requested <= total_pages`
pub fn validate_page(
    requested: i64,
    total_pages: Option<PageCount>,
) -> Result<PageNumber, ValidationError> {
    let total = total_pages.ok_or(ValidationError::PageCountUnknown)?;
    let out_of_range = ValidationError::OutOfRange {
        requested,
        total: total.get(),
    };

    let page = u32::try_from(requested)
        .ok()
        .and_then(PageNumber::new)
        .ok_or_else(|| out_of_range.clone())?;

    if page.is_within(total) {
        Ok(page)
    } else {
        Err(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> Option<PageCount> {
        PageCount::new(10)
    }

    #[test]
    fn accepts_every_page_in_range() {
        for n in 1..=10 {
            let page = validate_page_input(&n.to_string(), ten()).expect("in range");
            assert_eq!(page.get(), n);
        }
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(validate_page_input(" 7 ", ten()).unwrap().get(), 7);
    }

    #[test]
    fn rejects_zero_negative_and_past_end() {
        for text in ["0", "-3", "11", "15"] {
            assert!(
                matches!(
                    validate_page_input(text, ten()),
                    Err(ValidationError::OutOfRange { .. })
                ),
                "{text} should be out of range"
            );
        }
    }

    #[test]
    fn rejects_non_integers() {
        for text in ["", "abc", "7.5", "3e1", "seven"] {
            assert!(
                matches!(
                    validate_page_input(text, ten()),
                    Err(ValidationError::NotANumber(_))
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_everything_before_load() {
        assert_eq!(
            validate_page_input("1", None),
            Err(ValidationError::PageCountUnknown)
        );
    }

    #[test]
    fn huge_values_are_out_of_range_not_overflow() {
        assert!(matches!(
            validate_page_input("99999999999", ten()),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn numeric_pages_use_the_same_bounds() {
        assert_eq!(validate_page(10, ten()).unwrap().get(), 10);
        assert_eq!(
            validate_page(0, ten()),
            Err(ValidationError::OutOfRange { requested: 0, total: 10 })
        );
        assert_eq!(
            validate_page(i64::MAX, ten()),
            Err(ValidationError::OutOfRange { requested: i64::MAX, total: 10 })
        );
        assert_eq!(validate_page(1, None), Err(ValidationError::PageCountUnknown));
    }
}
