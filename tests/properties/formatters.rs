//! Property tests for formatter variants.

use proptest::prelude::*;

use solid_demo::{Formatter, HtmlFormatter, PdfFormatter, PlainFormatter};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: PDF formatting is the tag followed by the input.
    #[test]
    fn property_pdf_is_tag_plus_input(data in "(?s).{0,256}") {
        prop_assert_eq!(PdfFormatter.format(&data), format!("PDF: {}", data));
    }

    /// PROPERTY: plain formatting is the identity.
    #[test]
    fn property_plain_is_identity(data in "(?s).{0,256}") {
        prop_assert_eq!(PlainFormatter.format(&data), data);
    }

    /// PROPERTY: HTML formatting wraps without altering the input.
    #[test]
    fn property_html_wraps(data in "(?s).{0,256}") {
        let out = HtmlFormatter.format(&data);
        prop_assert!(out.starts_with("<p>"));
        prop_assert!(out.ends_with("</p>"));
        prop_assert_eq!(&out[3..out.len() - 4], data.as_str());
    }
}
