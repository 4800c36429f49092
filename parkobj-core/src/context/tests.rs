use super::{ObjectError, ReadContext, Severity};
use crate::retriever::Asset;

#[test]
fn test_flags_are_sticky() {
    let mut ctx = ReadContext::new("TEST", false);
    assert!(!ctx.was_warning() && !ctx.was_error());

    ctx.log_warning(ObjectError::BadImageTable, "short");
    assert!(ctx.was_warning());
    assert!(!ctx.was_error());

    ctx.log_error(ObjectError::InvalidProperty, "bad");
    ctx.log_verbose(ObjectError::Ok, "note");
    assert!(ctx.was_warning());
    assert!(ctx.was_error());
    assert!(ctx.was_verbose());

    let severities: Vec<_> = ctx.diagnostics().iter().map(|d| d.severity).collect();
    assert_eq!(severities, [Severity::Warning, Severity::Error, Severity::Verbose]);
}

#[test]
fn test_diagnostic_display() {
    let mut ctx = ReadContext::new("TEST", false);
    ctx.log_error(ObjectError::InvalidProperty, "Price can not be free or negative.");
    assert_eq!(ctx.diagnostics()[0].to_string(), "Error (3): Price can not be free or negative.");
}

#[test]
fn test_no_retriever() {
    let ctx = ReadContext::new("TEST", true);
    assert_eq!(ctx.get_data("anything.png").unwrap(), Vec::<u8>::new());
    assert_eq!(ctx.get_asset("anything.ogg"), Asset::Missing);
    assert!(ctx.should_load_images());
    assert_eq!(ctx.identifier(), "TEST");
}
