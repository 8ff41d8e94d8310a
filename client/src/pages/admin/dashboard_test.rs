use super::*;

#[test]
fn excel_extensions_are_accepted() {
    for name in ["faq.xlsx", "faq.xls", "FAQ.XLSX", "training.data.Xls"] {
        assert_eq!(validate_upload_name(Some(name)), Ok(()), "{name}");
    }
}

#[test]
fn missing_file_is_rejected() {
    assert_eq!(validate_upload_name(None), Err(ApiError::validation(NO_FILE_MESSAGE)));
    assert_eq!(validate_upload_name(Some("  ")), Err(ApiError::validation(NO_FILE_MESSAGE)));
}

#[test]
fn other_extensions_are_rejected() {
    for name in ["faq.csv", "faq.xlsx.exe", "xlsx", "faq.xlsm"] {
        assert_eq!(validate_upload_name(Some(name)), Err(ApiError::validation(WRONG_EXTENSION_MESSAGE)), "{name}");
    }
}

#[test]
fn file_name_strips_fake_path() {
    assert_eq!(file_name_from_input("C:\\fakepath\\faq.xlsx"), Some("faq.xlsx".to_owned()));
    assert_eq!(file_name_from_input("faq.xls"), Some("faq.xls".to_owned()));
    assert_eq!(file_name_from_input(""), None);
}

#[test]
fn toggle_flips_known_status() {
    assert_eq!(toggle_target(Some(FineTuneStatus::Enabled)), FineTuneStatus::Disabled);
    assert_eq!(toggle_target(Some(FineTuneStatus::Disabled)), FineTuneStatus::Enabled);
}

#[test]
fn toggle_offers_enable_when_status_unknown() {
    assert_eq!(toggle_target(None), FineTuneStatus::Enabled);
    assert_eq!(toggle_label(None), "Enable");
    assert_eq!(toggle_label(Some(FineTuneStatus::Enabled)), "Disable");
}
